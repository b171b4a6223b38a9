mod icon;
mod section;
mod theme_root;
mod theme_toggle;

pub use icon::{ Icon, IconKind };
pub use section::Section;
pub use theme_root::ThemeRoot;
pub use theme_toggle::ThemeToggle;
