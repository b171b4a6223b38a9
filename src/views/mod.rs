mod contact;
mod experience;
mod footer;
mod hero;
mod home;
mod layout;
mod navbar;
mod not_found;
mod projects;
mod skills;

pub use contact::Contact;
pub use experience::Experience;
pub use footer::{ copyright_line, Footer };
pub use hero::{ initials, Hero };
pub use home::Home;
pub use layout::PageLayout;
pub use navbar::{ Navbar, SECTION_LINKS };
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
