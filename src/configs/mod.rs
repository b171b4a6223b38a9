mod env_validate;
mod site;

pub(crate) use env_validate::{ endpoint_override, resolve_endpoint };
pub use site::SiteContent;
