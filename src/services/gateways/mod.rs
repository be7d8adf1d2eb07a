mod http_auth;
mod http_members;
mod http_partners;
mod http_projects;
mod in_memory;

pub use http_auth::*;
pub use http_members::*;
pub use http_partners::*;
pub use http_projects::*;
pub use in_memory::*;
