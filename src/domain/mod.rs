mod contact;
mod display_name;
mod email;
mod email_client;
mod error;
mod exec_role;
mod gateways;
mod image_upload;
mod member;
mod modal;
mod notice;
mod partner;
mod project;
mod session;

pub use contact::*;
pub use display_name::*;
pub use email::*;
pub use email_client::*;
pub use error::*;
pub use exec_role::*;
pub use gateways::*;
pub use image_upload::*;
pub use member::*;
pub use modal::*;
pub use notice::*;
pub use partner::*;
pub use project::*;
pub use session::*;
