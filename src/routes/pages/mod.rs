mod contact;
mod home;
mod members;
mod not_found;
mod portfolio;
mod recruitment;

pub use contact::*;
pub use home::*;
pub use members::*;
pub use not_found::*;
pub use portfolio::*;
pub use recruitment::*;
