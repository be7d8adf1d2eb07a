pub mod auth;
pub mod constants;
pub mod flash;
pub mod tracing;
