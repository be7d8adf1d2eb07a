pub mod emailjs_client;
pub mod gateways;
pub mod query_cache;
