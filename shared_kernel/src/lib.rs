pub mod configuration;
pub mod date_time;
pub mod http_client;
mod ids;
pub mod tracing;
