pub mod config;
pub mod error;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod tracing_init;
