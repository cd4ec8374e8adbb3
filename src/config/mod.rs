pub mod database;
pub mod error;
pub mod server;

pub use error::ConfigError;
