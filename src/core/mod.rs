// src/core/mod.rs
//! Gateway to the platform API and process configuration

pub mod config_manager;
pub mod error;
pub mod gateway;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use error::{ApiError, ApiResult};
pub use gateway::ConsoleApi;
pub use service_client::ServiceClient;
