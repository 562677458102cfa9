// Library root for the ping demo API

pub mod api;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{apply_middleware, create_app};
pub use crate::services::{PingService, PingServiceProvider, ServiceScope};
pub use crate::utils::AppError;
