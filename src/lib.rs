pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use config::GatewayConfig;
pub use startup::{AppState, Application};
