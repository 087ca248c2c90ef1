//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingConfig, ProviderConfig, ProviderKind, ServerConfig, API_KEY_ENV,
    PORT_ENV,
};
