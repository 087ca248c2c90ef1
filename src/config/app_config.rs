use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "EMBEDDING_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which scoring strategy the relay runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Provider computes sentence similarity itself
    #[default]
    Direct,
    /// Fetch two embeddings and compare locally
    Embedding,
}

/// Upstream provider settings.
///
/// `api_key` has no default; [`AppConfig::validate`] rejects a missing key.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            api_key: None,
            base_url: None,
            model: None,
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured credential, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local`, `APP__*` variables and the
    /// `PORT` / `EMBEDDING_API_KEY` overrides, in increasing precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var(PORT_ENV).ok())?
            .set_override_option("provider.api_key", std::env::var(API_KEY_ENV).ok())?;

        builder.build()?.try_deserialize()
    }

    /// Reject configurations the relay cannot start with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.provider.api_key().is_none() {
            return Err(DomainError::configuration(format!(
                "Provider API key is not set; export {} or APP__PROVIDER__API_KEY",
                API_KEY_ENV
            )));
        }

        if self.provider.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "provider.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.provider.kind, ProviderKind::Direct);
        assert_eq!(config.provider.timeout(), Duration::from_secs(30));
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_file_values() {
        let config = from_toml(
            r#"
            [server]
            port = 8081

            [logging]
            format = "json"

            [provider]
            kind = "embedding"
            api_key = "sk-test"
            model = "text-embedding-3-large"
            timeout_secs = 5
            "#,
        );

        assert_eq!(config.server.port, 8081);
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.provider.kind, ProviderKind::Embedding);
        assert_eq!(config.provider.api_key(), Some("sk-test"));
        assert_eq!(config.provider.model.as_deref(), Some("text-embedding-3-large"));
        assert_eq!(config.provider.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();

        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_validate_rejects_blank_api_key() {
        let mut config = AppConfig::default();
        config.provider.api_key = Some("   ".to_string());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.provider.api_key = Some("hf_test".to_string());
        config.provider.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let mut config = AppConfig::default();
        config.provider.api_key = Some("hf_test".to_string());

        assert!(config.validate().is_ok());
    }

    // Serializes tests that mutate process environment variables
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    const LOAD_VARS: [(&str, &str); 5] = [
        (PORT_ENV, "4321"),
        (API_KEY_ENV, "hf_env"),
        ("APP__PROVIDER__KIND", "embedding"),
        ("APP__PROVIDER__TIMEOUT_SECS", "7"),
        ("APP__SERVER__PORT", "9999"),
    ];

    #[test]
    fn test_load_applies_environment_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: env mutation is serialized by ENV_LOCK
        unsafe {
            for (name, value) in LOAD_VARS {
                std::env::set_var(name, value);
            }
        }

        let loaded = AppConfig::load();

        // SAFETY: env mutation is serialized by ENV_LOCK
        unsafe {
            for (name, _) in LOAD_VARS {
                std::env::remove_var(name);
            }
        }

        let config = loaded.unwrap();

        assert_eq!(config.server.port, 4321);
        assert_eq!(config.provider.api_key(), Some("hf_env"));
        assert_eq!(config.provider.kind, ProviderKind::Embedding);
        assert_eq!(config.provider.timeout(), Duration::from_secs(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = ProviderConfig::default();
        config.api_key = Some("hf_secret".to_string());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
