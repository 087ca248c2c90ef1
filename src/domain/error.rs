use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - HTTP {status}: {body}")]
    ProviderRejected {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Invalid vector: {message}")]
    InvalidVector { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider_rejected(
        provider: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::ProviderRejected {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_vector(message: impl Into<String>) -> Self {
        Self::InvalidVector {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Re-attribute an error raised by the shared HTTP client to a named provider
    pub fn with_provider(self, name: &str) -> Self {
        match self {
            Self::ProviderRejected { status, body, .. } => Self::ProviderRejected {
                provider: name.to_string(),
                status,
                body,
            },
            Self::Provider { message, .. } => Self::Provider {
                provider: name.to_string(),
                message,
            },
            other => other,
        }
    }
}
