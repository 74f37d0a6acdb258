//! Error types for port operations.

use yonokomae_domain::DomainError;

/// Repository operation errors with context for debugging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoError {
    /// A seed or payload failed the battle schema. Authoring bug, never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An external service answered with a non-2xx status.
    #[error("HTTP error from {service}: status {status}")]
    Http { service: &'static str, status: u16 },

    /// The request never produced a status (DNS, connection reset, ...).
    #[error("Network error contacting {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    /// An external payload was structurally incomplete or invalid.
    #[error("Data error: {0}")]
    Data(String),

    /// The caller cancelled the operation.
    #[error("Operation cancelled")]
    Cancelled,

    /// Misconfiguration, such as an unknown play mode.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A named record does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl RepoError {
    pub fn http(service: &'static str, status: u16) -> Self {
        Self::Http { service, status }
    }

    pub fn network(service: &'static str, message: impl ToString) -> Self {
        Self::Network {
            service,
            message: message.to_string(),
        }
    }

    pub fn data(message: impl ToString) -> Self {
        Self::Data(message.to_string())
    }

    pub fn configuration(message: impl ToString) -> Self {
        Self::Configuration(message.to_string())
    }

    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Failures of an external source that the news fallback chain absorbs.
    pub fn is_recoverable_source_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Network { .. } | Self::Data(_)
        )
    }
}

impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Parse(msg) => Self::Validation(msg),
            DomainError::UnknownPlayMode(id) => {
                Self::Configuration(format!("unknown play mode '{id}'"))
            }
        }
    }
}
