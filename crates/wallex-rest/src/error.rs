//! Error types for REST API operations

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network, DNS, or TLS failure before a response was received
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Server answered with a status other than 200
    #[error("Request failed with HTTP status {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// HTTP 200 but the envelope carried `success: false`
    #[error("Exchange rejected request: {message}")]
    ExchangeRejected {
        /// Message passed through verbatim from the exchange
        message: String,
    },

    /// Body is not valid JSON or does not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A numeric-string field could not be parsed
    #[error("Invalid number in field '{field}': {value:?}")]
    FieldFormat {
        /// Path of the offending field (e.g. `ask[2].price`)
        field: String,
        /// Raw value as received
        value: String,
    },

    /// Single-item lookup found no matching entry
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing API credentials for an account endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl RestError {
    /// Prefix the location carried by a decode error with an outer path segment
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn within(self, prefix: &str) -> Self {
        match self {
            Self::FieldFormat { field, value } => Self::FieldFormat {
                field: format!("{}.{}", prefix, field),
                value,
            },
            Self::MalformedResponse(reason) => {
                Self::MalformedResponse(format!("{}: {}", prefix, reason))
            }
            other => other,
        }
    }

    /// HTTP status, for `RequestFailed`
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Check if a caller-side retry could plausibly succeed
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_retryable(),
            Self::RequestFailed { status } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if this is a failed single-item lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
