//! Error types for calendar provider operations.

use std::fmt;
use thiserror::Error;

/// The category of a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// Transport failure: connection failed, timeout, DNS resolution.
    Network,
    /// The server answered with a non-success HTTP status.
    Protocol,
    /// The response body was not well-formed.
    Decode,
}

impl ProviderErrorCode {
    /// Returns a short name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Protocol => "protocol_error",
            Self::Decode => "decode_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while fetching events from the calendar provider.
///
/// Errors are annotated with the configured source name before they leave
/// the fetch layer, so logs can attribute a failure without extra context.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    source_name: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Creates a new provider error with the given code and message.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source_name: None,
            source: None,
        }
    }

    /// Creates a network (transport) error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Network, message)
    }

    /// Creates a protocol (non-success status) error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Protocol, message)
    }

    /// Creates a decode (malformed response) error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Decode, message)
    }

    /// Annotates this error with the configured source name.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Sets the underlying cause of this error.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(cause));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source name, if this error has been attributed.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.source_name {
            write!(f, "[{}] ", name)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
