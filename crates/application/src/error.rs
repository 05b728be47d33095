//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External provider unreachable or answered with a failure status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider answered but had nothing for the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider answered with data that violates its own contract
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// No route can be shown for the current endpoints
    #[error("No route available: {0}")]
    RouteUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
