use graftline_core::models::lead::LeadValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or non-2xx response. Recoverable by user-initiated retry.
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// Local validation rejected the submission before any request was made.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<LeadValidationError>),
}
