//! Address resolution errors.
//!
//! Every variant classifies the request as malformed. None of them are
//! transient, so callers answer with a 4xx and never retry.

use thiserror::Error;

/// Reasons a request URL does not carry a usable application address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The path matches neither the instance-qualified nor the unqualified grammar.
    #[error("Error parsing URL.")]
    MalformedAddress,

    /// The app-name segment is empty or blank.
    #[error("Error parsing URL: name of app not found in URL.")]
    MissingAppName,

    /// The instance segment is empty or blank.
    #[error("Error parsing URL: name of instance not found in URL.")]
    MissingInstanceName,

    /// The instance segment is too long or contains characters outside `[A-Za-z0-9_.-]`.
    #[error("Error parsing URL: name of instance contains invalid characters or is too long.")]
    InvalidInstanceName,
}

impl AddressError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AddressError::MalformedAddress => "malformed_address",
            AddressError::MissingAppName => "missing_app_name",
            AddressError::MissingInstanceName => "missing_instance_name",
            AddressError::InvalidInstanceName => "invalid_instance_name",
        }
    }
}
