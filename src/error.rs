//! Error Types
//!
//! Everything that can go wrong talking to the backend. Screens show the
//! `Display` text in a dismissible notice.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never completed (offline, DNS, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Body was not JSON or did not match the record schema
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request timed out after {millis} ms")]
    Timeout { millis: u32 },
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Map a status code to `Ok` for 2xx and `FetchError::Http` otherwise
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status })
    }
}

/// Problems with the user edit form, caught before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Age must be a whole number, got \"{0}\"")]
    InvalidAge(String),
}
