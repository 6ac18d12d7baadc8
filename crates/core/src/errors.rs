//! Core error types for the exchange service.
//!
//! Transport-agnostic: the server layer decides how each variant maps to
//! an HTTP status and response envelope.

use thiserror::Error;

use crate::exchange::ExchangeError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Exchange(#[from] ExchangeError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
