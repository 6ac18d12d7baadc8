//! QuickFx Core - Currency exchange domain logic.
//!
//! This crate contains the business logic for the exchange service:
//! the static rate/symbol tables, the amount-string parser, and the
//! conversion service. It is transport-agnostic; the HTTP surface lives
//! in the `server` app.

pub mod constants;
pub mod errors;
pub mod exchange;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
