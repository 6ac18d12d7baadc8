use thiserror::Error;

/// Errors surfaced to the caller by validation, parsing, or conversion.
///
/// The display strings are part of the API contract and are returned
/// verbatim in the error envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("The source currency is not supported")]
    UnsupportedSourceCurrency,

    #[error("The target currency is not supported")]
    UnsupportedTargetCurrency,

    #[error("Invalid amount format")]
    InvalidAmountFormat,

    #[error("Currency symbol is not match source currency")]
    SymbolMismatch,
}
