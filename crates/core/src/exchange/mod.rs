//! Exchange module - rate table, amount parsing, and conversion service.

mod amount_parser;
mod exchange_errors;
mod exchange_service;
mod rate_table;

pub use amount_parser::AmountParser;
pub use exchange_errors::ExchangeError;
pub use exchange_service::ExchangeService;
pub use rate_table::RateTable;
