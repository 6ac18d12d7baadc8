use std::collections::BTreeSet;

use regex::Regex;
use rust_decimal::Decimal;

use super::exchange_errors::ExchangeError;
use super::rate_table::RateTable;

/// Parser for symbol-prefixed, comma-grouped amount strings.
///
/// Grammar, anchored over the whole input:
/// `^([<symbols>])?(\d{1,3}(?:,\d{3})*)(\.\d+)?$`
///
/// * optional single leading display symbol (one of the symbols registered
///   in the rate table),
/// * integer part of 1-3 digits followed by comma-separated groups of
///   exactly 3 digits,
/// * optional fractional part of a literal dot and one or more digits.
///
/// The symbol character class is compiled from the table at construction
/// time, so the parser stays in sync with whatever currencies the table
/// carries.
#[derive(Debug)]
pub struct AmountParser {
    pattern: Regex,
}

impl AmountParser {
    pub fn new(table: &RateTable) -> Self {
        // BTreeSet dedupes shared glyphs ($ is used by both TWD and USD)
        let class: String = table
            .symbols()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(regex::escape)
            .collect();
        let pattern = Regex::new(&format!(r"^([{}])?(\d{{1,3}}(?:,\d{{3}})*)(\.\d+)?$", class))
            .expect("Invalid amount pattern");
        Self { pattern }
    }

    /// Parses `amount_str` into an exact decimal, checking its leading
    /// symbol against `expected_symbol` (the one registered for the source
    /// currency).
    ///
    /// A string that fails the grammar is an `InvalidAmountFormat`; a
    /// structurally valid string whose symbol is absent or different is a
    /// `SymbolMismatch`.
    pub fn parse(&self, amount_str: &str, expected_symbol: &str) -> Result<Decimal, ExchangeError> {
        let caps = self
            .pattern
            .captures(amount_str)
            .ok_or(ExchangeError::InvalidAmountFormat)?;

        let symbol = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if symbol != expected_symbol {
            return Err(ExchangeError::SymbolMismatch);
        }

        let integer_part: Decimal = caps[2]
            .replace(',', "")
            .parse()
            .map_err(|_| ExchangeError::InvalidAmountFormat)?;

        // The fractional capture keeps its leading dot, so it already has
        // the right positional weight and can simply be added.
        match caps.get(3) {
            Some(frac) => {
                let fractional_part: Decimal = format!("0{}", frac.as_str())
                    .parse()
                    .map_err(|_| ExchangeError::InvalidAmountFormat)?;
                Ok(integer_part + fractional_part)
            }
            None => Ok(integer_part),
        }
    }
}
