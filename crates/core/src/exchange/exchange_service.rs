use rust_decimal::{Decimal, RoundingStrategy};

use super::amount_parser::AmountParser;
use super::exchange_errors::ExchangeError;
use super::rate_table::RateTable;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Composes validation, parsing, rate lookup, rounding, and formatting
/// into a single conversion operation.
///
/// Holds only immutable state (the table and the compiled parser), so one
/// instance can serve any number of concurrent requests.
pub struct ExchangeService {
    table: RateTable,
    parser: AmountParser,
}

impl ExchangeService {
    pub fn new(table: RateTable) -> Self {
        let parser = AmountParser::new(&table);
        Self { table, parser }
    }

    /// Checks that both currency codes are supported. The source is checked
    /// first; when both are invalid only the source error surfaces.
    pub fn validate_currencies(&self, source: &str, target: &str) -> Result<()> {
        if source.is_empty() || !self.table.contains(source) {
            return Err(ExchangeError::UnsupportedSourceCurrency.into());
        }
        if target.is_empty() || !self.table.contains(target) {
            return Err(ExchangeError::UnsupportedTargetCurrency.into());
        }
        Ok(())
    }

    /// Parses an amount string against the symbol registered for `source`.
    pub fn parse_amount(&self, amount_str: &str, source: &str) -> Result<Decimal> {
        let expected_symbol = self.table.symbol(source);
        Ok(self.parser.parse(amount_str, expected_symbol)?)
    }

    /// Converts `amount_str` from `source` to `target` and returns the
    /// formatted result, e.g. `"¥13,717.32"`.
    pub fn convert(&self, source: &str, target: &str, amount_str: &str) -> Result<String> {
        self.validate_currencies(source, target)?;
        let amount = self.parse_amount(amount_str, source)?;

        let rate = self.table.rate(source, target).ok_or_else(|| {
            // Unreachable after validation; kept as a hard error rather
            // than a panic.
            log::error!("No rate for validated pair {} -> {}", source, target);
            Error::Unexpected(format!("missing rate for {}/{}", source, target))
        })?;

        // A grammar-valid amount can still be large enough to overflow the
        // 96-bit product, so the multiply must not panic.
        let product = amount.checked_mul(rate).ok_or_else(|| {
            log::error!("Overflow converting {} from {} to {}", amount, source, target);
            Error::Unexpected(format!("conversion overflow for {}/{}", source, target))
        })?;

        let converted = product.round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        Ok(format_amount(converted, self.table.symbol(target)))
    }
}

/// Formats a rounded amount with thousands separators, exactly two
/// fractional digits, and the display symbol prefix.
fn format_amount(value: Decimal, symbol: &str) -> String {
    let fixed = format!("{:.1$}", value, DISPLAY_DECIMAL_PRECISION as usize);
    let (integer_part, fractional_part) = match fixed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (fixed.as_str(), "00"),
    };

    let digits = integer_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", symbol, grouped, fractional_part)
}
