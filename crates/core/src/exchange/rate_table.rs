use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::UNKNOWN_SYMBOL;

/// Static conversion table: source currency -> target currency -> fixed
/// multiplier, plus a display-symbol map. Built once at startup and never
/// mutated afterwards.
///
/// Invariant: every supported currency maps to itself with multiplier 1.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, HashMap<String, Decimal>>,
    symbols: HashMap<String, &'static str>,
}

impl RateTable {
    pub fn new(
        rates: HashMap<String, HashMap<String, Decimal>>,
        symbols: HashMap<String, &'static str>,
    ) -> Self {
        Self { rates, symbols }
    }

    /// The built-in table used when no other rate source is injected.
    pub fn builtin() -> Self {
        let mut rates = HashMap::new();
        rates.insert(
            "TWD".to_string(),
            HashMap::from([
                ("TWD".to_string(), Decimal::ONE),
                ("JPY".to_string(), dec!(3.669)),
                ("USD".to_string(), dec!(0.03281)),
            ]),
        );
        rates.insert(
            "JPY".to_string(),
            HashMap::from([
                ("TWD".to_string(), dec!(0.26956)),
                ("JPY".to_string(), Decimal::ONE),
                ("USD".to_string(), dec!(0.00885)),
            ]),
        );
        rates.insert(
            "USD".to_string(),
            HashMap::from([
                ("TWD".to_string(), dec!(30.444)),
                ("JPY".to_string(), dec!(111.801)),
                ("USD".to_string(), Decimal::ONE),
            ]),
        );

        let symbols = HashMap::from([
            ("TWD".to_string(), "$"),
            ("JPY".to_string(), "¥"),
            ("USD".to_string(), "$"),
        ]);

        Self::new(rates, symbols)
    }

    /// Whether `code` is a supported source currency.
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Fixed multiplier for the pair. `None` only if a code slipped past
    /// validation.
    pub fn rate(&self, source: &str, target: &str) -> Option<Decimal> {
        self.rates.get(source)?.get(target).copied()
    }

    /// Display symbol for `code`, or the `"unknown"` sentinel for a code
    /// missing from the symbol map.
    pub fn symbol(&self, code: &str) -> &str {
        self.symbols.get(code).copied().unwrap_or(UNKNOWN_SYMBOL)
    }

    /// All registered display symbols (deduplicated by the caller if needed).
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.values().copied()
    }

    /// All supported currency codes.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(|c| c.as_str())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
