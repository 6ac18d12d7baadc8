/// Decimal precision for converted amounts shown to the caller
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Sentinel returned by the symbol table for a code it does not know
pub const UNKNOWN_SYMBOL: &str = "unknown";
