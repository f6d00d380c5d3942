// src/parsers.rs
use pgn_index_shared_kernel::{Variant, YearMonth};

/// clap value parser for `--variant`.
pub fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::new(s.trim()).map_err(|e| e.to_string())
}

/// clap value parser for `--clock-since`.
pub fn parse_year_month(s: &str) -> Result<YearMonth, String> {
    YearMonth::parse(s.trim()).map_err(|e| e.to_string())
}
