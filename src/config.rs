pub mod pricing_table;
pub mod tiers;

use jiff::civil::{Date, date};

/// Shown in the banner and by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// When the prices in `PRICE_TABLE` were last checked against the providers' pages.
pub const LAST_UPDATED: Date = date(2026, 2, 12);

/// Width of the dimmed rule under the banner.
pub const BANNER_RULE_WIDTH: usize = 95;

/// Width of the rule under the column headers.
pub const HEADER_RULE_WIDTH: usize = 90;
