pub mod json;
pub mod markdown;
pub mod table;

use itertools::Itertools;

use crate::prelude::*;
use crate::types::{PriceRecord, TokenWorkload};

/// A selection of records, tagged with how it should be shown.
///
/// Every variant holds the pipeline's output as-is; rendering never filters
/// or reorders.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceReport {
    /// Terminal table.
    Table(Vec<PriceRecord>),
    /// Terminal table with an extra cost column for the given workload.
    CostTable {
        records: Vec<PriceRecord>,
        workload: TokenWorkload,
    },
    /// JSON array of listings.
    Json(Vec<PriceRecord>),
    /// Markdown page.
    Markdown(Vec<PriceRecord>),
}

impl PriceReport {
    /// Renders the report into a string based on its variant.
    /// - `unformatted` drops pretty printing from JSON.
    /// - Colors in tables are controlled globally by `colored`, see `Display`.
    pub fn render(&self, unformatted: bool) -> AppResult<String> {
        match self {
            PriceReport::Table(records) => Ok(table::render(records, None)),
            PriceReport::CostTable { records, workload } => {
                Ok(table::render(records, Some(workload)))
            }
            PriceReport::Json(records) => json::render(records, !unformatted),
            PriceReport::Markdown(records) => Ok(markdown::render(records)),
        }
    }

    /// The records this report shows, in display order.
    pub fn records(&self) -> &[PriceRecord] {
        match self {
            PriceReport::Table(records)
            | PriceReport::CostTable { records, .. }
            | PriceReport::Json(records)
            | PriceReport::Markdown(records) => records,
        }
    }
}

/// Two decimals behind a dollar sign, example: $0.15.
pub fn render_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Comma-separated thousands, example: 1,000,000.
pub fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();

    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}
