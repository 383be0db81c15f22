use crate::prelude::*;
use crate::types::{Category, PriceRecord};

use serde::{Deserialize, Serialize};

/// One model as it appears in `--json` output.
///
/// Field names and order are what scripts consuming the output rely on,
/// do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListing {
    pub provider: String,
    pub model: String,
    pub input_price_per_1m: f64,
    pub output_price_per_1m: f64,
    pub context_window: u64,
    pub category: Category,
    pub notes: String,
}

impl From<&PriceRecord> for PriceListing {
    fn from(record: &PriceRecord) -> Self {
        PriceListing {
            provider: record.provider.to_owned(),
            model: record.name.to_owned(),
            input_price_per_1m: record.input_price,
            output_price_per_1m: record.output_price,
            context_window: record.context_window,
            category: record.category,
            notes: record.notes.to_owned(),
        }
    }
}

/// Serializes records as a JSON array, pretty (two-space indent) or on one line.
pub fn render(records: &[PriceRecord], pretty: bool) -> AppResult<String> {
    let listings: Vec<PriceListing> = records.iter().map(PriceListing::from).collect();

    let json = if pretty {
        serde_json::to_string_pretty(&listings)
    } else {
        serde_json::to_string(&listings)
    };

    json.into_diagnostic()
        .wrap_err("Failed to serialize the price listings to JSON")
}
