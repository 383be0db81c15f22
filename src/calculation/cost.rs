use crate::types::{PriceRecord, TokenWorkload};

/// Dollar cost of running `workload` through `record`.
///
/// Input and output are billed separately, each at its own per-million rate.
pub fn calculate_cost(record: &PriceRecord, workload: &TokenWorkload) -> f64 {
    let input_cost = priced_tokens(workload.input_tokens, record.input_price);
    let output_cost = priced_tokens(workload.output_tokens, record.output_price);

    input_cost + output_cost
}

// private

fn priced_tokens(tokens: u64, price_per_million: f64) -> f64 {
    // Tokens are counted as integers and only become floats here.
    price_per_million * tokens as f64 / 1_000_000.0
}
