use itertools::Itertools;
use tracing::debug;

use crate::calculation::cost::calculate_cost;
use crate::cli::SortKey;
use crate::types::{Category, PriceRecord, TokenWorkload};

// 1. [Text]:     provider/name substring, case-insensitive.
// 2. [Category]: exact match.
// 3. [Sort]:     by the chosen key, or by output price when cheapest-first.
// 4. [Budget]:   cost <= ceiling, only with both a ceiling and a workload.
// 5. [Cost]:     `sort_by_cost`, only for the cost table. JSON and Markdown keep
//                the order from stage 3 even with a workload.
//
// Every sort here is stable, so ties keep the order of the previous stage.

/// What to select from the registry and in which order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub text: Option<String>,
    pub category: Option<Category>,
    pub sort: SortKey,
    pub cheapest_first: bool,
    pub budget: Option<f64>,
    pub workload: Option<TokenWorkload>,
}

impl Query {
    /// Runs every stage over a copy of `records`. The input is left untouched.
    pub fn run(&self, records: &[PriceRecord]) -> Vec<PriceRecord> {
        let selected = self.filter_by_text(records.to_vec());
        let selected = self.filter_by_category(selected);
        let sorted = self.sort(selected);

        self.filter_by_budget(sorted)
    }

    fn filter_by_text(&self, records: Vec<PriceRecord>) -> Vec<PriceRecord> {
        let Some(text) = self.text.as_deref() else {
            return records;
        };

        let needle = text.to_lowercase();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.provider.to_lowercase().contains(&needle)
            })
            .collect();

        debug!(filter = %text, remaining = kept.len(), "text filter applied");

        kept
    }

    fn filter_by_category(&self, records: Vec<PriceRecord>) -> Vec<PriceRecord> {
        let Some(category) = self.category else {
            return records;
        };

        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| record.category == category)
            .collect();

        debug!(%category, remaining = kept.len(), "category filter applied");

        kept
    }

    fn sort(&self, records: Vec<PriceRecord>) -> Vec<PriceRecord> {
        // --cheap wins over whatever --sort says.
        let key = if self.cheapest_first {
            SortKey::Output
        } else {
            self.sort
        };

        debug!(?key, cheapest_first = self.cheapest_first, "sorting");

        sort_by_key(records, key)
    }

    fn filter_by_budget(&self, records: Vec<PriceRecord>) -> Vec<PriceRecord> {
        let (Some(ceiling), Some(workload)) = (self.budget, self.workload) else {
            return records;
        };

        // A zero ceiling is a real ceiling here, not "no budget".
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| calculate_cost(record, &workload) <= ceiling)
            .collect();

        debug!(ceiling, remaining = kept.len(), "budget filter applied");

        kept
    }
}

/// Stable re-sort by what `workload` would cost on each record, cheapest first.
pub fn sort_by_cost(records: Vec<PriceRecord>, workload: &TokenWorkload) -> Vec<PriceRecord> {
    debug!(?workload, "sorting by cost");

    records
        .into_iter()
        .sorted_by(|a, b| calculate_cost(a, workload).total_cmp(&calculate_cost(b, workload)))
        .collect()
}

/// Stable sort of `records` by a single key.
pub fn sort_by_key(records: Vec<PriceRecord>, key: SortKey) -> Vec<PriceRecord> {
    let iter = records.into_iter();

    match key {
        SortKey::Input => iter
            .sorted_by(|a, b| a.input_price.total_cmp(&b.input_price))
            .collect(),
        SortKey::Output => iter
            .sorted_by(|a, b| a.output_price.total_cmp(&b.output_price))
            .collect(),
        SortKey::Provider => iter
            .sorted_by_key(|record| record.provider.to_lowercase())
            .collect(),
        // Largest window first.
        SortKey::Context => iter
            .sorted_by(|a, b| b.context_window.cmp(&a.context_window))
            .collect(),
        SortKey::Name => iter
            .sorted_by_key(|record| record.name.to_lowercase())
            .collect(),
    }
}
