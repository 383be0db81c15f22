//! Property-based tests for the query pipeline using proptest

use llm_price_tracker::{
    calculation::{
        cost::calculate_cost,
        query::{Query, sort_by_key},
    },
    cli::SortKey,
    config::pricing_table::PRICE_TABLE,
    report::json::{self, PriceListing},
    types::{Category, PriceRecord, TokenWorkload},
};
use proptest::prelude::*;

// Strategies for generating test data

prop_compose! {
    fn arb_workload()(
        input in 0u64..50_000_000,
        output in 0u64..50_000_000,
    ) -> TokenWorkload {
        TokenWorkload::new(input, output)
    }
}

fn arb_record() -> impl Strategy<Value = &'static PriceRecord> {
    prop::sample::select(PRICE_TABLE.iter().collect::<Vec<_>>())
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![
        SortKey::Input,
        SortKey::Output,
        SortKey::Provider,
        SortKey::Context,
        SortKey::Name,
    ])
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(vec![Category::Reasoning, Category::General, Category::Fast])
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "gpt", "CLAUDE", "gemini", "meta", "mini", "flash", "o", "qwen", "x",
    ]))
    .prop_map(|text| text.map(str::to_owned))
}

prop_compose! {
    fn arb_query()(
        text in arb_text(),
        category in prop::option::of(arb_category()),
        sort in arb_sort_key(),
        cheapest_first in any::<bool>(),
        budget in prop::option::of(0.0f64..20.0),
        workload in prop::option::of(arb_workload()),
    ) -> Query {
        Query { text, category, sort, cheapest_first, budget, workload }
    }
}

fn sorted_names(records: &[PriceRecord]) -> Vec<(&'static str, &'static str)> {
    let mut names: Vec<_> = records
        .iter()
        .map(|record| (record.provider, record.name))
        .collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn cost_is_linear_in_input(record in arb_record(), workload in arb_workload()) {
        let doubled = TokenWorkload::new(workload.input_tokens * 2, workload.output_tokens);

        let expected = calculate_cost(record, &workload)
            + record.input_price * workload.input_tokens as f64 / 1_000_000.0;
        let actual = calculate_cost(record, &doubled);

        prop_assert!((actual - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn cost_is_never_negative(record in arb_record(), workload in arb_workload()) {
        prop_assert!(calculate_cost(record, &workload) >= 0.0);
    }

    #[test]
    fn category_filter_only_yields_that_category(query in arb_query(), category in arb_category()) {
        let query = Query { category: Some(category), ..query };

        for record in query.run(PRICE_TABLE) {
            prop_assert_eq!(record.category, category);
        }
    }

    #[test]
    fn sorting_keeps_the_same_set(first in arb_sort_key(), second in arb_sort_key()) {
        let once = sort_by_key(PRICE_TABLE.to_vec(), first);
        let twice = sort_by_key(once.clone(), second);

        prop_assert_eq!(sorted_names(&once), sorted_names(PRICE_TABLE));
        prop_assert_eq!(sorted_names(&twice), sorted_names(PRICE_TABLE));
    }

    #[test]
    fn cheapest_first_ignores_sort_key(sort in arb_sort_key(), text in arb_text()) {
        let cheap = Query { text: text.clone(), sort, cheapest_first: true, ..Default::default() };
        let by_output = Query { text, sort: SortKey::Output, ..Default::default() };

        prop_assert_eq!(cheap.run(PRICE_TABLE), by_output.run(PRICE_TABLE));
    }

    #[test]
    fn budget_boundary_is_inclusive(record in arb_record(), workload in arb_workload()) {
        let ceiling = calculate_cost(record, &workload);
        let query = Query { budget: Some(ceiling), workload: Some(workload), ..Default::default() };

        let kept = query.run(PRICE_TABLE);

        prop_assert!(kept.contains(record));
        for candidate in PRICE_TABLE {
            let included = kept.contains(candidate);
            prop_assert_eq!(included, calculate_cost(candidate, &workload) <= ceiling);
        }
    }

    #[test]
    fn pipeline_output_is_a_subset_of_the_registry(query in arb_query()) {
        let result = query.run(PRICE_TABLE);

        prop_assert!(result.len() <= PRICE_TABLE.len());
        for record in &result {
            prop_assert!(PRICE_TABLE.contains(record));
        }
    }

    #[test]
    fn json_round_trips_pipeline_output(query in arb_query(), pretty in any::<bool>()) {
        let records = query.run(PRICE_TABLE);
        let rendered = json::render(&records, pretty).unwrap();
        let parsed: Vec<PriceListing> = serde_json::from_str(&rendered).unwrap();

        prop_assert_eq!(parsed.len(), records.len());
        for (listing, record) in parsed.iter().zip(&records) {
            prop_assert_eq!(listing, &PriceListing::from(record));
        }
    }
}
