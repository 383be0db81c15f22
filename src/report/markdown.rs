use crate::config::LAST_UPDATED;
use crate::report::{group_thousands, render_money};
use crate::types::PriceRecord;

pub fn render(records: &[PriceRecord]) -> String {
    let mut lines = vec![
        "# 💰 LLM Price Comparison\n".to_owned(),
        format!("*Last updated: {LAST_UPDATED}*\n"),
        "| Provider | Model | Input/1M | Output/1M | Context | Category |".to_owned(),
        "|----------|-------|----------|-----------|---------|----------|".to_owned(),
    ];

    lines.extend(records.iter().map(|record| {
        format!(
            "| {} | {} | {} | {} | {} | {} |",
            record.provider,
            record.name,
            render_money(record.input_price),
            render_money(record.output_price),
            group_thousands(record.context_window),
            record.category,
        )
    }));

    lines.join("\n")
}
