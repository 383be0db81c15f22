use colored::Colorize;

use crate::calculation::cost::calculate_cost;
use crate::config::tiers::PriceTier;
use crate::config::{BANNER_RULE_WIDTH, HEADER_RULE_WIDTH, LAST_UPDATED, VERSION};
use crate::report::{group_thousands, render_money};
use crate::types::{PriceRecord, TokenWorkload};

/// Renders records as an aligned terminal table.
///
/// With a workload, a cost column is appended and a line above the header
/// states the token counts the costs were computed for.
pub fn render(records: &[PriceRecord], workload: Option<&TokenWorkload>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(records.len() + 8);

    lines.push(format!("\n{}", format!("💰 llm-price-tracker v{VERSION}").bold()));
    lines.push("─".repeat(BANNER_RULE_WIDTH).dimmed().to_string());

    if let Some(workload) = workload {
        lines.push(format!(
            "  Cost estimate for {} input + {} output tokens\n",
            group_thousands(workload.input_tokens).bold(),
            group_thousands(workload.output_tokens).bold(),
        ));
    }

    lines.push(header(workload.is_some()).bold().to_string());
    lines.push(format!("  {}", "─".repeat(HEADER_RULE_WIDTH)));

    for record in records {
        lines.push(row(record, workload));
    }

    lines.push(format!(
        "\n{}",
        format!("  Prices per 1M tokens (USD). Last updated: {LAST_UPDATED}").dimmed()
    ));
    lines.push(format!(
        "{}\n",
        "  ⚠ Prices change frequently. Verify at provider's pricing page.".dimmed()
    ));

    lines.join("\n")
}

// private

fn header(with_cost: bool) -> String {
    let mut header = format!(
        "  {:<12} {:<24} {:>10} {:>10} {:>10} {:>4}",
        "Provider", "Model", "Input/1M", "Output/1M", "Context", "Cat"
    );

    if with_cost {
        header.push_str(&format!(" {:>10}", "Cost"));
    }

    header
}

fn row(record: &PriceRecord, workload: Option<&TokenWorkload>) -> String {
    let mut line = format!(
        "  {:<12} {:<24} {} {} {:>10} {:>4}",
        record.provider,
        record.name,
        money_cell(record.input_price),
        money_cell(record.output_price),
        group_thousands(record.context_window),
        record.category.icon(),
    );

    if let Some(workload) = workload {
        line.push(' ');
        line.push_str(&money_cell(calculate_cost(record, workload)));
    }

    line
}

/// Right-aligned money, colored by tier.
// Pad before painting, escape codes would otherwise count towards the width.
fn money_cell(amount: f64) -> String {
    let padded = format!("{:>10}", render_money(amount));

    match PriceTier::of(amount) {
        PriceTier::Low => padded.green().to_string(),
        PriceTier::Mid => padded.yellow().to_string(),
        PriceTier::High => padded.red().to_string(),
    }
}
