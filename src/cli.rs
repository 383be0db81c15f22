use clap::{ArgAction, Parser, ValueEnum};

use crate::calculation::query::Query;
use crate::error::Error;
use crate::types::{Category, TokenWorkload};

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }

    /// The `--calc IN OUT` pair, if given.
    pub fn workload(&self) -> Option<TokenWorkload> {
        // clap guarantees exactly two values when the flag is present.
        match self.calc.as_deref() {
            Some(&[input, output]) => Some(TokenWorkload::new(input, output)),
            _ => None,
        }
    }

    /// Collects the selection flags into a pipeline query.
    pub fn query(&self) -> Query {
        Query {
            text: self.filter.clone(),
            category: self.category,
            sort: self.sort,
            cheapest_first: self.cheap,
            budget: self.budget,
            workload: self.workload(),
        }
    }
}

/// Parses `--budget`. Only finite, non-negative amounts make a ceiling.
pub fn parse_budget(raw: &str) -> Result<f64, Error> {
    let amount = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidBudget(raw.to_owned()))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::BudgetOutOfRange(raw.to_owned()));
    }

    Ok(amount)
}

// Structs

/// 💰 Compare LLM API prices across providers
#[derive(Parser, Debug)]
#[command(name = "llm-price-tracker", version, disable_version_flag = true)]
pub struct Cli {
    /// Sort by field.
    #[arg(short, long, value_enum, default_value_t = SortKey::Output)]
    pub sort: SortKey,

    /// Filter by model/provider name.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Filter by category.
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Calculate cost for IN input and OUT output tokens.
    #[arg(
        long,
        num_args = 2,
        value_names = ["IN", "OUT"],
        value_parser = clap::value_parser!(u64)
    )]
    pub calc: Option<Vec<u64>>,

    /// Show models within budget (for --calc tokens). Negative and infinite amounts are refused.
    #[arg(short, long, value_name = "AMOUNT", value_parser = parse_budget)]
    pub budget: Option<f64>,

    /// Output as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Output as Markdown.
    #[arg(long, default_value_t = false)]
    pub markdown: bool,

    /// Sort cheapest first (by output).
    #[arg(long, default_value_t = false)]
    pub cheap: bool,

    /// No format. Plain table without colors, compact JSON.
    #[arg(long, default_value_t = false)]
    pub unformatted: bool,

    /// Log what every pipeline stage does to stderr.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Print version.
    // Lower-case `-v` instead of clap's default `-V`.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Input price, cheapest first.
    Input,
    /// Output price, cheapest first.
    #[default]
    Output,
    /// Provider name, A to Z.
    Provider,
    /// Context window, largest first.
    Context,
    /// Model name, A to Z.
    Name,
}
