use miette::Diagnostic;
use thiserror::Error;

// llm_price_tracker::parse -> cli argument validation that clap can't express on its own.
// Everything else is static data, so there is little that can go wrong at runtime.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid budget: expected a dollar amount, got '{0}'")]
    #[diagnostic(
        code(llm_price_tracker::parse::budget),
        help("Please provide a plain decimal number, like '0.50' or '10'.")
    )]
    InvalidBudget(String),

    #[error("Budget must be a finite amount of zero or more dollars, got '{0}'")]
    #[diagnostic(
        code(llm_price_tracker::parse::budget_range),
        help("A negative or infinite ceiling can't select anything meaningful.")
    )]
    BudgetOutOfRange(String),
}
