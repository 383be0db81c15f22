//! Compare LLM API prices across providers.
//!
//! A fixed price table, a small filter/sort/budget pipeline over it, and three
//! ways to print the result: terminal table, JSON and Markdown.

pub mod app;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod prelude;
pub mod report;
pub mod router;
pub mod types;
