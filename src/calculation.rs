pub mod cost;
pub mod query;
