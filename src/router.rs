use tracing::{debug, warn};

use crate::app::App;
use crate::calculation::query::{Query, sort_by_cost};
use crate::config::pricing_table::PRICE_TABLE;
use crate::report::PriceReport;

/// Runs the query described by the command line and picks the presenter.
///
/// Precedence: `--json`, then `--markdown`, then the cost table when `--calc`
/// is given, and the plain table otherwise. Only the cost table is re-sorted
/// by cost; JSON and Markdown keep the `--sort`/`--cheap` order.
pub fn route(ctx: &App) -> PriceReport {
    let cli = &ctx.cli;
    let query: Query = cli.query();

    if query.budget.is_some() && query.workload.is_none() {
        warn!("--budget has no effect without --calc IN OUT");
    }

    let records = query.run(PRICE_TABLE);

    debug!(selected = records.len(), "query finished");

    match (cli.json, cli.markdown, query.workload) {
        // llm-price-tracker --json.
        (true, _, _) => PriceReport::Json(records),

        // llm-price-tracker --markdown.
        (false, true, _) => PriceReport::Markdown(records),

        // llm-price-tracker --calc IN OUT.
        (false, false, Some(workload)) => PriceReport::CostTable {
            records: sort_by_cost(records, &workload),
            workload,
        },

        // llm-price-tracker.
        (false, false, None) => PriceReport::Table(records),
    }
}
