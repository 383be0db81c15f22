use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use llm_price_tracker::app::App;
use llm_price_tracker::cli::Cli;
use llm_price_tracker::prelude::*;
use llm_price_tracker::router;

fn main() -> AppResult {
    // Parse errors, --help and --version exit inside here.
    let cli = Cli::new();

    init_logging(cli.verbose);

    let app = App::new(cli);
    app.display.configure();

    debug!(cli = ?app.cli, colored = app.display.is_colored(), "starting");

    let report = router::route(&app);
    let output = report.render(app.cli.unformatted)?;

    app.display.print(&output);

    Ok(())
}

// private

/// Logs go to stderr so they never mix with the report on stdout.
/// The level comes from the command line only, the environment is not read.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("llm_price_tracker=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
