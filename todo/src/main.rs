//! Interactive todo list on the terminal.
//!
//! Reads commands from stdin, prints the list to stdout and logs to stderr.

use anyhow::Context;
use todo::App;
use todo::config::{Config, DEFAULT_LOG_FILTER};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("invalid configuration")?;

    // Initialize tracing
    let (filter, rejected) = match config.env_filter() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    if let Some(err) = rejected {
        tracing::warn!(error = %err, fallback = DEFAULT_LOG_FILTER, "Ignoring log filter");
    }
    composable_todo_runtime::metrics::describe();

    let mut app = App::from_config(&config).context("failed to load seed todos")?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    app.run(stdin.lock(), &mut stdout)
        .context("todo session failed")?;

    Ok(())
}
