use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Filtering follows `RUST_LOG`,
/// defaulting to info. The terminal owns stdout while the UI runs, so
/// output only goes somewhere when a log file is given.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        registry
            .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
            .init();
    } else {
        registry.init();
    }
    Ok(())
}
