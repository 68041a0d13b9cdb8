mod input;
mod runtime;
mod startup;
mod tracing_setup;
mod ui;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use keyrack_core::models::Entry;

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser, Debug)]
#[command(name = "keyrack", about = "Credential list front-end", version)]
struct Args {
    /// Settings file location (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Entries to display, as a JSON array.
    #[arg(long)]
    entries: Option<PathBuf>,
    /// Append logs to this file instead of discarding them.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init(args.log_file.as_deref())?;

    // Restore the terminal before panic output hits the screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let bootstrap = startup::initialize(args.config)?;
    let entries = match &args.entries {
        Some(path) => load_entries(path)?,
        None => Vec::new(),
    };

    let mut app = App::new(bootstrap.settings, entries);
    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(e) = app.settings.save(&bootstrap.settings_path) {
        tracing::warn!("failed to save settings: {e}");
    }

    result
}

fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading entries from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing entries from {}", path.display()))
}
