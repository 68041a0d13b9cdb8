//! Startup orchestration: load configuration, check environment
//! capability, and hand a ready state to the main view.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use keyrack_core::config::Settings;

pub struct Bootstrap {
    pub settings: Settings,
    pub settings_path: PathBuf,
}

pub fn initialize(config_override: Option<PathBuf>) -> Result<Bootstrap> {
    let started = Instant::now();

    let settings_path = match config_override {
        Some(path) => path,
        None => Settings::default_path().context("resolving settings path")?,
    };
    // A broken settings file must not stop startup.
    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("failed to load settings, using defaults: {e}");
            Settings::default()
        }
    };

    ensure_can_run();

    if !settings.skip_insecure_warning && std::env::var_os("SSH_CONNECTION").is_some() {
        tracing::warn!("remote session detected; displayed secrets leave this machine");
    }

    tracing::info!("Started in {}ms", started.elapsed().as_millis());
    Ok(Bootstrap {
        settings,
        settings_path,
    })
}

/// Environment capability check. Failures are logged, not fatal:
/// terminal setup will surface a real error if the host truly cannot
/// run the UI.
fn ensure_can_run() {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        tracing::warn!("stdout is not a terminal");
    }
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols < 40 || rows < 10 => {
            tracing::warn!("terminal is small ({cols}x{rows}); layout may clip");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("cannot query terminal size: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_with_missing_settings_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let bootstrap = initialize(Some(path.clone())).unwrap();
        assert_eq!(bootstrap.settings_path, path);
        assert_eq!(bootstrap.settings.locale, "en");
    }

    #[test]
    fn initialize_survives_a_corrupt_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{broken").unwrap();
        let bootstrap = initialize(Some(path)).unwrap();
        assert!(!bootstrap.settings.skip_insecure_warning);
    }
}
