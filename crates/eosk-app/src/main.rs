//! EOSK on-screen keyboard entry point.
//!
//! Wires together the settings store, the settings controller, and the key
//! injector, loads `settings.json`, and applies the saved theme.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ SettingsStore::at_default_location()  -- <exe dir>/settings.json
//!  └─ EoskApp::with_default_injector()      -- SendInput on Windows
//!  └─ EoskApp::start()                      -- load, repair, derive palette
//! ```
//!
//! The keyboard window and settings panel are drawn by the UI shell, which
//! holds the `EoskApp` and calls `keyboard().press_named(..)` and the
//! `settings()` functions from its event handlers.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eosk_app::app::EoskApp;
use eosk_app::infrastructure::storage::SettingsStore;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("EOSK starting");

    let store = SettingsStore::at_default_location()
        .context("failed to locate the settings file")?;
    info!(path = %store.path().display(), "using settings file");

    let app = EoskApp::with_default_injector(Arc::new(store));
    let palette = app.start();

    info!(
        base = %palette.base,
        accent = %palette.accent,
        light = %palette.light.color.to_hex(),
        dark = %palette.dark.color.to_hex(),
        preset = ?app.settings().selected_preset(),
        "theme ready"
    );

    Ok(())
}
