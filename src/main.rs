use crate::app_config::AppConfig;
use crate::console::{ConsoleCommand, HELP, execute};
use crate::defaults::{Defaults, FileDefaults, MemoryDefaults};
use crate::domain::events::OverrideChange;
use crate::location_listeners::ChannelListener;
use crate::location_override_store::LocationOverrideStore;
use crate::location_selector::LocationSelector;
use crate::store_listener::store_listener;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, warn};

mod app_config;
mod console;
mod coordinate_picker;
mod defaults;
mod domain;
mod location_listeners;
mod location_override_store;
mod location_selector;
mod store_listener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let defaults: Arc<dyn Defaults> = match config.defaults().path() {
        "" => {
            warn!("⚠️ No defaults path configured, the simulated location will not be remembered");
            Arc::new(MemoryDefaults::new())
        }
        path => {
            let defaults = FileDefaults::open(path);
            info!("💾 Persisting the simulated location to '{}'", defaults.path().display());
            Arc::new(defaults)
        }
    };
    let store = Arc::new(LocationOverrideStore::new(defaults));
    info!("✅  Initialized store");

    let (tx, rx) = mpsc::unbounded_channel::<OverrideChange>();
    let listener_id = store.listeners().register(Arc::new(ChannelListener::new(tx)));
    let listener_handle = task::spawn(store_listener(rx));
    info!(listeners = store.listeners().len(), "✅  Initialized store listener");

    match store.get_override() {
        Some(coordinate) => info!("🌍 Resuming simulated location {}", coordinate),
        None => info!("🌍 No simulated location, using the real location"),
    }

    let selector = LocationSelector::new(store.clone());
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    println!("{}", HELP);

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ConsoleCommand>() {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => println!("{}", execute(&selector, command)),
            Err(err) => println!("{}", err),
        }
    }

    // Dropping the only sender lets the listener task drain and finish
    store.listeners().unregister(listener_id);
    match listener_handle.await {
        Ok(seen) => info!("👋 Shutting down after {} location change(s)", seen),
        Err(err) => warn!("⚠️ Store listener failed: {}", err),
    }

    Ok(())
}
