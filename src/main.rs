mod app;
mod config;
mod logging;
mod store;
mod ui;

use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::app::{dispatch, handler};
use crate::store::{ExpenseStore, FileStorage, KeyValueStorage};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Upper bound on waiting for the last mirror write at exit.
const SHUTDOWN_FLUSH_TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Ensure data directory exists
    std::fs::create_dir_all(&cfg.storage.data_dir).with_context(|| {
        format!(
            "Failed to create data directory {}",
            cfg.storage.data_dir.display()
        )
    })?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("spendtrack exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let storage = Arc::new(FileStorage::new(&cfg.storage.data_dir));
    let storage_path = storage.path().display().to_string();
    let mut store = ExpenseStore::new(storage);
    let mut state = AppState::new(cfg.ui.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (status expiry only, 4 per second is plenty)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // First frame shows the loading state
    terminal.draw(|f| ui::render(f, &state, store.records(), &store.total()))?;

    store
        .hydrate()
        .await
        .with_context(|| format!("Failed to load expenses from {}", storage_path))?;
    state.loading = false;
    state.clamp_selection(store.len());
    state.dirty = true;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, store.records(), event);

        for action in actions {
            if let Some(ticket) = dispatch::apply(&mut state, &mut store, action) {
                // Report the write outcome back into the loop
                let persist_tx = event_tx.clone();
                tokio::spawn(async move {
                    let result = ticket.wait().await;
                    let _ = persist_tx.send(AppEvent::Persisted { result });
                });
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state, store.records(), &store.total()))?;
            state.dirty = false;
        }
    }

    if state.pending_saves > 0 {
        flush(&store).await;
    }
    Ok(())
}

/// Wait for outstanding mirror writes before the runtime shuts down.
async fn flush<S: KeyValueStorage>(store: &ExpenseStore<S>) {
    let ticket = match store.persist() {
        Ok(ticket) => ticket,
        Err(e) => {
            tracing::error!(error = %e, "could not queue final save");
            return;
        }
    };
    match tokio::time::timeout(SHUTDOWN_FLUSH_TIMEOUT, ticket.wait()).await {
        Ok(Ok(())) => tracing::debug!("final save complete"),
        Ok(Err(e)) => tracing::error!(error = %e, "final save failed"),
        Err(_) => tracing::warn!("timed out waiting for final save"),
    }
}
