use std::sync::atomic::Ordering;
use std::time::Instant;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::sources::RouterClient;
use crate::state::{AppState, StatsUpdate};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod workers;

use channels::Channels;
use workers::{spawn_event_thread, spawn_stats_worker, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup when set to `1`.
pub const HEADLESS_ENV: &str = "CORTEXHUB_TEST_HEADLESS";

/// What: Run the CortexHub TUI end-to-end: initialize terminal and state, spawn
/// background workers (network stats, ticks, terminal events), drive the event loop,
/// and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (router endpoint, token, poll interval)
/// - `catalog`: Catalog to browse
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or restore failure.
///
/// Details:
/// - The stats poller starts immediately; the header shows `Loading…` while any poll is in flight.
/// - Stats polls are never cancelled; a summary arriving after exit is discarded.
pub async fn run(settings: &Settings, catalog: Catalog) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    tracing::info!(
        apps = catalog.apps.len(),
        categories = catalog.categories.len(),
        router = %settings.router_url,
        headless,
        "starting TUI"
    );
    let mut app = AppState::new(catalog);
    let mut channels = Channels::new();

    spawn_stats_worker(
        RouterClient::from_settings(settings),
        settings.poll_interval(),
        &channels.stats_tx,
    );
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app) {
                    break;
                }
            }
            Some(update) = channels.stats_rx.recv() => {
                handle_stats(&mut app, update);
            }
            Some(()) = channels.tick_rx.recv() => {
                app.expire_toast(Instant::now());
            }
            else => {}
        }
    }

    tracing::debug!("main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

/// What: Apply a stats poller message for the header widget.
fn handle_stats(app: &mut AppState, update: StatsUpdate) {
    if let StatsUpdate::Resolved(stats) = &update
        && app.stats.as_ref() != Some(stats)
    {
        tracing::debug!(
            online = stats.is_online,
            miners = stats.miner_count,
            sessions = stats.session_count,
            demo = stats.is_demo(),
            "network stats updated"
        );
    }
    app.apply_stats_update(update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::demo_stats;

    #[test]
    /// What: A resolved poll replaces the placeholder; the next poll start restores it.
    fn stats_update_replaces_placeholder() {
        let mut app = AppState::new(Catalog::bundled().expect("bundled"));
        assert!(app.stats.is_none());
        handle_stats(&mut app, StatsUpdate::Started);
        handle_stats(&mut app, StatsUpdate::Resolved(demo_stats()));
        assert_eq!(app.displayed_stats(), Some(&demo_stats()));
        handle_stats(&mut app, StatsUpdate::Started);
        assert!(app.displayed_stats().is_none());
    }
}
