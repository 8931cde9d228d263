use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use crate::sources::{self, RouterClient};
use crate::state::StatsUpdate;

/// What: Spawns the network stats worker.
///
/// Inputs:
/// - `client`: Router client used for every poll
/// - `interval`: Delay between polls
/// - `stats_tx`: Channel sender for poll start and result messages
///
/// Output:
/// - None (spawns async tasks)
///
/// Details:
/// - Resolves once at startup, then starts a fresh resolution every `interval`.
/// - Each poll runs in its own task, so a slow poll never delays the next one.
/// - Every poll sends [`StatsUpdate::Started`] before its [`StatsUpdate::Resolved`].
/// - Stops once the receiver is dropped.
pub fn spawn_stats_worker(
    client: RouterClient,
    interval: Duration,
    stats_tx: &mpsc::UnboundedSender<StatsUpdate>,
) {
    spawn_stats_poll(client.clone(), stats_tx.clone());

    let stats_tx_periodic = stats_tx.clone();
    tokio::spawn(async move {
        loop {
            sleep(interval).await;
            if stats_tx_periodic.is_closed() {
                tracing::debug!("stats receiver dropped; stopping poller");
                break;
            }
            spawn_stats_poll(client.clone(), stats_tx_periodic.clone());
        }
    });
}

fn spawn_stats_poll(client: RouterClient, stats_tx: mpsc::UnboundedSender<StatsUpdate>) {
    if stats_tx.send(StatsUpdate::Started).is_err() {
        return;
    }
    tokio::spawn(async move {
        let stats = sources::resolve_network_stats(&client).await;
        let _ = stats_tx.send(StatsUpdate::Resolved(stats));
    });
}

/// What: Spawns tick worker that sends tick events every 200ms.
///
/// Details:
/// - Ticks drive toast expiry and redraws.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawns the blocking terminal event reader.
///
/// Inputs:
/// - `headless`: When `true`, no reader is started
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag set by the runtime on exit
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked promptly.
/// - Transient read errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => {
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::demo_stats;

    #[tokio::test]
    /// What: The stats worker delivers an initial summary without waiting for the interval.
    ///
    /// - Input: Unreachable router, one-hour interval
    /// - Output: A start marker, then the demo summary, arrive promptly
    async fn stats_worker_sends_initial_summary() {
        let client = RouterClient::new("http://127.0.0.1:9", "t", Duration::from_millis(300));
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_stats_worker(client, Duration::from_secs(3600), &tx);
        let started = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("start before timeout");
        assert_eq!(started, Some(StatsUpdate::Started));
        let got = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("summary before timeout");
        assert_eq!(got, Some(StatsUpdate::Resolved(demo_stats())));
    }

    #[tokio::test]
    /// What: Polls repeat on the configured interval, each announcing its start.
    async fn stats_worker_repeats() {
        let client = RouterClient::new("http://127.0.0.1:9", "t", Duration::from_millis(100));
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_stats_worker(client, Duration::from_millis(50), &tx);
        let (mut started, mut resolved) = (0, 0);
        while resolved < 3 {
            let got = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("message before timeout");
            match got {
                Some(StatsUpdate::Started) => started += 1,
                Some(StatsUpdate::Resolved(_)) => resolved += 1,
                None => panic!("stats channel closed"),
            }
        }
        assert!(started >= resolved);
    }
}
