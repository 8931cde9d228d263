use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::StatsUpdate;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    /// Sender for terminal events read by the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver for terminal events in the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the event thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Sender for stats poll start and result messages.
    pub stats_tx: mpsc::UnboundedSender<StatsUpdate>,
    /// Receiver for stats poll messages in the main loop.
    pub stats_rx: mpsc::UnboundedReceiver<StatsUpdate>,
    /// Sender for periodic ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver for periodic ticks in the main loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create every runtime channel pair.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (stats_tx, stats_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            stats_tx,
            stats_rx,
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
