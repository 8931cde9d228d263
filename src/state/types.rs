//! Small enums describing input ownership, modals, and status poll messages.

use crate::sources::NetworkStats;

/// Which pane currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input: printable keys edit the query.
    #[default]
    Search,
    /// Results list: single-key shortcuts are active.
    Results,
}

/// Modal dialog drawn above the main layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal is shown.
    #[default]
    None,
    /// Key binding overview.
    Help,
    /// Informational message; any key dismisses it.
    Alert {
        /// Text shown in the dialog body.
        message: String,
    },
}

/// Message from the network stats poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsUpdate {
    /// A poll has started; the header shows the loading placeholder.
    Started,
    /// A poll finished with the summary to display.
    Resolved(NetworkStats),
}
