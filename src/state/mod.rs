//! Application state shared by the event, worker, and UI layers.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{Focus, Modal, StatsUpdate};
