//! Library entry for CortexHub exposing the catalog, network, and TUI layers
//! for the binary and integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
