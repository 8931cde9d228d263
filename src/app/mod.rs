//! Terminal UI application: runtime loop, background workers, and terminal setup.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{HEADLESS_ENV, run};
