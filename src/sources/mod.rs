//! Remote data retrieval from the Cortensor router, split into submodules.

mod recommend;
mod router;
mod stats;

pub use recommend::{build_recommendation_prompt, recommend};
pub use router::{
    COMPLETION_TIMEOUT_SECS, CompletionRequest, CompletionResponse, Miner, RouterClient,
    RouterStatus, Session,
};
pub use stats::{
    DEMO_STATUS, NetworkStats, UNKNOWN_STATUS, aggregate, combine, demo_stats,
    resolve_network_stats, resolve_with, should_use_demo, with_demo_fallback,
};
