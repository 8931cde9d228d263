//! Network status aggregation with graceful degradation.
//!
//! The pipeline has three explicit stages:
//! 1. [`aggregate`] fans out the three router reads and combines them. It never fails.
//! 2. [`should_use_demo`] decides, purely from the summary, whether live data is usable.
//! 3. [`with_demo_fallback`] substitutes [`demo_stats`] when it is not.
//!
//! [`resolve_network_stats`] runs all three and also absorbs a panic inside aggregation.

use serde::Serialize;

use super::router::{Miner, RouterClient, RouterStatus, Session};

/// Status tag marking a synthetic summary.
pub const DEMO_STATUS: &str = "demo";
/// Status tag used when the router did not report one.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Summary rendered by the network status widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Whether the router reports itself healthy.
    pub is_online: bool,
    /// Number of connected miners.
    pub miner_count: usize,
    /// Number of active sessions.
    pub session_count: usize,
    /// Router status string, `"unknown"`, or `"demo"`.
    pub status: String,
}

impl NetworkStats {
    /// Whether this summary is the synthetic demo summary rather than observed data.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.status == DEMO_STATUS
    }
}

/// What: Canned summary shown when live data is unusable.
///
/// Output: `{ is_online: true, miner_count: 45, session_count: 12, status: "demo" }`.
#[must_use]
pub fn demo_stats() -> NetworkStats {
    NetworkStats {
        is_online: true,
        miner_count: 45,
        session_count: 12,
        status: DEMO_STATUS.to_string(),
    }
}

/// What: Combine the three router reads into one summary.
///
/// Inputs:
/// - `status`: Status read, `None` when absent
/// - `miners`: Miner list (empty on failure)
/// - `sessions`: Session list (empty on failure)
///
/// Output:
/// - `is_online` when `status == "ok"` or `health == "healthy"`.
/// - Counts are list lengths; `status` falls back to `"unknown"` when missing or empty.
#[must_use]
pub fn combine(status: Option<&RouterStatus>, miners: &[Miner], sessions: &[Session]) -> NetworkStats {
    let is_online = status.is_some_and(|s| {
        s.status.as_deref() == Some("ok") || s.health.as_deref() == Some("healthy")
    });
    let status_text = status
        .and_then(|s| s.status.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_STATUS)
        .to_string();
    NetworkStats {
        is_online,
        miner_count: miners.len(),
        session_count: sessions.len(),
        status: status_text,
    }
}

/// What: Query status, miners, and sessions concurrently and combine them.
///
/// Inputs:
/// - `client`: Router client
///
/// Output:
/// - Raw (pre-fallback) [`NetworkStats`]; each failed read contributes its empty default.
///
/// Details:
/// - Waits for all three reads to settle; there is no short-circuiting.
pub async fn aggregate(client: &RouterClient) -> NetworkStats {
    let (status, miners, sessions) = tokio::join!(
        client.fetch_status(),
        client.fetch_miners(),
        client.fetch_sessions()
    );
    let stats = combine(status.as_ref(), &miners, &sessions);
    tracing::debug!(
        online = stats.is_online,
        miners = stats.miner_count,
        sessions = stats.session_count,
        status = %stats.status,
        "network stats aggregated"
    );
    stats
}

/// What: Decide whether an aggregated summary should be replaced by the demo summary.
///
/// Output:
/// - `true` when no miners were observed (this also covers total network failure).
#[must_use]
pub const fn should_use_demo(stats: &NetworkStats) -> bool {
    stats.miner_count == 0
}

/// What: Apply the demo substitution rule to a summary.
#[must_use]
pub fn with_demo_fallback(stats: NetworkStats) -> NetworkStats {
    if should_use_demo(&stats) {
        tracing::info!(status = %stats.status, "no miners observed; showing demo network stats");
        demo_stats()
    } else {
        stats
    }
}

/// What: Produce the summary to display: aggregate, decide, substitute.
///
/// Inputs:
/// - `client`: Router client (cloned into the aggregation task)
///
/// Output:
/// - Live summary when miners were observed; otherwise [`demo_stats`].
///
/// Details:
/// - Delegates to [`resolve_with`], so a panic inside aggregation degrades to the
///   demo summary. This function never fails.
pub async fn resolve_network_stats(client: &RouterClient) -> NetworkStats {
    let client = client.clone();
    resolve_with(async move { aggregate(&client).await }).await
}

/// What: Run an aggregation future in its own task and apply the demo fallback.
///
/// Inputs:
/// - `aggregation`: Future producing a raw (pre-fallback) summary
///
/// Output:
/// - [`with_demo_fallback`] of the result, or [`demo_stats`] when the task panics
///   or is cancelled.
pub async fn resolve_with<F>(aggregation: F) -> NetworkStats
where
    F: Future<Output = NetworkStats> + Send + 'static,
{
    match tokio::spawn(aggregation).await {
        Ok(stats) => with_demo_fallback(stats),
        Err(e) => {
            tracing::warn!(error = %e, "network stats aggregation failed; showing demo stats");
            demo_stats()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miners(n: usize) -> Vec<Miner> {
        (0..n)
            .map(|i| Miner {
                id: format!("m{i}"),
                address: format!("0x{i:02}"),
                status: "active".into(),
                model: None,
            })
            .collect()
    }

    fn sessions(n: usize) -> Vec<Session> {
        (0..n)
            .map(|i| Session {
                id: i as u64,
                status: "open".into(),
                tasks: 0,
            })
            .collect()
    }

    #[test]
    /// What: Healthy router with miners is shown as-is.
    ///
    /// - Input: `{status: "ok"}`, 3 miners, 1 session
    /// - Output: `{true, 3, 1, "ok"}`, no demo substitution
    fn ok_status_with_miners_is_live() {
        let st = RouterStatus {
            status: Some("ok".into()),
            ..Default::default()
        };
        let raw = combine(Some(&st), &miners(3), &sessions(1));
        assert_eq!(
            raw,
            NetworkStats {
                is_online: true,
                miner_count: 3,
                session_count: 1,
                status: "ok".into()
            }
        );
        assert!(!should_use_demo(&raw));
        assert_eq!(with_demo_fallback(raw.clone()), raw);
    }

    #[test]
    /// What: Health-only status with no miners.
    ///
    /// - Input: `{health: "healthy"}`, empty lists
    /// - Output: Raw `{true, 0, 0, "unknown"}`, then the demo summary
    fn healthy_without_miners_falls_back_to_demo() {
        let st = RouterStatus {
            health: Some("healthy".into()),
            ..Default::default()
        };
        let raw = combine(Some(&st), &[], &[]);
        assert_eq!(
            raw,
            NetworkStats {
                is_online: true,
                miner_count: 0,
                session_count: 0,
                status: UNKNOWN_STATUS.into()
            }
        );
        assert!(should_use_demo(&raw));
        let shown = with_demo_fallback(raw);
        assert_eq!(shown, demo_stats());
        assert!(shown.is_demo());
    }

    #[test]
    /// What: Absent status is offline and unknown; other status values are offline.
    fn absent_or_unhealthy_status_is_offline() {
        let raw = combine(None, &miners(2), &[]);
        assert!(!raw.is_online);
        assert_eq!(raw.status, UNKNOWN_STATUS);
        assert_eq!(raw.miner_count, 2);

        let st = RouterStatus {
            status: Some("degraded".into()),
            health: Some("unhealthy".into()),
            version: Some("1.2".into()),
        };
        let raw = combine(Some(&st), &miners(1), &sessions(4));
        assert!(!raw.is_online);
        assert_eq!(raw.status, "degraded");
        assert_eq!(raw.session_count, 4);
    }

    #[test]
    /// What: Demo summary has the fixed values.
    fn demo_summary_values() {
        let d = demo_stats();
        assert!(d.is_online);
        assert_eq!(d.miner_count, 45);
        assert_eq!(d.session_count, 12);
        assert_eq!(d.status, "demo");
    }

    #[tokio::test]
    /// What: Unreachable router resolves to the demo summary without error.
    async fn resolve_with_unreachable_router_is_demo() {
        let client = RouterClient::new(
            "http://127.0.0.1:9",
            "t",
            std::time::Duration::from_millis(500),
        );
        let raw = aggregate(&client).await;
        assert_eq!(raw.miner_count, 0);
        assert!(!raw.is_online);
        assert_eq!(resolve_network_stats(&client).await, demo_stats());
    }

    #[tokio::test]
    /// What: A panic during aggregation yields the demo summary instead of propagating.
    async fn panicking_aggregation_degrades_to_demo() {
        let shown = resolve_with(async { panic!("aggregation blew up") }).await;
        assert_eq!(shown, demo_stats());
    }

    #[tokio::test]
    /// What: A completed aggregation still goes through the demo decision.
    async fn resolve_with_applies_fallback_rule() {
        let live = NetworkStats {
            is_online: true,
            miner_count: 2,
            session_count: 0,
            status: "ok".into(),
        };
        let expected = live.clone();
        assert_eq!(resolve_with(async move { live }).await, expected);

        let empty = combine(None, &[], &[]);
        assert_eq!(resolve_with(async move { empty }).await, demo_stats());
    }
}
