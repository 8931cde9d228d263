//! End-to-end network status resolution against a mock router.

use std::time::Duration;

use cortexhub::sources::{
    NetworkStats, RouterClient, aggregate, demo_stats, resolve_network_stats,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RouterClient {
    RouterClient::new(&server.uri(), "test-token", Duration::from_secs(2))
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
/// What: A healthy router with miners is shown as observed.
///
/// - Input: status `ok`, 3 miners, 1 session
/// - Output: `{ true, 3, 1, "ok" }`
async fn healthy_router_with_miners_is_live() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/status", json!({"status": "ok", "version": "1.0"})).await;
    mount_json(
        &server,
        "/api/v1/miners",
        json!([
            {"id": "m1", "address": "0x1", "status": "active"},
            {"id": "m2", "address": "0x2", "status": "active", "model": "llama"},
            {"id": "m3", "address": "0x3", "status": "idle"}
        ]),
    )
    .await;
    mount_json(
        &server,
        "/api/v1/sessions",
        json!([{"id": 7, "status": "open", "tasks": 2}]),
    )
    .await;

    let stats = resolve_network_stats(&client(&server)).await;
    assert_eq!(
        stats,
        NetworkStats {
            is_online: true,
            miner_count: 3,
            session_count: 1,
            status: "ok".into(),
        }
    );
    assert!(!stats.is_demo());
}

#[tokio::test]
/// What: Healthy router without miners is replaced by the demo summary.
///
/// - Input: `{health: "healthy"}`, empty miner and session lists
/// - Output: Raw aggregate `{ true, 0, 0, "unknown" }`; displayed summary is demo
async fn healthy_without_miners_shows_demo() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/status", json!({"health": "healthy"})).await;
    mount_json(&server, "/api/v1/miners", json!([])).await;
    mount_json(&server, "/api/v1/sessions", json!([])).await;

    let c = client(&server);
    let raw = aggregate(&c).await;
    assert!(raw.is_online);
    assert_eq!(raw.miner_count, 0);
    assert_eq!(raw.status, "unknown");
    assert_eq!(resolve_network_stats(&c).await, demo_stats());
}

#[tokio::test]
/// What: Every read failing still resolves, to the demo summary.
///
/// - Input: 500 on status, 404 on miners, malformed sessions body
/// - Output: Demo summary, no error
async fn all_reads_failing_resolve_to_demo() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let c = client(&server);
    let raw = aggregate(&c).await;
    assert_eq!(
        raw,
        NetworkStats {
            is_online: false,
            miner_count: 0,
            session_count: 0,
            status: "unknown".into(),
        }
    );
    assert_eq!(resolve_network_stats(&c).await, demo_stats());
}

#[tokio::test]
/// What: One failing read does not hide the others.
///
/// - Input: status fails, 2 miners, 4 sessions
/// - Output: Offline summary with live counts (no demo substitution)
async fn partial_failure_keeps_successful_reads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/api/v1/miners",
        json!([
            {"id": "m1", "address": "0x1", "status": "active"},
            {"id": "m2", "address": "0x2", "status": "active"}
        ]),
    )
    .await;
    mount_json(
        &server,
        "/api/v1/sessions",
        json!([
            {"id": 1, "status": "open", "tasks": 0},
            {"id": 2, "status": "open", "tasks": 1},
            {"id": 3, "status": "closed", "tasks": 5},
            {"id": 4, "status": "open", "tasks": 0}
        ]),
    )
    .await;

    let stats = resolve_network_stats(&client(&server)).await;
    assert!(!stats.is_online);
    assert_eq!(stats.miner_count, 2);
    assert_eq!(stats.session_count, 4);
    assert_eq!(stats.status, "unknown");
}

#[tokio::test]
/// What: Irregular miner and session items still count toward a live summary.
///
/// - Input: status `ok`; miners with a numeric id and a `null` status; a session with a string id
/// - Output: `{ true, 3, 1, "ok" }`, no demo substitution
async fn irregular_items_keep_live_counts() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/status", json!({"status": "ok"})).await;
    mount_json(
        &server,
        "/api/v1/miners",
        json!([
            {"id": "m1", "address": "0x1", "status": "active"},
            {"id": 2},
            {"id": "m3", "status": null}
        ]),
    )
    .await;
    mount_json(&server, "/api/v1/sessions", json!([{"id": "s-1"}])).await;

    let stats = resolve_network_stats(&client(&server)).await;
    assert_eq!(
        stats,
        NetworkStats {
            is_online: true,
            miner_count: 3,
            session_count: 1,
            status: "ok".into(),
        }
    );
}
