//! Integration tests for the live connection counter against a stub
//! traffic-stats server.

use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use gate_access::OnlineStats;

/// Bind a stub stats server on an ephemeral port and return the port.
async fn spawn_stub(router: Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    port
}

#[tokio::test]
async fn reports_live_count_with_secret_header() {
    let router = Router::new().route(
        "/online",
        get(|headers: HeaderMap| async move {
            if headers.get("Authorization").map(|v| v.as_bytes()) != Some(b"shared-secret") {
                return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
            }
            axum::Json(serde_json::json!({"alice": 2, "bob": 1})).into_response()
        }),
    );
    let port = spawn_stub(router).await;

    let online = OnlineStats::new(port, "shared-secret");
    assert_eq!(online.count_for("127.0.0.1", "alice").await, 2);
    assert_eq!(online.count_for("127.0.0.1", "bob").await, 1);
    assert_eq!(online.count_for("127.0.0.1", "mallory").await, 0);
}

#[tokio::test]
async fn wrong_secret_degrades_to_zero() {
    let router = Router::new().route(
        "/online",
        get(|headers: HeaderMap| async move {
            if headers.get("Authorization").map(|v| v.as_bytes()) != Some(b"shared-secret") {
                return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
            }
            axum::Json(serde_json::json!({"alice": 2})).into_response()
        }),
    );
    let port = spawn_stub(router).await;

    let online = OnlineStats::new(port, "wrong-secret");
    assert_eq!(online.count_for("127.0.0.1", "alice").await, 0);
}

#[tokio::test]
async fn service_unavailable_degrades_to_zero() {
    let router = Router::new().route(
        "/online",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let port = spawn_stub(router).await;

    let online = OnlineStats::new(port, "shared-secret");
    assert_eq!(online.count_for("127.0.0.1", "alice").await, 0);
}

#[tokio::test]
async fn invalid_json_degrades_to_zero() {
    let router = Router::new().route("/online", get(|| async { "not json at all" }));
    let port = spawn_stub(router).await;

    let online = OnlineStats::new(port, "shared-secret");
    assert_eq!(online.count_for("127.0.0.1", "alice").await, 0);
}

#[tokio::test]
async fn connection_refused_degrades_to_zero() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let online = OnlineStats::new(port, "shared-secret");
    assert_eq!(online.count_for("127.0.0.1", "alice").await, 0);
}
