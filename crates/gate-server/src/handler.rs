//! The `POST /auth` request handler.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use gate_access::{AccessError, OnlineStats};

use crate::state::AppState;

/// Authentication callback sent by the edge proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    /// Destination address; informational, not used for routing.
    #[serde(default)]
    pub addr: Option<String>,
    /// The client credential.
    pub auth: String,
    /// Optional traffic-byte hint, non-negative.
    #[serde(default)]
    pub tx: Option<i64>,
}

/// Allow/deny decision returned to the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub ok: bool,
    /// Username of the resolved client, omitted when unresolved.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl AuthResponse {
    fn allow(id: String) -> Self {
        Self { ok: true, id }
    }

    fn deny(id: String) -> Self {
        Self { ok: false, id }
    }
}

pub(crate) async fn handle_auth(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "failed to decode auth request");
            return (StatusCode::BAD_REQUEST, "failed to decode request").into_response();
        }
    };

    if req.auth.is_empty() {
        warn!("invalid auth request: auth is empty");
        return (StatusCode::BAD_REQUEST, "invalid request").into_response();
    }
    if matches!(req.tx, Some(tx) if tx < 0) {
        warn!("invalid auth request: tx is negative");
        return (StatusCode::BAD_REQUEST, "invalid request").into_response();
    }

    // Expiry and ceiling against a zero count; the live count is applied
    // below only if these gates pass.
    let verdict = match state.checker.check_access(&req.auth, 0).await {
        Ok(verdict) => verdict,
        Err(AccessError::NotFound) => {
            warn!("client not found");
            return (StatusCode::OK, Json(AuthResponse::deny(String::new()))).into_response();
        }
        Err(err) => {
            error!(error = %err, "failed to check access");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response();
        }
    };

    if !verdict.allowed {
        debug!(username = %verdict.client.username, "access denied");
        return (
            StatusCode::OK,
            Json(AuthResponse::deny(verdict.client.username)),
        )
            .into_response();
    }

    let peer = peer.to_string();
    let host = OnlineStats::peer_host(&peer);
    let live = state.online.count_for(host, &verdict.client.username).await;
    if verdict.client.over_limit(live) {
        debug!(
            username = %verdict.client.username,
            live,
            max_conns = verdict.client.max_conns,
            "access denied: connection ceiling reached"
        );
        return (
            StatusCode::OK,
            Json(AuthResponse::deny(verdict.client.username)),
        )
            .into_response();
    }

    debug!(username = %verdict.client.username, "access granted");
    (
        StatusCode::OK,
        Json(AuthResponse::allow(verdict.client.username)),
    )
        .into_response()
}

pub(crate) async fn handle_health() -> &'static str {
    "ok"
}
