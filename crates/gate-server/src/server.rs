//! HTTP server setup and lifecycle.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use hyper::body::Incoming;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::{Service, ServiceExt};
use tower_http::timeout::TimeoutLayer;
use tracing::{debug, info, warn};

use gate_config::Config;

use crate::error::ServerError;
use crate::handler::{handle_auth, handle_health};
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth", post(handle_auth))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the server until the process is killed.
pub async fn run(config: &Config, state: AppState) -> Result<(), ServerError> {
    run_with_shutdown(config, state, CancellationToken::new()).await
}

/// Run the server with a cancellation token for graceful shutdown.
pub async fn run_with_shutdown(
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.http_server.address).await?;
    info!(addr = %listener.local_addr()?, "auth backend listening");
    serve_with_shutdown(listener, config, state, shutdown).await
}

/// Serve connections from an already-bound listener.
///
/// Exposed so integration tests can bind an ephemeral port themselves.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let app = router(state).layer(TimeoutLayer::new(Duration::from_secs(
        config.http_server.timeout_secs,
    )));
    let mut make_service = app.into_make_service_with_connect_info::<SocketAddr>();

    // The header-read timeout also covers the gap between keep-alive
    // requests, so idle connections are dropped after idle_timeout_secs.
    let mut builder = auto::Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(Duration::from_secs(config.http_server.idle_timeout_secs));

    let graceful = GracefulShutdown::new();

    loop {
        let (socket, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(conn) => conn,
                Err(err) => {
                    warn!(error = %err, "accept failed");
                    continue;
                }
            },
            _ = shutdown.cancelled() => break,
        };

        let service = unwrap_infallible(make_service.call(peer).await);
        let conn = builder
            .serve_connection_with_upgrades(
                TokioIo::new(socket),
                hyper::service::service_fn(move |request: Request<Incoming>| {
                    service.clone().oneshot(request)
                }),
            )
            .into_owned();
        let conn = graceful.watch(conn);

        tokio::spawn(async move {
            if let Err(err) = conn.await {
                debug!(error = %err, "connection closed with error");
            }
        });
    }

    info!("shutting down, draining connections");
    graceful.shutdown().await;
    info!("server stopped");
    Ok(())
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => match err {},
    }
}
