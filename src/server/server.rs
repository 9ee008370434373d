use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::notifications::NotificationService;

use super::http_layers::log_requests;
use super::notification_routes;
use super::state::ServerState;
use super::{RequestsLoggingLevel, ServerConfig};

async fn home() -> &'static str {
    "lingua-notify-server"
}

pub fn make_app(config: ServerConfig, notifications: Arc<NotificationService>) -> Router {
    let state = ServerState {
        config,
        notifications,
    };

    Router::new()
        .route("/", get(home))
        .nest("/v1/notifications", notification_routes())
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    notifications: Arc<NotificationService>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, notifications);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
