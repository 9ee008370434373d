//! Request logging middleware

use super::super::state::ServerState;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

#[derive(PartialEq, PartialOrd, Clone, Debug, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    Path,
}

impl Default for RequestsLoggingLevel {
    fn default() -> Self {
        Self::Path
    }
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub async fn log_requests(
    State(state): State<ServerState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let level = state.config.requests_logging_level.clone();

    if level == RequestsLoggingLevel::None {
        return next.run(request).await;
    }

    let start = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    info!(">>> {} {}", method, uri);

    let response = next.run(request).await;

    info!(
        "<<< {} {} {} took {}ms",
        response.status().as_u16(),
        method,
        uri,
        start.elapsed().as_millis()
    );

    response
}
