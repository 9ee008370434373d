//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own notification store
//! living in a temporary directory.

use super::constants::*;
use lingua_notify::notifications::{
    open_notification_store, NotificationService, NotificationStore, StorageBackend,
};
use lingua_notify::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated notification store
///
/// When dropped, the server gracefully shuts down and temp resources are
/// cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Notification store for direct access in tests
    pub store: Arc<dyn NotificationStore>,

    // Private fields - keep resources alive until drop
    _temp_db_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// This function:
    /// 1. Creates a temporary directory for the notification store
    /// 2. Opens the store with the requested backend
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Store creation fails
    /// - Port binding fails
    /// - Server fails to start
    /// - Server doesn't become ready within timeout
    pub async fn spawn(backend: StorageBackend) -> Self {
        let temp_db_dir = TempDir::new().expect("Failed to create temp db dir");

        let store = open_notification_store(
            backend,
            &temp_db_dir.path().join("notifications.db"),
            &temp_db_dir.path().join("notifications.json"),
        )
        .expect("Failed to open notification store");
        let store_for_test = store.clone();

        let notifications = Arc::new(NotificationService::new(store));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
        };

        let app = make_app(config, notifications);

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            store: store_for_test,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    // Server is ready
                    return;
                }
                _ => {
                    // Server not ready yet, wait and retry
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
