//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient};
//! use lingua_notify::StorageBackend;
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_notifications() {
//!     let server = TestServer::spawn(StorageBackend::Sqlite).await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_notifications().await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use server::TestServer;
