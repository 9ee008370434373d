//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all notification endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use lingua_notify::notifications::NotificationRecord;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

/// HTTP test client for the notification API
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Notification Endpoints
    // ========================================================================

    /// GET /v1/notifications
    pub async fn get_notifications(&self) -> Response {
        self.client
            .get(format!("{}/v1/notifications", self.base_url))
            .send()
            .await
            .expect("Get notifications request failed")
    }

    /// GET /v1/notifications, deserialized
    pub async fn list_notifications(&self) -> Vec<NotificationRecord> {
        let response = self.get_notifications().await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::OK,
            "Listing notifications failed"
        );
        response
            .json()
            .await
            .expect("Failed to parse notifications list")
    }

    /// GET /v1/notifications/unread-count
    pub async fn get_unread_count(&self) -> Response {
        self.client
            .get(format!("{}/v1/notifications/unread-count", self.base_url))
            .send()
            .await
            .expect("Get unread count request failed")
    }

    /// GET /v1/notifications/unread-count, deserialized
    pub async fn unread_count(&self) -> usize {
        let response = self.get_unread_count().await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response
            .json()
            .await
            .expect("Failed to parse unread count response");
        body["unread"].as_u64().expect("Missing unread field") as usize
    }

    /// POST /v1/notifications with an arbitrary JSON body
    pub async fn save_notification_raw(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/notifications", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Save notification request failed")
    }

    /// POST /v1/notifications with a minimal valid body
    ///
    /// The server fills in id and timestamp. Returns the created record.
    pub async fn save_notification(&self, category: &str, title: &str) -> NotificationRecord {
        let response = self
            .save_notification_raw(&json!({
                "category": category,
                "title": title,
                "message": format!("{} message", title),
                "priority": "medium",
            }))
            .await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::CREATED,
            "Saving notification failed"
        );
        response
            .json()
            .await
            .expect("Failed to parse created notification")
    }

    /// POST /v1/notifications with a full record (client-chosen id/timestamp)
    pub async fn save_record(&self, record: &NotificationRecord) -> Response {
        self.client
            .post(format!("{}/v1/notifications", self.base_url))
            .json(record)
            .send()
            .await
            .expect("Save record request failed")
    }

    /// PUT /v1/notifications (bulk replace)
    pub async fn save_all_notifications(&self, records: &[NotificationRecord]) -> Response {
        self.client
            .put(format!("{}/v1/notifications", self.base_url))
            .json(records)
            .send()
            .await
            .expect("Save all notifications request failed")
    }

    /// DELETE /v1/notifications/{id}
    pub async fn delete_notification(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/v1/notifications/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete notification request failed")
    }

    /// DELETE /v1/notifications
    pub async fn clear_all_notifications(&self) -> Response {
        self.client
            .delete(format!("{}/v1/notifications", self.base_url))
            .send()
            .await
            .expect("Clear all notifications request failed")
    }

    /// POST /v1/notifications/{id}/read
    pub async fn mark_notification_read(&self, id: &str) -> Response {
        self.client
            .post(format!("{}/v1/notifications/{}/read", self.base_url, id))
            .send()
            .await
            .expect("Mark notification read request failed")
    }

    /// POST /v1/notifications/read-all
    pub async fn mark_all_notifications_read(&self) -> Response {
        self.client
            .post(format!("{}/v1/notifications/read-all", self.base_url))
            .send()
            .await
            .expect("Mark all notifications read request failed")
    }
}
