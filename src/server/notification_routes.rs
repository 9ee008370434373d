//! Notification HTTP routes.
//!
//! Mutation endpoints go through the NotificationService facade, so they
//! always answer 2xx: a storage failure is logged server-side and the
//! operation silently takes no effect (the contract the web client was
//! built against).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notifications::{
    truncate_to_millis, NotificationCategory, NotificationPriority, NotificationRecord,
};
use crate::server::state::{GuardedNotificationService, ServerState};

// =============================================================================
// Request/Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNotificationBody {
    /// Record id; generated server-side when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// Creation time; defaults to now when absent.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read: bool,
    pub priority: NotificationPriority,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: usize,
}

// =============================================================================
// Handlers
// =============================================================================

async fn get_notifications(
    State(notifications): State<GuardedNotificationService>,
) -> impl IntoResponse {
    Json(notifications.get_all())
}

async fn get_unread_count(
    State(notifications): State<GuardedNotificationService>,
) -> impl IntoResponse {
    Json(UnreadCountResponse {
        unread: notifications.unread_count(),
    })
}

async fn save_notification(
    State(notifications): State<GuardedNotificationService>,
    Json(body): Json<SaveNotificationBody>,
) -> impl IntoResponse {
    let record = NotificationRecord {
        id: body.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        category: body.category,
        title: body.title,
        message: body.message,
        // Truncated to the stored precision so the response body matches
        // what later reads return
        timestamp: truncate_to_millis(body.timestamp.unwrap_or_else(Utc::now)),
        read: body.read,
        priority: body.priority,
        action_url: body.action_url,
        icon: body.icon,
        color: body.color,
    };

    notifications.save(&record);

    (StatusCode::CREATED, Json(record))
}

async fn save_all_notifications(
    State(notifications): State<GuardedNotificationService>,
    Json(records): Json<Vec<NotificationRecord>>,
) -> impl IntoResponse {
    notifications.save_all(&records);
    StatusCode::NO_CONTENT
}

async fn delete_notification(
    State(notifications): State<GuardedNotificationService>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    notifications.delete(&id);
    StatusCode::NO_CONTENT
}

async fn clear_all_notifications(
    State(notifications): State<GuardedNotificationService>,
) -> impl IntoResponse {
    notifications.clear_all();
    StatusCode::NO_CONTENT
}

async fn mark_notification_read(
    State(notifications): State<GuardedNotificationService>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    notifications.mark_as_read(&id);
    StatusCode::NO_CONTENT
}

async fn mark_all_notifications_read(
    State(notifications): State<GuardedNotificationService>,
) -> impl IntoResponse {
    notifications.mark_all_as_read();
    StatusCode::NO_CONTENT
}

// =============================================================================
// Router Construction
// =============================================================================

pub fn notification_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(get_notifications))
        .route("/", post(save_notification))
        .route("/", put(save_all_notifications))
        .route("/", delete(clear_all_notifications))
        .route("/unread-count", get(get_unread_count))
        .route("/read-all", post(mark_all_notifications_read))
        .route("/{id}", delete(delete_notification))
        .route("/{id}/read", post(mark_notification_read))
}
