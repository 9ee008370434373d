//! Notification data models

use anyhow::bail;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Notification category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Achievement,
    Reminder,
    Progress,
    System,
    Social,
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Achievement => "achievement",
            NotificationCategory::Reminder => "reminder",
            NotificationCategory::Progress => "progress",
            NotificationCategory::System => "system",
            NotificationCategory::Social => "social",
            NotificationCategory::Info => "info",
            NotificationCategory::Success => "success",
            NotificationCategory::Warning => "warning",
            NotificationCategory::Error => "error",
        }
    }
}

impl FromStr for NotificationCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "achievement" => NotificationCategory::Achievement,
            "reminder" => NotificationCategory::Reminder,
            "progress" => NotificationCategory::Progress,
            "system" => NotificationCategory::System,
            "social" => NotificationCategory::Social,
            "info" => NotificationCategory::Info,
            "success" => NotificationCategory::Success,
            "warning" => NotificationCategory::Warning,
            "error" => NotificationCategory::Error,
            other => bail!("Unknown notification category: {}", other),
        })
    }
}

/// Notification priority enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

impl NotificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPriority::Low => "low",
            NotificationPriority::Medium => "medium",
            NotificationPriority::High => "high",
        }
    }
}

impl FromStr for NotificationPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "low" => NotificationPriority::Low,
            "medium" => NotificationPriority::Medium,
            "high" => NotificationPriority::High,
            other => bail!("Unknown notification priority: {}", other),
        })
    }
}

/// A user-facing notification record.
///
/// The JSON representation uses camelCase field names to stay compatible
/// with the payload the web client reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Caller-assigned unique key. Saving an existing id replaces the record.
    pub id: String,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// Creation marker, the sole sort key. Serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
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

impl NotificationRecord {
    /// Fixed-width RFC 3339 UTC rendering (millisecond precision, `Z`
    /// suffix) so lexicographic ordering of stored timestamps matches
    /// chronological ordering.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Truncates a timestamp to millisecond precision, the canonical
/// resolution records are stored at. Both backends apply this on write so
/// the same operation sequence reads back identically from either one.
pub fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let sub_millis = timestamp.timestamp_subsec_nanos() % 1_000_000;
    timestamp - chrono::Duration::nanoseconds(sub_millis as i64)
}

/// Sorts records the way every read operation returns them: newest first,
/// id as the tiebreak for records sharing a timestamp.
pub fn sort_newest_first(records: &mut [NotificationRecord]) {
    records.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
}
