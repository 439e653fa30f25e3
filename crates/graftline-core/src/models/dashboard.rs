use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate counts plus a recent-activity feed, as returned by the dashboard
/// statistics endpoint. Read-only; the projection layer maps `status` and
/// `icon` onto style tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DashboardStats {
    pub total_requests: u64,
    pub approved: u64,
    pub pending: u64,
    pub denied: u64,
    pub activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ActivityItem {
    pub message: Option<String>,
    /// Free-form status tag; unrecognized values fall back to a generic style.
    pub status: Option<String>,
    /// Free-form icon tag; unrecognized values fall back to the document icon.
    pub icon: Option<String>,
    pub occurred_at: Option<jiff::Timestamp>,
}
