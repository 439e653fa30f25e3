//! History-list projection: status classification and most-recent flagging.

use graftline_core::models::ivr::IvrRequestRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::labels::{NOT_AVAILABLE, display_or_na};

/// Display category for a retrieved record's status. Classification is total:
/// anything outside the three recognized strings is Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IvrStatusCategory {
    Approved,
    Pending,
    Denied,
}

impl IvrStatusCategory {
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            Some("Approved") => IvrStatusCategory::Approved,
            Some("Denied") => IvrStatusCategory::Denied,
            _ => IvrStatusCategory::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IvrStatusCategory::Approved => "Approved",
            IvrStatusCategory::Pending => "Pending",
            IvrStatusCategory::Denied => "Denied",
        }
    }

    /// Badge style tag for the history list.
    pub fn style(self) -> &'static str {
        match self {
            IvrStatusCategory::Approved => "success",
            IvrStatusCategory::Pending => "warning",
            IvrStatusCategory::Denied => "danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            IvrStatusCategory::Approved => "check-circle",
            IvrStatusCategory::Pending => "clock",
            IvrStatusCategory::Denied => "x-circle",
        }
    }
}

/// One row of the request-history list.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HistoryEntry {
    pub id: String,
    pub date_created: Option<jiff::Timestamp>,
    pub date_display: String,
    pub status: IvrStatusCategory,
    pub status_label: String,
    pub style: String,
    pub icon: String,
    /// Download link when the print artifact exists; the list shows an
    /// "unavailable" placeholder otherwise.
    pub pdf_url: Option<String>,
    pub pdf_available: bool,
    pub is_most_recent: bool,
}

/// Project a subject's records into history rows, most recent first.
///
/// The backend's ordering is not trusted: rows are sorted here by
/// `date_created` descending (records without a timestamp sink to the end,
/// keeping their retrieval order) before the head row is flagged most-recent.
pub fn project_history(records: &[IvrRequestRecord]) -> Vec<HistoryEntry> {
    let mut ordered: Vec<&IvrRequestRecord> = records.iter().collect();
    ordered.sort_by(|a, b| match (b.date_created, a.date_created) {
        (Some(b_ts), Some(a_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => std::cmp::Ordering::Equal,
    });

    ordered
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let status = IvrStatusCategory::classify(record.ivr_status.as_deref());
            HistoryEntry {
                id: display_or_na(record.id.as_deref()),
                date_created: record.date_created,
                date_display: record
                    .date_created
                    .map(|ts| ts.strftime("%m/%d/%Y").to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                status,
                status_label: status.label().to_string(),
                style: status.style().to_string(),
                icon: status.icon().to_string(),
                pdf_url: record.pdf_url.clone(),
                pdf_available: record.pdf_url.is_some(),
                is_most_recent: index == 0,
            }
        })
        .collect()
}
