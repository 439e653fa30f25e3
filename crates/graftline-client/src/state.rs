use serde::Serialize;
use ts_rs::TS;

/// Lifecycle of one view-triggered fetch: `Loading → Success | Error`,
/// re-entrant on manual retry (the view sets `Loading` again and re-issues the
/// call). There is exactly one outstanding fetch per view-open event, so no
/// cancellation or de-duplication is modeled.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum FetchState<T> {
    Loading,
    Success { data: T },
    Error { message: String },
}

impl<T> FetchState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Success { data },
            Err(e) => FetchState::Error {
                message: e.to_string(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Begin a manual retry: back to `Loading`, discarding any prior outcome.
    pub fn retry(&mut self) {
        *self = FetchState::Loading;
    }
}
