//! graftline-projection
//!
//! View-model projection for IVR request records. Pure data — no network
//! dependency. Takes an already-fetched [`IvrRequestRecord`] and derives the
//! print layout and history list views: catalog-keyed selection flags, label
//! resolution with defined fallbacks, conditional section visibility, and
//! status classification.
//!
//! Every function here is total and default-safe: a missing or unrecognized
//! field resolves to a fallback (`"N/A"`, `false`, or verbatim passthrough),
//! never an error, so one malformed field can never abort rendering of the
//! rest of the record.
//!
//! [`IvrRequestRecord`]: graftline_core::models::ivr::IvrRequestRecord

pub mod catalogs;
pub mod dashboard;
pub mod history;
pub mod labels;
pub mod print;
pub mod selection;

pub use history::project_history;
pub use print::project_print;
