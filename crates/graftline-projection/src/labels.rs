//! Display-label resolution with defined fallbacks.

use crate::catalogs::WOUND_BILLING_CODE_CATALOG;

/// The universal missing-field placeholder. The print surface is never handed
/// an undefined value to render.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn display_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Resolve a wound billing code to its human-readable label.
///
/// Absent resolves to `"N/A"`; a code outside the catalog passes through
/// verbatim so the form still shows what was submitted.
pub fn wound_code_label(code: Option<&str>) -> String {
    let Some(code) = code else {
        return NOT_AVAILABLE.to_string();
    };
    WOUND_BILLING_CODE_CATALOG
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.label.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// `true` only for the exact stored string `"yes"`. The form writes lowercase;
/// any other casing does not trigger conditional sections.
pub fn is_yes(answer: Option<&str>) -> bool {
    answer == Some("yes")
}

/// Uppercased display form of a yes/no answer, `"N/A"` when unanswered. The
/// coalesce happens before the transform so an absent answer can never fault
/// the view layer.
pub fn answer_display(answer: Option<&str>) -> String {
    match answer {
        Some(a) => a.to_uppercase(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Network status label for an insurance plan. Absent is conservatively
/// out-of-network.
pub fn network_status(in_network: Option<bool>) -> &'static str {
    if in_network.unwrap_or(false) {
        "In-Network"
    } else {
        "Out-of-Network"
    }
}
