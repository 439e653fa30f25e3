//! Dashboard activity-feed style maps.
//!
//! Both maps are total with a generic fallback, the same shape as history
//! status classification: an unrecognized tag never leaves an item unstyled.

/// Badge style for an activity item's status tag. Four known categories;
/// anything else renders generic gray.
pub fn activity_status_style(status: Option<&str>) -> &'static str {
    match status {
        Some("approved") => "green",
        Some("pending") => "yellow",
        Some("denied") => "red",
        Some("submitted") => "blue",
        _ => "gray",
    }
}

/// Icon style for an activity item's icon tag. Four known categories; anything
/// else falls back to the plain document icon.
pub fn activity_icon_style(icon: Option<&str>) -> &'static str {
    match icon {
        Some("form") => "clipboard",
        Some("upload") => "arrow-up-tray",
        Some("approval") => "check-badge",
        Some("message") => "chat-bubble",
        _ => "document",
    }
}
