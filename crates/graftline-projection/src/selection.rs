use serde::Serialize;
use ts_rs::TS;

/// One catalog entry paired with whether the record selected it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SelectionFlag {
    pub label: String,
    pub selected: bool,
}

/// A record's selection value for a catalog-keyed field.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// Multi-select semantics: membership test against the chosen labels.
    Many(&'a [String]),
    /// Single-select semantics: equality test against the one chosen label.
    One(&'a str),
    /// Nothing chosen; every flag renders unselected.
    Absent,
}

/// Render selection flags for a catalog, one per entry, in catalog order.
///
/// Iteration is catalog-driven: chosen values outside the catalog are silently
/// unrepresented rather than rejected, which is also how an unrecognized
/// single-select scalar renders as "none selected".
pub fn render_selection(catalog: &[&str], selection: Selection<'_>) -> Vec<SelectionFlag> {
    catalog
        .iter()
        .map(|item| {
            let selected = match selection {
                Selection::Many(chosen) => chosen.iter().any(|c| c == item),
                Selection::One(chosen) => chosen == *item,
                Selection::Absent => false,
            };
            SelectionFlag {
                label: (*item).to_string(),
                selected,
            }
        })
        .collect()
}
