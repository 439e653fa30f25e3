use graftline_projection::catalogs::{PLACE_OF_SERVICE_CATALOG, PRODUCT_CATALOG};
use graftline_projection::selection::{Selection, render_selection};

#[test]
fn one_flag_per_catalog_entry_in_catalog_order() {
    let chosen = vec![
        "Helicoll Q4164".to_string(),
        "Membrane Wrap Q4205".to_string(),
    ];
    let flags = render_selection(&PRODUCT_CATALOG, Selection::Many(&chosen));

    assert_eq!(flags.len(), PRODUCT_CATALOG.len());
    for (flag, item) in flags.iter().zip(PRODUCT_CATALOG) {
        assert_eq!(flag.label, item);
        assert_eq!(flag.selected, chosen.iter().any(|c| c == item));
    }
    assert_eq!(flags.iter().filter(|f| f.selected).count(), 2);
}

#[test]
fn absent_selection_renders_all_false() {
    let flags = render_selection(&PRODUCT_CATALOG, Selection::Absent);
    assert_eq!(flags.len(), PRODUCT_CATALOG.len());
    assert!(flags.iter().all(|f| !f.selected));
}

#[test]
fn scalar_selection_matches_exactly_one_entry() {
    let flags = render_selection(
        &PLACE_OF_SERVICE_CATALOG,
        Selection::One("PHYSICIAN OFFICE (POS 11)"),
    );
    assert_eq!(flags.len(), 5);
    assert_eq!(flags.iter().filter(|f| f.selected).count(), 1);
    assert!(flags[0].selected);
}

#[test]
fn unknown_scalar_renders_none_selected() {
    let flags = render_selection(&PLACE_OF_SERVICE_CATALOG, Selection::One("TELEHEALTH"));
    assert!(flags.iter().all(|f| !f.selected));
}

#[test]
fn extra_selections_outside_the_catalog_are_silently_dropped() {
    let chosen = vec![
        "Helicoll Q4164".to_string(),
        "Discontinued Graft Q9999".to_string(),
    ];
    let flags = render_selection(&PRODUCT_CATALOG, Selection::Many(&chosen));
    assert_eq!(flags.len(), PRODUCT_CATALOG.len());
    assert_eq!(flags.iter().filter(|f| f.selected).count(), 1);
    assert!(flags.iter().all(|f| f.label != "Discontinued Graft Q9999"));
}

#[test]
fn membership_is_case_sensitive() {
    let chosen = vec!["helicoll q4164".to_string()];
    let flags = render_selection(&PRODUCT_CATALOG, Selection::Many(&chosen));
    assert!(flags.iter().all(|f| !f.selected));
}
