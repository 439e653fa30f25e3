//! The fixed field catalogs shared by every consumer of an IVR record.
//!
//! Selection-state rendering depends on exact, case-sensitive string equality
//! against these values, so there is exactly one definition of each catalog and
//! it never mutates at runtime. Order is display order.

/// Product labels as they appear on the order form, billing code suffix
/// included.
pub const PRODUCT_CATALOG: [&str; 17] = [
    "Membrane Wrap Q4205",
    "Membrane Wrap Hydro Q4290",
    "Dual Layer Impax Membrane Q4262",
    "Tri-Membrane Wrap Q4271",
    "Helicoll Q4164",
    "Amnio Quad-Core Q4294",
    "Amnio Tri-Core Q4295",
    "Complete ACA Q4303",
    "Complete AA Q4304",
    "Complete FT Q4300",
    "Complete SL Q4301",
    "Barrera Q4285",
    "Axolotl Graft Q4215",
    "Axolotl DualGraft Q4216",
    "Emerge Matrix Q4297",
    "Rampart Q4312",
    "Carepatch Q4236",
];

/// Fixed place-of-service choices. A record may instead carry
/// [`OTHER_PLACE_OF_SERVICE`], which is a sentinel alongside the catalog, not a
/// member of it.
pub const PLACE_OF_SERVICE_CATALOG: [&str; 5] = [
    "PHYSICIAN OFFICE (POS 11)",
    "HOME (POS 12)",
    "ASSISTED LIVING FACILITY (POS 13)",
    "SKILLED NURSING FACILITY (POS 31)",
    "NURSING FACILITY (POS 32)",
];

/// Sentinel place-of-service value; triggers the free-text "specify" field.
pub const OTHER_PLACE_OF_SERVICE: &str = "OTHER";

/// A CPT code pair with its human-readable label. Lookup key is `code`, exact
/// match.
#[derive(Debug, Clone, Copy)]
pub struct WoundBillingCode {
    pub code: &'static str,
    pub label: &'static str,
}

pub const WOUND_BILLING_CODE_CATALOG: [WoundBillingCode; 4] = [
    WoundBillingCode {
        code: "15271/15272",
        label: "LEGS/ARMS/TRUNK ≤ 100 SQ CM",
    },
    WoundBillingCode {
        code: "15273/15274",
        label: "LEGS/ARMS/TRUNK > 100 SQ CM",
    },
    WoundBillingCode {
        code: "15277/15278",
        label: "FEET/HANDS/HEAD ≤ 100 SQ CM",
    },
    WoundBillingCode {
        code: "15275/15276",
        label: "FEET/HANDS/HEAD > 100 SQ CM",
    },
];
