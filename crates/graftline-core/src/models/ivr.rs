use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The canonical insurance verification request record.
///
/// Created by the submission workflow, persisted by the backend, and later
/// retrieved read-only for history listing or print rendering. Every field the
/// provider can leave blank is optional; display fallbacks are the projection
/// layer's job, never this type's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct IvrRequestRecord {
    /// Backend-assigned opaque identifier; absent until the record is persisted.
    pub id: Option<String>,
    /// Backend-assigned creation time.
    pub date_created: Option<jiff::Timestamp>,

    pub sales_representative: Option<String>,

    // Clinical / facility demographics
    pub physician_name: Option<String>,
    pub physician_specialty: Option<String>,
    pub facility_name: Option<String>,
    pub management_co: Option<String>,
    pub facility_address: Option<String>,
    pub facility_city_state_zip: Option<String>,
    pub contact_name: Option<String>,
    pub contact_ph_email: Option<String>,
    pub facility_npi: Option<String>,
    pub tax_id: Option<String>,
    pub ptan: Option<String>,
    pub medicaid_number: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,

    /// Product labels as checked on the form. Entries outside the product
    /// catalog are tolerated; catalog-keyed views simply never match them.
    pub selected_products: Vec<String>,

    /// One of the place-of-service catalog entries, or the sentinel `"OTHER"`.
    pub place_of_service: Option<String>,
    /// Free-text companion to `place_of_service == "OTHER"`.
    pub other_pos_specify: Option<String>,

    pub primary: Option<InsuranceInfo>,
    pub secondary: Option<InsuranceInfo>,

    // Authorization answers. The form stores the literal lowercase strings
    // "yes" / "no"; comparisons downstream are exact and case-sensitive.
    #[serde(rename = "permissionToInitiatePA")]
    pub permission_to_initiate_pa: Option<String>,
    pub is_in_hospice: Option<String>,
    pub is_in_part_a_stay: Option<String>,
    pub is_under_post_op: Option<String>,
    /// Required for display once `is_under_post_op` is "yes".
    pub post_op_cpt: Option<String>,
    pub surgery_date: Option<String>,

    // Wound detail
    pub location_of_wound: Option<String>,
    /// One of the wound billing code pairs; unrecognized codes display verbatim.
    pub wound_billing_code: Option<String>,
    pub icd10_codes: Option<String>,
    pub total_wound_size: Option<String>,

    /// Presence of a typed signature name stands in for "signed".
    pub physician_signature_name: Option<String>,

    // History-view fields, never part of a submission
    pub ivr_status: Option<String>,
    pub pdf_url: Option<String>,
}

/// Insurance coverage details, one each for primary and secondary plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct InsuranceInfo {
    pub insurance_name: Option<String>,
    pub policy_number: Option<String>,
    pub payer_phone: Option<String>,
    /// Absent is treated as out-of-network by every consumer.
    pub in_network: Option<bool>,
}
