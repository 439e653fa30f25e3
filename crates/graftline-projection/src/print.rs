//! The print-ready projection of a single IVR request record.
//!
//! `project_print` derives every display string and conditional-visibility
//! flag the print surface needs. The record is read-only here; all fallback
//! resolution (`"N/A"`, unselected flags, out-of-network default) happens in
//! this pass so the presentation layer can render each section verbatim.

use graftline_core::models::ivr::{InsuranceInfo, IvrRequestRecord};
use serde::Serialize;
use ts_rs::TS;

use crate::catalogs::{OTHER_PLACE_OF_SERVICE, PLACE_OF_SERVICE_CATALOG, PRODUCT_CATALOG};
use crate::labels::{
    NOT_AVAILABLE, answer_display, display_or_na, is_yes, network_status, wound_code_label,
};
use crate::selection::{Selection, SelectionFlag, render_selection};

/// Shown alongside the Part A stay answer when it is "yes".
pub const PART_A_WARNING: &str = "Part B services cannot be billed";

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IvrPrintView {
    pub request_id: String,
    pub date_created: String,
    pub sales_representative: String,
    pub demographics: DemographicsSection,
    pub products: Vec<SelectionFlag>,
    pub place_of_service: PlaceOfServiceSection,
    pub primary_insurance: InsuranceSection,
    pub secondary_insurance: InsuranceSection,
    pub authorization: AuthorizationSection,
    pub wound: WoundSection,
    pub signature: SignatureSection,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DemographicsSection {
    pub physician_name: String,
    pub physician_specialty: String,
    pub facility_name: String,
    pub management_co: String,
    pub facility_address: String,
    pub facility_city_state_zip: String,
    pub contact_name: String,
    pub contact_ph_email: String,
    pub facility_npi: String,
    pub tax_id: String,
    pub ptan: String,
    pub medicaid_number: String,
    pub phone: String,
    pub fax: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlaceOfServiceSection {
    /// Fixed-choice flags in catalog order. An unrecognized scalar matches
    /// nothing and therefore renders as "none selected".
    pub choices: Vec<SelectionFlag>,
    pub other_visible: bool,
    pub other_specify: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InsuranceSection {
    pub insurance_name: String,
    pub policy_number: String,
    pub payer_phone: String,
    pub network_status: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthorizationSection {
    pub permission_to_initiate_pa: String,
    pub is_in_hospice: String,
    pub is_in_part_a_stay: String,
    pub is_under_post_op: String,
    /// Present exactly when the Part A answer is "yes".
    pub part_a_warning: Option<String>,
    pub post_op_visible: bool,
    /// Conditionally mandatory once `post_op_visible`; falls back to "N/A"
    /// rather than being omitted.
    pub post_op_cpt: String,
    pub surgery_date: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WoundSection {
    pub location_of_wound: String,
    pub billing_code_label: String,
    pub icd10_codes: String,
    pub total_wound_size: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignatureSection {
    pub physician_signature_name: String,
    /// A typed signature name is what "signed" means on this form.
    pub signed: bool,
}

/// Project a record into its print view. Total: every field of the output is a
/// defined display value regardless of which record fields are present.
pub fn project_print(record: &IvrRequestRecord) -> IvrPrintView {
    let place_of_service = record.place_of_service.as_deref();
    let other_visible = place_of_service == Some(OTHER_PLACE_OF_SERVICE);

    let part_a_yes = is_yes(record.is_in_part_a_stay.as_deref());
    let post_op_visible = is_yes(record.is_under_post_op.as_deref());

    IvrPrintView {
        request_id: display_or_na(record.id.as_deref()),
        date_created: record
            .date_created
            .map(|ts| ts.strftime("%m/%d/%Y").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        sales_representative: display_or_na(record.sales_representative.as_deref()),
        demographics: DemographicsSection {
            physician_name: display_or_na(record.physician_name.as_deref()),
            physician_specialty: display_or_na(record.physician_specialty.as_deref()),
            facility_name: display_or_na(record.facility_name.as_deref()),
            management_co: display_or_na(record.management_co.as_deref()),
            facility_address: display_or_na(record.facility_address.as_deref()),
            facility_city_state_zip: display_or_na(record.facility_city_state_zip.as_deref()),
            contact_name: display_or_na(record.contact_name.as_deref()),
            contact_ph_email: display_or_na(record.contact_ph_email.as_deref()),
            facility_npi: display_or_na(record.facility_npi.as_deref()),
            tax_id: display_or_na(record.tax_id.as_deref()),
            ptan: display_or_na(record.ptan.as_deref()),
            medicaid_number: display_or_na(record.medicaid_number.as_deref()),
            phone: display_or_na(record.phone.as_deref()),
            fax: display_or_na(record.fax.as_deref()),
        },
        products: render_selection(
            &PRODUCT_CATALOG,
            Selection::Many(&record.selected_products),
        ),
        place_of_service: PlaceOfServiceSection {
            choices: render_selection(
                &PLACE_OF_SERVICE_CATALOG,
                match place_of_service {
                    Some(pos) => Selection::One(pos),
                    None => Selection::Absent,
                },
            ),
            other_visible,
            other_specify: display_or_na(record.other_pos_specify.as_deref()),
        },
        primary_insurance: insurance_section(record.primary.as_ref()),
        secondary_insurance: insurance_section(record.secondary.as_ref()),
        authorization: AuthorizationSection {
            permission_to_initiate_pa: answer_display(record.permission_to_initiate_pa.as_deref()),
            is_in_hospice: answer_display(record.is_in_hospice.as_deref()),
            is_in_part_a_stay: answer_display(record.is_in_part_a_stay.as_deref()),
            is_under_post_op: answer_display(record.is_under_post_op.as_deref()),
            part_a_warning: part_a_yes.then(|| PART_A_WARNING.to_string()),
            post_op_visible,
            post_op_cpt: display_or_na(record.post_op_cpt.as_deref()),
            surgery_date: display_or_na(record.surgery_date.as_deref()),
        },
        wound: WoundSection {
            location_of_wound: display_or_na(record.location_of_wound.as_deref()),
            billing_code_label: wound_code_label(record.wound_billing_code.as_deref()),
            icd10_codes: display_or_na(record.icd10_codes.as_deref()),
            total_wound_size: display_or_na(record.total_wound_size.as_deref()),
        },
        signature: SignatureSection {
            physician_signature_name: display_or_na(record.physician_signature_name.as_deref()),
            signed: record
                .physician_signature_name
                .as_deref()
                .is_some_and(|name| !name.trim().is_empty()),
        },
    }
}

fn insurance_section(info: Option<&InsuranceInfo>) -> InsuranceSection {
    let in_network = info.and_then(|i| i.in_network);
    InsuranceSection {
        insurance_name: display_or_na(info.and_then(|i| i.insurance_name.as_deref())),
        policy_number: display_or_na(info.and_then(|i| i.policy_number.as_deref())),
        payer_phone: display_or_na(info.and_then(|i| i.payer_phone.as_deref())),
        network_status: network_status(in_network).to_string(),
    }
}
