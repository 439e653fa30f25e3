use graftline_core::models::ivr::IvrRequestRecord;

#[test]
fn deserializes_backend_camel_case() {
    let json = r#"{
        "id": "ivr-2041",
        "dateCreated": "2026-03-14T16:20:00Z",
        "salesRepresentative": "M. Okafor",
        "physicianName": "Dr. Lena Ortiz",
        "facilityNpi": "1093817465",
        "selectedProducts": ["Helicoll Q4164", "Membrane Wrap Q4205"],
        "placeOfService": "HOME (POS 12)",
        "primary": { "insuranceName": "Aetna", "inNetwork": true },
        "permissionToInitiatePA": "yes",
        "isInPartAStay": "no",
        "icd10Codes": "L97.429\nE11.621",
        "woundBillingCode": "15271/15272",
        "ivrStatus": "Approved",
        "pdfUrl": "https://cdn.example.com/ivr-2041.pdf"
    }"#;

    let record: IvrRequestRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id.as_deref(), Some("ivr-2041"));
    assert_eq!(record.sales_representative.as_deref(), Some("M. Okafor"));
    assert_eq!(record.selected_products.len(), 2);
    assert_eq!(record.permission_to_initiate_pa.as_deref(), Some("yes"));
    assert_eq!(record.is_in_part_a_stay.as_deref(), Some("no"));
    assert_eq!(record.icd10_codes.as_deref(), Some("L97.429\nE11.621"));
    assert_eq!(
        record.primary.as_ref().and_then(|p| p.in_network),
        Some(true)
    );
    assert!(record.secondary.is_none());
    assert_eq!(record.ivr_status.as_deref(), Some("Approved"));
    assert!(record.pdf_url.is_some());
}

#[test]
fn empty_object_is_a_valid_record() {
    let record: IvrRequestRecord = serde_json::from_str("{}").unwrap();
    assert!(record.id.is_none());
    assert!(record.date_created.is_none());
    assert!(record.selected_products.is_empty());
    assert!(record.primary.is_none());
}

#[test]
fn unrecognized_status_string_is_kept_verbatim() {
    // Classification to a known category happens in the projection layer;
    // the record itself never rejects a status value.
    let record: IvrRequestRecord =
        serde_json::from_str(r#"{"ivrStatus": "In Review"}"#).unwrap();
    assert_eq!(record.ivr_status.as_deref(), Some("In Review"));
}

#[test]
fn round_trips_through_backend_field_names() {
    let record: IvrRequestRecord = serde_json::from_str(
        r#"{"permissionToInitiatePA": "no", "otherPosSpecify": "Mobile clinic"}"#,
    )
    .unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["permissionToInitiatePA"], "no");
    assert_eq!(value["otherPosSpecify"], "Mobile clinic");
}
