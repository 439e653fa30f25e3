use graftline_client::{ClientError, FetchState};
use graftline_core::models::lead::{ContactLead, LeadValidationError};

#[test]
fn success_and_error_come_from_result() {
    let ok: FetchState<u32> = FetchState::from_result(Ok::<_, ClientError>(7));
    assert!(matches!(ok, FetchState::Success { data: 7 }));

    let err: FetchState<u32> = FetchState::from_result(Err::<u32, _>(
        ClientError::Validation(vec![LeadValidationError {
            field: "email".to_string(),
            message: "enter a valid email address".to_string(),
        }]),
    ));
    match err {
        FetchState::Error { message } => {
            assert_eq!(message, "validation failed on 1 field(s)");
        }
        other => panic!("expected error state, got {other:?}"),
    }
}

#[test]
fn retry_is_re_entrant() {
    let mut state: FetchState<u32> = FetchState::from_result(Err::<u32, _>(
        ClientError::Validation(Vec::new()),
    ));
    assert!(!state.is_loading());

    state.retry();
    assert!(state.is_loading());

    // A second outcome after retry replaces the state cleanly.
    state = FetchState::from_result(Ok::<_, ClientError>(42));
    assert!(matches!(state, FetchState::Success { data: 42 }));
}

#[test]
fn states_serialize_with_a_discriminant_tag() {
    let loading: FetchState<u32> = FetchState::Loading;
    assert_eq!(
        serde_json::to_value(&loading).unwrap()["state"],
        "loading"
    );

    let success: FetchState<u32> = FetchState::Success { data: 3 };
    let value = serde_json::to_value(&success).unwrap();
    assert_eq!(value["state"], "success");
    assert_eq!(value["data"], 3);
}

#[test]
fn validation_failure_blocks_the_request_locally() {
    // An unroutable base URL proves no request is attempted: an invalid lead
    // must fail with Validation, not Transport.
    let client = graftline_client::PortalClient::new("http://127.0.0.1:1/");
    let result = client.submit_lead(&ContactLead::default());
    match result {
        Err(ClientError::Validation(errors)) => assert_eq!(errors.len(), 8),
        other => panic!("expected validation failure, got {other:?}"),
    }
}
