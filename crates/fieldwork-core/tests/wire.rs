use fieldwork_core::models::response::Response;
use fieldwork_core::models::session::{Session, SessionRecord, SessionStatus};

#[test]
fn status_uses_kebab_case_on_the_wire() {
    let json = serde_json::to_string(&SessionStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");

    let back: SessionStatus = serde_json::from_str("\"in-progress\"").unwrap();
    assert_eq!(back, SessionStatus::InProgress);
}

#[test]
fn status_accepts_legacy_snake_case_spelling() {
    let back: SessionStatus = serde_json::from_str("\"in_progress\"").unwrap();
    assert_eq!(back, SessionStatus::InProgress);
}

#[test]
fn response_timestamp_accepts_iso_string() {
    let json = r#"{"questionId":"PE_01","answer":"12","timestamp":"2024-03-01T10:00:00Z"}"#;
    let response: Response = serde_json::from_str(json).unwrap();
    assert_eq!(response.timestamp.to_string(), "2024-03-01T10:00:00Z");
}

#[test]
fn response_timestamp_accepts_epoch_milliseconds() {
    let json = r#"{"questionId":"PE_01","answer":"12","timestamp":1709287200000}"#;
    let response: Response = serde_json::from_str(json).unwrap();
    assert_eq!(
        response.timestamp,
        jiff::Timestamp::from_millisecond(1_709_287_200_000).unwrap()
    );
}

#[test]
fn session_record_round_trips_with_flattened_metadata() {
    let now: jiff::Timestamp = "2024-03-01T10:00:00Z".parse().unwrap();
    let record = SessionRecord {
        session: Session {
            id: "abc".to_string(),
            interviewer: "Dana".to_string(),
            interviewer_email: None,
            interview_date: "2024-03-01".to_string(),
            platform_name: "RideCo".to_string(),
            employment_type: "Freelancer".to_string(),
            interview_code: "RC-7".to_string(),
            status: SessionStatus::InProgress,
            completed_categories: vec!["BI".to_string()],
            start_time: now,
            end_time: None,
            last_updated: now,
            current_question_index: 2,
        },
        responses: vec![Response::new("BI_01", "RideCo", now)],
    };

    let json = serde_json::to_value(&record).unwrap();
    // Metadata is flattened to the top level of the document.
    assert_eq!(json["id"], "abc");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["startTime"], "2024-03-01T10:00:00Z");
    assert!(json.get("endTime").is_none());

    let back: SessionRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back.session.id, "abc");
    assert_eq!(back.session.start_time, now);
    assert_eq!(back.responses.len(), 1);
    assert_eq!(back.responses[0].answer, "RideCo");
}

#[test]
fn sanitized_trims_id_and_answer() {
    let now = jiff::Timestamp::UNIX_EPOCH;
    let response = Response::new("  PE_01 ", "  42  ", now).sanitized();
    assert_eq!(response.question_id, "PE_01");
    assert_eq!(response.answer, "42");
}

#[test]
fn sentinel_classification() {
    let now = jiff::Timestamp::UNIX_EPOCH;
    assert!(Response::new("q", "SKIPPED", now).is_skipped());
    assert!(Response::new("q", "N/A", now).is_not_applicable());
    assert!(Response::new("q", "N/A", now).is_answered());
    assert!(!Response::new("q", "SKIPPED", now).is_answered());
    assert!(Response::new("q", "   ", now).is_blank());
}

#[test]
fn legacy_input_type_strings_all_map() {
    use fieldwork_core::models::question::InputType;

    for (raw, expected) in [
        ("text", InputType::FreeText),
        ("free_text", InputType::FreeText),
        ("textarea", InputType::LongText),
        ("long_text", InputType::LongText),
        ("number", InputType::Numeric),
        ("numeric", InputType::Numeric),
        ("date", InputType::Date),
        ("dropdown", InputType::SingleChoice),
        ("multiple_choice", InputType::SingleChoice),
        ("multipleChoice", InputType::SingleChoice),
        ("single_choice", InputType::SingleChoice),
        ("yesno", InputType::YesNo),
        ("yes_no", InputType::YesNo),
    ] {
        assert_eq!(InputType::from_legacy(raw).unwrap(), expected, "raw {raw:?}");
    }
}

#[test]
fn unknown_input_type_string_is_an_error() {
    use fieldwork_core::error::CoreError;
    use fieldwork_core::models::question::InputType;

    match InputType::from_legacy("slider") {
        Err(CoreError::UnknownInputType(raw)) => assert_eq!(raw, "slider"),
        other => panic!("expected UnknownInputType, got {other:?}"),
    }
}
