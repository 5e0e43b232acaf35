use infseq_core::errors::{ErrorInfo, SeqError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", "3")
        .with_context("reason", "example")
}

#[test]
fn configuration_error_surface() {
    let err = SeqError::InvalidConfiguration(sample_info("conflicting-sources", "both given"));
    assert_eq!(err.info().code, "conflicting-sources");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn index_error_surfaces() {
    let err = SeqError::InvalidIndexValue(sample_info("negative-index", "negative"));
    assert_eq!(err.info().code, "negative-index");
    let err = SeqError::InvalidIndexType(sample_info("non-integer-index", "float key"));
    assert_eq!(err.info().context.get("index"), Some(&"3".to_string()));
}

#[test]
fn arithmetic_error_surface() {
    let err = SeqError::Arithmetic(sample_info("division-by-zero", "divide by zero"));
    assert_eq!(err.code(), "division-by-zero");
    assert!(!err.is_index_error());
    assert!(SeqError::InvalidIndexType(sample_info("non-integer-index", "x")).is_index_error());
}

#[test]
fn display_includes_context_and_hint() {
    let err = SeqError::EmptyReduction(
        ErrorInfo::new("empty-reduction", "nothing to fold")
            .with_context("terms", "0")
            .with_hint("supply a non-empty range"),
    );
    let text = err.to_string();
    assert_eq!(
        text,
        "empty reduction: [empty-reduction] nothing to fold (terms=0); supply a non-empty range"
    );
}

#[test]
fn display_without_context() {
    let err = SeqError::Arithmetic(ErrorInfo::new("overflow", "add overflowed"));
    assert_eq!(err.to_string(), "arithmetic failure: [overflow] add overflowed");
}

#[test]
fn errors_round_trip_json() {
    let err = SeqError::InvalidIndexValue(sample_info("negative-index", "negative"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"InvalidIndexValue\""));
    let decoded: SeqError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn context_accepts_any_displayable_value() {
    let info = ErrorInfo::new("index-out-of-range", "too far")
        .with_context("index", 300u64)
        .with_context("signed", -2i64)
        .with_context("index", 301u64);
    assert_eq!(info.context_value("index"), Some("301"));
    assert_eq!(info.context_value("signed"), Some("-2"));
    assert_eq!(info.context_value("missing"), None);
}

#[test]
fn bare_payload_serializes_without_empty_fields() {
    let info = ErrorInfo::new("overflow", "add overflowed");
    let json = serde_json::to_string(&info).expect("serialize");
    assert_eq!(json, r#"{"code":"overflow","message":"add overflowed"}"#);
    let decoded: ErrorInfo = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, info);
}
