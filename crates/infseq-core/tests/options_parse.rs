use infseq_core::{SeqError, SequenceOptions, DEFAULT_CACHE_CAPACITY, REPR_VALUES};

#[test]
fn defaults_match_the_engine_constants() {
    let options = SequenceOptions::default();
    assert_eq!(options.cache_capacity, DEFAULT_CACHE_CAPACITY);
    assert_eq!(options.cache_capacity, 1024);
    assert_eq!(options.repr_values, REPR_VALUES);
    assert!(options.validate().is_ok());
}

#[test]
fn toml_fields_default_individually() {
    let options = SequenceOptions::from_toml_str("cache_capacity = 16\n").unwrap();
    assert_eq!(options.cache_capacity, 16);
    assert_eq!(options.repr_values, REPR_VALUES);

    let options = SequenceOptions::from_toml_str("").unwrap();
    assert_eq!(options, SequenceOptions::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SequenceOptions::from_toml_str("cache_capacity = 16\neviction = \"fifo\"\n")
        .unwrap_err();
    match err {
        SeqError::InvalidConfiguration(info) => assert_eq!(info.code, "options-parse"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tiny_caches_are_rejected() {
    let err = SequenceOptions::with_cache_capacity(1).validate().unwrap_err();
    match err {
        SeqError::InvalidConfiguration(info) => {
            assert_eq!(info.code, "cache-capacity");
            assert_eq!(info.context.get("minimum"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
