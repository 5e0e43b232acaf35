use infseq::{BinaryOp, CacheStats, Convolution, LazySequence, RangeSpec, SliceSpec};

#[test]
fn range_spec_round_trip_json() {
    let range = RangeSpec::new(10, -1).with_step(-3);
    let json = serde_json::to_string(&range).expect("serialize");
    let decoded: RangeSpec = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, range);

    let implied: RangeSpec = serde_json::from_str(r#"{"start": 0, "stop": 5}"#).expect("defaults");
    assert_eq!(implied, RangeSpec::upto(5));
}

#[test]
fn slice_spec_round_trip_json() {
    let spec = SliceSpec::starting_at(4).with_step(2).with_stop(20);
    let json = serde_json::to_string_pretty(&spec).expect("serialize");
    let decoded: SliceSpec = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, spec);

    let open: SliceSpec = serde_json::from_str(r#"{"start": 2}"#).expect("defaults");
    assert_eq!(open, SliceSpec::starting_at(2));
}

#[test]
fn operator_tags_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&BinaryOp::FloorDivide).expect("serialize"),
        "\"floor-divide\""
    );
    for op in BinaryOp::ALL {
        let json = serde_json::to_string(&op).expect("serialize");
        let decoded: BinaryOp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, op);
    }
    let kind: Convolution = serde_json::from_str("\"product\"").expect("deserialize");
    assert_eq!(kind, Convolution::Product);
    assert_eq!(
        serde_json::to_string(&Convolution::default()).expect("serialize"),
        "\"additive\""
    );
}

#[test]
fn cache_stats_round_trip_json() {
    let squares = LazySequence::from_fn(|i| i * i);
    squares.head(3).unwrap();
    squares.get(1).unwrap();
    let stats = squares.cache_stats();
    assert_eq!(
        stats,
        CacheStats {
            hits: 1,
            misses: 3,
            evictions: 0,
            len: 3,
            capacity: 1024,
        }
    );
    let json = serde_json::to_string(&stats).expect("serialize");
    let decoded: CacheStats = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, stats);
}
