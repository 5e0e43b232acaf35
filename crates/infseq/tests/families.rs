use infseq::{LazySequence, Memo, SeqError, SequenceOptions, MIN_CACHE_CAPACITY};

#[test]
fn arithmetic_progression_terms() {
    let seq = LazySequence::arithmetic_progression(2i64, 3);
    assert_eq!(seq.head(6).unwrap(), vec![3, 5, 7, 9, 11, 13]);
    let falling = LazySequence::arithmetic_progression(-0.5f64, 1.0);
    assert_eq!(falling.get(4).unwrap(), -1.0);
}

#[test]
fn geometric_progression_terms() {
    let seq = LazySequence::geometric_progression(2i64, 1);
    assert_eq!(seq.head(6).unwrap(), vec![1, 2, 4, 8, 16, 32]);
    let halves = LazySequence::geometric_progression(0.5f64, 8.0);
    assert_eq!(halves.head(4).unwrap(), vec![8.0, 4.0, 2.0, 1.0]);
}

#[test]
fn cycle_terms() {
    let seq = LazySequence::cycle(vec![1i64, 2, 3]);
    assert_eq!(seq.head(7).unwrap(), vec![1, 2, 3, 1, 2, 3, 1]);
    let words = LazySequence::cycle(["a", "b"]);
    assert_eq!(words.get(5).unwrap(), "b");
}

#[test]
fn empty_cycle_fails_at_evaluation_time() {
    let seq = LazySequence::<i64>::cycle(Vec::new());
    for index in [0, 7] {
        match seq.get(index).unwrap_err() {
            SeqError::Arithmetic(info) => {
                assert_eq!(info.code, "division-by-zero");
                assert_eq!(info.context.get("index"), Some(&index.to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(seq.cache_stats().len, 0);
}

#[test]
fn fibonacci_terms() {
    let fib = LazySequence::<i64>::fibonacci();
    assert_eq!(fib.head(8).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn fibonacci_far_index_without_deep_recursion() {
    let fib = LazySequence::<f64>::fibonacci();
    let far = fib.get(1000).unwrap();
    assert!(far.is_finite());
    assert!(far > 4.34e208 && far < 4.35e208);
    assert_eq!(far, fib.get(999).unwrap() + fib.get(998).unwrap());
}

#[test]
fn fibonacci_fills_forward_once() {
    let fib = LazySequence::<u64>::fibonacci();
    assert_eq!(fib.get(90).unwrap(), 2_880_067_194_370_816_120);
    let stats = fib.cache_stats();
    assert_eq!(stats.len, 91);
    // Every index is generated exactly once.
    assert_eq!(stats.misses, 91);
}

#[test]
fn fibonacci_resumes_from_cached_terms() {
    let fib = LazySequence::<u64>::fibonacci();
    fib.get(50).unwrap();
    let misses = fib.cache_stats().misses;
    assert_eq!(fib.get(52).unwrap(), 32_951_280_099);
    assert_eq!(fib.cache_stats().misses, misses + 2);
}

#[test]
fn fibonacci_beyond_cache_capacity() {
    let fib = LazySequence::<f64>::fibonacci()
        .with_options(SequenceOptions::with_cache_capacity(4))
        .unwrap();
    let reference = LazySequence::<f64>::fibonacci();
    assert_eq!(fib.get(300).unwrap(), reference.get(300).unwrap());
    assert_eq!(fib.get(10).unwrap(), 55.0);
    assert!(fib.cache_stats().len <= 4);
}

#[test]
fn fibonacci_stays_linear_at_minimum_cache_capacity() {
    let fib = LazySequence::<f64>::fibonacci()
        .with_options(SequenceOptions::with_cache_capacity(MIN_CACHE_CAPACITY))
        .unwrap();
    let reference = LazySequence::<f64>::fibonacci();
    assert_eq!(fib.get(1000).unwrap(), reference.get(1000).unwrap());
    let stats = fib.cache_stats();
    assert_eq!(stats.misses, 1001);
    assert_eq!(stats.len, 2);
    // The two newest terms survive, so the next index needs one generation.
    assert!(fib.is_materialized(999) && fib.is_materialized(1000));
    fib.get(1001).unwrap();
    assert_eq!(fib.cache_stats().misses, 1002);
}

#[test]
fn fibonacci_minimum_cache_exact_terms() {
    let fib = LazySequence::<u64>::fibonacci()
        .with_options(SequenceOptions::with_cache_capacity(2))
        .unwrap();
    assert_eq!(fib.get(90).unwrap(), 2_880_067_194_370_816_120);
    assert_eq!(fib.cache_stats().misses, 91);
}

#[test]
fn fibonacci_overflow_is_an_arithmetic_failure() {
    let fib = LazySequence::<u128>::fibonacci();
    assert!(fib.get(186).is_ok());
    assert!(matches!(fib.get(187).unwrap_err(), SeqError::Arithmetic(_)));
}

#[test]
fn custom_recurrences_read_their_own_terms() {
    // a(0) = 1, a(n) = 2 * a(n - 1) + 1
    let seq = LazySequence::from_recurrence(|memo: &dyn Memo<i64>, index| {
        if index == 0 {
            return Ok(1);
        }
        for earlier in 0..index {
            memo.recall(earlier)?;
        }
        Ok(2 * memo.recall(index - 1)? + 1)
    });
    assert_eq!(seq.head(5).unwrap(), vec![1, 3, 7, 15, 31]);
    assert!(seq.is_materialized(4));
    assert!(!seq.is_materialized(5));
}
