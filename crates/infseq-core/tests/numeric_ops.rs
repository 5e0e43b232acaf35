use infseq_core::{Numeric, SeqError};
use proptest::prelude::*;

fn code(err: SeqError) -> String {
    match err {
        SeqError::Arithmetic(info) => info.code,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(code(i64::MAX.try_add(&1).unwrap_err()), "overflow");
    assert_eq!(code(0u32.try_sub(&1).unwrap_err()), "overflow");
    assert_eq!(code(i64::MIN.try_div(&-1).unwrap_err()), "overflow");
    assert_eq!(code(2u128.try_powi(200).unwrap_err()), "overflow");
}

#[test]
fn division_by_zero_is_reported_for_every_family() {
    assert_eq!(code(7i64.try_div(&0).unwrap_err()), "division-by-zero");
    assert_eq!(code(7u64.try_floor_div(&0).unwrap_err()), "division-by-zero");
    assert_eq!(code(7.0f64.try_div(&0.0).unwrap_err()), "division-by-zero");
    assert_eq!(code(7.0f32.try_floor_div(&0.0).unwrap_err()), "division-by-zero");
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    assert_eq!(7i64.try_floor_div(&2).unwrap(), 3);
    assert_eq!((-7i64).try_floor_div(&2).unwrap(), -4);
    assert_eq!(7i64.try_floor_div(&-2).unwrap(), -4);
    assert_eq!((-7i64).try_floor_div(&-2).unwrap(), 3);
    assert_eq!((-6i32).try_floor_div(&3).unwrap(), -2);
    assert_eq!((-7.0f64).try_floor_div(&2.0).unwrap(), -4.0);
}

#[test]
fn integer_division_truncates() {
    assert_eq!((-7i64).try_div(&2).unwrap(), -3);
    assert_eq!(7.0f64.try_div(&2.0).unwrap(), 3.5);
}

#[test]
fn powers() {
    assert_eq!(3i64.try_pow(&4).unwrap(), 81);
    assert_eq!(code(3i64.try_pow(&-1).unwrap_err()), "negative-exponent");
    assert_eq!(2.0f64.try_pow(&-1.0).unwrap(), 0.5);
    assert_eq!(code((-8.0f64).try_pow(&0.5).unwrap_err()), "power-domain");
    assert_eq!(2u64.try_powi(10).unwrap(), 1024);
    assert_eq!(1.5f64.try_powi(2).unwrap(), 2.25);
}

#[test]
fn from_index_respects_the_target_range() {
    assert_eq!(i32::from_index(12).unwrap(), 12);
    assert_eq!(f64::from_index(3).unwrap(), 3.0);
    assert_eq!(code(i32::from_index(u64::MAX).unwrap_err()), "index-out-of-range");
}

proptest! {
    #[test]
    fn checked_ops_agree_with_host_ops_when_in_range(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assert_eq!(a.try_add(&b).unwrap(), a + b);
        prop_assert_eq!(a.try_sub(&b).unwrap(), a - b);
        prop_assert_eq!(a.try_mul(&b).unwrap(), a * b);
        if b != 0 {
            prop_assert_eq!(a.try_floor_div(&b).unwrap(), (a as f64 / b as f64).floor() as i64);
        }
    }
}
