use num_bigint::BigUint;
use stair_dp::{checked_step_count, step_count, CountError, MAX_STEPS};
use proptest::prelude::*;

#[test]
fn first_values() {
    let expected = [1u32, 1, 2, 4, 7];
    for (n, want) in expected.into_iter().enumerate() {
        assert_eq!(step_count(n as i64), BigUint::from(want), "n = {n}");
    }
}

#[test]
fn fixed_width_overflow_is_reported_not_wrapped() {
    assert!(checked_step_count(MAX_STEPS).is_ok());
    assert_eq!(
        checked_step_count(MAX_STEPS + 1),
        Err(CountError::Overflow { layer: 147 })
    );
}

#[test]
fn exact_counts_cross_the_u128_boundary() {
    assert_eq!(
        step_count(147),
        step_count(146) + step_count(145) + step_count(144)
    );
    assert!(step_count(147) > BigUint::from(u128::MAX));
}

proptest! {
    #[test]
    fn negative_steps_have_no_climbs(k in i64::MIN..0) {
        prop_assert_eq!(step_count(k), BigUint::default());
    }

    #[test]
    fn recurrence_holds(n in 3i64..=400) {
        prop_assert_eq!(
            step_count(n),
            step_count(n - 1) + step_count(n - 2) + step_count(n - 3)
        );
    }

    #[test]
    fn recurrence_with_negative_terms(n in 0i64..3) {
        // terms below zero contribute nothing
        let expected = if n == 0 {
            BigUint::from(1u8)
        } else {
            step_count(n - 1) + step_count(n - 2) + step_count(n - 3)
        };
        prop_assert_eq!(step_count(n), expected);
    }

    #[test]
    fn non_decreasing(n in 0i64..400) {
        prop_assert!(step_count(n + 1) >= step_count(n));
    }

    #[test]
    fn fixed_width_agrees_with_exact(n in 0i64..=MAX_STEPS) {
        let fixed = checked_step_count(n).unwrap();
        prop_assert_eq!(BigUint::from(fixed), step_count(n));
    }
}
