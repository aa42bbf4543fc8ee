// ============================================================================
// Property Tests
// Algebraic laws of fraction arithmetic, checked with proptest
// ============================================================================

use super::{Fraction, NumericError};
use proptest::prelude::*;

// Small enough that no law below can overflow an i64.
fn part() -> impl Strategy<Value = i64> {
    -1_000i64..=1_000
}

fn non_zero() -> impl Strategy<Value = i64> {
    part().prop_filter("non-zero", |v| *v != 0)
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (part(), non_zero()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn construction_keeps_denominator_positive(n in part(), d in non_zero()) {
        let f = Fraction::new(n, d).unwrap();
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(f.numerator() * d.signum(), n);
    }

    #[test]
    fn addition_commutes_after_simplify(a in fraction(), b in fraction()) {
        let ab = a.checked_add(b).unwrap().simplified().unwrap();
        let ba = b.checked_add(a).unwrap().simplified().unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn zero_is_additive_identity(a in fraction()) {
        let sum = a.checked_add(0).unwrap().simplified().unwrap();
        prop_assert_eq!(sum, a.simplified().unwrap());
    }

    #[test]
    fn simplify_is_idempotent(a in fraction()) {
        let once = a.simplified().unwrap();
        let twice = once.simplified().unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn simplify_preserves_value(a in fraction()) {
        let s = a.simplified().unwrap();
        prop_assert!(s.value_eq(&a));
        prop_assert!(s.denominator() > 0);
        if !s.is_zero() {
            prop_assert!(s.is_in_lowest_terms());
        }
    }

    #[test]
    fn expand_then_reduce_restores(a in fraction(), factor in non_zero()) {
        let restored = a.expanded(factor).unwrap().reduced_by(factor).unwrap();
        prop_assert_eq!(restored, a);
    }

    #[test]
    fn subtraction_undoes_addition(a in fraction(), b in fraction()) {
        let back = a.checked_add(b).unwrap().checked_sub(b).unwrap();
        prop_assert!(back.value_eq(&a));
    }

    #[test]
    fn division_matches_reciprocal_product(a in fraction(), b in fraction()) {
        match b.reciprocal() {
            Ok(inverse) => {
                let quotient = a.checked_div(b).unwrap();
                prop_assert!(quotient.value_eq(&a.checked_mul(inverse).unwrap()));
            }
            Err(err) => {
                prop_assert_eq!(err, NumericError::DivisionByZero);
                prop_assert_eq!(a.checked_div(b), Err(NumericError::DivisionByZero));
            }
        }
    }

    #[test]
    fn right_hand_subtraction_is_lhs_minus_self(a in fraction(), lhs in part()) {
        let expected = Fraction::from(lhs).checked_sub(a).unwrap();
        prop_assert!(a.checked_rsub(lhs).unwrap().value_eq(&expected));
    }

    #[test]
    fn display_parses_back_to_same_value(a in fraction(), b in fraction()) {
        // quotients may carry a negative denominator in storage
        if let Ok(q) = a.checked_div(b) {
            let parsed: Fraction = q.to_string().parse().unwrap();
            prop_assert!(parsed.value_eq(&q));
            prop_assert!(parsed.denominator() > 0);
        }
    }

    #[test]
    fn value_order_is_antisymmetric(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.cmp_value(&b), b.cmp_value(&a).reverse());
    }
}
