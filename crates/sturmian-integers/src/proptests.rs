//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Canonical form invariants

        #[test]
        fn rational_is_reduced(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(r.numerator().abs().gcd(&r.denominator()).is_one());
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
        }

        #[test]
        fn rational_equality_is_reduction_invariant(
            n in small_int(),
            d in non_zero_int(),
            k in non_zero_int(),
        ) {
            let r = Rational::from_i64(n, d).unwrap();
            let scaled = Rational::new(
                Integer::new(n) * Integer::new(k),
                Integer::new(d) * Integer::new(k),
            ).unwrap();
            prop_assert_eq!(r, scaled);
        }

        // Field laws

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_div_then_mul_roundtrips(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!(a.checked_div(&b).unwrap() * b.clone(), a);
        }

        #[test]
        fn rational_add_identity(a in rational()) {
            prop_assert_eq!(&a + &Rational::zero(), a.clone());
            prop_assert_eq!(a.clone() - a, Rational::zero());
        }

        #[test]
        fn rational_recip_involution(a in non_zero_rational()) {
            prop_assert_eq!(a.recip().unwrap().recip().unwrap(), a);
        }

        // Ordering

        #[test]
        fn rational_order_matches_cross_product(
            (n1, d1) in (small_int(), non_zero_int()),
            (n2, d2) in (small_int(), non_zero_int()),
        ) {
            let a = Rational::from_i64(n1, d1).unwrap();
            let b = Rational::from_i64(n2, d2).unwrap();
            // compare as exact fractions by hand, with positive denominators
            let (n1, d1) = if d1 < 0 { (-n1, -d1) } else { (n1, d1) };
            let (n2, d2) = if d2 < 0 { (-n2, -d2) } else { (n2, d2) };
            let lhs = i128::from(n1) * i128::from(d2);
            let rhs = i128::from(n2) * i128::from(d1);
            prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        }

        // Decimal conversion

        #[test]
        fn from_f64_roundtrips_small_decimals(n in -100_000i64..100_000i64) {
            // n/1000 rendered as a decimal and read back is exact
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64 / 1000.0;
            let direct = Rational::from_i64(n, 1000).unwrap();
            prop_assert_eq!(Rational::from_f64(value).unwrap(), direct);
        }
    }
}
