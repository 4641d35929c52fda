//! Property-based tests for exact polynomial arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Polynomial;
    use sturmian_integers::Rational;

    // Strategy for small rational coefficients
    fn coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..8i64).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // Strategy for polynomials up to degree 6
    fn poly() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec(coeff(), 1..8).prop_map(Polynomial::new)
    }

    fn non_zero_poly() -> impl Strategy<Value = Polynomial> {
        poly().prop_filter("non-zero polynomial", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(p in poly(), q in poly()) {
            prop_assert_eq!(p.add(&q), q.add(&p));
        }

        #[test]
        fn poly_mul_commutative(p in poly(), q in poly()) {
            prop_assert_eq!(p.mul(&q), q.mul(&p));
        }

        #[test]
        fn poly_sub_self_is_zero(p in poly()) {
            prop_assert!(p.sub(&p).is_zero());
        }

        #[test]
        fn poly_canonical_form_is_stable(p in poly()) {
            let rebuilt = Polynomial::new(p.coeffs().to_vec());
            prop_assert_eq!(&rebuilt, &p);
            prop_assert!(p.is_zero() || !p.leading_coeff().is_zero());
        }

        #[test]
        fn poly_division_law(p in poly(), d in non_zero_poly()) {
            // p == q*d + r, with deg(r) < deg(d) or r == 0
            let (q, r) = p.div_rem(&d).unwrap();
            prop_assert_eq!(q.mul(&d).add(&r), p);
            prop_assert!(r.is_zero() || r.degree() < d.degree());
        }

        #[test]
        fn poly_gcd_divides_both(p in non_zero_poly(), d in non_zero_poly()) {
            let g = Polynomial::gcd(&p, &d).unwrap();
            prop_assert!(!g.is_zero());
            prop_assert!(p.rem(&g).unwrap().is_zero());
            prop_assert!(d.rem(&g).unwrap().is_zero());
        }

        #[test]
        fn poly_eval_is_additive(p in poly(), q in poly(), n in -10i64..10i64, d in 1i64..5i64) {
            let x = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(p.add(&q).eval(&x), p.eval(&x) + q.eval(&x));
        }

        #[test]
        fn poly_eval_is_multiplicative(p in poly(), q in poly(), n in -10i64..10i64, d in 1i64..5i64) {
            let x = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(p.mul(&q).eval(&x), p.eval(&x) * q.eval(&x));
        }

        #[test]
        fn poly_derivative_is_linear(p in poly(), q in poly()) {
            prop_assert_eq!(
                p.add(&q).derivative(),
                p.derivative().add(&q.derivative())
            );
        }
    }
}
