//! Sturm sequences and exact root counting.

use thiserror::Error;

use sturmian_integers::{Rational, RationalError};
use sturmian_poly::{PolyError, Polynomial};

/// Errors produced while building a Sturm sequence or counting roots.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SturmError {
    /// The zero polynomial has no root count: every point is a root.
    #[error("the zero polynomial has no Sturm sequence")]
    ZeroPolynomial,

    /// A polynomial operation failed.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// An interval bound could not be converted to an exact rational.
    #[error(transparent)]
    Rational(#[from] RationalError),
}

/// A Sturm sequence `P0, P1, ..., Pk`.
///
/// `P0` is the square-free part of the polynomial the sequence was built
/// from (the polynomial divided by `gcd(P, P')`, so each distinct root
/// counts once regardless of multiplicity), `P1 = P0'`, and each further
/// member is `P(i+1) = -(P(i-1) mod P(i))`. Construction stops once the
/// second-to-last member has degree at most 1.
///
/// The sequence is a derived, immutable value: build it once, then query
/// sign changes at as many points as needed.
#[derive(Clone, Debug)]
pub struct SturmSequence {
    polys: Vec<Polynomial>,
}

impl SturmSequence {
    /// Builds the Sturm sequence of a polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`SturmError::ZeroPolynomial`] if `p` is the zero
    /// polynomial, or a propagated [`PolyError`] from the GCD and division
    /// steps.
    pub fn build(p: &Polynomial) -> Result<Self, SturmError> {
        if p.is_zero() {
            return Err(SturmError::ZeroPolynomial);
        }

        // Remove repeated-root content so multiplicities don't distort the
        // count: P0 = P / gcd(P, P').
        let derivative = p.derivative();
        let content = Polynomial::gcd(p, &derivative)?;
        let square_free = p.div(&content)?;

        let mut polys = vec![square_free.clone(), square_free.derivative()];
        while polys[polys.len() - 2].degree() > 1 {
            let previous = &polys[polys.len() - 2];
            let last = &polys[polys.len() - 1];
            let next = previous.rem(last)?.neg();
            polys.push(next);
        }

        Ok(Self { polys })
    }

    /// Returns the members of the sequence, `P0` first.
    #[must_use]
    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    /// Counts strict sign changes of the sequence evaluated at `x`.
    ///
    /// A member that evaluates to exactly zero is skipped: it contributes
    /// no sign change itself, and the last nonzero value is carried forward
    /// as "previous" for subsequent comparisons.
    #[must_use]
    pub fn sign_changes_at(&self, x: &Rational) -> usize {
        let mut changes = 0;
        let mut previous = self.polys[0].eval(x).signum();
        for member in &self.polys[1..] {
            let current = member.eval(x).signum();
            if previous * current < 0 {
                changes += 1;
            }
            if current != 0 {
                previous = current;
            }
        }
        changes
    }

    /// Counts distinct real roots in the half-open interval `(a, b]`.
    ///
    /// By Sturm's theorem this is the number of sign changes at `a` minus
    /// the number at `b`; a root exactly at `a` is excluded and a root
    /// exactly at `b` is included.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn count_roots_between(&self, a: &Rational, b: &Rational) -> i64 {
        self.sign_changes_at(a) as i64 - self.sign_changes_at(b) as i64
    }
}

/// Counts distinct real roots of `p` in the half-open interval `(a, b]`.
///
/// The bounds are converted to exact rationals through their decimal
/// expansion, so endpoint comparisons stay exact.
///
/// # Errors
///
/// Returns [`SturmError::ZeroPolynomial`] for the zero polynomial, a
/// propagated [`RationalError`] for non-finite bounds, or a propagated
/// [`PolyError`] from sequence construction.
pub fn count_roots(p: &Polynomial, a: f64, b: f64) -> Result<i64, SturmError> {
    let sequence = SturmSequence::build(p)?;
    let lower = Rational::from_f64(a)?;
    let upper = Rational::from_f64(b)?;
    Ok(sequence.count_roots_between(&lower, &upper))
}
