//! Sign classification of a polynomial over a closed interval.

use std::fmt;

use sturmian_integers::Rational;
use sturmian_poly::Polynomial;

use crate::sturm::{count_roots, SturmError};

/// The sign behavior of a polynomial across a closed interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignClass {
    /// Negative over the whole interval.
    Negative,
    /// Positive over the whole interval.
    Positive,
    /// Changes sign somewhere inside the interval.
    Alternating,
    /// Too many roots to resolve by endpoint inspection.
    Undetermined,
}

impl SignClass {
    /// The classification as its conventional integer code:
    /// -1 negative, 1 positive, 2 alternating, 3 undetermined.
    #[must_use]
    pub fn as_code(self) -> i8 {
        match self {
            SignClass::Negative => -1,
            SignClass::Positive => 1,
            SignClass::Alternating => 2,
            SignClass::Undetermined => 3,
        }
    }
}

impl fmt::Display for SignClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignClass::Negative => "negative",
            SignClass::Positive => "positive",
            SignClass::Alternating => "alternating",
            SignClass::Undetermined => "undetermined",
        };
        write!(f, "{name}")
    }
}

/// Classifies the sign of `q` over the closed interval `[a, b]`.
///
/// The root count is taken over the widened interval `(a - 0.1, b]` so a
/// root sitting exactly at `a` is not missed, then combined with exact
/// endpoint evaluation:
///
/// - an endpoint evaluating to exactly zero is treated as a root and the
///   classification follows the other endpoint's sign (two counted roots
///   classify as alternating, assuming the second lies inside the
///   interval);
/// - differing endpoint signs classify as alternating;
/// - equal endpoint signs with at most one counted root classify as that
///   common sign, the lone root being assumed to sit in the widened
///   pre-interval `(a - 0.1, a]`;
/// - anything else is undetermined.
///
/// The interval-placement assumption for one or two counted roots is a
/// heuristic, not a proven guarantee: the count is exact, the placement is
/// not. The literal `0.1` widening is part of the contract.
///
/// # Errors
///
/// Propagates [`SturmError`] from root counting and bound conversion.
pub fn classify_sign(q: &Polynomial, a: f64, b: f64) -> Result<SignClass, SturmError> {
    let roots = count_roots(q, a - 0.1, b)?;
    if !(0..=2).contains(&roots) {
        return Ok(SignClass::Undetermined);
    }

    let sign_a = q.eval(&Rational::from_f64(a)?).signum();
    let sign_b = q.eval(&Rational::from_f64(b)?).signum();

    let class = if sign_a == 0 || sign_b == 0 {
        // the zero endpoint is itself a root; classify by the other end
        let sign = if sign_a == 0 { sign_b } else { sign_a };
        if roots == 2 {
            SignClass::Alternating
        } else if sign > 0 {
            SignClass::Positive
        } else {
            SignClass::Negative
        }
    } else if sign_a != sign_b {
        SignClass::Alternating
    } else if roots != 2 {
        if sign_a > 0 {
            SignClass::Positive
        } else {
            SignClass::Negative
        }
    } else {
        // two roots but equal nonzero endpoint signs: endpoint inspection
        // cannot place them
        SignClass::Undetermined
    };
    Ok(class)
}
