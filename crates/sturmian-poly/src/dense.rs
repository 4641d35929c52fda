//! Dense univariate polynomials with exact rational coefficients.

use num_traits::{One, Zero};
use std::fmt;
use thiserror::Error;

use sturmian_integers::{Rational, RationalError};

/// Errors produced by polynomial division and GCD.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// Division by the zero polynomial.
    #[error("cannot divide by the zero polynomial")]
    DivideByZero,

    /// GCD where both inputs are the zero polynomial.
    #[error("gcd of two zero polynomials is undefined")]
    GcdOfZero,

    /// A coefficient-level rational operation failed.
    #[error(transparent)]
    Rational(#[from] RationalError),
}

/// A dense univariate polynomial over the rationals.
///
/// Coefficients are stored in ascending degree order: index `i` holds the
/// coefficient of `x^i`.
///
/// # Invariants
///
/// The representation is canonical: the leading coefficient is nonzero
/// unless the polynomial is identically zero, which is the unique length-1
/// form `[0]`. Construction trims trailing zero coefficients to restore
/// this, so structural equality coincides with mathematical equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients, lowest degree first.
    ///
    /// Trailing zero coefficients are trimmed; an empty sequence yields the
    /// zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(Rational::zero());
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![Rational::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![Rational::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![Rational::zero(), Rational::one()])
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: Rational, n: usize) -> Self {
        let mut coeffs = vec![Rational::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Creates a polynomial from integer coefficients, lowest degree first.
    #[must_use]
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|&c| Rational::from(c)).collect())
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0 by this crate's convention.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &Rational {
        // canonical form guarantees at least one coefficient
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of `x^i` (zero above the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns all coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Accumulates from the highest-degree coefficient down, so the result
    /// is exact with no intermediate rounding.
    #[must_use]
    pub fn eval(&self, x: &Rational) -> Rational {
        let mut acc = Rational::zero();
        for c in self.coeffs.iter().rev() {
            acc = c + &(x * &acc);
        }
        acc
    }

    /// Adds two polynomials coefficient-wise.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(Rational::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(Rational::zero);
            result.push(a + b);
        }
        Self::new(result)
    }

    /// Negates a polynomial by multiplying with the constant -1.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.mul(&Self::constant(Rational::from(-1)))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by full convolution.
    ///
    /// `result[i + j] += a[i] * b[j]`, costing O(deg(a) * deg(b)) rational
    /// multiplications.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut result = vec![Rational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = &result[i + j] + &(a * b);
            }
        }
        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    ///
    /// The derivative of a degree-0 polynomial is the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }
        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let exponent = Rational::from((i + 1) as i64);
            result.push(c * &exponent);
        }
        Self::new(result)
    }

    /// Exact Euclidean division: returns `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder` and either the remainder is
    /// zero or `deg(remainder) < deg(divisor)`.
    ///
    /// When `deg(self) < deg(divisor)` the quotient is zero and the
    /// remainder is `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivideByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivideByZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        // Long division with the leading-term quotient cancelled each step;
        // division by the leading coefficient is exact over the rationals.
        let lead_inv = divisor.leading_coeff().recip()?;
        let mut quotient = vec![Rational::zero(); self.degree() - divisor.degree() + 1];
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
            let shift = remainder.degree() - divisor.degree();
            let factor = remainder.leading_coeff() * &lead_inv;

            let mut coeffs = remainder.coeffs;
            for (i, c) in divisor.coeffs.iter().enumerate() {
                coeffs[shift + i] = &coeffs[shift + i] - &(&factor * c);
            }
            remainder = Self::new(coeffs);
            quotient[shift] = factor;
        }

        Ok((Self::new(quotient), remainder))
    }

    /// Returns the quotient of exact Euclidean division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivideByZero`] if `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Returns the remainder of exact Euclidean division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivideByZero`] if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Computes the polynomial GCD by the Euclidean algorithm, normalized
    /// to an integer-coefficient, content-free canonical form.
    ///
    /// The raw Euclidean result is an arbitrary nonzero scalar multiple of
    /// the true GCD, and its coefficients blow up quickly because the
    /// remainder operation does not reduce content. Normalization divides
    /// every coefficient by the integer GCD of the coefficient numerators,
    /// then multiplies every coefficient by the largest coefficient
    /// denominator.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::GcdOfZero`] if both inputs are zero.
    pub fn gcd(a: &Self, b: &Self) -> Result<Self, PolyError> {
        if a.is_zero() && b.is_zero() {
            return Err(PolyError::GcdOfZero);
        }

        let (mut a, mut b) = (a.clone(), b.clone());
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        a.normalize_content()
    }

    /// Divides out the integer content of the numerators, then clears
    /// denominators by the largest one. The receiver must be nonzero.
    fn normalize_content(&self) -> Result<Self, PolyError> {
        let mut content = self.coeffs[0].numerator().abs();
        for c in &self.coeffs[1..] {
            content = content.gcd(&c.numerator());
            if content.is_one() {
                break;
            }
        }
        let content = Rational::from_integer(content);
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for c in &self.coeffs {
            coeffs.push(c.checked_div(&content)?);
        }

        let mut widest = coeffs[0].denominator();
        for c in &coeffs[1..] {
            widest = widest.max(c.denominator());
        }
        let widest = Rational::from_integer(widest);

        Ok(Self::new(coeffs.iter().map(|c| c * &widest).collect()))
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({self})")
    }
}

/// Canonical rendering: highest degree first, zero terms omitted, a
/// coefficient of 1 or -1 omitted except at the constant term, and the
/// correctly signed separator between terms.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for i in (0..=self.degree()).rev() {
            let c = &self.coeffs[i];
            if c.is_zero() {
                continue;
            }

            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else {
                write!(f, "{}", if c.is_negative() { " - " } else { " + " })?;
            }

            let magnitude = c.abs();
            if i == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
                if i != 0 {
                    write!(f, "*")?;
                }
            }
            if i != 0 {
                write!(f, "x")?;
                if i != 1 {
                    write!(f, "^{i}")?;
                }
            }
        }
        Ok(())
    }
}
