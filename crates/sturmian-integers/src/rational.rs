//! Exact rational numbers.
//!
//! A [`Rational`] is a numerator/denominator pair of arbitrary precision
//! integers, always stored fully reduced with a positive denominator.
//! Arithmetic returns new reduced instances, so exactness survives chains
//! of operations of any length with no rounding drift.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

use crate::Integer;

/// Errors produced by rational construction and division.
///
/// Not `Eq`: the `NonFinite` payload is an `f64`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RationalError {
    /// A rational was constructed with a zero denominator, or a zero
    /// rational was inverted or divided by.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// A non-finite floating-point value has no exact decimal expansion.
    #[error("cannot convert non-finite value {0} to a rational")]
    NonFinite(f64),
}

/// An exact rational number.
///
/// # Invariants
///
/// - the denominator is always strictly positive;
/// - `gcd(|numerator|, denominator) == 1` (lowest terms).
///
/// Two rationals are equal iff their reduced numerators and denominators
/// are pairwise equal. The total order compares by cross multiplication,
/// never by division.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator, reducing to
    /// lowest terms and normalizing the denominator to be positive.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from the exact decimal expansion of an f64.
    ///
    /// The value is rendered as its shortest round-trip decimal string
    /// (which strips trailing zeros), and the numerator and denominator are
    /// scaled by ten to the number of remaining decimal digits. The result
    /// is the decimal literal the value prints as, not the binary fraction
    /// it is stored as, so no binary floating-point noise enters the
    /// pipeline: `0.1` becomes exactly `1/10`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for NaN or infinite input.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite(value));
        }
        let rendered = format!("{value}");
        let (digits, decimals) = match rendered.split_once('.') {
            Some((whole, frac)) => (format!("{whole}{frac}"), frac.len()),
            None => (rendered, 0),
        };
        let numerator =
            Integer::from_str_radix(&digits, 10).map_err(|_| RationalError::NonFinite(value))?;
        let denominator = Integer::new(10).pow(decimals as u32);
        Self::new(numerator, denominator)
    }

    /// Reduces and sign-normalizes; the denominator must be nonzero.
    fn from_parts(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        let g = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / &g, denominator / &g);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.numerator.clone()
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.denominator.clone()
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if this rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        Ok(self * &other.recip()?)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl Ord for Rational {
    /// Total order by cross multiplication: the sign of
    /// `a.num * b.den - b.num * a.den`. Denominators are positive, so no
    /// sign flip occurs and no division is needed.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::from_parts(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::from_parts(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}
