//! # sturmian-solve
//!
//! Exact real-root counting and sign analysis for rational polynomials.
//!
//! This crate provides:
//! - **Sturm sequences**: `P0` is the square-free part of the input,
//!   `P1 = P0'`, and each further member is the negated polynomial
//!   remainder of the previous two
//! - **Root counting**: the number of distinct real roots in a half-open
//!   interval `(a, b]`, via the difference in sign changes of the sequence
//!   evaluated at the endpoints
//! - **Sign classification**: whether a polynomial is negative, positive,
//!   or sign-alternating across a closed interval `[a, b]`
//!
//! All arithmetic is exact; interval bounds given as `f64` are converted
//! to exact rationals through their decimal expansion before any sign is
//! inspected.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sign;
pub mod sturm;

pub use sign::{classify_sign, SignClass};
pub use sturm::{count_roots, SturmError, SturmSequence};
