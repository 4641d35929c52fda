//! # sturmian-poly
//!
//! Dense univariate polynomials over the exact rationals.
//!
//! This crate provides:
//! - Canonical coefficient storage (no trailing zero coefficients)
//! - Exact arithmetic: addition, convolution multiplication, differentiation
//! - Horner evaluation with no intermediate rounding
//! - Exact Euclidean division with remainder
//! - Polynomial GCD with content normalization
//!
//! Everything is computed over [`sturmian_integers::Rational`], so results
//! are exact for inputs of any degree or coefficient size. Coefficient
//! magnitudes can still grow quickly under repeated remainder operations;
//! the GCD's content normalization exists precisely to keep that growth in
//! check.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::{PolyError, Polynomial};
