//! # sturmian-integers
//!
//! Arbitrary precision integer and exact rational arithmetic for sturmian.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals stored in lowest terms (`Rational`)
//!
//! Every operation is a pure function over immutable values: arithmetic
//! returns new, fully reduced instances and never mutates its operands.
//! This is the foundation the polynomial and root-counting layers rely on
//! to stay exact through arbitrarily long chains of operations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{Rational, RationalError};
