//! # Sturmian
//!
//! Exact symbolic analysis of rational polynomials.
//!
//! Sturmian answers questions like "does P(x) keep a fixed sign on
//! [a, b]?" and "how many real roots does P have in (a, b]?" with exact
//! results: no floating-point approximation ever enters the pipeline.
//!
//! ## Layers
//!
//! - **Exact rationals**: arbitrary precision fractions in lowest terms
//! - **Polynomials**: canonical rational-coefficient polynomials with
//!   exact division and GCD
//! - **Root counting**: Sturm sequences over half-open intervals
//! - **Sign classification**: negative / positive / alternating /
//!   undetermined over closed intervals
//!
//! ## Quick Start
//!
//! ```rust
//! use sturmian::prelude::*;
//!
//! // P(x) = x^3 - x has roots at -1, 0, 1
//! let p = Polynomial::from_integers(&[0, -1, 0, 1]);
//! assert_eq!(count_roots(&p, -2.0, 2.0).unwrap(), 3);
//!
//! // x^2 + 1 never touches zero
//! let q = Polynomial::from_integers(&[1, 0, 1]);
//! assert_eq!(classify_sign(&q, -5.0, 5.0).unwrap(), SignClass::Positive);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sturmian_integers as integers;
pub use sturmian_poly as poly;
pub use sturmian_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sturmian_integers::{Integer, Rational, RationalError};
    pub use sturmian_poly::{PolyError, Polynomial};
    pub use sturmian_solve::{classify_sign, count_roots, SignClass, SturmError, SturmSequence};
}
