//! Special mathematical functions.
//!
//! Provides the gamma function and its logarithm, which are all the
//! generalized gamma density and moments need. Generic over [`FloatScalar`]
//! (f32/f64), no-std compatible, and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log of the absolute gamma function |
//! | [`lgamma_pos`] | ln Γ(x), restricted to x > 0 |
//! | [`ln_gamma_ratio`] | ln(Γ(a)/Γ(b)), restricted to a, b > 0 |
//!
//! # Example
//!
//! ```
//! use gengamma::special::{gamma, lgamma, lgamma_pos, SpecialError};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//!
//! // ln Γ(1) = 0
//! assert!(lgamma(1.0_f64).abs() < 1e-14);
//!
//! // the checked variant refuses the reflection region
//! assert_eq!(lgamma_pos(-0.5_f64), Err(SpecialError::DomainError));
//! ```

use core::fmt;

use crate::FloatScalar;

mod gamma_fn;


pub use gamma_fn::{gamma, lgamma, lgamma_pos, ln_gamma_ratio};

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Input outside the function's domain (e.g. x ≤ 0 for [`lgamma_pos`]).
    DomainError,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainError => write!(f, "input outside function domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(T::from(LANCZOS_COEFFS[0]).unwrap(), |sum, (i, &c)| {
            sum + T::from(c).unwrap() / (z + T::from(i + 1).unwrap())
        })
}
