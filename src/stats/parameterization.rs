//! The three equivalent parameterizations of the generalized gamma family.
//!
//! - **Canonical** (μ, σ, Q): log-location μ, log-scale σ > 0, shape Q ≠ 0.
//!   This is the form stored by [`GeneralizedGamma`](super::GeneralizedGamma)
//!   and the one sampling works in.
//! - **Wikipedia** (a, d, p): scale a > 0 and shapes d, p of the same sign,
//!   with density (|p|/a^d) x^{d−1} e^{−(x/a)^p} / Γ(d/p).
//! - **Stacy** (b, d, p): as Wikipedia with b = a^{−p}.
//!
//! The conversion functions are bare formulas. They do not check their
//! inputs; out-of-domain values give NaN or infinities. Use
//! [`Parameterization::validate`] first when the inputs are untrusted.

use core::fmt;

use crate::FloatScalar;
use super::StatsError;

/// Selects which 3-tuple convention a set of parameters is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parameterization {
    /// (μ, σ, Q), the flexsurv-style location/scale/shape form.
    #[default]
    Canonical,
    /// (a, d, p).
    Wikipedia,
    /// (b, d, p) with b = a^{−p}.
    Stacy,
}

impl fmt::Display for Parameterization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical (mu, sigma, Q)"),
            Self::Wikipedia => write!(f, "wikipedia (a, d, p)"),
            Self::Stacy => write!(f, "stacy (b, d, p)"),
        }
    }
}

impl Parameterization {
    /// Check that `(p1, p2, p3)` is a valid parameter set in this convention.
    ///
    /// Canonical needs finite μ, σ > 0, Q ≠ 0 with 1/Q² finite and
    /// positive. Wikipedia and Stacy need a finite positive scale and finite
    /// non-zero d, p of the same sign.
    ///
    /// # Example
    ///
    /// ```
    /// use gengamma::stats::{Parameterization, StatsError};
    ///
    /// assert!(Parameterization::Wikipedia.validate(1.0_f64, -2.0, -1.0).is_ok());
    /// assert_eq!(
    ///     Parameterization::Wikipedia.validate(1.0_f64, 2.0, -1.0),
    ///     Err(StatsError::InvalidParameter),
    /// );
    /// ```
    pub fn validate<T: FloatScalar>(self, p1: T, p2: T, p3: T) -> Result<(), StatsError> {
        if !(p1.is_finite() && p2.is_finite() && p3.is_finite()) {
            return Err(StatsError::InvalidParameter);
        }
        let zero = T::zero();
        let ok = match self {
            Self::Canonical => {
                let (sigma, q) = (p2, p3);
                let aux_shape = (q * q).recip();
                sigma > zero && q != zero && aux_shape > zero && aux_shape.is_finite()
            }
            Self::Wikipedia | Self::Stacy => {
                let (scale, d, p) = (p1, p2, p3);
                scale > zero && d != zero && p != zero && (d > zero) == (p > zero)
            }
        };
        if ok {
            Ok(())
        } else {
            Err(StatsError::InvalidParameter)
        }
    }

    /// Convert `(p1, p2, p3)` written in this convention to canonical (μ, σ, Q).
    pub fn canonicalize<T: FloatScalar>(self, p1: T, p2: T, p3: T) -> (T, T, T) {
        match self {
            Self::Canonical => to_canonical(p1, p2, p3),
            Self::Wikipedia => from_wikipedia(p1, p2, p3),
            Self::Stacy => from_stacy(p1, p2, p3),
        }
    }

    /// Express canonical (μ, σ, Q) in this convention.
    pub fn express<T: FloatScalar>(self, mu: T, sigma: T, q: T) -> (T, T, T) {
        match self {
            Self::Canonical => to_canonical(mu, sigma, q),
            Self::Wikipedia => to_wikipedia(mu, sigma, q),
            Self::Stacy => to_stacy(mu, sigma, q),
        }
    }
}

/// (a, d, p) → (μ, σ, Q).
///
/// μ = ln a + (ln|d| − ln|p|)/p, σ = 1/√(pd), Q = sign(p)·√(p/d).
///
/// # Example
///
/// ```
/// use gengamma::stats::from_wikipedia;
///
/// let (mu, sigma, q) = from_wikipedia(1.0_f64, 1.0, 1.0);
/// assert_eq!((mu, sigma, q), (0.0, 1.0, 1.0));
/// ```
pub fn from_wikipedia<T: FloatScalar>(a: T, d: T, p: T) -> (T, T, T) {
    let mu = a.ln() + (d.abs().ln() - p.abs().ln()) / p;
    let sigma = (p * d).sqrt().recip();
    let q = (p / d).sqrt() * p.signum();
    (mu, sigma, q)
}

/// (b, d, p) → (μ, σ, Q), through a = b^{−1/p}.
pub fn from_stacy<T: FloatScalar>(b: T, d: T, p: T) -> (T, T, T) {
    let a = b.powf(-p.recip());
    from_wikipedia(a, d, p)
}

/// (μ, σ, Q) → (a, d, p).
///
/// d = 1/(σQ), p = Q/σ, a = |Q|^{2/p}·e^μ.
pub fn to_wikipedia<T: FloatScalar>(mu: T, sigma: T, q: T) -> (T, T, T) {
    let d = (sigma * q).recip();
    let p = q / sigma;
    let two = T::one() + T::one();
    let a = q.abs().powf(two / p) * mu.exp();
    (a, d, p)
}

/// (μ, σ, Q) → (b, d, p), with b = a^{−p}.
pub fn to_stacy<T: FloatScalar>(mu: T, sigma: T, q: T) -> (T, T, T) {
    let (a, d, p) = to_wikipedia(mu, sigma, q);
    (a.powf(-p), d, p)
}

/// (μ, σ, Q) → (μ, σ, Q).
#[inline]
pub fn to_canonical<T: FloatScalar>(mu: T, sigma: T, q: T) -> (T, T, T) {
    (mu, sigma, q)
}
