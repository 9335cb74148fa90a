//! Generalized gamma distribution and its auxiliary gamma distribution.
//!
//! Both provide [`ContinuousDistribution`] implementations for a consistent
//! API, and (with the `rand` feature) `rand_distr::Distribution` for sampling.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`GeneralizedGamma`] | (μ, σ, Q), (a, d, p) or (b, d, p) | [0, ∞) |
//! | [`Gamma`] | shape α, rate β | [0, ∞) |
//!
//! The generalized gamma family can be written in three equivalent ways,
//! selected by [`Parameterization`]; the free functions [`from_wikipedia`],
//! [`to_wikipedia`], [`from_stacy`], [`to_stacy`] and [`to_canonical`] convert
//! between them.
//!
//! # Example
//!
//! ```
//! use gengamma::stats::{ContinuousDistribution, GeneralizedGamma, Parameterization};
//!
//! // a = 1, d = 1, p = 1 is the unit exponential
//! let g = GeneralizedGamma::new(Parameterization::Wikipedia, 1.0_f64, 1.0, 1.0).unwrap();
//! assert!((g.mean().unwrap() - 1.0).abs() < 1e-12);
//! assert!((g.pdf(1.0) - (-1.0_f64).exp()).abs() < 1e-12);
//! assert!(g.cdf(1.0).is_err());
//! ```

mod gamma_dist;
mod gen_gamma;
mod parameterization;

#[cfg(test)]
mod tests;

pub use gamma_dist::Gamma;
pub use gen_gamma::GeneralizedGamma;
pub use parameterization::{
    from_stacy, from_wikipedia, to_canonical, to_stacy, to_wikipedia, Parameterization,
};

use crate::special::SpecialError;

/// Errors from distribution construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
    /// The requested moment does not exist for these parameters.
    UndefinedMoment,
    /// The operation is not provided (CDF and quantile need the lower
    /// incomplete gamma function).
    UnsupportedOperation,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
            StatsError::UndefinedMoment => {
                write!(f, "moment is not defined for these parameters")
            }
            StatsError::UnsupportedOperation => {
                write!(f, "operation not supported by this distribution")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

impl From<SpecialError> for StatsError {
    fn from(_: SpecialError) -> Self {
        StatsError::UndefinedMoment
    }
}

/// Closed interval `[lower, upper]` on which a density may be non-zero.
///
/// `upper` may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: PartialOrd> Support<T> {
    /// Whether `x` lies in the interval.
    pub fn contains(&self, x: T) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Trait for continuous probability distributions.
///
/// Density queries are infallible. Moments return
/// [`StatsError::UndefinedMoment`] when they do not exist, and distributions
/// that cannot evaluate their CDF return [`StatsError::UnsupportedOperation`].
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> Result<T, StatsError>;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> Result<T, StatsError>;
    /// Expected value E\[X\].
    fn mean(&self) -> Result<T, StatsError>;
    /// Variance Var(X).
    fn variance(&self) -> Result<T, StatsError>;
    /// A point of maximum density.
    fn mode(&self) -> T;
    /// Interval outside which the density is zero.
    fn support(&self) -> Support<T>;
}
