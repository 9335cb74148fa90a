use crate::FloatScalar;
use crate::special::lgamma;
use super::{ContinuousDistribution, StatsError, Support};

#[cfg(feature = "rand")]
use rand::Rng;
#[cfg(feature = "rand")]
use rand_distr::{Distribution, Exp1, Open01, StandardNormal};

/// Gamma distribution with shape α and rate β.
///
/// f(x) = β^α x^{α−1} e^{−βx} / Γ(α) for x > 0.
///
/// The scale parameter is θ = 1/β. [`GeneralizedGamma`](super::GeneralizedGamma)
/// keeps one of these (α = 1/Q², β = 1) as the source of its variates.
///
/// # Example
///
/// ```
/// use gengamma::stats::{Gamma, ContinuousDistribution};
///
/// let g = Gamma::new(2.0_f64, 1.0).unwrap();
/// assert!((g.mean().unwrap() - 2.0).abs() < 1e-14);
/// assert!((g.variance().unwrap() - 2.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma<T> {
    shape: T, // α > 0
    rate: T,  // β > 0
}

impl<T: FloatScalar> Gamma<T> {
    /// Create a Gamma distribution with `shape` α and `rate` β.
    /// Requires both finite and > 0. Scale = 1/rate.
    pub fn new(shape: T, rate: T) -> Result<Self, StatsError> {
        if !(shape.is_finite() && rate.is_finite()) || shape <= T::zero() || rate <= T::zero() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { shape, rate })
    }

    /// Unit-rate gamma with the given shape. The caller guarantees `shape`
    /// is finite and > 0.
    pub(super) fn unit_rate(shape: T) -> Self {
        Self { shape, rate: T::one() }
    }

    /// Shape α.
    pub fn shape(&self) -> T {
        self.shape
    }

    /// Rate β.
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Scale θ = 1/β.
    pub fn scale(&self) -> T {
        self.rate.recip()
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Gamma<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        if x == T::zero() {
            let one = T::one();
            if self.shape == one {
                return self.rate; // Exponential special case
            } else if self.shape > one {
                return T::zero();
            } else {
                return T::infinity(); // shape < 1: density blows up at 0
            }
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        if x == T::zero() {
            return self.pdf(x).ln();
        }
        self.shape * self.rate.ln() - lgamma(self.shape)
            + (self.shape - T::one()) * x.ln()
            - self.rate * x
    }

    fn cdf(&self, _x: T) -> Result<T, StatsError> {
        Err(StatsError::UnsupportedOperation)
    }

    fn quantile(&self, _p: T) -> Result<T, StatsError> {
        Err(StatsError::UnsupportedOperation)
    }

    fn mean(&self) -> Result<T, StatsError> {
        Ok(self.shape / self.rate)
    }

    fn variance(&self) -> Result<T, StatsError> {
        Ok(self.shape / (self.rate * self.rate))
    }

    fn mode(&self) -> T {
        if self.shape <= T::one() {
            T::zero()
        } else {
            (self.shape - T::one()) / self.rate
        }
    }

    fn support(&self) -> Support<T> {
        Support { lower: T::zero(), upper: T::infinity() }
    }
}

/// One gamma variate per call, drawn by `rand_distr`.
#[cfg(feature = "rand")]
impl<T> Distribution<T> for Gamma<T>
where
    T: FloatScalar,
    StandardNormal: Distribution<T>,
    Exp1: Distribution<T>,
    Open01: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        // Shape and rate are finite and > 0: `new` checks them, and
        // `unit_rate` is only reached after `Parameterization::validate`
        // has accepted 1/Q².
        match rand_distr::Gamma::new(self.shape, self.scale()) {
            Ok(g) => g.sample(rng),
            Err(_) => {
                debug_assert!(false, "gamma shape {:?} rejected by rand_distr", self.shape);
                T::nan()
            }
        }
    }
}
