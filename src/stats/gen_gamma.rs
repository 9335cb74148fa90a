use crate::FloatScalar;
use crate::special::{lgamma, ln_gamma_ratio};
use super::{ContinuousDistribution, Gamma, Parameterization, StatsError, Support};

#[cfg(feature = "rand")]
use rand::Rng;
#[cfg(feature = "rand")]
use rand_distr::{Distribution, Exp1, Open01, StandardNormal};

/// Generalized gamma distribution.
///
/// Stored in the canonical (μ, σ, Q) form; any of the three
/// [`Parameterization`]s can be used to construct it or read it back.
/// In the (a, d, p) form the density is
///
/// f(x) = (|p| / a^d) x^{d−1} e^{−(x/a)^p} / Γ(d/p) for x > 0,
///
/// which covers the gamma (p = 1), Weibull (d = p), exponential
/// (d = p = 1) and inverse-gamma (p = −1) distributions.
///
/// Values are immutable. Sampling (feature `rand`) draws one deviate from a
/// unit-rate gamma with shape 1/Q², fixed at construction, and maps it
/// through x = exp(μ + σ·ln(Q²g)/Q).
///
/// # Example
///
/// ```
/// use gengamma::stats::{ContinuousDistribution, GeneralizedGamma, Parameterization};
///
/// // inverse gamma, shape 3, scale 1
/// let g = GeneralizedGamma::wikipedia(1.0_f64, -3.0, -1.0).unwrap();
/// assert!((g.mean().unwrap() - 0.5).abs() < 1e-12);
/// assert!((g.variance().unwrap() - 0.25).abs() < 1e-12);
///
/// let (a, d, p) = g.params(Parameterization::Wikipedia);
/// assert!((a - 1.0).abs() < 1e-12 && (d + 3.0).abs() < 1e-12 && (p + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedGamma<T> {
    mu: T,
    sigma: T, // > 0
    q: T,     // ≠ 0
    aux: Gamma<T>,
}

impl<T: FloatScalar> GeneralizedGamma<T> {
    /// Create a distribution from `(p1, p2, p3)` written in `param`.
    ///
    /// Fails with [`StatsError::InvalidParameter`] if the triple is outside
    /// its convention's domain (see [`Parameterization::validate`]) or the
    /// converted canonical parameters are not finite.
    pub fn new(param: Parameterization, p1: T, p2: T, p3: T) -> Result<Self, StatsError> {
        param.validate(p1, p2, p3)?;
        let (mu, sigma, q) = param.canonicalize(p1, p2, p3);
        // Conversions can still overflow for extreme inputs.
        Parameterization::Canonical.validate(mu, sigma, q)?;
        Ok(Self {
            mu,
            sigma,
            q,
            aux: Gamma::unit_rate((q * q).recip()),
        })
    }

    /// Canonical (μ, σ, Q).
    pub fn canonical(mu: T, sigma: T, q: T) -> Result<Self, StatsError> {
        Self::new(Parameterization::Canonical, mu, sigma, q)
    }

    /// Wikipedia (a, d, p).
    pub fn wikipedia(a: T, d: T, p: T) -> Result<Self, StatsError> {
        Self::new(Parameterization::Wikipedia, a, d, p)
    }

    /// Stacy (b, d, p).
    pub fn stacy(b: T, d: T, p: T) -> Result<Self, StatsError> {
        Self::new(Parameterization::Stacy, b, d, p)
    }

    /// Log-scale location μ.
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Log-scale spread σ (> 0).
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Shape Q (≠ 0).
    pub fn q(&self) -> T {
        self.q
    }

    /// The unit-rate gamma (shape 1/Q²) that variates are drawn from.
    pub fn aux_gamma(&self) -> &Gamma<T> {
        &self.aux
    }

    /// Parameters in the requested convention.
    pub fn params(&self, param: Parameterization) -> (T, T, T) {
        param.express(self.mu, self.sigma, self.q)
    }

    /// Parameters as (μ, σ, Q).
    pub fn canonical_params(&self) -> (T, T, T) {
        self.params(Parameterization::Canonical)
    }

    /// ln a, computed without forming |Q|^{2/p} (which overflows for small p).
    fn ln_scale(&self) -> T {
        let two = T::one() + T::one();
        self.mu + two * self.sigma / self.q * self.q.abs().ln()
    }

    /// Γ(d/p) argument, which is always 1/Q².
    fn shape_ratio(&self) -> T {
        self.aux.shape()
    }

    /// ln(Γ((d+k)/p) / Γ(d/p)), with (d+k)/p evaluated as 1/Q² + kσ/Q.
    fn ln_shifted_ratio(&self, k: T) -> Result<T, StatsError> {
        let d0 = self.shape_ratio();
        Ok(ln_gamma_ratio(d0 + k * self.sigma / self.q, d0)?)
    }

    /// Raw moment E\[X^k\] = a^k Γ((d+k)/p) / Γ(d/p).
    ///
    /// Exists only when (d+k)/p > 0. Otherwise, or if the value overflows,
    /// returns [`StatsError::UndefinedMoment`].
    ///
    /// # Example
    ///
    /// ```
    /// use gengamma::stats::GeneralizedGamma;
    ///
    /// // unit exponential: E[X^k] = k!
    /// let g = GeneralizedGamma::canonical(0.0_f64, 1.0, 1.0).unwrap();
    /// assert!((g.raw_moment(3.0).unwrap() - 6.0).abs() < 1e-10);
    /// ```
    pub fn raw_moment(&self, k: T) -> Result<T, StatsError> {
        let m = (k * self.ln_scale() + self.ln_shifted_ratio(k)?).exp();
        if m.is_finite() {
            Ok(m)
        } else {
            Err(StatsError::UndefinedMoment)
        }
    }

    /// a((d−1)/p)^{1/p} in the (a, d, p) form.
    fn stationary_point(&self, d: T, p: T) -> T {
        (self.ln_scale() + ((d - T::one()) / p).ln() / p).exp()
    }

    /// Location of the density's interior maximum, or 0 if it has none.
    ///
    /// Differs from [`mode`](ContinuousDistribution::mode) only for p < 0,
    /// where the density vanishes at 0 and peaks at a((d−1)/p)^{1/p}
    /// (β/(α+1) for the inverse gamma).
    ///
    /// # Example
    ///
    /// ```
    /// use gengamma::stats::{ContinuousDistribution, GeneralizedGamma};
    ///
    /// let g = GeneralizedGamma::wikipedia(2.0_f64, -3.0, -1.0).unwrap();
    /// assert!((g.interior_mode() - 0.5).abs() < 1e-12);
    /// assert_eq!(g.mode(), 0.0);
    /// ```
    pub fn interior_mode(&self) -> T {
        let (_, d, p) = self.params(Parameterization::Wikipedia);
        if p > T::zero() && d <= T::one() {
            return T::zero();
        }
        self.stationary_point(d, p)
    }

    /// Standard deviation √Var(X).
    pub fn std_dev(&self) -> Result<T, StatsError> {
        self.variance().map(|v| v.sqrt())
    }
}

impl<T: FloatScalar> Default for GeneralizedGamma<T> {
    /// Canonical (1, 1, 1).
    fn default() -> Self {
        let one = T::one();
        Self { mu: one, sigma: one, q: one, aux: Gamma::unit_rate(one) }
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for GeneralizedGamma<T> {
    fn pdf(&self, x: T) -> T {
        if x <= T::zero() || x.is_infinite() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x <= T::zero() || x.is_infinite() {
            return T::neg_infinity();
        }
        let (_, d, p) = self.params(Parameterization::Wikipedia);
        let ln_a = self.ln_scale();
        let ln_x = x.ln();
        p.abs().ln() - d * ln_a - lgamma(self.shape_ratio())
            + (d - T::one()) * ln_x
            - (p * (ln_x - ln_a)).exp()
    }

    fn cdf(&self, _x: T) -> Result<T, StatsError> {
        Err(StatsError::UnsupportedOperation)
    }

    fn quantile(&self, _p: T) -> Result<T, StatsError> {
        Err(StatsError::UnsupportedOperation)
    }

    fn mean(&self) -> Result<T, StatsError> {
        self.raw_moment(T::one())
    }

    fn variance(&self) -> Result<T, StatsError> {
        let two = T::one() + T::one();
        let ln_r1 = self.ln_shifted_ratio(T::one())?;
        let ln_r2 = self.ln_shifted_ratio(two)?;
        // a²(r2 − r1²) = a² r1² (r2/r1² − 1), the bracket via expm1
        let var = (two * (self.ln_scale() + ln_r1)).exp() * (ln_r2 - two * ln_r1).exp_m1();
        if var.is_finite() && var >= T::zero() {
            Ok(var)
        } else {
            Err(StatsError::UndefinedMoment)
        }
    }

    /// 0 when d ≤ 1, which includes the whole p < 0 branch; otherwise
    /// a((d−1)/p)^{1/p}. See [`GeneralizedGamma::interior_mode`] for the
    /// peak of the p < 0 densities.
    fn mode(&self) -> T {
        let (_, d, p) = self.params(Parameterization::Wikipedia);
        if d <= T::one() {
            return T::zero();
        }
        self.stationary_point(d, p)
    }

    fn support(&self) -> Support<T> {
        Support { lower: T::zero(), upper: T::infinity() }
    }
}

#[cfg(feature = "rand")]
impl<T> Distribution<T> for GeneralizedGamma<T>
where
    T: FloatScalar,
    StandardNormal: Distribution<T>,
    Exp1: Distribution<T>,
    Open01: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let g = self.aux.sample(rng);
        let w = (self.q * self.q * g).ln() / self.q;
        (self.mu + self.sigma * w).exp()
    }
}
