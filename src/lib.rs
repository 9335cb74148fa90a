//! # gengamma
//!
//! The generalized gamma distribution in pure Rust, no-std compatible.
//! A three-parameter family on the positive reals that contains the gamma,
//! Weibull, exponential and inverse-gamma distributions as special cases.
//!
//! ## Quick start
//!
//! ```
//! use gengamma::stats::{ContinuousDistribution, GeneralizedGamma, Parameterization};
//!
//! // Weibull with shape 2, scale 1.5, written as (a, d, p) = (1.5, 2, 2)
//! let g = GeneralizedGamma::new(Parameterization::Wikipedia, 1.5_f64, 2.0, 2.0).unwrap();
//!
//! // the same distribution in the canonical (μ, σ, Q) form
//! let (mu, sigma, q) = g.params(Parameterization::Canonical);
//! assert!((sigma - 0.5).abs() < 1e-12 && (q - 1.0).abs() < 1e-12);
//! # let _ = mu;
//!
//! assert!(g.pdf(-1.0) == 0.0);
//! assert!(g.mean().unwrap() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — [`GeneralizedGamma`](stats::GeneralizedGamma), the
//!   [`Parameterization`](stats::Parameterization) selector and conversion
//!   formulas between the canonical (μ, σ, Q), Wikipedia (a, d, p) and
//!   Stacy (b, d, p) forms, density, moments and mode through the
//!   [`ContinuousDistribution`](stats::ContinuousDistribution) trait, and
//!   sampling via `rand_distr::Distribution`. The CDF and quantile are not
//!   provided and report [`StatsError::UnsupportedOperation`](stats::StatsError).
//!
//! - [`special`] — Gamma function Γ(x) and ln Γ(x) (Lanczos), plus a
//!   domain-checked ln Γ used for moments.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — `Copy + PartialEq + Debug + Zero + One + Num`
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), i.e. `f32` / `f64`
//!
//! ## Sampling
//!
//! ```
//! # #[cfg(feature = "rand")] {
//! use gengamma::stats::GeneralizedGamma;
//! use rand::SeedableRng;
//! use rand_distr::Distribution;
//!
//! let g = GeneralizedGamma::canonical(0.0_f64, 1.0, 1.0).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let x = g.sample(&mut rng);
//! assert!(x >= 0.0);
//! # }
//! ```
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `rand`  | yes      | Sampling through `rand` / `rand_distr` |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `all`   | no       | All features: `std` + `rand` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
pub mod stats;
pub mod traits;

pub use traits::{FloatScalar, Scalar};
