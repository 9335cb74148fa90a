use super::*;
use crate::special::gamma;

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

fn assert_triple(got: (f64, f64, f64), want: (f64, f64, f64), tol: f64) {
    assert!(
        rel_close(got.0, want.0, tol) && rel_close(got.1, want.1, tol) && rel_close(got.2, want.2, tol),
        "{got:?} vs {want:?}"
    );
}

// ======================== Conversions ========================

#[test]
fn wikipedia_unit_is_canonical_unit() {
    assert_eq!(from_wikipedia(1.0_f64, 1.0, 1.0), (0.0, 1.0, 1.0));
    assert_eq!(to_wikipedia(0.0_f64, 1.0, 1.0), (1.0, 1.0, 1.0));
}

#[test]
fn wikipedia_roundtrip() {
    let cases = [
        (1.0_f64, 1.0, 1.0),
        (2.5, 3.0, 1.5),
        (0.3, 0.4, 2.0),
        (7.0, -2.0, -0.5),
        (1.0, -3.0, -1.0),
    ];
    for &(a, d, p) in &cases {
        let (mu, sigma, q) = from_wikipedia(a, d, p);
        assert!(sigma > 0.0 && q != 0.0);
        assert_triple(to_wikipedia(mu, sigma, q), (a, d, p), 1e-9);
    }
}

#[test]
fn stacy_roundtrip() {
    let cases = [(1.0_f64, 1.0, 1.0), (0.2, 3.0, 1.5), (4.0, -2.0, -0.5)];
    for &(b, d, p) in &cases {
        let (mu, sigma, q) = from_stacy(b, d, p);
        assert_triple(to_stacy(mu, sigma, q), (b, d, p), 1e-9);
    }
}

#[test]
fn stacy_scale_relation() {
    // b = a^{-p}
    let (mu, sigma, q) = (0.3_f64, 0.7, 1.4);
    let (a, d, p) = to_wikipedia(mu, sigma, q);
    let (b, d2, p2) = to_stacy(mu, sigma, q);
    assert!(rel_close(b, a.powf(-p), 1e-12));
    assert_eq!((d, p), (d2, p2));
}

#[test]
fn canonical_is_identity() {
    assert_eq!(to_canonical(-1.0_f64, 0.5, -2.0), (-1.0, 0.5, -2.0));
    assert_eq!(Parameterization::Canonical.canonicalize(-1.0_f64, 0.5, -2.0), (-1.0, 0.5, -2.0));
}

#[test]
fn wikipedia_shapes_share_sign() {
    for &(sigma, q) in &[(0.5_f64, 2.0), (2.0, -0.3), (1.0, -1.0)] {
        let (_, d, p) = to_wikipedia(0.0, sigma, q);
        assert!(d * p > 0.0);
    }
}

#[test]
fn parameterization_default_and_display() {
    assert_eq!(Parameterization::default(), Parameterization::Canonical);
    assert_eq!(format!("{}", Parameterization::Stacy), "stacy (b, d, p)");
}

// ======================== Construction ========================

#[test]
fn construct_default() {
    let g = GeneralizedGamma::<f64>::default();
    assert_eq!(g.canonical_params(), (1.0, 1.0, 1.0));
    assert_eq!(g, GeneralizedGamma::canonical(1.0, 1.0, 1.0).unwrap());
}

#[test]
fn construct_wikipedia_unit() {
    let g = GeneralizedGamma::new(Parameterization::Wikipedia, 1.0_f64, 1.0, 1.0).unwrap();
    assert_triple(g.canonical_params(), (0.0, 1.0, 1.0), 1e-14);
    assert!((g.mean().unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn params_roundtrip_each_tag() {
    let cases = [
        (Parameterization::Canonical, (0.4_f64, 0.8, -1.2)),
        (Parameterization::Wikipedia, (2.0, 3.0, 1.5)),
        (Parameterization::Stacy, (0.5, -2.0, -0.7)),
    ];
    for &(tag, (p1, p2, p3)) in &cases {
        let g = GeneralizedGamma::new(tag, p1, p2, p3).unwrap();
        assert_triple(g.params(tag), (p1, p2, p3), 1e-9);
    }
}

#[test]
fn aux_gamma_is_cached() {
    let g = GeneralizedGamma::canonical(0.0_f64, 1.0, 0.5).unwrap();
    assert_eq!(g.aux_gamma().shape(), 4.0);
    assert_eq!(g.aux_gamma().rate(), 1.0);
    assert_eq!(g.aux_gamma().scale(), 1.0);
}

#[test]
fn construct_invalid() {
    use Parameterization::*;
    let bad = [
        (Canonical, 0.0_f64, 0.0, 1.0),
        (Canonical, 0.0, -1.0, 1.0),
        (Canonical, 0.0, 1.0, 0.0),
        (Canonical, 0.0, 1.0, 1e-200),
        (Canonical, 0.0, 1.0, 1e200),
        (Canonical, f64::NAN, 1.0, 1.0),
        (Canonical, f64::INFINITY, 1.0, 1.0),
        (Wikipedia, 0.0, 1.0, 1.0),
        (Wikipedia, -1.0, 1.0, 1.0),
        (Wikipedia, 1.0, 0.0, 1.0),
        (Wikipedia, 1.0, 1.0, 0.0),
        (Wikipedia, 1.0, 2.0, -1.0),
        (Wikipedia, 1.0, -2.0, 1.0),
        (Stacy, 0.0, 1.0, 1.0),
        (Stacy, 1.0, 2.0, -1.0),
        (Stacy, 1.0, f64::NAN, 1.0),
    ];
    for &(tag, p1, p2, p3) in &bad {
        assert_eq!(
            GeneralizedGamma::new(tag, p1, p2, p3).unwrap_err(),
            StatsError::InvalidParameter,
            "{tag} ({p1}, {p2}, {p3})"
        );
    }
}

#[test]
fn construct_rejects_overflowing_conversion() {
    // a = b^{-1/p} overflows for tiny p
    assert_eq!(
        GeneralizedGamma::stacy(1e-10_f64, 1.0, 1e-3).unwrap_err(),
        StatsError::InvalidParameter
    );
}

// ======================== Density ========================

#[test]
fn support_is_nonnegative_half_line() {
    for g in [
        GeneralizedGamma::canonical(0.0_f64, 1.0, 1.0).unwrap(),
        GeneralizedGamma::wikipedia(1.0, -3.0, -1.0).unwrap(),
    ] {
        let s = g.support();
        assert_eq!(s.lower, 0.0);
        assert!(s.upper.is_infinite() && s.upper > 0.0);
        assert!(s.contains(0.0) && s.contains(1e300) && !s.contains(-1e-300));
    }
}

#[test]
fn pdf_zero_off_support() {
    let g = GeneralizedGamma::wikipedia(2.0_f64, 0.5, 1.0).unwrap();
    for &x in &[0.0, -1e-12, -1.0, f64::NEG_INFINITY] {
        assert_eq!(g.pdf(x), 0.0);
        assert_eq!(g.ln_pdf(x), f64::NEG_INFINITY);
    }
    assert_eq!(g.pdf(f64::INFINITY), 0.0);
}

#[test]
fn pdf_unit_exponential() {
    let g = GeneralizedGamma::canonical(0.0_f64, 1.0, 1.0).unwrap();
    for &x in &[0.1, 1.0, 3.0] {
        assert!((g.pdf(x) - (-x).exp()).abs() < 1e-13);
    }
}

#[test]
fn ln_pdf_matches_pdf() {
    let g = GeneralizedGamma::wikipedia(1.3_f64, 2.2, 0.8).unwrap();
    for &x in &[0.05, 0.7, 2.0, 9.0] {
        assert!((g.ln_pdf(x) - g.pdf(x).ln()).abs() < 1e-12);
    }
}

#[test]
fn gamma_reduction() {
    // (a, d, p) = (θ, k, 1) is Gamma(k, rate 1/θ)
    let (theta, k) = (2.0_f64, 3.0);
    let g = GeneralizedGamma::wikipedia(theta, k, 1.0).unwrap();
    let reference = Gamma::new(k, 1.0 / theta).unwrap();
    for &x in &[0.2, 1.0, 4.0, 12.0] {
        assert!((g.pdf(x) - reference.pdf(x)).abs() < 1e-12);
    }
    assert!((g.mean().unwrap() - reference.mean().unwrap()).abs() < 1e-10);
    assert!((g.variance().unwrap() - reference.variance().unwrap()).abs() < 1e-9);
    assert!((g.mode() - reference.mode()).abs() < 1e-10);
}

#[test]
fn weibull_reduction() {
    // (a, d, p) = (λ, k, k) is Weibull(k, λ)
    let (lambda, k) = (1.5_f64, 2.5);
    let g = GeneralizedGamma::wikipedia(lambda, k, k).unwrap();
    for &x in &[0.3, 1.0, 2.5] {
        let z = x / lambda;
        let expected = k / lambda * z.powf(k - 1.0) * (-z.powf(k)).exp();
        assert!((g.pdf(x) - expected).abs() < 1e-12);
    }
    let mean = lambda * gamma(1.0 + 1.0 / k);
    assert!((g.mean().unwrap() - mean).abs() < 1e-10);
}

// ======================== Moments ========================

#[test]
fn inverse_gamma_moments() {
    // (a, d, p) = (β, −α, −1) is InverseGamma(α, β)
    for &(alpha, beta) in &[(3.0_f64, 1.0), (4.0, 2.0), (7.5, 0.3)] {
        let g = GeneralizedGamma::wikipedia(beta, -alpha, -1.0).unwrap();
        let mean = beta / (alpha - 1.0);
        let var = beta * beta / ((alpha - 1.0).powi(2) * (alpha - 2.0));
        assert!((g.mean().unwrap() - mean).abs() < 1e-6);
        assert!((g.variance().unwrap() - var).abs() < 1e-6);
        assert!((g.std_dev().unwrap() - var.sqrt()).abs() < 1e-6);
    }
}

#[test]
fn mean_matches_gamma_ratio_formula() {
    // a Γ(1/Q² + σ/Q) / Γ(1/Q²) with a = (Q²)^{σ/Q} e^μ
    let (mu, sigma, q) = (0.4_f64, 0.6, 1.3);
    let g = GeneralizedGamma::canonical(mu, sigma, q).unwrap();
    let qs = q * q;
    let a = qs.powf(sigma / q) * mu.exp();
    let expected = a * gamma(1.0 / qs + sigma / q) / gamma(1.0 / qs);
    assert!((g.mean().unwrap() - expected).abs() < 1e-10);
}

#[test]
fn variance_matches_gamma_ratio_formula() {
    let (a, d, p) = (1.7_f64, 2.4, 1.1);
    let g = GeneralizedGamma::wikipedia(a, d, p).unwrap();
    let d2 = gamma(d / p);
    let expected = a * a * (gamma((d + 2.0) / p) / d2 - (gamma((d + 1.0) / p) / d2).powi(2));
    assert!((g.variance().unwrap() - expected).abs() < 1e-10);
}

#[test]
fn moments_small_q_do_not_overflow() {
    // 1/Q² = 10⁴: Γ(d/p) alone overflows f64
    let g = GeneralizedGamma::canonical(0.0_f64, 0.1, 0.01).unwrap();
    let m = g.mean().unwrap();
    let v = g.variance().unwrap();
    assert!(m.is_finite() && m > 0.0);
    assert!(v.is_finite() && v > 0.0);
    // close to the lognormal limit exp(μ + σ²/2)
    assert!((m - (0.005_f64).exp()).abs() < 1e-3);
}

#[test]
fn raw_moment_zero_is_one() {
    let g = GeneralizedGamma::stacy(0.8_f64, 1.5, 0.9).unwrap();
    assert!((g.raw_moment(0.0).unwrap() - 1.0).abs() < 1e-14);
}

#[test]
fn undefined_moments() {
    // Q < 0 with σ|Q| ≥ 1: (d+1)/p ≤ 0
    let g = GeneralizedGamma::canonical(0.0_f64, 2.0, -1.0).unwrap();
    assert_eq!(g.mean().unwrap_err(), StatsError::UndefinedMoment);
    assert_eq!(g.variance().unwrap_err(), StatsError::UndefinedMoment);
    assert_eq!(g.std_dev().unwrap_err(), StatsError::UndefinedMoment);

    // inverse gamma, α = 1.5: mean exists, variance does not
    let g = GeneralizedGamma::wikipedia(1.0_f64, -1.5, -1.0).unwrap();
    assert!((g.mean().unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(g.variance().unwrap_err(), StatsError::UndefinedMoment);

    // inverse gamma, α = 1: boundary, no mean
    let g = GeneralizedGamma::wikipedia(1.0_f64, -1.0, -1.0).unwrap();
    assert_eq!(g.mean().unwrap_err(), StatsError::UndefinedMoment);
}

#[test]
fn undefined_moment_does_not_poison_value() {
    let g = GeneralizedGamma::canonical(0.0_f64, 2.0, -1.0).unwrap();
    assert!(g.mean().is_err());
    assert!(g.pdf(1.0) > 0.0);
    assert!(g.interior_mode() > 0.0);
}

// ======================== Mode ========================

fn pdf_slope(g: &GeneralizedGamma<f64>, x: f64) -> f64 {
    let h = 1e-6 * x.max(1e-3);
    (g.pdf(x + h) - g.pdf(x - h)) / (2.0 * h)
}

#[test]
fn mode_zero_when_d_at_most_one() {
    let cases = [
        (1.0_f64, 1.0, 1.0),
        (2.0, 0.5, 1.0),
        (1.0, 0.8, 3.0),
        (1.0, -3.0, -1.0),
        (2.0, -0.5, -2.0),
    ];
    for &(a, d, p) in &cases {
        let g = GeneralizedGamma::wikipedia(a, d, p).unwrap();
        assert_eq!(g.mode(), 0.0, "({a}, {d}, {p})");
    }
}

#[test]
fn mode_is_stationary_point() {
    for &(a, d, p) in &[(2.0_f64, 3.0, 2.0), (1.0, 1.5, 0.7), (0.5, 4.0, 1.0)] {
        let g = GeneralizedGamma::wikipedia(a, d, p).unwrap();
        let m = g.mode();
        assert!((m - a * ((d - 1.0) / p).powf(1.0 / p)).abs() < 1e-12);
        assert_eq!(g.interior_mode(), m);
        assert!(m > 0.0);
        assert!(pdf_slope(&g, m).abs() < 1e-3);
        assert!(g.pdf(m) > g.pdf(m * 0.9) && g.pdf(m) > g.pdf(m * 1.1));
    }
}

#[test]
fn interior_mode_inverse_gamma() {
    // InverseGamma(α, β) peaks at β/(α+1)
    let g = GeneralizedGamma::wikipedia(2.0_f64, -3.0, -1.0).unwrap();
    let m = g.interior_mode();
    assert!((m - 0.5).abs() < 1e-12);
    assert!(pdf_slope(&g, m).abs() < 1e-3);
    assert_eq!(g.mode(), 0.0);
}

#[test]
fn interior_mode_zero_without_peak() {
    let g = GeneralizedGamma::wikipedia(2.0_f64, 0.5, 1.0).unwrap();
    assert_eq!(g.interior_mode(), 0.0);
}

// ======================== Unsupported ========================

#[test]
fn cdf_quantile_unsupported() {
    let g = GeneralizedGamma::<f64>::default();
    assert_eq!(g.cdf(1.0).unwrap_err(), StatsError::UnsupportedOperation);
    assert_eq!(g.quantile(0.5).unwrap_err(), StatsError::UnsupportedOperation);
    let aux = g.aux_gamma();
    assert_eq!(aux.cdf(1.0).unwrap_err(), StatsError::UnsupportedOperation);
    assert_eq!(aux.quantile(0.5).unwrap_err(), StatsError::UnsupportedOperation);
}

// ======================== Gamma ========================

#[test]
fn gamma_pdf_at_mode() {
    // Gamma(2, 1): mode at x = (α-1)/β = 1, pdf(1) = 1/e
    let g = Gamma::new(2.0_f64, 1.0).unwrap();
    assert_eq!(g.mode(), 1.0);
    assert!((g.pdf(1.0) - (-1.0_f64).exp()).abs() < 1e-14);
}

#[test]
fn gamma_pdf_at_zero() {
    assert_eq!(Gamma::new(1.0_f64, 3.0).unwrap().pdf(0.0), 3.0);
    assert_eq!(Gamma::new(2.0_f64, 1.0).unwrap().pdf(0.0), 0.0);
    assert!(Gamma::new(0.5_f64, 1.0).unwrap().pdf(0.0).is_infinite());
}

#[test]
fn gamma_invalid() {
    assert_eq!(Gamma::new(0.0_f64, 1.0).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Gamma::new(1.0_f64, -1.0).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Gamma::new(f64::INFINITY, 1.0).unwrap_err(), StatsError::InvalidParameter);
}

// ======================== f32 / errors ========================

#[test]
fn generalized_gamma_f32() {
    let g = GeneralizedGamma::wikipedia(1.0_f32, 1.0, 1.0).unwrap();
    assert!((g.mean().unwrap() - 1.0).abs() < 1e-5);
    assert!((g.pdf(1.0) - (-1.0_f32).exp()).abs() < 1e-5);
    let (a, d, p) = g.params(Parameterization::Wikipedia);
    assert!((a - 1.0).abs() < 1e-5 && (d - 1.0).abs() < 1e-5 && (p - 1.0).abs() < 1e-5);
}

#[test]
fn error_display() {
    assert_eq!(
        format!("{}", StatsError::InvalidParameter),
        "distribution parameter out of valid range"
    );
    assert_eq!(
        format!("{}", StatsError::UndefinedMoment),
        "moment is not defined for these parameters"
    );
    assert_eq!(
        format!("{}", StatsError::UnsupportedOperation),
        "operation not supported by this distribution"
    );
}

#[test]
fn special_error_maps_to_undefined_moment() {
    let e: StatsError = crate::special::SpecialError::DomainError.into();
    assert_eq!(e, StatsError::UndefinedMoment);
}
