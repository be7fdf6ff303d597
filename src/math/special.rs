//! Special functions for the TLS + Mattis–Bardeen model.
//!
//! Two functions are needed:
//!
//! - `ψ(z)`: the digamma function at complex argument. The TLS term
//!   evaluates `Re ψ(1/2 + iy)`, which has no elementary closed form, so we
//!   compute the full complex digamma and take the real part.
//! - `I0(x)`: the modified Bessel function of the first kind, order 0.
//!   The model only ever uses the product `exp(-x)·I0(x)`, so we expose the
//!   exponentially scaled form `i0e` directly; raw `I0` overflows near
//!   `x ≈ 700` while the scaled product stays bounded.
//!
//! Numerical notes:
//! - `digamma` uses the recurrence `ψ(z) = ψ(z+1) - 1/z` to push the
//!   argument into `|z| >= 10`, then the Bernoulli asymptotic series. With
//!   that radius the series terms decay below f64 epsilon before the
//!   truncation order.
//! - `i0e` uses the Abramowitz & Stegun 9.8.1 / 9.8.2 polynomial
//!   approximations (|error| < 2e-7 over each branch).

use num_complex::Complex64;

/// Radius beyond which the digamma asymptotic series is accurate.
const ASYMPTOTIC_RADIUS: f64 = 10.0;

/// Coefficients of `z^{-2n}` in the digamma asymptotic series,
/// `B_{2n} / (2n)` for `n = 1..=7`.
const DIGAMMA_SERIES: [f64; 7] = [
    1.0 / 12.0,
    -1.0 / 120.0,
    1.0 / 252.0,
    -1.0 / 240.0,
    1.0 / 132.0,
    -691.0 / 32760.0,
    1.0 / 12.0,
];

/// Switch point between the two A&S branches for `i0e`.
const I0_BRANCH: f64 = 3.75;

/// Digamma function `ψ(z)` for complex `z` with `Re(z) > 0`.
pub fn digamma(z: Complex64) -> Complex64 {
    // Shift the argument up until the asymptotic series applies:
    // ψ(z) = ψ(z + n) - Σ_{k=0}^{n-1} 1/(z + k)
    let mut z = z;
    let mut shift = Complex64::new(0.0, 0.0);
    while z.norm() < ASYMPTOTIC_RADIUS {
        shift -= z.inv();
        z += 1.0;
    }

    // ψ(z) ~ ln z - 1/(2z) - Σ_n B_{2n} / (2n z^{2n})
    let inv = z.inv();
    let inv2 = inv * inv;
    let mut series = Complex64::new(0.0, 0.0);
    let mut power = inv2;
    for c in DIGAMMA_SERIES {
        series += power * c;
        power *= inv2;
    }

    shift + z.ln() - inv * 0.5 - series
}

/// Exponentially scaled modified Bessel function `i0e(x) = exp(-|x|)·I0(x)`.
pub fn i0e(x: f64) -> f64 {
    let ax = x.abs();
    if ax < I0_BRANCH {
        // A&S 9.8.1: polynomial in t = (x/3.75)^2, then scale by exp(-|x|).
        let t = (ax / I0_BRANCH) * (ax / I0_BRANCH);
        let i0 = 1.0
            + t * (3.515_622_9
                + t * (3.089_942_4
                    + t * (1.206_749_2
                        + t * (0.265_973_2 + t * (0.036_076_8 + t * 0.004_581_3)))));
        (-ax).exp() * i0
    } else {
        // A&S 9.8.2: sqrt(x)·exp(-x)·I0(x) as a polynomial in t = 3.75/x.
        let t = I0_BRANCH / ax;
        let p = 0.398_942_28
            + t * (0.013_285_92
                + t * (0.002_253_19
                    + t * (-0.001_575_65
                        + t * (0.009_162_81
                            + t * (-0.020_577_06
                                + t * (0.026_355_37
                                    + t * (-0.016_476_33 + t * 0.003_923_77)))))));
        p / ax.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Euler–Mascheroni constant.
    const GAMMA: f64 = 0.577_215_664_901_532_9;

    #[test]
    fn digamma_known_real_values() {
        let psi_1 = digamma(Complex64::new(1.0, 0.0));
        assert!((psi_1.re + GAMMA).abs() < 1e-12, "psi(1) = -gamma, got {}", psi_1.re);
        assert!(psi_1.im.abs() < 1e-12);

        let psi_2 = digamma(Complex64::new(2.0, 0.0));
        assert!((psi_2.re - (1.0 - GAMMA)).abs() < 1e-12);

        // psi(1/2) = -gamma - 2 ln 2
        let psi_half = digamma(Complex64::new(0.5, 0.0));
        let expect = -GAMMA - 2.0 * std::f64::consts::LN_2;
        assert!((psi_half.re - expect).abs() < 1e-12);
    }

    #[test]
    fn digamma_recurrence_at_complex_argument() {
        // psi(z + 1) - psi(z) = 1/z
        for &(re, im) in &[(0.5, 1.3), (0.5, -0.2), (2.0, 5.0), (0.5, 40.0)] {
            let z = Complex64::new(re, im);
            let lhs = digamma(z + 1.0) - digamma(z);
            let rhs = z.inv();
            assert!((lhs - rhs).norm() < 1e-12, "recurrence failed at {z}");
        }
    }

    #[test]
    fn digamma_conjugate_symmetry() {
        let z = Complex64::new(0.5, 0.7);
        let a = digamma(z);
        let b = digamma(z.conj());
        assert!((a - b.conj()).norm() < 1e-13);
    }

    #[test]
    fn i0e_at_zero_and_small_argument() {
        assert!((i0e(0.0) - 1.0).abs() < 1e-12);

        // I0(1) = 1.2660658777520084
        let expect = 1.266_065_877_752_008_4 * (-1.0_f64).exp();
        assert!((i0e(1.0) - expect).abs() < 1e-6);
    }

    #[test]
    fn i0e_large_argument() {
        // i0e(10) = exp(-10)·I0(10) = 0.12783333709581248
        assert!((i0e(10.0) - 0.127_833_337_095_812_48).abs() < 1e-5);

        // Far out, i0e(x) ~ 1/sqrt(2 pi x); stays finite where raw I0 overflows.
        let far = i0e(1e4);
        let asym = 1.0 / (2.0 * std::f64::consts::PI * 1e4).sqrt();
        assert!((far / asym - 1.0).abs() < 1e-3);
    }

    #[test]
    fn i0e_even_in_x() {
        for &x in &[0.3, 2.0, 5.0, 50.0] {
            assert!((i0e(x) - i0e(-x)).abs() < 1e-15);
        }
    }

    #[test]
    fn i0e_branches_agree_at_switch_point() {
        let below = i0e(3.75 - 1e-9);
        let above = i0e(3.75 + 1e-9);
        assert!((below - above).abs() < 1e-6);
    }
}
