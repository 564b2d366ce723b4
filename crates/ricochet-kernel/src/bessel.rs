//! Order-zero Bessel functions and the Hankel function of the first kind.
//!
//! Polynomial approximations from Abramowitz & Stegun 9.4.1–9.4.6.
//! Absolute error is below 5e-8 over the whole positive axis, which is
//! well under the accumulation noise of a multi-bounce run.

use num_complex::Complex64;
use std::f64::consts::FRAC_2_PI;

/// Bessel function of the first kind, order zero.
pub fn j0(x: f64) -> f64 {
    let x = x.abs();
    if x <= 3.0 {
        let t = (x / 3.0).powi(2);
        1.0 + t
            * (-2.249_999_7
                + t * (1.265_620_8
                    + t * (-0.316_386_6 + t * (0.044_447_9 + t * (-0.003_944_4 + t * 0.000_210_0)))))
    } else {
        let (f0, theta0) = asymptotic(x);
        f0 * theta0.cos() / x.sqrt()
    }
}

/// Bessel function of the second kind, order zero.
///
/// Diverges to `-inf` at `x = 0` and is undefined for negative `x`.
pub fn y0(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x <= 3.0 {
        let t = (x / 3.0).powi(2);
        FRAC_2_PI * (x / 2.0).ln() * j0(x)
            + 0.367_466_91
            + t * (0.605_593_66
                + t * (-0.743_503_84
                    + t * (0.253_001_17
                        + t * (-0.042_612_14 + t * (0.004_279_16 + t * -0.000_248_46)))))
    } else {
        let (f0, theta0) = asymptotic(x);
        f0 * theta0.sin() / x.sqrt()
    }
}

/// `H0⁽¹⁾(x) = J0(x) + i·Y0(x)`.
pub fn hankel1_0(x: f64) -> Complex64 {
    Complex64::new(j0(x), y0(x))
}

/// Modulus and phase terms shared by the `x > 3` branches.
fn asymptotic(x: f64) -> (f64, f64) {
    let u = 3.0 / x;
    let f0 = 0.797_884_56
        + u * (-0.000_000_77
            + u * (-0.005_527_40
                + u * (-0.000_095_12 + u * (0.001_372_37 + u * (-0.000_728_05 + u * 0.000_144_76)))));
    let theta0 = x - 0.785_398_16
        + u * (-0.041_663_97
            + u * (-0.000_039_54
                + u * (0.002_625_73 + u * (-0.000_541_25 + u * (-0.000_293_33 + u * 0.000_135_58)))));
    (f0, theta0)
}
