//! Polynomial approximations of `sin`, `cos` and `tan`.
//!
//! The plain functions are only accurate inside a narrow domain. The `_normalized` functions first
//! fold their argument into that domain with a single floor-based reduction, so they accept any
//! finite input at the cost of a few extra instructions.

use std::{f32, f64};

/// `4 / pi`
const SIN_LINEAR: f64 = 1.273_239_544_735_162_7;
/// `4 / pi^2`
const SIN_QUADRATIC: f64 = 0.405_284_734_569_351_1;

const TAN_HP_NUM: f64 = 0.0958;
const TAN_HP_DEN2: f64 = 0.4291;
const TAN_HP_DEN4: f64 = 0.0097;

/// Fold `x` into `[-pi, pi)`. Runs in `f64`: an `f32` multiple of `TAU` drifts by whole radians
/// once `|x|` reaches a few million.
#[inline(always)]
fn wrap_pi_float(x: f32) -> f32 {
    wrap_pi_double(x as f64) as f32
}

/// Fold `x` into `[-pi, pi)`.
#[inline(always)]
fn wrap_pi_double(x: f64) -> f64 {
    x - f64::consts::TAU * ((x + f64::consts::PI) / f64::consts::TAU).floor()
}

/// Fold `x` into `[-pi/2, pi/2)`, in `f64` like [`wrap_pi_float`].
#[inline(always)]
fn wrap_half_pi_float(x: f32) -> f32 {
    wrap_half_pi_double(x as f64) as f32
}

/// Fold `x` into `[-pi/2, pi/2)`.
#[inline(always)]
fn wrap_half_pi_double(x: f64) -> f64 {
    x - f64::consts::PI * ((x + f64::consts::FRAC_PI_2) / f64::consts::PI).floor()
}

/// Approximates `sin(x)` in radians with a parabola through 0, pi/2 and pi. The quadratic term
/// takes the sign of `x`. Maximum absolute error is about `0.056` on `[-pi, pi]`.
///
/// ```
/// let x = 1.0_f32;
/// assert!((quickmath::trig::sin_float(x) - x.sin()).abs() < 0.06);
/// ```
#[inline]
pub fn sin_float(x: f32) -> f32 {
    x * (SIN_LINEAR as f32 - SIN_QUADRATIC as f32 * x.abs())
}

/// Approximates `sin(x)` on `[-pi, pi]`. See [`sin_float`].
#[inline]
pub fn sin_double(x: f64) -> f64 {
    x * (SIN_LINEAR - SIN_QUADRATIC * x.abs())
}

/// Approximates `cos(x)` as `sin(x + pi/2)`. Recommended domain is `[-3pi/2, pi/2]`.
#[inline]
pub fn cos_float(x: f32) -> f32 {
    sin_float(x + f32::consts::FRAC_PI_2)
}

/// Approximates `cos(x)` as `sin(x + pi/2)`. Recommended domain is `[-3pi/2, pi/2]`.
#[inline]
pub fn cos_double(x: f64) -> f64 {
    sin_double(x + f64::consts::FRAC_PI_2)
}

/// [`sin_float`] for any `|x|` up to `1e12`, with the same `0.056` error bound.
///
/// Past that the fold itself loses precision and the error grows with `|x|`.
#[inline]
pub fn sin_float_normalized(x: f32) -> f32 {
    sin_float(wrap_pi_float(x))
}

/// [`sin_double`] for any `|x|` up to `1e12`, with the same `0.056` error bound.
#[inline]
pub fn sin_double_normalized(x: f64) -> f64 {
    sin_double(wrap_pi_double(x))
}

/// [`cos_float`] for any `|x|` up to `1e12`, with the same `0.056` error bound.
///
/// The `pi/2` shift happens in `f64` too.
#[inline]
pub fn cos_float_normalized(x: f32) -> f32 {
    sin_float(wrap_pi_double(x as f64 + f64::consts::FRAC_PI_2) as f32)
}

/// [`cos_double`] for any `|x|` up to `1e12`, with the same `0.056` error bound.
#[inline]
pub fn cos_double_normalized(x: f64) -> f64 {
    sin_double(wrap_pi_double(x + f64::consts::FRAC_PI_2))
}

/// Approximates `tan(x)` with the first four terms of its Taylor series.
///
/// Recommended domain is `[-1, 1]`, where the relative error stays under 3%.
#[inline]
pub fn tan_float(x: f32) -> f32 {
    let y = x * x;
    x * (1.0 + y * (1.0 / 3.0 + y * (2.0 / 15.0 + y * (17.0 / 315.0))))
}

/// Approximates `tan(x)` on `[-1, 1]`. See [`tan_float`].
#[inline]
pub fn tan_double(x: f64) -> f64 {
    let y = x * x;
    x * (1.0 + y * (1.0 / 3.0 + y * (2.0 / 15.0 + y * (17.0 / 315.0))))
}

/// Approximates `tan(x)` with a rational function.
///
/// Recommended domain is `[-pi/2, pi/2]`. The relative error is under 1% up to `|x| = 1.5` and
/// rises steeply in the last few hundredths before the pole.
#[inline]
pub fn tan_float_hp(x: f32) -> f32 {
    let y = x * x;
    x * (1.0 - TAN_HP_NUM as f32 * y)
        / (1.0 - y * (TAN_HP_DEN2 as f32 - TAN_HP_DEN4 as f32 * y))
}

/// Approximates `tan(x)` on `[-pi/2, pi/2]`. See [`tan_float_hp`].
#[inline]
pub fn tan_double_hp(x: f64) -> f64 {
    let y = x * x;
    x * (1.0 - TAN_HP_NUM * y) / (1.0 - y * (TAN_HP_DEN2 - TAN_HP_DEN4 * y))
}

/// [`tan_float`] after folding `x` into `[-pi/2, pi/2)`.
///
/// The fold does not widen the `[-1, 1]` accuracy window of the underlying polynomial.
#[inline]
pub fn tan_float_normalized(x: f32) -> f32 {
    tan_float(wrap_half_pi_float(x))
}

/// [`tan_double`] after folding `x` into `[-pi/2, pi/2)`.
#[inline]
pub fn tan_double_normalized(x: f64) -> f64 {
    tan_double(wrap_half_pi_double(x))
}

/// [`tan_float_hp`] for any `|x|` up to `1e12`, away from the poles.
#[inline]
pub fn tan_float_hp_normalized(x: f32) -> f32 {
    tan_float_hp(wrap_half_pi_float(x))
}

/// [`tan_double_hp`] for any `|x|` up to `1e12`, away from the poles.
#[inline]
pub fn tan_double_hp_normalized(x: f64) -> f64 {
    tan_double_hp(wrap_half_pi_double(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[test]
    fn test_wrap() {
        assert!((wrap_pi_double(3.0 * PI + 0.5) - (-PI + 0.5)).abs() < 1e-12);
        assert!((wrap_pi_double(-TAU - 1.0) - (-1.0)).abs() < 1e-12);
        assert_eq!(wrap_pi_double(1.0), 1.0);
        assert!((wrap_half_pi_double(PI + 0.25) - 0.25).abs() < 1e-12);
        assert!(wrap_half_pi_float(-10.0).abs() <= std::f32::consts::FRAC_PI_2 + 1e-6);
    }

    #[test]
    fn test_wrap_float_large_input() {
        // 1e7 is 1591549 whole turns plus about 2.71 radians.
        let expected = 1e7_f64 - TAU * 1_591_549.0;
        assert!((wrap_pi_float(1e7) as f64 - expected).abs() < 1e-6);
        assert!((sin_float_normalized(1e7) as f64 - 1e7_f64.sin()).abs() < 0.06);
        assert!((cos_float_normalized(-3e6) as f64 - (-3e6_f64).cos()).abs() < 0.06);
        let half = wrap_half_pi_float(1e7) as f64;
        assert!((half.tan() - 1e7_f64.tan()).abs() < 1e-4);
    }

    #[test]
    fn test_sin_nodes() {
        assert_eq!(sin_double(0.0), 0.0);
        assert!((sin_double(FRAC_PI_2) - 1.0).abs() < 1e-12);
        assert!((sin_double(-FRAC_PI_2) + 1.0).abs() < 1e-12);
        assert!(sin_double(PI).abs() < 1e-12);
        assert!((sin_float(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sin_is_odd() {
        for &x in &[0.1, 0.7, 1.3, 2.9] {
            assert_eq!(sin_double(-x), -sin_double(x));
            assert_eq!(sin_float(-x as f32), -sin_float(x as f32));
        }
    }

    #[test]
    fn test_cos() {
        assert!((cos_double(0.0) - 1.0).abs() < 1e-12);
        assert!(cos_double(FRAC_PI_2).abs() < 1e-12);
        assert!((cos_double(-PI) + 1.0).abs() < 1e-12);
        assert!((cos_float_normalized(std::f32::consts::TAU) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalized_matches_plain_in_domain() {
        for &x in &[-3.0, -1.0, 0.0, 0.5, 2.5] {
            assert_eq!(sin_double_normalized(x), sin_double(x));
        }
        assert!((sin_double_normalized(5.0 * TAU + 1.0) - sin_double(1.0)).abs() < 1e-12);
        assert!((cos_double_normalized(-7.0 * TAU) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tan() {
        assert_eq!(tan_double(0.0), 0.0);
        assert!((tan_double(FRAC_PI_4) - 1.0).abs() < 0.01);
        assert!((tan_float(0.5) - 0.5_f32.tan()).abs() < 1e-3);
        assert!((tan_double_hp(FRAC_PI_4) - 1.0).abs() < 1e-3);
        assert!((tan_float_hp(1.2) - 1.2_f32.tan()).abs() < 0.01);
    }

    #[test]
    fn test_tan_normalized() {
        assert!((tan_double_normalized(PI + 0.5) - tan_double(0.5)).abs() < 1e-12);
        assert!((tan_double_hp_normalized(-3.0 * PI + 1.0) - tan_double_hp(1.0)).abs() < 1e-12);
        assert!((tan_float_hp_normalized(10.0) - 10.0_f32.tan()).abs() < 0.01);
        assert!((tan_float_normalized(std::f32::consts::PI + 0.25) - 0.25_f32.tan()).abs() < 1e-3);
    }
}
