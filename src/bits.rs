//! Float operations that work on the IEEE-754 bit pattern directly.
//!
//! Read as an integer, the bits of a positive `f32` are roughly `2^23 * (log2(x) + 127)`, and the
//! high word of an `f64` is roughly `2^20 * (log2(x) + 1023)`. An affine transform of that integer
//! is therefore an affine transform of `log2(x)`, which is enough to approximate reciprocals,
//! roots, powers, `exp` and `ln` with a handful of integer instructions.

/// Bit pattern of `1.0_f32`.
const ONE_BITS: u32 = 0x3F80_0000;

/// Reflection point of the log-space reciprocal, `2 * ONE_BITS`.
const INVERSE_BITS: u32 = 0x7F00_0000;

const INV_SQRT_MAGIC_FLOAT: i32 = 0x5f37_59d5;
const INV_SQRT_MAGIC_DOUBLE: i64 = 0x5fe6_ec85_e7de_30da;

/// `2^20 / ln(2)`: scales a natural exponent into the high word of an `f64`.
const EXP_SCALE: f64 = 1_512_775.0;

/// `1023 * 2^20 - 60801`. The offset from the exact bias spreads the error around zero.
const EXP_BIAS: i32 = 1_072_632_447;

/// The high 32 bits of an `f64` pattern, as a signed integer.
#[inline(always)]
fn high_word(x: f64) -> i32 {
    (x.to_bits() >> 32) as i32
}

/// An `f64` whose high word is `word` and whose low word is zero.
#[inline(always)]
fn from_high_word(word: i64) -> f64 {
    f64::from_bits((word << 32) as u64)
}

/// Exact. Returns `x` if it is non-negative and `0.0` otherwise.
///
/// Negative zero and negative NaN also clamp to `0.0`.
#[inline]
pub fn clamp0_float(x: f32) -> f32 {
    let bits = x.to_bits() as i32;
    let keep = !(bits >> 31);
    f32::from_bits((bits & keep) as u32)
}

// From https://bits.stephan-brumme.com/absFloat.html
/// Exact. Absolute value, by clearing the sign bit.
#[inline]
pub fn abs_float(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & 0x7FFF_FFFF)
}

/// Exact. Absolute value, by clearing the sign bit.
#[inline]
pub fn abs_double(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0x7FFF_FFFF_FFFF_FFFF)
}

/// Approximates `1 / x` for positive `x`.
///
/// Exact for powers of two, up to 12.5% relative error in between.
#[inline]
pub fn inverse_float(x: f32) -> f32 {
    f32::from_bits(INVERSE_BITS.wrapping_sub(x.to_bits()))
}

/// The Quake III fast inverse square root, with one Newton step.
///
/// Valid for positive `x`. The relative error stays below 0.2% for normal inputs and grows as `x`
/// approaches zero.
#[inline]
pub fn inv_sqrt_float(x: f32) -> f32 {
    let i = INV_SQRT_MAGIC_FLOAT.wrapping_sub((x.to_bits() as i32) >> 1);
    let y = f32::from_bits(i as u32);
    y * (1.5 - 0.5 * x * y * y)
}

/// Fast inverse square root for `f64`, with one Newton step.
///
/// Valid for positive `x`. Same accuracy as [`inv_sqrt_float`]: the single Newton step, not the
/// wider mantissa, bounds the error.
#[inline]
pub fn inv_sqrt_double(x: f64) -> f64 {
    let i = INV_SQRT_MAGIC_DOUBLE.wrapping_sub((x.to_bits() as i64) >> 1);
    let y = f64::from_bits(i as u64);
    y * (1.5 - 0.5 * x * y * y)
}

/// Approximates `sqrt(x)` for non-negative `x` by halving the exponent.
///
/// Exact for even powers of two, up to about 6% relative error otherwise.
#[inline]
pub fn sqrt_float(x: f32) -> f32 {
    f32::from_bits(x.to_bits().wrapping_add(ONE_BITS) >> 1)
}

/// Approximates `x^y` for positive `x`.
///
/// Error grows with `|y|`: about 4% for `y = 0.5`, 8% for `y = 2` and 12% for `y = 3`.
#[inline]
pub fn pow_double(x: f64, y: f64) -> f64 {
    let exponent = high_word(x).wrapping_sub(EXP_BIAS);
    let word = (y * exponent as f64 + EXP_BIAS as f64) as i32;
    from_high_word(word as i64)
}

/// `f32` flavour of [`pow_double`]. The transform runs in `f64`.
#[inline]
pub fn pow_float(x: f32, y: f32) -> f32 {
    pow_double(x as f64, y as f64) as f32
}

/// Approximates `e^x`.
///
/// Recommended for `x >= 0`, where the relative error stays under 4%. The result is garbage once
/// `e^x` leaves the `f64` range. Negative `x` is not handled specially.
#[inline]
pub fn exp_double(x: f64) -> f64 {
    let word = (EXP_SCALE * x + EXP_BIAS as f64).round() as i64;
    from_high_word(word)
}

/// `f32` flavour of [`exp_double`].
#[inline]
pub fn exp_float(x: f32) -> f32 {
    exp_double(x as f64) as f32
}

/// Approximates `ln(x)` for positive `x`. Inverse of [`exp_double`].
///
/// Absolute error stays under 0.05.
#[inline]
pub fn ln_double(x: f64) -> f64 {
    (high_word(x) as i64 - EXP_BIAS as i64) as f64 / EXP_SCALE
}

/// `f32` flavour of [`ln_double`].
#[inline]
pub fn ln_float(x: f32) -> f32 {
    ln_double(x as f64) as f32
}
