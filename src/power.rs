//! Exact squares and cubes.
//!
//! Integer variants wrap on overflow, like unchecked native multiplication.
//!
//! ```
//! use quickmath::power::{cube_int, square_int};
//!
//! assert_eq!(square_int(-7), 49);
//! assert_eq!(cube_int(1 << 11), 0);
//! ```

/// `x * x`, exact up to the single rounding of the multiply.
#[inline(always)]
pub fn square_float(x: f32) -> f32 {
    x * x
}

/// `x * x`, exact up to the single rounding of the multiply.
#[inline(always)]
pub fn square_double(x: f64) -> f64 {
    x * x
}

/// `x * x`, wrapping on overflow.
#[inline(always)]
pub fn square_int(x: i32) -> i32 {
    x.wrapping_mul(x)
}

/// `x * x`, wrapping on overflow.
#[inline(always)]
pub fn square_uint(x: u32) -> u32 {
    x.wrapping_mul(x)
}

/// `x * x`, wrapping on overflow.
#[inline(always)]
pub fn square_long(x: i64) -> i64 {
    x.wrapping_mul(x)
}

/// `x * x`, wrapping on overflow.
#[inline(always)]
pub fn square_ulong(x: u64) -> u64 {
    x.wrapping_mul(x)
}

/// `x * x * x`, rounded after each multiply like the plain expression.
#[inline(always)]
pub fn cube_float(x: f32) -> f32 {
    x * x * x
}

/// `x * x * x`, rounded after each multiply like the plain expression.
#[inline(always)]
pub fn cube_double(x: f64) -> f64 {
    x * x * x
}

/// `x * x * x`, wrapping on overflow.
#[inline(always)]
pub fn cube_int(x: i32) -> i32 {
    x.wrapping_mul(x).wrapping_mul(x)
}

/// `x * x * x`, wrapping on overflow.
#[inline(always)]
pub fn cube_uint(x: u32) -> u32 {
    x.wrapping_mul(x).wrapping_mul(x)
}

/// `x * x * x`, wrapping on overflow.
#[inline(always)]
pub fn cube_long(x: i64) -> i64 {
    x.wrapping_mul(x).wrapping_mul(x)
}

/// `x * x * x`, wrapping on overflow.
#[inline(always)]
pub fn cube_ulong(x: u64) -> u64 {
    x.wrapping_mul(x).wrapping_mul(x)
}
