//! Branchless integer arithmetic.
//!
//! Most of these come from <https://graphics.stanford.edu/~seander/bithacks.html>. Several of them
//! return mathematically wrong values at a boundary input (zero, one or the type minimum). Those
//! values are part of the contract and are documented on each function; no check is added for
//! them.

/// Bit masks probed by [`fast_log2_int`], lowest first.
pub static LOG2_MASKS: [u32; 5] = [0x2, 0xC, 0xF0, 0xFF00, 0xFFFF_0000];

/// Shift amounts paired with [`LOG2_MASKS`].
pub static LOG2_SHIFTS: [u32; 5] = [1, 2, 4, 8, 16];

/// Returns true if `x` and `y` have opposite signs.
#[inline]
pub fn opposite_signs_int(x: i32, y: i32) -> bool {
    (x ^ y) < 0
}

/// Returns true if `x` and `y` have opposite signs.
#[inline]
pub fn opposite_signs_long(x: i64, y: i64) -> bool {
    (x ^ y) < 0
}

/// Absolute value without branching.
///
/// `abs_int(i32::MIN)` wraps around to `i32::MIN`, since `2^31` does not fit in an `i32`.
#[inline]
pub fn abs_int(x: i32) -> i32 {
    let mask = x >> 31;
    x.wrapping_add(mask) ^ mask
}

/// Absolute value without branching.
///
/// `abs_long(i64::MIN)` wraps around to `i64::MIN`.
#[inline]
pub fn abs_long(x: i64) -> i64 {
    let mask = x >> 63;
    x.wrapping_add(mask) ^ mask
}

/// Returns -1 if `x < y`, 0 if `x == y` and 1 if `x > y`.
///
/// Only correct while `x - y` does not overflow. `compare_ints(i32::MIN, 1)` reports 1.
#[inline]
pub fn compare_ints(x: i32, y: i32) -> i32 {
    let diff = x.wrapping_sub(y);
    (diff >> 31) | ((diff.wrapping_neg() as u32) >> 31) as i32
}

/// Returns -1 if `x < y`, 0 if `x == y` and 1 if `x > y`.
///
/// Only correct while `x - y` does not overflow.
#[inline]
pub fn compare_longs(x: i64, y: i64) -> i64 {
    let diff = x.wrapping_sub(y);
    (diff >> 63) | ((diff.wrapping_neg() as u64) >> 63) as i64
}

/// Returns true if exactly one bit of `x` is set.
///
/// Also returns true for zero, which is not a power of two.
#[inline(always)]
pub fn is_power_of_2_uint(x: u32) -> bool {
    (x & x.wrapping_sub(1)) == 0
}

/// Returns true if exactly one bit of `x` is set.
///
/// Also returns true for zero, which is not a power of two.
#[inline(always)]
pub fn is_power_of_2_ulong(x: u64) -> bool {
    (x & x.wrapping_sub(1)) == 0
}

/// Smallest power of two greater than or equal to `x`.
///
/// Correct for `x` in `[2, 2^30]`. Returns 0 for 0 and 1 for 1, and wraps to `i32::MIN` above
/// `2^30`.
#[inline]
pub fn next_power_of_2_int(x: i32) -> i32 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Smallest power of two greater than or equal to `x`.
///
/// Correct for `x` in `[2, 2^31]`. Returns 0 for 0 and 1 for 1.
#[inline]
pub fn next_power_of_2_uint(x: u32) -> u32 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Smallest power of two greater than or equal to `x`.
///
/// Correct for `x` in `[2, 2^62]`. Returns 0 for 0 and 1 for 1.
#[inline]
pub fn next_power_of_2_long(x: i64) -> i64 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v.wrapping_add(1)
}

/// Smallest power of two greater than or equal to `x`.
///
/// Correct for `x` in `[2, 2^63]`. Returns 0 for 0 and 1 for 1.
#[inline]
pub fn next_power_of_2_ulong(x: u64) -> u64 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v.wrapping_add(1)
}

/// `floor(log2(x))` for positive `x`, by binary search over [`LOG2_MASKS`].
///
/// Meaningless for `x <= 0`.
#[inline]
pub fn fast_log2_int(x: i32) -> i32 {
    let mut v = x as u32;
    let mut r = 0;
    for (&mask, &shift) in LOG2_MASKS.iter().zip(LOG2_SHIFTS.iter()).rev() {
        // Shift by `shift` only when a bit under `mask` is set.
        let step = ((v & mask) != 0) as u32 * shift;
        v >>= step;
        r |= step;
    }
    r as i32
}
