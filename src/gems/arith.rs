//! Integer and rounding idioms.
//!
//! Each idiom comes as a pair: the plain form and the bit-twiddling (or
//! branch-based) form. Both halves of a pair agree on the domain noted in
//! their docs.

/// `n.round()` as an integer.
#[inline]
pub fn round(n: f64) -> i32 {
    n.round() as i32
}

/// Round by adding a signed half and truncating.
///
/// Agrees with [`round`] for finite `n` within `i32` range, except at the
/// float just below one half, where the addition itself rounds up.
#[inline]
pub fn round_truncate(n: f64) -> i32 {
    (n + if n < 0.0 { -0.5 } else { 0.5 }) as i32
}

/// `n.ceil()` as an integer.
#[inline]
pub fn ceil(n: f64) -> i32 {
    n.ceil() as i32
}

/// Ceiling by adding one for positives and truncating.
///
/// Only valid for non-integral `n`: `3.0` yields 4.
#[inline]
pub fn ceil_truncate(n: f64) -> i32 {
    (n + if n < 0.0 { 0.0 } else { 1.0 }) as i32
}

/// `n.floor()` as an integer.
#[inline]
pub fn floor(n: f64) -> i32 {
    n.floor() as i32
}

/// Floor by subtracting one for negatives and truncating.
///
/// Only valid for non-integral `n`: `-3.0` yields -4.
#[inline]
pub fn floor_truncate(n: f64) -> i32 {
    (n + if n < 0.0 { -1.0 } else { 0.0 }) as i32
}

/// Round for values known to be non-negative, such as pixel coordinates.
#[inline]
pub fn round_positive(n: f64) -> i32 {
    (n + 0.5) as i32
}

/// Ceiling for non-negative, non-integral values.
#[inline]
pub fn ceil_positive(n: f64) -> i32 {
    (n + 1.0) as i32
}

/// Floor for non-negative values.
#[inline]
pub fn floor_positive(n: f64) -> i32 {
    n as i32
}

/// `n % divisor`.
#[inline]
pub fn modulo(n: u32, divisor: u32) -> u32 {
    n % divisor
}

/// Modulo by a power of two with a mask.
///
/// `divisor` must be a power of two.
#[inline]
pub fn modulo_pow2(n: u32, divisor: u32) -> u32 {
    debug_assert!(divisor.is_power_of_two());
    n & (divisor - 1)
}

/// `a.max(b)`.
#[inline]
pub fn max(a: i32, b: i32) -> i32 {
    a.max(b)
}

/// Maximum via a comparison.
#[inline]
pub fn max_select(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// `a.min(b)`.
#[inline]
pub fn min(a: i32, b: i32) -> i32 {
    a.min(b)
}

/// Minimum via a comparison.
#[inline]
pub fn min_select(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Absolute value, wrapping at `i32::MIN`.
#[inline]
pub fn abs(n: i32) -> i32 {
    n.wrapping_abs()
}

/// Absolute value via a comparison.
#[inline]
pub fn abs_select(n: i32) -> i32 {
    if n > 0 {
        n
    } else {
        n.wrapping_neg()
    }
}

/// Absolute value via the sign mask: `(n ^ (n >> 31)) - (n >> 31)`.
#[inline]
pub fn abs_mask(n: i32) -> i32 {
    let mask = n >> 31;
    (n ^ mask).wrapping_sub(mask)
}

/// Even test with the remainder operator.
#[inline]
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// Even test on the low bit.
#[inline]
pub fn is_even_mask(n: i32) -> bool {
    n & 1 == 0
}

/// `n * 2^shift`, wrapping.
#[inline]
pub fn mul_pow2(n: i32, shift: u32) -> i32 {
    n.wrapping_mul(1 << shift)
}

/// Multiply by a power of two with a left shift.
#[inline]
pub fn mul_shift(n: i32, shift: u32) -> i32 {
    n << shift
}

/// `n / 2^shift`.
#[inline]
pub fn div_pow2(n: u32, shift: u32) -> u32 {
    n / (1 << shift)
}

/// Divide by a power of two with a right shift.
///
/// Unsigned only: for negative signed values a right shift floors while
/// division truncates.
#[inline]
pub fn div_shift(n: u32, shift: u32) -> u32 {
    n >> shift
}

/// Swap through a temporary.
#[inline]
#[allow(clippy::manual_swap)]
pub fn swap_temp((mut a, mut b): (i32, i32)) -> (i32, i32) {
    let tmp = a;
    a = b;
    b = tmp;
    (a, b)
}

/// Swap with three XORs and no temporary.
#[inline]
pub fn swap_xor((mut a, mut b): (i32, i32)) -> (i32, i32) {
    a ^= b;
    b ^= a;
    a ^= b;
    (a, b)
}

/// `-n`, wrapping.
#[inline]
pub fn negate(n: i32) -> i32 {
    n.wrapping_neg()
}

/// Two's complement negation: `!n + 1`.
#[inline]
pub fn negate_not(n: i32) -> i32 {
    (!n).wrapping_add(1)
}
