//! Scale algebra: the single rewrite rule every arithmetic kernel routes
//! through. A value is `significand · 10^(-scale)`; realigning two values
//! onto a common scale is always exact multiplication or truncating
//! division by a power of ten, never a nearest-rounding.

use num_bigint::BigInt;

/// `10^exp` as a fresh `BigInt`.
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10).pow(exp)
}

/// Exact `value * 10^exp`. A no-op clone when `exp == 0`.
pub(crate) fn mul_pow10(value: &BigInt, exp: u32) -> BigInt {
    if exp == 0 {
        value.clone()
    } else {
        value * pow10(exp)
    }
}

/// Truncating `value / 10^exp`, quotient magnitude rounded toward zero.
/// A no-op clone when `exp == 0`.
pub(crate) fn tdiv_pow10(value: &BigInt, exp: u32) -> BigInt {
    if exp == 0 {
        value.clone()
    } else {
        value / pow10(exp)
    }
}

/// Realign `value` (currently at `from_scale`) to `to_scale`, exactly.
/// `to_scale >= from_scale` multiplies; `to_scale < from_scale` truncates.
pub(crate) fn rescale(value: &BigInt, from_scale: u32, to_scale: u32) -> BigInt {
    if to_scale >= from_scale {
        mul_pow10(value, to_scale - from_scale)
    } else {
        tdiv_pow10(value, from_scale - to_scale)
    }
}
