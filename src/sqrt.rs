//! Integer-square-root-based square root. Aligns the radicand to
//! `2 * rscale` decimal digits before taking the floor integer square
//! root, so the result lands at `rscale` digits after the point.

use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::compare::compare;
use crate::error::ArithError;
use crate::handle::{one, zero, Number};
use crate::scale::{mul_pow10, tdiv_pow10};

/// `floor(sqrt(x))` at scale `max(scale, x.scale)`, up to a documented
/// 1-ULP truncation slack. Fails on a negative radicand without touching
/// anything.
pub fn sqrt(x: &Number, scale: u32) -> Result<Number, ArithError> {
    if x.is_neg() {
        return Err(ArithError::NegativeRadicand);
    }
    if x.is_zero() {
        return Ok(zero());
    }
    if compare(x, &one(), true) == Ordering::Equal {
        return Ok(one());
    }

    let rscale = scale.max(x.scale());
    let k = 2 * rscale as i64 - x.scale() as i64;

    let n = if k > 0 {
        mul_pow10(x.value(), k as u32)
    } else if k < 0 {
        tdiv_pow10(x.value(), (-k) as u32)
    } else {
        x.value().clone()
    };

    let r = n.magnitude().sqrt();
    Ok(Number::from_parts(rscale, BigInt::from(r)))
}
