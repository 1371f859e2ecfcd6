//! Division, modulo, and divmod. Truncating toward zero throughout, so the
//! remainder always carries the dividend's sign (or is itself zero).

use crate::error::ArithError;
use crate::handle::Number;
use crate::scale::{mul_pow10, tdiv_pow10};

/// `a / b` truncated to `scale` digits. Fails without touching anything if
/// `b` is zero.
pub fn divide(a: &Number, b: &Number, scale: u32) -> Result<Number, ArithError> {
    if b.is_zero() {
        return Err(ArithError::DivideByZero);
    }

    let k = b.scale() as i64 + scale as i64 - a.scale() as i64;
    let n = if k > 0 {
        mul_pow10(a.value(), k as u32)
    } else if k < 0 {
        tdiv_pow10(a.value(), (-k) as u32)
    } else {
        a.value().clone()
    };

    let q = n / b.value();
    Ok(Number::from_parts(scale, q))
}

/// `(quotient, remainder)` of `a` by `b`, with the remainder at
/// `r_scale = max(a.scale, b.scale + scale)`. The quotient is returned only
/// when `with_quotient` is set; `modulo` is this with it cleared.
pub fn divmod(
    a: &Number,
    b: &Number,
    scale: u32,
    with_quotient: bool,
) -> Result<(Option<Number>, Number), ArithError> {
    if b.is_zero() {
        return Err(ArithError::DivideByZero);
    }

    let r_scale = a.scale().max(b.scale() + scale);

    let q = divide(a, b, scale)?;
    let qb = crate::arith::mul(&q, b, r_scale);
    let r = crate::arith::sub(a, &qb, r_scale);

    if with_quotient {
        Ok((Some(q), r))
    } else {
        Ok((None, r))
    }
}

/// `a mod b` truncated to `scale` digits. Shorthand for
/// [`divmod`] without the quotient.
pub fn modulo(a: &Number, b: &Number, scale: u32) -> Result<Number, ArithError> {
    let (_, r) = divmod(a, b, scale, false)?;
    Ok(r)
}
