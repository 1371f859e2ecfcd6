//! Integer power and modular exponentiation.

use num_traits::ToPrimitive;

use crate::arith::mul;
use crate::diagnostics::Diagnostics;
use crate::divide::{divide, divmod, modulo};
use crate::error::ArithError;
use crate::handle::{one, two, Number};
use crate::scale::{mul_pow10, tdiv_pow10};

/// `base ^ expo`, reading only `expo`'s integer part (warning if it has a
/// nonzero scale) at output scale `scale`.
pub fn raise(
    base: &Number,
    expo: &Number,
    scale: u32,
    diag: &dyn Diagnostics,
) -> Result<Number, ArithError> {
    if expo.scale() != 0 {
        diag.warn("raise: exponent has a nonzero scale; truncating to its integer part");
    }

    let e_value = tdiv_pow10(expo.value(), expo.scale());
    let e: i64 = match e_value.to_i64() {
        Some(e) => e,
        None => {
            diag.error("raise: exponent does not fit the power loop's integer range");
            return Err(ArithError::ExponentTooLarge);
        }
    };

    if e == 0 {
        return Ok(one());
    }

    if e < 0 {
        let positive = raise_positive(base, e.unsigned_abs(), scale)?;
        return divide(&one(), &positive, scale);
    }

    raise_positive(base, e as u64, scale)
}

fn raise_positive(base: &Number, e: u64, scale: u32) -> Result<Number, ArithError> {
    let e_u32: u32 = e.try_into().map_err(|_| ArithError::ExponentTooLarge)?;

    let base_scale = base.scale() as u64;
    let full_scale = base_scale * e;
    let rscale64 = full_scale.min(scale.max(base.scale()) as u64);
    let rscale: u32 = rscale64.try_into().map_err(|_| ArithError::ExponentTooLarge)?;

    let p = base.value().pow(e_u32);
    let diff = full_scale as i64 - rscale as i64;
    let value = if diff > 0 {
        tdiv_pow10(&p, diff as u32)
    } else if diff < 0 {
        mul_pow10(&p, (-diff) as u32)
    } else {
        p
    };

    Ok(Number::from_parts(rscale, value))
}

/// `base ^ expo mod modulus`, via the library's own `mul`/`modulo` in a
/// binary-exponentiation loop. `expo` must be non-negative and `modulus`
/// non-zero. Only `expo`'s scale is truncated (with a warning); `base`
/// and `modulus` keep their own scale, the same as any other `mul`/`modulo`
/// operand.
pub fn raisemod(
    base: &Number,
    expo: &Number,
    modulus: &Number,
    scale: u32,
    diag: &dyn Diagnostics,
) -> Result<Number, ArithError> {
    if modulus.is_zero() {
        return Err(ArithError::DivideByZero);
    }
    if expo.is_neg() {
        return Err(ArithError::NegativeExponent);
    }

    if expo.scale() != 0 {
        diag.warn("raisemod: exponent has a nonzero scale; truncating to its integer part");
    }

    // `base` and `modulus` keep their own scale, exactly like `mul`'s
    // `base` operand and `modulo`'s own divisor operand elsewhere: it is
    // only the exponent that's read as a bare integer by the
    // square-and-multiply loop below.
    let rscale = scale.max(base.scale());
    let mut power = Number::from_parts(base.scale(), base.value().clone());
    let mut exponent = Number::from_parts(0, tdiv_pow10(expo.value(), expo.scale()));
    let mut acc = one();
    let two = two();

    while !exponent.is_zero() {
        let (q, parity) = divmod(&exponent, &two, 0, true)?;
        exponent = q.expect("divmod with_quotient=true always returns a quotient");

        if !parity.is_zero() {
            acc = mul(&acc, &power, rscale);
            acc = modulo(&acc, modulus, scale)?;
        }

        power = mul(&power, &power, rscale);
        power = modulo(&power, modulus, scale)?;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{from_string, to_string};
    use crate::diagnostics::NullDiagnostics;

    #[test]
    fn scenario_s5_positive_and_negative_exponent() {
        let base = from_string("2", 0);
        let expo = from_string("10", 0);
        let r = raise(&base, &expo, 0, &NullDiagnostics).unwrap();
        assert_eq!(to_string(&r), "1024");

        let neg_expo = from_string("-2", 0);
        let r2 = raise(&base, &neg_expo, 6, &NullDiagnostics).unwrap();
        assert_eq!(to_string(&r2), "0.250000");
    }

    #[test]
    fn raise_zero_exponent_is_one() {
        let base = from_string("123.456", 3);
        let expo = from_string("0", 0);
        assert_eq!(
            to_string(&raise(&base, &expo, 5, &NullDiagnostics).unwrap()),
            "1"
        );
    }

    #[test]
    fn scenario_s7_modular_exponentiation() {
        let base = from_string("4", 0);
        let expo = from_string("13", 0);
        let modulus = from_string("497", 0);
        let r = raisemod(&base, &expo, &modulus, 0, &NullDiagnostics).unwrap();
        assert_eq!(to_string(&r), "445");
    }

    #[test]
    fn raisemod_honors_a_fractional_modulus_scale() {
        // base=4, expo=1, so power mod modulus is exercised exactly once
        // with acc still 1: acc <- 1*4 mod 4.97 = 4.00, not 4 mod 4 = 0.00.
        // A modulus truncated to its integer part before use would give
        // the latter.
        let base = from_string("4", 0);
        let expo = from_string("1", 0);
        let modulus = from_string("4.97", 2);
        let r = raisemod(&base, &expo, &modulus, 2, &NullDiagnostics).unwrap();
        assert_eq!(to_string(&r), "4.00");
    }

    #[test]
    fn raisemod_rejects_zero_modulus_and_negative_exponent() {
        let base = from_string("4", 0);
        let expo = from_string("13", 0);
        let zero = from_string("0", 0);
        assert_eq!(
            raisemod(&base, &expo, &zero, 0, &NullDiagnostics),
            Err(ArithError::DivideByZero)
        );

        let neg_expo = from_string("-1", 0);
        let modulus = from_string("497", 0);
        assert_eq!(
            raisemod(&base, &neg_expo, &modulus, 0, &NullDiagnostics),
            Err(ArithError::NegativeExponent)
        );
    }
}
