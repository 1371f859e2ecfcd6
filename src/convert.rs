//! String and machine-integer conversions.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::handle::Number;
use crate::scale::tdiv_pow10;

/// Parses `text` as a signed decimal literal (`[+-]?digits?(.digits?)?`,
/// at least one digit somewhere), aligned to `scale` fractional digits:
/// extra fractional digits are truncated, short ones are zero-padded.
///
/// Any malformed input — empty text, a bare sign, a bare point, or a
/// trailing character that isn't part of the grammar — installs zero at
/// the requested scale rather than failing.
pub fn from_string(text: &str, scale: u32) -> Number {
    let mut chars = text.chars().peekable();

    let neg = match chars.peek() {
        Some('+') => {
            chars.next();
            false
        }
        Some('-') => {
            chars.next();
            true
        }
        _ => false,
    };

    let mut int_digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            int_digits.push(c);
            chars.next();
        } else {
            break;
        }
    }

    let mut frac_digits = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                frac_digits.push(c);
                chars.next();
            } else {
                break;
            }
        }
    }

    let malformed = chars.next().is_some() || (int_digits.is_empty() && frac_digits.is_empty());
    if malformed {
        return Number::new(scale);
    }

    let scale_usize = scale as usize;
    if frac_digits.len() > scale_usize {
        frac_digits.truncate(scale_usize);
    } else {
        frac_digits.push_str(&"0".repeat(scale_usize - frac_digits.len()));
    }

    let mut digits = int_digits;
    if digits.is_empty() {
        digits.push('0');
    }
    digits.push_str(&frac_digits);

    let mut value: BigInt = digits.parse().unwrap_or_default();
    if neg {
        value = -value;
    }

    Number::from_parts(scale, value)
}

/// Renders `h` as `bc` would: truncation-toward-zero fixed point, with
/// the leading integer digit dropped (`".5"`, not `"0.5"`) for any
/// non-zero value whose magnitude has no digits before the point — zero
/// itself always keeps its `"0"`.
pub fn to_string(h: &Number) -> String {
    let scale = h.scale() as usize;

    if h.is_zero() {
        return if scale == 0 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(scale))
        };
    }

    let digits = h.value().magnitude().to_str_radix(10);
    let d = digits.len();

    let body = if scale == 0 {
        digits
    } else if d > scale {
        let (int_part, frac_part) = digits.split_at(d - scale);
        format!("{int_part}.{frac_part}")
    } else if d == scale {
        format!(".{digits}")
    } else {
        format!(".{}{}", "0".repeat(scale - d), digits)
    };

    if h.is_neg() {
        format!("-{body}")
    } else {
        body
    }
}

/// Installs `v` at scale 0.
pub fn from_int(v: i64) -> Number {
    Number::from_parts(0, BigInt::from(v))
}

/// Truncates `h` to its integer part and narrows to `i64`, coercing
/// anything that doesn't fit — including `i64::MIN`, which `bc`'s own
/// `bc_num2long` cannot represent either — to zero rather than
/// wrapping or panicking.
pub fn to_int(h: &Number) -> i64 {
    let truncated = tdiv_pow10(h.value(), h.scale());
    match truncated.to_i64() {
        Some(v) if v != i64::MIN => v,
        _ => 0,
    }
}
