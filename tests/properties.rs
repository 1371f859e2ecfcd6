//! Quantified invariants, checked over randomly generated scales and
//! significands of varied magnitude.

use std::cmp::Ordering;

use bc_number::{add, compare, divide, from_string, modulo, mul, sqrt, sub, to_string, Number};
use proptest::prelude::*;

/// Builds the handle whose raw `(scale, significand)` pair is exactly
/// `(scale, sig)`, by routing a matching decimal literal through
/// `from_string` — the only public way to install an arbitrary
/// significand at an arbitrary scale.
fn decimal(sig: i64, scale: u32) -> Number {
    let neg = sig < 0;
    let digits = sig.unsigned_abs().to_string();
    let scale_usize = scale as usize;

    let (int_part, frac_part) = if digits.len() > scale_usize {
        let split = digits.len() - scale_usize;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        (
            "0".to_string(),
            format!("{}{}", "0".repeat(scale_usize - digits.len()), digits),
        )
    };

    let sign = if neg { "-" } else { "" };
    let text = if scale_usize == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    from_string(&text, scale)
}

fn sig() -> impl Strategy<Value = i64> {
    any::<i32>().prop_map(i64::from)
}

fn scale() -> impl Strategy<Value = u32> {
    0u32..=100u32
}

proptest! {
    #[test]
    fn add_and_mul_are_commutative(a_sig in sig(), a_scale in scale(), b_sig in sig(), b_scale in scale()) {
        let a = decimal(a_sig, a_scale);
        let b = decimal(b_sig, b_scale);
        prop_assert_eq!(to_string(&add(&a, &b, 0)), to_string(&add(&b, &a, 0)));
        prop_assert_eq!(to_string(&mul(&a, &b, 10)), to_string(&mul(&b, &a, 10)));
    }

    #[test]
    fn sub_self_is_always_zero(a_sig in sig(), a_scale in scale(), scale_min in scale()) {
        let a = decimal(a_sig, a_scale);
        prop_assert!(sub(&a, &a, scale_min).is_zero());
    }

    #[test]
    fn add_negation_is_zero(a_sig in sig(), a_scale in scale()) {
        let mut a = decimal(a_sig, a_scale);
        let orig = a.copy();
        a.negate();
        prop_assert!(add(&orig, &a, 0).is_zero());
    }

    #[test]
    fn add_scale_is_max_of_inputs_and_floor(a_sig in sig(), a_scale in scale(), b_sig in sig(), b_scale in scale(), scale_min in scale()) {
        let a = decimal(a_sig, a_scale);
        let b = decimal(b_sig, b_scale);
        let expected = a_scale.max(b_scale).max(scale_min);
        prop_assert_eq!(add(&a, &b, scale_min).scale(), expected);
    }

    #[test]
    fn division_with_remainder_identity(
        a_sig in sig(), a_scale in scale(),
        b_sig in (any::<i32>().prop_filter("nonzero", |v| *v != 0)).prop_map(i64::from), b_scale in scale(),
        s in scale(),
    ) {
        let a = decimal(a_sig, a_scale);
        let b = decimal(b_sig, b_scale);
        let r_scale = a.scale().max(b.scale() + s);

        let q = divide(&a, &b, s).unwrap();
        let qb = mul(&q, &b, r_scale);
        let r = modulo(&a, &b, s).unwrap();
        let total = add(&qb, &r, r_scale);

        let a_truncated = add(&a, &decimal(0, 0), r_scale);
        prop_assert_eq!(to_string(&total), to_string(&a_truncated));
    }

    #[test]
    fn modulo_sign_matches_dividend_or_zero(
        a_sig in sig(), a_scale in scale(),
        b_sig in (any::<i32>().prop_filter("nonzero", |v| *v != 0)).prop_map(i64::from), b_scale in scale(),
    ) {
        let a = decimal(a_sig, a_scale);
        let b = decimal(b_sig, b_scale);
        let r = modulo(&a, &b, 0).unwrap();
        prop_assert!(r.is_zero() || r.is_neg() == a.is_neg());
    }

    #[test]
    fn round_trip_through_to_string(a_sig in sig(), a_scale in scale()) {
        let a = decimal(a_sig, a_scale);
        let t = to_string(&a);
        prop_assert_eq!(to_string(&from_string(&t, a_scale)), t);
    }

    #[test]
    fn compare_is_antisymmetric_and_scale_independent(a_sig in sig(), a_scale in scale(), b_sig in sig(), b_scale in scale()) {
        let a = decimal(a_sig, a_scale);
        let b = decimal(b_sig, b_scale);
        let ab = compare(&a, &b, true);
        let ba = compare(&b, &a, true);
        prop_assert_eq!(ab, ba.reverse());

        if a_sig == b_sig && a_scale == b_scale {
            prop_assert_eq!(ab, Ordering::Equal);
        }
    }

    #[test]
    fn length_is_the_digit_count_of_the_magnitude(a_sig in sig(), a_scale in scale()) {
        let a = decimal(a_sig, a_scale);
        let expected = a_sig.unsigned_abs().to_string().len();
        prop_assert_eq!(a.length(), expected);
        prop_assert!(a.length() >= 1);
    }

    #[test]
    fn sqrt_squared_brackets_the_radicand(a_sig in 0i64..1_000_000_000, rscale in 0u32..=15u32) {
        let x = decimal(a_sig, 0);
        let r = sqrt(&x, rscale).unwrap();
        let squared = mul(&r, &r, rscale);
        prop_assert!(compare(&squared, &x, true) != Ordering::Greater);
    }
}
