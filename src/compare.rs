//! Comparison: rescale the operand with the *smaller* scale up to the
//! other's scale (never scale the larger one down, which would lose
//! information), then compare significands.

use std::cmp::Ordering;

use crate::handle::Number;
use crate::scale::mul_pow10;

/// Compares `a` and `b` as the rationals they model, even when their
/// scales differ. `use_sign = false` compares magnitudes only.
pub fn compare(a: &Number, b: &Number, use_sign: bool) -> Ordering {
    let d = a.scale() as i64 - b.scale() as i64;

    let av;
    let bv;
    let (left, right) = if d > 0 {
        av = a.value().clone();
        bv = mul_pow10(b.value(), d as u32);
        (&av, &bv)
    } else if d < 0 {
        av = mul_pow10(a.value(), (-d) as u32);
        bv = b.value().clone();
        (&av, &bv)
    } else {
        av = a.value().clone();
        bv = b.value().clone();
        (&av, &bv)
    };

    if use_sign {
        left.cmp(right)
    } else {
        left.magnitude().cmp(right.magnitude())
    }
}
