//! Addition, subtraction, and multiplication: the rescale-then-operate
//! kernels that don't need a diagnostic sink or a failure mode.

use crate::handle::Number;
use crate::scale::{mul_pow10, rescale, tdiv_pow10};

/// `a + b`, at scale `max(a.scale, b.scale, scale_min)`.
pub fn add(a: &Number, b: &Number, scale_min: u32) -> Number {
    let s = a.scale().max(b.scale());
    let out_scale = s.max(scale_min);

    let av = rescale(a.value(), a.scale(), s);
    let bv = rescale(b.value(), b.scale(), s);
    let sum = av + bv;

    Number::from_parts(out_scale, mul_pow10(&sum, out_scale - s))
}

/// `a - b`, at scale `max(a.scale, b.scale, scale_min)`.
///
/// When `a.scale < b.scale`, the smaller operand is the one rescaled up —
/// computing `(a · 10^d) − b.value` rather than `b.value − (a · 10^d)` and
/// negating the result, so the subtraction never goes through an extra
/// sign flip.
pub fn sub(a: &Number, b: &Number, scale_min: u32) -> Number {
    let s = a.scale().max(b.scale());
    let out_scale = s.max(scale_min);

    let av = rescale(a.value(), a.scale(), s);
    let bv = rescale(b.value(), b.scale(), s);
    let diff = av - bv;

    Number::from_parts(out_scale, mul_pow10(&diff, out_scale - s))
}

/// `a * b`, truncated (never padded beyond `a.scale + b.scale`) to
/// `min(a.scale + b.scale, max(scale, max(a.scale, b.scale)))`.
pub fn mul(a: &Number, b: &Number, scale: u32) -> Number {
    let full = a.scale() + b.scale();
    let prod_scale = full.min(scale.max(a.scale().max(b.scale())));

    let product = a.value() * b.value();
    let value = if full > prod_scale {
        tdiv_pow10(&product, full - prod_scale)
    } else {
        product
    };

    Number::from_parts(prod_scale, value)
}
