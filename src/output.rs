//! Multi-base formatted output. Streams characters through a
//! caller-supplied sink rather than building a `String`, matching a
//! `bc`-style front end's expectation that printing can be interleaved
//! with terminal flow control.

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::convert::to_string;
use crate::handle::Number;

/// Number of decimal digits needed to print `v`.
fn digit_count(mut v: u32) -> usize {
    if v == 0 {
        return 1;
    }
    let mut c = 0;
    while v > 0 {
        c += 1;
        v /= 10;
    }
    c
}

fn emit_digit(d: u32, obase: u32, width: usize, space_before: bool, sink: &mut dyn FnMut(char)) {
    if obase <= 16 {
        let c = char::from_digit(d, 16).expect("digit fits the declared base");
        sink(c.to_ascii_uppercase());
    } else {
        if space_before {
            sink(' ');
        }
        for c in format!("{d:0width$}").chars() {
            sink(c);
        }
    }
}

/// Streams `h` formatted in `obase`, calling `sink` once per character.
///
/// `obase == 10` defers to [`to_string`] (after emitting the sign, if any,
/// itself). Other bases split into integer and fractional digit streams;
/// `leading_zero` controls whether a purely-fractional value gets an
/// explicit `0` integer digit (`0.5` vs bc's usual `.5`).
pub fn out_num(h: &Number, obase: u32, leading_zero: bool, sink: &mut dyn FnMut(char)) {
    if h.is_neg() {
        sink('-');
    }

    if h.is_zero() {
        sink('0');
        return;
    }

    if obase == 10 {
        let s = to_string(h);
        for c in s.chars().filter(|&c| c != '-') {
            sink(c);
        }
        return;
    }

    let scale = h.scale();
    let divisor = BigInt::from(obase);
    let pow_scale = BigInt::from(10).pow(scale);
    let magnitude = BigInt::from(h.value().magnitude().clone());

    let mut int_part = &magnitude / &pow_scale;
    let frac_part = &magnitude - &int_part * &pow_scale;

    let w = digit_count(obase - 1);

    let mut int_digits: Vec<u32> = Vec::new();
    while !int_part.is_zero() {
        let d = (&int_part % &divisor)
            .to_u32()
            .expect("remainder fits u32 for a u32 base");
        int_digits.push(d);
        int_part /= &divisor;
    }

    if int_digits.is_empty() {
        if leading_zero {
            emit_digit(0, obase, w, true, sink);
        }
    } else {
        for d in int_digits.into_iter().rev() {
            emit_digit(d, obase, w, true, sink);
        }
    }

    if scale > 0 {
        sink('.');

        let mut f = frac_part;
        // `t = obase^i`, tracked as a `BigUint` rather than a fixed-width
        // integer: a fixed-width counter saturates once `obase^i` overflows
        // it, pinning `digit_count(t)` and looping forever for any `scale`
        // past that point.
        let mut t = BigUint::from(1u32);
        let obase_big = BigUint::from(obase);
        let mut first = true;

        while (t.to_str_radix(10).len() as u32) <= scale {
            f *= &divisor;
            let d = &f / &pow_scale;
            f -= &d * &pow_scale;
            let d_u32 = d.to_u32().unwrap_or(0);
            emit_digit(d_u32, obase, w, obase > 16 && !first, sink);
            first = false;
            t *= &obase_big;
        }
    }
}

/// Emits `v` as decimal digits, zero-left-padded to at least `width`
/// columns, with an optional leading space.
pub fn out_long(v: u32, width: usize, leading_space: bool, sink: &mut dyn FnMut(char)) {
    if leading_space {
        sink(' ');
    }
    for c in format!("{v:0width$}").chars() {
        sink(c);
    }
}
