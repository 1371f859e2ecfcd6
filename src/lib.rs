//! Arbitrary-precision decimal fixed-point number core for a POSIX
//! `bc`-style calculator: `value = significand · 10^(-scale)`, truncating
//! toward zero throughout, with no rounding anywhere in the arithmetic.
//!
//! [`Number`] is the handle every operation passes around; it shares
//! storage on clone and recycles its backing allocation through a process
//! pool when the last share drops. The arithmetic kernels are free
//! functions grouped by concern: [`compare`], [`arith`] (add/sub/mul),
//! [`divide`] (div/mod/divmod), [`power`] (raise/raisemod), [`sqrt`],
//! [`convert`] (string/integer conversions), and [`output`] (multi-base
//! formatted output). [`error`] holds the closed set of arithmetic
//! failures and [`diagnostics`] the non-fatal warning sink operations may
//! report through.

pub mod arith;
pub mod compare;
pub mod convert;
pub mod diagnostics;
pub mod divide;
pub mod error;
mod handle;
pub mod output;
pub mod power;
mod scale;
pub mod sqrt;

pub use compare::compare;
pub use convert::{from_int, from_string, to_int, to_string};
pub use diagnostics::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use divide::{divide, divmod, modulo};
pub use error::ArithError;
pub use handle::{init_numbers, init_zero, one, release, two, zero, Number};
pub use output::{out_long, out_num};
pub use power::{raise, raisemod};
pub use sqrt::sqrt;

pub use arith::{add, mul, sub};
