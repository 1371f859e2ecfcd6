//! Domain errors for the arithmetic kernels. These are the `-1`/fatal
//! outcomes the reference design surfaces as return codes; here they are a
//! closed, `std::error::Error`-compatible enum instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("divide by zero")]
    DivideByZero,

    #[error("negative exponent in modular exponentiation")]
    NegativeExponent,

    #[error("negative radicand in square root")]
    NegativeRadicand,

    #[error("exponent too large for the power loop")]
    ExponentTooLarge,
}
