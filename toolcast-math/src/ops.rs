//! The numeric operations as plain functions.

/// Errors from numeric operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MathError {
    /// Modulo with a zero divisor (positive or negative zero).
    #[error("cannot calculate modulo with divisor zero")]
    DivisionByZero,
}

/// `a + b` under standard floating-point rules.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a * b` under standard floating-point rules.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a - b` under standard floating-point rules.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Remainder of `a` divided by `b`, with explicit special-value policy.
///
/// The check order matters: the zero-divisor check comes first, so
/// `modulo(f64::NAN, 0.0)` fails with [`MathError::DivisionByZero`] rather
/// than returning NaN. NaN and infinite operands (in either position) yield
/// NaN — never an error. The finite case is the truncating remainder, so the
/// result's sign follows the dividend: `modulo(-7.0, 3.0) == -1.0`.
///
/// # Errors
///
/// [`MathError::DivisionByZero`] when `b == 0.0`, for every `a`.
pub fn modulo(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    if a.is_nan() || b.is_nan() {
        return Ok(f64::NAN);
    }
    if a.is_infinite() || b.is_infinite() {
        return Ok(f64::NAN);
    }
    Ok(a % b)
}
