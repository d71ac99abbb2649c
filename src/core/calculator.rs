//! Stateless integer arithmetic.
//!
//! All operations work on `i32` with wrapping semantics, so none of them can
//! panic. Division and modulo truncate toward zero and report a zero divisor
//! as [`ArithmeticError::DivisionByZero`].

use tracing::debug;

use crate::error::ArithmeticError;

/// Simple calculator exposing the six supported operations.
///
/// Holds no state; copies are free and it can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Adds two numbers
    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "add");
        a.wrapping_add(b)
    }

    /// Subtracts `b` from `a`
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "subtract");
        a.wrapping_sub(b)
    }

    /// Multiplies two numbers
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    /// Divides `a` by `b`, truncating toward zero.
    ///
    /// `i32::MIN / -1` wraps to `i32::MIN`.
    pub fn divide(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        debug!(a, b, "divide");
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    /// Remainder of truncated division; its sign follows `a`.
    pub fn modulo(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        debug!(a, b, "modulo");
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(a.wrapping_rem(b))
    }

    /// Returns `a * a * a`
    pub fn cube(&self, a: i32) -> i32 {
        debug!(a, "cube");
        a.wrapping_mul(a).wrapping_mul(a)
    }

    /// Sums all values; an empty slice sums to zero.
    pub fn sum(&self, values: &[i32]) -> i32 {
        debug!(count = values.len(), "sum");
        values.iter().fold(0i32, |acc, v| acc.wrapping_add(*v))
    }
}
