use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for calcpoc
#[derive(Error, Debug)]
pub enum CalcPocError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Config directory not found: {0}")]
    ConfigDirNotFound(PathBuf),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Batch failed: {failed} of {total} expressions could not be evaluated")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised by the calculator itself
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Errors related to expression parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Empty expression")]
    Empty,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{operation} takes {expected} operand(s), got {actual}")]
    WrongArity {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
}

impl CalcPocError {
    /// True when the error came from a zero divisor
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            CalcPocError::Arithmetic(ArithmeticError::DivisionByZero)
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcPocError>;
