use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::Calculator;
use crate::error::{ExpressionError, Result};

/// Arithmetic operation supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// a + b
    Add,
    /// a - b
    #[value(alias = "sub")]
    Subtract,
    /// a * b
    #[value(alias = "mul")]
    Multiply,
    /// a / b, truncated toward zero
    #[value(alias = "div")]
    Divide,
    /// a % b, sign follows the dividend
    #[value(alias = "mod")]
    Modulo,
    /// a * a * a
    Cube,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Cube,
    ];

    /// Number of operands the operation takes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Cube => 1,
            _ => 2,
        }
    }

    /// Infix symbol, or the function name for unary operations
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::Cube => "cube",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Cube => "cube",
        }
    }

    /// Apply the operation to `operands`, rejecting the wrong operand count
    pub fn apply(&self, calculator: &Calculator, operands: &[i32]) -> Result<i32> {
        let result = match (self, operands) {
            (Operation::Add, [a, b]) => calculator.add(*a, *b),
            (Operation::Subtract, [a, b]) => calculator.subtract(*a, *b),
            (Operation::Multiply, [a, b]) => calculator.multiply(*a, *b),
            (Operation::Divide, [a, b]) => calculator.divide(*a, *b)?,
            (Operation::Modulo, [a, b]) => calculator.modulo(*a, *b)?,
            (Operation::Cube, [a]) => calculator.cube(*a),
            _ => {
                return Err(ExpressionError::WrongArity {
                    operation: self.name().to_string(),
                    expected: self.arity(),
                    actual: operands.len(),
                }
                .into())
            }
        };
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ExpressionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            "modulo" | "mod" | "%" => Ok(Operation::Modulo),
            "cube" => Ok(Operation::Cube),
            _ => Err(ExpressionError::UnknownOperation(s.to_string())),
        }
    }
}
