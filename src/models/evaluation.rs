use serde::Serialize;
use std::fmt;

use super::Operation;

/// A single evaluated operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Vec<i32>,
    pub result: i32,
}

impl Evaluation {
    pub fn new(operation: Operation, operands: Vec<i32>, result: i32) -> Self {
        Self {
            operation,
            operands,
            result,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands.as_slice() {
            [a, b] => write!(f, "{} {} {} = {}", a, self.operation.symbol(), b, self.result),
            operands => {
                let args = operands
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({}) = {}", self.operation.symbol(), args, self.result)
            }
        }
    }
}
