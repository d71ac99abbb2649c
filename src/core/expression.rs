//! Parsing of textual expressions such as `add 5 3`, `-15 / 3` or `cube -2`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::Calculator;
use crate::error::{ExpressionError, Result};
use crate::models::{Evaluation, Operation};

/// `<int> <symbol> <int>`, whitespace optional around the symbol
static INFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+)\s*([-+*/%])\s*([+-]?\d+)$").expect("infix pattern is valid")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("name pattern is valid"));

/// A parsed operation with its operands, not yet evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operation: Operation,
    pub operands: Vec<i32>,
}

impl Expression {
    pub fn new(operation: Operation, operands: Vec<i32>) -> Self {
        Self {
            operation,
            operands,
        }
    }

    /// Evaluate with the given calculator
    pub fn evaluate(&self, calculator: &Calculator) -> Result<Evaluation> {
        let result = self.operation.apply(calculator, &self.operands)?;
        Ok(Evaluation::new(self.operation, self.operands.clone(), result))
    }
}

/// Parse a single expression.
///
/// Accepts prefix form (`<name> <int> [<int>]`) and infix form
/// (`<int> <symbol> <int>`). Arity is checked here so that a malformed line
/// is reported as a parse error rather than at evaluation time.
pub fn parse_expression(input: &str) -> std::result::Result<Expression, ExpressionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let expression = if let Some(caps) = INFIX_RE.captures(trimmed) {
        let operation: Operation = caps[2].parse()?;
        let operands = vec![parse_operand(&caps[1])?, parse_operand(&caps[3])?];
        Expression::new(operation, operands)
    } else {
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            [head, rest @ ..] if NAME_RE.is_match(head) => {
                let operation: Operation = head.parse()?;
                let operands = rest
                    .iter()
                    .map(|t| parse_operand(t))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Expression::new(operation, operands)
            }
            // Infix with an operator the regex does not know, e.g. `2 mod 3`
            [lhs, op, rhs] => {
                let operation: Operation = op.parse()?;
                Expression::new(operation, vec![parse_operand(lhs)?, parse_operand(rhs)?])
            }
            _ => return Err(ExpressionError::UnknownOperation(trimmed.to_string())),
        }
    };

    if expression.operands.len() != expression.operation.arity() {
        return Err(ExpressionError::WrongArity {
            operation: expression.operation.name().to_string(),
            expected: expression.operation.arity(),
            actual: expression.operands.len(),
        });
    }

    debug!(
        "Parsed expression: {} {:?}",
        expression.operation, expression.operands
    );
    Ok(expression)
}

/// Parse and evaluate in one step
pub fn evaluate_expression(calculator: &Calculator, input: &str) -> Result<Evaluation> {
    parse_expression(input)?.evaluate(calculator)
}

fn parse_operand(token: &str) -> std::result::Result<i32, ExpressionError> {
    token
        .parse::<i32>()
        .map_err(|_| ExpressionError::InvalidOperand(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        let expr = parse_expression("add 5 3").unwrap();
        assert_eq!(expr, Expression::new(Operation::Add, vec![5, 3]));

        let expr = parse_expression("  CUBE   -2 ").unwrap();
        assert_eq!(expr, Expression::new(Operation::Cube, vec![-2]));
    }

    #[test]
    fn test_parse_infix() {
        let expr = parse_expression("-15 / 3").unwrap();
        assert_eq!(expr, Expression::new(Operation::Divide, vec![-15, 3]));

        let expr = parse_expression("10%3").unwrap();
        assert_eq!(expr, Expression::new(Operation::Modulo, vec![10, 3]));
    }

    #[test]
    fn test_parse_infix_subtract_negative() {
        let expr = parse_expression("3 - -10").unwrap();
        assert_eq!(expr, Expression::new(Operation::Subtract, vec![3, -10]));
    }

    #[test]
    fn test_parse_infix_named_operator() {
        let expr = parse_expression("20 div -4").unwrap();
        assert_eq!(expr, Expression::new(Operation::Divide, vec![20, -4]));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_expression("   "), Err(ExpressionError::Empty));
    }

    #[test]
    fn test_parse_unknown_operation() {
        assert_eq!(
            parse_expression("pow 2 3"),
            Err(ExpressionError::UnknownOperation("pow".to_string()))
        );
        assert_eq!(
            parse_expression("2 ^ 3"),
            Err(ExpressionError::UnknownOperation("^".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_operand() {
        assert_eq!(
            parse_expression("add 5 three"),
            Err(ExpressionError::InvalidOperand("three".to_string()))
        );
        assert_eq!(
            parse_expression("add 1 99999999999"),
            Err(ExpressionError::InvalidOperand("99999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            parse_expression("cube 2 3"),
            Err(ExpressionError::WrongArity {
                operation: "cube".to_string(),
                expected: 1,
                actual: 2,
            })
        );
        assert!(matches!(
            parse_expression("add 1"),
            Err(ExpressionError::WrongArity { .. })
        ));
    }

    #[test]
    fn test_evaluate_expression() {
        let calc = Calculator::new();
        let eval = evaluate_expression(&calc, "20 / -4").unwrap();
        assert_eq!(eval.result, -5);
        assert_eq!(eval.to_string(), "20 / -4 = -5");
    }

    #[test]
    fn test_evaluate_expression_division_by_zero() {
        let calc = Calculator::new();
        let err = evaluate_expression(&calc, "mod 7 0").unwrap_err();
        assert!(err.is_division_by_zero());
    }
}
