use serde::Serialize;
use tracing::info;

use crate::commands::output::{render_evaluation, render_record};
use crate::core::{evaluate_expression, Calculator, Expression};
use crate::error::Result;
use crate::models::{Config, Evaluation, Operation};

/// Apply a single operation and print the evaluation
pub fn run_calc(config: &Config, operation: Operation, operands: Vec<i32>) -> Result<Evaluation> {
    info!("Calculating {} {:?}", operation, operands);
    let evaluation = Expression::new(operation, operands).evaluate(&Calculator::new())?;
    println!("{}", render_evaluation(&evaluation, &config.output)?);
    Ok(evaluation)
}

/// Parse and evaluate a textual expression, printing the evaluation
pub fn run_eval(config: &Config, expression: &str) -> Result<Evaluation> {
    info!("Evaluating expression: {}", expression);
    let evaluation = evaluate_expression(&Calculator::new(), expression)?;
    println!("{}", render_evaluation(&evaluation, &config.output)?);
    Ok(evaluation)
}

/// Sum of a list of values, for JSON output
#[derive(Debug, Serialize)]
struct SumRecord<'a> {
    operation: &'static str,
    operands: &'a [i32],
    result: i32,
}

/// Sum all values and print the total
pub fn run_sum(config: &Config, values: &[i32]) -> Result<i32> {
    let total = Calculator::new().sum(values);

    let text = if config.output.show_expression {
        format_sum(values, total)
    } else {
        total.to_string()
    };
    let record = SumRecord {
        operation: "sum",
        operands: values,
        result: total,
    };
    println!("{}", render_record(&record, text, &config.output)?);

    Ok(total)
}

/// Format a sum as `sum(1, 2, 3) = 6`
pub fn format_sum(values: &[i32], total: i32) -> String {
    let args = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("sum({}) = {}", args, total)
}
