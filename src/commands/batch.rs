use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::commands::output::{render_evaluation, render_record};
use crate::core::{evaluate_expression, Calculator};
use crate::error::{CalcPocError, Result};
use crate::models::{Config, Evaluation, OutputConfig};

/// A line of a batch file that could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    /// 1-based line number
    pub line: usize,
    pub input: String,
    pub error: String,
}

/// Outcome of evaluating a batch of expressions
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful evaluations with their 1-based line numbers
    pub evaluations: Vec<(usize, Evaluation)>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of expressions attempted
    pub fn total(&self) -> usize {
        self.evaluations.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluate one expression per line.
///
/// Blank lines and `#` comments are skipped. Failures are collected and
/// evaluation continues unless `stop_on_error` is set.
pub fn evaluate_batch(calculator: &Calculator, contents: &str, stop_on_error: bool) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match evaluate_expression(calculator, line) {
            Ok(evaluation) => {
                debug!("Line {}: {}", line_no, evaluation);
                report.evaluations.push((line_no, evaluation));
            }
            Err(e) => {
                warn!("Line {}: {}", line_no, e);
                report.failures.push(BatchFailure {
                    line: line_no,
                    input: line.to_string(),
                    error: e.to_string(),
                });
                if stop_on_error {
                    info!("Stopping at line {} (stop-on-error)", line_no);
                    break;
                }
            }
        }
    }

    report
}

/// Totals printed after a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub failed: usize,
    pub total: usize,
}

impl From<&BatchReport> for BatchSummary {
    fn from(report: &BatchReport) -> Self {
        Self {
            evaluated: report.evaluations.len(),
            failed: report.failures.len(),
            total: report.total(),
        }
    }
}

/// Write evaluations to `out`, then failures and the summary to `err`
pub fn write_report(
    report: &BatchReport,
    output: &OutputConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    for (_, evaluation) in &report.evaluations {
        writeln!(out, "{}", render_evaluation(evaluation, output)?)?;
    }
    for failure in &report.failures {
        let text = format!("line {}: {} ({})", failure.line, failure.error, failure.input);
        writeln!(err, "{}", render_record(failure, text, output)?)?;
    }

    let summary = BatchSummary::from(report);
    let text = format!(
        "Batch complete: {} evaluated, {} failed",
        summary.evaluated, summary.failed
    );
    writeln!(err, "{}", render_record(&summary, text, output)?)?;

    Ok(())
}

/// Evaluate a batch file and print every result, failure and the summary
pub fn run_batch(config: &Config, path: &Path, stop_on_error: bool) -> Result<BatchReport> {
    if !path.is_file() {
        return Err(CalcPocError::InputNotFound(path.to_path_buf()));
    }

    info!("Running batch file: {}", path.display());
    let contents = fs::read_to_string(path)?;
    let report = evaluate_batch(&Calculator::new(), &contents, stop_on_error);

    write_report(
        &report,
        &config.output,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if report.is_success() {
        Ok(report)
    } else {
        Err(CalcPocError::BatchFailed {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}
