use std::io::{self, BufRead, Write};
use tracing::info;

use crate::commands::output::render_evaluation;
use crate::core::{Calculator, Expression};
use crate::error::Result;
use crate::models::{Config, Evaluation, Operation, OutputFormat};

pub const DEMO_TITLE: &str = "CI/CD Pipeline Demonstration";

/// Sample calculations shown by the demo
const DEMO_SAMPLES: [(Operation, &[i32]); 6] = [
    (Operation::Add, &[5, 3]),
    (Operation::Subtract, &[10, 4]),
    (Operation::Multiply, &[6, 7]),
    (Operation::Divide, &[10, 3]),
    (Operation::Modulo, &[10, 3]),
    (Operation::Cube, &[-2]),
];

/// Evaluate the demo samples
pub fn demo_evaluations(calculator: &Calculator) -> Result<Vec<Evaluation>> {
    DEMO_SAMPLES
        .iter()
        .map(|(op, operands)| Expression::new(*op, operands.to_vec()).evaluate(calculator))
        .collect()
}

/// Print the demonstration banner and sample results
pub fn run_demo(config: &Config) -> Result<()> {
    info!("Running demo");

    write_demo(config, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    if config.demo.pause_on_exit {
        println!();
        print!("Press Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}

/// Write the demo to `out`; in JSON mode the banner goes to `err` so `out`
/// holds only JSON lines
pub fn write_demo(config: &Config, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let banner: &mut dyn Write = match config.output.format {
        OutputFormat::Json => &mut *err,
        OutputFormat::Text => &mut *out,
    };
    writeln!(banner, "{}", DEMO_TITLE)?;
    writeln!(banner, "{}", "=".repeat(DEMO_TITLE.len()))?;
    writeln!(banner)?;

    for evaluation in demo_evaluations(&Calculator::new())? {
        writeln!(out, "{}", render_evaluation(&evaluation, &config.output)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_evaluations() {
        let lines: Vec<String> = demo_evaluations(&Calculator::new())
            .unwrap()
            .iter()
            .map(|e| e.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "5 + 3 = 8",
                "10 - 4 = 6",
                "6 * 7 = 42",
                "10 / 3 = 3",
                "10 % 3 = 1",
                "cube(-2) = -8",
            ]
        );
    }

    #[test]
    fn test_run_demo_without_pause() {
        assert!(run_demo(&Config::default()).is_ok());
    }

    #[test]
    fn test_write_demo_text() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_demo(&Config::default(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("CI/CD Pipeline Demonstration\n====="));
        assert!(out.contains("5 + 3 = 8"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_write_demo_json_keeps_stdout_machine_readable() {
        let config = Config::default().with_overrides(Some(OutputFormat::Json), false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_demo(&config, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), DEMO_SAMPLES.len());
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("result").is_some());
        }
        assert!(String::from_utf8(err).unwrap().contains(DEMO_TITLE));
    }
}
