use serde::Serialize;

use crate::error::Result;
use crate::models::{Evaluation, OutputConfig, OutputFormat};

/// Render an evaluation according to the output settings
pub fn render_evaluation(evaluation: &Evaluation, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => Ok(serde_json::to_string(evaluation)?),
        OutputFormat::Text if output.show_expression => Ok(evaluation.to_string()),
        OutputFormat::Text => Ok(evaluation.result.to_string()),
    }
}

/// Render any serializable record, using `text` for text mode
pub fn render_record<T: Serialize>(record: &T, text: String, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Text => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    fn eval() -> Evaluation {
        Evaluation::new(Operation::Add, vec![5, 3], 8)
    }

    #[test]
    fn test_render_text() {
        let output = OutputConfig::default();
        assert_eq!(render_evaluation(&eval(), &output).unwrap(), "5 + 3 = 8");
    }

    #[test]
    fn test_render_text_result_only() {
        let output = OutputConfig {
            show_expression: false,
            ..OutputConfig::default()
        };
        assert_eq!(render_evaluation(&eval(), &output).unwrap(), "8");
    }

    #[test]
    fn test_render_json() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        };
        let rendered = render_evaluation(&eval(), &output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["operation"], "add");
        assert_eq!(value["result"], 8);
    }
}
