use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::CalcPocError;
use crate::models::{Config, OutputFormat};

/// Load configuration from the given directory with CLI overrides
pub fn load_config(
    dir: &Path,
    format: Option<OutputFormat>,
    pause: bool,
) -> Result<Config, CalcPocError> {
    let config = Config::load_from_dir(dir)?;
    let config = config.with_overrides(format, pause);

    info!(
        "Configuration loaded: format={:?}, show_expression={}, pause_on_exit={}",
        config.output.format, config.output.show_expression, config.demo.pause_on_exit
    );

    Ok(config)
}

/// Directory to read calcpoc.toml from: the explicit `dir` if given, which
/// must exist, otherwise the current directory
pub fn resolve_config_dir(dir: Option<PathBuf>) -> Result<PathBuf, CalcPocError> {
    match dir {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(CalcPocError::ConfigDirNotFound(dir)),
        None => Ok(std::env::current_dir()?),
    }
}
