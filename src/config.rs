/// Configuration resolution module
///
/// This module handles:
/// - Locating the clover report (argument, environment, default path)
/// - Choosing the terminal width used for truncation
/// - Deciding whether percentages are colored
use crate::cli::CliArgs;
use crate::console_format;
use log::debug;
use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Environment variable consulted when no report argument is given
pub const REPORT_ENV_VAR: &str = "CLOVER_REPORT";

/// Report location used when neither argument nor environment name one
pub const DEFAULT_REPORT_PATH: &str = "build/coverage/clover.xml";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub report_path: PathBuf,
    /// Terminal columns (0 = no truncation)
    pub terminal_width: usize,
    pub use_colors: bool,
    pub json_output: Option<PathBuf>,
}

/// Build a complete ReportConfig from CLI arguments and the environment
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    let env_report = env::var(REPORT_ENV_VAR).ok();
    let report_path = resolve_report_path(args.report.as_ref(), env_report.as_deref())?;
    debug!("Using report {:?}", report_path);

    let terminal_width = resolve_terminal_width(args.console_width, console_format::detect_terminal_width());
    debug!("Terminal width: {}", terminal_width);

    let no_color_env = env::var_os("NO_COLOR").is_some();
    let use_colors = resolve_use_colors(args.no_color, no_color_env, std::io::stdout().is_terminal());
    debug!("Colors enabled: {}", use_colors);

    Ok(ReportConfig { report_path, terminal_width, use_colors, json_output: args.json.clone() })
}

/// Pick the report path: argument, then environment value, then the default
pub fn resolve_report_path(arg: Option<&PathBuf>, env_value: Option<&str>) -> Result<PathBuf, String> {
    if let Some(path) = arg {
        return Ok(path.clone());
    }

    match env_value {
        Some(value) if value.trim().is_empty() => Err(format!("{} is set but empty", REPORT_ENV_VAR)),
        Some(value) => {
            debug!("Using report path from {}", REPORT_ENV_VAR);
            Ok(PathBuf::from(value))
        }
        None => Ok(PathBuf::from(DEFAULT_REPORT_PATH)),
    }
}

/// An explicit width wins over detection; nothing known means no truncation
pub fn resolve_terminal_width(override_width: Option<usize>, detected: Option<usize>) -> usize {
    override_width.or(detected).unwrap_or(0)
}

pub fn resolve_use_colors(no_color_flag: bool, no_color_env: bool, stdout_is_terminal: bool) -> bool {
    !no_color_flag && !no_color_env && stdout_is_terminal
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
