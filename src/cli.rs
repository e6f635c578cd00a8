use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "clover-table")]
#[command(about = "Print a clover.xml coverage report as a per-directory table")]
#[command(version)]
pub struct CliArgs {
    /// Path to the clover.xml report
    /// Default: $CLOVER_REPORT, then build/coverage/clover.xml
    #[arg(value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// Override console width (default: auto-detect, 0 disables truncation)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Disable colored percentages
    #[arg(long)]
    pub no_color: bool,

    /// Also write the coverage tree as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        let Some(json) = &self.json else {
            return Ok(());
        };

        if json.is_dir() {
            return Err(format!("--json path {} is a directory", json.display()));
        }

        // Writing the export over its own input would destroy the report
        if self.report.as_ref() == Some(json) {
            return Err("--json path must differ from the report path".to_string());
        }

        Ok(())
    }
}
