// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod clover;
mod config;
mod console_format;
mod error;
mod line_ranges;
mod report;
mod runner;
mod tree;
mod types;
mod ui;

use log::debug;
use runner::{CoverageReporter, SummaryOutcome};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let reporter = CoverageReporter::new(config.terminal_width, config.use_colors)
        .with_json_output(config.json_output.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = reporter.print_coverage_summary(&mut out, &config.report_path);
    drop(out);

    match outcome {
        Ok(SummaryOutcome::Rendered { files }) => debug!("Rendered coverage for {} files", files),
        Ok(SummaryOutcome::ReportNotFound) => debug!("No report at {:?}, nothing to do", config.report_path),
        Ok(SummaryOutcome::NoCoverageData) => debug!("Report {:?} lists no files", config.report_path),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
