//! Cloud cost report CLI
//!
//! Runs the default deployment study to completion and prints the report
//! as JSON on stdout for the chart-rendering frontend. No flags: the
//! scenario is a fixed, parameterized computation.

use std::process::ExitCode;

use cloud_cost_core_rs::orchestrator::{run_scenario, ScenarioConfig};

fn main() -> ExitCode {
    let config = ScenarioConfig::default();

    let report = match run_scenario(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("scenario run failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
