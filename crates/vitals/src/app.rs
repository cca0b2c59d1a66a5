//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use vitals_cli::presenter::CLIResultPresenter;
use vitals_core::interfaces::ResultPresenter;
use vitals_core::steps::StepCounter;
use vitals_core::text::parse_number;
use vitals_core::{bmi, glucose, Dashboard, VitalsError};
use vitals_tui::TuiApp;

use crate::config::{AppConfig, Mode};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.quiet);

    match config.mode() {
        Mode::Completion(shell) => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            vitals_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
            Ok(())
        }
        Mode::Glucose(reading) => {
            check_glucose(reading, &presenter)?;
            Ok(())
        }
        Mode::Bmi { weight, height } => {
            check_bmi(weight, height, &presenter)?;
            Ok(())
        }
        Mode::Dashboard => run_tui(config),
    }
}

/// Classify a reading and present it. Empty or non-numeric input is an error.
pub fn check_glucose(
    reading: &str,
    presenter: &dyn ResultPresenter,
) -> Result<glucose::GlucoseClassification, VitalsError> {
    match glucose::evaluate_input(reading) {
        None | Some(glucose::GlucoseClassification::Invalid) => {
            Err(VitalsError::InvalidReading(reading.to_string()))
        }
        Some(classification) => {
            presenter.present_glucose(reading, classification);
            Ok(classification)
        }
    }
}

/// Compute a BMI and present it. Zero or non-numeric input is an error.
pub fn check_bmi(
    weight: &str,
    height: &str,
    presenter: &dyn ResultPresenter,
) -> Result<bmi::BmiResult, VitalsError> {
    let result = bmi::evaluate_input(weight, height).ok_or(VitalsError::IncompleteBmi)?;
    presenter.present_bmi(parse_number(weight), parse_number(height), &result);
    Ok(result)
}

fn run_tui(config: &AppConfig) -> Result<()> {
    info!(version = %full_version(), steps = config.steps, "starting dashboard");
    let dashboard = Dashboard::with_steps(StepCounter::new(config.steps));
    let mut app = TuiApp::new(dashboard);

    // Run TUI event loop on the main thread
    app.run()
        .map_err(VitalsError::Terminal)
        .context("dashboard terminated abnormally")
}
