//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use vitals_core::constants::STEPS_SEED;

/// Vitals: a terminal wellness dashboard for blood sugar, BMI, medication,
/// steps and water.
///
/// Without --glucose or --weight/--height the interactive dashboard starts.
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
pub struct AppConfig {
    /// Step count shown when the dashboard starts.
    #[arg(long, default_value_t = STEPS_SEED, env = "VITALS_STEPS")]
    pub steps: u32,

    /// Classify a blood-sugar reading in mg/dL and exit.
    #[arg(
        long,
        value_name = "MG_DL",
        allow_negative_numbers = true,
        conflicts_with_all = ["weight", "height"]
    )]
    pub glucose: Option<String>,

    /// Weight in kilograms; computes the BMI together with --height and exits.
    #[arg(long, value_name = "KG", requires = "height")]
    pub weight: Option<String>,

    /// Height in centimeters; computes the BMI together with --weight and exits.
    #[arg(long, value_name = "CM", requires = "weight")]
    pub height: Option<String>,

    /// Quiet mode (only output the bare result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH", env = "VITALS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What a given command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Completion(clap_complete::Shell),
    Glucose(&'a str),
    Bmi { weight: &'a str, height: &'a str },
    Dashboard,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Decide which mode to run in.
    #[must_use]
    pub fn mode(&self) -> Mode<'_> {
        if let Some(shell) = self.completion {
            return Mode::Completion(shell);
        }
        if let Some(reading) = &self.glucose {
            return Mode::Glucose(reading);
        }
        match (&self.weight, &self.height) {
            (Some(weight), Some(height)) => Mode::Bmi { weight, height },
            _ => Mode::Dashboard,
        }
    }
}
