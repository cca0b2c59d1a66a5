//! Vitals: terminal wellness dashboard.

use std::process::ExitCode;

use vitals_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    // Parse CLI args, initialize tracing, and run
    let config = config::AppConfig::parse();
    let outcome = logging::init(config.log_file.as_deref()).and_then(|()| app::run(&config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            vitals_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
