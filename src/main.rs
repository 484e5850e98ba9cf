use std::io;
use std::process::ExitCode;

use pipegen::plugin::{self, LOG_ENV_VAR, Outcome};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match plugin::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(Outcome::Succeeded) => ExitCode::SUCCESS,
        Ok(Outcome::Reported) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Log to stderr; stdout carries the response.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
