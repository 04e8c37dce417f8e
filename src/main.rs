//! deploykit CLI
//!
//! Usage: deploykit [OPTIONS] <APP> <ENVIRONMENT>
//!
//! Exit status is 0 on success and 1 on any failure.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use deploykit::application::CancellationFlag;
use deploykit::config::{load_catalog, load_settings};
use deploykit::domain::entities::DeploymentRequest;
use deploykit::domain::value_objects::Version;
use deploykit::presentation::{create_event_sink, create_orchestrator, init_logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("warning: {e}");
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the deployment succeeded; `Err` covers setup failures
fn run(cli: Cli) -> Result<bool> {
    let (settings, warnings) =
        load_settings(&cli.config_dir).context("failed to load settings")?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    let settings = cli.apply_to(settings);

    let catalog = load_catalog(&cli.config_dir).context("failed to load deployment catalog")?;

    let mut request =
        DeploymentRequest::new(&cli.app, &cli.environment).with_test_mode(cli.test);
    if let Some(raw) = &cli.version {
        request = request.with_version(Version::parse(raw)?);
    }

    let cancel = CancellationFlag::new();
    let handler_flag = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.cancel()) {
        tracing::warn!("failed to install Ctrl-C handler: {}", e);
    }

    let events = create_event_sink(cli.json, cli.verbose > 0);
    let orchestrator =
        create_orchestrator(Arc::new(catalog), &settings, events).with_cancellation(cancel);
    let report = orchestrator.run(&request);

    // Outcome and failure chain were already reported through the event sink.
    Ok(report.is_success())
}
