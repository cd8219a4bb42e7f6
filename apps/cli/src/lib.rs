//! `oaspub` command-line front end.
//!
//! Parses flags, loads the CI settings, runs the publish pipeline once and turns
//! the outcome into one stdout line plus an exit status.

pub mod args;
pub mod report;

use crate::args::Cli;
use crate::report::Report;
use anyhow::Context;
use oaspub_kernel::config::load_settings;
use oaspub_kernel::pipeline;

/// Runs one publish attempt for the parsed command line.
///
/// # Errors
/// Returns an error only if the settings cannot be loaded; every pipeline
/// outcome is folded into the returned [`Report`].
pub async fn execute(cli: &Cli) -> anyhow::Result<Report> {
    let env = load_settings(cli.config.as_deref()).context("Critical: settings are malformed")?;
    let config = cli.publish_config(env);

    let result = pipeline::run(&config).await;
    if let Err(err) = &result {
        tracing::debug!(error = ?err, "Pipeline stopped");
    }

    Ok(Report::new(&result, cli.exit_zero))
}
