#![allow(clippy::print_stdout)]

use clap::Parser;
use oaspub_cli::args::Cli;
use oaspub_cli::report::Report;
use oaspub_logger::Logger;
use std::io::IsTerminal;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log = match Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(cli.log_level.into())
        .json(cli.log_json)
        .ansi(std::io::stderr().is_terminal())
        .init()
    {
        Ok(log) => log,
        Err(err) => return emit(Report::startup_failure(&err.into(), cli.exit_zero)),
    };

    let report = match oaspub_cli::execute(&cli).await {
        Ok(report) => report,
        Err(err) => Report::startup_failure(&err, cli.exit_zero),
    };

    emit(report)
}

fn emit(report: Report) -> ExitCode {
    println!("{}", report.line);
    ExitCode::from(report.exit_code)
}
