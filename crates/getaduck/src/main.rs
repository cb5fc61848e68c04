use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use getaduck::Downloader;

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::setup_logging(cli.verbose);

    let spec = cli.spec();
    let downloader = Downloader::new(cli.settings()).context("failed to set up downloader")?;
    let outcome = downloader.run(&spec).await.with_context(|| {
        format!(
            "failed to get DuckDB {} {} for {}-{}",
            spec.kind, spec.version, spec.os, spec.arch
        )
    })?;

    let path = std::path::absolute(&outcome.output_file)
        .unwrap_or_else(|_| outcome.output_file.clone());
    // Printed regardless of the log filter.
    eprintln!("{}", cli::summary(&outcome, &path));
    Ok(ExitCode::SUCCESS)
}
