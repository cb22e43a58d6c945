//! ReportCard CLI - Main entry point

mod cli;
mod output;

use clap::Parser;
use cli::{Args, Command};
use reportcard_core::ReportAssembler;
use reportcard_foundation::ReportConfig;
use reportcard_provider::{GitHubClient, PomFetcher};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let mut config = ReportConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}", e);
        ReportConfig::new()
    });
    args.apply(&mut config);
    config.validate()?;

    match args.command() {
        Command::Config => {
            println!("{}", output::config_json(&config)?);
            Ok(())
        }
        Command::Generate => generate(&config).await,
    }
}

/// 조직 저장소를 훑어 리포트를 만들고 출력
async fn generate(config: &ReportConfig) -> anyhow::Result<()> {
    let format = cli::report_format(config)?;
    let organization = config.organization();

    let github = GitHubClient::from_config(config)?;
    if !github.has_token() {
        info!("No GitHub token configured; unauthenticated rate limits apply");
    }
    let fetcher = PomFetcher::from_config(&config.fetch)?;
    let assembler =
        ReportAssembler::new(Arc::new(fetcher)).with_concurrency(config.fetch.concurrency);

    let started = Instant::now();
    let report = assembler
        .generate_for_organization(&github, organization)
        .await?;

    let rendered = format.renderer().render(&report, chrono::Utc::now())?;
    output::write_report(config.output.path.as_deref(), &rendered)?;

    let stats = report.stats;
    info!(
        "{}: {} repositories, {} descriptors, {} plugins ({} duplicates, {} skipped) in {:.1}s",
        organization,
        stats.repositories,
        stats.descriptors,
        report.plugins.len(),
        stats.duplicates,
        stats.skipped(),
        started.elapsed().as_secs_f64()
    );
    if let Some(path) = &config.output.path {
        info!("Report written to {}", path);
    }

    Ok(())
}
