mod articles;
mod cli;
mod commands;
mod name_list;
mod names;
mod settings;
mod storage;

/// Identifies the tool on requests that carry no per-run project header.
pub const USER_AGENT: &str = concat!("wikicities/", env!("CARGO_PKG_VERSION"));

use articles::ArticleStatus;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikicities=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Names(args) => {
            commands::names(args)
                .await
                .inspect_err(|e| tracing::error!("name resolution failed: {e}"))?;
        }
        Command::Articles(args) => {
            println!("Wikipedia extraction started");
            println!("Files will be written to disk as they are received");

            let report = commands::articles(args)
                .await
                .inspect_err(|e| tracing::error!("article fetch aborted: {e}"))?;

            println!(
                "finished {} requests in {:.2} seconds",
                report.articles.len(),
                report.elapsed.as_secs_f64()
            );
            for article in &report.articles {
                match &article.status {
                    ArticleStatus::Fetched => {}
                    ArticleStatus::ServerError(code) => {
                        debug!(name = %article.name, status = code, "saved error page")
                    }
                    ArticleStatus::Failed(reason) => {
                        debug!(name = %article.name, %reason, "saved empty article")
                    }
                }
            }
            info!(
                failed = report.failed(),
                server_errors = report.server_errors(),
                "article fetch complete"
            );
            if report.failed() > 0 || report.server_errors() > 0 {
                println!(
                    "{} empty (failed) and {} saved error pages",
                    report.failed(),
                    report.server_errors()
                );
            }
        }
    }
    Ok(())
}
