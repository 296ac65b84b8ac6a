mod config;
mod game_type;
mod reconcile;
mod report;
mod scan;
mod template;
mod toc;
mod wiki;

use anyhow::Context;
use clap::Parser;
use config::RunConfig;
use reconcile::RunReport;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wiki::DEFAULT_WIKI_URL;

/// Toc Interface Updater - keeps addon .toc interface versions current
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the addon's .toc files
    #[arg(short, long, env = "TOC_DIRECTORY", default_value = ".")]
    toc_directory: PathBuf,

    /// Reference wiki page to scrape interface numbers from
    #[arg(long, env = "TOC_WIKI_URL", default_value = DEFAULT_WIKI_URL)]
    wiki_url: String,

    /// Fail the run instead of updating files when updates are found
    #[arg(long, env = "FAIL_WHEN_UPDATES_FOUND")]
    fail_when_updates_found: bool,

    /// Write an issue-template.md when updates are found
    #[arg(long, env = "CREATE_ISSUE_TEMPLATE")]
    create_issue_template: bool,

    /// Directory to write generated artifacts (issue-template.md) into
    #[arg(long, env = "TOC_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Also write the run report as JSON to this path
    #[arg(long, env = "TOC_JSON_REPORT")]
    json_report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = RunConfig {
        toc_directory: args.toc_directory,
        wiki_url: args.wiki_url,
        fail_when_updates_found: args.fail_when_updates_found,
        create_issue_template: args.create_issue_template,
        output_dir: args.output_dir,
    };

    let report = reconcile::run(&config).await?;
    write_ci_outputs(&report).context("Failed to write CI outputs")?;

    if let Some(path) = &args.json_report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        info!("Wrote JSON report to {}", path.display());
    }

    Ok(())
}

/// Publish run results to the CI job when running under GitHub Actions.
///
/// Outputs go to the file named by `$GITHUB_OUTPUT`; multiline values use
/// the heredoc syntax that file format requires. A no-op outside CI.
fn write_ci_outputs(report: &RunReport) -> anyhow::Result<()> {
    let Ok(output_path) = std::env::var("GITHUB_OUTPUT") else {
        return Ok(());
    };

    use std::fmt::Write as _;
    let mut outputs = String::new();
    writeln!(outputs, "tocs-updated={}", report.updated.len())?;
    if let Some(issue) = &report.issue_body {
        writeln!(outputs, "tocs-issue<<TOC_EOF\n{issue}\nTOC_EOF")?;
    }
    if let Some(pr) = &report.pr_body {
        writeln!(outputs, "tocs-pr<<TOC_EOF\n{pr}\nTOC_EOF")?;
    }

    use std::io::Write as _;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&output_path)?;
    file.write_all(outputs.as_bytes())?;

    info!("Wrote job outputs to {}", output_path);
    Ok(())
}
