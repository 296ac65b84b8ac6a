use super::plan::{build_update_plan, PlanError, PlannedUpdate, UpdatePlan};
use crate::config::RunConfig;
use crate::report::{console_table, markdown_table};
use crate::scan::{find_toc_files, ScanError};
use crate::template::{TemplateEngine, TemplateError, UpdateTemplateContext};
use crate::toc::{save_interface_number, TocError};
use crate::wiki::{fetch_wiki_page, WikiError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum RunError {
    #[error("No .toc files found in {0}. Check the toc directory setting and try again.")]
    NoTocFilesFound(PathBuf),

    #[error("Scan error: {0}")]
    ScanError(#[from] ScanError),

    #[error("Wiki error: {0}")]
    WikiError(#[from] WikiError),

    #[error("Plan error: {0}")]
    PlanError(#[from] PlanError),

    #[error("Toc error: {0}")]
    TocError(#[from] TocError),

    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("{count} toc file(s) need interface updates: {}", files.join(", "))]
    UpdatesRequired { count: usize, files: Vec<String> },
}

/// Outcome of a completed run, for CI consumption.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Updates applied in this run (empty when everything was current).
    pub updated: Vec<PlannedUpdate>,
    /// Markdown table of the applied updates, empty when there were none.
    pub markdown_table: String,
    /// Rendered issue body, present only when updates were applied.
    pub issue_body: Option<String>,
    /// Rendered PR body, present only when updates were applied.
    pub pr_body: Option<String>,
    /// Where issue-template.md was written, if requested.
    pub issue_template_path: Option<PathBuf>,
}

const STATUS_HEADERS: [&str; 4] = [
    "TOC File",
    "Game Type",
    "Current Interface Version",
    "Newest Interface Version",
];

const UPDATE_HEADERS: [&str; 4] = ["TOC File", "Game Type", "Old Version", "New Version"];

/// Run the full reconciliation pipeline: scan, fetch, compare, and either
/// persist the updates or fail the run, per configuration.
///
/// Fatal errors abort immediately with nothing rolled back; a write failure
/// partway through persisting leaves earlier files updated.
pub async fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    info!(
        "Checking for toc files in directory: {}",
        config.toc_directory.display()
    );

    let tocs = find_toc_files(&config.toc_directory).await?;
    if tocs.is_empty() {
        return Err(RunError::NoTocFilesFound(config.toc_directory.clone()));
    }
    info!("Found {} .toc file(s)!", tocs.len());

    info!("Fetching current interface numbers from {}...", config.wiki_url);
    let html = fetch_wiki_page(&config.wiki_url).await?;

    info!("Comparing toc interface numbers with latest versions...");
    let plan = build_update_plan(&tocs, &html)?;
    info!("{}", console_table(&STATUS_HEADERS, &plan.status_rows()));

    if plan.needs_update.is_empty() {
        info!("All toc files are up to date! No interface updates needed.");
        return Ok(RunReport::default());
    }

    info!(
        "Found {} toc file(s) needing interface updates:",
        plan.needs_update.len()
    );

    if config.fail_when_updates_found {
        error!("Failing run due to fail-when-updates-found being set.");
        return Err(RunError::UpdatesRequired {
            count: plan.needs_update.len(),
            files: plan
                .needs_update
                .iter()
                .map(|u| u.toc.file_name.clone())
                .collect(),
        });
    }

    let table = markdown_table(&UPDATE_HEADERS, &plan.update_rows());
    let engine = TemplateEngine::new()?;
    let context = UpdateTemplateContext::new(table.clone(), plan.needs_update.len());

    let issue_template_path = if config.create_issue_template {
        info!("Creating issue template file...");
        Some(engine.write_issue_template(&config.output_dir, &context).await?)
    } else {
        None
    };

    info!(
        "{}",
        console_table(
            &["TOC File", "Update"],
            &update_summary_rows(&plan)
        )
    );

    info!("Updating toc files...");
    for update in &plan.needs_update {
        save_interface_number(&update.toc, &update.new_version).await?;
    }
    info!("All toc files updated.");

    Ok(RunReport {
        updated: plan.needs_update,
        markdown_table: table,
        issue_body: Some(engine.render_issue(&context)?),
        pr_body: Some(engine.render_pr(&context)?),
        issue_template_path,
    })
}

fn update_summary_rows(plan: &UpdatePlan) -> Vec<Vec<String>> {
    plan.needs_update
        .iter()
        .map(|update| {
            vec![
                update.toc.file_name.clone(),
                format!("{} -> {}", update.toc.interface_number, update.new_version),
            ]
        })
        .collect()
}
