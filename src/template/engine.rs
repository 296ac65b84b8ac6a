use handlebars::Handlebars;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use super::types::UpdateTemplateContext;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

const ISSUE_TEMPLATE: &str = "\
# Interface updates available

{{count}} toc file(s) declare an interface version older than the latest \
published for their game type ({{date}}).
{{{table}}}
Re-run the updater without the fail flag to apply these, or update the \
files by hand and close this issue.
";

const PR_TEMPLATE: &str = "\
# Update toc interface versions

Bumps the interface version in {{count}} toc file(s) to the latest \
published values ({{date}}).
{{{table}}}
";

/// Renders the built-in issue and PR bodies for a set of pending updates.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("issue", ISSUE_TEMPLATE)?;
        handlebars.register_template_string("pr", PR_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    pub fn render_issue(&self, context: &UpdateTemplateContext) -> Result<String, TemplateError> {
        Ok(self.handlebars.render("issue", context)?)
    }

    pub fn render_pr(&self, context: &UpdateTemplateContext) -> Result<String, TemplateError> {
        Ok(self.handlebars.render("pr", context)?)
    }

    /// Write the rendered issue body to `{output_dir}/issue-template.md`.
    pub async fn write_issue_template(
        &self,
        output_dir: &Path,
        context: &UpdateTemplateContext,
    ) -> Result<std::path::PathBuf, TemplateError> {
        let body = self.render_issue(context)?;
        let path = output_dir.join("issue-template.md");
        fs::write(&path, body).await?;
        Ok(path)
    }
}
