use serde::Serialize;

/// Context fed to the issue and PR body templates.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTemplateContext {
    /// Markdown table of (file, game type, old version, new version) rows.
    pub table: String,
    /// Number of toc files needing an update.
    pub count: usize,
    /// UTC date of the run, YYYY-MM-DD.
    pub date: String,
}

impl UpdateTemplateContext {
    pub fn new(table: String, count: usize) -> Self {
        Self {
            table,
            count,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}
