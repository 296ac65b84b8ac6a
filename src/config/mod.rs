use crate::wiki::DEFAULT_WIKI_URL;
use std::path::PathBuf;

/// Configuration for one updater run.
///
/// Built from CLI arguments (with env fallbacks) in the binary; the library
/// only consumes the resolved values.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the addon's `.toc` files.
    pub toc_directory: PathBuf,
    /// URL of the reference wiki page listing interface numbers.
    pub wiki_url: String,
    /// Fail the run instead of writing files when updates are found.
    pub fail_when_updates_found: bool,
    /// Write an issue-template.md next to the run when updates are found.
    pub create_issue_template: bool,
    /// Where issue-template.md is written.
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            toc_directory: PathBuf::from("."),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            fail_when_updates_found: false,
            create_issue_template: false,
            output_dir: PathBuf::from("."),
        }
    }
}
