use crate::game_type::GameType;
use serde::Serialize;
use std::path::PathBuf;

/// One addon `.toc` file as loaded from disk.
///
/// Built once by [`super::load_toc_file`] and never mutated afterwards;
/// update decisions are carried separately in the reconciliation plan.
#[derive(Debug, Clone, Serialize)]
pub struct TocFile {
    /// File name without the directory part.
    pub file_name: String,
    /// Full path the file was loaded from (and is written back to).
    pub file_path: PathBuf,
    /// Raw file contents at load time.
    #[serde(skip)]
    pub contents: String,
    /// The digits from the first `## Interface:` line, or empty if absent.
    pub interface_number: String,
    /// Game type classified from the interface-number prefix.
    pub game_type: Option<GameType>,
}
