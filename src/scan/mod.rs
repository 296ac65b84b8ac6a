use crate::toc::{load_toc_file, TocError, TocFile};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to scan directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Toc error: {0}")]
    TocError(#[from] TocError),
}

/// Find and load every `.toc` file directly inside `directory`.
///
/// Only the top level is scanned (addon toc files live next to each other,
/// not in subfolders). Files come back sorted by name so runs are
/// deterministic. A read error on any file fails the whole scan.
pub async fn find_toc_files(directory: &Path) -> Result<Vec<TocFile>, ScanError> {
    let mut file_names = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().map(|e| e.to_str()) != Some(Some("toc")) {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => file_names.push(name.to_string()),
            None => warn!(
                file = %entry.file_name().to_string_lossy(),
                "Skipping toc file with a non-UTF-8 name"
            ),
        }
    }

    file_names.sort();
    debug!(directory = %directory.display(), count = file_names.len(), "Scanned for toc files");

    let mut toc_files = Vec::with_capacity(file_names.len());
    for name in &file_names {
        toc_files.push(load_toc_file(directory, name).await?);
    }

    Ok(toc_files)
}
