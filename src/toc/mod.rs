mod types;

pub use types::TocFile;

use crate::game_type::GameType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("Failed to read toc file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("Failed to write toc file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("Cannot compare interface versions '{current}' and '{latest}': \
             expected equal-length digit strings")]
    IncomparableVersions { current: String, latest: String },
}

/// Matches the interface declaration line. Only the first occurrence in a
/// file is ever read or replaced.
static INTERFACE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"## Interface: (\d+)").unwrap());

/// Load a `.toc` file and parse its interface declaration.
///
/// `interface_number` ends up empty when the file has no interface line;
/// such a file has no classifiable game type and is excluded from
/// comparison downstream.
pub async fn load_toc_file(directory: &Path, file_name: &str) -> Result<TocFile, TocError> {
    let file_path = directory.join(file_name);
    let contents = fs::read_to_string(&file_path)
        .await
        .map_err(TocError::ReadError)?;

    let interface_number = INTERFACE_LINE
        .captures(&contents)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let game_type = GameType::from_interface_number(&interface_number);

    Ok(TocFile {
        file_name: file_name.to_string(),
        file_path,
        contents,
        interface_number,
        game_type,
    })
}

/// Decide whether `latest` is an update over `current`.
///
/// Interface numbers are fixed-width, zero-padded digit strings, so within
/// a game type lexicographic order equals numeric order. That only holds
/// for equal-length digit strings, and the precondition is enforced here
/// rather than assumed: anything else means the scraped value drifted from
/// the expected format and comparing it would be meaningless.
pub fn propose_update(current: &str, latest: &str) -> Result<Option<String>, TocError> {
    let comparable = current.len() == latest.len()
        && current.chars().all(|c| c.is_ascii_digit())
        && latest.chars().all(|c| c.is_ascii_digit());

    if !comparable {
        return Err(TocError::IncomparableVersions {
            current: current.to_string(),
            latest: latest.to_string(),
        });
    }

    if latest > current {
        Ok(Some(latest.to_string()))
    } else {
        Ok(None)
    }
}

/// Rewrite the toc file in place with `new_version` on its interface line.
///
/// Replaces only the first interface declaration; every other byte of the
/// file passes through unchanged. Idempotent: a second call writes the same
/// final contents.
pub async fn save_interface_number(toc: &TocFile, new_version: &str) -> Result<(), TocError> {
    let replacement = format!("## Interface: {new_version}");
    let updated = INTERFACE_LINE
        .replace(&toc.contents, replacement.as_str())
        .into_owned();
    fs::write(&toc.file_path, updated)
        .await
        .map_err(TocError::WriteError)
}
