use crate::toc::{propose_update, TocError, TocFile};
use crate::wiki::extract_interface;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Toc error: {0}")]
    TocError(#[from] TocError),
}

/// A toc file flagged for an interface bump.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedUpdate {
    #[serde(flatten)]
    pub toc: TocFile,
    pub new_version: String,
}

/// The per-run update decision, partitioned over the loaded toc files.
///
/// Tocs without a classifiable game type are never compared; they land in
/// `up_to_date` and keep showing their current version in reports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePlan {
    /// Tocs whose declared interface is behind the latest published value.
    pub needs_update: Vec<PlannedUpdate>,

    /// Tocs with a known game type the wiki page had no row for.
    pub unknown_latest: Vec<TocFile>,

    /// Everything else: already current, or excluded from comparison.
    pub up_to_date: Vec<TocFile>,
}

impl UpdatePlan {
    /// Rows for the full status table: one per toc, grouped needs-update
    /// first, then unknown-latest, then up-to-date.
    pub fn status_rows(&self) -> Vec<Vec<String>> {
        let describe = |toc: &TocFile, newest: String| {
            vec![
                toc.file_name.clone(),
                toc.game_type
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
                toc.interface_number.clone(),
                newest,
            ]
        };

        let mut rows = Vec::new();
        for update in &self.needs_update {
            rows.push(describe(&update.toc, update.new_version.clone()));
        }
        for toc in &self.unknown_latest {
            rows.push(describe(toc, "Unknown latest!".to_string()));
        }
        for toc in &self.up_to_date {
            rows.push(describe(toc, toc.interface_number.clone()));
        }
        rows
    }

    /// Rows for the markdown table embedded in issue and PR bodies.
    pub fn update_rows(&self) -> Vec<Vec<String>> {
        self.needs_update
            .iter()
            .map(|update| {
                vec![
                    update.toc.file_name.clone(),
                    update
                        .toc
                        .game_type
                        .map(|g| g.to_string())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    update.toc.interface_number.clone(),
                    update.new_version.clone(),
                ]
            })
            .collect()
    }
}

/// Compare every classified toc against the wiki page and partition the set.
pub fn build_update_plan(tocs: &[TocFile], html: &str) -> Result<UpdatePlan, PlanError> {
    let mut plan = UpdatePlan::default();

    for toc in tocs {
        let Some(game_type) = toc.game_type else {
            debug!(file = %toc.file_name, "No game type classified, skipping comparison");
            plan.up_to_date.push(toc.clone());
            continue;
        };

        match extract_interface(html, game_type) {
            Some(latest) => match propose_update(&toc.interface_number, &latest)? {
                Some(new_version) => plan.needs_update.push(PlannedUpdate {
                    toc: toc.clone(),
                    new_version,
                }),
                None => plan.up_to_date.push(toc.clone()),
            },
            None => {
                debug!(file = %toc.file_name, game_type = %game_type, "No interface row found");
                plan.unknown_latest.push(toc.clone());
            }
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_type::GameType;
    use std::path::PathBuf;

    const HTML: &str = "\
        <tr><td>Retail</td><td><code>110205</code></td></tr>\
        <tr><td>Classic Era</td><td><code>11507</code></td></tr>";

    fn toc(name: &str, interface_number: &str) -> TocFile {
        TocFile {
            file_name: name.to_string(),
            file_path: PathBuf::from(name),
            contents: format!("## Interface: {interface_number}\n"),
            interface_number: interface_number.to_string(),
            game_type: GameType::from_interface_number(interface_number),
        }
    }

    #[test]
    fn test_outdated_toc_is_flagged() {
        let plan = build_update_plan(&[toc("MyAddon.toc", "110200")], HTML).unwrap();
        assert_eq!(plan.needs_update.len(), 1);
        assert_eq!(plan.needs_update[0].new_version, "110205");
        assert!(plan.up_to_date.is_empty());
    }

    #[test]
    fn test_current_toc_is_up_to_date() {
        let plan = build_update_plan(&[toc("MyAddon.toc", "110205")], HTML).unwrap();
        assert!(plan.needs_update.is_empty());
        assert_eq!(plan.up_to_date.len(), 1);
    }

    #[test]
    fn test_unmapped_prefix_skips_comparison() {
        // "40400" strips to the unmapped prefix "4"
        let plan = build_update_plan(&[toc("Cata.toc", "40400")], HTML).unwrap();
        assert!(plan.needs_update.is_empty());
        assert_eq!(plan.up_to_date.len(), 1);

        let rows = plan.status_rows();
        assert_eq!(rows[0][1], "Unknown");
        assert_eq!(rows[0][3], "40400");
    }

    #[test]
    fn test_missing_wiki_row_is_unknown_latest() {
        // Classic ("5" prefix) has no row in the fixture
        let plan = build_update_plan(&[toc("Mists.toc", "50400")], HTML).unwrap();
        assert!(plan.needs_update.is_empty());
        assert_eq!(plan.unknown_latest.len(), 1);

        let rows = plan.status_rows();
        assert_eq!(rows[0][3], "Unknown latest!");
    }

    #[test]
    fn test_width_drift_is_an_error() {
        // Retail toc with a 5-digit declaration cannot be compared with the
        // 6-digit scraped value
        let mut short = toc("Odd.toc", "110200");
        short.interface_number = "11020".to_string();
        short.game_type = Some(GameType::Retail);

        assert!(build_update_plan(&[short], HTML).is_err());
    }
}
