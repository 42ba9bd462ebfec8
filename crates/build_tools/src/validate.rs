//! Scenario validation utilities.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::scenario::{load_world, ScenarioError};

/// Outcome of validating a file or directory of scenarios.
#[derive(Debug, Default)]
pub struct ValidationSummary {
    /// Files that loaded cleanly.
    pub passed: Vec<PathBuf>,
    /// Files that failed, with the reason.
    pub failed: Vec<(PathBuf, ScenarioError)>,
}

impl ValidationSummary {
    /// Whether every file passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Validate one scenario file.
///
/// # Errors
///
/// Returns an error if the file can't be read, doesn't parse, or describes
/// an inconsistent scenario.
pub fn validate_scenario_file(path: &Path) -> Result<(), ScenarioError> {
    let world = load_world(path)?;
    let player = world.selected_player();
    info!(
        "{}: {} structure types, {} droids for {player}",
        path.display(),
        world.catalog().len(),
        world.droids(player).len()
    );
    Ok(())
}

/// Validate a scenario file, or every `.ron` file in a directory.
///
/// # Errors
///
/// Returns an error only if the directory itself can't be listed; per-file
/// failures are collected in the summary.
pub fn validate_path(path: &Path) -> Result<ValidationSummary, ScenarioError> {
    let files = if path.is_dir() {
        let entries = std::fs::read_dir(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "ron"))
            .collect();
        files.sort();
        files
    } else {
        vec![path.to_path_buf()]
    };

    let mut summary = ValidationSummary::default();
    for file in files {
        match validate_scenario_file(&file) {
            Ok(()) => summary.passed.push(file),
            Err(e) => {
                warn!("{}: {e}", file.display());
                summary.failed.push((file, e));
            }
        }
    }
    Ok(summary)
}
