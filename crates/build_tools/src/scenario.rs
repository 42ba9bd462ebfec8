//! Loading scenario files from disk.

use std::path::Path;

use build_core::data::ScenarioData;
use build_core::error::GameError;
use build_core::world::World;
use thiserror::Error;

/// Errors from loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// File that failed to read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file parsed but describes an inconsistent scenario.
    #[error("'{path}' has {} problem(s): {}", .problems.len(), .problems.join("; "))]
    Invalid {
        /// File with the problems.
        path: String,
        /// One line per problem.
        problems: Vec<String>,
    },

    /// Parsing or world construction failed.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Read and parse a scenario file without checking it.
///
/// # Errors
///
/// Returns an error if the file can't be read or isn't valid RON.
pub fn read_scenario(path: &Path) -> Result<ScenarioData, ScenarioError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: origin.clone(),
        source,
    })?;
    Ok(ScenarioData::from_ron(&text, &origin)?)
}

/// Read, check and build the world described by a scenario file.
///
/// # Errors
///
/// Returns an error if the file can't be read, doesn't parse, or fails
/// validation.
pub fn load_world(path: &Path) -> Result<World, ScenarioError> {
    let scenario = read_scenario(path)?;
    let problems = scenario.validate();
    if !problems.is_empty() {
        return Err(ScenarioError::Invalid {
            path: path.display().to_string(),
            problems,
        });
    }
    Ok(scenario.into_world()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_world_from_file() {
        let file = write_temp(
            r#"ScenarioData(
                selected_player: 0,
                structure_stats: [
                    StructureStatsData(id: "wall", name: "Wall", structure_type: Wall,
                        power: 20, available_to: [0]),
                ],
                droids: [DroidData(player: 0, droid_type: Construct, position: (3, 4))],
            )"#,
        );

        let world = load_world(file.path()).unwrap();

        assert_eq!(world.catalog().len(), 1);
        assert_eq!(world.droids(world.selected_player()).len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_scenario(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }

    #[test]
    fn test_bad_ron_is_parse_error() {
        let file = write_temp("ScenarioData(selected_player: ");
        let err = read_scenario(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Game(GameError::DataParseError { .. })
        ));
    }

    #[test]
    fn test_problems_are_reported_together() {
        let file = write_temp(
            r#"ScenarioData(
                selected_player: 40,
                structure_stats: [],
                structures: [StructureData(player: 0, structure: "nowhere")],
            )"#,
        );

        let err = load_world(file.path()).unwrap_err();

        let ScenarioError::Invalid { problems, .. } = &err else {
            panic!("expected validation failure, got {err}");
        };
        assert_eq!(problems.len(), 2);
        assert!(err.to_string().contains("2 problem(s)"));
    }
}
