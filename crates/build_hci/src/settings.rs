//! Persisted build menu settings.
//!
//! The two filter toggles and the set of favorite structures survive
//! between sessions. Favorites are stored by stable structure id so that a
//! reordered catalog still finds them.

use std::path::Path;

use build_core::facade::GameFacade;
use build_core::stats::StructureCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read or write the file.
    #[error("Failed to access settings file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON.
    #[error("Failed to parse settings '{path}': {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Failed to serialize RON.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// User preferences for the build menu.
///
/// # Example RON
///
/// ```ron
/// BuildMenuSettings(
///     show_redundant_designs: false,
///     show_favorites_only: true,
///     favorites: ["A0HardcreteMk1Wall", "A0LightFactory"],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMenuSettings {
    /// Offer structures superseded by research.
    #[serde(default)]
    pub show_redundant_designs: bool,

    /// Offer only favorite structures.
    #[serde(default)]
    pub show_favorites_only: bool,

    /// Structure ids marked as favorite.
    #[serde(default)]
    pub favorites: Vec<String>,
}

impl BuildMenuSettings {
    /// Parse settings from RON text. `origin` names the source in errors.
    pub fn from_ron(text: &str, origin: &str) -> Result<Self, SettingsError> {
        ron::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Render settings as pretty RON.
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&text, &path.display().to_string())
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No build menu settings at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!("{e}; using default build menu settings");
            Self::default()
        })
    }

    /// Write settings to a file.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = self.to_ron()?;
        std::fs::write(path, text).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Mark the saved favorites in the game's catalog.
    ///
    /// Returns how many catalog entries were marked. Ids missing from the
    /// catalog are skipped with a warning.
    pub fn apply_favorites(&self, game: &mut dyn GameFacade) -> usize {
        let mut marked = Vec::new();
        for id in &self.favorites {
            match game.catalog().find(id) {
                Some(stats) => marked.push(stats.index),
                None => warn!("Favorite structure '{id}' is not in the catalog"),
            }
        }

        let mut count = 0;
        for index in marked {
            if game.set_favorite(index, true).is_ok() {
                count += 1;
            }
        }
        count
    }

    /// Replace the saved favorites with the ones flagged in a catalog.
    pub fn collect_favorites(&mut self, catalog: &StructureCatalog) {
        self.favorites = catalog
            .iter()
            .filter(|s| s.is_favorite)
            .map(|s| s.id.clone())
            .collect();
    }
}
