//! Structure instances on the map.

use serde::{Deserialize, Serialize};

use crate::components::{PlayerId, StructureId, StructureStatsId};

/// Construction state of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StructureStatus {
    /// Foundation laid, still under construction.
    BeingBuilt,
    /// Finished.
    #[default]
    Built,
}

/// A structure owned by some player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    /// Structure id.
    pub id: StructureId,
    /// Owning player.
    pub player: PlayerId,
    /// Catalog entry describing the structure type.
    pub stats: StructureStatsId,
    /// Construction state.
    pub status: StructureStatus,
}

impl Structure {
    /// Whether construction has finished.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.status == StructureStatus::Built
    }
}
