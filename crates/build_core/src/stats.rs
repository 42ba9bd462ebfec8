//! Structure stats catalog.
//!
//! The catalog is the static table of buildable structure types. Each entry
//! carries per-player counters (how many are built, how many may be built)
//! and per-player availability, which research progression updates over the
//! course of a game.

use serde::{Deserialize, Serialize};

use crate::components::{PlayerId, StructureStatsId, MAX_PLAYERS};

/// Per-player build limit used when a data file does not set one.
pub const DEFAULT_STRUCTURE_LIMIT: u32 = 255;

/// Structure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    /// Command headquarters.
    Hq,
    /// Tank factory.
    Factory,
    /// Factory upgrade module.
    FactoryModule,
    /// Power generator.
    PowerGen,
    /// Power generator upgrade module.
    PowerModule,
    /// Oil derrick.
    ResourceExtractor,
    /// Defensive emplacement.
    Defense,
    /// Wall segment.
    Wall,
    /// Wall corner, placed automatically between wall segments.
    WallCorner,
    /// Anything without special handling.
    Generic,
    /// Research facility.
    Research,
    /// Research facility upgrade module.
    ResearchModule,
    /// Repair facility.
    RepairFacility,
    /// Command relay.
    CommandControl,
    /// Bridge.
    Bridge,
    /// Demolish pseudo-structure.
    Demolish,
    /// Cyborg factory.
    CyborgFactory,
    /// VTOL factory.
    VtolFactory,
    /// Laser satellite uplink.
    Lassat,
    /// VTOL rearm pad.
    RearmPad,
    /// Missile silo.
    MissileSilo,
    /// Satellite uplink.
    SatUplink,
    /// Gate.
    Gate,
}

impl StructureType {
    /// Base-building structures that cannot be built during an offworld
    /// mission.
    #[must_use]
    pub const fn is_base_only(self) -> bool {
        matches!(
            self,
            Self::Factory
                | Self::PowerGen
                | Self::ResourceExtractor
                | Self::Research
                | Self::CyborgFactory
                | Self::VtolFactory
        )
    }

    /// For upgrade modules, the structure type the module attaches to.
    #[must_use]
    pub const fn module_base(self) -> Option<Self> {
        match self {
            Self::ResearchModule => Some(Self::Research),
            Self::FactoryModule => Some(Self::Factory),
            Self::PowerModule => Some(Self::PowerGen),
            _ => None,
        }
    }
}

/// Whether a player may build a structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Availability {
    /// Not researched yet.
    #[default]
    Unavailable,
    /// Buildable.
    Available,
    /// Superseded by a better design but still buildable.
    Redundant,
}

/// One entry of the structure catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureStats {
    /// Position in the catalog.
    pub index: StructureStatsId,
    /// Stable string id, used by data files and saved favorites.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category.
    pub structure_type: StructureType,
    /// Power cost to build.
    pub power_to_build: u32,
    /// Number currently built, per player.
    pub cur_count: [u32; MAX_PLAYERS],
    /// Maximum number allowed, per player.
    pub limit: [u32; MAX_PLAYERS],
    /// Availability, per player.
    pub availability: [Availability; MAX_PLAYERS],
    /// Marked as a favorite by the local user.
    pub is_favorite: bool,
}

impl StructureStats {
    /// Create an entry that is unavailable to everyone.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        structure_type: StructureType,
        power_to_build: u32,
    ) -> Self {
        Self {
            index: StructureStatsId(0),
            id: id.into(),
            name: name.into(),
            structure_type,
            power_to_build,
            cur_count: [0; MAX_PLAYERS],
            limit: [DEFAULT_STRUCTURE_LIMIT; MAX_PLAYERS],
            availability: [Availability::Unavailable; MAX_PLAYERS],
            is_favorite: false,
        }
    }

    /// Set availability for every player.
    #[must_use]
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = [availability; MAX_PLAYERS];
        self
    }

    /// Set the build limit for every player.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = [limit; MAX_PLAYERS];
        self
    }

    /// Mark as favorite.
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.is_favorite = favorite;
        self
    }

    /// Availability for a player. Unknown players see nothing.
    #[must_use]
    pub fn availability_for(&self, player: PlayerId) -> Availability {
        self.availability
            .get(player.index())
            .copied()
            .unwrap_or_default()
    }

    /// Whether the player has built fewer than their limit.
    #[must_use]
    pub fn is_under_limit(&self, player: PlayerId) -> bool {
        match (
            self.cur_count.get(player.index()),
            self.limit.get(player.index()),
        ) {
            (Some(count), Some(limit)) => count < limit,
            _ => false,
        }
    }
}

/// The process-wide table of structure types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureCatalog {
    entries: Vec<StructureStats>,
}

impl StructureCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, assigning its index.
    pub fn push(&mut self, mut stats: StructureStats) -> StructureStatsId {
        let index = StructureStatsId(self.entries.len());
        stats.index = index;
        self.entries.push(stats);
        index
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, index: StructureStatsId) -> Option<&StructureStats> {
        self.entries.get(index.0)
    }

    /// Look up an entry for modification.
    pub fn get_mut(&mut self, index: StructureStatsId) -> Option<&mut StructureStats> {
        self.entries.get_mut(index.0)
    }

    /// Find an entry by its string id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&StructureStats> {
        self.entries.iter().find(|s| s.id == id)
    }

    /// All entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &StructureStats> {
        self.entries.iter()
    }

    /// All entries in catalog order, mutable.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StructureStats> {
        self.entries.iter_mut()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The demolish pseudo-stat, if the catalog has one.
    #[must_use]
    pub fn demolish_stat(&self) -> Option<StructureStatsId> {
        self.entries
            .iter()
            .find(|s| s.structure_type == StructureType::Demolish)
            .map(|s| s.index)
    }
}
