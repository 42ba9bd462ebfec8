//! In-memory game state.
//!
//! `World` keeps per-player droid and structure lists in creation order,
//! the structure catalog and the mission context. It is the state the
//! headless tools and the tests drive the build interface with; a full game
//! would put its own simulation behind [`GameFacade`](crate::facade::GameFacade)
//! instead.

use tracing::debug;

use crate::components::{DroidId, PlayerId, StructureId, StructureStatsId, MAX_PLAYERS};
use crate::droid::{Droid, DroidAction, DroidType};
use crate::error::{GameError, Result};
use crate::math::Vec2Fixed;
use crate::mission::MissionContext;
use crate::order::Order;
use crate::stats::StructureCatalog;
use crate::structure::{Structure, StructureStatus};

/// Game state behind the build interface.
#[derive(Debug, Clone)]
pub struct World {
    /// The local player.
    selected_player: PlayerId,
    /// Droids per player, oldest first.
    droid_lists: Vec<Vec<Droid>>,
    /// Structures per player, oldest first.
    structure_lists: Vec<Vec<Structure>>,
    /// Structure catalog.
    catalog: StructureCatalog,
    /// Current mission flags.
    mission: MissionContext,
    next_droid_id: u32,
    next_structure_id: u32,
}

impl World {
    /// Create an empty world for the given local player.
    #[must_use]
    pub fn new(selected_player: PlayerId, catalog: StructureCatalog) -> Self {
        Self {
            selected_player,
            droid_lists: vec![Vec::new(); MAX_PLAYERS],
            structure_lists: vec![Vec::new(); MAX_PLAYERS],
            catalog,
            mission: MissionContext::HOME,
            next_droid_id: 1,
            next_structure_id: 1,
        }
    }

    /// The local player.
    #[must_use]
    pub fn selected_player(&self) -> PlayerId {
        self.selected_player
    }

    /// Current mission flags.
    #[must_use]
    pub fn mission(&self) -> MissionContext {
        self.mission
    }

    /// Replace the mission flags.
    pub fn set_mission(&mut self, mission: MissionContext) {
        self.mission = mission;
    }

    /// The structure catalog.
    #[must_use]
    pub fn catalog(&self) -> &StructureCatalog {
        &self.catalog
    }

    /// The structure catalog, mutable.
    pub fn catalog_mut(&mut self) -> &mut StructureCatalog {
        &mut self.catalog
    }

    /// Droids of a player, oldest first. Unknown players have none.
    #[must_use]
    pub fn droids(&self, player: PlayerId) -> &[Droid] {
        self.droid_lists
            .get(player.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Structures of a player, oldest first. Unknown players have none.
    #[must_use]
    pub fn structures(&self, player: PlayerId) -> &[Structure] {
        self.structure_lists
            .get(player.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a droid of any player.
    #[must_use]
    pub fn droid(&self, id: DroidId) -> Option<&Droid> {
        self.droid_lists.iter().flatten().find(|d| d.id == id)
    }

    /// Find a droid of any player, mutable.
    pub fn droid_mut(&mut self, id: DroidId) -> Option<&mut Droid> {
        self.droid_lists.iter_mut().flatten().find(|d| d.id == id)
    }

    /// Find a structure of any player.
    #[must_use]
    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structure_lists.iter().flatten().find(|s| s.id == id)
    }

    /// Create a droid at the end of its owner's list.
    pub fn spawn_droid(
        &mut self,
        player: PlayerId,
        droid_type: DroidType,
        position: Vec2Fixed,
    ) -> Result<DroidId> {
        let list = self
            .droid_lists
            .get_mut(player.index())
            .ok_or(GameError::InvalidPlayer(player.0))?;

        let id = DroidId(self.next_droid_id);
        self.next_droid_id += 1;
        list.push(Droid::new(id, player, droid_type, position));
        debug!("Spawned {id} ({droid_type:?}) for {player}");
        Ok(id)
    }

    /// Mark a droid dead. It stays in its list, like a corpse awaiting
    /// cleanup.
    pub fn kill_droid(&mut self, id: DroidId, tick: u32) -> Result<()> {
        let droid = self.droid_mut(id).ok_or(GameError::UnknownDroid(id))?;
        droid.died = Some(tick);
        droid.selected = false;
        Ok(())
    }

    /// Give a droid a new order and action.
    pub fn set_droid_order(&mut self, id: DroidId, order: Order, action: DroidAction) -> Result<()> {
        let droid = self.droid_mut(id).ok_or(GameError::UnknownDroid(id))?;
        droid.order = order;
        droid.action = action;
        Ok(())
    }

    /// Create a structure and count it against the owner's build limit.
    pub fn add_structure(
        &mut self,
        player: PlayerId,
        stats: StructureStatsId,
        status: StructureStatus,
    ) -> Result<StructureId> {
        if !player.is_valid() {
            return Err(GameError::InvalidPlayer(player.0));
        }
        let entry = self
            .catalog
            .get_mut(stats)
            .ok_or(GameError::UnknownStructureStats(stats))?;
        entry.cur_count[player.index()] += 1;

        let id = StructureId(self.next_structure_id);
        self.next_structure_id += 1;
        self.structure_lists[player.index()].push(Structure {
            id,
            player,
            stats,
            status,
        });
        Ok(id)
    }

    /// Change the construction state of a structure.
    pub fn set_structure_status(&mut self, id: StructureId, status: StructureStatus) -> Result<()> {
        let structure = self
            .structure_lists
            .iter_mut()
            .flatten()
            .find(|s| s.id == id)
            .ok_or(GameError::UnknownStructure(id))?;
        structure.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StructureStats, StructureType};

    fn catalog() -> StructureCatalog {
        let mut catalog = StructureCatalog::new();
        catalog.push(StructureStats::new(
            "factory",
            "Factory",
            StructureType::Factory,
            250,
        ));
        catalog
    }

    #[test]
    fn test_droids_kept_in_creation_order() {
        let mut world = World::new(PlayerId(0), catalog());
        let a = world
            .spawn_droid(PlayerId(0), DroidType::Construct, Vec2Fixed::ZERO)
            .unwrap();
        let b = world
            .spawn_droid(PlayerId(0), DroidType::Weapon, Vec2Fixed::ZERO)
            .unwrap();
        let c = world
            .spawn_droid(PlayerId(1), DroidType::Construct, Vec2Fixed::ZERO)
            .unwrap();

        let ids: Vec<_> = world.droids(PlayerId(0)).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(world.droid(c).map(|d| d.player), Some(PlayerId(1)));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_spawn_for_invalid_player_fails() {
        let mut world = World::new(PlayerId(0), catalog());
        let result = world.spawn_droid(PlayerId(42), DroidType::Construct, Vec2Fixed::ZERO);
        assert!(matches!(result, Err(GameError::InvalidPlayer(42))));
        assert!(world.droids(PlayerId(42)).is_empty());
    }

    #[test]
    fn test_kill_droid_clears_selection() {
        let mut world = World::new(PlayerId(0), catalog());
        let id = world
            .spawn_droid(PlayerId(0), DroidType::Construct, Vec2Fixed::ZERO)
            .unwrap();
        world.droid_mut(id).unwrap().selected = true;

        world.kill_droid(id, 50).unwrap();

        let droid = world.droid(id).unwrap();
        assert_eq!(droid.died, Some(50));
        assert!(!droid.selected);
        assert!(world.kill_droid(DroidId(999), 1).is_err());
    }

    #[test]
    fn test_add_structure_counts_against_limit() {
        let mut world = World::new(PlayerId(0), catalog());
        let factory = StructureStatsId(0);

        let id = world
            .add_structure(PlayerId(2), factory, StructureStatus::BeingBuilt)
            .unwrap();

        assert_eq!(world.catalog().get(factory).unwrap().cur_count[2], 1);
        assert_eq!(world.structures(PlayerId(2)).len(), 1);
        assert!(!world.structure(id).unwrap().is_built());

        world
            .set_structure_status(id, StructureStatus::Built)
            .unwrap();
        assert!(world.structure(id).unwrap().is_built());
    }

    #[test]
    fn test_add_structure_with_unknown_stats_fails() {
        let mut world = World::new(PlayerId(0), catalog());
        let result = world.add_structure(PlayerId(0), StructureStatsId(5), StructureStatus::Built);
        assert!(matches!(result, Err(GameError::UnknownStructureStats(_))));
    }
}
