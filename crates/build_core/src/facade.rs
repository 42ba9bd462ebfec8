//! The game-state interface the build interface is written against.
//!
//! The build menu never reaches into global lists. Everything it reads or
//! changes goes through `GameFacade`, which is handed to it at
//! construction. The menu only selects droids and marks favorites, so
//! those are the only mutations offered.

use crate::components::{DroidId, PlayerId, StructureId, StructureStatsId};
use crate::droid::Droid;
use crate::error::{GameError, Result};
use crate::mission::MissionContext;
use crate::stats::StructureCatalog;
use crate::structure::Structure;
use crate::world::World;

/// Read access to game state plus the mutations the build menu performs.
pub trait GameFacade {
    /// The local player.
    fn selected_player(&self) -> PlayerId;

    /// Droids of a player, oldest first.
    fn droids(&self, player: PlayerId) -> &[Droid];

    /// Find a droid of any player.
    fn droid(&self, id: DroidId) -> Option<&Droid>;

    /// Structures of a player, oldest first.
    fn structures(&self, player: PlayerId) -> &[Structure];

    /// Find a structure of any player.
    fn structure(&self, id: StructureId) -> Option<&Structure>;

    /// The structure catalog.
    fn catalog(&self) -> &StructureCatalog;

    /// Current mission flags.
    fn mission(&self) -> MissionContext;

    /// Clear the selection flag on every droid of the local player.
    fn clear_selection(&mut self);

    /// Set the selection flag of a droid.
    ///
    /// # Errors
    /// Returns an error if the droid doesn't exist.
    fn set_droid_selected(&mut self, id: DroidId, selected: bool) -> Result<()>;

    /// Set the favorite flag of a catalog entry.
    ///
    /// # Errors
    /// Returns an error if the entry doesn't exist.
    fn set_favorite(&mut self, stats: StructureStatsId, favorite: bool) -> Result<()>;
}

impl GameFacade for World {
    fn selected_player(&self) -> PlayerId {
        World::selected_player(self)
    }

    fn droids(&self, player: PlayerId) -> &[Droid] {
        World::droids(self, player)
    }

    fn droid(&self, id: DroidId) -> Option<&Droid> {
        World::droid(self, id)
    }

    fn structures(&self, player: PlayerId) -> &[Structure] {
        World::structures(self, player)
    }

    fn structure(&self, id: StructureId) -> Option<&Structure> {
        World::structure(self, id)
    }

    fn catalog(&self) -> &StructureCatalog {
        World::catalog(self)
    }

    fn mission(&self) -> MissionContext {
        World::mission(self)
    }

    fn clear_selection(&mut self) {
        let player = World::selected_player(self);
        let ids: Vec<DroidId> = World::droids(self, player).iter().map(|d| d.id).collect();
        for id in ids {
            if let Some(droid) = self.droid_mut(id) {
                droid.selected = false;
            }
        }
    }

    fn set_droid_selected(&mut self, id: DroidId, selected: bool) -> Result<()> {
        let droid = self.droid_mut(id).ok_or(GameError::UnknownDroid(id))?;
        droid.selected = selected;
        Ok(())
    }

    fn set_favorite(&mut self, stats: StructureStatsId, favorite: bool) -> Result<()> {
        let entry = self
            .catalog_mut()
            .get_mut(stats)
            .ok_or(GameError::UnknownStructureStats(stats))?;
        entry.is_favorite = favorite;
        Ok(())
    }
}
