//! Test fixtures and helpers.
//!
//! Pre-built catalogs and worlds for consistent testing.

use std::cell::RefCell;
use std::rc::Rc;

use build_core::components::{DroidId, PlayerId, StructureId, StructureStatsId, MAX_PLAYERS};
use build_core::droid::{DroidAction, DroidType};
use build_core::math::Vec2Fixed;
use build_core::mission::MissionContext;
use build_core::order::Order;
use build_core::stats::{Availability, StructureCatalog, StructureStats, StructureType};
use build_core::structure::StructureStatus;
use build_core::world::World;
use fixed::types::I32F32;

/// The local player in fixtures.
pub const LOCAL: PlayerId = PlayerId(0);

/// Another player in fixtures.
pub const ENEMY: PlayerId = PlayerId(1);

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a position from whole world units.
#[must_use]
pub fn pos(x: i32, y: i32) -> Vec2Fixed {
    Vec2Fixed::new(fixed(x), fixed(y))
}

/// Indices of the entries in [`standard_catalog`].
pub mod ids {
    use build_core::components::StructureStatsId;

    /// Headquarters.
    pub const HQ: StructureStatsId = StructureStatsId(0);
    /// Factory.
    pub const FACTORY: StructureStatsId = StructureStatsId(1);
    /// Factory module.
    pub const FACTORY_MODULE: StructureStatsId = StructureStatsId(2);
    /// Research facility.
    pub const RESEARCH: StructureStatsId = StructureStatsId(3);
    /// Research module.
    pub const RESEARCH_MODULE: StructureStatsId = StructureStatsId(4);
    /// Power generator.
    pub const POWER_GEN: StructureStatsId = StructureStatsId(5);
    /// Power module.
    pub const POWER_MODULE: StructureStatsId = StructureStatsId(6);
    /// Oil derrick.
    pub const DERRICK: StructureStatsId = StructureStatsId(7);
    /// Hardcrete wall.
    pub const WALL: StructureStatsId = StructureStatsId(8);
    /// Wall corner.
    pub const WALL_CORNER: StructureStatsId = StructureStatsId(9);
    /// Machinegun tower, superseded.
    pub const MG_TOWER: StructureStatsId = StructureStatsId(10);
    /// Heavy machinegun bunker.
    pub const HMG_BUNKER: StructureStatsId = StructureStatsId(11);
    /// Cyborg factory.
    pub const CYBORG_FACTORY: StructureStatsId = StructureStatsId(12);
    /// Demolish pseudo-stat.
    pub const DEMOLISH: StructureStatsId = StructureStatsId(13);
}

/// A small campaign-like catalog, everything available to every player
/// except the machinegun tower, which is redundant.
///
/// The HQ is limited to one per player.
#[must_use]
pub fn standard_catalog() -> StructureCatalog {
    let entries = [
        ("A0CommandCentre", "Command Center", StructureType::Hq, 100),
        ("A0LightFactory", "Factory", StructureType::Factory, 250),
        ("A0FacMod1", "Factory Module", StructureType::FactoryModule, 225),
        ("A0ResearchFacility", "Research Facility", StructureType::Research, 100),
        ("A0ResearchModule1", "Research Module", StructureType::ResearchModule, 125),
        ("A0PowerGen", "Power Generator", StructureType::PowerGen, 250),
        ("A0PowMod1", "Power Module", StructureType::PowerModule, 125),
        ("A0ResourceExtractor", "Oil Derrick", StructureType::ResourceExtractor, 50),
        ("A0HardcreteMk1Wall", "Hardcrete Wall", StructureType::Wall, 20),
        ("WallCorner", "Hardcrete Corner", StructureType::WallCorner, 20),
        ("GuardTower1", "Heavy Machinegun Guard Tower", StructureType::Defense, 60),
        ("PillBox1", "Heavy Machinegun Bunker", StructureType::Defense, 125),
        ("A0CyborgFactory", "Cyborg Factory", StructureType::CyborgFactory, 200),
        ("Demolish", "Demolish Structure", StructureType::Demolish, 0),
    ];

    let mut catalog = StructureCatalog::new();
    for (id, name, structure_type, power) in entries {
        let mut stats = StructureStats::new(id, name, structure_type, power)
            .with_availability(Availability::Available);
        if structure_type == StructureType::Hq {
            stats = stats.with_limit(1);
        }
        catalog.push(stats);
    }
    if let Some(tower) = catalog.get_mut(ids::MG_TOWER) {
        tower.availability = [Availability::Redundant; MAX_PLAYERS];
    }
    catalog
}

/// Builder for test worlds.
///
/// ```ignore
/// let (world, droids) = WorldBuilder::new()
///     .builder(pos(1, 1))
///     .builder(pos(2, 2))
///     .build();
/// ```
pub struct WorldBuilder {
    world: World,
    droids: Vec<DroidId>,
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder {
    /// Start from the standard catalog with [`LOCAL`] as the local player.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(standard_catalog())
    }

    /// Start from a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: StructureCatalog) -> Self {
        Self {
            world: World::new(LOCAL, catalog),
            droids: Vec::new(),
        }
    }

    /// Add a droid of any type for any player.
    ///
    /// # Panics
    ///
    /// Panics if the player is out of range.
    #[must_use]
    pub fn droid(mut self, player: PlayerId, droid_type: DroidType, position: Vec2Fixed) -> Self {
        let id = self
            .world
            .spawn_droid(player, droid_type, position)
            .expect("valid fixture player");
        self.droids.push(id);
        self
    }

    /// Add a construction droid for the local player.
    #[must_use]
    pub fn builder(self, position: Vec2Fixed) -> Self {
        self.droid(LOCAL, DroidType::Construct, position)
    }

    /// Add a cyborg engineer for the local player.
    #[must_use]
    pub fn cyborg_builder(self, position: Vec2Fixed) -> Self {
        self.droid(LOCAL, DroidType::CyborgConstruct, position)
    }

    /// Add a finished structure for the local player.
    ///
    /// # Panics
    ///
    /// Panics if the stats index is not in the catalog.
    #[must_use]
    pub fn structure(mut self, stats: StructureStatsId) -> Self {
        self.world
            .add_structure(LOCAL, stats, StructureStatus::Built)
            .expect("valid fixture stats");
        self
    }

    /// Set the mission flags.
    #[must_use]
    pub fn mission(mut self, mission: MissionContext) -> Self {
        self.world.set_mission(mission);
        self
    }

    /// Finish, returning the world and the droid ids in creation order.
    #[must_use]
    pub fn build(self) -> (World, Vec<DroidId>) {
        (self.world, self.droids)
    }

    /// Finish with the world wrapped for sharing with a controller.
    #[must_use]
    pub fn build_shared(self) -> (Rc<RefCell<World>>, Vec<DroidId>) {
        let (world, droids) = self.build();
        (Rc::new(RefCell::new(world)), droids)
    }
}

/// Send a droid towards a new build site.
///
/// # Panics
///
/// Panics if the droid doesn't exist.
pub fn order_move_to_build(world: &mut World, droid: DroidId, stats: StructureStatsId) {
    world
        .set_droid_order(droid, Order::build(stats, pos(10, 10)), DroidAction::MoveToBuild)
        .expect("fixture droid");
}

/// Lay a foundation for `stats` and put the droid to work on it.
///
/// # Panics
///
/// Panics if the droid or stats don't exist.
pub fn order_build(world: &mut World, droid: DroidId, stats: StructureStatsId) -> StructureId {
    let site = world
        .add_structure(LOCAL, stats, StructureStatus::BeingBuilt)
        .expect("fixture stats");
    world
        .set_droid_order(
            droid,
            Order::build(stats, pos(10, 10)).with_target(site),
            DroidAction::Build,
        )
        .expect("fixture droid");
    site
}

/// Put the droid to work helping on an existing structure.
///
/// # Panics
///
/// Panics if the droid doesn't exist.
pub fn order_help_build(world: &mut World, droid: DroidId, site: StructureId) {
    world
        .set_droid_order(droid, Order::help_build(site), DroidAction::Build)
        .expect("fixture droid");
}

/// Put the droid to work demolishing a structure.
///
/// # Panics
///
/// Panics if the droid doesn't exist.
pub fn order_demolish(world: &mut World, droid: DroidId, site: StructureId) {
    world
        .set_droid_order(droid, Order::demolish(site), DroidAction::Demolish)
        .expect("fixture droid");
}
