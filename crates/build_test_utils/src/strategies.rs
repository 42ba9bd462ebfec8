//! Proptest strategies.
//!
//! These strategies generate random but reproducible game states for
//! property-based testing of the build interface.

use build_core::components::{PlayerId, StructureStatsId};
use build_core::droid::DroidType;
use build_core::mission::MissionContext;
use build_core::stats::{Availability, StructureCatalog, StructureStats, StructureType};
use build_core::structure::StructureStatus;
use build_core::world::World;
use proptest::prelude::*;

use crate::fixtures::{pos, LOCAL};

/// Generate any droid type.
pub fn arb_droid_type() -> impl Strategy<Value = DroidType> {
    prop_oneof![
        Just(DroidType::Weapon),
        Just(DroidType::Sensor),
        Just(DroidType::Construct),
        Just(DroidType::CyborgConstruct),
        Just(DroidType::Cyborg),
        Just(DroidType::CyborgRepair),
        Just(DroidType::Repair),
        Just(DroidType::Transporter),
    ]
}

/// Generate any availability.
pub fn arb_availability() -> impl Strategy<Value = Availability> {
    prop_oneof![
        Just(Availability::Unavailable),
        Just(Availability::Available),
        Just(Availability::Redundant),
    ]
}

/// Generate any structure type.
pub fn arb_structure_type() -> impl Strategy<Value = StructureType> {
    prop_oneof![
        Just(StructureType::Hq),
        Just(StructureType::Factory),
        Just(StructureType::FactoryModule),
        Just(StructureType::PowerGen),
        Just(StructureType::PowerModule),
        Just(StructureType::ResourceExtractor),
        Just(StructureType::Defense),
        Just(StructureType::Wall),
        Just(StructureType::WallCorner),
        Just(StructureType::Research),
        Just(StructureType::ResearchModule),
        Just(StructureType::Demolish),
        Just(StructureType::CyborgFactory),
        Just(StructureType::VtolFactory),
    ]
}

/// Generate mission flags.
pub fn arb_mission() -> impl Strategy<Value = MissionContext> {
    (any::<bool>(), any::<bool>()).prop_map(|(offworld, tutorial)| MissionContext {
        offworld,
        tutorial,
    })
}

/// Parameters for one droid in a generated world.
#[derive(Debug, Clone)]
pub struct DroidParams {
    /// Owner slot, local player or another.
    pub player: PlayerId,
    /// Droid type.
    pub droid_type: DroidType,
    /// Dead at start.
    pub dead: bool,
    /// Flagged selected at start.
    pub selected: bool,
}

/// Generate parameters for a droid.
pub fn arb_droid_params() -> impl Strategy<Value = DroidParams> {
    (
        prop_oneof![3 => Just(LOCAL), 1 => (1u8..4).prop_map(PlayerId)],
        arb_droid_type(),
        proptest::bool::weighted(0.25),
        proptest::bool::weighted(0.2),
    )
        .prop_map(|(player, droid_type, dead, selected)| DroidParams {
            player,
            droid_type,
            dead,
            selected,
        })
}

/// Generate a catalog entry with a local-player availability, limit and
/// count.
pub fn arb_structure_stats() -> impl Strategy<Value = StructureStats> {
    (
        arb_structure_type(),
        arb_availability(),
        0u32..3,
        0u32..3,
        any::<bool>(),
        0u32..500,
    )
        .prop_map(|(structure_type, availability, limit, count, favorite, power)| {
            let mut stats = StructureStats::new("generated", "Generated", structure_type, power)
                .with_limit(limit)
                .with_favorite(favorite);
            stats.availability[LOCAL.index()] = availability;
            stats.cur_count[LOCAL.index()] = count;
            stats
        })
}

/// Generate a catalog of up to `max_len` entries with unique ids.
pub fn arb_catalog(max_len: usize) -> impl Strategy<Value = StructureCatalog> {
    proptest::collection::vec(arb_structure_stats(), 0..max_len).prop_map(|entries| {
        let mut catalog = StructureCatalog::new();
        for (i, mut stats) in entries.into_iter().enumerate() {
            stats.id = format!("generated{i}");
            catalog.push(stats);
        }
        catalog
    })
}

/// Generate a whole world: catalog, some finished structures, droids and
/// mission flags.
pub fn arb_world() -> impl Strategy<Value = World> {
    (
        arb_catalog(24),
        proptest::collection::vec(arb_droid_params(), 0..12),
        proptest::collection::vec((0usize..24, any::<bool>()), 0..6),
        arb_mission(),
    )
        .prop_map(|(catalog, droids, structures, mission)| {
            let catalog_len = catalog.len();
            let mut world = World::new(LOCAL, catalog);
            world.set_mission(mission);

            for (index, built) in structures {
                if index >= catalog_len {
                    continue;
                }
                let status = if built {
                    StructureStatus::Built
                } else {
                    StructureStatus::BeingBuilt
                };
                let stats = StructureStatsId(index);
                // Built counts are part of the generated stats; keep them as drawn.
                if world.add_structure(LOCAL, stats, status).is_ok() {
                    if let Some(entry) = world.catalog_mut().get_mut(stats) {
                        entry.cur_count[LOCAL.index()] -= 1;
                    }
                }
            }

            for (i, params) in droids.iter().enumerate() {
                let coordinate = i32::try_from(i).unwrap_or(0);
                let spawned = world.spawn_droid(params.player, params.droid_type, pos(coordinate, 0));
                if let Ok(id) = spawned {
                    if let Some(droid) = world.droid_mut(id) {
                        droid.selected = params.selected;
                    }
                    if params.dead {
                        let _ = world.kill_droid(id, 1);
                    }
                }
            }

            world
        })
}
