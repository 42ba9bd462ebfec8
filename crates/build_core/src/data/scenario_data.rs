//! Scenario definitions: a catalog plus the droids and structures on the map.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::{PlayerId, StructureId, StructureStatsId};
use crate::droid::{DroidAction, DroidType};
use crate::error::{GameError, Result};
use crate::math::Vec2Fixed;
use crate::mission::MissionContext;
use crate::order::Order;
use crate::stats::{Availability, StructureCatalog, StructureStats, StructureType};
use crate::structure::StructureStatus;
use crate::world::World;

/// A complete scenario.
///
/// # Example RON
///
/// ```ron
/// ScenarioData(
///     selected_player: 0,
///     structure_stats: [
///         StructureStatsData(id: "A0PowerGen", name: "Power Generator",
///             structure_type: PowerGen, power: 250, available_to: [0]),
///     ],
///     structures: [StructureData(player: 0, structure: "A0PowerGen")],
///     droids: [DroidData(player: 0, droid_type: Construct, position: (1024, 2048))],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioData {
    /// The local player.
    pub selected_player: u8,

    /// Mission flags.
    #[serde(default)]
    pub mission: MissionContext,

    /// Catalog entries in catalog order.
    pub structure_stats: Vec<StructureStatsData>,

    /// Structures on the map, oldest first.
    #[serde(default)]
    pub structures: Vec<StructureData>,

    /// Droids on the map, oldest first.
    #[serde(default)]
    pub droids: Vec<DroidData>,
}

/// Data-driven catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureStatsData {
    /// Unique string identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category.
    pub structure_type: StructureType,

    /// Power cost.
    #[serde(default)]
    pub power: u32,

    /// Players for whom the structure is available.
    #[serde(default)]
    pub available_to: Vec<u8>,

    /// Players for whom the structure is redundant.
    #[serde(default)]
    pub redundant_for: Vec<u8>,

    /// Per-player build limit. Defaults to the catalog default.
    #[serde(default)]
    pub limit: Option<u32>,

    /// Starts out as a favorite.
    #[serde(default)]
    pub favorite: bool,
}

/// A structure on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureData {
    /// Owning player.
    pub player: u8,

    /// Catalog id of the structure type.
    pub structure: String,

    /// Construction state.
    #[serde(default)]
    pub status: StructureStatus,
}

/// A droid on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroidData {
    /// Owning player.
    pub player: u8,

    /// Body/role classification.
    pub droid_type: DroidType,

    /// Position in whole world units.
    #[serde(default)]
    pub position: (i32, i32),

    /// What the droid is doing.
    #[serde(default)]
    pub order: OrderData,

    /// Selected at start.
    #[serde(default)]
    pub selected: bool,

    /// Already destroyed (game tick of death).
    #[serde(default)]
    pub died: Option<u32>,
}

/// A droid's order. Sites are indices into [`ScenarioData::structures`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderData {
    /// Idle.
    #[default]
    None,
    /// On the way to lay a new foundation.
    MoveToBuild {
        /// Catalog id of the structure type.
        structure: String,
        /// Build location in whole world units.
        at: (i32, i32),
    },
    /// Working on its own build order.
    Build {
        /// Index of the structure being built.
        site: usize,
    },
    /// Helping with a structure.
    HelpBuild {
        /// Index of the structure being helped.
        site: usize,
    },
    /// Working through a line of structures.
    LineBuild {
        /// Index of the current structure in the line.
        site: usize,
    },
    /// Demolishing a structure.
    Demolish {
        /// Index of the structure being demolished.
        site: usize,
    },
}

impl ScenarioData {
    /// Parse a scenario from RON text. `origin` names the source in errors.
    pub fn from_ron(text: &str, origin: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| GameError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Check cross references and player slots.
    ///
    /// Returns every problem found rather than stopping at the first.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let valid_player = |p: u8| PlayerId(p).is_valid();

        if !valid_player(self.selected_player) {
            errors.push(format!("selected_player {} is out of range", self.selected_player));
        }

        let mut ids = HashSet::new();
        let mut demolish_entries = 0;
        for stats in &self.structure_stats {
            if !ids.insert(stats.id.as_str()) {
                errors.push(format!("duplicate structure id '{}'", stats.id));
            }
            if stats.structure_type == StructureType::Demolish {
                demolish_entries += 1;
            }
            for &p in stats.available_to.iter().chain(&stats.redundant_for) {
                if !valid_player(p) {
                    errors.push(format!("'{}' lists invalid player {p}", stats.id));
                }
            }
            if let Some(p) = stats
                .available_to
                .iter()
                .find(|&&p| stats.redundant_for.contains(&p))
            {
                errors.push(format!(
                    "'{}' is both available and redundant for player {p}",
                    stats.id
                ));
            }
        }
        if demolish_entries > 1 {
            errors.push(format!("{demolish_entries} demolish entries, expected at most one"));
        }

        for (i, structure) in self.structures.iter().enumerate() {
            if !valid_player(structure.player) {
                errors.push(format!("structure {i} has invalid player {}", structure.player));
            }
            if !ids.contains(structure.structure.as_str()) {
                errors.push(format!(
                    "structure {i} uses unknown type '{}'",
                    structure.structure
                ));
            }
        }

        for (i, droid) in self.droids.iter().enumerate() {
            if !valid_player(droid.player) {
                errors.push(format!("droid {i} has invalid player {}", droid.player));
            }
            match &droid.order {
                OrderData::None => {}
                OrderData::MoveToBuild { structure, .. } => {
                    if !ids.contains(structure.as_str()) {
                        errors.push(format!("droid {i} builds unknown type '{structure}'"));
                    }
                }
                OrderData::Build { site }
                | OrderData::HelpBuild { site }
                | OrderData::LineBuild { site }
                | OrderData::Demolish { site } => {
                    if *site >= self.structures.len() {
                        errors.push(format!("droid {i} targets missing structure {site}"));
                    }
                }
            }
        }

        errors
    }

    /// Build the world described by this scenario.
    pub fn into_world(self) -> Result<World> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(GameError::InvalidState(errors.join("; ")));
        }

        let mut catalog = StructureCatalog::new();
        for data in &self.structure_stats {
            catalog.push(data.to_stats());
        }

        let mut world = World::new(PlayerId(self.selected_player), catalog);
        world.set_mission(self.mission);

        let mut sites: Vec<(StructureId, StructureStatsId)> = Vec::new();
        for data in &self.structures {
            let stats = stats_index(world.catalog(), &data.structure)?;
            let id = world.add_structure(PlayerId(data.player), stats, data.status)?;
            sites.push((id, stats));
        }

        for data in self.droids {
            let position = Vec2Fixed::from_units(data.position.0, data.position.1);
            let id = world.spawn_droid(PlayerId(data.player), data.droid_type, position)?;

            let (order, action) = match data.order {
                OrderData::None => (Order::none(), DroidAction::None),
                OrderData::MoveToBuild { structure, at } => {
                    let stats = stats_index(world.catalog(), &structure)?;
                    (
                        Order::build(stats, Vec2Fixed::from_units(at.0, at.1)),
                        DroidAction::MoveToBuild,
                    )
                }
                OrderData::Build { site } => {
                    let (target, stats) = sites[site];
                    (
                        Order::build(stats, position).with_target(target),
                        DroidAction::Build,
                    )
                }
                OrderData::HelpBuild { site } => {
                    (Order::help_build(sites[site].0), DroidAction::Build)
                }
                OrderData::LineBuild { site } => {
                    let (target, stats) = sites[site];
                    (
                        Order::line_build(stats, position).with_target(target),
                        DroidAction::Build,
                    )
                }
                OrderData::Demolish { site } => {
                    (Order::demolish(sites[site].0), DroidAction::Demolish)
                }
            };
            world.set_droid_order(id, order, action)?;

            if let Some(droid) = world.droid_mut(id) {
                droid.selected = data.selected;
                droid.died = data.died;
            }
        }

        Ok(world)
    }
}

impl StructureStatsData {
    /// Turn the data entry into a catalog entry.
    #[must_use]
    pub fn to_stats(&self) -> StructureStats {
        let mut stats = StructureStats::new(
            self.id.clone(),
            self.name.clone(),
            self.structure_type,
            self.power,
        )
        .with_favorite(self.favorite);

        if let Some(limit) = self.limit {
            stats = stats.with_limit(limit);
        }
        for &p in &self.available_to {
            stats.availability[PlayerId(p).index()] = Availability::Available;
        }
        for &p in &self.redundant_for {
            stats.availability[PlayerId(p).index()] = Availability::Redundant;
        }
        stats
    }
}

fn stats_index(catalog: &StructureCatalog, id: &str) -> Result<StructureStatsId> {
    catalog
        .find(id)
        .map(|s| s.index)
        .ok_or_else(|| GameError::InvalidState(format!("unknown structure type '{id}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
ScenarioData(
    selected_player: 0,
    structure_stats: [
        StructureStatsData(id: "A0LightFactory", name: "Factory", structure_type: Factory, power: 250, available_to: [0]),
        StructureStatsData(id: "A0HardcreteMk1Wall", name: "Hardcrete Wall", structure_type: Wall, power: 20, available_to: [0], favorite: true),
        StructureStatsData(id: "Demolish", name: "Demolish Structure", structure_type: Demolish, available_to: [0]),
    ],
    structures: [
        StructureData(player: 0, structure: "A0LightFactory", status: BeingBuilt),
    ],
    droids: [
        DroidData(player: 0, droid_type: Construct, position: (10, 20), order: Build(site: 0)),
        DroidData(player: 0, droid_type: CyborgConstruct, order: Demolish(site: 0), selected: true),
        DroidData(player: 1, droid_type: Weapon, died: Some(30)),
    ],
)
"#;

    #[test]
    fn test_parse_and_build_world() {
        let scenario = ScenarioData::from_ron(SCENARIO, "inline").expect("parse");
        assert!(scenario.validate().is_empty());

        let world = scenario.into_world().expect("world");
        let catalog = world.catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.find("A0HardcreteMk1Wall").unwrap().is_favorite);
        assert_eq!(catalog.find("A0LightFactory").unwrap().cur_count[0], 1);

        let droids = world.droids(PlayerId(0));
        assert_eq!(droids.len(), 2);
        assert_eq!(droids[0].position, Vec2Fixed::from_units(10, 20));
        assert!(droids[0].construction_target().is_some());
        assert!(droids[1].is_demolishing());
        assert!(droids[1].selected);
        assert_eq!(world.droids(PlayerId(1))[0].died, Some(30));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = ScenarioData::from_ron("ScenarioData(", "broken.ron").unwrap_err();
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut scenario = ScenarioData::from_ron(SCENARIO, "inline").unwrap();
        scenario.selected_player = 20;
        scenario.structure_stats[1].id = "A0LightFactory".to_string();
        scenario.droids[0].order = OrderData::HelpBuild { site: 9 };

        let errors = scenario.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(scenario.into_world().is_err());
    }

    #[test]
    fn test_available_and_redundant_conflict() {
        let mut scenario = ScenarioData::from_ron(SCENARIO, "inline").unwrap();
        scenario.structure_stats[0].redundant_for = vec![0];
        let errors = scenario.validate();
        assert!(errors.iter().any(|e| e.contains("both available and redundant")));
    }
}
