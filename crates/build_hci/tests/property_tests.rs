//! Property-based tests for the build interface lists.

use std::cell::RefCell;
use std::rc::Rc;

use build_core::components::{DroidId, StructureStatsId};
use build_core::stats::{Availability, StructureType};
use build_core::world::World;
use build_hci::controller::{BuildInterfaceController, SharedController};
use build_hci::host::HeadlessHost;
use build_hci::settings::BuildMenuSettings;
use build_test_utils::fixtures::LOCAL;
use build_test_utils::strategies::arb_world;
use proptest::prelude::*;

fn controller_for(
    world: World,
    settings: BuildMenuSettings,
) -> (Rc<RefCell<World>>, SharedController) {
    let world = Rc::new(RefCell::new(world));
    let host = Rc::new(RefCell::new(HeadlessHost::new()));
    let controller = BuildInterfaceController::new(world.clone(), host, settings);
    (world, controller)
}

fn settings(show_redundant_designs: bool, show_favorites_only: bool) -> BuildMenuSettings {
    BuildMenuSettings {
        show_redundant_designs,
        show_favorites_only,
        favorites: Vec::new(),
    }
}

/// Builders written out longhand: newest first, alive, local, constructors.
fn expected_builders(world: &World) -> Vec<DroidId> {
    let mut builders: Vec<DroidId> = world
        .droids(LOCAL)
        .iter()
        .filter(|d| d.died.is_none())
        .filter(|d| {
            matches!(
                d.droid_type,
                build_core::droid::DroidType::Construct
                    | build_core::droid::DroidType::CyborgConstruct
            )
        })
        .map(|d| d.id)
        .collect();
    builders.reverse();
    builders
}

/// Build options written out longhand, one rule per line.
fn expected_options(world: &World, settings: &BuildMenuSettings) -> Vec<StructureStatsId> {
    let mission = world.mission();
    let catalog = world.catalog();
    let base_built = |base: StructureType| {
        !mission.offworld
            && world.structures(LOCAL).iter().any(|s| {
                s.is_built() && catalog.get(s.stats).map(|c| c.structure_type) == Some(base)
            })
    };

    catalog
        .iter()
        .filter(|s| {
            let local = LOCAL.index();
            let available = match s.availability[local] {
                Availability::Available => true,
                Availability::Redundant => settings.show_redundant_designs,
                Availability::Unavailable => false,
            };
            let under_limit = s.cur_count[local] < s.limit[local];
            let shown_here = match s.structure_type {
                StructureType::WallCorner => false,
                StructureType::Demolish => !mission.tutorial,
                StructureType::Factory
                | StructureType::PowerGen
                | StructureType::ResourceExtractor
                | StructureType::Research
                | StructureType::CyborgFactory
                | StructureType::VtolFactory => !mission.offworld,
                StructureType::ResearchModule => base_built(StructureType::Research),
                StructureType::FactoryModule => base_built(StructureType::Factory),
                StructureType::PowerModule => base_built(StructureType::PowerGen),
                _ => true,
            };
            let favorite_ok = !settings.show_favorites_only || s.is_favorite;
            available && under_limit && shown_here && favorite_ok
        })
        .map(|s| s.index)
        .collect()
}

proptest! {
    #[test]
    fn prop_builder_list_is_live_local_constructors_newest_first(world in arb_world()) {
        let expected = expected_builders(&world);
        let (_world, controller) = controller_for(world, BuildMenuSettings::default());

        controller.borrow_mut().refresh();

        let builders = controller.borrow().builders().to_vec();
        prop_assert!(builders.windows(2).all(|w| w[0].0 > w[1].0));
        prop_assert_eq!(builders, expected);
    }

    #[test]
    fn prop_build_options_match_filters(
        world in arb_world(),
        redundant in any::<bool>(),
        favorites in any::<bool>(),
    ) {
        let settings = settings(redundant, favorites);
        let expected = expected_options(&world, &settings);
        let (_world, controller) = controller_for(world, settings);

        controller.borrow_mut().update_build_options_list();

        let options = controller.borrow().build_options().to_vec();
        prop_assert_eq!(options, expected);
    }

    #[test]
    fn prop_refresh_is_idempotent(
        world in arb_world(),
        redundant in any::<bool>(),
        favorites in any::<bool>(),
    ) {
        let (_world, controller) = controller_for(world, settings(redundant, favorites));

        controller.borrow_mut().refresh();
        let first = (
            controller.borrow().builders().to_vec(),
            controller.borrow().build_options().to_vec(),
            controller.borrow().selected_builder(),
        );
        controller.borrow_mut().refresh();
        let second = (
            controller.borrow().builders().to_vec(),
            controller.borrow().build_options().to_vec(),
            controller.borrow().selected_builder(),
        );

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_selection_survives_a_builder_death(
        world in arb_world(),
        victim in any::<prop::sample::Index>(),
    ) {
        let (world, controller) = controller_for(world, BuildMenuSettings::default());
        controller.borrow_mut().refresh();
        let builders = controller.borrow().builders().to_vec();
        prop_assume!(!builders.is_empty());

        let dead = builders[victim.index(builders.len())];
        controller.borrow_mut().set_selected_builder(Some(dead));
        world.borrow_mut().kill_droid(dead, 50).unwrap();
        controller.borrow_mut().refresh();

        let remaining: Vec<DroidId> = builders.iter().copied().filter(|&id| id != dead).collect();
        let selected = controller.borrow().selected_builder();
        if remaining.is_empty() {
            prop_assert_eq!(selected, Some(dead));
        } else {
            let flagged = remaining
                .iter()
                .copied()
                .find(|&id| world.borrow().droid(id).is_some_and(|d| d.selected));
            prop_assert_eq!(selected, Some(flagged.unwrap_or(remaining[0])));
        }
    }
}
