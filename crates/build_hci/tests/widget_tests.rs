use std::cell::RefCell;
use std::rc::Rc;

use build_core::components::DroidId;
use build_core::facade::GameFacade;
use build_core::world::World;
use build_hci::controller::{BuildInterfaceController, SharedController};
use build_hci::host::HeadlessHost;
use build_hci::mode::{MouseButton, PlacementMode};
use build_hci::settings::BuildMenuSettings;
use build_hci::widgets::{BarGraph, Button, ButtonFace, GAME_TICKS_PER_SEC};
use build_test_utils::fixtures::{ids, order_build, pos, WorldBuilder};

type Opened = (
    Rc<RefCell<World>>,
    Rc<RefCell<HeadlessHost>>,
    SharedController,
    Vec<DroidId>,
);

/// Controller with the interface already open.
fn open(builder: WorldBuilder) -> Opened {
    let (world, droids) = builder.build_shared();
    let host = Rc::new(RefCell::new(HeadlessHost::new()));
    let controller =
        BuildInterfaceController::new(world.clone(), host.clone(), BuildMenuSettings::default());
    controller.borrow_mut().refresh();
    assert!(controller.borrow_mut().show_interface());
    (world, host, controller, droids)
}

fn object_button(host: &Rc<RefCell<HeadlessHost>>, row: usize) -> Button {
    host.borrow().object_button(row).unwrap()
}

fn stats_button(host: &Rc<RefCell<HeadlessHost>>, row: usize) -> Button {
    host.borrow().activity_button(row).unwrap()
}

fn option_button(host: &Rc<RefCell<HeadlessHost>>, index: usize) -> Button {
    host.borrow().option_button(index).unwrap()
}

#[test]
fn object_buttons_show_live_builders() {
    let (world, host, _controller, droids) =
        open(WorldBuilder::new().builder(pos(1, 1)).builder(pos(2, 2)));

    assert_eq!(object_button(&host, 0).face(), ButtonFace::Droid(droids[1]));
    assert_eq!(object_button(&host, 1).face(), ButtonFace::Droid(droids[0]));

    // Until the next refresh the dead builder keeps its slot but shows nothing.
    world.borrow_mut().kill_droid(droids[1], 7).unwrap();
    assert_eq!(object_button(&host, 0).face(), ButtonFace::Empty);
}

#[test]
fn object_click_selects_and_jumps() {
    let (world, host, controller, droids) =
        open(WorldBuilder::new().builder(pos(3, 4)).builder(pos(9, 9)));

    object_button(&host, 1).clicked(MouseButton::Primary);

    assert_eq!(controller.borrow().selected_builder(), Some(droids[0]));
    assert!(world.borrow().droid(droids[0]).unwrap().selected);
    assert_eq!(host.borrow().camera(), pos(3, 4));
    assert!(object_button(&host, 1).is_selected());
    assert!(!object_button(&host, 0).is_selected());
}

#[test]
fn object_secondary_click_is_ignored() {
    let (_world, host, controller, droids) = open(WorldBuilder::new().builder(pos(3, 4)));
    controller.borrow_mut().set_selected_builder(None);

    object_button(&host, 0).clicked(MouseButton::Secondary);

    assert_eq!(controller.borrow().selected_builder(), None);
    assert!(!host.borrow().debugged().contains(&droids[0]));
}

#[test]
fn stats_click_selects_without_moving_camera() {
    let (_world, host, controller, droids) =
        open(WorldBuilder::new().builder(pos(3, 4)).builder(pos(9, 9)));

    stats_button(&host, 1).clicked(MouseButton::Primary);

    assert_eq!(controller.borrow().selected_builder(), Some(droids[0]));
    assert_eq!(host.borrow().camera(), pos(0, 0));
}

#[test]
fn stats_button_shows_activity_and_flag() {
    let (world, host, _controller, droids) =
        open(WorldBuilder::new().builder(pos(1, 1)).builder(pos(2, 2)));
    order_build(&mut world.borrow_mut(), droids[0], ids::FACTORY);

    let button = stats_button(&host, 1);
    assert_eq!(
        button.face(),
        ButtonFace::Structure {
            stats: ids::FACTORY,
            name: "Factory".to_string(),
        }
    );
    assert!(!button.is_selected());

    world.borrow_mut().set_droid_selected(droids[0], true).unwrap();
    assert!(button.is_selected());
    assert_eq!(stats_button(&host, 0).face(), ButtonFace::Empty);
}

#[test]
fn option_button_tooltip_and_cost_bar() {
    let (_world, host, _controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));

    let factory = option_button(&host, 1);
    assert_eq!(factory.tooltip().as_deref(), Some("Factory\nCost: 250"));
    assert_eq!(
        factory.cost_bar(),
        Some(BarGraph {
            major_size: 50,
            range: GAME_TICKS_PER_SEC,
        })
    );
    assert_eq!(object_button(&host, 0).tooltip(), None);
    assert_eq!(object_button(&host, 0).cost_bar(), None);
}

#[test]
fn option_highlight_follows_selected_builder_activity() {
    let (world, host, controller, droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    order_build(&mut world.borrow_mut(), droids[0], ids::RESEARCH);
    controller.borrow_mut().refresh();

    let highlighted: Vec<bool> = host
        .borrow()
        .stats_form()
        .unwrap()
        .option_buttons()
        .iter()
        .map(Button::is_selected)
        .collect();

    let research = controller
        .borrow()
        .build_options()
        .iter()
        .position(|&s| s == ids::RESEARCH)
        .unwrap();
    assert_eq!(highlighted.iter().filter(|&&h| h).count(), 1);
    assert!(highlighted[research]);
    assert_eq!(
        host.borrow().stats_form().unwrap().selected_stats(),
        Some(ids::RESEARCH)
    );
}

#[test]
fn cost_bar_is_not_clamped_to_its_range() {
    let mut catalog = build_core::stats::StructureCatalog::new();
    catalog.push(
        build_core::stats::StructureStats::new(
            "A0LasSatCommand",
            "Laser Satellite Command Post",
            build_core::stats::StructureType::Lassat,
            6000,
        )
        .with_availability(build_core::stats::Availability::Available),
    );
    let (_world, host, _controller, _droids) =
        open(WorldBuilder::with_catalog(catalog).builder(pos(1, 1)));

    let bar = option_button(&host, 0).cost_bar().unwrap();

    assert_eq!(bar.major_size, 1200);
    assert_eq!(bar.range, GAME_TICKS_PER_SEC);
}

#[test]
fn host_buttons_are_clickable_once_the_lookup_ends() {
    let (_world, host, _controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));

    let factory = host.borrow().option_button(1);
    factory.unwrap().clicked(MouseButton::Primary);

    assert_eq!(host.borrow().position_stats(), Some(ids::FACTORY));
    assert!(host.borrow().option_button(1).is_none());
    assert!(host.borrow().object_button(0).is_none());
}

#[test]
fn option_primary_click_starts_placement() {
    let (_world, host, _controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));

    option_button(&host, 1).clicked(MouseButton::Primary);

    let host = host.borrow();
    assert_eq!(host.placement_mode(), PlacementMode::BuildLocation);
    assert_eq!(host.position_stats(), Some(ids::FACTORY));
    assert!(!host.is_open());
}

#[test]
fn option_secondary_click_marks_favorite() {
    let (world, host, _controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));

    option_button(&host, 1).clicked(MouseButton::Secondary);

    assert!(world.borrow().catalog().get(ids::FACTORY).unwrap().is_favorite);
    assert!(host.borrow().is_open());
}

#[test]
fn stale_option_click_is_ignored() {
    let (world, host, controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    let last = controller.borrow().stats_len() - 1;
    let stale = option_button(&host, last);

    world.borrow_mut().set_favorite(ids::WALL, true).unwrap();
    controller.borrow_mut().set_should_show_favorites(true);
    controller.borrow_mut().refresh();
    stale.clicked(MouseButton::Primary);

    assert_eq!(host.borrow().placement_mode(), PlacementMode::None);
    assert!(host.borrow().is_open());
}

#[test]
fn obsolete_toggle_applies_on_next_refresh() {
    let (_world, host, controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    assert_eq!(
        host.borrow().stats_form().unwrap().obsolete_toggle().tip(),
        "Hiding Obsolete Tech"
    );

    host.borrow_mut().stats_form_mut().unwrap().click_obsolete();

    assert!(controller.borrow().should_show_redundant_designs());
    assert!(!controller.borrow().build_options().contains(&ids::MG_TOWER));
    assert_eq!(
        host.borrow().stats_form().unwrap().obsolete_toggle().tip(),
        "Showing Obsolete Tech"
    );

    controller.borrow_mut().refresh();
    assert!(controller.borrow().build_options().contains(&ids::MG_TOWER));
}

#[test]
fn favorites_toggle_switches_the_list() {
    let (world, host, controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    world.borrow_mut().set_favorite(ids::HMG_BUNKER, true).unwrap();

    host.borrow_mut().stats_form_mut().unwrap().click_favorites();
    controller.borrow_mut().refresh();
    host.borrow_mut().sync_forms();

    assert_eq!(controller.borrow().build_options(), &[ids::HMG_BUNKER]);
    let host = host.borrow();
    let form = host.stats_form().unwrap();
    assert_eq!(form.option_buttons().len(), 1);
    assert_eq!(
        form.favorites_toggle().tip(),
        "Showing Only Favorite Tech\nRight-click to remove from Favorites"
    );
}

#[test]
fn forms_follow_list_sizes() {
    let (world, host, controller, _droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    world
        .borrow_mut()
        .spawn_droid(
            build_test_utils::fixtures::LOCAL,
            build_core::droid::DroidType::CyborgConstruct,
            pos(5, 5),
        )
        .unwrap();

    controller.borrow_mut().refresh();
    host.borrow_mut().sync_forms();

    assert_eq!(host.borrow().objects_form().unwrap().rows().len(), 2);
}

#[test]
fn dropped_controller_leaves_buttons_inert() {
    let (world, host, controller, droids) = open(WorldBuilder::new().builder(pos(1, 1)));
    let object = object_button(&host, 0);
    let option = option_button(&host, 0);
    drop(controller);

    assert_eq!(object.face(), ButtonFace::Empty);
    assert!(!object.is_selected());
    assert_eq!(option.tooltip(), None);
    object.clicked(MouseButton::Primary);
    option.clicked(MouseButton::Primary);

    assert!(!world.borrow().droid(droids[0]).unwrap().selected);
    assert_eq!(host.borrow().placement_mode(), PlacementMode::None);
}
