//! The build interface controller.
//!
//! Computes the builder list and the build option list from the game
//! state, keeps track of which builder is selected, and carries out the
//! actions behind the panel's buttons. Both lists are rebuilt from scratch
//! on every refresh.

use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use build_core::components::{DroidId, PlayerId, StructureStatsId};
use build_core::droid::Droid;
use build_core::facade::GameFacade;
use build_core::mission::MissionContext;
use build_core::order::OrderKind;
use build_core::stats::{Availability, StructureStats, StructureType};
use tracing::{debug, error, info, trace, warn};

use crate::host::{InterfaceHost, Panel};
use crate::mode::{InterfaceMode, PlacementMode, ScriptEvent};
use crate::settings::BuildMenuSettings;
use crate::widgets::{ObjectsForm, StatsForm};

/// Shared handle to a controller.
pub type SharedController = Rc<RefCell<BuildInterfaceController>>;

/// Non-owning handle to a controller, held by widgets.
pub type WeakController = Weak<RefCell<BuildInterfaceController>>;

/// State and actions of the build interface.
pub struct BuildInterfaceController {
    game: Rc<RefCell<dyn GameFacade>>,
    host: Rc<RefCell<dyn InterfaceHost>>,
    settings: BuildMenuSettings,
    /// Live builders of the local player, newest first.
    builders: Vec<DroidId>,
    /// Offered structure types, in catalog order.
    build_options: Vec<StructureStatsId>,
    selected: Option<DroidId>,
    this: WeakController,
}

impl BuildInterfaceController {
    /// Create a controller over the given game state and host.
    ///
    /// Lists start empty; call [`update_data`](Self::update_data) or
    /// [`refresh`](Self::refresh) before showing the interface.
    pub fn new(
        game: Rc<RefCell<dyn GameFacade>>,
        host: Rc<RefCell<dyn InterfaceHost>>,
        settings: BuildMenuSettings,
    ) -> SharedController {
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                game,
                host,
                settings,
                builders: Vec::new(),
                build_options: Vec::new(),
                selected: None,
                this: this.clone(),
            })
        })
    }

    /// Read access to the game state.
    pub fn game(&self) -> Ref<'_, dyn GameFacade> {
        self.game.borrow()
    }

    /// Current settings. Favorites reflect the last load, not the catalog;
    /// see [`current_settings`](Self::current_settings).
    #[must_use]
    pub fn settings(&self) -> &BuildMenuSettings {
        &self.settings
    }

    /// Settings with favorites collected from the catalog, ready to save.
    #[must_use]
    pub fn current_settings(&self) -> BuildMenuSettings {
        let mut settings = self.settings.clone();
        settings.collect_favorites(self.game.borrow().catalog());
        settings
    }

    /// Rebuild the builder list from the local player's droids.
    pub fn update_builders_list(&mut self) {
        let game = self.game.borrow();
        let player = game.selected_player();
        self.builders = game
            .droids(player)
            .iter()
            .rev()
            .filter(|d| d.is_live_builder())
            .map(|d| d.id)
            .collect();
    }

    /// Rebuild the build option list from the structure catalog.
    pub fn update_build_options_list(&mut self) {
        let game = self.game.borrow();
        let player = game.selected_player();
        let mission = game.mission();
        let bases = built_module_bases(&*game, player, mission);

        let mut options = Vec::new();
        for stats in game.catalog().iter() {
            if !offers_structure(stats, player, mission, &bases, &self.settings) {
                continue;
            }
            trace!(
                "adding {} ({:?})",
                stats.name,
                stats.availability_for(player)
            );
            options.push(stats.index);
        }
        drop(game);

        self.build_options = options;
    }

    /// Rebuild both lists.
    pub fn update_data(&mut self) {
        self.update_builders_list();
        self.update_build_options_list();
    }

    /// Builder at a list position.
    #[must_use]
    pub fn object_at(&self, index: usize) -> Option<DroidId> {
        self.builders.get(index).copied()
    }

    /// Build option at a list position.
    #[must_use]
    pub fn stats_at(&self, index: usize) -> Option<StructureStatsId> {
        self.build_options.get(index).copied()
    }

    /// Number of listed builders.
    #[must_use]
    pub fn objects_len(&self) -> usize {
        self.builders.len()
    }

    /// Number of listed build options.
    #[must_use]
    pub fn stats_len(&self) -> usize {
        self.build_options.len()
    }

    /// Listed builders, newest first.
    #[must_use]
    pub fn builders(&self) -> &[DroidId] {
        &self.builders
    }

    /// Listed build options, in catalog order.
    #[must_use]
    pub fn build_options(&self) -> &[StructureStatsId] {
        &self.build_options
    }

    /// The selected builder.
    #[must_use]
    pub fn selected_builder(&self) -> Option<DroidId> {
        self.selected
    }

    /// Set the selected builder without touching selection flags.
    pub fn set_selected_builder(&mut self, builder: Option<DroidId>) {
        self.selected = builder;
    }

    /// List position of the selected builder.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.builders.iter().position(|&id| id == selected)
    }

    /// Stats describing what the builder at `index` is working on.
    ///
    /// In priority order: a build order it is still travelling to, a build
    /// order in progress, the structure it is helping with (help-build or
    /// line-build), the demolish entry while demolishing.
    #[must_use]
    pub fn object_stats_at(&self, index: usize) -> Option<StructureStatsId> {
        let id = self.object_at(index)?;
        let game = self.game.borrow();
        let builder = game.droid(id)?;
        if !builder.droid_type.is_builder() {
            return None;
        }

        if let Some(stats) = builder.pending_build_stats() {
            return Some(stats);
        }

        if builder.order.kind == OrderKind::Build && builder.construction_target().is_some() {
            return builder.order.stats;
        }

        if matches!(
            builder.order.kind,
            OrderKind::HelpBuild | OrderKind::LineBuild
        ) {
            if let Some(structure) = builder
                .construction_target()
                .and_then(|target| game.structure(target))
            {
                return Some(structure.stats);
            }
        }

        if builder.is_demolishing() {
            return game.catalog().demolish_stat();
        }

        None
    }

    /// Stats of the selected builder's current activity.
    #[must_use]
    pub fn highlighted_stats(&self) -> Option<StructureStatsId> {
        self.selected_index()
            .and_then(|index| self.object_stats_at(index))
    }

    /// Begin placing `stats` with the selected builder.
    ///
    /// The demolish entry switches to demolish targeting instead. Either way
    /// the interface closes and the player is back to inspecting the map.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if no builder is selected. Release builds log
    /// the error and do nothing.
    pub fn start_build_position(&mut self, stats: StructureStatsId) {
        let has_builder = self
            .selected
            .is_some_and(|id| self.game.borrow().droid(id).is_some());
        debug_assert!(has_builder, "start_build_position without a selected builder");
        if !has_builder {
            error!("Cannot start build positioning for {stats}: no builder selected");
            return;
        }

        let demolish = self.game.borrow().catalog().demolish_stat();
        {
            let mut host = self.host.borrow_mut();
            host.trigger_event(ScriptEvent::MenuBuildSelected);

            if demolish == Some(stats) {
                host.set_placement_mode(PlacementMode::DemolishTarget);
                debug!("Selecting demolish target");
            } else {
                host.set_position_stats(stats);
                host.set_placement_mode(PlacementMode::BuildLocation);
                host.start_structure_positioning(stats);
                debug!("Selecting build location for {stats}");
            }

            host.remove_stats_panel(true);
            host.set_interface_mode(InterfaceMode::Object);
        }

        self.close_interface();
    }

    /// Make `builder` the only selected droid.
    ///
    /// An unknown droid leaves every selection flag as it was.
    pub fn select_builder(&mut self, builder: DroidId) {
        {
            let mut game = self.game.borrow_mut();
            if game.droid(builder).is_none() {
                warn!("Cannot select unknown builder {builder}");
                return;
            }
            game.clear_selection();
            if let Err(e) = game.set_droid_selected(builder, true) {
                warn!("Cannot select builder: {e}");
                return;
            }
        }

        {
            let mut host = self.host.borrow_mut();
            host.trigger_event(ScriptEvent::Selected(builder));
            host.debug_selected(builder);
        }

        self.selected = Some(builder);
    }

    /// Center the camera on the selected builder.
    pub fn jump_to_selected_builder(&mut self) {
        let position = self
            .selected
            .and_then(|id| self.game.borrow().droid(id).map(|d| d.position));
        let Some(position) = position else {
            debug!("No selected builder to jump to");
            return;
        };

        let mut host = self.host.borrow_mut();
        host.set_camera_position(position);
        if host.war_cam_active() {
            host.toggle_war_cam();
        }
    }

    /// Flip a structure's favorite flag relative to the current view.
    ///
    /// In the full list this marks the structure as a favorite; in the
    /// favorites-only list it unmarks it.
    pub fn add_to_favorites(&mut self, stats: StructureStatsId) {
        let favorite = !self.settings.show_favorites_only;
        if let Err(e) = self.game.borrow_mut().set_favorite(stats, favorite) {
            warn!("Cannot change favorite: {e}");
        }
    }

    /// Whether redundant designs are offered.
    #[must_use]
    pub fn should_show_redundant_designs(&self) -> bool {
        self.settings.show_redundant_designs
    }

    /// Offer or hide redundant designs from the next refresh on.
    pub fn set_should_show_redundant_designs(&mut self, show: bool) {
        self.settings.show_redundant_designs = show;
    }

    /// Whether only favorites are offered.
    #[must_use]
    pub fn should_show_favorites(&self) -> bool {
        self.settings.show_favorites_only
    }

    /// Offer only favorites, or everything, from the next refresh on.
    pub fn set_should_show_favorites(&mut self, show: bool) {
        self.settings.show_favorites_only = show;
    }

    /// Recompute both lists and repair the selection.
    ///
    /// Closes the interface when no builders are left.
    pub fn refresh(&mut self) {
        self.update_data();

        if self.builders.is_empty() {
            self.close_interface();
            return;
        }

        let selected_alive = self
            .selected
            .is_some_and(|id| self.game.borrow().droid(id).is_some_and(Droid::is_alive));
        if !selected_alive {
            self.find_selected();
        }
    }

    /// Remove both panels.
    pub fn close_interface(&mut self) {
        let mut host = self.host.borrow_mut();
        host.remove_stats_panel(true);
        host.remove_object_panel();
        info!("Build interface closed");
    }

    /// Make sure a listed, living builder is selected.
    ///
    /// Keeps the current selection when it is still listed and alive;
    /// otherwise prefers a listed builder that is flagged selected, then the
    /// newest builder.
    pub fn find_selected(&mut self) {
        let game = self.game.borrow();
        let alive = |id: DroidId| game.droid(id).is_some_and(Droid::is_alive);

        if let Some(current) = self.selected {
            if self.builders.contains(&current) && alive(current) {
                return;
            }
        }

        let replacement = self
            .builders
            .iter()
            .copied()
            .find(|&id| game.droid(id).is_some_and(|d| d.is_alive() && d.selected))
            .or_else(|| self.builders.first().copied());
        drop(game);

        debug!("Selected builder {:?} -> {:?}", self.selected, replacement);
        self.selected = replacement;
    }

    /// Open the build interface.
    ///
    /// Returns `false` without attaching anything when there are no
    /// builders.
    pub fn show_interface(&mut self) -> bool {
        {
            let mut host = self.host.borrow_mut();
            host.remove_stats_panel(false);
            host.remove_order_panel(false);
        }

        if self.builders.is_empty() {
            return false;
        }

        self.find_selected();

        let objects = ObjectsForm::new(self.this.clone(), self.builders.len());
        let stats = StatsForm::new(self.this.clone(), self.build_options.len(), &self.settings);

        let mut host = self.host.borrow_mut();
        host.attach_panel(Panel::Objects(objects));
        host.attach_panel(Panel::Stats(stats));
        host.set_interface_mode(InterfaceMode::Stat);
        host.trigger_event(ScriptEvent::MenuBuildUp);
        info!(
            builders = self.builders.len(),
            options = self.build_options.len(),
            "Build interface shown"
        );

        true
    }
}

impl std::fmt::Debug for BuildInterfaceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildInterfaceController")
            .field("settings", &self.settings)
            .field("builders", &self.builders)
            .field("build_options", &self.build_options)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

/// Module base structures (research facility, factory, power generator)
/// the player has finished. Offworld, none count.
fn built_module_bases(
    game: &dyn GameFacade,
    player: PlayerId,
    mission: MissionContext,
) -> HashSet<StructureType> {
    if mission.offworld {
        return HashSet::new();
    }

    game.structures(player)
        .iter()
        .filter(|s| s.is_built())
        .filter_map(|s| game.catalog().get(s.stats))
        .map(|stats| stats.structure_type)
        .filter(|t| {
            matches!(
                t,
                StructureType::Research | StructureType::Factory | StructureType::PowerGen
            )
        })
        .collect()
}

/// Whether a catalog entry belongs in the build option list.
#[must_use]
pub fn offers_structure(
    stats: &StructureStats,
    player: PlayerId,
    mission: MissionContext,
    built_bases: &HashSet<StructureType>,
    settings: &BuildMenuSettings,
) -> bool {
    match stats.availability_for(player) {
        Availability::Available => {}
        Availability::Redundant if settings.show_redundant_designs => {}
        _ => return false,
    }

    if !stats.is_under_limit(player) {
        return false;
    }

    let structure_type = stats.structure_type;
    if structure_type == StructureType::WallCorner {
        return false;
    }
    if mission.tutorial && structure_type == StructureType::Demolish {
        return false;
    }
    if mission.offworld && structure_type.is_base_only() {
        return false;
    }
    if let Some(base) = structure_type.module_base() {
        if !built_bases.contains(&base) {
            return false;
        }
    }

    !settings.show_favorites_only || stats.is_favorite
}
