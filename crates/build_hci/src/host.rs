//! The collaborators the build interface drives.
//!
//! Panels, interaction modes, structure positioning, the camera and the
//! scripting layer all live outside the controller. [`InterfaceHost`] is the
//! seam; [`HeadlessHost`] implements it in memory for tools and tests.

use build_core::components::{DroidId, StructureStatsId};
use build_core::math::Vec2Fixed;
use tracing::debug;

use crate::mode::{InterfaceMode, PlacementMode, ScriptEvent};
use crate::widgets::{Button, ObjectsForm, StatsForm};

/// A panel the controller hands to the host.
#[derive(Debug)]
pub enum Panel {
    /// Builder list.
    Objects(ObjectsForm),
    /// Build option list with filter toggles.
    Stats(StatsForm),
}

/// Everything the build interface asks of the surrounding UI.
pub trait InterfaceHost {
    /// Attach a panel to the UI root.
    fn attach_panel(&mut self, panel: Panel);

    /// Remove the stats panel, if shown.
    fn remove_stats_panel(&mut self, animate: bool);

    /// Remove the object list panel, if shown.
    fn remove_object_panel(&mut self);

    /// Remove the droid order panel, if shown.
    fn remove_order_panel(&mut self, animate: bool);

    /// Switch the interface mode.
    fn set_interface_mode(&mut self, mode: InterfaceMode);

    /// Switch what the next map click does.
    fn set_placement_mode(&mut self, mode: PlacementMode);

    /// Record the structure type about to be placed.
    fn set_position_stats(&mut self, stats: StructureStatsId);

    /// Start showing the placement outline for a structure type.
    fn start_structure_positioning(&mut self, stats: StructureStatsId);

    /// Fire a script trigger.
    fn trigger_event(&mut self, event: ScriptEvent);

    /// Tell the script debugger which droid is selected.
    fn debug_selected(&mut self, droid: DroidId);

    /// Center the camera on a world position.
    fn set_camera_position(&mut self, position: Vec2Fixed);

    /// Whether the cinematic camera is engaged.
    fn war_cam_active(&self) -> bool;

    /// Engage or disengage the cinematic camera.
    fn toggle_war_cam(&mut self);
}

/// In-memory host that records everything the controller does.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    objects_form: Option<ObjectsForm>,
    stats_form: Option<StatsForm>,
    order_panel_open: bool,
    interface_mode: InterfaceMode,
    placement_mode: PlacementMode,
    position_stats: Option<StructureStatsId>,
    positioning: Option<StructureStatsId>,
    camera: Vec2Fixed,
    war_cam: bool,
    events: Vec<ScriptEvent>,
    debugged: Vec<DroidId>,
}

impl HeadlessHost {
    /// Create a host with no panels, in object mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached builder list.
    #[must_use]
    pub fn objects_form(&self) -> Option<&ObjectsForm> {
        self.objects_form.as_ref()
    }

    /// The attached stats panel.
    #[must_use]
    pub fn stats_form(&self) -> Option<&StatsForm> {
        self.stats_form.as_ref()
    }

    /// The attached stats panel, mutable for toggle clicks.
    pub fn stats_form_mut(&mut self) -> Option<&mut StatsForm> {
        self.stats_form.as_mut()
    }

    /// Builder portrait at a row, cloned out of the form.
    ///
    /// Clicks re-enter the host, so look the button up, let the host borrow
    /// end, then click it.
    #[must_use]
    pub fn object_button(&self, row: usize) -> Option<Button> {
        Some(self.objects_form.as_ref()?.row(row)?.object.clone())
    }

    /// Activity button at a row, cloned out of the form.
    #[must_use]
    pub fn activity_button(&self, row: usize) -> Option<Button> {
        Some(self.objects_form.as_ref()?.row(row)?.stats.clone())
    }

    /// Build option button, cloned out of the form.
    #[must_use]
    pub fn option_button(&self, index: usize) -> Option<Button> {
        self.stats_form.as_ref()?.option_button(index).cloned()
    }

    /// Whether any build interface panel is attached.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.objects_form.is_some() || self.stats_form.is_some()
    }

    /// Pretend the player opened a droid's order panel.
    pub fn open_order_panel(&mut self) {
        self.order_panel_open = true;
    }

    /// Whether the order panel is shown.
    #[must_use]
    pub fn order_panel_open(&self) -> bool {
        self.order_panel_open
    }

    /// Current interface mode.
    #[must_use]
    pub fn interface_mode(&self) -> InterfaceMode {
        self.interface_mode
    }

    /// Current placement mode.
    #[must_use]
    pub fn placement_mode(&self) -> PlacementMode {
        self.placement_mode
    }

    /// Structure type recorded for placement.
    #[must_use]
    pub fn position_stats(&self) -> Option<StructureStatsId> {
        self.position_stats
    }

    /// Structure type whose placement outline is showing.
    #[must_use]
    pub fn positioning(&self) -> Option<StructureStatsId> {
        self.positioning
    }

    /// Camera center.
    #[must_use]
    pub fn camera(&self) -> Vec2Fixed {
        self.camera
    }

    /// Engage or disengage the cinematic camera directly.
    pub fn set_war_cam(&mut self, active: bool) {
        self.war_cam = active;
    }

    /// Script triggers fired so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    /// Droids reported to the script debugger, oldest first.
    #[must_use]
    pub fn debugged(&self) -> &[DroidId] {
        &self.debugged
    }

    /// Bring attached forms in line with the controller's lists.
    ///
    /// Call after the controller refreshes.
    pub fn sync_forms(&mut self) {
        if let Some(form) = self.objects_form.as_mut() {
            form.sync();
        }
        if let Some(form) = self.stats_form.as_mut() {
            form.sync();
        }
    }
}

impl InterfaceHost for HeadlessHost {
    fn attach_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Objects(form) => self.objects_form = Some(form),
            Panel::Stats(form) => self.stats_form = Some(form),
        }
    }

    fn remove_stats_panel(&mut self, animate: bool) {
        if self.stats_form.take().is_some() {
            debug!(animate, "Removed stats panel");
        }
    }

    fn remove_object_panel(&mut self) {
        if self.objects_form.take().is_some() {
            debug!("Removed object panel");
        }
    }

    fn remove_order_panel(&mut self, animate: bool) {
        if self.order_panel_open {
            self.order_panel_open = false;
            debug!(animate, "Removed order panel");
        }
    }

    fn set_interface_mode(&mut self, mode: InterfaceMode) {
        self.interface_mode = mode;
    }

    fn set_placement_mode(&mut self, mode: PlacementMode) {
        self.placement_mode = mode;
    }

    fn set_position_stats(&mut self, stats: StructureStatsId) {
        self.position_stats = Some(stats);
    }

    fn start_structure_positioning(&mut self, stats: StructureStatsId) {
        self.positioning = Some(stats);
    }

    fn trigger_event(&mut self, event: ScriptEvent) {
        self.events.push(event);
    }

    fn debug_selected(&mut self, droid: DroidId) {
        self.debugged.push(droid);
    }

    fn set_camera_position(&mut self, position: Vec2Fixed) {
        self.camera = position;
    }

    fn war_cam_active(&self) -> bool {
        self.war_cam
    }

    fn toggle_war_cam(&mut self) {
        self.war_cam = !self.war_cam;
    }
}
