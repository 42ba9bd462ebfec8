//! Interaction modes and events shared between the controller and its host.

use build_core::components::DroidId;

/// Which interface the player is interacting with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceMode {
    /// Inspecting objects on the map.
    #[default]
    Object,
    /// A stats panel is shown.
    Stat,
}

/// What a click on the map will do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Regular selection.
    #[default]
    None,
    /// Choosing where to put the pending structure.
    BuildLocation,
    /// Choosing a structure to demolish.
    DemolishTarget,
}

/// Events forwarded to the scripting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    /// The build menu opened.
    MenuBuildUp,
    /// A build menu entry was chosen.
    MenuBuildSelected,
    /// The selection changed to the given droid.
    Selected(DroidId),
}

/// Mouse button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
}
