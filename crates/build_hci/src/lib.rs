//! # Build HCI
//!
//! The build interface: the panel that lists the local player's builders
//! and the structures they can build, and turns clicks into game actions.
//!
//! ## Crate Structure
//!
//! - [`controller`] - List computation, selection repair and click actions
//! - [`host`] - Collaborators the controller drives (panels, modes, camera, scripting)
//! - [`widgets`] - Buttons and forms that render controller state
//! - [`mode`] - Interaction modes and script trigger events
//! - [`settings`] - Persisted menu filters and favorites

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod controller;
pub mod host;
pub mod mode;
pub mod settings;
pub mod widgets;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::controller::{BuildInterfaceController, SharedController, WeakController};
    pub use crate::host::{HeadlessHost, InterfaceHost, Panel};
    pub use crate::mode::{InterfaceMode, MouseButton, PlacementMode, ScriptEvent};
    pub use crate::settings::{BuildMenuSettings, SettingsError};
    pub use crate::widgets::{
        BarGraph, Button, ButtonFace, ButtonRole, MultipleChoiceButton, ObjectRow, ObjectsForm,
        StatsForm,
    };
}
