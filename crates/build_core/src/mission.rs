//! Mission context that hides parts of the build menu.

use serde::{Deserialize, Serialize};

/// Flags describing the current mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissionContext {
    /// The player is on an offworld mission away from their base.
    #[serde(default)]
    pub offworld: bool,
    /// The tutorial is running.
    #[serde(default)]
    pub tutorial: bool,
}

impl MissionContext {
    /// Regular in-base play.
    pub const HOME: Self = Self {
        offworld: false,
        tutorial: false,
    };
}
