//! Droids and their current activity.

use serde::{Deserialize, Serialize};

use crate::components::{DroidId, PlayerId};
use crate::math::Vec2Fixed;
use crate::order::Order;

/// Droid body/role classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DroidType {
    /// Generic combat droid.
    #[default]
    Weapon,
    /// Sensor droid.
    Sensor,
    /// Electronic countermeasure droid.
    Ecm,
    /// Wheeled/tracked construction droid.
    Construct,
    /// Infantry.
    Person,
    /// Combat cyborg.
    Cyborg,
    /// Cyborg engineer.
    CyborgConstruct,
    /// Heavy cyborg.
    CyborgSuper,
    /// Cyborg mechanic.
    CyborgRepair,
    /// Repair droid.
    Repair,
    /// Commander.
    Command,
    /// Transporter.
    Transporter,
    /// Super transporter.
    SuperTransporter,
}

impl DroidType {
    /// Whether droids of this type can construct structures.
    #[must_use]
    pub const fn is_builder(self) -> bool {
        matches!(self, Self::Construct | Self::CyborgConstruct)
    }
}

/// What the droid is physically doing to carry out its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DroidAction {
    /// Idle.
    #[default]
    None,
    /// Moving somewhere.
    Move,
    /// Travelling to a build site.
    MoveToBuild,
    /// Working on a structure.
    Build,
    /// Looking for nearby structures to help with.
    BuildWander,
    /// Travelling to a structure to demolish.
    MoveToDemolish,
    /// Taking a structure apart.
    Demolish,
    /// Attacking.
    Attack,
}

/// A droid owned by some player.
#[derive(Debug, Clone, PartialEq)]
pub struct Droid {
    /// Droid id.
    pub id: DroidId,
    /// Owning player.
    pub player: PlayerId,
    /// Body/role classification.
    pub droid_type: DroidType,
    /// World position.
    pub position: Vec2Fixed,
    /// Current order.
    pub order: Order,
    /// Current action.
    pub action: DroidAction,
    /// Selection flag set by the selection system.
    pub selected: bool,
    /// Game tick at which the droid died, if it has.
    pub died: Option<u32>,
}

impl Droid {
    /// Create an idle, unselected, living droid.
    #[must_use]
    pub fn new(id: DroidId, player: PlayerId, droid_type: DroidType, position: Vec2Fixed) -> Self {
        Self {
            id,
            player,
            droid_type,
            position,
            order: Order::none(),
            action: DroidAction::None,
            selected: false,
            died: None,
        }
    }

    /// Whether the droid is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.died.is_none()
    }

    /// Whether the droid is a living construction unit.
    #[must_use]
    pub const fn is_live_builder(&self) -> bool {
        self.is_alive() && self.droid_type.is_builder()
    }
}
