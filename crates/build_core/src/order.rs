//! Droid orders and the order-state queries the build menu relies on.

use serde::{Deserialize, Serialize};

use crate::components::{StructureId, StructureStatsId};
use crate::droid::{Droid, DroidAction};
use crate::math::Vec2Fixed;

/// Kind of order a droid is carrying out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderKind {
    /// No order.
    #[default]
    None,
    /// Stop what you are doing.
    Stop,
    /// Move to a location.
    Move,
    /// Attack a target.
    Attack,
    /// Build a new structure.
    Build,
    /// Help finish somebody else's structure.
    HelpBuild,
    /// Build a line of structures (walls, tank traps).
    LineBuild,
    /// Demolish a structure.
    Demolish,
    /// Return to base.
    ReturnToBase,
}

/// An order with its optional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Order {
    /// Order kind.
    pub kind: OrderKind,
    /// Structure type to build, for build orders.
    pub stats: Option<StructureStatsId>,
    /// Structure the order acts on.
    pub target: Option<StructureId>,
    /// Target location.
    pub position: Option<Vec2Fixed>,
}

impl Order {
    /// No order.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build `stats` at `position`.
    #[must_use]
    pub fn build(stats: StructureStatsId, position: Vec2Fixed) -> Self {
        Self {
            kind: OrderKind::Build,
            stats: Some(stats),
            target: None,
            position: Some(position),
        }
    }

    /// Help construct an existing structure.
    #[must_use]
    pub fn help_build(target: StructureId) -> Self {
        Self {
            kind: OrderKind::HelpBuild,
            stats: None,
            target: Some(target),
            position: None,
        }
    }

    /// Build a line of `stats` starting at `position`.
    #[must_use]
    pub fn line_build(stats: StructureStatsId, position: Vec2Fixed) -> Self {
        Self {
            kind: OrderKind::LineBuild,
            stats: Some(stats),
            target: None,
            position: Some(position),
        }
    }

    /// Demolish a structure.
    #[must_use]
    pub fn demolish(target: StructureId) -> Self {
        Self {
            kind: OrderKind::Demolish,
            stats: None,
            target: Some(target),
            position: None,
        }
    }

    /// Attach the structure being worked on.
    #[must_use]
    pub fn with_target(mut self, target: StructureId) -> Self {
        self.target = Some(target);
        self
    }
}

impl Droid {
    /// Structure type of a build or line-build order the droid is still
    /// travelling to.
    #[must_use]
    pub fn pending_build_stats(&self) -> Option<StructureStatsId> {
        let builds = matches!(self.order.kind, OrderKind::Build | OrderKind::LineBuild);
        if builds && self.action == DroidAction::MoveToBuild {
            self.order.stats
        } else {
            None
        }
    }

    /// Structure the droid is currently constructing.
    ///
    /// Build and line-build count once the droid is on site; help-build
    /// also counts while travelling to the structure.
    #[must_use]
    pub fn construction_target(&self) -> Option<StructureId> {
        let on_site = matches!(self.action, DroidAction::Build | DroidAction::BuildWander);
        let working = match self.order.kind {
            OrderKind::Build | OrderKind::LineBuild => on_site,
            OrderKind::HelpBuild => on_site || self.action == DroidAction::MoveToBuild,
            _ => false,
        };

        if working {
            self.order.target
        } else {
            None
        }
    }

    /// Whether the droid's order is to demolish something.
    #[must_use]
    pub fn is_demolishing(&self) -> bool {
        self.order.kind == OrderKind::Demolish
    }
}
