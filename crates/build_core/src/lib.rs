//! # Build Core
//!
//! Game-state model consumed by the build interface.
//!
//! This crate contains **only** data and queries:
//! - No rendering
//! - No IO
//! - No widget code
//!
//! The interface layer talks to the game exclusively through
//! [`facade::GameFacade`], so a real simulation, a headless scenario or a
//! test fixture can all sit behind it.
//!
//! ## Crate Structure
//!
//! - [`components`] - Identifier types and player constants
//! - [`droid`] - Droid types, actions and per-droid state
//! - [`order`] - Orders and order-state queries
//! - [`stats`] - Structure stats catalog
//! - [`structure`] - Structure instances
//! - [`world`] - In-memory game state implementing the facade
//! - [`data`] - RON scenario definitions

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod components;
pub mod data;
pub mod droid;
pub mod error;
pub mod facade;
pub mod math;
pub mod mission;
pub mod order;
pub mod stats;
pub mod structure;
pub mod world;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::components::{DroidId, PlayerId, StructureId, StructureStatsId, MAX_PLAYERS};
    pub use crate::droid::{Droid, DroidAction, DroidType};
    pub use crate::error::{GameError, Result};
    pub use crate::facade::GameFacade;
    pub use crate::math::{Fixed, Vec2Fixed};
    pub use crate::mission::MissionContext;
    pub use crate::order::{Order, OrderKind};
    pub use crate::stats::{Availability, StructureCatalog, StructureStats, StructureType};
    pub use crate::structure::{Structure, StructureStatus};
    pub use crate::world::World;
}
