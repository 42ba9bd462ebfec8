//! Data structures for scenario files.
//!
//! This module contains pure data structures that describe a game state
//! in RON. All structs are designed to be deserialized from files and then
//! turned into a [`World`](crate::world::World).
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `build_tools`.

mod scenario_data;

pub use scenario_data::{DroidData, OrderData, ScenarioData, StructureData, StructureStatsData};
