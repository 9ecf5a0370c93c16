//! Core types for Wayfarer: entities, locations, players, actions, and the
//! game state that owns them.
//!
//! This crate is pure data plus invariant-preserving mutators. It knows
//! nothing about command text; the `wf-engine` crate interprets player input
//! and drives the mutators defined here. A [`GameState`] can be assembled
//! programmatically or produced by the loaders in `wf-dsl`.

/// Custom actions and the trigger-indexed action catalog.
pub mod action;
/// Name-keyed entity containers.
pub mod collection;
/// Entity kinds and the entity record.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Locations and their contents.
pub mod location;
/// Player state: position, inventory, and health.
pub mod player;
/// The aggregate game state and its movement/inventory primitives.
pub mod state;

/// Re-export action types.
pub use action::{ActionCatalog, GameAction, HEALTH};
/// Re-export the entity container.
pub use collection::EntityList;
/// Re-export entity types.
pub use entity::{Entity, EntityKind};
/// Re-export error types.
pub use error::{WfError, WfResult};
/// Re-export location type.
pub use location::Location;
/// Re-export player types.
pub use player::{MAX_HEALTH, Player};
/// Re-export game state types.
pub use state::{Arrival, Container, GameState, STOREROOM};
