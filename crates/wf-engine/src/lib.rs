//! Command interpretation and action resolution for Wayfarer.
//!
//! A [`GameEngine`] takes lines of the form `<player>: <command>`, works out
//! which built-in verb or custom action the player meant, applies it to the
//! shared [`GameState`](wf_core::GameState), and returns the text to show
//! the player. Rejected commands leave the world as it was.

/// Built-in verbs: inventory, look, health, get, drop, goto.
pub mod builtin;
/// The per-command pipeline.
pub mod engine;
/// Command rejections and their player-facing text.
pub mod error;
/// Applying a chosen action's effects.
pub mod executor;
/// Success response templates.
pub mod message;
/// Splitting, vocabulary snapshot and trigger/subject extraction.
pub mod parser;
/// Choosing among the actions declared for a trigger.
pub mod resolver;

/// Re-export the engine.
pub use engine::GameEngine;
/// Re-export error types.
pub use error::{CommandError, CommandResult, Misuse};
