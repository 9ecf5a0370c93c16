//! Turning a raw command line into a trigger and its subjects.
//!
//! The pipeline is [`split`] (player name and words), [`snapshot_catalog`]
//! (the vocabulary as of this command) and [`extract`] (trigger, subjects,
//! player mentions).

mod catalog;
mod extractor;
mod splitter;

pub use catalog::{Catalog, snapshot_catalog};
pub use extractor::{Extraction, extract};
pub use splitter::{SplitCommand, split};
