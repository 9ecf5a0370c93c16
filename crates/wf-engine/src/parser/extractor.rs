use crate::error::{CommandError, CommandResult};

use super::catalog::Catalog;

/// The interpreted parts of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The first word that is a built-in verb or an action trigger.
    pub trigger: String,
    /// Every other word that names something, in order, duplicates kept.
    pub subjects: Vec<String>,
    /// Whether any word names a player.
    pub mentions_player: bool,
}

/// Find the trigger and subjects among `words`.
pub fn extract(words: &[String], catalog: &Catalog) -> CommandResult<Extraction> {
    let trigger = words
        .iter()
        .find(|w| catalog.is_trigger(w))
        .ok_or(CommandError::NoTrigger)?
        .clone();
    let subjects = words
        .iter()
        .filter(|w| **w != trigger && catalog.is_entity(w))
        .cloned()
        .collect();
    let mentions_player = words.iter().any(|w| catalog.is_player_name(w));
    Ok(Extraction {
        trigger,
        subjects,
        mentions_player,
    })
}
