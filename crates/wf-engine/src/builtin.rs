//! The seven built-in verbs.

use wf_core::{Arrival, GameState, Player, WfError};

use crate::error::{CommandError, CommandResult, Misuse};
use crate::message;
use crate::parser::Extraction;

/// Every built-in verb, in the order they are recognized.
pub const BUILT_IN_VERBS: [&str; 7] = ["inventory", "inv", "get", "drop", "goto", "look", "health"];

/// A built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltIn {
    /// `inventory` or `inv`: list held items.
    Inventory,
    /// `look`: describe the current location.
    Look,
    /// `health`: report current health.
    Health,
    /// `get`: pick up an artefact.
    Get,
    /// `drop`: put down a held item.
    Drop,
    /// `goto`: walk along a path.
    Goto,
}

impl BuiltIn {
    /// Recognize a built-in verb.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "inventory" | "inv" => Some(Self::Inventory),
            "look" => Some(Self::Look),
            "health" => Some(Self::Health),
            "get" => Some(Self::Get),
            "drop" => Some(Self::Drop),
            "goto" => Some(Self::Goto),
            _ => None,
        }
    }
}

/// Run a built-in command for `player`, who must already exist.
pub fn run(
    state: &mut GameState,
    player: &str,
    builtin: BuiltIn,
    extraction: &Extraction,
) -> CommandResult<String> {
    let trigger = extraction.trigger.as_str();
    match builtin {
        BuiltIn::Inventory => {
            no_subjects(extraction)?;
            let p = require_player(state, player)?;
            Ok(message::inventory(&p.inventory))
        }
        BuiltIn::Look => {
            no_subjects(extraction)?;
            look(state, player)
        }
        BuiltIn::Health => {
            no_subjects(extraction)?;
            if extraction.mentions_player {
                return Err(misuse(trigger, Misuse::NoPlayerNames));
            }
            let p = require_player(state, player)?;
            Ok(message::health(p.health()))
        }
        BuiltIn::Get => {
            let item = single_subject(extraction)?;
            let name = state.pick_up(player, item)?;
            Ok(message::picked_up(&name))
        }
        BuiltIn::Drop => {
            let item = single_subject(extraction)?;
            state.drop_item(player, item)?;
            Ok(message::dropped(item))
        }
        BuiltIn::Goto => {
            let destination = single_subject(extraction)?;
            match state.move_player(player, destination)? {
                Arrival::AlreadyThere => Ok(message::already_in(destination)),
                Arrival::Moved => Ok(message::moved(destination)),
            }
        }
    }
}

fn look(state: &GameState, player: &str) -> CommandResult<String> {
    let p = require_player(state, player)?;
    let here = state
        .location(&p.location)
        .ok_or_else(|| WfError::UnknownLocation(p.location.clone()))?;
    let others: Vec<&str> = state
        .players_at(here.name())
        .filter(|other| other.name != p.name)
        .map(|other| other.name.as_str())
        .collect();
    Ok(message::look(here, &others))
}

fn require_player<'s>(state: &'s GameState, player: &str) -> CommandResult<&'s Player> {
    state
        .player(player)
        .ok_or_else(|| WfError::PlayerNotFound(player.to_string()).into())
}

fn misuse(trigger: &str, reason: Misuse) -> CommandError {
    CommandError::Misuse {
        trigger: trigger.to_string(),
        reason,
    }
}

fn no_subjects(extraction: &Extraction) -> CommandResult<()> {
    if extraction.subjects.is_empty() {
        Ok(())
    } else {
        Err(misuse(&extraction.trigger, Misuse::TakesNoSubjects))
    }
}

fn single_subject(extraction: &Extraction) -> CommandResult<&str> {
    match extraction.subjects.as_slice() {
        [] => Err(CommandError::NoSubject),
        [subject] => Ok(subject.as_str()),
        _ => Err(misuse(&extraction.trigger, Misuse::OnlyOneSubject)),
    }
}
