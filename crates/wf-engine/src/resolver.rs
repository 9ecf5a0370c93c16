//! Choosing the custom action a command refers to.

use std::sync::Arc;

use wf_core::{GameAction, GameState, Location, Player, WfError};

use crate::error::{CommandError, CommandResult, Misuse};

/// Pick the one action declared for `trigger` that the command's subjects
/// satisfy.
///
/// An action satisfies the command when at least one subject is among the
/// action's subjects, every one of its subjects was named or is at hand
/// (here or in the inventory), and no subject is foreign to it.
///
/// When no single action satisfies it, the rejection depends on what is
/// declared for the trigger, not on what matched: several declared actions
/// are always ambiguous, and a single declared action explains the mismatch.
pub fn resolve(
    state: &GameState,
    player: &str,
    trigger: &str,
    subjects: &[String],
) -> CommandResult<Arc<GameAction>> {
    if subjects.is_empty() {
        return Err(CommandError::Misuse {
            trigger: trigger.to_string(),
            reason: Misuse::NeedsSubject,
        });
    }

    let p = state
        .player(player)
        .ok_or_else(|| WfError::PlayerNotFound(player.to_string()))?;
    let here = state.location(&p.location);
    let candidates = state.actions().candidates(trigger);

    let mut matching = candidates
        .iter()
        .filter(|action| satisfies(action, subjects, here, p));
    if let (Some(action), None) = (matching.next(), matching.next()) {
        return Ok(Arc::clone(action));
    }

    match candidates {
        [] => Err(CommandError::NoMatchingAction(trigger.to_string())),
        [only] => {
            let extraneous: Vec<String> = subjects
                .iter()
                .filter(|s| !only.has_subject(s))
                .cloned()
                .collect();
            if extraneous.is_empty() {
                Err(CommandError::SubjectsUnavailable)
            } else {
                Err(CommandError::Extraneous(extraneous))
            }
        }
        _ => Err(CommandError::Ambiguous(trigger.to_string())),
    }
}

fn satisfies(
    action: &GameAction,
    subjects: &[String],
    here: Option<&Location>,
    player: &Player,
) -> bool {
    let named = |s: &str| subjects.iter().any(|n| n.eq_ignore_ascii_case(s));
    let at_hand = |s: &str| here.is_some_and(|l| l.holds(s)) || player.holds(s);

    subjects.iter().any(|s| action.has_subject(s))
        && action.subjects.iter().all(|s| named(s.as_str()) || at_hand(s.as_str()))
        && subjects.iter().all(|s| action.has_subject(s))
}
