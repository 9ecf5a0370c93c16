//! Applying a resolved action to the world.
//!
//! Effects apply relative to the location the player stood in when the
//! action started, even if consuming `health` killed them part-way through.

use wf_core::{Container, Entity, EntityKind, GameAction, GameState, HEALTH, WfError};

use crate::error::{CommandError, CommandResult};
use crate::message;

/// Run `action` for `player`.
///
/// Every declared subject must be here or in the player's inventory; if any
/// is missing nothing changes. Then each consumed name is removed, each
/// produced name is added, and the narration is returned, with a death
/// notice when the player's health ran out.
pub fn execute(state: &mut GameState, player: &str, action: &GameAction) -> CommandResult<String> {
    let origin = check_subjects(state, player, action)?;

    let mut died = false;
    for name in &action.consumed {
        died |= consume(state, player, &origin, name);
    }
    for name in &action.produced {
        produce(state, player, &origin, name);
    }

    if died {
        if let Some(p) = state.player_mut(player) {
            p.reset_health();
        }
        tracing::info!(player, location = %origin, "player died");
        return Ok(message::with_death_notice(&action.narration));
    }
    Ok(action.narration.clone())
}

/// Return the player's location once every subject is known to be at hand.
fn check_subjects(state: &GameState, player: &str, action: &GameAction) -> CommandResult<String> {
    let p = state
        .player(player)
        .ok_or_else(|| WfError::PlayerNotFound(player.to_string()))?;
    let here = state
        .location(&p.location)
        .ok_or_else(|| WfError::UnknownLocation(p.location.clone()))?;

    for subject in &action.subjects {
        if here.holds(subject) || p.holds(subject) {
            continue;
        }
        let held_elsewhere = state
            .players()
            .any(|other| other.name != p.name && other.holds(subject));
        return Err(if held_elsewhere {
            CommandError::HeldByOther(subject.clone())
        } else {
            CommandError::NotHere(subject.clone())
        });
    }
    Ok(here.name().to_string())
}

/// Remove one consumed name. Returns `true` if it killed the player.
fn consume(state: &mut GameState, player: &str, origin: &str, name: &str) -> bool {
    if name == HEALTH {
        let died = state.player_mut(player).is_some_and(|p| p.hurt());
        if died {
            state.respawn(player, origin);
        }
        return died;
    }

    if state.is_location_name(name) {
        if let Some(here) = state.location_mut(origin) {
            here.remove_path(name);
        }
        return false;
    }

    let Some(here) = state.location_mut(origin) else {
        return false;
    };
    if here.take_entity(EntityKind::Artefact, name).is_some() {
        state.storeroom_mut().add_entity(Entity::placeholder(name));
    } else if here.take_entity(EntityKind::Furniture, name).is_some() {
        // Furniture leaves play entirely.
    } else if let Some(p) = state.player_mut(player)
        && p.inventory.take(name).is_some()
    {
        state.storeroom_mut().add_entity(Entity::placeholder(name));
    }
    false
}

/// Add one produced name.
fn produce(state: &mut GameState, player: &str, origin: &str, name: &str) {
    if name == HEALTH {
        if let Some(p) = state.player_mut(player) {
            p.heal();
        }
        return;
    }

    if let Some(destination) = state.location(name).map(|l| l.name().to_string()) {
        if let Some(here) = state.location_mut(origin) {
            here.add_path(destination);
        }
        return;
    }

    let here = Container::Location(origin.to_string());
    if state.transfer(&Container::Storeroom, &here, name).is_none()
        && let Some(location) = state.location_mut(origin)
    {
        location.add_entity(Entity::placeholder(name));
    }
}
