//! Response text for successful commands.
//!
//! Rejections are rendered by [`CommandError`](crate::CommandError)'s
//! `Display`; everything here is the success side.

use wf_core::{EntityKind, EntityList, Location};

/// Appended to an action's narration when it kills the player.
pub const DEATH_NOTICE: &str =
    "You died and lost all of your items, you will return to the start location of the game";

/// Describe `location` as seen by a player standing in it.
///
/// `others` are the names of the other players present. Every section
/// after the first line is left out when empty.
pub fn look(location: &Location, others: &[&str]) -> String {
    let mut out = format!("You are in {}.\n", location.description());

    let artefacts = location.entities(EntityKind::Artefact).describe();
    if !artefacts.is_empty() {
        out.push_str("You can see: \n");
        out.push_str(&artefacts);
        out.push('\n');
    }
    for kind in [EntityKind::Furniture, EntityKind::Character] {
        let described = location.entities(kind).describe();
        if !described.is_empty() {
            out.push_str(&described);
            out.push('\n');
        }
    }
    if !others.is_empty() {
        out.push_str("Other players here: \n");
        out.push_str(&others.join(", "));
        out.push('\n');
    }
    if !location.paths().is_empty() {
        out.push_str("You can access from here: \n");
        out.push_str(&location.paths().join(", "));
    }
    out
}

/// List held items by description, or `Nothing`.
pub fn inventory(items: &EntityList) -> String {
    if items.is_empty() {
        "Nothing".to_string()
    } else {
        items.describe()
    }
}

/// Current health as a bare number.
pub fn health(points: u8) -> String {
    points.to_string()
}

/// `get` succeeded.
pub fn picked_up(item: &str) -> String {
    format!("You picked up {item}")
}

/// `drop` succeeded.
pub fn dropped(item: &str) -> String {
    format!("You dropped {item}")
}

/// `goto` walked a path.
pub fn moved(destination: &str) -> String {
    format!("You moved to {destination}")
}

/// `goto` named the player's own location.
pub fn already_in(location: &str) -> String {
    format!("You are already in {location}")
}

/// Narration of an action that killed the player.
pub fn with_death_notice(narration: &str) -> String {
    format!("{narration}\n{DEATH_NOTICE}")
}
