use std::collections::BTreeSet;

use wf_core::{EntityKind, GameState, HEALTH};

use crate::builtin::BUILT_IN_VERBS;

/// The vocabulary a command is interpreted against.
///
/// Always built fresh from the current world, since every command may move,
/// consume or produce entities. All words are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    triggers: BTreeSet<String>,
    entities: BTreeSet<String>,
    player_names: BTreeSet<String>,
}

impl Catalog {
    /// Whether `word` is a built-in verb or a custom action trigger.
    pub fn is_trigger(&self, word: &str) -> bool {
        self.triggers.contains(word)
    }

    /// Whether `word` can be the subject of a command.
    pub fn is_entity(&self, word: &str) -> bool {
        self.entities.contains(word)
    }

    /// Whether `word` names a known player.
    pub fn is_player_name(&self, word: &str) -> bool {
        self.player_names.contains(word)
    }
}

/// Snapshot the vocabulary of `state`.
///
/// Subject words are: every location name, every artefact, furniture and
/// character in every location (the storeroom included), every player name,
/// every item in every inventory, and `health`.
pub fn snapshot_catalog(state: &GameState) -> Catalog {
    let mut catalog = Catalog::default();

    catalog
        .triggers
        .extend(BUILT_IN_VERBS.iter().map(|verb| verb.to_string()));
    catalog
        .triggers
        .extend(state.actions().triggers().map(str::to_string));

    for location in state.locations() {
        catalog.entities.insert(location.name().to_lowercase());
        for kind in EntityKind::ALL {
            catalog
                .entities
                .extend(location.entities(kind).names().map(str::to_lowercase));
        }
    }
    for player in state.players() {
        let name = player.name.to_lowercase();
        catalog.entities.insert(name.clone());
        catalog.player_names.insert(name);
        catalog
            .entities
            .extend(player.inventory.names().map(str::to_lowercase));
    }
    catalog.entities.insert(HEALTH.to_string());

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::{Entity, GameAction, Location};

    fn test_world() -> GameState {
        let mut state = GameState::new("cabin");
        state
            .add_location(
                Location::new("cabin", "A log cabin")
                    .with_entity(Entity::artefact("Axe", "A razor sharp axe"))
                    .with_entity(Entity::new(EntityKind::Furniture, "trapdoor", "A trapdoor")),
            )
            .unwrap();
        state
            .add_location(Location::new("forest", "A dark forest").with_entity(Entity::new(
                EntityKind::Character,
                "elf",
                "An angry elf",
            )))
            .unwrap();
        state
            .storeroom_mut()
            .add_entity(Entity::artefact("log", "A heavy log"));
        state.add_action(
            GameAction::new("You chop the tree")
                .with_trigger("chop")
                .with_subject("tree"),
        );
        state
    }

    #[test]
    fn triggers_include_builtins_and_actions() {
        let catalog = snapshot_catalog(&test_world());
        for verb in ["inventory", "inv", "get", "drop", "goto", "look", "health", "chop"] {
            assert!(catalog.is_trigger(verb), "{verb}");
        }
        assert!(!catalog.is_trigger("tree"));
    }

    #[test]
    fn entities_cover_every_location_and_the_storeroom() {
        let catalog = snapshot_catalog(&test_world());
        for word in ["cabin", "forest", "storeroom", "axe", "trapdoor", "elf", "log", "health"] {
            assert!(catalog.is_entity(word), "{word}");
        }
        assert!(!catalog.is_entity("chop"));
    }

    #[test]
    fn players_and_inventories_are_entities() {
        let mut state = test_world();
        state.ensure_player("Alice");
        state.pick_up("Alice", "axe").unwrap();

        let catalog = snapshot_catalog(&state);
        assert!(catalog.is_player_name("alice"));
        assert!(catalog.is_entity("alice"));
        assert!(catalog.is_entity("axe"));
    }

    #[test]
    fn snapshot_tracks_mutations() {
        let mut state = test_world();
        assert!(!snapshot_catalog(&state).is_entity("gold"));
        state
            .location_mut("forest")
            .unwrap()
            .add_entity(Entity::placeholder("gold"));
        assert!(snapshot_catalog(&state).is_entity("gold"));
    }
}
