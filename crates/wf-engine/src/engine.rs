//! The command pipeline.

use wf_core::GameState;

use crate::builtin::{self, BuiltIn};
use crate::error::CommandResult;
use crate::executor::execute;
use crate::parser::{extract, snapshot_catalog, split};
use crate::resolver::resolve;

/// A running game: one shared world and the players in it.
///
/// Commands are handled one at a time; callers that accept commands
/// concurrently must serialize access to the engine.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Start a game in a loaded world.
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// The current world.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handle one `<player>: <command>` line and return the text to send
    /// back. Rejections are rendered with their message.
    pub fn handle_command(&mut self, line: &str) -> String {
        match self.process(line) {
            Ok(response) => response,
            Err(rejection) => {
                tracing::debug!(%rejection, "command rejected");
                rejection.to_string()
            }
        }
    }

    /// Handle one command line, keeping rejections as errors.
    ///
    /// The speaking player is created at the start location the first time
    /// they are seen, even if their command is then rejected.
    #[tracing::instrument(skip(self), fields(player = tracing::field::Empty))]
    pub fn process(&mut self, line: &str) -> CommandResult<String> {
        let command = split(line)?;
        let player = command.player;
        tracing::Span::current().record("player", player);

        self.state.ensure_player(player);
        let catalog = snapshot_catalog(&self.state);
        let extraction = extract(&command.words, &catalog)?;
        tracing::debug!(
            trigger = %extraction.trigger,
            subjects = ?extraction.subjects,
            "interpreted command"
        );

        if let Some(verb) = BuiltIn::parse(&extraction.trigger) {
            return builtin::run(&mut self.state, player, verb, &extraction);
        }

        let action = resolve(
            &self.state,
            player,
            &extraction.trigger,
            &extraction.subjects,
        )?;
        let narration = execute(&mut self.state, player, &action)?;
        tracing::info!(trigger = %extraction.trigger, "action executed");
        Ok(narration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wf_core::{Entity, EntityKind, GameAction, Location};

    fn test_world() -> GameState {
        let mut state = GameState::new("cabin");
        let mut cabin = Location::new("cabin", "A log cabin in the woods")
            .with_entity(Entity::artefact("axe", "A razor sharp axe"))
            .with_entity(Entity::artefact("potion", "Magic potion"))
            .with_entity(Entity::new(EntityKind::Furniture, "trapdoor", "Wooden trapdoor"));
        cabin.add_path("forest");
        state.add_location(cabin).unwrap();
        let mut forest = Location::new("forest", "A dark forest")
            .with_entity(Entity::new(EntityKind::Furniture, "tree", "A big tree"));
        forest.add_path("cabin");
        state.add_location(forest).unwrap();
        state
            .add_location(Location::new("cellar", "A dusty cellar"))
            .unwrap();
        state.add_action(
            GameAction::new("You cut down the tree with the axe")
                .with_trigger("chop")
                .with_trigger("cut")
                .with_subject("tree")
                .with_subject("axe")
                .consumes("tree")
                .produces("log"),
        );
        state.add_action(
            GameAction::new("You drink the potion and your health improves")
                .with_trigger("drink")
                .with_subject("potion")
                .consumes("potion")
                .produces("health"),
        );
        state
    }

    fn engine() -> GameEngine {
        GameEngine::new(test_world())
    }

    #[test]
    fn first_command_creates_the_player() {
        let mut engine = engine();
        assert!(engine.state().player("Alice").is_none());
        engine.handle_command("Alice: look");
        assert_eq!(engine.state().player("Alice").unwrap().location, "cabin");
    }

    #[test]
    fn rejected_commands_still_create_the_player() {
        let mut engine = engine();
        assert_eq!(engine.handle_command("Bob: dance"), "No valid trigger found");
        assert!(engine.state().player("Bob").is_some());
    }

    #[test]
    fn malformed_lines_create_nobody() {
        let mut engine = engine();
        assert_eq!(engine.handle_command("Bob look"), "Missing valid trigger");
        assert_eq!(engine.handle_command("B0b: look"), "Missing valid trigger");
        assert_eq!(engine.handle_command("Bob:    "), "Missing valid trigger");
        assert_eq!(engine.state().players().count(), 0);
    }

    #[test]
    fn words_are_case_insensitive_and_order_free() {
        let mut engine = engine();
        engine.handle_command("Alice: get axe");
        engine.handle_command("Alice: goto forest");
        assert_eq!(
            engine.handle_command("Alice: please use the AXE to CHOP the tree"),
            "You cut down the tree with the axe"
        );
        let forest = engine.state().location("forest").unwrap();
        assert!(forest.holds("log"));
        assert!(!forest.holds("tree"));
    }

    #[test]
    fn first_trigger_wins() {
        let mut engine = engine();
        assert_eq!(
            engine.handle_command("Alice: look then get axe"),
            "Invalid command: 'look' takes no subjects"
        );
    }

    #[test]
    fn player_names_are_subjects() {
        let mut engine = engine();
        engine.handle_command("Bob: look");
        assert_eq!(
            engine.handle_command("Alice: health of bob"),
            "Invalid command: 'health' takes no subjects"
        );
        assert_eq!(engine.handle_command("Alice: health"), "3");
    }

    #[test]
    fn custom_actions_report_unavailable_subjects() {
        let mut engine = engine();
        assert_eq!(
            engine.handle_command("Alice: chop tree"),
            "Subject 'tree' is not here"
        );
        engine.handle_command("Alice: goto forest");
        assert_eq!(
            engine.handle_command("Alice: chop tree"),
            "Invalid command: subjects not available or missing"
        );
        assert_eq!(
            engine.handle_command("Alice: drink"),
            "Invalid command: 'drink' must input at least one subject"
        );
    }

    #[test]
    fn items_held_by_others_are_not_available() {
        let mut engine = engine();
        engine.handle_command("Bob: get potion");
        assert_eq!(
            engine.handle_command("Alice: drink potion"),
            "Subject 'potion' is not available"
        );
    }

    #[test]
    fn look_sees_other_players() {
        let mut engine = engine();
        engine.handle_command("Bob: look");
        let text = engine.handle_command("Alice: look");
        assert!(text.contains("Other players here: \nBob\n"));
    }

    fn command() -> impl Strategy<Value = String> {
        let words = prop::sample::select(vec![
            "look", "inv", "get", "drop", "goto", "health", "chop", "drink", "axe", "potion",
            "tree", "trapdoor", "forest", "cellar", "cabin", "the", "alice",
        ]);
        (
            prop::sample::select(vec!["Alice", "Bob"]),
            prop::collection::vec(words, 0..5),
        )
            .prop_map(|(player, words)| format!("{player}: {}", words.join(" ")))
    }

    proptest! {
        #[test]
        fn health_stays_in_bounds(commands in prop::collection::vec(command(), 0..30)) {
            let mut engine = engine();
            for line in &commands {
                engine.handle_command(line);
                for player in engine.state().players() {
                    prop_assert!(player.health() <= wf_core::MAX_HEALTH);
                    prop_assert!(player.health() > 0);
                }
            }
        }

        #[test]
        fn rejected_commands_leave_the_world_unchanged(
            setup in prop::collection::vec(command(), 0..10),
            line in command(),
        ) {
            let mut engine = engine();
            engine.handle_command("Alice: look");
            engine.handle_command("Bob: look");
            for setup_line in &setup {
                engine.handle_command(setup_line);
            }
            let before = format!("{:?}", engine.state());
            if engine.process(&line).is_err() {
                prop_assert_eq!(format!("{:?}", engine.state()), before);
            }
        }
    }
}
