//! Whole-game scenarios against the bundled world files.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use wf_core::{EntityKind, GameAction, GameState, MAX_HEALTH};
use wf_engine::GameEngine;
use wf_engine::message::DEATH_NOTICE;

fn config(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../config")
        .join(file)
}

fn load(name: &str) -> GameState {
    wf_dsl::load_world(
        &config(&format!("{name}-entities.dot")),
        &config(&format!("{name}-actions.xml")),
    )
    .unwrap()
}

fn basic() -> GameEngine {
    GameEngine::new(load("basic"))
}

fn extended() -> GameEngine {
    GameEngine::new(load("extended"))
}

/// Send each command and return the last response.
fn play(engine: &mut GameEngine, commands: &[&str]) -> String {
    commands
        .iter()
        .map(|line| engine.handle_command(line))
        .last()
        .unwrap_or_default()
}

#[test]
fn look_creates_the_player_at_the_start() {
    let mut engine = basic();
    let text = engine.handle_command("Alice: look");
    assert!(text.starts_with("You are in A log cabin in the woods.\n"));
    assert!(text.contains("A razor sharp axe"));
    assert!(text.contains("A locked wooden trapdoor in the floor"));
    assert!(text.ends_with("You can access from here: \nforest"));
    assert_eq!(engine.state().player("Alice").unwrap().location, "cabin");
}

#[test]
fn goto_follows_directed_paths() {
    let mut engine = basic();
    assert_eq!(engine.handle_command("Alice: goto forest"), "You moved to forest");
    assert_eq!(engine.handle_command("Alice: goto cellar"), "No path to that location");
    assert_eq!(engine.handle_command("Alice: goto forest"), "You are already in forest");
    assert_eq!(engine.handle_command("Alice: goto cabin"), "You moved to cabin");
}

#[test]
fn chop_moves_the_tree_out_and_the_log_in() {
    let mut engine = basic();
    let text = play(
        &mut engine,
        &["Alice: get axe", "Alice: goto forest", "Alice: chop tree"],
    );
    assert_eq!(text, "You cut down the tree with the axe");

    let state = engine.state();
    let forest = state.location("forest").unwrap();
    assert!(!forest.holds("tree"));
    let log = forest.entities(EntityKind::Artefact).get("log").unwrap();
    assert_eq!(log.description, "A heavy wooden log");
    assert!(!state.storeroom().holds("log"));
}

#[test]
fn chop_without_a_storeroom_log_makes_one() {
    let mut state = load("basic");
    assert!(state.storeroom_mut().take_any("log").is_some());
    let mut engine = GameEngine::new(state);

    play(&mut engine, &["Alice: get axe", "Alice: goto forest"]);
    engine.handle_command("Alice: chop tree");
    let forest = engine.state().location("forest").unwrap();
    assert_eq!(
        forest.entities(EntityKind::Artefact).get("log").unwrap().description,
        "A log"
    );
}

#[test]
fn consumed_artefacts_land_in_the_storeroom() {
    let mut engine = basic();
    play(
        &mut engine,
        &["Alice: goto forest", "Alice: get key", "Alice: goto cabin"],
    );
    assert_eq!(
        engine.handle_command("Alice: unlock the trapdoor"),
        "You unlock the trapdoor and see steps leading down into a cellar"
    );
    let state = engine.state();
    assert!(state.storeroom().holds("key"));
    assert!(!state.player("Alice").unwrap().holds("key"));
    assert!(state.location("cabin").unwrap().has_path("cellar"));
    assert_eq!(engine.handle_command("Alice: goto cellar"), "You moved to cellar");
}

#[test]
fn subject_count_rules_for_get() {
    let mut engine = basic();
    assert_eq!(engine.handle_command("Alice: get"), "no such item");
    assert_eq!(engine.handle_command("Alice: get sword"), "no such item");
    assert_eq!(
        engine.handle_command("Alice: get coin axe"),
        "Invalid command: 'get' allows only one subject"
    );
    assert!(engine.state().player("Alice").unwrap().inventory.is_empty());
}

#[test]
fn get_then_drop_restores_the_description() {
    let mut engine = basic();
    engine.handle_command("Alice: look");
    let description = |engine: &GameEngine| {
        engine
            .state()
            .location("cabin")
            .unwrap()
            .entities(EntityKind::Artefact)
            .get("potion")
            .map(|e| e.description.clone())
    };
    let before = description(&engine);

    assert_eq!(engine.handle_command("Alice: get potion"), "You picked up potion");
    assert_eq!(description(&engine), None);
    assert_eq!(engine.handle_command("Alice: inv"), "A bottle of magic potion");
    assert_eq!(engine.handle_command("Alice: drop potion"), "You dropped potion");
    assert_eq!(description(&engine), before);
}

#[test]
fn read_only_commands_are_idempotent() {
    let mut engine = basic();
    engine.handle_command("Alice: get coin");
    for command in ["Alice: look", "Alice: inventory", "Alice: health"] {
        let first = engine.handle_command(command);
        assert_eq!(engine.handle_command(command), first, "{command}");
    }
}

#[test]
fn fighting_to_the_death_respawns_at_the_start() {
    let mut engine = basic();
    play(
        &mut engine,
        &[
            "Alice: goto forest",
            "Alice: get key",
            "Alice: goto cabin",
            "Alice: get coin",
            "Alice: open trapdoor",
            "Alice: goto cellar",
        ],
    );
    assert!(engine.handle_command("Alice: hit elf").starts_with("You attack the elf"));
    assert_eq!(engine.handle_command("Alice: health"), "2");
    engine.handle_command("Alice: attack elf");
    assert_eq!(engine.handle_command("Alice: health"), "1");

    let text = engine.handle_command("Alice: fight the elf");
    assert_eq!(
        text,
        format!("You attack the elf, but he fights back and you lose some health\n{DEATH_NOTICE}")
    );

    let state = engine.state();
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.location, "cabin");
    assert_eq!(alice.health(), MAX_HEALTH);
    assert!(alice.inventory.is_empty());
    assert!(state.location("cellar").unwrap().holds("coin"));
}

#[test]
fn potions_heal_up_to_the_maximum() {
    let mut engine = basic();
    assert_eq!(
        engine.handle_command("Alice: drink potion"),
        "You drink the potion and your health improves"
    );
    assert_eq!(engine.handle_command("Alice: health"), "3");
    assert!(engine.state().storeroom().holds("potion"));
}

#[test]
fn another_players_items_are_not_available() {
    let mut engine = basic();
    assert_eq!(engine.handle_command("Bob: get potion"), "You picked up potion");
    assert_eq!(
        engine.handle_command("Alice: drink potion"),
        "Subject 'potion' is not available"
    );
    let look = engine.handle_command("Alice: look");
    assert!(look.contains("Other players here: \nBob\n"));
    assert!(!look.contains("A bottle of magic potion"));
}

#[test]
fn shared_triggers_run_the_single_satisfied_action() {
    let mut state = load("basic");
    state.add_action(
        GameAction::new("You chop the coin in half")
            .with_trigger("chop")
            .with_subject("coin"),
    );
    let mut engine = GameEngine::new(state);

    assert_eq!(
        engine.handle_command("Alice: chop coin"),
        "You chop the coin in half"
    );
    assert_eq!(
        engine.handle_command("Alice: chop trapdoor"),
        "Ambiguous command: multiple actions match 'chop'"
    );
}

#[test]
fn produced_placeholders_never_displace_real_entities() {
    let mut state = load("basic");
    state.add_action(
        GameAction::new("A coin falls from the trapdoor")
            .with_trigger("pray")
            .with_subject("trapdoor")
            .produces("coin"),
    );
    let mut engine = GameEngine::new(state);
    let coins = |engine: &GameEngine| -> Vec<String> {
        engine
            .state()
            .location("cabin")
            .unwrap()
            .entities(EntityKind::Artefact)
            .iter()
            .filter(|e| e.is_named("coin"))
            .map(|e| e.description.clone())
            .collect()
    };

    play(
        &mut engine,
        &["Alice: get coin", "Alice: pray trapdoor", "Alice: drop coin"],
    );
    assert_eq!(coins(&engine), vec!["A coin", "A silver coin"]);

    engine.handle_command("Alice: pray trapdoor");
    assert_eq!(coins(&engine), vec!["A coin", "A silver coin", "A coin"]);
}

#[test]
fn extended_world_playthrough() {
    let mut engine = extended();
    let steps = [
        ("Alice: get axe", "You picked up axe"),
        ("Alice: get coin", "You picked up coin"),
        ("Alice: goto forest", "You moved to forest"),
        ("Alice: get key", "You picked up key"),
        ("Alice: cut down the tree", "You cut down the tree with the axe"),
        ("Alice: get log", "You picked up log"),
        ("Alice: goto cabin", "You moved to cabin"),
        (
            "Alice: unlock trapdoor with key",
            "You unlock the door and see steps leading down into a cellar",
        ),
        ("Alice: goto cellar", "You moved to cellar"),
        (
            "Alice: pay the elf",
            "You pay the elf your silver coin and he produces a shovel",
        ),
        ("Alice: get shovel", "You picked up shovel"),
        ("Alice: goto cabin", "You moved to cabin"),
        ("Alice: goto forest", "You moved to forest"),
        ("Alice: goto riverbank", "You moved to riverbank"),
        (
            "Alice: bridge the river with the log",
            "You bridge the river with the log and can now reach the other side",
        ),
        ("Alice: goto clearing", "You moved to clearing"),
        (
            "Alice: dig the ground with the shovel",
            "You dig into the soft ground and unearth a pot of gold !!!",
        ),
    ];
    for (command, expected) in steps {
        assert_eq!(engine.handle_command(command), expected, "{command}");
    }

    let look = engine.handle_command("Alice: look");
    assert!(look.contains("A big pot of gold"));
    assert!(look.contains("A deep hole in the ground"));
    assert!(!look.contains("recently disturbed"));
}

#[test]
fn horn_summons_the_lumberjack_as_a_character() {
    let mut engine = extended();
    play(&mut engine, &["Alice: goto forest", "Alice: goto riverbank"]);
    assert_eq!(
        engine.handle_command("Alice: blow horn"),
        "You blow the horn and as if by magic, a lumberjack appears !"
    );
    let riverbank = engine.state().location("riverbank").unwrap();
    assert_eq!(riverbank.kind_of("lumberjack"), Some(EntityKind::Character));
    assert!(!engine.state().storeroom().holds("lumberjack"));
    assert_eq!(
        engine.handle_command("Alice: get lumberjack"),
        "Cannot pick up character: lumberjack"
    );
}

fn command() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "look", "inv", "get", "drop", "goto", "health", "chop", "open", "drink", "fight", "pay",
        "bridge", "dig", "blow", "axe", "coin", "potion", "key", "log", "tree", "trapdoor",
        "elf", "shovel", "horn", "river", "ground", "cabin", "forest", "cellar", "riverbank",
        "clearing", "bob",
    ]);
    (
        prop::sample::select(vec!["Alice", "Bob"]),
        prop::collection::vec(words, 1..4),
    )
        .prop_map(|(player, words)| format!("{player}: {}", words.join(" ")))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn health_never_leaves_its_bounds(commands in prop::collection::vec(command(), 1..40)) {
        let mut engine = extended();
        for line in &commands {
            engine.handle_command(line);
            for player in engine.state().players() {
                prop_assert!((1..=MAX_HEALTH).contains(&player.health()));
            }
        }
    }

    #[test]
    fn rejections_change_nothing_but_new_players(
        setup in prop::collection::vec(command(), 0..20),
        line in command(),
    ) {
        let mut engine = extended();
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
