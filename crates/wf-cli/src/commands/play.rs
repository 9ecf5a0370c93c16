//! Play from the terminal as a single player.

use std::io::{self, BufRead, Write};

use wf_engine::GameEngine;

use crate::config::WorldArgs;

/// Read commands from stdin, one per line, until end of input.
pub fn run(world: &WorldArgs, player: &str) -> Result<(), String> {
    let mut engine = GameEngine::new(super::load_world(world)?);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        let response = engine.handle_command(&format!("{player}: {command}"));
        writeln!(stdout, "{response}").map_err(|e| e.to_string())?;
    }

    Ok(())
}
