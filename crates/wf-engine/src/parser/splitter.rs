use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CommandError, CommandResult};

static PLAYER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z \t\n\x0B\f\r'-]+$").expect("player name pattern is valid"));

const SEPARATOR: &str = ": ";

/// ASCII whitespace, vertical tab included. Unicode spaces are word
/// characters here.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// A command line split into its speaker and lower-cased words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitCommand<'a> {
    /// The player name exactly as typed.
    pub player: &'a str,
    /// Command words, lower-cased, in order.
    pub words: Vec<String>,
}

/// Split `<player>: <text>` on the first `": "`.
///
/// Fails with [`CommandError::MissingTrigger`] when the separator is
/// missing, the player name has characters other than letters, spaces,
/// apostrophes and hyphens, or the text has no words.
pub fn split(line: &str) -> CommandResult<SplitCommand<'_>> {
    let (player, text) = line
        .split_once(SEPARATOR)
        .ok_or(CommandError::MissingTrigger)?;
    if !PLAYER_NAME.is_match(player) {
        return Err(CommandError::MissingTrigger);
    }
    let words: Vec<String> = text
        .to_lowercase()
        .split(is_blank)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(CommandError::MissingTrigger);
    }
    Ok(SplitCommand { player, words })
}
