//! Command rejections.
//!
//! Every variant's `Display` text is the exact response the player sees.

use std::fmt;

use thiserror::Error;
use wf_core::WfError;

/// Result type for command processing.
pub type CommandResult<T> = Result<T, CommandError>;

/// Why a built-in verb was used incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misuse {
    /// `look`, `inv`, `inventory` and `health` were given subjects.
    TakesNoSubjects,
    /// `health` mentioned a player.
    NoPlayerNames,
    /// `get`, `drop` or `goto` were given several subjects.
    OnlyOneSubject,
    /// A custom action was triggered without any subject.
    NeedsSubject,
}

impl fmt::Display for Misuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::TakesNoSubjects => "takes no subjects",
            Self::NoPlayerNames => "cannot with player names",
            Self::OnlyOneSubject => "allows only one subject",
            Self::NeedsSubject => "must input at least one subject",
        };
        f.write_str(reason)
    }
}

/// A rejected command. No rejected command changes the world, apart from
/// creating a player on first sight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line had no valid player name or no command text.
    #[error("Missing valid trigger")]
    MissingTrigger,

    /// No word is a built-in verb or an action trigger.
    #[error("No valid trigger found")]
    NoTrigger,

    /// A verb was given the wrong subjects.
    #[error("Invalid command: '{trigger}' {reason}")]
    Misuse {
        /// The verb as typed.
        trigger: String,
        /// The rule that was broken.
        reason: Misuse,
    },

    /// `get`, `drop` or `goto` without a subject.
    #[error("no such item")]
    NoSubject,

    /// No action is declared for the trigger.
    #[error("No matching action found for '{0}'")]
    NoMatchingAction(String),

    /// Several actions are declared for the trigger and the command did not
    /// single one out.
    #[error("Ambiguous command: multiple actions match '{0}'")]
    Ambiguous(String),

    /// The command names entities the only declared action does not use.
    #[error("Invalid command: extraneous entities - {}", .0.join(", "))]
    Extraneous(Vec<String>),

    /// The only declared action's subjects are not all at hand.
    #[error("Invalid command: subjects not available or missing")]
    SubjectsUnavailable,

    /// A subject of the chosen action sits in another player's inventory.
    #[error("Subject '{0}' is not available")]
    HeldByOther(String),

    /// A subject of the chosen action is nowhere the player can reach.
    #[error("Subject '{0}' is not here")]
    NotHere(String),

    /// A movement or inventory primitive refused the request.
    #[error(transparent)]
    World(#[from] WfError),
}
