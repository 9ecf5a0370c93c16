use crate::entity::EntityKind;

/// Alias for `Result<T, WfError>`.
pub type WfResult<T> = Result<T, WfError>;

/// Errors raised by the world model.
///
/// The first group is raised while a world is being assembled and aborts
/// loading. The second group describes domain-impossible player requests;
/// their `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WfError {
    /// A location with the same name already exists.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// A path or lookup named a location that does not exist.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(String),

    /// The configured start location is missing or unusable.
    #[error("invalid start location: \"{0}\"")]
    InvalidStartLocation(String),

    /// The named player has never issued a command.
    #[error("Player {0} not found")]
    PlayerNotFound(String),

    /// The item exists here but is not portable.
    #[error("Cannot pick up {kind}: {name}")]
    CannotPickUp {
        /// What kind of entity the player tried to take.
        kind: EntityKind,
        /// The requested name.
        name: String,
    },

    /// Nothing with that name is in the player's location.
    #[error("No such item here")]
    NoSuchItemHere(String),

    /// The player does not hold the item.
    #[error("No such item in inventory")]
    NotInInventory(String),

    /// The player's location has no path to the destination.
    #[error("No path to that location")]
    NoPath {
        /// Where the player stands.
        from: String,
        /// Where the player tried to go.
        to: String,
    },
}
