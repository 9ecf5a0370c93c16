use crate::collection::EntityList;

/// Health a player starts with and can never exceed.
pub const MAX_HEALTH: u8 = 3;

/// A connected player.
///
/// Players are created lazily the first time a name issues a command and
/// are never destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's name, exactly as typed before `": "`.
    pub name: String,
    /// Name of the location the player stands in.
    pub location: String,
    /// Items the player carries.
    pub inventory: EntityList,
    health: u8,
}

impl Player {
    /// Create a player with full health and an empty inventory.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            inventory: EntityList::new(),
            health: MAX_HEALTH,
        }
    }

    /// Current health, always within `0..=MAX_HEALTH`.
    pub fn health(&self) -> u8 {
        self.health
    }

    /// Gain one point of health, up to [`MAX_HEALTH`].
    pub fn heal(&mut self) {
        if self.health < MAX_HEALTH {
            self.health += 1;
        }
    }

    /// Lose one point of health, down to zero.
    ///
    /// Returns `true` when this blow brought the player to zero.
    pub fn hurt(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    /// Restore full health.
    pub fn reset_health(&mut self) {
        self.health = MAX_HEALTH;
    }

    /// Whether the player carries an item with this name.
    pub fn holds(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }
}
