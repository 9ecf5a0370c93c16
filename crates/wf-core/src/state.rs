use std::collections::BTreeMap;
use std::sync::Arc;

use crate::action::{ActionCatalog, GameAction};
use crate::entity::{Entity, EntityKind};
use crate::error::{WfError, WfResult};
use crate::location::Location;
use crate::player::Player;

/// Name of the hidden location that holds entities out of play.
pub const STOREROOM: &str = "storeroom";

/// One of the three places an entity can live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// A named location's entity lists.
    Location(String),
    /// A named player's inventory.
    Inventory(String),
    /// The storeroom.
    Storeroom,
}

/// Outcome of a successful [`GameState::move_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// The player was already at the destination.
    AlreadyThere,
    /// The player walked along a path to the destination.
    Moved,
}

/// The aggregate world: locations, players, and the action catalog.
///
/// The set of location names is fixed once the world is loaded. The
/// storeroom always exists and is never reachable through normal play.
#[derive(Debug, Clone)]
pub struct GameState {
    start_location: String,
    // Keyed by lower-cased name.
    locations: BTreeMap<String, Location>,
    storeroom: Location,
    players: BTreeMap<String, Player>,
    actions: ActionCatalog,
}

impl GameState {
    /// Create an empty world whose players start at `start_location`.
    pub fn new(start_location: impl Into<String>) -> Self {
        Self {
            start_location: start_location.into(),
            locations: BTreeMap::new(),
            storeroom: Location::new(STOREROOM, ""),
            players: BTreeMap::new(),
            actions: ActionCatalog::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Name of the location new and respawned players appear in.
    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    /// Add a location.
    ///
    /// A location named like the storeroom is merged into it instead.
    pub fn add_location(&mut self, location: Location) -> WfResult<()> {
        let key = location.name().to_lowercase();
        if key == STOREROOM {
            if !location.description().is_empty() {
                self.storeroom.set_description(location.description());
            }
            self.storeroom.absorb(location);
            return Ok(());
        }
        if self.locations.contains_key(&key) {
            return Err(WfError::DuplicateLocation(location.name().to_string()));
        }
        self.locations.insert(key, location);
        Ok(())
    }

    /// Look up a location by name, including the storeroom.
    pub fn location(&self, name: &str) -> Option<&Location> {
        let key = name.to_lowercase();
        if key == STOREROOM {
            Some(&self.storeroom)
        } else {
            self.locations.get(&key)
        }
    }

    /// Mutable lookup of a location by name, including the storeroom.
    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        let key = name.to_lowercase();
        if key == STOREROOM {
            Some(&mut self.storeroom)
        } else {
            self.locations.get_mut(&key)
        }
    }

    /// Every location, storeroom last.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .values()
            .chain(std::iter::once(&self.storeroom))
    }

    /// Whether `name` names a location (the storeroom included).
    pub fn is_location_name(&self, name: &str) -> bool {
        self.location(name).is_some()
    }

    /// The storeroom.
    pub fn storeroom(&self) -> &Location {
        &self.storeroom
    }

    /// Mutable access to the storeroom.
    pub fn storeroom_mut(&mut self) -> &mut Location {
        &mut self.storeroom
    }

    /// Open a one-way path between two existing locations.
    pub fn add_path(&mut self, from: &str, to: &str) -> WfResult<()> {
        let destination = self
            .location(to)
            .map(|l| l.name().to_string())
            .ok_or_else(|| WfError::UnknownLocation(to.to_string()))?;
        self.location_mut(from)
            .ok_or_else(|| WfError::UnknownLocation(from.to_string()))?
            .add_path(destination);
        Ok(())
    }

    /// Check the invariants a loaded world must satisfy before serving.
    pub fn validate(&self) -> WfResult<()> {
        let start_key = self.start_location.to_lowercase();
        if start_key == STOREROOM || !self.locations.contains_key(&start_key) {
            return Err(WfError::InvalidStartLocation(self.start_location.clone()));
        }
        for location in self.locations() {
            if let Some(dangling) = location.paths().iter().find(|p| !self.is_location_name(p)) {
                return Err(WfError::UnknownLocation(dangling.clone()));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Register a custom action.
    pub fn add_action(&mut self, action: GameAction) -> Arc<GameAction> {
        self.actions.insert(action)
    }

    /// The action catalog.
    pub fn actions(&self) -> &ActionCatalog {
        &self.actions
    }

    // -----------------------------------------------------------------------
    // Players
    // -----------------------------------------------------------------------

    /// Fetch a player, creating it at the start location on first sight.
    pub fn ensure_player(&mut self, name: &str) -> &mut Player {
        let start = &self.start_location;
        self.players
            .entry(name.to_string())
            .or_insert_with(|| Player::new(name, start.clone()))
    }

    /// Look up a player by exact name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Mutable lookup of a player by exact name.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    /// Every player, ordered by name.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Players standing in `location`.
    pub fn players_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Player> {
        self.players
            .values()
            .filter(move |p| p.location.eq_ignore_ascii_case(location))
    }

    fn require_player(&self, name: &str) -> WfResult<&Player> {
        self.player(name)
            .ok_or_else(|| WfError::PlayerNotFound(name.to_string()))
    }

    // -----------------------------------------------------------------------
    // Ownership transfer
    // -----------------------------------------------------------------------

    /// Move the entity named `name` from one container to another.
    ///
    /// The source loses the entity and the destination gains the same
    /// value. Returns the entity's kind, or `None` when the source does not
    /// hold it or the destination does not exist.
    pub fn transfer(&mut self, from: &Container, to: &Container, name: &str) -> Option<EntityKind> {
        if !self.has_container(to) {
            return None;
        }
        let entity = self.take_from(from, name)?;
        let kind = entity.kind;
        self.put_into(to, entity);
        Some(kind)
    }

    fn has_container(&self, container: &Container) -> bool {
        match container {
            Container::Location(name) => self.is_location_name(name),
            Container::Inventory(player) => self.players.contains_key(player),
            Container::Storeroom => true,
        }
    }

    fn take_from(&mut self, container: &Container, name: &str) -> Option<Entity> {
        match container {
            Container::Location(location) => self.location_mut(location)?.take_any(name),
            Container::Inventory(player) => self.players.get_mut(player)?.inventory.take(name),
            Container::Storeroom => self.storeroom.take_any(name),
        }
    }

    fn put_into(&mut self, container: &Container, entity: Entity) {
        match container {
            Container::Location(location) => {
                if let Some(location) = self.location_mut(location) {
                    location.add_entity(entity);
                }
            }
            Container::Inventory(player) => {
                if let Some(player) = self.players.get_mut(player) {
                    player.inventory.insert(entity);
                }
            }
            Container::Storeroom => self.storeroom.add_entity(entity),
        }
    }

    // -----------------------------------------------------------------------
    // Movement and inventory primitives
    // -----------------------------------------------------------------------

    /// Move a player along a path.
    pub fn move_player(&mut self, player: &str, destination: &str) -> WfResult<Arrival> {
        let current = self.require_player(player)?.location.clone();
        if current.eq_ignore_ascii_case(destination) {
            return Ok(Arrival::AlreadyThere);
        }
        let reachable = self
            .location(&current)
            .is_some_and(|here| here.has_path(destination));
        let target = self
            .location(destination)
            .filter(|_| reachable)
            .map(|l| l.name().to_string())
            .ok_or_else(|| WfError::NoPath {
                from: current.clone(),
                to: destination.to_string(),
            })?;
        if let Some(p) = self.players.get_mut(player) {
            p.location = target;
        }
        Ok(Arrival::Moved)
    }

    /// Pick up a portable entity from the player's location.
    ///
    /// Returns the name of the entity picked up.
    pub fn pick_up(&mut self, player: &str, item: &str) -> WfResult<String> {
        let location = self.require_player(player)?.location.clone();
        let here = self
            .location(&location)
            .ok_or_else(|| WfError::UnknownLocation(location.clone()))?;
        let kind = here
            .kind_of(item)
            .ok_or_else(|| WfError::NoSuchItemHere(item.to_string()))?;
        if !kind.is_portable() {
            return Err(WfError::CannotPickUp {
                kind,
                name: item.to_string(),
            });
        }
        let name = here
            .entities(kind)
            .get(item)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| item.to_string());
        self.transfer(
            &Container::Location(location),
            &Container::Inventory(player.to_string()),
            item,
        );
        Ok(name)
    }

    /// Drop a held item into the player's location.
    ///
    /// Dropped items always land as plain artefacts carrying only their name
    /// and description. Returns the name of the entity dropped.
    pub fn drop_item(&mut self, player: &str, item: &str) -> WfResult<String> {
        let location = self.require_player(player)?.location.clone();
        if !self.is_location_name(&location) {
            return Err(WfError::UnknownLocation(location));
        }
        let held = self
            .players
            .get_mut(player)
            .and_then(|p| p.inventory.take(item))
            .ok_or_else(|| WfError::NotInInventory(item.to_string()))?;
        let name = held.name.clone();
        self.put_into(
            &Container::Location(location),
            Entity::artefact(held.name, held.description),
        );
        Ok(name)
    }

    /// Empty a dead player's inventory into `at` and send them to the start
    /// location. Health is left untouched.
    pub fn respawn(&mut self, player: &str, at: &str) {
        let Some(p) = self.players.get_mut(player) else {
            return;
        };
        let dropped: Vec<Entity> = p.inventory.drain().collect();
        p.location = self.start_location.clone();
        if let Some(location) = self.location_mut(at) {
            for entity in dropped {
                location.add_entity(entity);
            }
        }
    }
}
