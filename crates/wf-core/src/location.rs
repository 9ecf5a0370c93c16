use serde::Serialize;

use crate::collection::EntityList;
use crate::entity::{Entity, EntityKind};

/// A place in the world.
///
/// Holds one entity list per [`EntityKind`] and the names of locations
/// reachable from here. Paths are one-directional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    name: String,
    description: String,
    artefacts: EntityList,
    furniture: EntityList,
    characters: EntityList,
    paths: Vec<String>,
}

impl Location {
    /// Create an empty location.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            artefacts: EntityList::new(),
            furniture: EntityList::new(),
            characters: EntityList::new(),
            paths: Vec::new(),
        }
    }

    /// The location's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Entities of one kind held here.
    pub fn entities(&self, kind: EntityKind) -> &EntityList {
        match kind {
            EntityKind::Artefact => &self.artefacts,
            EntityKind::Furniture => &self.furniture,
            EntityKind::Character => &self.characters,
        }
    }

    fn entities_mut(&mut self, kind: EntityKind) -> &mut EntityList {
        match kind {
            EntityKind::Artefact => &mut self.artefacts,
            EntityKind::Furniture => &mut self.furniture,
            EntityKind::Character => &mut self.characters,
        }
    }

    /// Place an entity in the list matching its kind.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities_mut(entity.kind).insert(entity);
    }

    /// Builder form of [`Location::add_entity`].
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.add_entity(entity);
        self
    }

    /// The kind of the entity with this name, searching artefacts, then
    /// furniture, then characters.
    pub fn kind_of(&self, name: &str) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| self.entities(*kind).contains(name))
    }

    /// Whether any entity with this name is here.
    pub fn holds(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Remove and return an entity of a specific kind.
    pub fn take_entity(&mut self, kind: EntityKind, name: &str) -> Option<Entity> {
        self.entities_mut(kind).take(name)
    }

    /// Remove and return an entity of whatever kind it is.
    pub fn take_any(&mut self, name: &str) -> Option<Entity> {
        let kind = self.kind_of(name)?;
        self.take_entity(kind, name)
    }

    /// Names of locations reachable from here.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Whether a path leads to `destination`.
    pub fn has_path(&self, destination: &str) -> bool {
        self.paths.iter().any(|p| p.eq_ignore_ascii_case(destination))
    }

    /// Open a path to `destination`. Adding an existing path is a no-op.
    pub fn add_path(&mut self, destination: impl Into<String>) {
        let destination = destination.into();
        if !self.has_path(&destination) {
            self.paths.push(destination);
        }
    }

    /// Close the path to `destination`, if any.
    pub fn remove_path(&mut self, destination: &str) {
        self.paths.retain(|p| !p.eq_ignore_ascii_case(destination));
    }

    /// Move every entity out of `other` into this location.
    pub fn absorb(&mut self, mut other: Location) {
        for kind in EntityKind::ALL {
            let moved: Vec<Entity> = other.entities_mut(kind).drain().collect();
            for entity in moved {
                self.add_entity(entity);
            }
        }
    }
}
