use serde::Serialize;

use crate::entity::Entity;

/// An insertion-ordered collection of entities keyed by name.
///
/// Names are compared without regard to ASCII case. Several entities may
/// share a name; lookups find the earliest. Removal hands the entity back
/// to the caller so it can be placed in another container; nothing is ever
/// copied between live lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities held.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Add an entity after those already held, even if one shares its name.
    pub fn insert(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Whether an entity with this name is held.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Borrow the entity with this name.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.position(name).map(|pos| &self.entities[pos])
    }

    /// Remove and return the entity with this name.
    pub fn take(&mut self, name: &str) -> Option<Entity> {
        self.position(name).map(|pos| self.entities.remove(pos))
    }

    /// Remove and return every entity, leaving the list empty.
    pub fn drain(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.drain(..)
    }

    /// Iterate over held entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over held entity names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    /// Entity descriptions joined with `", "`. Empty when nothing is held.
    pub fn describe(&self) -> String {
        self.entities
            .iter()
            .map(|e| e.description.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.is_named(name))
    }
}

impl FromIterator<Entity> for EntityList {
    fn from_iter<T: IntoIterator<Item = Entity>>(iter: T) -> Self {
        let mut list = Self::new();
        for entity in iter {
            list.insert(entity);
        }
        list
    }
}
