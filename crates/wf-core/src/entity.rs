use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The kind of an entity.
///
/// Only artefacts are portable; furniture and characters stay where the
/// world places them and can only be moved by custom actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A portable object that can be carried in an inventory.
    Artefact,
    /// A fixed object in a location.
    Furniture,
    /// A person or creature in a location.
    Character,
}

impl EntityKind {
    /// Every kind, in the order locations are searched.
    pub const ALL: [EntityKind; 3] = [Self::Artefact, Self::Furniture, Self::Character];

    /// Whether entities of this kind can be picked up.
    pub fn is_portable(self) -> bool {
        matches!(self, Self::Artefact)
    }

    /// Parse a kind from an entities-file cluster name.
    ///
    /// Accepts both the plural cluster names (`artefacts`, `characters`)
    /// and their singular forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "artefacts" | "artefact" | "artifacts" | "artifact" => Some(Self::Artefact),
            "furniture" => Some(Self::Furniture),
            "characters" | "character" => Some(Self::Character),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artefact => write!(f, "artefact"),
            Self::Furniture => write!(f, "furniture"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// A named thing in the world.
///
/// Entities are owned by exactly one container at a time: a location, a
/// player's inventory, or the storeroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// What kind of entity this is.
    pub kind: EntityKind,
    /// Name used to refer to the entity in commands.
    pub name: String,
    /// Text shown by `look` and `inventory`.
    pub description: String,
    /// Free-form attributes from the world definition.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Entity {
    /// Create an entity with no attributes.
    pub fn new(kind: EntityKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Create an artefact.
    pub fn artefact(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(EntityKind::Artefact, name, description)
    }

    /// Fabricate a bare artefact from a name, described as `"A <name>"`.
    ///
    /// Used when an action consumes an entity into the storeroom or
    /// produces something the storeroom does not hold.
    pub fn placeholder(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("A {name}");
        Self::artefact(name, description)
    }

    /// Attach an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this entity's name matches `name`, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Whether this entity can be carried.
    pub fn is_portable(&self) -> bool {
        self.kind.is_portable()
    }
}
