use std::collections::BTreeMap;
use std::sync::Arc;

/// The reserved name that consumes or produces a point of player health.
pub const HEALTH: &str = "health";

/// A data-driven custom action.
///
/// Actions have no identity of their own; they are matched by content.
/// Triggers and subjects are stored lower-cased because player commands
/// are lower-cased before matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameAction {
    /// Words that invoke this action.
    pub triggers: Vec<String>,
    /// Entity names that must be available for the action to run.
    pub subjects: Vec<String>,
    /// Names removed from play (entities, locations, or `health`).
    pub consumed: Vec<String>,
    /// Names brought into play (entities, locations, or `health`).
    pub produced: Vec<String>,
    /// Text returned to the player on success.
    pub narration: String,
}

impl GameAction {
    /// Create an action with only a narration.
    pub fn new(narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            ..Self::default()
        }
    }

    /// Add a trigger word.
    pub fn with_trigger(mut self, trigger: &str) -> Self {
        push_normalized(&mut self.triggers, trigger, true);
        self
    }

    /// Add a required subject.
    pub fn with_subject(mut self, subject: &str) -> Self {
        push_normalized(&mut self.subjects, subject, true);
        self
    }

    /// Add a consumed name.
    pub fn consumes(mut self, name: &str) -> Self {
        push_normalized(&mut self.consumed, name, false);
        self
    }

    /// Add a produced name.
    pub fn produces(mut self, name: &str) -> Self {
        push_normalized(&mut self.produced, name, false);
        self
    }

    /// Whether `name` is one of this action's declared subjects.
    pub fn has_subject(&self, name: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

fn push_normalized(list: &mut Vec<String>, value: &str, lowercase: bool) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let value = if lowercase {
        value.to_lowercase()
    } else {
        value.to_string()
    };
    if !list.contains(&value) {
        list.push(value);
    }
}

/// All loaded actions, indexed by trigger word.
///
/// One trigger may map to several actions; candidates keep load order.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    by_trigger: BTreeMap<String, Vec<Arc<GameAction>>>,
    count: usize,
}

impl ActionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under each of its triggers.
    pub fn insert(&mut self, action: GameAction) -> Arc<GameAction> {
        let action = Arc::new(action);
        for trigger in &action.triggers {
            self.by_trigger
                .entry(trigger.clone())
                .or_default()
                .push(Arc::clone(&action));
        }
        self.count += 1;
        action
    }

    /// Every action declared for `trigger`.
    pub fn candidates(&self, trigger: &str) -> &[Arc<GameAction>] {
        self.by_trigger
            .get(trigger)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every trigger word, sorted.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.by_trigger.keys().map(String::as_str)
    }

    /// Number of actions loaded.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no actions are loaded.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
