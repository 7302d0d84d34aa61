//! Action identifiers.
//!
//! Actions are a data table, not a language-level enum: the set of
//! commands an application exposes is configuration, and the engine only
//! ever carries the identifier through to the caller. Conventionally
//! namespaced with dots (`playback.toggle-pause`), but the engine
//! attaches no meaning to the text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for the command a matched bind signals.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
