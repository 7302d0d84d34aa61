//! RON configuration surface.
//!
//! A `BindsConfig` is the whole input configuration of the application:
//! the custom-modifier slot table and the action → binds mapping. The
//! embedder owns persistence and reload policy; this module only parses
//! a document and applies it to a controller.
//!
//! ```ron
//! (
//!     modifiers: {
//!         "custom1": 65,
//!     },
//!     actions: {
//!         "playback.toggle-pause": [
//!             (kind: key, code: 32, hits: 2, delay_ms: 400),
//!         ],
//!         "window.resize": [
//!             (kind: mouse, code: 3, modifiers: ["custom1"], on_press: false),
//!         ],
//!     },
//! )
//! ```
//!
//! Failure policy follows registration: a bind that cannot be built
//! (zero hits, zero delay, unknown modifier name) is skipped with a
//! warning and never aborts the load. Only an unreadable or unparsable
//! document, or an unknown modifier *slot* name, is an error.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use pipview_types::{
    ActionId, Bind, BindOptions, InputCode, KeyInput, ModifierMask, MouseInput,
};

use crate::controller::BindController;
use crate::modifier::ModifierSlot;

/// Configuration load errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unknown custom-modifier slot {0:?} (expected custom1..custom5)")]
    UnknownModifierSlot(String),
}

/// Which input space a configured bind lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindKind {
    Key,
    Mouse,
}

/// One configured bind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindSpec {
    pub kind: BindKind,
    pub code: u32,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default = "default_hits")]
    pub hits: u32,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_on_press")]
    pub on_press: bool,
}

fn default_hits() -> u32 {
    1
}

fn default_delay_ms() -> u64 {
    600
}

fn default_on_press() -> bool {
    true
}

/// The full input configuration document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BindsConfig {
    /// Custom-modifier slot name → input code.
    #[serde(default)]
    pub modifiers: IndexMap<String, u32>,
    /// Action identifier → configured binds.
    #[serde(default)]
    pub actions: IndexMap<String, Vec<BindSpec>>,
}

impl BindsConfig {
    /// Parse a RON document.
    pub fn from_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Read and parse a RON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_str(&std::fs::read_to_string(path)?)
    }

    /// Load this configuration into a controller: custom-modifier table
    /// first, then the bind tables wholesale.
    pub fn apply(&self, controller: &BindController) -> Result<(), ConfigError> {
        let mut slots: Vec<(ModifierSlot, InputCode)> = Vec::new();
        for (name, &code) in &self.modifiers {
            let slot = ModifierSlot::from_str(name)
                .map_err(|_| ConfigError::UnknownModifierSlot(name.clone()))?;
            let code = InputCode::new(code);
            if let Some(pos) = slots.iter().position(|&(_, c)| c == code) {
                // Two slots on one code is ambiguous activation; keep the
                // later assignment only.
                warn!(%slot, %code, dropped = %slots[pos].0, "duplicate custom-modifier code");
                slots.remove(pos);
            }
            slots.push((slot, code));
        }
        controller.custom_modifiers().load(slots);

        let mut table: IndexMap<ActionId, Vec<Bind>> = IndexMap::new();
        for (action, specs) in &self.actions {
            let action = ActionId::from(action.as_str());
            let binds = specs
                .iter()
                .filter_map(|spec| match spec.to_bind(&action) {
                    Ok(bind) => Some(bind),
                    Err(reason) => {
                        warn!(%action, reason, "skipping misconfigured bind");
                        None
                    }
                })
                .collect();
            table.insert(action, binds);
        }
        controller.set_binds(&table);
        Ok(())
    }
}

impl BindSpec {
    fn to_bind(&self, action: &ActionId) -> Result<Bind, &'static str> {
        let mut mask = ModifierMask::EMPTY;
        for name in &self.modifiers {
            mask |= modifier_from_name(name).ok_or("unknown modifier name")?;
        }

        let options = BindOptions::builder()
            .hits(self.hits)
            .delay_ms(self.delay_ms)
            .activate_on_press(self.on_press)
            .build()
            .map_err(|_| "invalid bind options")?;

        let code = InputCode::new(self.code);
        Ok(match self.kind {
            BindKind::Key => Bind::key(action.clone(), KeyInput::new(code, mask), options),
            BindKind::Mouse => Bind::mouse(action.clone(), MouseInput::new(code, mask), options),
        })
    }
}

/// Resolve a configured modifier name to its mask bit.
pub fn modifier_from_name(name: &str) -> Option<ModifierMask> {
    match name {
        "shift" => Some(ModifierMask::SHIFT),
        "ctrl" | "control" => Some(ModifierMask::CTRL),
        "alt" => Some(ModifierMask::ALT),
        "altgraph" => Some(ModifierMask::ALT_GRAPH),
        "meta" => Some(ModifierMask::META),
        "button1" => Some(ModifierMask::BUTTON1),
        "button2" => Some(ModifierMask::BUTTON2),
        "button3" => Some(ModifierMask::BUTTON3),
        _ => ModifierSlot::from_str(name).ok().map(ModifierSlot::mask),
    }
}

// ============================================================================
// Tests
// ============================================================================
