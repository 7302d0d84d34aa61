//! Bind configuration values: options, details, and the key/mouse bind.
//!
//! All three are immutable configuration built at startup (or on a
//! config reload) and handed to the controller wholesale. Equality on
//! `BindDetails` deliberately excludes the action: two binds on the same
//! gesture with the same options are the *same bind* for duplicate
//! detection, whichever command they point at.

use std::hash::{Hash, Hasher};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::action::ActionId;
use crate::input::{Input, KeyInput, MouseInput};

/// Hard construction failures for bind configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindError {
    #[error("bind options require at least one hit")]
    ZeroHits,
    #[error("consecutive-hit delay must be greater than zero")]
    ZeroDelay,
}

/// Default consecutive-hit window.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(600);

/// Activation options for one bind. Immutable once built.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct BindOptions {
    hits: u32,
    delay: Duration,
    activate_on_press: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            hits: 1,
            delay: DEFAULT_DELAY,
            activate_on_press: true,
        }
    }
}

impl BindOptions {
    pub fn builder() -> BindOptionsBuilder {
        BindOptionsBuilder::default()
    }

    /// Required consecutive-hit count (always >= 1).
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// The window within which the next hit continues the sequence.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the bind fires on press (true) or on release (false).
    pub fn activate_on_press(&self) -> bool {
        self.activate_on_press
    }

    /// Whether an accumulated hit count satisfies this bind's
    /// requirement: a positive multiple of the required count, so a
    /// double-press bind fires on the 2nd, 4th, 6th… press of a
    /// continuing sequence.
    pub fn satisfied_by(&self, hits: u32) -> bool {
        hits >= self.hits && hits % self.hits == 0
    }
}

/// Builder for [`BindOptions`]; `build` validates the hard preconditions.
#[derive(Clone, Debug)]
pub struct BindOptionsBuilder {
    hits: u32,
    delay: Duration,
    activate_on_press: bool,
}

impl Default for BindOptionsBuilder {
    fn default() -> Self {
        let opts = BindOptions::default();
        Self {
            hits: opts.hits,
            delay: opts.delay,
            activate_on_press: opts.activate_on_press,
        }
    }
}

impl BindOptionsBuilder {
    pub fn hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay_ms(self, millis: u64) -> Self {
        self.delay(Duration::from_millis(millis))
    }

    pub fn activate_on_press(mut self, on_press: bool) -> Self {
        self.activate_on_press = on_press;
        self
    }

    pub fn build(self) -> Result<BindOptions, BindError> {
        if self.hits == 0 {
            return Err(BindError::ZeroHits);
        }
        if self.delay.is_zero() {
            return Err(BindError::ZeroDelay);
        }
        Ok(BindOptions {
            hits: self.hits,
            delay: self.delay,
            activate_on_press: self.activate_on_press,
        })
    }
}

/// One bind's activation data: the action it signals, the gesture that
/// triggers it, and its options.
///
/// `input == None` is the *dummy* form — an action referenced with no
/// key/mouse activation data (pure wheel handling, programmatic
/// signals). Dummies are skipped at registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindDetails {
    action: ActionId,
    input: Option<Input>,
    options: BindOptions,
}

impl BindDetails {
    pub fn new(action: ActionId, input: Input, options: BindOptions) -> Self {
        Self {
            action,
            input: Some(input),
            options,
        }
    }

    /// An action reference with no activation data.
    pub fn dummy(action: ActionId) -> Self {
        Self {
            action,
            input: None,
            options: BindOptions::default(),
        }
    }

    pub fn action(&self) -> &ActionId {
        &self.action
    }

    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// The action is the one field settable after construction.
    pub fn set_action(&mut self, action: ActionId) {
        self.action = action;
    }

    /// Self, re-pointed at a different action.
    pub fn with_action(mut self, action: ActionId) -> Self {
        self.action = action;
        self
    }
}

// The action is excluded on purpose: duplicate detection compares
// gestures, not the commands they point at.
impl PartialEq for BindDetails {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input && self.options == other.options
    }
}

impl Eq for BindDetails {}

impl Hash for BindDetails {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.input.hash(state);
        self.options.hash(state);
    }
}

/// A bind in one of the two input spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bind {
    Key(BindDetails),
    Mouse(BindDetails),
}

impl Bind {
    /// A key-space bind. The tag and the input variant always agree.
    pub fn key(action: ActionId, input: KeyInput, options: BindOptions) -> Self {
        Self::Key(BindDetails::new(action, Input::Key(input), options))
    }

    /// A mouse-space bind.
    pub fn mouse(action: ActionId, input: MouseInput, options: BindOptions) -> Self {
        Self::Mouse(BindDetails::new(action, Input::Mouse(input), options))
    }

    /// A key-space dummy (action with no activation data).
    pub fn dummy(action: ActionId) -> Self {
        Self::Key(BindDetails::dummy(action))
    }

    pub fn details(&self) -> &BindDetails {
        match self {
            Self::Key(d) | Self::Mouse(d) => d,
        }
    }

    pub fn details_mut(&mut self) -> &mut BindDetails {
        match self {
            Self::Key(d) | Self::Mouse(d) => d,
        }
    }

    pub fn action(&self) -> &ActionId {
        self.details().action()
    }

    pub fn input(&self) -> Option<&Input> {
        self.details().input()
    }

    pub fn options(&self) -> &BindOptions {
        self.details().options()
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
