//! Transient input values — one per raw press/release event.
//!
//! An `Input` is a chord: a physical code plus the modifiers held around
//! it, plus the consecutive-hit count the tracker has assigned so far.
//! Equality and hashing cover the chord only (space tag, code, modifiers);
//! the hit count and the mouse extras (wheel, cursor position) are
//! matching-irrelevant payload.
//!
//! Invariants, enforced at construction:
//! - `hits >= 1`, no matter what arithmetic the caller performs;
//! - `modifiers` never contains the bit the code itself contributes — a
//!   lone Ctrl press carries an empty mask, and Button1's own bit never
//!   appears on a Button1 input.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::code::{InputCode, ModifierMask};

/// A single keyboard input chord.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyInput {
    code: InputCode,
    modifiers: ModifierMask,
    hits: u32,
}

/// A single mouse input chord, with non-matching extras.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MouseInput {
    code: InputCode,
    modifiers: ModifierMask,
    hits: u32,
    wheel_rotation: Option<i32>,
    position: Option<(i32, i32)>,
}

/// A physical input event in one of the two input spaces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Input {
    Key(KeyInput),
    Mouse(MouseInput),
}

impl KeyInput {
    /// Build a key chord. A modifier key carries no modifiers of its own,
    /// so if `code` is itself a modifier the mask is forced empty.
    pub fn new(code: InputCode, modifiers: ModifierMask) -> Self {
        let modifiers = if code.is_modifier_key() {
            ModifierMask::EMPTY
        } else {
            modifiers
        };
        Self {
            code,
            modifiers,
            hits: 1,
        }
    }

    pub fn code(&self) -> InputCode {
        self.code
    }

    pub fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Set the hit count, clamped to at least 1.
    pub fn set_hits(&mut self, hits: u32) {
        self.hits = hits.max(1);
    }

    /// Adjust the hit count by a signed delta, clamped to at least 1.
    pub fn add_hits(&mut self, delta: i32) {
        self.hits = self.hits.saturating_add_signed(delta).max(1);
    }
}

impl MouseInput {
    /// Build a mouse chord. The button's own held-bit is stripped from
    /// the mask (pressing Button1 is not "Button1 while Button1 held").
    pub fn new(code: InputCode, modifiers: ModifierMask) -> Self {
        let modifiers = match code.button_bit() {
            Some(own) => modifiers.without(own),
            None => modifiers,
        };
        Self {
            code,
            modifiers,
            hits: 1,
            wheel_rotation: None,
            position: None,
        }
    }

    /// Attach a wheel rotation (never participates in matching).
    pub fn with_wheel(mut self, rotation: i32) -> Self {
        self.wheel_rotation = Some(rotation);
        self
    }

    /// Attach cursor coordinates (never participate in matching).
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn code(&self) -> InputCode {
        self.code
    }

    pub fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn wheel_rotation(&self) -> Option<i32> {
        self.wheel_rotation
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Set the hit count, clamped to at least 1.
    pub fn set_hits(&mut self, hits: u32) {
        self.hits = hits.max(1);
    }

    /// Adjust the hit count by a signed delta, clamped to at least 1.
    pub fn add_hits(&mut self, delta: i32) {
        self.hits = self.hits.saturating_add_signed(delta).max(1);
    }
}

impl Input {
    /// Convenience constructor for a key chord.
    pub fn key(code: InputCode, modifiers: ModifierMask) -> Self {
        Self::Key(KeyInput::new(code, modifiers))
    }

    /// Convenience constructor for a mouse chord.
    pub fn mouse(code: InputCode, modifiers: ModifierMask) -> Self {
        Self::Mouse(MouseInput::new(code, modifiers))
    }

    pub fn code(&self) -> InputCode {
        match self {
            Self::Key(k) => k.code(),
            Self::Mouse(m) => m.code(),
        }
    }

    pub fn modifiers(&self) -> ModifierMask {
        match self {
            Self::Key(k) => k.modifiers(),
            Self::Mouse(m) => m.modifiers(),
        }
    }

    pub fn hits(&self) -> u32 {
        match self {
            Self::Key(k) => k.hits(),
            Self::Mouse(m) => m.hits(),
        }
    }

    /// Set the hit count, clamped to at least 1.
    pub fn set_hits(&mut self, hits: u32) {
        match self {
            Self::Key(k) => k.set_hits(hits),
            Self::Mouse(m) => m.set_hits(hits),
        }
    }

    /// Adjust the hit count by a signed delta, clamped to at least 1.
    pub fn add_hits(&mut self, delta: i32) {
        match self {
            Self::Key(k) => k.add_hits(delta),
            Self::Mouse(m) => m.add_hits(delta),
        }
    }

    /// Self, with the hit count replaced (clamped to at least 1).
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.set_hits(hits);
        self
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    pub fn is_mouse(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    /// The active-set membership relation: same space, code, and
    /// modifiers. Hit counts and mouse extras are ignored.
    pub fn matches(&self, other: &Input) -> bool {
        self.is_key() == other.is_key()
            && self.code() == other.code()
            && self.modifiers() == other.modifiers()
    }
}

// Equality and hashing deliberately coincide with `matches`: two inputs
// are the same chord regardless of how many hits they have accumulated.
impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Input {}

impl Hash for Input {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_key().hash(state);
        self.code().hash(state);
        self.modifiers().hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
