//! Physical input codes and modifier bitmasks.
//!
//! `InputCode` is the engine's own numbering for keys and mouse buttons.
//! The event-source adapter translates toolkit keycodes into this space
//! before anything reaches the bind engine, which keeps the engine
//! toolkit-agnostic. Key space and mouse space are separate namespaces
//! (they live in separate registries), so a key code and a button code
//! may share a numeric value.
//!
//! Scroll events have no press/release identity of their own in most
//! toolkits, so the engine reserves synthetic codes for them in a high
//! range no real keycode occupies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a physical key or mouse button.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputCode(u32);

/// First value of the synthetic code range.
pub const SYNTHETIC_BASE: u32 = 0xFFFF_FF00;

impl InputCode {
    // ── Standard modifier keys (key space) ──────────────────────────────

    pub const SHIFT: InputCode = InputCode(0x10);
    pub const CONTROL: InputCode = InputCode(0x11);
    pub const ALT: InputCode = InputCode(0x12);
    pub const ALT_GRAPH: InputCode = InputCode(0x13);
    pub const META: InputCode = InputCode(0x14);

    // ── Mouse buttons (mouse space) ─────────────────────────────────────

    pub const BUTTON1: InputCode = InputCode(1);
    pub const BUTTON2: InputCode = InputCode(2);
    pub const BUTTON3: InputCode = InputCode(3);

    // ── Synthetic scroll codes (mouse space, disjoint high range) ───────

    pub const SCROLL_UP: InputCode = InputCode(SYNTHETIC_BASE);
    pub const SCROLL_DOWN: InputCode = InputCode(SYNTHETIC_BASE + 1);
    pub const SCROLL: InputCode = InputCode(SYNTHETIC_BASE + 2);

    /// Wrap a raw code value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw code value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is one of the reserved synthetic scroll codes.
    pub const fn is_synthetic(self) -> bool {
        self.0 >= SYNTHETIC_BASE
    }

    /// Whether this code is a standard modifier key.
    pub fn is_modifier_key(self) -> bool {
        self.modifier_bit().is_some()
    }

    /// The mask bit a standard modifier key contributes when held.
    ///
    /// `None` for every non-modifier code. Key space only — button codes
    /// go through [`InputCode::button_bit`].
    pub fn modifier_bit(self) -> Option<ModifierMask> {
        match self {
            Self::SHIFT => Some(ModifierMask::SHIFT),
            Self::CONTROL => Some(ModifierMask::CTRL),
            Self::ALT => Some(ModifierMask::ALT),
            Self::ALT_GRAPH => Some(ModifierMask::ALT_GRAPH),
            Self::META => Some(ModifierMask::META),
            _ => None,
        }
    }

    /// The mask bit a held mouse button contributes. Mouse space only.
    pub fn button_bit(self) -> Option<ModifierMask> {
        match self {
            Self::BUTTON1 => Some(ModifierMask::BUTTON1),
            Self::BUTTON2 => Some(ModifierMask::BUTTON2),
            Self::BUTTON3 => Some(ModifierMask::BUTTON3),
            _ => None,
        }
    }
}

impl From<u32> for InputCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Bitwise combination of held modifiers.
///
/// Standard modifiers and mouse buttons occupy the low bits; the five
/// custom-modifier slots are reserved at bits 24..29 so they can never
/// collide with anything a toolkit reports.
#[derive(Clone, Copy, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierMask(u32);

impl ModifierMask {
    pub const EMPTY: ModifierMask = ModifierMask(0);

    pub const SHIFT: ModifierMask = ModifierMask(1 << 0);
    pub const CTRL: ModifierMask = ModifierMask(1 << 1);
    pub const ALT: ModifierMask = ModifierMask(1 << 2);
    pub const ALT_GRAPH: ModifierMask = ModifierMask(1 << 3);
    pub const META: ModifierMask = ModifierMask(1 << 4);
    pub const BUTTON1: ModifierMask = ModifierMask(1 << 5);
    pub const BUTTON2: ModifierMask = ModifierMask(1 << 6);
    pub const BUTTON3: ModifierMask = ModifierMask(1 << 7);

    pub const CUSTOM_1: ModifierMask = ModifierMask(1 << 24);
    pub const CUSTOM_2: ModifierMask = ModifierMask(1 << 25);
    pub const CUSTOM_3: ModifierMask = ModifierMask(1 << 26);
    pub const CUSTOM_4: ModifierMask = ModifierMask(1 << 27);
    pub const CUSTOM_5: ModifierMask = ModifierMask(1 << 28);

    /// All standard (non-custom) bits.
    pub const STANDARD: ModifierMask = ModifierMask(0xFF);
    /// All custom-slot bits.
    pub const CUSTOM_ALL: ModifierMask = ModifierMask(0x1F << 24);

    /// Wrap a raw mask value.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw mask value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: ModifierMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: ModifierMask) -> bool {
        self.0 & other.0 != 0
    }

    /// `self` with every bit of `other` cleared.
    pub const fn without(self, other: ModifierMask) -> Self {
        Self(self.0 & !other.0)
    }
}

impl std::ops::BitOr for ModifierMask {
    type Output = ModifierMask;
    fn bitor(self, rhs: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ModifierMask {
    fn bitor_assign(&mut self, rhs: ModifierMask) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for ModifierMask {
    type Output = ModifierMask;
    fn bitand(self, rhs: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 & rhs.0)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        const NAMES: &[(ModifierMask, &str)] = &[
            (ModifierMask::SHIFT, "shift"),
            (ModifierMask::CTRL, "ctrl"),
            (ModifierMask::ALT, "alt"),
            (ModifierMask::ALT_GRAPH, "altgraph"),
            (ModifierMask::META, "meta"),
            (ModifierMask::BUTTON1, "button1"),
            (ModifierMask::BUTTON2, "button2"),
            (ModifierMask::BUTTON3, "button3"),
            (ModifierMask::CUSTOM_1, "custom1"),
            (ModifierMask::CUSTOM_2, "custom2"),
            (ModifierMask::CUSTOM_3, "custom3"),
            (ModifierMask::CUSTOM_4, "custom4"),
            (ModifierMask::CUSTOM_5, "custom5"),
        ];
        let mut first = true;
        for (bit, name) in NAMES {
            if self.contains(*bit) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModifierMask({self})")
    }
}

// ============================================================================
// Tests
// ============================================================================
