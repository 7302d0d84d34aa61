//! Custom modifier slots.
//!
//! The toolkit's modifier set is fixed; pipview extends it with five
//! virtual slots a user can map onto any otherwise-ordinary key (hold `a`
//! to make `a+click` a distinct gesture). The manager only answers
//! code→slot questions — deriving which slots are *currently held* is the
//! controller's job, because only it knows the active-input sets.
//!
//! Mapping two slots to the same code is a configuration-time invariant
//! the caller must uphold; the manager does not validate it.

use parking_lot::RwLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use pipview_types::{InputCode, ModifierMask};

/// The five virtual modifier slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ModifierSlot {
    Custom1,
    Custom2,
    Custom3,
    Custom4,
    Custom5,
}

impl ModifierSlot {
    /// The mask bit this slot contributes when its mapped code is held.
    pub fn mask(self) -> ModifierMask {
        match self {
            Self::Custom1 => ModifierMask::CUSTOM_1,
            Self::Custom2 => ModifierMask::CUSTOM_2,
            Self::Custom3 => ModifierMask::CUSTOM_3,
            Self::Custom4 => ModifierMask::CUSTOM_4,
            Self::Custom5 => ModifierMask::CUSTOM_5,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Custom1 => 0,
            Self::Custom2 => 1,
            Self::Custom3 => 2,
            Self::Custom4 => 3,
            Self::Custom5 => 4,
        }
    }
}

/// Number of virtual modifier slots.
pub const SLOT_COUNT: usize = 5;

/// Maps the virtual slots onto input codes. Read-mostly: lookups happen
/// on every press/release, writes only on configuration load.
#[derive(Debug, Default)]
pub struct CustomModifiers {
    slots: RwLock<[Option<InputCode>; SLOT_COUNT]>,
}

impl CustomModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale-replace the slot table. Slots absent from `mapping` end
    /// up unbound.
    pub fn load(&self, mapping: impl IntoIterator<Item = (ModifierSlot, InputCode)>) {
        let mut slots = self.slots.write();
        *slots = [None; SLOT_COUNT];
        for (slot, code) in mapping {
            slots[slot.index()] = Some(code);
        }
    }

    /// Reset to the default table: every slot unbound.
    pub fn load_defaults(&self) {
        self.load([]);
    }

    /// The code a slot is mapped to, if any.
    pub fn binding(&self, slot: ModifierSlot) -> Option<InputCode> {
        self.slots.read()[slot.index()]
    }

    /// Whether any slot is mapped to this code.
    pub fn is_custom_modifier(&self, code: InputCode) -> bool {
        self.slot_for(code).is_some()
    }

    /// The slot mapped to this code, if any.
    pub fn slot_for(&self, code: InputCode) -> Option<ModifierSlot> {
        let slots = self.slots.read();
        ModifierSlot::iter().find(|slot| slots[slot.index()] == Some(code))
    }

    /// Combined mask of every slot whose code appears in `active`.
    /// Unmapped codes contribute nothing.
    pub fn active_mask(&self, active: impl IntoIterator<Item = InputCode>) -> ModifierMask {
        let slots = self.slots.read();
        let mut mask = ModifierMask::EMPTY;
        for code in active {
            for slot in ModifierSlot::iter() {
                if slots[slot.index()] == Some(code) {
                    mask |= slot.mask();
                }
            }
        }
        mask
    }
}

// ============================================================================
// Tests
// ============================================================================
