//! The bind registry: gesture → sorted hit-count table.
//!
//! One registry per input space. Each registered gesture owns a map
//! sorted by required hit count, which gives the hit tracker its ceiling
//! lookup ("is there a bind on this gesture that still needs more
//! hits?"). Lookups run concurrently with the event stream;
//! reconfiguration replaces contents wholesale without tearing an
//! in-flight lookup.

use std::collections::BTreeMap;
use std::ops::Bound;

use dashmap::DashMap;

use pipview_types::{BindDetails, Input};

/// Concurrent registry of binds for one input space.
#[derive(Debug, Default)]
pub struct BindRegistry {
    binds: DashMap<Input, BTreeMap<u32, BindDetails>>,
}

impl BindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bind under its gesture and required hit count. The last
    /// write to a `(gesture, hits)` slot wins; the replaced bind is
    /// returned. Dummy binds (no input) are ignored.
    pub fn insert(&self, details: BindDetails) -> Option<BindDetails> {
        let input = details.input()?.clone();
        let hits = details.options().hits();
        self.binds.entry(input).or_default().insert(hits, details)
    }

    /// Drop every registered bind.
    pub fn clear(&self) {
        self.binds.clear();
    }

    /// All binds registered for this gesture, in ascending required-hits
    /// order. Empty if the gesture is unknown.
    pub fn binds_for(&self, input: &Input) -> Vec<BindDetails> {
        self.binds
            .get(input)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Ceiling lookup: the bind on this gesture with the smallest
    /// required hit count strictly greater than `hits`.
    pub fn next_hit_bind(&self, input: &Input, hits: u32) -> Option<BindDetails> {
        self.binds.get(input).and_then(|table| {
            table
                .range((Bound::Excluded(hits), Bound::Unbounded))
                .next()
                .map(|(_, details)| details.clone())
        })
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    /// Total number of registered binds across all gestures.
    pub fn len(&self) -> usize {
        self.binds.iter().map(|entry| entry.value().len()).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
