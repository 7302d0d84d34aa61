//! Consecutive-hit tracking.
//!
//! The tracker decides whether a press continues a multi-hit gesture or
//! starts a fresh one, bounded by a per-bind delay window. It queries the
//! registry it was constructed with (explicit injection — one tracker per
//! input space, pointed at that space's registry) to decide whether a
//! higher-hit bind is still reachable, because only a reachable next
//! level justifies keeping the window open.
//!
//! Press and release split responsibilities: `hit` advances the count,
//! `hit_up` finalizes the sequence. The count `hit_up` returns is
//! captured *before* any reset so release-activated binds observe the
//! count that led to the release, while a reset during `hit` would make
//! the release see 1 and double-counting would follow.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use pipview_types::Input;

use crate::registry::BindRegistry;
use crate::timer::DelayTimer;

#[derive(Debug, Default)]
struct TrackerState {
    last: Option<Input>,
    count: u32,
}

/// Timing state machine for one input space.
#[derive(Debug)]
pub struct HitTracker {
    state: Mutex<TrackerState>,
    window: DelayTimer,
    registry: Arc<BindRegistry>,
}

impl HitTracker {
    /// A tracker that consults `registry` for higher-hit binds.
    pub fn new(registry: Arc<BindRegistry>) -> Self {
        Self {
            state: Mutex::new(TrackerState::default()),
            window: DelayTimer::new(),
            registry,
        }
    }

    /// Record a press of `input` and return its consecutive-hit count.
    ///
    /// Continues the tracked sequence only when the chord matches the
    /// previous one *and* the window is still open; anything else starts
    /// over at 1. The window is re-opened only if a strictly-higher-hit
    /// bind exists on this gesture, using that bind's own delay.
    pub fn hit(&self, input: &Input) -> u32 {
        let mut state = self.state.lock();

        let continues =
            state.last.as_ref().is_some_and(|last| last.matches(input)) && self.window.is_live();
        self.window.cancel();

        if continues {
            state.count += 1;
        } else {
            state.count = 1;
            state.last = Some(input.clone());
        }

        if let Some(next) = self.registry.next_hit_bind(input, state.count) {
            self.window.restart(next.options().delay());
        }

        trace!(count = state.count, "hit");
        state.count
    }

    /// Record a release of `input` and return the count of the sequence
    /// it ends, finalizing the sequence if no higher-hit bind remains
    /// reachable. A release unrelated to the tracked sequence reports 1
    /// and leaves the state untouched.
    pub fn hit_up(&self, input: &Input) -> u32 {
        let mut state = self.state.lock();

        if !state.last.as_ref().is_some_and(|last| last.matches(input)) {
            return 1;
        }

        // The pre-reset count is the one the release-activated bind saw.
        let observed = state.count;
        if self.registry.next_hit_bind(input, observed).is_none() {
            state.count = 1;
            self.window.cancel();
        }

        trace!(count = observed, "hit up");
        observed
    }

    /// Forget the tracked sequence and close the window (focus loss).
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.last = None;
        state.count = 0;
        self.window.cancel();
    }
}

// ============================================================================
// Tests
// ============================================================================
