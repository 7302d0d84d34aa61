//! Cancellable delay window.
//!
//! The consecutive-hit window is the only timeout in the engine. Nothing
//! ever waits on it: expiry is observed indirectly through [`DelayTimer::is_live`]
//! at the next hit, so there is no callback thread to race with the event
//! producer. A window that elapsed on its own and a window that was
//! cancelled are indistinguishable, which is exactly the contract the
//! tracker needs — "timer already fired" is equivalent to "cancel had no
//! effect".

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A restartable monotonic deadline.
#[derive(Debug, Default)]
pub struct DelayTimer {
    deadline: Mutex<Option<Instant>>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or re-open) the window for `delay` from now.
    pub fn restart(&self, delay: Duration) {
        *self.deadline.lock() = Some(Instant::now() + delay);
    }

    /// Close the window.
    pub fn cancel(&self) {
        *self.deadline.lock() = None;
    }

    /// Whether the window is open: a deadline is set and has not passed.
    pub fn is_live(&self) -> bool {
        self.deadline
            .lock()
            .map(|d| Instant::now() < d)
            .unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let t = DelayTimer::new();
        assert!(!t.is_live());
    }

    #[test]
    fn test_restart_opens_window() {
        let t = DelayTimer::new();
        t.restart(Duration::from_secs(60));
        assert!(t.is_live());
    }

    #[test]
    fn test_cancel_closes_window() {
        let t = DelayTimer::new();
        t.restart(Duration::from_secs(60));
        t.cancel();
        assert!(!t.is_live());
    }

    #[test]
    fn test_natural_expiry() {
        let t = DelayTimer::new();
        t.restart(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(30));
        assert!(!t.is_live());
        // Cancelling an already-elapsed window is a no-op.
        t.cancel();
        assert!(!t.is_live());
    }

    #[test]
    fn test_restart_supersedes_previous_deadline() {
        let t = DelayTimer::new();
        t.restart(Duration::from_millis(10));
        t.restart(Duration::from_secs(60));
        std::thread::sleep(Duration::from_millis(30));
        assert!(t.is_live());
    }
}
