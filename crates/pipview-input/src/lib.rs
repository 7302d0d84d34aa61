//! Input-bind resolution engine for pipview.
//!
//! Converts raw keyboard/mouse press-and-release events into recognized
//! application commands: multi-key chords, consecutive multi-hit gestures
//! (double/triple press within a timing window), per-bind press-vs-release
//! activation, and five custom-modifier slots beyond the toolkit's fixed
//! modifier set.
//!
//! ## Architecture
//!
//! ```text
//! Raw press/release (event source, external)
//!     │
//!     ▼
//! BindController ── normalize modifiers
//!     │              (self-modifier stripping, custom-modifier merge,
//!     │               phantom-bit correction on mouse events)
//!     │
//!     ├─► active-input sets   — duplicate suppression, held-chord queries
//!     ├─► HitTracker          — consecutive-hit count within the delay
//!     │       │                 window (one per input space)
//!     │       └─► BindRegistry — ceiling lookup for the next hit level
//!     │
//!     ▼
//! Vec<MatchedBind> ── caller filters by press/release edge and executes
//!                     the action (external)
//! ```
//!
//! Everything is synchronous and non-blocking; registries and active
//! sets tolerate concurrent lookup during a wholesale `set_binds`. The
//! hit window is a cancellable monotonic deadline — expiry is observed
//! at the next hit, never delivered by callback.
//!
//! Configuration enters through [`config::BindsConfig`] (RON) or
//! programmatically via [`BindController::set_binds`] and
//! [`CustomModifiers::load`].

pub mod config;
pub mod controller;
pub mod hits;
pub mod modifier;
pub mod registry;
pub mod timer;

// Re-export the engine surface at crate root for convenience.
pub use config::{BindKind, BindSpec, BindsConfig, ConfigError};
pub use controller::{
    filter_for_edge, BindController, InputEdge, MatchedBind, RawKeyEvent, RawMouseEvent,
};
pub use hits::HitTracker;
pub use modifier::{CustomModifiers, ModifierSlot, SLOT_COUNT};
pub use registry::BindRegistry;
pub use timer::DelayTimer;

// The value vocabulary lives in pipview-types; re-export it so embedders
// need a single dependency.
pub use pipview_types as types;
