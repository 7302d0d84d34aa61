//! Shared input and bind value types for pipview.
//!
//! This crate is the vocabulary of the bind engine: input codes, modifier
//! masks, chords, bind options, and action identifiers. It has **no
//! internal pipview dependencies** — a pure leaf crate the engine builds
//! on.
//!
//! # Type Overview
//!
//! |------------------|-----------------------------------------------|
//! | Type             | Purpose                                       |
//! |------------------|-----------------------------------------------|
//! | [`InputCode`]    | Which physical key or button (plus synthetic  |
//! |                  | scroll codes)                                 |
//! | [`ModifierMask`] | Which modifiers are held (standard + custom)  |
//! | [`Input`]        | One chord: code + modifiers + hit count       |
//! | [`BindOptions`]  | Required hits, hit window, press-vs-release   |
//! | [`BindDetails`]  | Action + input + options                      |
//! | [`Bind`]         | Key-space or mouse-space bind                 |
//! | [`ActionId`]     | Which command a matched bind signals          |
//! |------------------|-----------------------------------------------|
//!
//! Two relations matter everywhere downstream:
//! - `Input` equality/hashing covers (space, code, modifiers) only — hit
//!   counts and mouse extras never participate;
//! - `BindDetails` equality covers (input, options) only — the action is
//!   excluded so duplicate detection compares gestures, not commands.

pub mod action;
pub mod bind;
pub mod code;
pub mod input;

// Re-export primary types at crate root for convenience.
pub use action::ActionId;
pub use bind::{Bind, BindDetails, BindError, BindOptions, BindOptionsBuilder, DEFAULT_DELAY};
pub use code::{InputCode, ModifierMask, SYNTHETIC_BASE};
pub use input::{Input, KeyInput, MouseInput};
