//! The bind controller: raw press/release events in, matched binds out.
//!
//! Owns the per-space registries, active-input sets, hit trackers, and
//! the custom-modifier table. Every call is synchronous and completes in
//! bounded time; lookups tolerate a concurrent `set_binds` without
//! tearing.
//!
//! Down and up are near-mirrors. A press is first checked against the
//! active set (auto-repeat and duplicate events are no-ops), then
//! recorded, then matched. A release first clears *every* active entry
//! sharing the code — a key's physical release releases it regardless of
//! which modifiers were held around the press — then matches with the
//! release-side hit accounting.

use std::sync::Arc;

use dashmap::DashSet;
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use pipview_types::{
    ActionId, Bind, BindDetails, Input, InputCode, KeyInput, ModifierMask, MouseInput,
};

use crate::hits::HitTracker;
use crate::modifier::CustomModifiers;
use crate::registry::BindRegistry;

/// Which edge of a physical input an event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEdge {
    Press,
    Release,
}

/// Raw key notification from the event source, already translated into
/// the engine's code space.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawKeyEvent {
    pub code: InputCode,
    pub modifiers: ModifierMask,
}

/// Raw mouse notification from the event source.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawMouseEvent {
    pub code: InputCode,
    pub modifiers: ModifierMask,
    pub wheel_rotation: Option<i32>,
    pub position: Option<(i32, i32)>,
}

/// One bind matched by a press or release, with the hit count that
/// satisfied it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedBind {
    pub details: BindDetails,
    pub hits: u32,
}

impl MatchedBind {
    pub fn action(&self) -> &ActionId {
        self.details.action()
    }

    /// Whether this bind wants to fire on the given edge.
    pub fn activates_on(&self, edge: InputEdge) -> bool {
        match edge {
            InputEdge::Press => self.details.options().activate_on_press(),
            InputEdge::Release => !self.details.options().activate_on_press(),
        }
    }
}

/// Keep only the matches whose activation option agrees with the edge.
pub fn filter_for_edge(matches: Vec<MatchedBind>, edge: InputEdge) -> Vec<MatchedBind> {
    matches.into_iter().filter(|m| m.activates_on(edge)).collect()
}

/// Central registry and event-processing facade.
pub struct BindController {
    key_binds: Arc<BindRegistry>,
    mouse_binds: Arc<BindRegistry>,
    key_hits: HitTracker,
    mouse_hits: HitTracker,
    custom: CustomModifiers,
    active_keys: DashSet<Input>,
    active_mice: DashSet<Input>,
}

impl Default for BindController {
    fn default() -> Self {
        Self::new()
    }
}

impl BindController {
    pub fn new() -> Self {
        let key_binds = Arc::new(BindRegistry::new());
        let mouse_binds = Arc::new(BindRegistry::new());
        Self {
            key_hits: HitTracker::new(key_binds.clone()),
            mouse_hits: HitTracker::new(mouse_binds.clone()),
            key_binds,
            mouse_binds,
            custom: CustomModifiers::new(),
            active_keys: DashSet::new(),
            active_mice: DashSet::new(),
        }
    }

    // ── Event processing ────────────────────────────────────────────────

    /// Process a key press. Returns the binds the press matched (empty
    /// for repeats, unknown gestures, and unmet hit thresholds).
    pub fn key_down(&self, event: RawKeyEvent) -> Vec<MatchedBind> {
        let modifiers = self.normalize_key(event.code, event.modifiers);
        let input = Input::Key(KeyInput::new(event.code, modifiers));

        if !self.active_keys.insert(input.clone()) {
            trace!(?input, "repeat key press suppressed");
            return Vec::new();
        }
        self.match_down(&input, &self.key_binds, &self.key_hits)
    }

    /// Process a key release. A release with no matching press on record
    /// (stray toolkit event, release swallowed by focus loss) matches
    /// nothing.
    pub fn key_up(&self, event: RawKeyEvent) -> Vec<MatchedBind> {
        let was_active = self
            .active_keys
            .iter()
            .any(|active| active.code() == event.code);
        // Physical release releases the key under every modifier chord.
        self.active_keys.retain(|active| active.code() != event.code);
        if !was_active {
            trace!(code = %event.code, "release of inactive key ignored");
            return Vec::new();
        }

        let modifiers = self.normalize_key(event.code, event.modifiers);
        let input = Input::Key(KeyInput::new(event.code, modifiers));
        self.match_up(&input, &self.key_binds, &self.key_hits)
    }

    /// Process a mouse button (or synthetic scroll) press.
    pub fn mouse_down(&self, event: RawMouseEvent) -> Vec<MatchedBind> {
        let input = Input::Mouse(self.mouse_input(event));

        if !self.active_mice.insert(input.clone()) {
            trace!(?input, "repeat mouse press suppressed");
            return Vec::new();
        }
        self.match_down(&input, &self.mouse_binds, &self.mouse_hits)
    }

    /// Process a mouse button (or synthetic scroll) release. As with
    /// keys, a release with no press on record matches nothing.
    pub fn mouse_up(&self, event: RawMouseEvent) -> Vec<MatchedBind> {
        let was_active = self
            .active_mice
            .iter()
            .any(|active| active.code() == event.code);
        self.active_mice.retain(|active| active.code() != event.code);
        if !was_active {
            trace!(code = %event.code, "release of inactive button ignored");
            return Vec::new();
        }

        let input = Input::Mouse(self.mouse_input(event));
        self.match_up(&input, &self.mouse_binds, &self.mouse_hits)
    }

    fn match_down(
        &self,
        input: &Input,
        registry: &BindRegistry,
        tracker: &HitTracker,
    ) -> Vec<MatchedBind> {
        let registered = registry.binds_for(input);
        if registered.is_empty() {
            return Vec::new();
        }

        let hits = tracker.hit(input);
        let matched: Vec<MatchedBind> = registered
            .into_iter()
            .filter(|details| details.options().satisfied_by(hits))
            .map(|details| MatchedBind { details, hits })
            .collect();
        if !matched.is_empty() {
            debug!(?input, hits, matches = matched.len(), "press matched");
        }
        matched
    }

    fn match_up(
        &self,
        input: &Input,
        registry: &BindRegistry,
        tracker: &HitTracker,
    ) -> Vec<MatchedBind> {
        let registered = registry.binds_for(input);
        if registered.is_empty() {
            return Vec::new();
        }

        let hits = tracker.hit_up(input);
        let matched: Vec<MatchedBind> = registered
            .into_iter()
            .filter(|details| details.options().satisfied_by(hits))
            .map(|details| MatchedBind { details, hits })
            .collect();
        if !matched.is_empty() {
            debug!(?input, hits, matches = matched.len(), "release matched");
        }
        matched
    }

    // ── Normalization ───────────────────────────────────────────────────

    /// Effective mask for a key event: a lone modifier (standard or
    /// custom) carries no modifiers; anything else merges the toolkit
    /// mask with the custom modifiers currently held.
    fn normalize_key(&self, code: InputCode, toolkit: ModifierMask) -> ModifierMask {
        if self.is_modifier(code) {
            return ModifierMask::EMPTY;
        }
        toolkit | self.active_custom_mask()
    }

    /// Effective mask for a mouse event. On top of the key rules, the
    /// toolkit mask is intersected with the bits actually derivable from
    /// the active inputs — some toolkits report phantom modifier bits on
    /// certain button releases.
    fn normalize_mouse(&self, code: InputCode, toolkit: ModifierMask) -> ModifierMask {
        if self.is_modifier(code) {
            return ModifierMask::EMPTY;
        }
        (toolkit & self.alive_standard_mask()) | self.active_custom_mask()
    }

    fn mouse_input(&self, event: RawMouseEvent) -> MouseInput {
        let modifiers = self.normalize_mouse(event.code, event.modifiers);
        let mut input = MouseInput::new(event.code, modifiers);
        if let Some(rotation) = event.wheel_rotation {
            input = input.with_wheel(rotation);
        }
        if let Some((x, y)) = event.position {
            input = input.with_position(x, y);
        }
        input
    }

    /// The standard-modifier bits justified by what is actually held:
    /// each active modifier key and each active button contributes its
    /// bit.
    fn alive_standard_mask(&self) -> ModifierMask {
        let mut mask = ModifierMask::EMPTY;
        for active in self.active_keys.iter() {
            if let Some(bit) = active.code().modifier_bit() {
                mask |= bit;
            }
        }
        for active in self.active_mice.iter() {
            if let Some(bit) = active.code().button_bit() {
                mask |= bit;
            }
        }
        mask
    }

    /// Combined mask of the custom-modifier slots whose codes are held.
    fn active_custom_mask(&self) -> ModifierMask {
        let active = self
            .active_keys
            .iter()
            .map(|input| input.code())
            .chain(self.active_mice.iter().map(|input| input.code()))
            .collect::<Vec<_>>();
        self.custom.active_mask(active)
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Wholesale-replace the bind tables from an action → binds mapping.
    ///
    /// Dummy binds (no input) are skipped. Duplicate gestures — equal
    /// `(input, options)` within or across actions — are reported but
    /// still registered; the later one shadows the earlier in lookups.
    pub fn set_binds(&self, table: &IndexMap<ActionId, Vec<Bind>>) {
        self.key_binds.clear();
        self.mouse_binds.clear();
        self.key_hits.reset();
        self.mouse_hits.reset();

        let mut seen: Vec<(ActionId, BindDetails)> = Vec::new();
        for (action, binds) in table {
            for bind in binds {
                // The table key is authoritative for the action.
                let details = bind.details().clone().with_action(action.clone());

                if details.input().is_none() {
                    trace!(%action, "skipping dummy bind");
                    continue;
                }

                if let Some((earlier, _)) = seen.iter().find(|(_, d)| *d == details) {
                    warn!(
                        %action,
                        shadowed = %earlier,
                        "duplicate bind; the later registration wins"
                    );
                }
                seen.push((action.clone(), details.clone()));

                match bind {
                    Bind::Key(_) => self.key_binds.insert(details),
                    Bind::Mouse(_) => self.mouse_binds.insert(details),
                };
            }
        }
        debug!(
            key_binds = self.key_binds.len(),
            mouse_binds = self.mouse_binds.len(),
            "bind tables replaced"
        );
    }

    // ── Queries / lifecycle ─────────────────────────────────────────────

    /// Whether a code acts as a modifier: standard toolkit modifier or a
    /// mapped custom slot.
    pub fn is_modifier(&self, code: InputCode) -> bool {
        code.is_modifier_key() || self.custom.is_custom_modifier(code)
    }

    /// Whether a chord is currently held.
    pub fn is_active(&self, input: &Input) -> bool {
        match input {
            Input::Key(_) => self.active_keys.contains(input),
            Input::Mouse(_) => self.active_mice.contains(input),
        }
    }

    /// Drop all held-input records and tracked sequences (focus loss).
    /// The next press of a previously-held input is a fresh press.
    pub fn clear_active(&self) {
        self.active_keys.clear();
        self.active_mice.clear();
        self.key_hits.reset();
        self.mouse_hits.reset();
        debug!("active inputs cleared");
    }

    /// The custom-modifier table, for configuration.
    pub fn custom_modifiers(&self) -> &CustomModifiers {
        &self.custom
    }

    /// Total number of registered binds across both spaces.
    pub fn bind_count(&self) -> usize {
        self.key_binds.len() + self.mouse_binds.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ModifierSlot;
    use pipview_types::BindOptions;

    const SPACE: InputCode = InputCode::new(32);

    fn key_bind(action: &str, code: InputCode, mods: ModifierMask, hits: u32) -> Bind {
        Bind::key(
            action.into(),
            KeyInput::new(code, mods),
            BindOptions::builder().hits(hits).build().unwrap(),
        )
    }

    fn controller_with(binds: Vec<(&str, Vec<Bind>)>) -> BindController {
        let controller = BindController::new();
        let table: IndexMap<ActionId, Vec<Bind>> = binds
            .into_iter()
            .map(|(action, binds)| (action.into(), binds))
            .collect();
        controller.set_binds(&table);
        controller
    }

    fn press(code: InputCode) -> RawKeyEvent {
        RawKeyEvent {
            code,
            modifiers: ModifierMask::EMPTY,
        }
    }

    #[test]
    fn test_single_press_matches_single_bind() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);

        let matched = c.key_down(press(SPACE));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "play");
        assert_eq!(matched[0].hits, 1);
    }

    #[test]
    fn test_second_press_matches_both_layers() {
        // A 1-hit and a 2-hit bind on the same gesture: the 2nd press
        // fires both (2 is a positive multiple of 1 and of 2).
        let c = controller_with(vec![
            ("play", vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)]),
            ("stop", vec![key_bind("stop", SPACE, ModifierMask::EMPTY, 2)]),
        ]);

        let first = c.key_down(press(SPACE));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].action().as_str(), "play");

        c.key_up(press(SPACE));
        let second = c.key_down(press(SPACE));
        let actions: Vec<&str> = second.iter().map(|m| m.action().as_str()).collect();
        assert_eq!(actions, vec!["play", "stop"]);
        assert_eq!(second[0].hits, 2);
    }

    #[test]
    fn test_unknown_gesture_no_match() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);
        assert!(c.key_down(press(InputCode::new(99))).is_empty());
    }

    #[test]
    fn test_release_of_unpressed_is_no_match() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);
        // Never pressed: no match before any edge filtering.
        assert!(c.key_up(press(SPACE)).is_empty());
    }

    #[test]
    fn test_release_of_unpressed_release_bind_does_not_fire() {
        let table: IndexMap<ActionId, Vec<Bind>> = [(
            ActionId::from("close"),
            vec![Bind::key(
                "close".into(),
                KeyInput::new(SPACE, ModifierMask::EMPTY),
                BindOptions::builder().activate_on_press(false).build().unwrap(),
            )],
        )]
        .into_iter()
        .collect();
        let c = BindController::new();
        c.set_binds(&table);

        // A stray release must not reach the release-activated bind.
        let matched = c.key_up(press(SPACE));
        assert!(matched.is_empty());

        // A real press/release pair still fires it.
        c.key_down(press(SPACE));
        let up = filter_for_edge(c.key_up(press(SPACE)), InputEdge::Release);
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].action().as_str(), "close");
    }

    #[test]
    fn test_release_of_unpressed_button_is_no_match() {
        let c = controller_with(vec![(
            "pan",
            vec![Bind::mouse(
                "pan".into(),
                MouseInput::new(InputCode::BUTTON1, ModifierMask::EMPTY),
                BindOptions::builder().activate_on_press(false).build().unwrap(),
            )],
        )]);

        let matched = c.mouse_up(RawMouseEvent {
            code: InputCode::BUTTON1,
            ..Default::default()
        });
        assert!(matched.is_empty());
    }

    #[test]
    fn test_release_of_unregistered_is_no_match() {
        let c = controller_with(vec![]);
        assert!(c.key_up(press(SPACE)).is_empty());
    }

    #[test]
    fn test_press_idempotent_until_release() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);

        assert_eq!(c.key_down(press(SPACE)).len(), 1);
        // Auto-repeat: suppressed, and the hit count is not advanced.
        assert!(c.key_down(press(SPACE)).is_empty());
        assert!(c.key_down(press(SPACE)).is_empty());

        c.key_up(press(SPACE));
        assert_eq!(c.key_down(press(SPACE)).len(), 1);
    }

    #[test]
    fn test_clear_active_forgets_held_inputs() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);

        assert_eq!(c.key_down(press(SPACE)).len(), 1);
        assert!(c.is_active(&Input::key(SPACE, ModifierMask::EMPTY)));

        c.clear_active();
        assert!(!c.is_active(&Input::key(SPACE, ModifierMask::EMPTY)));
        // Not a duplicate anymore: the press matches again.
        assert_eq!(c.key_down(press(SPACE)).len(), 1);
    }

    #[test]
    fn test_lone_modifier_press_carries_no_modifiers() {
        let c = controller_with(vec![(
            "grab",
            vec![key_bind("grab", InputCode::CONTROL, ModifierMask::EMPTY, 1)],
        )]);

        // Toolkit reports CTRL held on the Ctrl press itself; the bind is
        // registered with an empty mask and must still match.
        let matched = c.key_down(RawKeyEvent {
            code: InputCode::CONTROL,
            modifiers: ModifierMask::CTRL,
        });
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "grab");
    }

    #[test]
    fn test_chorded_bind_requires_modifiers() {
        let c = controller_with(vec![(
            "boost",
            vec![key_bind("boost", SPACE, ModifierMask::CTRL, 1)],
        )]);

        assert!(c.key_down(press(SPACE)).is_empty());
        c.key_up(press(SPACE));

        let matched = c.key_down(RawKeyEvent {
            code: SPACE,
            modifiers: ModifierMask::CTRL,
        });
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_release_clears_all_chords_of_code() {
        let c = controller_with(vec![(
            "boost",
            vec![key_bind("boost", SPACE, ModifierMask::CTRL, 1)],
        )]);

        c.key_down(RawKeyEvent {
            code: SPACE,
            modifiers: ModifierMask::CTRL,
        });
        assert!(c.is_active(&Input::key(SPACE, ModifierMask::CTRL)));

        // Release arrives without the modifier bit: the chorded entry
        // still goes away because release is keyed on the code alone.
        c.key_up(press(SPACE));
        assert!(!c.is_active(&Input::key(SPACE, ModifierMask::CTRL)));
    }

    #[test]
    fn test_custom_modifier_chord() {
        let c = controller_with(vec![(
            "mark",
            vec![key_bind("mark", SPACE, ModifierMask::CUSTOM_1, 1)],
        )]);
        c.custom_modifiers()
            .load([(ModifierSlot::Custom1, InputCode::new(65))]);

        // Plain press: no match.
        assert!(c.key_down(press(SPACE)).is_empty());
        c.key_up(press(SPACE));

        // Hold the custom-modifier key, then press space.
        assert!(c.key_down(press(InputCode::new(65))).is_empty());
        let matched = c.key_down(press(SPACE));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "mark");

        c.key_up(press(SPACE));
        c.key_up(press(InputCode::new(65)));

        // Released: back to no match.
        assert!(c.key_down(press(SPACE)).is_empty());
    }

    #[test]
    fn test_custom_modifier_key_is_modifier() {
        let c = BindController::new();
        c.custom_modifiers()
            .load([(ModifierSlot::Custom2, InputCode::new(65))]);

        assert!(c.is_modifier(InputCode::new(65)));
        assert!(c.is_modifier(InputCode::SHIFT));
        assert!(!c.is_modifier(SPACE));
    }

    #[test]
    fn test_phantom_mouse_modifier_corrected() {
        let c = controller_with(vec![(
            "pan",
            vec![Bind::mouse(
                "pan".into(),
                MouseInput::new(InputCode::BUTTON1, ModifierMask::EMPTY),
                BindOptions::default(),
            )],
        )]);

        // Toolkit reports CTRL on the press, but no Ctrl key is active:
        // the phantom bit is masked off and the plain-button bind fires.
        let matched = c.mouse_down(RawMouseEvent {
            code: InputCode::BUTTON1,
            modifiers: ModifierMask::CTRL,
            ..Default::default()
        });
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "pan");
    }

    #[test]
    fn test_real_mouse_modifier_survives_correction() {
        let c = controller_with(vec![(
            "zoom",
            vec![Bind::mouse(
                "zoom".into(),
                MouseInput::new(InputCode::BUTTON1, ModifierMask::CTRL),
                BindOptions::default(),
            )],
        )]);

        // Ctrl really is held.
        c.key_down(RawKeyEvent {
            code: InputCode::CONTROL,
            modifiers: ModifierMask::EMPTY,
        });
        let matched = c.mouse_down(RawMouseEvent {
            code: InputCode::BUTTON1,
            modifiers: ModifierMask::CTRL,
            ..Default::default()
        });
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "zoom");
    }

    #[test]
    fn test_duplicate_binds_last_wins() {
        let c = controller_with(vec![
            ("first", vec![key_bind("first", SPACE, ModifierMask::EMPTY, 1)]),
            ("second", vec![key_bind("second", SPACE, ModifierMask::EMPTY, 1)]),
        ]);

        assert_eq!(c.bind_count(), 1);
        let matched = c.key_down(press(SPACE));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].action().as_str(), "second");
    }

    #[test]
    fn test_dummy_binds_skipped() {
        let c = controller_with(vec![
            ("wheel.volume", vec![Bind::dummy("wheel.volume".into())]),
            ("play", vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)]),
        ]);
        assert_eq!(c.bind_count(), 1);
    }

    #[test]
    fn test_set_binds_replaces_previous_table() {
        let c = controller_with(vec![(
            "play",
            vec![key_bind("play", SPACE, ModifierMask::EMPTY, 1)],
        )]);

        let table: IndexMap<ActionId, Vec<Bind>> = [(
            ActionId::from("pause"),
            vec![key_bind("pause", InputCode::new(80), ModifierMask::EMPTY, 1)],
        )]
        .into_iter()
        .collect();
        c.set_binds(&table);

        assert!(c.key_down(press(SPACE)).is_empty());
        assert_eq!(c.key_down(press(InputCode::new(80))).len(), 1);
    }

    #[test]
    fn test_release_activated_bind_sees_full_count() {
        let table: IndexMap<ActionId, Vec<Bind>> = [(
            ActionId::from("peek"),
            vec![Bind::key(
                "peek".into(),
                KeyInput::new(SPACE, ModifierMask::EMPTY),
                BindOptions::builder()
                    .hits(2)
                    .activate_on_press(false)
                    .build()
                    .unwrap(),
            )],
        )]
        .into_iter()
        .collect();
        let c = BindController::new();
        c.set_binds(&table);

        assert!(c.key_down(press(SPACE)).is_empty());
        let up1 = filter_for_edge(c.key_up(press(SPACE)), InputEdge::Release);
        assert!(up1.is_empty());

        // The 2nd press satisfies the hit count, but the bind only wants
        // the release edge.
        let down2 = filter_for_edge(c.key_down(press(SPACE)), InputEdge::Press);
        assert!(down2.is_empty());
        let up2 = filter_for_edge(c.key_up(press(SPACE)), InputEdge::Release);
        assert_eq!(up2.len(), 1);
        assert_eq!(up2[0].hits, 2);
    }

    #[test]
    fn test_scroll_codes_resolve_like_buttons() {
        let c = controller_with(vec![(
            "volume.up",
            vec![Bind::mouse(
                "volume.up".into(),
                MouseInput::new(InputCode::SCROLL_UP, ModifierMask::EMPTY),
                BindOptions::default(),
            )],
        )]);

        let matched = c.mouse_down(RawMouseEvent {
            code: InputCode::SCROLL_UP,
            wheel_rotation: Some(-1),
            ..Default::default()
        });
        assert_eq!(matched.len(), 1);
        // The event layer synthesizes the matching release.
        c.mouse_up(RawMouseEvent {
            code: InputCode::SCROLL_UP,
            ..Default::default()
        });
        assert_eq!(
            c.mouse_down(RawMouseEvent {
                code: InputCode::SCROLL_UP,
                ..Default::default()
            })
            .len(),
            1
        );
    }
}
