//! Turns raw switch transitions into debounced display updates.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::counter::ConsecutiveEventCounter;
use crate::error::RouteError;
use crate::hardware::{HardwareState, HardwareSwitch, HardwareSwitchState, RELEASED_VALUE, PRESSED_VALUE};
use crate::labels::{Colour, KeyColours, Label, LabelSet, LabelSlot};
use crate::reset_timer::ResetTimer;
use crate::settings::{Delays, Settings};
use crate::surface::{DisplaySurface, GlyphLookup};
use crate::text_fit::{scale_font, split_label, Size, TextMeasure};

/// A raw change reported by the input capture layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub switch: String,
    #[serde(default, rename = "old")]
    pub old_value: String,
    #[serde(default, rename = "new")]
    pub new_value: String,
}

impl Transition {
    pub fn new(
        switch: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            switch: switch.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }
}

const REGULAR_SLOTS: [LabelSlot; 4] = [
    LabelSlot::Regular,
    LabelSlot::RegularMain,
    LabelSlot::RegularSuperscript,
    LabelSlot::RegularCounter,
];

/// Controls the display state between input events and the view.
///
/// Presses render immediately. Releases are held back by a per-switch
/// [`ResetTimer`] and only render if no press for the same switch arrives
/// first; the owner calls [`EventRouter::fire_due`] to apply them.
pub struct EventRouter<G, S>
where
    G: GlyphLookup,
    S: DisplaySurface<G::Glyph>,
{
    glyphs: G,
    surface: S,
    labels: LabelSet,
    colours: KeyColours,
    delays: Delays,
    timers: HashMap<HardwareSwitch, ResetTimer<HardwareSwitchState>>,
    /// Held mouse buttons in press order.
    mouse_pressed: Vec<HardwareSwitch>,
    key_counter: ConsecutiveEventCounter<String>,
}

impl<G, S> EventRouter<G, S>
where
    G: GlyphLookup,
    S: DisplaySurface<G::Glyph>,
{
    pub fn new(glyphs: G, surface: S, settings: &Settings) -> Self {
        Self {
            glyphs,
            surface,
            labels: LabelSet::new(&settings.font.font_spec(), &settings.colours),
            colours: settings.colours,
            delays: settings.delays,
            timers: HashMap::new(),
            mouse_pressed: Vec::new(),
            key_counter: ConsecutiveEventCounter::new(settings.counter_max),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Renders every region and label in its idle state.
    pub fn initialize(&mut self) -> Result<(), RouteError> {
        for switch in HardwareSwitch::keyboard_switches() {
            self.update_switch_state(&released(switch))?;
        }
        self.update_switch_state(&released(HardwareSwitch::MouseUndefined))?;

        for slot in LabelSlot::ALL {
            if slot.is_static_title() {
                let colour = self.colours.released;
                self.show_text(slot, slot.title(), colour, 0.0)?;
            } else {
                let label = self.labels.get(slot);
                self.surface.update_switch_label(slot, label)?;
            }
        }

        self.surface.flush()?;
        Ok(())
    }

    /// Routes one transition received at `now`.
    pub fn update(&mut self, transition: &Transition, now: Instant) -> Result<(), RouteError> {
        let state = HardwareSwitchState::resolve(
            &transition.switch,
            &transition.old_value,
            &transition.new_value,
        )?;
        let switch = state.switch();
        debug!("Routing {} {} ({:?})", switch, state.state(), state.value());

        if state.is_pressed() {
            self.timer_mut(switch).stop();
            if switch.is_mouse() && !self.mouse_pressed.contains(&switch) {
                self.mouse_pressed.push(switch);
            }
            self.dispatch(&state)?;
            self.surface.flush()?;
        } else {
            if switch.is_mouse() {
                self.mouse_pressed.retain(|held| *held != switch);
            }
            self.timer_mut(switch).arm(state, now);
        }

        Ok(())
    }

    /// Applies every release whose debounce delay has elapsed by `now`, in
    /// deadline order. Returns how many were applied.
    pub fn fire_due(&mut self, now: Instant) -> Result<usize, RouteError> {
        let mut due = Vec::new();
        for (switch, timer) in self.timers.iter_mut() {
            let Some(deadline) = timer.deadline() else {
                continue;
            };
            if let Some(state) = timer.take_expired(now) {
                due.push((deadline, *switch, state));
            }
        }

        if due.is_empty() {
            return Ok(0);
        }

        due.sort_by_key(|(deadline, switch, _)| (*deadline, *switch));
        for (_, _, state) in &due {
            trace!("Release of {} is due", state.switch());
            self.dispatch(state)?;
        }
        self.surface.flush()?;

        Ok(due.len())
    }

    /// Earliest pending release deadline across all switches.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().filter_map(ResetTimer::deadline).min()
    }

    /// Timer for `switch`, created on first use.
    fn timer_mut(&mut self, switch: HardwareSwitch) -> &mut ResetTimer<HardwareSwitchState> {
        let delays = self.delays;
        self.timers
            .entry(switch)
            .or_insert_with(|| ResetTimer::new(delays.for_switch(switch)))
    }

    fn dispatch(&mut self, state: &HardwareSwitchState) -> Result<(), RouteError> {
        if state.is_keyboard() {
            self.update_keyboard_label(state)
        } else {
            self.update_mouse_status(state)
        }
    }

    fn update_switch_state(&mut self, state: &HardwareSwitchState) -> Result<(), RouteError> {
        let glyph = self
            .glyphs
            .glyph(state.switch(), state.state())
            .ok_or(RouteError::MissingGlyph {
                switch: state.switch(),
                state: state.state(),
            })?;
        trace!("Rendering {} {}", state.switch(), state.state());
        self.surface.update_switch_state(state, glyph)?;
        Ok(())
    }

    fn update_keyboard_label(&mut self, state: &HardwareSwitchState) -> Result<(), RouteError> {
        self.update_switch_state(state)?;

        if state.is_modifier() {
            if let Some(slot) = LabelSlot::for_modifier(state.switch()) {
                let colour = self.colours.for_state(state.state());
                self.show_text(slot, slot.title(), colour, 0.0)?;
            }
            self.key_counter.reset();
            return Ok(());
        }

        // Hide any previously displayed labels.
        for slot in REGULAR_SLOTS {
            self.hide(slot)?;
        }

        if !state.is_pressed() {
            return Ok(());
        }

        let value = state.value();
        let colour = self.colours.pressed;

        if let Some((superscript, main)) = split_label(value) {
            let extent = self.show_text(LabelSlot::RegularSuperscript, superscript, colour, 0.0)?;
            // Shift the main label down away from the superscript.
            self.show_text(LabelSlot::RegularMain, main, colour, extent.height / 2.0)?;
        } else {
            self.show_text(LabelSlot::Regular, value, colour, 0.0)?;
        }

        if self.key_counter.apply(value.to_string()) {
            let tally = self.key_counter.to_string();
            self.show_text(LabelSlot::RegularCounter, &tally, colour, 0.0)?;
        }

        Ok(())
    }

    /// Repaints the idle mouse, then every held button in press order so the
    /// most recent press stays on top.
    fn update_mouse_status(&mut self, state: &HardwareSwitchState) -> Result<(), RouteError> {
        let switch = state.switch();

        if switch == HardwareSwitch::MouseUndefined {
            if state.is_pressed() {
                let colour = self.colours.pressed;
                self.show_text(LabelSlot::MouseUndefined, state.value(), colour, 0.0)?;
            } else {
                self.hide(LabelSlot::MouseUndefined)?;
            }
        }

        self.update_switch_state(&released(switch))?;
        self.surface.flush()?;

        let held = self.mouse_pressed.clone();
        for button in held {
            self.update_switch_state(&HardwareSwitchState::new(
                button,
                HardwareState::Pressed,
                PRESSED_VALUE,
            ))?;
            self.surface.flush()?;
        }

        Ok(())
    }

    /// Fits `text` into the slot's box and shows it. Returns the rendered
    /// extent.
    fn show_text(
        &mut self,
        slot: LabelSlot,
        text: &str,
        colour: Colour,
        offset_y: f32,
    ) -> Result<Size, RouteError> {
        let bounds = self
            .surface
            .region_size(slot.region())
            .scale(slot.scale());
        let font = scale_font(text, &self.labels.get(slot).font, bounds, &self.surface);
        let extent = self.surface.measure(text, &font);

        let label = Label {
            text: text.to_string(),
            font,
            colour,
            visible: true,
            offset_y,
        };
        // The stored label only changes once the surface accepted it.
        self.surface.update_switch_label(slot, &label)?;
        *self.labels.get_mut(slot) = label;

        Ok(extent)
    }

    fn hide(&mut self, slot: LabelSlot) -> Result<(), RouteError> {
        let current = self.labels.get(slot);
        if !current.visible {
            return Ok(());
        }
        let hidden = Label {
            visible: false,
            offset_y: 0.0,
            ..current.clone()
        };
        self.surface.update_switch_label(slot, &hidden)?;
        *self.labels.get_mut(slot) = hidden;
        Ok(())
    }
}

fn released(switch: HardwareSwitch) -> HardwareSwitchState {
    HardwareSwitchState::new(switch, HardwareState::Released, RELEASED_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{RecordingSurface, SurfaceCall};
    use crate::surface::NamedGlyphs;
    use std::path::Path;
    use std::time::Duration;

    type TestRouter = EventRouter<NamedGlyphs, RecordingSurface>;

    fn settings() -> Settings {
        Settings {
            delays: Delays {
                key_modifier_ms: 100,
                key_regular_ms: 200,
                mouse_button_ms: 50,
            },
            ..Settings::default()
        }
    }

    fn router() -> TestRouter {
        EventRouter::new(
            NamedGlyphs::new(Path::new("/glyphs")),
            RecordingSurface::new(),
            &settings(),
        )
    }

    fn ms(start: Instant, offset: u64) -> Instant {
        start + Duration::from_millis(offset)
    }

    fn press_key(router: &mut TestRouter, value: &str, at: Instant) {
        router
            .update(&Transition::new("regular", "", value), at)
            .unwrap();
    }

    fn release_key(router: &mut TestRouter, value: &str, at: Instant) {
        router
            .update(&Transition::new("regular", value, RELEASED_VALUE), at)
            .unwrap();
    }

    fn toggle(router: &mut TestRouter, switch: &str, pressed: bool, at: Instant) {
        let transition = if pressed {
            Transition::new(switch, RELEASED_VALUE, PRESSED_VALUE)
        } else {
            Transition::new(switch, PRESSED_VALUE, RELEASED_VALUE)
        };
        router.update(&transition, at).unwrap();
    }

    fn states_of(router: &TestRouter, switch: HardwareSwitch) -> Vec<HardwareState> {
        router
            .surface()
            .switch_calls()
            .into_iter()
            .filter(|(s, _)| *s == switch)
            .map(|(_, state)| state)
            .collect()
    }

    #[test]
    fn test_initialize_renders_idle_state() {
        let mut router = router();
        router.initialize().unwrap();

        let calls = router.surface().switch_calls();
        assert!(calls.contains(&(HardwareSwitch::KeyShift, HardwareState::Released)));
        assert!(calls.contains(&(HardwareSwitch::KeyRegular, HardwareState::Released)));
        assert!(calls.contains(&(HardwareSwitch::MouseUndefined, HardwareState::Released)));

        let shift = router.surface().last_label(LabelSlot::Shift).unwrap();
        assert_eq!(shift.text, "Shift");
        assert_eq!(shift.colour, KeyColours::default().released);
        assert!(!router.surface().last_label(LabelSlot::Regular).unwrap().visible);
    }

    #[test]
    fn test_repeated_presses_never_release() {
        let start = Instant::now();
        let mut router = router();
        for i in 0..5 {
            press_key(&mut router, "A", ms(start, i * 300));
            assert_eq!(router.fire_due(ms(start, i * 300 + 250)).unwrap(), 0);
        }

        let states = states_of(&router, HardwareSwitch::KeyRegular);
        assert_eq!(states.len(), 5);
        assert!(states.iter().all(|s| *s == HardwareState::Pressed));
    }

    #[test]
    fn test_press_within_delay_suppresses_release() {
        let start = Instant::now();
        let mut router = router();
        press_key(&mut router, "A", start);
        release_key(&mut router, "A", ms(start, 10));
        press_key(&mut router, "B", ms(start, 150));
        assert_eq!(router.fire_due(ms(start, 1_000)).unwrap(), 0);

        assert!(!states_of(&router, HardwareSwitch::KeyRegular).contains(&HardwareState::Released));
    }

    #[test]
    fn test_release_applies_once_after_delay() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "shift", true, start);
        toggle(&mut router, "shift", false, ms(start, 20));

        assert_eq!(router.next_deadline(), Some(ms(start, 120)));
        assert_eq!(router.fire_due(ms(start, 119)).unwrap(), 0);
        assert_eq!(
            states_of(&router, HardwareSwitch::KeyShift),
            vec![HardwareState::Pressed]
        );

        assert_eq!(router.fire_due(ms(start, 120)).unwrap(), 1);
        assert_eq!(router.fire_due(ms(start, 500)).unwrap(), 0);
        assert_eq!(
            states_of(&router, HardwareSwitch::KeyShift),
            vec![HardwareState::Pressed, HardwareState::Released]
        );
        assert_eq!(router.next_deadline(), None);
    }

    #[test]
    fn test_releases_fire_in_deadline_order() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "ctrl", true, start);
        press_key(&mut router, "A", start);
        release_key(&mut router, "A", ms(start, 0));
        toggle(&mut router, "ctrl", false, ms(start, 50));
        router.surface_mut().take_calls();

        assert_eq!(router.fire_due(ms(start, 300)).unwrap(), 2);
        let released: Vec<_> = router
            .surface()
            .switch_calls()
            .into_iter()
            .map(|(switch, _)| switch)
            .collect();
        assert_eq!(released, vec![HardwareSwitch::KeyCtrl, HardwareSwitch::KeyRegular]);
    }

    #[test]
    fn test_modifier_and_regular_combo() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "shift", true, start);
        press_key(&mut router, "A", ms(start, 5));

        let colours = KeyColours::default();
        assert_eq!(router.labels().get(LabelSlot::Shift).colour, colours.pressed);

        let regular = router.labels().get(LabelSlot::Regular);
        assert!(regular.visible);
        assert_eq!(regular.text, "A");
        assert!(!router.labels().get(LabelSlot::RegularSuperscript).visible);
        assert!(!router.labels().get(LabelSlot::RegularMain).visible);
    }

    #[test]
    fn test_modifier_release_restores_colour() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "alt", true, start);
        toggle(&mut router, "alt", false, ms(start, 10));
        router.fire_due(ms(start, 200)).unwrap();

        let alt = router.surface().last_label(LabelSlot::Alt).unwrap();
        assert_eq!(alt.colour, KeyColours::default().released);
        assert_eq!(alt.text, "Alt");
        assert!(alt.visible);
    }

    #[test]
    fn test_two_part_label_is_split() {
        let mut router = router();
        press_key(&mut router, "Num 5", Instant::now());

        let labels = router.labels();
        let superscript = labels.get(LabelSlot::RegularSuperscript);
        let main = labels.get(LabelSlot::RegularMain);
        assert!(superscript.visible);
        assert!(main.visible);
        assert_eq!(superscript.text, "Num");
        assert_eq!(main.text, "5");
        assert!(!labels.get(LabelSlot::Regular).visible);

        let rendered = router.surface().measure("Num", &superscript.font);
        assert_eq!(main.offset_y, rendered.height / 2.0);
        assert!(main.offset_y > 0.0);
    }

    #[test]
    fn test_labels_fit_their_boxes() {
        let mut router = router();
        press_key(&mut router, "Back ⌫", Instant::now());

        let surface = router.surface();
        let region = surface.region_size(crate::hardware::Region::Regular);
        for slot in [LabelSlot::RegularSuperscript, LabelSlot::RegularMain] {
            let label = router.labels().get(slot);
            let extent = surface.measure(&label.text, &label.font);
            assert!(extent.fits_within(&region.scale(slot.scale())));
        }
    }

    #[test]
    fn test_switching_to_plain_key_hides_split_labels() {
        let start = Instant::now();
        let mut router = router();
        press_key(&mut router, "Num 5", start);
        press_key(&mut router, "A", ms(start, 10));

        let labels = router.labels();
        assert!(!labels.get(LabelSlot::RegularMain).visible);
        assert!(!labels.get(LabelSlot::RegularSuperscript).visible);
        assert_eq!(labels.get(LabelSlot::Regular).text, "A");
    }

    #[test]
    fn test_counter_badge_tracks_repeats() {
        let start = Instant::now();
        let mut router = router();
        press_key(&mut router, "A", start);
        assert!(!router.labels().get(LabelSlot::RegularCounter).visible);

        release_key(&mut router, "A", ms(start, 10));
        press_key(&mut router, "A", ms(start, 20));
        let badge = router.labels().get(LabelSlot::RegularCounter);
        assert!(badge.visible);
        assert_eq!(badge.text, "2");

        press_key(&mut router, "B", ms(start, 30));
        assert!(!router.labels().get(LabelSlot::RegularCounter).visible);
    }

    #[test]
    fn test_counter_badge_saturates() {
        let start = Instant::now();
        let mut router = router();
        for i in 0..15 {
            press_key(&mut router, "A", ms(start, i));
        }
        assert_eq!(router.labels().get(LabelSlot::RegularCounter).text, "9");
    }

    #[test]
    fn test_release_hides_regular_labels() {
        let start = Instant::now();
        let mut router = router();
        press_key(&mut router, "A", start);
        press_key(&mut router, "A", ms(start, 1));
        release_key(&mut router, "A", ms(start, 2));
        router.fire_due(ms(start, 500)).unwrap();

        for slot in REGULAR_SLOTS {
            assert!(!router.labels().get(slot).visible);
        }
    }

    #[test]
    fn test_modifier_press_resets_counter() {
        let start = Instant::now();
        let mut router = router();
        press_key(&mut router, "A", start);
        toggle(&mut router, "ctrl", true, ms(start, 1));
        press_key(&mut router, "A", ms(start, 2));
        assert!(!router.labels().get(LabelSlot::RegularCounter).visible);
    }

    #[test]
    fn test_mouse_release_reasserts_held_buttons() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "button 1", true, start);
        toggle(&mut router, "button 2", true, ms(start, 10));
        toggle(&mut router, "button 1", false, ms(start, 20));
        router.surface_mut().take_calls();

        assert_eq!(router.fire_due(ms(start, 70)).unwrap(), 1);
        assert_eq!(
            router.surface().switch_calls(),
            vec![
                (HardwareSwitch::MouseLeft, HardwareState::Released),
                (HardwareSwitch::MouseRight, HardwareState::Pressed),
            ]
        );
    }

    #[test]
    fn test_mouse_press_layers_in_press_order() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "button 3", true, start);
        router.surface_mut().take_calls();
        toggle(&mut router, "button 1", true, ms(start, 5));
        // A duplicate press does not reorder the held buttons.
        toggle(&mut router, "button 3", true, ms(start, 6));

        let calls = router.surface().switch_calls();
        assert_eq!(
            &calls[..3],
            &[
                (HardwareSwitch::MouseLeft, HardwareState::Released),
                (HardwareSwitch::MouseMiddle, HardwareState::Pressed),
                (HardwareSwitch::MouseLeft, HardwareState::Pressed),
            ]
        );
        assert_eq!(
            &calls[3..],
            &[
                (HardwareSwitch::MouseMiddle, HardwareState::Released),
                (HardwareSwitch::MouseMiddle, HardwareState::Pressed),
                (HardwareSwitch::MouseLeft, HardwareState::Pressed),
            ]
        );
    }

    #[test]
    fn test_mouse_repaints_are_flushed_individually() {
        let start = Instant::now();
        let mut router = router();
        toggle(&mut router, "button 1", true, start);
        let calls = router.surface_mut().take_calls();
        assert_eq!(
            calls,
            vec![
                SurfaceCall::Switch(HardwareSwitch::MouseLeft, HardwareState::Released),
                SurfaceCall::Flush,
                SurfaceCall::Switch(HardwareSwitch::MouseLeft, HardwareState::Pressed),
                SurfaceCall::Flush,
                SurfaceCall::Flush,
            ]
        );
    }

    #[test]
    fn test_extra_mouse_button_shows_name() {
        let start = Instant::now();
        let mut router = router();
        router
            .update(&Transition::new("button extra", "", "Side"), start)
            .unwrap();
        let label = router.labels().get(LabelSlot::MouseUndefined);
        assert!(label.visible);
        assert_eq!(label.text, "Side");

        router
            .update(&Transition::new("button extra", "Side", RELEASED_VALUE), ms(start, 5))
            .unwrap();
        router.fire_due(ms(start, 100)).unwrap();
        assert!(!router.labels().get(LabelSlot::MouseUndefined).visible);
    }

    #[test]
    fn test_routing_errors_surface() {
        let mut router = router();
        let now = Instant::now();

        let err = router
            .update(&Transition::new("pedal", "", "true"), now)
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownSwitch(_)));

        let err = router
            .update(&Transition::new("shift", "", ""), now)
            .unwrap_err();
        assert!(matches!(err, RouteError::AmbiguousState(_)));
        assert!(router.surface().calls.is_empty());
    }

    /// Theme directory with one glyph absent.
    struct GlyphsWithout {
        glyphs: NamedGlyphs,
        missing: (HardwareSwitch, HardwareState),
    }

    impl GlyphsWithout {
        fn new(switch: HardwareSwitch, state: HardwareState) -> Self {
            Self {
                glyphs: NamedGlyphs::new(Path::new("/glyphs")),
                missing: (switch, state),
            }
        }
    }

    impl GlyphLookup for GlyphsWithout {
        type Glyph = Path;

        fn glyph(&self, switch: HardwareSwitch, state: HardwareState) -> Option<&Path> {
            if (switch, state) == self.missing {
                None
            } else {
                self.glyphs.glyph(switch, state)
            }
        }
    }

    #[test]
    fn test_missing_glyph_fails_before_any_update() {
        let glyphs = GlyphsWithout::new(HardwareSwitch::KeyCtrl, HardwareState::Pressed);
        let mut router = EventRouter::new(glyphs, RecordingSurface::new(), &settings());

        let err = router
            .update(&Transition::new("ctrl", RELEASED_VALUE, PRESSED_VALUE), Instant::now())
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::MissingGlyph {
                switch: HardwareSwitch::KeyCtrl,
                state: HardwareState::Pressed,
            }
        ));
        assert!(router.surface().calls.is_empty());
        assert_eq!(
            router.labels().get(LabelSlot::Ctrl).colour,
            KeyColours::default().released
        );
    }

    #[test]
    fn test_missing_release_glyph_fails_in_fire_due() {
        let start = Instant::now();
        let glyphs = GlyphsWithout::new(HardwareSwitch::KeyRegular, HardwareState::Released);
        let mut router = EventRouter::new(glyphs, RecordingSurface::new(), &settings());
        router
            .update(&Transition::new("regular", "", "A"), start)
            .unwrap();
        router
            .update(&Transition::new("regular", "A", RELEASED_VALUE), ms(start, 5))
            .unwrap();
        router.surface_mut().take_calls();

        let err = router.fire_due(ms(start, 1_000)).unwrap_err();
        assert!(matches!(err, RouteError::MissingGlyph { .. }));
        assert!(router.surface().calls.is_empty());
        assert!(router.labels().get(LabelSlot::Regular).visible);
    }

    #[test]
    fn test_surface_failure_reaches_caller() {
        let mut router = EventRouter::new(
            NamedGlyphs::new(Path::new("/glyphs")),
            RecordingSurface::failing_labels(),
            &settings(),
        );

        let err = router
            .update(&Transition::new("shift", RELEASED_VALUE, PRESSED_VALUE), Instant::now())
            .unwrap_err();
        assert!(matches!(err, RouteError::Surface(_)));
        assert!(!router
            .surface()
            .calls
            .iter()
            .any(|call| matches!(call, SurfaceCall::Label(..) | SurfaceCall::Flush)));
        assert_eq!(
            router.labels().get(LabelSlot::Shift).colour,
            KeyColours::default().released
        );
    }

    #[test]
    fn test_transition_json_field_names() {
        let transition: Transition =
            serde_json::from_str(r#"{"switch": "regular", "new": "A"}"#).unwrap();
        assert_eq!(transition, Transition::new("regular", "", "A"));
    }
}
