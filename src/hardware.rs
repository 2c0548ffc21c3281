//! Identity and logical state of the physical controls shown on the overlay.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::RouteError;

/// Value reported by the capture layer when a switch goes up.
pub const RELEASED_VALUE: &str = "false";
/// Value reported by the capture layer for simple toggle switches going down.
pub const PRESSED_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HardwareSwitch {
    KeyShift,
    KeyCtrl,
    KeyAlt,
    KeyRegular,
    MouseLeft,
    MouseRight,
    MouseMiddle,
    /// Extra mouse buttons, reported by name.
    MouseUndefined,
}

/// Display region owning the indicator image for one or more switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Shift,
    Ctrl,
    Alt,
    Regular,
    Mouse,
}

impl HardwareSwitch {
    pub const ALL: [HardwareSwitch; 8] = [
        HardwareSwitch::KeyShift,
        HardwareSwitch::KeyCtrl,
        HardwareSwitch::KeyAlt,
        HardwareSwitch::KeyRegular,
        HardwareSwitch::MouseLeft,
        HardwareSwitch::MouseRight,
        HardwareSwitch::MouseMiddle,
        HardwareSwitch::MouseUndefined,
    ];

    pub fn keyboard_switches() -> impl Iterator<Item = HardwareSwitch> {
        Self::ALL.into_iter().filter(|s| s.is_keyboard())
    }

    pub fn mouse_switches() -> impl Iterator<Item = HardwareSwitch> {
        Self::ALL.into_iter().filter(|s| s.is_mouse())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareSwitch::KeyShift => "shift",
            HardwareSwitch::KeyCtrl => "ctrl",
            HardwareSwitch::KeyAlt => "alt",
            HardwareSwitch::KeyRegular => "regular",
            HardwareSwitch::MouseLeft => "button 1",
            HardwareSwitch::MouseRight => "button 2",
            HardwareSwitch::MouseMiddle => "button 3",
            HardwareSwitch::MouseUndefined => "button extra",
        }
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(
            self,
            HardwareSwitch::KeyShift
                | HardwareSwitch::KeyCtrl
                | HardwareSwitch::KeyAlt
                | HardwareSwitch::KeyRegular
        )
    }

    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            HardwareSwitch::KeyShift | HardwareSwitch::KeyCtrl | HardwareSwitch::KeyAlt
        )
    }

    pub fn is_mouse(&self) -> bool {
        !self.is_keyboard()
    }

    pub fn region(&self) -> Region {
        match self {
            HardwareSwitch::KeyShift => Region::Shift,
            HardwareSwitch::KeyCtrl => Region::Ctrl,
            HardwareSwitch::KeyAlt => Region::Alt,
            HardwareSwitch::KeyRegular => Region::Regular,
            _ => Region::Mouse,
        }
    }
}

impl fmt::Display for HardwareSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HardwareSwitch {
    type Err = RouteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .ok_or_else(|| RouteError::UnknownSwitch(name.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwareState {
    Pressed,
    Released,
}

impl HardwareState {
    /// Interprets a non-empty transition value.
    pub fn from_value(value: &str) -> Self {
        if value == RELEASED_VALUE {
            HardwareState::Released
        } else {
            HardwareState::Pressed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareState::Pressed => "pressed",
            HardwareState::Released => "released",
        }
    }
}

impl fmt::Display for HardwareState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A switch in a given state, carrying its display value.
///
/// Two instances compare equal when switch and state match; the value is only
/// used for rendering.
#[derive(Debug, Clone)]
pub struct HardwareSwitchState {
    switch: HardwareSwitch,
    state: HardwareState,
    value: String,
}

impl HardwareSwitchState {
    pub fn new(switch: HardwareSwitch, state: HardwareState, value: impl Into<String>) -> Self {
        Self {
            switch,
            state,
            value: value.into(),
        }
    }

    /// Resolves a raw `(name, old, new)` transition.
    ///
    /// An empty new value falls back to the old one. The capture layer reports
    /// some drag releases with the terminal value in the old field; this is
    /// collaborator-specific behaviour rather than a general rule.
    pub fn resolve(name: &str, old_value: &str, new_value: &str) -> Result<Self, RouteError> {
        let switch = name.parse::<HardwareSwitch>()?;
        let value = if new_value.is_empty() {
            old_value
        } else {
            new_value
        };

        if value.is_empty() {
            return Err(RouteError::AmbiguousState(name.to_string()));
        }

        Ok(Self::new(switch, HardwareState::from_value(value), value))
    }

    pub fn switch(&self) -> HardwareSwitch {
        self.switch
    }

    pub fn state(&self) -> HardwareState {
        self.state
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_pressed(&self) -> bool {
        self.state == HardwareState::Pressed
    }

    pub fn is_keyboard(&self) -> bool {
        self.switch.is_keyboard()
    }

    pub fn is_modifier(&self) -> bool {
        self.switch.is_modifier()
    }
}

impl PartialEq for HardwareSwitchState {
    fn eq(&self, other: &Self) -> bool {
        self.switch == other.switch && self.state == other.state
    }
}

impl Eq for HardwareSwitchState {}

impl Hash for HardwareSwitchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.switch.hash(state);
        self.state.hash(state);
    }
}
