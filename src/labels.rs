//! Text slots drawn atop the switch indicators.

use serde::{Deserialize, Serialize};

use crate::hardware::{HardwareState, HardwareSwitch, Region};
use crate::text_fit::FontSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelSlot {
    Shift,
    Ctrl,
    Alt,
    Regular,
    RegularMain,
    RegularSuperscript,
    RegularCounter,
    MouseUndefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Center,
    TopLeft,
    BottomRight,
}

impl LabelSlot {
    pub const ALL: [LabelSlot; 8] = [
        LabelSlot::Shift,
        LabelSlot::Ctrl,
        LabelSlot::Alt,
        LabelSlot::Regular,
        LabelSlot::RegularMain,
        LabelSlot::RegularSuperscript,
        LabelSlot::RegularCounter,
        LabelSlot::MouseUndefined,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LabelSlot::Shift => "Shift",
            LabelSlot::Ctrl => "Ctrl",
            LabelSlot::Alt => "Alt",
            LabelSlot::Regular => "Regular",
            LabelSlot::RegularMain => "Main",
            LabelSlot::RegularSuperscript => "Superscript",
            LabelSlot::RegularCounter => "Counter",
            LabelSlot::MouseUndefined => "Button",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            LabelSlot::Shift => Region::Shift,
            LabelSlot::Ctrl => Region::Ctrl,
            LabelSlot::Alt => Region::Alt,
            LabelSlot::MouseUndefined => Region::Mouse,
            _ => Region::Regular,
        }
    }

    /// Fraction of the region box the label text is fitted into.
    pub fn scale(&self) -> f32 {
        match self {
            LabelSlot::RegularMain => 0.8,
            LabelSlot::RegularSuperscript => 0.6,
            LabelSlot::RegularCounter => 0.25,
            _ => 1.0,
        }
    }

    pub fn anchor(&self) -> Anchor {
        match self {
            LabelSlot::RegularSuperscript => Anchor::TopLeft,
            LabelSlot::RegularCounter => Anchor::BottomRight,
            _ => Anchor::Center,
        }
    }

    pub fn for_modifier(switch: HardwareSwitch) -> Option<LabelSlot> {
        match switch {
            HardwareSwitch::KeyShift => Some(LabelSlot::Shift),
            HardwareSwitch::KeyCtrl => Some(LabelSlot::Ctrl),
            HardwareSwitch::KeyAlt => Some(LabelSlot::Alt),
            _ => None,
        }
    }

    /// Modifier slots always show their title and only change colour.
    pub fn is_static_title(&self) -> bool {
        matches!(self, LabelSlot::Shift | LabelSlot::Ctrl | LabelSlot::Alt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Key cap title colours for each switch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColours {
    pub pressed: Colour,
    pub released: Colour,
}

impl KeyColours {
    pub fn for_state(&self, state: HardwareState) -> Colour {
        match state {
            HardwareState::Pressed => self.pressed,
            HardwareState::Released => self.released,
        }
    }
}

impl Default for KeyColours {
    fn default() -> Self {
        Self {
            pressed: Colour::rgb(0x21, 0x21, 0x21),
            released: Colour::rgb(0x8a, 0x8a, 0x8a),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font: FontSpec,
    pub colour: Colour,
    pub visible: bool,
    /// Vertical displacement from the anchored position, in pixels.
    pub offset_y: f32,
}

impl Label {
    fn new(slot: LabelSlot, font: &FontSpec, colour: Colour) -> Self {
        let static_title = slot.is_static_title();
        Self {
            text: if static_title {
                slot.title().to_string()
            } else {
                String::new()
            },
            font: font.clone(),
            colour,
            visible: static_title,
            offset_y: 0.0,
        }
    }
}

/// Owns exactly one label per slot for the life of the process.
#[derive(Debug, Clone)]
pub struct LabelSet {
    shift: Label,
    ctrl: Label,
    alt: Label,
    regular: Label,
    regular_main: Label,
    regular_superscript: Label,
    regular_counter: Label,
    mouse_undefined: Label,
}

impl LabelSet {
    pub fn new(font: &FontSpec, colours: &KeyColours) -> Self {
        let label = |slot: LabelSlot| {
            let colour = if slot.is_static_title() {
                colours.released
            } else {
                colours.pressed
            };
            Label::new(slot, font, colour)
        };

        Self {
            shift: label(LabelSlot::Shift),
            ctrl: label(LabelSlot::Ctrl),
            alt: label(LabelSlot::Alt),
            regular: label(LabelSlot::Regular),
            regular_main: label(LabelSlot::RegularMain),
            regular_superscript: label(LabelSlot::RegularSuperscript),
            regular_counter: label(LabelSlot::RegularCounter),
            mouse_undefined: label(LabelSlot::MouseUndefined),
        }
    }

    pub fn get(&self, slot: LabelSlot) -> &Label {
        match slot {
            LabelSlot::Shift => &self.shift,
            LabelSlot::Ctrl => &self.ctrl,
            LabelSlot::Alt => &self.alt,
            LabelSlot::Regular => &self.regular,
            LabelSlot::RegularMain => &self.regular_main,
            LabelSlot::RegularSuperscript => &self.regular_superscript,
            LabelSlot::RegularCounter => &self.regular_counter,
            LabelSlot::MouseUndefined => &self.mouse_undefined,
        }
    }

    pub fn get_mut(&mut self, slot: LabelSlot) -> &mut Label {
        match slot {
            LabelSlot::Shift => &mut self.shift,
            LabelSlot::Ctrl => &mut self.ctrl,
            LabelSlot::Alt => &mut self.alt,
            LabelSlot::Regular => &mut self.regular,
            LabelSlot::RegularMain => &mut self.regular_main,
            LabelSlot::RegularSuperscript => &mut self.regular_superscript,
            LabelSlot::RegularCounter => &mut self.regular_counter,
            LabelSlot::MouseUndefined => &mut self.mouse_undefined,
        }
    }
}
