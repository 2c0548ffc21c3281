//! Names for evdev keys and buttons as they appear on the overlay.

use evdev::Key;

use crate::hardware::HardwareSwitch;

/// Modifier class of an evdev key; left and right variants share a class.
pub fn modifier_switch(key: Key) -> Option<HardwareSwitch> {
    match key {
        Key::KEY_LEFTSHIFT | Key::KEY_RIGHTSHIFT => Some(HardwareSwitch::KeyShift),
        Key::KEY_LEFTCTRL | Key::KEY_RIGHTCTRL => Some(HardwareSwitch::KeyCtrl),
        Key::KEY_LEFTALT | Key::KEY_RIGHTALT => Some(HardwareSwitch::KeyAlt),
        _ => None,
    }
}

/// Mouse switch and display name for an evdev button code.
pub fn mouse_button(key: Key) -> Option<(HardwareSwitch, &'static str)> {
    Some(match key {
        Key::BTN_LEFT => (HardwareSwitch::MouseLeft, "Left"),
        Key::BTN_RIGHT => (HardwareSwitch::MouseRight, "Right"),
        Key::BTN_MIDDLE => (HardwareSwitch::MouseMiddle, "Middle"),
        Key::BTN_SIDE => (HardwareSwitch::MouseUndefined, "Side"),
        Key::BTN_EXTRA => (HardwareSwitch::MouseUndefined, "Extra"),
        Key::BTN_FORWARD => (HardwareSwitch::MouseUndefined, "Forward"),
        Key::BTN_BACK => (HardwareSwitch::MouseUndefined, "Back"),
        Key::BTN_TASK => (HardwareSwitch::MouseUndefined, "Task"),
        _ => return None,
    })
}

/// Display value for a non-modifier key.
///
/// Two-part names put a small annotation before the space and the main glyph
/// after it.
pub fn regular_key_label(key: Key) -> Option<&'static str> {
    Some(match key {
        // Letters
        Key::KEY_A => "A",
        Key::KEY_B => "B",
        Key::KEY_C => "C",
        Key::KEY_D => "D",
        Key::KEY_E => "E",
        Key::KEY_F => "F",
        Key::KEY_G => "G",
        Key::KEY_H => "H",
        Key::KEY_I => "I",
        Key::KEY_J => "J",
        Key::KEY_K => "K",
        Key::KEY_L => "L",
        Key::KEY_M => "M",
        Key::KEY_N => "N",
        Key::KEY_O => "O",
        Key::KEY_P => "P",
        Key::KEY_Q => "Q",
        Key::KEY_R => "R",
        Key::KEY_S => "S",
        Key::KEY_T => "T",
        Key::KEY_U => "U",
        Key::KEY_V => "V",
        Key::KEY_W => "W",
        Key::KEY_X => "X",
        Key::KEY_Y => "Y",
        Key::KEY_Z => "Z",

        // Digits
        Key::KEY_1 => "1",
        Key::KEY_2 => "2",
        Key::KEY_3 => "3",
        Key::KEY_4 => "4",
        Key::KEY_5 => "5",
        Key::KEY_6 => "6",
        Key::KEY_7 => "7",
        Key::KEY_8 => "8",
        Key::KEY_9 => "9",
        Key::KEY_0 => "0",

        // Function keys
        Key::KEY_F1 => "F1",
        Key::KEY_F2 => "F2",
        Key::KEY_F3 => "F3",
        Key::KEY_F4 => "F4",
        Key::KEY_F5 => "F5",
        Key::KEY_F6 => "F6",
        Key::KEY_F7 => "F7",
        Key::KEY_F8 => "F8",
        Key::KEY_F9 => "F9",
        Key::KEY_F10 => "F10",
        Key::KEY_F11 => "F11",
        Key::KEY_F12 => "F12",

        // Punctuation
        Key::KEY_MINUS => "-",
        Key::KEY_EQUAL => "=",
        Key::KEY_LEFTBRACE => "[",
        Key::KEY_RIGHTBRACE => "]",
        Key::KEY_BACKSLASH => "\\",
        Key::KEY_SEMICOLON => ";",
        Key::KEY_APOSTROPHE => "'",
        Key::KEY_GRAVE => "`",
        Key::KEY_COMMA => ",",
        Key::KEY_DOT => ".",
        Key::KEY_SLASH => "/",

        // Editing and navigation
        Key::KEY_ESC => "Esc",
        Key::KEY_SPACE => "Space",
        Key::KEY_BACKSPACE => "Back ⌫",
        Key::KEY_TAB => "Tab ↹",
        Key::KEY_ENTER => "Enter ⏎",
        Key::KEY_CAPSLOCK => "Caps ⇪",
        Key::KEY_DELETE => "Del ⌦",
        Key::KEY_INSERT => "Ins",
        Key::KEY_HOME => "Home",
        Key::KEY_END => "End",
        Key::KEY_PAGEUP => "Page ⇞",
        Key::KEY_PAGEDOWN => "Page ⇟",
        Key::KEY_LEFT => "←",
        Key::KEY_RIGHT => "→",
        Key::KEY_UP => "↑",
        Key::KEY_DOWN => "↓",
        Key::KEY_LEFTMETA | Key::KEY_RIGHTMETA => "Super",
        Key::KEY_COMPOSE => "Menu",
        Key::KEY_PRINT | Key::KEY_SYSRQ => "PrtSc",
        Key::KEY_SCROLLLOCK => "Scroll Lock",
        Key::KEY_PAUSE => "Pause",

        // Number pad
        Key::KEY_NUMLOCK => "Num Lock",
        Key::KEY_KP0 => "Num 0",
        Key::KEY_KP1 => "Num 1",
        Key::KEY_KP2 => "Num 2",
        Key::KEY_KP3 => "Num 3",
        Key::KEY_KP4 => "Num 4",
        Key::KEY_KP5 => "Num 5",
        Key::KEY_KP6 => "Num 6",
        Key::KEY_KP7 => "Num 7",
        Key::KEY_KP8 => "Num 8",
        Key::KEY_KP9 => "Num 9",
        Key::KEY_KPDOT => "Num .",
        Key::KEY_KPPLUS => "Num +",
        Key::KEY_KPMINUS => "Num -",
        Key::KEY_KPASTERISK => "Num *",
        Key::KEY_KPSLASH => "Num /",
        Key::KEY_KPENTER => "Num ⏎",

        _ => return None,
    })
}
