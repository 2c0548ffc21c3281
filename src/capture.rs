//! Global keyboard and mouse capture via evdev.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use evdev::{Device, EventType, InputEventKind, Key};
use log::{debug, info, warn};
use notify_rust::Notification;
use tokio::sync::mpsc;

use crate::gateway::GatewayHandle;
use crate::hardware::{HardwareSwitch, PRESSED_VALUE, RELEASED_VALUE};
use crate::key_mapping::{modifier_switch, mouse_button, regular_key_label};
use crate::router::Transition;

const EV_RELEASE: i32 = 0;
const EV_PRESS: i32 = 1;

#[derive(Debug, Clone, Copy)]
struct KeyEvent {
    key: Key,
    value: i32,
}

/// Turns raw evdev key codes into switch transitions.
#[derive(Debug, Default)]
pub struct InputTranslator {
    /// Physical keys currently held for each modifier class.
    held_modifiers: HashMap<HardwareSwitch, HashSet<Key>>,
    last_regular: Option<(Key, &'static str)>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transition for `key` changing to `value`, if the overlay
    /// should see one. Auto-repeat (`value == 2`) is ignored.
    pub fn translate(&mut self, key: Key, value: i32) -> Option<Transition> {
        let pressed = match value {
            EV_PRESS => true,
            EV_RELEASE => false,
            _ => return None,
        };

        if let Some(switch) = modifier_switch(key) {
            return self.translate_modifier(switch, key, pressed);
        }

        if let Some((switch, name)) = mouse_button(key) {
            return Some(translate_button(switch, name, pressed));
        }

        let Some(label) = regular_key_label(key) else {
            debug!("capture: no label for {:?}", key);
            return None;
        };

        if pressed {
            self.last_regular = Some((key, label));
            Some(Transition::new(HardwareSwitch::KeyRegular.as_str(), "", label))
        } else {
            // Releasing a key that was rolled over leaves the newer key shown.
            match self.last_regular {
                Some((last, label)) if last == key => {
                    self.last_regular = None;
                    Some(Transition::new(
                        HardwareSwitch::KeyRegular.as_str(),
                        label,
                        RELEASED_VALUE,
                    ))
                }
                _ => None,
            }
        }
    }

    fn translate_modifier(
        &mut self,
        switch: HardwareSwitch,
        key: Key,
        pressed: bool,
    ) -> Option<Transition> {
        let held = self.held_modifiers.entry(switch).or_default();
        let was_held = !held.is_empty();
        if pressed {
            held.insert(key);
        } else {
            held.remove(&key);
        }
        let is_held = !held.is_empty();

        if was_held == is_held {
            return None;
        }
        Some(toggle(switch, is_held))
    }
}

fn toggle(switch: HardwareSwitch, pressed: bool) -> Transition {
    if pressed {
        Transition::new(switch.as_str(), RELEASED_VALUE, PRESSED_VALUE)
    } else {
        Transition::new(switch.as_str(), PRESSED_VALUE, RELEASED_VALUE)
    }
}

fn translate_button(switch: HardwareSwitch, name: &str, pressed: bool) -> Transition {
    if switch != HardwareSwitch::MouseUndefined {
        return toggle(switch, pressed);
    }
    if pressed {
        Transition::new(switch.as_str(), "", name)
    } else {
        Transition::new(switch.as_str(), name, RELEASED_VALUE)
    }
}

// ── evdev device management ────────────────────────────────────────────

/// Keyboards (letter keys and space) and mice (left button) under `/dev/input`.
pub fn find_input_devices() -> Result<Vec<PathBuf>> {
    let mut devices = Vec::new();

    let input_dir = std::fs::read_dir("/dev/input").map_err(|e| {
        anyhow!(
            "Cannot read /dev/input: {}. You may need to add your user to the 'input' group.",
            e
        )
    })?;

    for entry in input_dir.flatten() {
        let path = entry.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if !name.starts_with("event") {
            continue;
        }

        match Device::open(&path) {
            Ok(device) => {
                if !device.supported_events().contains(EventType::KEY) {
                    continue;
                }
                let (is_keyboard, is_mouse) = device
                    .supported_keys()
                    .map(|keys| {
                        (
                            keys.contains(Key::KEY_A)
                                && keys.contains(Key::KEY_Z)
                                && keys.contains(Key::KEY_SPACE),
                            keys.contains(Key::BTN_LEFT),
                        )
                    })
                    .unwrap_or((false, false));

                if is_keyboard || is_mouse {
                    let dev_name = device.name().unwrap_or("unknown");
                    info!(
                        "evdev: found {} device {:?} ({})",
                        if is_keyboard { "keyboard" } else { "mouse" },
                        path,
                        dev_name
                    );
                    devices.push(path);
                }
            }
            Err(e) => {
                debug!("evdev: cannot open {:?}: {}", path, e);
            }
        }
    }

    Ok(devices)
}

/// Reads every input device and forwards translated transitions to `handle`
/// until the gateway stops or all devices disconnect.
pub async fn run_capture(handle: GatewayHandle) -> Result<()> {
    let devices = find_input_devices()?;
    if devices.is_empty() {
        return Err(anyhow!(
            "No keyboard or mouse devices found. Check /dev/input/ permissions."
        ));
    }
    info!("evdev: capturing from {} device(s)", devices.len());

    let (key_tx, mut key_rx) = mpsc::unbounded_channel::<KeyEvent>();

    let mut reader_handles = Vec::new();
    for device_path in devices {
        let tx = key_tx.clone();
        reader_handles.push(tokio::spawn(async move {
            if let Err(e) = read_device_events(device_path.clone(), tx).await {
                warn!("evdev reader for {:?} ended: {}", device_path, e);
                notify_capture_failure("Keycast lost an input device", &e.to_string());
            }
        }));
    }
    // Drop the original sender so the channel closes when all reader tasks end
    drop(key_tx);

    let mut translator = InputTranslator::new();
    let result = loop {
        let Some(event) = key_rx.recv().await else {
            break Err(anyhow!("All input device readers disconnected"));
        };
        if let Some(transition) = translator.translate(event.key, event.value) {
            if !handle.send(transition) {
                break Ok(());
            }
        }
    };

    for reader in reader_handles {
        reader.abort();
    }

    result
}

async fn read_device_events(path: PathBuf, tx: mpsc::UnboundedSender<KeyEvent>) -> Result<()> {
    let device = Device::open(&path).map_err(|e| anyhow!("Failed to open {:?}: {}", path, e))?;
    let mut stream = device
        .into_event_stream()
        .map_err(|e| anyhow!("Failed to create event stream for {:?}: {}", path, e))?;

    loop {
        let event = stream
            .next_event()
            .await
            .map_err(|e| anyhow!("Event read error on {:?}: {}", path, e))?;

        if let InputEventKind::Key(key) = event.kind() {
            if tx.send(KeyEvent { key, value: event.value() }).is_err() {
                break;
            }
        }
    }

    Ok(())
}

/// Tells the user, outside the terminal, that input capture is unavailable.
pub fn notify_capture_failure(summary: &str, body: &str) {
    let summary = summary.to_string();
    let body = body.to_string();
    std::thread::spawn(move || {
        if let Err(e) = Notification::new().summary(&summary).body(&body).show() {
            debug!("Failed to show capture notification: {}", e);
        }
    });
}
