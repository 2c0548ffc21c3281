use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_COUNTER_MAX;
use crate::hardware::HardwareSwitch;
use crate::labels::KeyColours;
use crate::surface::RegionLayout;
use crate::text_fit::FontSpec;

const SETTINGS_DIR: &str = "keycast";
const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_FONT_FILE: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// Release debounce per switch class. All three are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delays {
    pub key_modifier_ms: u64,
    pub key_regular_ms: u64,
    pub mouse_button_ms: u64,
}

impl Delays {
    pub fn for_switch(&self, switch: HardwareSwitch) -> Duration {
        let ms = if switch.is_mouse() {
            self.mouse_button_ms
        } else if switch.is_modifier() {
            self.key_modifier_ms
        } else {
            self.key_regular_ms
        };
        Duration::from_millis(ms)
    }

    pub fn longest(&self) -> Duration {
        Duration::from_millis(
            self.key_modifier_ms
                .max(self.key_regular_ms)
                .max(self.mouse_button_ms),
        )
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            key_modifier_ms: 150,
            key_regular_ms: 250,
            mouse_button_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub family: String,
    pub bold: bool,
    /// Font file used to measure label text; it should hold the face above.
    pub file: PathBuf,
}

impl FontSettings {
    pub fn font_spec(&self) -> FontSpec {
        FontSpec::new(self.family.clone(), self.bold, 12.0)
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "DejaVu Sans".to_string(),
            bold: true,
            file: PathBuf::from(DEFAULT_FONT_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub delays: Delays,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default = "default_counter_max")]
    pub counter_max: u32,
    #[serde(default)]
    pub font: FontSettings,
    #[serde(default)]
    pub colours: KeyColours,
    #[serde(default)]
    pub layout: RegionLayout,
    #[serde(default = "default_glyph_dir")]
    pub glyph_dir: PathBuf,
}

fn default_counter_max() -> u32 {
    DEFAULT_COUNTER_MAX
}

fn default_glyph_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_DIR)
        .join("glyphs")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delays: Delays::default(),
            log_level: LogLevel::default(),
            counter_max: DEFAULT_COUNTER_MAX,
            font: FontSettings::default(),
            colours: KeyColours::default(),
            layout: RegionLayout::default(),
            glyph_dir: default_glyph_dir(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Loads `path`, or the default settings file when `path` is `None`.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file or any malformed content is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    log::debug!("No settings file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid settings in {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
