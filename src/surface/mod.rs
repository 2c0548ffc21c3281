//! Seams to the display surface that owns layout and rendering.

mod json;
#[cfg(test)]
pub mod recording;

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::hardware::{HardwareState, HardwareSwitch, HardwareSwitchState, Region};
use crate::labels::{Label, LabelSlot};
use crate::text_fit::{Size, TextMeasure};

pub use json::JsonLineSurface;

/// Lookup of pre-rendered indicator images by switch and state.
pub trait GlyphLookup {
    type Glyph: ?Sized;

    fn glyph(&self, switch: HardwareSwitch, state: HardwareState) -> Option<&Self::Glyph>;
}

/// One visual region per switch; the router mutates state and labels only.
pub trait DisplaySurface<G: ?Sized>: TextMeasure {
    fn region_size(&self, region: Region) -> Size;

    /// Re-renders the indicator for `state.switch()` using `glyph`.
    fn update_switch_state(&mut self, state: &HardwareSwitchState, glyph: &G) -> io::Result<()>;

    fn update_switch_label(&mut self, slot: LabelSlot, label: &Label) -> io::Result<()>;

    /// Paints whatever updates are outstanding.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pixel size of every display region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionLayout {
    pub shift: Size,
    pub ctrl: Size,
    pub alt: Size,
    pub regular: Size,
    pub mouse: Size,
}

impl RegionLayout {
    pub fn size(&self, region: Region) -> Size {
        match region {
            Region::Shift => self.shift,
            Region::Ctrl => self.ctrl,
            Region::Alt => self.alt,
            Region::Regular => self.regular,
            Region::Mouse => self.mouse,
        }
    }
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self {
            shift: Size::new(96.0, 60.0),
            ctrl: Size::new(78.0, 60.0),
            alt: Size::new(66.0, 60.0),
            regular: Size::new(66.0, 60.0),
            mouse: Size::new(42.0, 60.0),
        }
    }
}

/// Glyph files in a theme directory, one per switch and state.
#[derive(Debug, Clone)]
pub struct NamedGlyphs {
    paths: HashMap<(HardwareSwitch, HardwareState), PathBuf>,
}

impl NamedGlyphs {
    pub fn new(dir: &Path) -> Self {
        let mut paths = HashMap::new();
        for switch in HardwareSwitch::ALL {
            for state in [HardwareState::Pressed, HardwareState::Released] {
                paths.insert((switch, state), dir.join(glyph_file_name(switch, state)));
            }
        }
        Self { paths }
    }
}

impl GlyphLookup for NamedGlyphs {
    type Glyph = Path;

    fn glyph(&self, switch: HardwareSwitch, state: HardwareState) -> Option<&Path> {
        self.paths.get(&(switch, state)).map(PathBuf::as_path)
    }
}

fn glyph_file_name(switch: HardwareSwitch, state: HardwareState) -> String {
    format!("{}-{}.svg", switch.as_str().replace(' ', "-"), state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_glyphs_cover_every_state() {
        let glyphs = NamedGlyphs::new(Path::new("/themes/dark"));
        for switch in HardwareSwitch::ALL {
            assert!(glyphs.glyph(switch, HardwareState::Pressed).is_some());
            assert!(glyphs.glyph(switch, HardwareState::Released).is_some());
        }
        assert_eq!(
            glyphs.glyph(HardwareSwitch::MouseLeft, HardwareState::Pressed),
            Some(Path::new("/themes/dark/button-1-pressed.svg"))
        );
    }

    #[test]
    fn test_layout_maps_regions() {
        let layout = RegionLayout::default();
        assert_eq!(layout.size(Region::Mouse), layout.mouse);
        assert_eq!(layout.size(Region::Regular).height, 60.0);
    }
}
