//! Display surface double that records calls in order.

use std::io;
use std::path::Path;

use super::{DisplaySurface, RegionLayout};
use crate::hardware::{HardwareState, HardwareSwitch, HardwareSwitchState, Region};
use crate::labels::{Label, LabelSlot};
use crate::text_fit::{FixedAdvanceMetrics, FontSpec, Size, TextMeasure};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Switch(HardwareSwitch, HardwareState),
    Label(LabelSlot, Label),
    Flush,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    layout: RegionLayout,
    metrics: FixedAdvanceMetrics,
    fail_labels: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose label updates fail, as if the renderer went away.
    pub fn failing_labels() -> Self {
        Self {
            fail_labels: true,
            ..Self::default()
        }
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn switch_calls(&self) -> Vec<(HardwareSwitch, HardwareState)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Switch(switch, state) => Some((*switch, *state)),
                _ => None,
            })
            .collect()
    }

    /// The most recent label pushed for `slot`.
    pub fn last_label(&self, slot: LabelSlot) -> Option<&Label> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Label(s, label) if *s == slot => Some(label),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        self.metrics.measure(text, font)
    }
}

impl DisplaySurface<Path> for RecordingSurface {
    fn region_size(&self, region: Region) -> Size {
        self.layout.size(region)
    }

    fn update_switch_state(&mut self, state: &HardwareSwitchState, _glyph: &Path) -> io::Result<()> {
        self.calls
            .push(SurfaceCall::Switch(state.switch(), state.state()));
        Ok(())
    }

    fn update_switch_label(&mut self, slot: LabelSlot, label: &Label) -> io::Result<()> {
        if self.fail_labels {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "renderer closed"));
        }
        self.calls.push(SurfaceCall::Label(slot, label.clone()));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.calls.push(SurfaceCall::Flush);
        Ok(())
    }
}
