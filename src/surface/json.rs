use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::{DisplaySurface, RegionLayout};
use crate::hardware::{HardwareSwitchState, Region};
use crate::labels::{Anchor, Label, LabelSlot};
use crate::text_fit::{FontSpec, Size, TextMeasure};

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum SurfaceRecord<'a> {
    Switch {
        switch: &'a str,
        state: &'a str,
        glyph: &'a Path,
    },
    Label {
        slot: LabelSlot,
        anchor: Anchor,
        text: &'a str,
        family: &'a str,
        bold: bool,
        size_pt: f32,
        colour: String,
        visible: bool,
        offset_y: f32,
    },
    Flush,
}

/// Streams display updates as JSON lines for an external overlay renderer.
///
/// Label sizes are fitted with `M`, which must measure the face the renderer
/// draws with.
pub struct JsonLineSurface<W: Write, M: TextMeasure> {
    writer: W,
    layout: RegionLayout,
    metrics: M,
}

impl<W: Write, M: TextMeasure> JsonLineSurface<W, M> {
    pub fn new(writer: W, layout: RegionLayout, metrics: M) -> Self {
        Self {
            writer,
            layout,
            metrics,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, record: &SurfaceRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write, M: TextMeasure> TextMeasure for JsonLineSurface<W, M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        self.metrics.measure(text, font)
    }
}

impl<W, M, G> DisplaySurface<G> for JsonLineSurface<W, M>
where
    W: Write,
    M: TextMeasure,
    G: AsRef<Path> + ?Sized,
{
    fn region_size(&self, region: Region) -> Size {
        self.layout.size(region)
    }

    fn update_switch_state(&mut self, state: &HardwareSwitchState, glyph: &G) -> io::Result<()> {
        self.write_record(&SurfaceRecord::Switch {
            switch: state.switch().as_str(),
            state: state.state().as_str(),
            glyph: glyph.as_ref(),
        })
    }

    fn update_switch_label(&mut self, slot: LabelSlot, label: &Label) -> io::Result<()> {
        self.write_record(&SurfaceRecord::Label {
            slot,
            anchor: slot.anchor(),
            text: &label.text,
            family: &label.font.family,
            bold: label.font.bold,
            size_pt: label.font.size_pt,
            colour: label.colour.to_hex(),
            visible: label.visible,
            offset_y: label.offset_y,
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_record(&SurfaceRecord::Flush)?;
        self.writer.flush()
    }
}
