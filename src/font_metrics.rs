//! Text measurement against a real font face.

use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use anyhow::{Context, Result};

use crate::text_fit::{FontSpec, Size, TextMeasure};

/// Measures text with the glyph advances and kerning of a loaded font file.
///
/// `FontSpec::size_pt` is taken as the em size in pixels, which is how the
/// renderer draws the sizes it receives.
#[derive(Clone)]
pub struct FontMetrics {
    font: FontArc,
}

impl FontMetrics {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read font {:?}", path))?;
        let font = FontArc::try_from_vec(data)
            .with_context(|| format!("Invalid font file {:?}", path))?;
        Ok(Self { font })
    }

    fn scale_for(&self, size_pt: f32) -> PxScale {
        // ab_glyph scales by line height, not by em.
        let height_per_em = self
            .font
            .units_per_em()
            .map(|units| self.font.height_unscaled() / units)
            .unwrap_or(1.0);
        PxScale::from(size_pt * height_per_em)
    }
}

impl TextMeasure for FontMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let scaled = self.font.as_scaled(self.scale_for(font.size_pt));

        let mut width = 0.0;
        let mut previous = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                width += scaled.kern(previous, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }

        Size::new(width, scaled.height())
    }
}
