//! Font scaling that fits label text inside a fixed pixel box.

use serde::{Deserialize, Serialize};

pub const MIN_SIZE_PT: f32 = 1.0;
pub const MAX_SIZE_PT: f32 = 1000.0;
/// Width of the search interval at which scaling stops.
pub const PRECISION_PT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub fn fits_within(&self, bounds: &Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub bold: bool,
    pub size_pt: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, bold: bool, size_pt: f32) -> Self {
        Self {
            family: family.into(),
            bold,
            size_pt,
        }
    }

    pub fn with_size(&self, size_pt: f32) -> Self {
        Self {
            size_pt,
            ..self.clone()
        }
    }
}

/// Measures the rendered extent of text: visible advance and line height.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Returns `font` at the largest size found whose rendering of `text` fits
/// `target`.
///
/// Binary search over [`MIN_SIZE_PT`, `MAX_SIZE_PT`], probing the midpoint,
/// until the interval is at most [`PRECISION_PT`] wide. The lower bound is
/// returned, so the result is at most two points under the optimum and never
/// overflows unless not even the minimum size fits.
pub fn scale_font<M>(text: &str, font: &FontSpec, target: Size, measure: &M) -> FontSpec
where
    M: TextMeasure + ?Sized,
{
    let mut min_pt = MIN_SIZE_PT;
    let mut max_pt = MAX_SIZE_PT;

    while max_pt - min_pt > PRECISION_PT {
        let probe_pt = (min_pt + max_pt) / 2.0;
        let extent = measure.measure(text, &font.with_size(probe_pt));

        if extent.fits_within(&target) {
            min_pt = probe_pt;
        } else {
            max_pt = probe_pt;
        }
    }

    font.with_size(min_pt)
}

/// Splits a two-part key name such as `"Num 5"` into `("Num", "5")`.
///
/// A leading space does not count as a separator, and both halves must be
/// non-empty.
pub fn split_label(value: &str) -> Option<(&str, &str)> {
    match value.find(' ') {
        Some(index) if index > 0 && index + 1 < value.len() => {
            Some((&value[..index], &value[index + 1..]))
        }
        _ => None,
    }
}

/// Metrics for a font whose glyphs share a fixed advance.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMetrics {
    /// Advance of one character, as a fraction of the point size.
    pub advance_em: f32,
    /// Line height, as a fraction of the point size.
    pub line_height_em: f32,
    /// Extra advance applied to bold faces.
    pub bold_widening: f32,
}

#[cfg(test)]
impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self {
            advance_em: 0.62,
            line_height_em: 1.17,
            bold_widening: 1.08,
        }
    }
}

#[cfg(test)]
impl TextMeasure for FixedAdvanceMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let widening = if font.bold { self.bold_widening } else { 1.0 };
        let chars = text.chars().count() as f32;
        Size::new(
            chars * self.advance_em * widening * font.size_pt,
            self.line_height_em * font.size_pt,
        )
    }
}
