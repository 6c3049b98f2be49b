// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for colorbar layout.
//!
//! Sizing a colorbar guide needs the extents of its title and of its label
//! block before any grid can be resolved. Shaping and glyph layout belong to
//! the renderer, so the layout code only depends on the small, fallible
//! [`TextMeasurer`] interface defined here.
//!
//! All lengths produced by a measurer are in **points**, the same unit as
//! [`TextStyle::font_size`]. Converting to physical units is the caller's job.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// Errors a text measurement backend can report.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// The requested font size is negative, NaN or infinite.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f64),
    /// The backend could not resolve metrics for the requested family.
    #[error("no font metrics available for family `{0}`")]
    UnresolvedFont(String),
}

/// A text measurement interface used while sizing guide elements.
///
/// Implementations can be heuristic (see [`HeuristicTextMeasurer`]) or backed
/// by a shaping engine. Failures are reported, never papered over: the
/// colorbar layout forwards them to its caller unchanged.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; use [`TextMeasurer::measure_block`]
    /// for text that may contain `\n`.
    fn measure(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, MeasureError>;

    /// Measure a block of `\n`-separated lines.
    ///
    /// The block is as wide as its widest line. Lines are stacked using
    /// `font_size * line_height` as the baseline-to-baseline distance, with
    /// the first line's ascent and the last line's descent as outer bounds.
    fn measure_block(&self, text: &str, style: &TextStyle) -> Result<BlockMetrics, MeasureError> {
        let mut width = 0.0_f64;
        let mut first_ascent = None;
        let mut last_descent = 0.0;
        let mut lines = 0_usize;
        for line in text.split('\n') {
            let m = self.measure(line, style)?;
            width = width.max(m.advance_width);
            first_ascent.get_or_insert(m.ascent);
            last_descent = m.descent;
            lines += 1;
        }
        let ascent = first_ascent.unwrap_or(0.0);
        let advance = style.font_size * style.line_height;
        let height = ascent + last_descent + advance * lines.saturating_sub(1) as f64;
        Ok(BlockMetrics {
            width,
            height,
            lines,
        })
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, MeasureError> {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Baseline-to-baseline distance as a multiple of `font_size`.
    pub line_height: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            line_height: 0.9,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the line height multiplier.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Returns a copy scaled by `factor`, as in a theme's relative sizes.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            font_size: self.font_size * factor,
            ..self.clone()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(11.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Measured extent of a multi-line text block, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockMetrics {
    /// Width of the widest line.
    pub width: f64,
    /// Total height from the first ascent to the last descent.
    pub height: f64,
    /// Number of lines measured.
    pub lines: usize,
}

/// A tiny heuristic text measurer suitable for demos, tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, MeasureError> {
        let size = style.font_size;
        if !size.is_finite() || size < 0.0 {
            return Err(MeasureError::InvalidFontSize(size));
        }
        if text.is_empty() {
            return Ok(TextMetrics::default());
        }
        Ok(TextMetrics {
            advance_width: 0.6 * size * text.chars().count() as f64,
            ascent: 0.8 * size,
            descent: 0.2 * size,
            leading: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let one = m.measure("a", &style).unwrap();
        let four = m.measure("abcd", &style).unwrap();
        assert!((four.advance_width - 4.0 * one.advance_width).abs() < 1e-9);
        assert!((one.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_zero_extent() {
        let m = HeuristicTextMeasurer;
        let metrics = m.measure("", &TextStyle::new(10.0)).unwrap();
        assert_eq!(metrics, TextMetrics::default());
    }

    #[test]
    fn invalid_font_size_is_reported() {
        let m = HeuristicTextMeasurer;
        let err = m.measure("x", &TextStyle::new(f64::NAN)).unwrap_err();
        assert!(matches!(err, MeasureError::InvalidFontSize(_)));
        let err = m.measure("x", &TextStyle::new(-1.0)).unwrap_err();
        assert_eq!(err, MeasureError::InvalidFontSize(-1.0));
    }

    #[test]
    fn block_stacks_lines_and_keeps_widest() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0).with_line_height(1.2);
        let block = m.measure_block("ab\nabcd\nc", &style).unwrap();
        assert_eq!(block.lines, 3);
        assert!((block.width - 24.0).abs() < 1e-9);
        // 8 (ascent) + 2 (descent) + 2 * 12 (line advance)
        assert!((block.height - 34.0).abs() < 1e-9);
    }

    #[test]
    fn single_line_block_matches_line_metrics() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(12.0);
        let line = m.measure("Value", &style).unwrap();
        let block = m.measure_block("Value", &style).unwrap();
        assert_eq!(block.lines, 1);
        assert!((block.width - line.advance_width).abs() < 1e-9);
        assert!((block.height - line.line_height()).abs() < 1e-9);
    }

    #[test]
    fn scaled_style_keeps_family() {
        let style = TextStyle::new(10.0).with_family(FontFamily::Monospace);
        let small = style.scaled(0.8);
        assert!((small.font_size - 8.0).abs() < 1e-9);
        assert_eq!(small.font_family.as_css_family(), "monospace");
    }
}
