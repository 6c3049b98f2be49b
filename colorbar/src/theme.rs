// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme inputs for colorbar guides.
//!
//! A [`LegendTheme`] carries everything the guide would otherwise look up
//! from a plot-wide theme: default key size, text elements for the title and
//! labels, the background, the legend margin and the spacing between parts.

use colorbar_text::TextStyle;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::unit::{Length, Margin, UnitContext};

/// Line width of one "lwd" unit (1/96 inch) in millimetres.
const LWD_MM: f64 = 25.4 / 96.0;

/// Stroke styling for outlines and tick marks.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in millimetres.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }

    /// The default colorbar tick stroke: white, half a line width.
    pub fn colorbar_ticks() -> Self {
        Self::solid(css::WHITE, 0.5 * LWD_MM)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, LWD_MM)
    }
}

/// A text element: font, colour and justification.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    /// Font inputs passed to the text measurer.
    pub style: TextStyle,
    /// Text colour.
    pub color: Color,
    /// Horizontal justification in `[0, 1]`.
    pub hjust: f64,
    /// Vertical justification in `[0, 1]`.
    pub vjust: f64,
    /// Counter-clockwise rotation in degrees.
    pub angle: f64,
}

impl TextElement {
    /// A black, left-aligned, vertically centred element.
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            color: css::BLACK,
            hjust: 0.0,
            vjust: 0.5,
            angle: 0.0,
        }
    }

    /// Sets the colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets both justifications.
    pub fn with_just(mut self, hjust: f64, vjust: f64) -> Self {
        self.hjust = hjust;
        self.vjust = vjust;
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// Legend-level theme settings consumed by the colorbar.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendTheme {
    /// Font context used to resolve [`crate::Unit::Lines`].
    pub units: UnitContext,
    /// Default key width; the bar is five keys long when horizontal.
    pub key_width: Length,
    /// Default key height; the bar is five keys long when vertical.
    pub key_height: Length,
    /// Title text element.
    pub title: TextElement,
    /// Label text element.
    pub text: TextElement,
    /// Background fill, if any.
    pub background_fill: Option<Brush>,
    /// Background outline, if any.
    pub background_stroke: Option<StrokeStyle>,
    /// Space around the whole guide.
    pub margin: Margin,
    /// Gap between bar and labels, and between the block and the title.
    pub spacing: Length,
}

impl Default for LegendTheme {
    fn default() -> Self {
        let base = TextStyle::new(11.0);
        Self {
            units: UnitContext::default(),
            key_width: Length::lines(1.2),
            key_height: Length::lines(1.2),
            title: TextElement::new(base.clone()),
            text: TextElement::new(base.scaled(0.8)),
            background_fill: Some(Brush::Solid(css::WHITE)),
            background_stroke: None,
            margin: Margin::uniform(Length::pt(5.5)),
            spacing: Length::lines(0.3),
        }
    }
}

impl LegendTheme {
    /// Converts `length` to millimetres in this theme's font context.
    pub fn to_mm(&self, length: Length) -> f64 {
        self.units.to_mm(length)
    }

    /// Sets the default key size.
    pub fn with_key_size(mut self, width: Length, height: Length) -> Self {
        self.key_width = width;
        self.key_height = height;
        self
    }

    /// Sets the title element.
    pub fn with_title(mut self, title: TextElement) -> Self {
        self.title = title;
        self
    }

    /// Sets the label element.
    pub fn with_text(mut self, text: TextElement) -> Self {
        self.text = text;
        self
    }

    /// Sets the background fill and outline.
    pub fn with_background(mut self, fill: Option<Brush>, stroke: Option<StrokeStyle>) -> Self {
        self.background_fill = fill;
        self.background_stroke = stroke;
        self
    }

    /// Sets the legend margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }
}
