// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colorbar guide configuration.
//!
//! [`ColorbarSpec`] is what a user writes; most of its fields are optional
//! and fall back to orientation-dependent or theme-provided defaults.
//! [`ColorbarSpec::resolve`] folds all of that into an [`EffectiveConfig`]
//! once, so sizing and layout never consult the theme again.

extern crate alloc;

use alloc::string::String;

use peniko::Brush;

use crate::error::ColorbarError;
use crate::theme::{LegendTheme, StrokeStyle, TextElement};
use crate::unit::{Length, Margin, Unit, UnitContext};

/// The direction the bar runs in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Low values on the left, high values on the right.
    Horizontal,
    /// Low values at the bottom, high values at the top.
    #[default]
    Vertical,
}

/// A side of the bar (for labels) or of the bar and label block (for titles).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Above.
    Top,
    /// Below.
    Bottom,
    /// To the left.
    Left,
    /// To the right.
    Right,
}

impl Position {
    /// All four positions.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Whether labels may sit on this side of a bar with `orientation`.
    pub fn fits_labels(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => matches!(self, Self::Top | Self::Bottom),
            Orientation::Vertical => matches!(self, Self::Left | Self::Right),
        }
    }
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The label positions valid for this orientation.
    pub fn label_positions(self) -> [Position; 2] {
        match self {
            Self::Horizontal => [Position::Top, Position::Bottom],
            Self::Vertical => [Position::Left, Position::Right],
        }
    }

    /// Default label position.
    pub fn default_label_position(self) -> Position {
        match self {
            Self::Horizontal => Position::Bottom,
            Self::Vertical => Position::Right,
        }
    }

    /// Default title position.
    pub fn default_title_position(self) -> Position {
        match self {
            Self::Horizontal => Position::Left,
            Self::Vertical => Position::Top,
        }
    }
}

/// User-facing colorbar configuration.
///
/// Immutable once built; every `with_*` method consumes and returns the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorbarSpec {
    /// Guide identity, folded into the content hash.
    pub name: String,
    /// Title text. `None` means no title. May contain `\n`.
    pub title: Option<String>,
    /// Title position; defaults by orientation.
    pub title_position: Option<Position>,
    /// Title element override; defaults to the theme's.
    pub title_element: Option<TextElement>,
    /// Title horizontal justification override.
    pub title_hjust: Option<f64>,
    /// Title vertical justification override.
    pub title_vjust: Option<f64>,
    /// Whether labels are drawn.
    pub label: bool,
    /// Label position; defaults by orientation.
    pub label_position: Option<Position>,
    /// Label element override; defaults to the theme's.
    pub label_element: Option<TextElement>,
    /// Label horizontal justification override.
    pub label_hjust: Option<f64>,
    /// Label vertical justification override.
    pub label_vjust: Option<f64>,
    /// Bar width in `default_unit`.
    pub bar_width: Option<f64>,
    /// Bar height in `default_unit`.
    pub bar_height: Option<f64>,
    /// Unit for `bar_width` and `bar_height`.
    pub default_unit: Unit,
    /// Number of bins the bar is sampled at.
    pub bins: usize,
    /// Draw the bar as one gradient rather than as rectangles.
    pub raster: bool,
    /// Draw tick marks.
    pub ticks: bool,
    /// Tick stroke override.
    pub tick_stroke: Option<StrokeStyle>,
    /// Draw the tick mark of the first break.
    pub draw_lower_limit: bool,
    /// Draw the tick mark of the last break.
    pub draw_upper_limit: bool,
    /// Bar direction.
    pub orientation: Orientation,
    /// Reverse the bar and the tick entries.
    pub reverse: bool,
}

impl Default for ColorbarSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorbarSpec {
    /// Default number of bins.
    pub const DEFAULT_BINS: usize = 20;
    /// Long-axis multiple of the theme key size used when no bar size is given.
    pub const BAR_LENGTH_KEYS: f64 = 5.0;

    /// A vertical colorbar with every option at its default.
    pub fn new() -> Self {
        Self {
            name: String::from("colorbar"),
            title: None,
            title_position: None,
            title_element: None,
            title_hjust: None,
            title_vjust: None,
            label: true,
            label_position: None,
            label_element: None,
            label_hjust: None,
            label_vjust: None,
            bar_width: None,
            bar_height: None,
            default_unit: Unit::Lines,
            bins: Self::DEFAULT_BINS,
            raster: true,
            ticks: true,
            tick_stroke: None,
            draw_lower_limit: true,
            draw_upper_limit: true,
            orientation: Orientation::Vertical,
            reverse: false,
        }
    }

    /// Sets the guide name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Removes the title.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Sets the title position.
    pub fn with_title_position(mut self, position: Position) -> Self {
        self.title_position = Some(position);
        self
    }

    /// Overrides the theme's title element.
    pub fn with_title_element(mut self, element: TextElement) -> Self {
        self.title_element = Some(element);
        self
    }

    /// Overrides the title justification.
    pub fn with_title_just(mut self, hjust: f64, vjust: f64) -> Self {
        self.title_hjust = Some(hjust);
        self.title_vjust = Some(vjust);
        self
    }

    /// Shows or hides the labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.label = show;
        self
    }

    /// Sets the label position.
    pub fn with_label_position(mut self, position: Position) -> Self {
        self.label_position = Some(position);
        self
    }

    /// Overrides the theme's label element.
    pub fn with_label_element(mut self, element: TextElement) -> Self {
        self.label_element = Some(element);
        self
    }

    /// Overrides the label justification.
    pub fn with_label_just(mut self, hjust: f64, vjust: f64) -> Self {
        self.label_hjust = Some(hjust);
        self.label_vjust = Some(vjust);
        self
    }

    /// Sets the bar width in [`ColorbarSpec::default_unit`].
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    /// Sets the bar height in [`ColorbarSpec::default_unit`].
    pub fn with_bar_height(mut self, height: f64) -> Self {
        self.bar_height = Some(height);
        self
    }

    /// Sets the unit of the bar size overrides.
    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Sets the bin count.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Draws the bar as a gradient (`true`) or as rectangles (`false`).
    pub fn with_raster(mut self, raster: bool) -> Self {
        self.raster = raster;
        self
    }

    /// Shows or hides the tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Overrides the tick stroke.
    pub fn with_tick_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.tick_stroke = Some(stroke);
        self
    }

    /// Shows or hides the tick marks of the first and last breaks.
    pub fn with_limit_ticks(mut self, lower: bool, upper: bool) -> Self {
        self.draw_lower_limit = lower;
        self.draw_upper_limit = upper;
        self
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Reverses the bar direction.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Checks the options that do not depend on a theme.
    ///
    /// Returns the label position after defaulting.
    pub fn validate(&self) -> Result<Position, ColorbarError> {
        if self.bins == 0 {
            return Err(ColorbarError::InvalidBinCount);
        }
        let position = self
            .label_position
            .unwrap_or_else(|| self.orientation.default_label_position());
        if !position.fits_labels(self.orientation) {
            return Err(ColorbarError::InvalidLabelPosition {
                position,
                orientation: self.orientation,
            });
        }
        Ok(position)
    }

    /// Resolves every default against `theme`.
    pub fn resolve(&self, theme: &LegendTheme) -> Result<EffectiveConfig, ColorbarError> {
        let label_position = self.validate()?;
        let orientation = self.orientation;
        let units = theme.units;

        let user_length = |v: f64| units.to_mm(Length::new(v, self.default_unit));
        let long = |key: Length| units.to_mm(key) * Self::BAR_LENGTH_KEYS;
        let bar_width = match (self.bar_width, orientation) {
            (Some(w), _) => user_length(w),
            (None, Orientation::Horizontal) => long(theme.key_width),
            (None, Orientation::Vertical) => units.to_mm(theme.key_width),
        };
        let bar_height = match (self.bar_height, orientation) {
            (Some(h), _) => user_length(h),
            (None, Orientation::Horizontal) => units.to_mm(theme.key_height),
            (None, Orientation::Vertical) => long(theme.key_height),
        };

        let mut title = self
            .title_element
            .clone()
            .unwrap_or_else(|| theme.title.clone());
        title.hjust = self.title_hjust.unwrap_or(title.hjust);
        title.vjust = self.title_vjust.unwrap_or(title.vjust);

        let mut label = self
            .label_element
            .clone()
            .unwrap_or_else(|| theme.text.clone());
        let default_label_hjust = match orientation {
            Orientation::Horizontal => 0.5,
            Orientation::Vertical => 0.0,
        };
        label.hjust = self.label_hjust.unwrap_or(default_label_hjust);
        label.vjust = self.label_vjust.unwrap_or(0.5);

        Ok(EffectiveConfig {
            orientation,
            label_position,
            title_position: self
                .title_position
                .unwrap_or_else(|| orientation.default_title_position()),
            title: self.title.clone().filter(|t| !t.is_empty()),
            title_element: title,
            show_labels: self.label,
            label_element: label,
            bar_width,
            bar_height,
            bins: self.bins,
            raster: self.raster,
            ticks: self.ticks,
            tick_stroke: self
                .tick_stroke
                .clone()
                .unwrap_or_else(StrokeStyle::colorbar_ticks),
            draw_lower_limit: self.draw_lower_limit,
            draw_upper_limit: self.draw_upper_limit,
            gap: units.to_mm(theme.spacing),
            margin: theme.margin.to_mm(&units),
            background_fill: theme.background_fill.clone(),
            background_stroke: theme.background_stroke.clone(),
            units,
        })
    }
}

/// A fully defaulted colorbar configuration. Lengths are in millimetres.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    /// Bar direction.
    pub orientation: Orientation,
    /// Label side, already checked against the orientation.
    pub label_position: Position,
    /// Title side.
    pub title_position: Position,
    /// Title text; empty titles are dropped.
    pub title: Option<String>,
    /// Title element with justification applied.
    pub title_element: TextElement,
    /// Whether labels are drawn.
    pub show_labels: bool,
    /// Label element with justification applied.
    pub label_element: TextElement,
    /// Bar width.
    pub bar_width: f64,
    /// Bar height.
    pub bar_height: f64,
    /// Bin count, at least 1.
    pub bins: usize,
    /// Gradient bar.
    pub raster: bool,
    /// Tick marks drawn.
    pub ticks: bool,
    /// Tick stroke.
    pub tick_stroke: StrokeStyle,
    /// First tick mark drawn.
    pub draw_lower_limit: bool,
    /// Last tick mark drawn.
    pub draw_upper_limit: bool,
    /// Spacing between bar, labels and title.
    pub gap: f64,
    /// Space around the guide.
    pub margin: Margin<f64>,
    /// Background fill.
    pub background_fill: Option<Brush>,
    /// Background outline.
    pub background_stroke: Option<StrokeStyle>,
    /// Font context the lengths were resolved in.
    pub units: UnitContext,
}

impl EffectiveConfig {
    /// Length of the bar along its orientation.
    pub fn bar_length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.bar_width,
            Orientation::Vertical => self.bar_height,
        }
    }
}
