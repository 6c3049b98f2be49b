// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable payloads for each grid cell.
//!
//! Payload coordinates are millimetres relative to the top-left corner of the
//! cell the payload is placed in, with y growing downwards. Along a vertical
//! bar, low values sit at the bottom.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Size};
use peniko::{Brush, Color, Gradient};

use crate::geometry::{ColorStop, TickEntry};
use crate::measure::Element;
use crate::spec::Orientation;
use crate::theme::{StrokeStyle, TextElement};

/// A string anchored at a point.
///
/// The anchor sits at `(hjust, vjust)` of the text's box, with `vjust = 0`
/// at the bottom of the box.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    /// The text; may contain `\n`.
    pub text: String,
    /// Anchor point in cell coordinates.
    pub anchor: Point,
    /// Font, colour, justification and rotation.
    pub element: TextElement,
}

/// Background of the whole guide.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundPayload {
    /// Fill, if any.
    pub fill: Option<Brush>,
    /// Outline, if any.
    pub stroke: Option<StrokeStyle>,
}

/// A linear gradient across the bar cell.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGradient {
    /// Where offset `0` lies.
    pub start: Point,
    /// Where offset `1` lies.
    pub end: Point,
    /// `(offset, colour)` pairs with offsets in `[0, 1]`, ascending.
    pub stops: Vec<(f32, Color)>,
}

impl BarGradient {
    /// The gradient as a paint brush.
    pub fn to_brush(&self) -> Brush {
        let gradient = Gradient::new_linear(self.start, self.end).with_stops(self.stops.as_slice());
        Brush::Gradient(gradient)
    }
}

/// One rectangle of a segmented bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSegment {
    /// Cell-relative rectangle.
    pub rect: Rect,
    /// Fill colour.
    pub color: Color,
}

/// The bar drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum BarPayload {
    /// One gradient filling the cell.
    Raster {
        /// The gradient.
        gradient: BarGradient,
        /// Bar size.
        size: Size,
    },
    /// Equal rectangles, one per bar stop.
    Segments(Vec<BarSegment>),
}

/// Break labels; absent when labels are hidden.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPayload(pub Element<Vec<PlacedText>>);

/// Guide title; absent when there is none.
#[derive(Clone, Debug, PartialEq)]
pub struct TitlePayload(pub Element<PlacedText>);

/// One tick mark: two short segments on the outer fifths of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Offset along the bar from its start.
    pub position: f64,
    /// Cell-relative segments.
    pub segments: [Line; 2],
}

/// Tick marks over the bar.
#[derive(Clone, Debug, PartialEq)]
pub struct TickPayload {
    /// Stroke for every mark.
    pub stroke: StrokeStyle,
    /// Marks, in key order, after limit trimming.
    pub marks: Vec<TickMark>,
}

/// Maps an offset along the bar to cell coordinates.
fn along(orientation: Orientation, bar: Size, offset: f64) -> f64 {
    match orientation {
        Orientation::Horizontal => offset,
        Orientation::Vertical => bar.height - offset,
    }
}

/// Builds the bar drawing from the stops.
pub fn bar_payload(
    stops: &[ColorStop],
    orientation: Orientation,
    bar: Size,
    raster: bool,
) -> BarPayload {
    let n = stops.len().max(1) as f64;
    if raster {
        let (start, end) = match orientation {
            Orientation::Horizontal => (
                Point::new(0.0, 0.5 * bar.height),
                Point::new(bar.width, 0.5 * bar.height),
            ),
            Orientation::Vertical => (
                Point::new(0.5 * bar.width, bar.height),
                Point::new(0.5 * bar.width, 0.0),
            ),
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "gradient offsets are stored as f32 in [0, 1]"
        )]
        let stops = stops
            .iter()
            .enumerate()
            .map(|(i, s)| (((i as f64 + 0.5) / n) as f32, s.color))
            .collect();
        return BarPayload::Raster {
            gradient: BarGradient { start, end, stops },
            size: bar,
        };
    }

    let segments = stops
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (a, b) = (i as f64 / n, (i + 1) as f64 / n);
            let rect = match orientation {
                Orientation::Horizontal => {
                    Rect::new(a * bar.width, 0.0, b * bar.width, bar.height)
                }
                Orientation::Vertical => Rect::new(
                    0.0,
                    bar.height - b * bar.height,
                    bar.width,
                    bar.height - a * bar.height,
                ),
            };
            BarSegment {
                rect,
                color: s.color,
            }
        })
        .collect();
    BarPayload::Segments(segments)
}

/// Places one label per tick entry at its (untrimmed) position.
///
/// `cell` is the size of the label cell.
pub fn label_payload(
    ticks: &[TickEntry],
    positions: &[f64],
    orientation: Orientation,
    bar: Size,
    cell: Size,
    element: Element<&TextElement>,
) -> LabelPayload {
    LabelPayload(element.map(|element| {
        ticks
            .iter()
            .zip(positions)
            .map(|(tick, pos)| {
                let anchor = match orientation {
                    Orientation::Horizontal => {
                        Point::new(*pos, (1.0 - element.vjust) * cell.height)
                    }
                    Orientation::Vertical => {
                        Point::new(element.hjust * cell.width, along(orientation, bar, *pos))
                    }
                };
                PlacedText {
                    text: tick.label.clone(),
                    anchor,
                    element: element.clone(),
                }
            })
            .collect()
    }))
}

/// Places the title inside its cell by its justification.
pub fn title_payload(title: Element<&str>, element: &TextElement, cell: Size) -> TitlePayload {
    TitlePayload(title.map(|text| PlacedText {
        text: String::from(text),
        anchor: Point::new(
            element.hjust * cell.width,
            (1.0 - element.vjust) * cell.height,
        ),
        element: element.clone(),
    }))
}

/// Builds tick marks at already trimmed positions.
pub fn tick_payload(
    positions: &[f64],
    orientation: Orientation,
    bar: Size,
    stroke: &StrokeStyle,
    show: bool,
) -> TickPayload {
    let marks = if show {
        positions
            .iter()
            .map(|pos| {
                let p = along(orientation, bar, *pos);
                let segments = match orientation {
                    Orientation::Horizontal => {
                        let h = bar.height;
                        [
                            Line::new((p, 0.0), (p, h / 5.0)),
                            Line::new((p, h * 4.0 / 5.0), (p, h)),
                        ]
                    }
                    Orientation::Vertical => {
                        let w = bar.width;
                        [
                            Line::new((0.0, p), (w / 5.0, p)),
                            Line::new((w * 4.0 / 5.0, p), (w, p)),
                        ]
                    }
                };
                TickMark {
                    position: *pos,
                    segments,
                }
            })
            .collect()
    } else {
        Vec::new()
    };
    TickPayload {
        stroke: stroke.clone(),
        marks,
    }
}
