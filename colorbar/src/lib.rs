// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous colour legends ("colorbars") for statistical graphics.
//!
//! A colorbar turns a continuous colour scale into a laid-out legend: a
//! gradient bar, tick marks, break labels and an optional title. This crate
//! does the part between the scale and the renderer:
//!
//! - **Training** ([`Colorbar::train`]) samples the scale into bar stops and
//!   tick entries and computes a content hash.
//! - **Sizing** measures every part in millimetres through a
//!   [`colorbar_text::TextMeasurer`].
//! - **Layout** arranges bar, labels and title on a small grid. All 16
//!   combinations of orientation, label position and title position come
//!   from a fixed template table ([`LayoutTemplate`]).
//! - **Placement** produces one drawable payload per grid cell, collected in
//!   a [`ColorbarGrob`] for a [`GrobAssembler`] to render.
//!
//! ```
//! use colorbar::{Colorbar, ColorbarSpec, ContinuousColorScale, LegendTheme};
//! use colorbar_text::HeuristicTextMeasurer;
//!
//! let scale = ContinuousColorScale::gradient((0.0, 20.0));
//! let trained = Colorbar::new(ColorbarSpec::new().with_title("value"))
//!     .train(&scale)
//!     .unwrap();
//! let grob = trained
//!     .gengrob(&LegendTheme::default(), &HeuristicTextMeasurer)
//!     .unwrap();
//! assert_eq!(grob.layout.ticks, grob.layout.bar);
//! ```
//!
//! Drawing is out of scope: payloads describe rectangles, lines, gradients
//! and anchored strings, and a backend decides how to paint them.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod grob;
mod guide;
mod layout;
mod measure;
mod payload;
mod pretty;
mod scale;
mod spec;
mod theme;
mod tick;
mod unit;

pub mod z_order;

pub use error::{ColorbarError, UnsupportedReason};
pub use format::{format_breaks, format_number};
pub use geometry::{ColorStop, ColorbarGeometry, TickEntry, check_scale, derive_geometry};
pub use grob::{ColorbarGrob, GrobAssembler};
pub use guide::{Colorbar, TrainedColorbar, content_hash, train_guides};
pub use layout::{
    Axis, BarLabelLayout, BarLabelTemplate, BlockTrack, ElementName, GridArea, LayoutTemplate,
    ResolvedLayout, TitleTemplate, Tracks, resolve_bar_label, resolve_layout, resolve_with_title,
};
pub use measure::{Element, ElementSizes, measure_elements, measure_text};
pub use payload::{
    BackgroundPayload, BarGradient, BarPayload, BarSegment, LabelPayload, PlacedText, TickMark,
    TickPayload, TitlePayload, bar_payload, label_payload, tick_payload, title_payload,
};
pub use pretty::{pretty, rescale};
pub use scale::{Aesthetic, BreakLabels, ColorScale, ContinuousColorScale, ScaleError};
pub use spec::{ColorbarSpec, EffectiveConfig, Orientation, Position};
pub use theme::{LegendTheme, StrokeStyle, TextElement};
pub use tick::{tick_positions, trim_limit_ticks};
pub use unit::{Length, MM_PER_INCH, Margin, PT_PER_INCH, Unit, UnitContext};
