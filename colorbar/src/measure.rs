// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element sizing.
//!
//! Every part of the guide gets a size in millimetres before layout starts.
//! Hidden parts are [`Element::Absent`] and size to exactly zero, but they
//! still reach the layout resolvers so the grid shape never depends on which
//! parts are shown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use colorbar_text::TextMeasurer;
use kurbo::Size;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ColorbarError;
use crate::spec::EffectiveConfig;
use crate::theme::TextElement;
use crate::unit::UnitContext;

/// A guide part that may be hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element<T> {
    /// The part is drawn.
    Present(T),
    /// The part is hidden and occupies a zero-size slot.
    Absent,
}

impl<T> Element<T> {
    /// `Present(value)` when `value` is `Some`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }

    /// Whether the part is drawn.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the content.
    pub fn as_ref(&self) -> Element<&T> {
        match self {
            Self::Present(v) => Element::Present(v),
            Self::Absent => Element::Absent,
        }
    }

    /// Maps the content, keeping absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Element<U> {
        match self {
            Self::Present(v) => Element::Present(f(v)),
            Self::Absent => Element::Absent,
        }
    }

    /// Maps the content through a fallible function.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Element<U>, E> {
        match self {
            Self::Present(v) => f(v).map(Element::Present),
            Self::Absent => Ok(Element::Absent),
        }
    }

    /// The content, if present.
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }
}

impl Element<Size> {
    /// The size, or zero when absent.
    pub fn size(&self) -> Size {
        match self {
            Self::Present(s) => *s,
            Self::Absent => Size::ZERO,
        }
    }
}

/// Sizes of every guide part, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSizes {
    /// Bar size.
    pub bar: Size,
    /// Label block size.
    pub label: Element<Size>,
    /// Title block size.
    pub title: Element<Size>,
}

/// Measures the guide parts for `config`.
///
/// `labels` are the tick labels in key order. Measurement failures are
/// returned unchanged.
pub fn measure_elements(
    config: &EffectiveConfig,
    labels: &[String],
    measurer: &dyn TextMeasurer,
) -> Result<ElementSizes, ColorbarError> {
    let bar = Size::new(config.bar_width, config.bar_height);

    let label_texts: Element<&[String]> = if config.show_labels {
        Element::Present(labels)
    } else {
        Element::Absent
    };
    let label = label_texts.try_map(|texts| {
        measure_label_block(texts, &config.label_element, &config.units, measurer)
    })?;

    let title = Element::from_option(config.title.as_deref())
        .try_map(|text| measure_text(text, &config.title_element, &config.units, measurer))?;

    Ok(ElementSizes { bar, label, title })
}

/// Measures one (possibly multi-line) text in millimetres, after rotation.
pub fn measure_text(
    text: &str,
    element: &TextElement,
    units: &UnitContext,
    measurer: &dyn TextMeasurer,
) -> Result<Size, ColorbarError> {
    let block = measurer.measure_block(text, &element.style)?;
    let (w, h) = rotated_extent(block.width, block.height, element.angle);
    Ok(Size::new(units.pt_to_mm(w), units.pt_to_mm(h)))
}

/// The label block is as wide as the widest label and as tall as the tallest.
fn measure_label_block(
    labels: &[String],
    element: &TextElement,
    units: &UnitContext,
    measurer: &dyn TextMeasurer,
) -> Result<Size, ColorbarError> {
    let sizes = labels
        .iter()
        .map(|l| measure_text(l, element, units, measurer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sizes.iter().fold(Size::ZERO, |acc, s| {
        Size::new(acc.width.max(s.width), acc.height.max(s.height))
    }))
}

/// Axis-aligned extent of a `w` by `h` box rotated by `angle` degrees.
fn rotated_extent(w: f64, h: f64, angle: f64) -> (f64, f64) {
    if angle == 0.0 {
        return (w, h);
    }
    let rad = angle.to_radians();
    let (s, c) = (rad.sin().abs(), rad.cos().abs());
    (w * c + h * s, w * s + h * c)
}
