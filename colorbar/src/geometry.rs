// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar stops and tick entries derived from a trained scale.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::error::{ColorbarError, UnsupportedReason};
use crate::pretty::pretty;
use crate::scale::ColorScale;

/// One sample of the bar gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Colour at `value`.
    pub color: Color,
    /// Data value.
    pub value: f64,
}

/// One user-visible break.
#[derive(Clone, Debug, PartialEq)]
pub struct TickEntry {
    /// Colour of the break value.
    pub color: Color,
    /// Formatted label.
    pub label: String,
    /// The break value.
    pub value: f64,
}

/// Everything the colorbar takes from its scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorbarGeometry {
    /// Bar samples, ordered by value (reversed when the guide is reversed).
    pub bar: Vec<ColorStop>,
    /// Tick entries in break order.
    pub ticks: Vec<TickEntry>,
}

impl ColorbarGeometry {
    /// Reverses the bar and the tick entries.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.bar.reverse();
        self.ticks.reverse();
        self
    }

    /// Values of the first and last bar stops.
    pub fn bar_domain(&self) -> (f64, f64) {
        match (self.bar.first(), self.bar.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => (0.0, 0.0),
        }
    }
}

/// Fails unless `scale` is continuous and maps a colour aesthetic.
pub fn check_scale<S: ColorScale + ?Sized>(scale: &S) -> Result<(), ColorbarError> {
    if !scale.is_continuous() {
        return Err(ColorbarError::UnsupportedScaleKind {
            reason: UnsupportedReason::Discrete,
        });
    }
    let aesthetics = scale.aesthetics();
    if !aesthetics.iter().any(|a| a.is_color()) {
        return Err(ColorbarError::UnsupportedScaleKind {
            reason: UnsupportedReason::NoColorAesthetic(aesthetics.iter().copied().collect()),
        });
    }
    Ok(())
}

/// Derives bar stops and tick entries.
///
/// The bar samples `pretty(limits, bins)`, keeping only candidates inside
/// the closed limits, and adds the limits themselves when no candidate hits
/// them. The bar therefore covers exactly the scale domain. Breaks that
/// are not finite or fall outside the limits are dropped before labelling.
pub fn derive_geometry<S: ColorScale + ?Sized>(
    scale: &S,
    breaks: &[f64],
    bins: usize,
) -> Result<ColorbarGeometry, ColorbarError> {
    check_scale(scale)?;
    if bins == 0 {
        return Err(ColorbarError::InvalidBinCount);
    }
    let (lo, hi) = scale.limits();
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(ColorbarError::InvalidLimits { min: lo, max: hi });
    }

    let eps = 1e-10 * (hi - lo).abs().max(lo.abs()).max(1.0);
    let inside = |v: f64| v.is_finite() && v >= lo - eps && v <= hi + eps;

    let kept: Vec<f64> = breaks.iter().copied().filter(|v| inside(*v)).collect();
    if kept.is_empty() {
        return Err(ColorbarError::NoBreaks);
    }
    let labels = scale.labels(&kept);
    let tick_colors = scale.map_all(&kept)?;
    let ticks = kept
        .iter()
        .zip(tick_colors)
        .enumerate()
        .map(|(i, (value, color))| TickEntry {
            color,
            label: labels.get(i).cloned().unwrap_or_default(),
            value: *value,
        })
        .collect();

    let mut values: Vec<f64> = pretty(lo, hi, bins)
        .into_iter()
        .filter(|v| inside(*v))
        .map(|v| v.clamp(lo, hi))
        .collect();
    if values.is_empty() {
        tracing::trace!(lo, hi, bins, "no pretty value inside limits; using the limits");
    }
    // The bar always spans the exact limits.
    if values.first().is_none_or(|v| *v > lo) {
        values.insert(0, lo);
    }
    if values.last().is_some_and(|v| *v < hi) {
        values.push(hi);
    }
    let bar_colors = scale.map_all(&values)?;
    let bar = values
        .into_iter()
        .zip(bar_colors)
        .map(|(value, color)| ColorStop { color, value })
        .collect();

    Ok(ColorbarGeometry { bar, ticks })
}
