// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The colour scale seam consumed by the colorbar.
//!
//! A plotting grammar owns its scales; the colorbar only needs to ask one for
//! its aesthetics, limits, breaks, labels and the colour of a value. That is
//! the [`ColorScale`] trait. [`ContinuousColorScale`] is a small gradient
//! implementation used by the demo and the tests.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;
use smallvec::SmallVec;

use crate::format::format_breaks;

/// An aesthetic a scale can be trained for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aesthetic {
    /// Stroke colour.
    Colour,
    /// Fill colour.
    Fill,
    /// Opacity.
    Alpha,
    /// Point or line size.
    Size,
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
}

impl Aesthetic {
    /// Whether a colorbar can represent this aesthetic.
    pub fn is_color(self) -> bool {
        matches!(self, Self::Colour | Self::Fill)
    }
}

/// Errors a scale can report while mapping values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// The scale has no colour for this value.
    #[error("scale cannot map value {0}")]
    Unmappable(f64),
    /// The scale palette is empty.
    #[error("scale palette is empty")]
    EmptyPalette,
}

/// The scale collaborator interface.
pub trait ColorScale {
    /// Aesthetics this scale was trained for.
    fn aesthetics(&self) -> &[Aesthetic];

    /// Whether the scale maps a continuous numeric domain.
    fn is_continuous(&self) -> bool;

    /// The `(min, max)` limits of the domain.
    fn limits(&self) -> (f64, f64);

    /// User-visible breaks, in display order.
    fn breaks(&self) -> Vec<f64>;

    /// Maps one data value to a colour.
    fn map(&self, value: f64) -> Result<Color, ScaleError>;

    /// Formats labels for `breaks`, one per break.
    fn labels(&self, breaks: &[f64]) -> Vec<String>;

    /// Maps every value in `values`.
    fn map_all(&self, values: &[f64]) -> Result<Vec<Color>, ScaleError> {
        values.iter().map(|v| self.map(*v)).collect()
    }
}

/// How [`ContinuousColorScale`] labels its breaks.
#[derive(Clone, Default)]
pub enum BreakLabels {
    /// Numbers with a shared decimal count.
    #[default]
    Auto,
    /// Fixed labels, matched to breaks by position.
    Fixed(Vec<String>),
    /// A custom formatter.
    Formatter(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl core::fmt::Debug for BreakLabels {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Fixed(labels) => f.debug_tuple("Fixed").field(labels).finish(),
            Self::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

/// A continuous colour scale interpolating a palette over its limits.
#[derive(Clone, Debug)]
pub struct ContinuousColorScale {
    limits: (f64, f64),
    palette: Vec<Color>,
    na_value: Color,
    aesthetics: SmallVec<[Aesthetic; 2]>,
    breaks: Option<Vec<f64>>,
    break_count: usize,
    labels: BreakLabels,
}

impl ContinuousColorScale {
    /// Dark blue to light blue, the classic sequential default.
    pub const DEFAULT_LOW: Color = Color::from_rgb8(0x13, 0x2b, 0x43);
    /// See [`ContinuousColorScale::DEFAULT_LOW`].
    pub const DEFAULT_HIGH: Color = Color::from_rgb8(0x56, 0xb1, 0xf7);
    /// Colour for missing and out-of-limits values.
    pub const DEFAULT_NA: Color = Color::from_rgb8(0x7f, 0x7f, 0x7f);

    /// A two-colour gradient over `limits` with the default colours.
    pub fn gradient(limits: (f64, f64)) -> Self {
        Self::gradient_n(
            limits,
            alloc::vec![Self::DEFAULT_LOW, Self::DEFAULT_HIGH],
        )
    }

    /// A gradient through `palette`, whose colours are spaced evenly over `limits`.
    pub fn gradient_n(limits: (f64, f64), palette: Vec<Color>) -> Self {
        Self {
            limits,
            palette,
            na_value: Self::DEFAULT_NA,
            aesthetics: smallvec::smallvec![Aesthetic::Colour],
            breaks: None,
            break_count: 5,
            labels: BreakLabels::Auto,
        }
    }

    /// Sets the aesthetics this scale claims to map.
    pub fn with_aesthetics(mut self, aesthetics: &[Aesthetic]) -> Self {
        self.aesthetics = aesthetics.iter().copied().collect();
        self
    }

    /// Uses explicit breaks instead of computed ones.
    pub fn with_breaks(mut self, breaks: Vec<f64>) -> Self {
        self.breaks = Some(breaks);
        self
    }

    /// Sets the approximate number of computed breaks.
    pub fn with_break_count(mut self, count: usize) -> Self {
        self.break_count = count;
        self
    }

    /// Sets how breaks are labelled.
    pub fn with_labels(mut self, labels: BreakLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the colour used for missing values.
    pub fn with_na_value(mut self, color: Color) -> Self {
        self.na_value = color;
        self
    }
}

impl ColorScale for ContinuousColorScale {
    fn aesthetics(&self) -> &[Aesthetic] {
        &self.aesthetics
    }

    fn is_continuous(&self) -> bool {
        true
    }

    fn limits(&self) -> (f64, f64) {
        self.limits
    }

    fn breaks(&self) -> Vec<f64> {
        if let Some(breaks) = &self.breaks {
            return breaks.clone();
        }
        let (lo, hi) = self.limits;
        let eps = 1e-9 * (hi - lo).abs().max(1.0);
        nice_ticks(lo, hi, self.break_count)
            .into_iter()
            .filter(|v| *v >= lo - eps && *v <= hi + eps)
            .collect()
    }

    fn map(&self, value: f64) -> Result<Color, ScaleError> {
        let (lo, hi) = self.limits;
        if !value.is_finite() || value < lo || value > hi {
            return Ok(self.na_value);
        }
        let n = self.palette.len();
        let (first, last) = match (self.palette.first(), self.palette.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(ScaleError::EmptyPalette),
        };
        if n == 1 {
            return Ok(first);
        }
        let t = if hi == lo { 0.5 } else { (value - lo) / (hi - lo) };
        let pos = t * (n - 1) as f64;
        let i = pos.floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "pos lies in [0, n - 1] for in-limits values"
        )]
        let i = i as usize;
        if i + 1 >= n {
            return Ok(last);
        }
        Ok(lerp_color(self.palette[i], self.palette[i + 1], pos - i as f64))
    }

    fn labels(&self, breaks: &[f64]) -> Vec<String> {
        match &self.labels {
            BreakLabels::Auto => format_breaks(breaks),
            BreakLabels::Fixed(labels) => (0..breaks.len())
                .map(|i| labels.get(i).cloned().unwrap_or_default())
                .collect(),
            BreakLabels::Formatter(f) => breaks.iter().map(|v| f(*v)).collect(),
        }
    }
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "interpolation weight lies in [0, 1]"
    )]
    let t = t as f32;
    let mut out = [0.0_f32; 4];
    for (o, (x, y)) in out.iter_mut().zip(a.components.iter().zip(b.components)) {
        *o = x + (y - x) * t;
    }
    Color::new(out)
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).ceil() * step;
    let n_f = ((max - start) / step + 1e-9).floor();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f.min(10_000.0) as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 lies well within i32"
    )]
    let power = step.log10().floor() as i32;
    let base = 10_f64.powi(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn computed_breaks_stay_inside_limits() {
        let scale = ContinuousColorScale::gradient((0.0, 20.0));
        assert_eq!(scale.breaks(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);

        let scale = ContinuousColorScale::gradient((0.3, 9.7));
        let breaks = scale.breaks();
        assert_eq!(breaks, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn map_hits_palette_endpoints_and_midpoint() {
        let scale = ContinuousColorScale::gradient_n(
            (0.0, 10.0),
            vec![Color::from_rgb8(0, 0, 0), Color::from_rgb8(255, 255, 255)],
        );
        assert_eq!(scale.map(0.0).unwrap(), Color::from_rgb8(0, 0, 0));
        assert_eq!(scale.map(10.0).unwrap(), Color::from_rgb8(255, 255, 255));
        let mid = scale.map(5.0).unwrap();
        assert!((mid.components[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn out_of_limits_maps_to_na() {
        let scale = ContinuousColorScale::gradient((0.0, 1.0));
        assert_eq!(scale.map(2.0).unwrap(), ContinuousColorScale::DEFAULT_NA);
        assert_eq!(
            scale.map(f64::NAN).unwrap(),
            ContinuousColorScale::DEFAULT_NA
        );
    }

    #[test]
    fn empty_palette_is_an_error() {
        let scale = ContinuousColorScale::gradient_n((0.0, 1.0), Vec::new());
        assert_eq!(scale.map(0.5), Err(ScaleError::EmptyPalette));
    }

    #[test]
    fn labels_follow_the_configured_policy() {
        let breaks = [0.0, 0.5, 1.0];
        let scale = ContinuousColorScale::gradient((0.0, 1.0));
        assert_eq!(scale.labels(&breaks), vec!["0.0", "0.5", "1.0"]);

        let fixed = scale
            .clone()
            .with_labels(BreakLabels::Fixed(vec!["lo".into(), "mid".into()]));
        assert_eq!(fixed.labels(&breaks), vec!["lo", "mid", ""]);

        let pct = scale.with_labels(BreakLabels::Formatter(Arc::new(|v| {
            alloc::format!("{:.0}%", v * 100.0)
        })));
        assert_eq!(pct.labels(&breaks), vec!["0%", "50%", "100%"]);
    }

    #[test]
    fn only_colour_aesthetics_qualify() {
        assert!(Aesthetic::Colour.is_color());
        assert!(Aesthetic::Fill.is_color());
        assert!(!Aesthetic::Alpha.is_color());
        assert!(!Aesthetic::Size.is_color());
    }
}
