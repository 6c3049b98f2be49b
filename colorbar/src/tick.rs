// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick positions along the bar.

extern crate alloc;

use alloc::vec::Vec;

use crate::geometry::TickEntry;
use crate::pretty::rescale;

/// Maps each tick value to an offset along the bar, in the bar's length unit.
///
/// Values are placed by bin index: the bar's first and last stop values map
/// to the centres of the first and last of `bins` equal bins. Offsets grow
/// from the bar's start (left, or bottom when vertical).
pub fn tick_positions(
    ticks: &[TickEntry],
    bar_domain: (f64, f64),
    bins: usize,
    bar_length: f64,
) -> Vec<f64> {
    let bins = bins.max(1) as f64;
    let to = (0.5, bins - 0.5);
    ticks
        .iter()
        .map(|t| rescale(t.value, to, bar_domain) * bar_length / bins)
        .collect()
}

/// Drops the first and/or last position for suppressed limit ticks.
///
/// Positions are computed before trimming; the remaining ones do not move.
pub fn trim_limit_ticks(mut positions: Vec<f64>, draw_lower: bool, draw_upper: bool) -> Vec<f64> {
    if !draw_upper {
        positions.pop();
    }
    if !draw_lower && !positions.is_empty() {
        positions.remove(0);
    }
    positions
}
