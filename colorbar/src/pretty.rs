// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Pretty" breakpoints and linear rescaling.
//!
//! The colorbar samples its gradient at human-friendly round numbers rather
//! than at evenly spaced raw values. [`pretty`] picks a unit among
//! `{1, 2, 5, 10} * 10^k` so that roughly `n` intervals cover the range, and
//! extends the ends outward to multiples of that unit.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Bias towards the larger unit when choosing between `1` and `2` (and `5` and `10`).
const HIGH_UNIT_BIAS: f64 = 1.5;
/// Bias towards the `5` unit, `0.5 + 1.5 * HIGH_UNIT_BIAS`.
const FIVE_UNIT_BIAS: f64 = 0.5 + 1.5 * HIGH_UNIT_BIAS;
/// Shrink factor applied to the cell when the range is (nearly) empty.
const SHRINK_SMALL: f64 = 0.75;
/// Tolerance used when snapping the ends to multiples of the unit.
const ROUNDING_EPS: f64 = 1e-10;

/// Returns about `n + 1` equally spaced round values covering `[lo, hi]`.
///
/// The first value is `<= lo` and the last `>= hi`. At least `n / 3`
/// intervals are produced. The result is never empty for finite input; an
/// empty vector is returned for non-finite bounds.
pub fn pretty(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let ndiv = n.max(1) as f64;
    let min_n = (n / 3) as f64;

    let dx = hi - lo;
    let (cell, small) = if dx == 0.0 && hi == 0.0 {
        (1.0, true)
    } else {
        let cell = lo.abs().max(hi.abs());
        let u = 1.0
            + if FIVE_UNIT_BIAS >= 1.5 * HIGH_UNIT_BIAS + 0.5 {
                1.0 / (1.0 + HIGH_UNIT_BIAS)
            } else {
                1.5 / (1.0 + FIVE_UNIT_BIAS)
            };
        let u = u * ndiv * f64::EPSILON;
        (cell, dx < cell * u * 3.0)
    };

    let mut cell = if small {
        let mut c = if cell > 10.0 { 9.0 + cell / 10.0 } else { cell };
        c *= SHRINK_SMALL;
        if min_n > 1.0 {
            c /= min_n;
        }
        c
    } else if ndiv > 1.0 {
        dx / ndiv
    } else {
        dx
    };
    if cell < 20.0 * f64::MIN_POSITIVE {
        cell = 20.0 * f64::MIN_POSITIVE;
    } else if cell * 10.0 > f64::MAX {
        cell = 0.1 * f64::MAX;
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 lies well within i32"
    )]
    let base = 10.0_f64.powi(cell.log10().floor() as i32);
    let mut unit = base;
    if 2.0 * base - cell < HIGH_UNIT_BIAS * (cell - unit) {
        unit = 2.0 * base;
        if 5.0 * base - cell < FIVE_UNIT_BIAS * (cell - unit) {
            unit = 5.0 * base;
            if 10.0 * base - cell < HIGH_UNIT_BIAS * (cell - unit) {
                unit = 10.0 * base;
            }
        }
    }

    let mut ns = (lo / unit + ROUNDING_EPS).floor();
    let mut nu = (hi / unit - ROUNDING_EPS).ceil();
    while ns * unit > lo + ROUNDING_EPS * unit {
        ns -= 1.0;
    }
    while nu * unit < hi - ROUNDING_EPS * unit {
        nu += 1.0;
    }

    let k = (0.5 + nu - ns).floor();
    if k < min_n {
        let missing = min_n - k;
        let half = (missing / 2.0).floor();
        let odd = missing - 2.0 * half;
        if ns >= 0.0 {
            nu += half;
            ns -= half + odd;
        } else {
            ns -= half;
            nu += half + odd;
        }
    }

    let intervals = (nu - ns).round().max(0.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "interval count is bounded by the requested division count"
    )]
    let intervals = intervals as usize;
    (0..=intervals).map(|i| (ns + i as f64) * unit).collect()
}

/// Linearly maps `x` from the `from` interval onto the `to` interval.
///
/// A zero-width `from` maps every value to the midpoint of `to`.
pub fn rescale(x: f64, to: (f64, f64), from: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 || !span.is_finite() {
        return 0.5 * (to.0 + to.1);
    }
    to.0 + (x - from.0) / span * (to.1 - to.0)
}
