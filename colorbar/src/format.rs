// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Break label formatting.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on decimals; beyond this `f64` noise dominates.
const MAX_DECIMALS: usize = 12;

/// Formats break values with a shared number of decimals.
///
/// The decimal count is the smallest one that represents every finite value
/// exactly (up to float noise), so `[0, 2.5, 5]` becomes `["0.0", "2.5", "5.0"]`
/// and `[0, 5, 10]` becomes `["0", "5", "10"]`.
pub fn format_breaks(values: &[f64]) -> Vec<String> {
    let decimals = shared_decimals(values);
    values.iter().map(|v| format_number(*v, decimals)).collect()
}

/// Formats `value` with exactly `decimals` digits after the point.
///
/// Negative zero prints as `0`. Non-finite values print as `NA`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::from("NA");
    }
    let scale = 10.0_f64.powi(i32::try_from(decimals).unwrap_or(0));
    let value = if (value * scale).round() == 0.0 {
        0.0
    } else {
        value
    };
    alloc::format!("{value:.decimals$}")
}

fn shared_decimals(values: &[f64]) -> usize {
    (0..=MAX_DECIMALS)
        .find(|&d| {
            let scale = 10.0_f64.powi(i32::try_from(d).unwrap_or(0));
            values.iter().filter(|v| v.is_finite()).all(|v| {
                let scaled = v * scale;
                (scaled - scaled.round()).abs() <= 1e-6 * scaled.abs().max(1.0)
            })
        })
        .unwrap_or(MAX_DECIMALS)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn integers_have_no_decimals() {
        assert_eq!(
            format_breaks(&[0.0, 5.0, 10.0, 15.0, 20.0]),
            vec!["0", "5", "10", "15", "20"]
        );
    }

    #[test]
    fn decimals_are_shared() {
        assert_eq!(format_breaks(&[0.0, 2.5, 5.0]), vec!["0.0", "2.5", "5.0"]);
    }

    #[test]
    fn float_noise_is_ignored() {
        assert_eq!(format_breaks(&[0.2 * 3.0, 1.2]), vec!["0.6", "1.2"]);
    }

    #[test]
    fn negative_zero_and_non_finite() {
        assert_eq!(format_number(-0.0, 1), "0.0");
        assert_eq!(format_number(-0.00001, 2), "0.00");
        assert_eq!(format_number(f64::NAN, 2), "NA");
        assert_eq!(format_number(-1.5, 1), "-1.5");
    }
}
