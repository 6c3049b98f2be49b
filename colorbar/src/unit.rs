// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical units.
//!
//! Colorbar layout happens in millimetres. Themes and guide options are
//! authored in a mix of units (points for text, "lines" for key sizes and
//! spacing), so everything passes through [`UnitContext::to_mm`] once, while
//! the effective configuration is resolved.

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Typographic points per inch (TeX points, as used by grid graphics).
pub const PT_PER_INCH: f64 = 72.27;

/// A length unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Inches.
    Inches,
    /// Points (1/72.27 inch).
    Points,
    /// Multiples of the current line height (`font_size * line_height` points).
    Lines,
}

/// A value tagged with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
}

impl Length {
    /// Creates a length.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A length in millimetres.
    pub const fn mm(value: f64) -> Self {
        Self::new(value, Unit::Mm)
    }

    /// A length in points.
    pub const fn pt(value: f64) -> Self {
        Self::new(value, Unit::Points)
    }

    /// A length in lines.
    pub const fn lines(value: f64) -> Self {
        Self::new(value, Unit::Lines)
    }

    /// A zero length.
    pub const ZERO: Self = Self::mm(0.0);

    /// Returns this length multiplied by `factor`, keeping the unit.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit)
    }
}

/// Font context used to resolve [`Unit::Lines`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitContext {
    /// Base font size in points.
    pub font_size: f64,
    /// Line height multiplier.
    pub line_height: f64,
}

impl Default for UnitContext {
    fn default() -> Self {
        // grid graphics defaults: 12pt text, 1.2 line height.
        Self {
            font_size: 12.0,
            line_height: 1.2,
        }
    }
}

impl UnitContext {
    /// Converts `length` to millimetres.
    pub fn to_mm(&self, length: Length) -> f64 {
        let v = length.value;
        match length.unit {
            Unit::Mm => v,
            Unit::Cm => v * 10.0,
            Unit::Inches => v * MM_PER_INCH,
            Unit::Points => v * MM_PER_INCH / PT_PER_INCH,
            Unit::Lines => v * self.font_size * self.line_height * MM_PER_INCH / PT_PER_INCH,
        }
    }

    /// Converts a point value (as returned by text measurement) to millimetres.
    pub fn pt_to_mm(&self, points: f64) -> f64 {
        self.to_mm(Length::pt(points))
    }
}

/// Per-side lengths, in CSS order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin<T = Length> {
    /// Top side.
    pub top: T,
    /// Right side.
    pub right: T,
    /// Bottom side.
    pub bottom: T,
    /// Left side.
    pub left: T,
}

impl<T: Copy> Margin<T> {
    /// The same value on every side.
    pub const fn uniform(v: T) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

impl Margin<Length> {
    /// Resolves every side to millimetres.
    pub fn to_mm(&self, cx: &UnitContext) -> Margin<f64> {
        Margin {
            top: cx.to_mm(self.top),
            right: cx.to_mm(self.right),
            bottom: cx.to_mm(self.bottom),
            left: cx.to_mm(self.left),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn absolute_units_convert_to_mm() {
        let cx = UnitContext::default();
        assert!(close(cx.to_mm(Length::mm(3.0)), 3.0));
        assert!(close(cx.to_mm(Length::new(1.5, Unit::Cm)), 15.0));
        assert!(close(cx.to_mm(Length::new(1.0, Unit::Inches)), 25.4));
        assert!(close(cx.to_mm(Length::pt(72.27)), 25.4));
    }

    #[test]
    fn lines_follow_the_font_context() {
        let cx = UnitContext::default();
        // 1 line = 12pt * 1.2 = 14.4pt
        assert!(close(cx.to_mm(Length::lines(1.0)), cx.pt_to_mm(14.4)));

        let big = UnitContext {
            font_size: 24.0,
            ..cx
        };
        assert!(close(
            big.to_mm(Length::lines(1.0)),
            2.0 * cx.to_mm(Length::lines(1.0))
        ));
    }

    #[test]
    fn margin_resolves_each_side() {
        let cx = UnitContext::default();
        let m = Margin {
            top: Length::mm(1.0),
            right: Length::mm(2.0),
            bottom: Length::ZERO,
            left: Length::new(1.0, Unit::Cm),
        }
        .to_mm(&cx);
        assert_eq!(
            m,
            Margin {
                top: 1.0,
                right: 2.0,
                bottom: 0.0,
                left: 10.0
            }
        );
    }
}
