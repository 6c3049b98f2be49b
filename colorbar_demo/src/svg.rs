// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `colorbar_demo`.
//!
//! The SVG user space is millimetres; `px_per_mm` only sets the outer size.

use std::fmt::{self, Write as _};

use colorbar::{
    BarGradient, BarPayload, ColorbarGrob, Element, ElementName, GrobAssembler, LabelPayload,
    MM_PER_INCH, PT_PER_INCH, PlacedText, StrokeStyle, TitlePayload,
};
use kurbo::{Point, Rect};
use peniko::{Brush, Color};

/// Writes a [`ColorbarGrob`] as a standalone `<svg>` element.
#[derive(Debug)]
pub(crate) struct SvgAssembler {
    px_per_mm: f64,
    next_gradient: usize,
}

impl SvgAssembler {
    pub(crate) fn new(px_per_mm: f64) -> Self {
        Self {
            px_per_mm,
            next_gradient: 0,
        }
    }

    fn gradient_id(&mut self, hash: u64) -> String {
        let id = format!("cb-{hash:016x}-{}", self.next_gradient);
        self.next_gradient += 1;
        id
    }
}

impl GrobAssembler for SvgAssembler {
    type Output = String;
    type Error = fmt::Error;

    fn assemble(&mut self, grob: &ColorbarGrob) -> Result<String, fmt::Error> {
        let size = grob.layout.size();
        let mut out = String::new();
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            size.width,
            size.height,
            size.width * self.px_per_mm,
            size.height * self.px_per_mm,
        )?;
        out.push('\n');

        for (name, cell) in grob.placements() {
            let origin = cell.origin();
            match name {
                ElementName::Background => {
                    write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        cell.x0,
                        cell.y0,
                        cell.width(),
                        cell.height()
                    )?;
                    match &grob.background.fill {
                        Some(fill) => write_paint_attr(&mut out, "fill", fill)?,
                        None => out.push_str(r#" fill="none""#),
                    }
                    if let Some(stroke) = &grob.background.stroke {
                        write_stroke_attrs(&mut out, stroke)?;
                    }
                    out.push_str("/>\n");
                }
                ElementName::Bar => {
                    let id = self.gradient_id(grob.hash);
                    write_bar(&mut out, &grob.bar, origin, &id)?;
                }
                ElementName::Ticks => {
                    if grob.ticks.marks.is_empty() {
                        continue;
                    }
                    write!(out, r#"<g transform="translate({} {})""#, origin.x, origin.y)?;
                    write_stroke_attrs(&mut out, &grob.ticks.stroke)?;
                    out.push_str(">\n");
                    for mark in &grob.ticks.marks {
                        for line in mark.segments {
                            writeln!(
                                out,
                                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                                line.p0.x, line.p0.y, line.p1.x, line.p1.y
                            )?;
                        }
                    }
                    out.push_str("</g>\n");
                }
                ElementName::Label => {
                    if let LabelPayload(Element::Present(labels)) = &grob.label {
                        for label in labels {
                            write_text(&mut out, label, origin)?;
                        }
                    }
                }
                ElementName::Title => {
                    if let TitlePayload(Element::Present(title)) = &grob.title {
                        write_text(&mut out, title, origin)?;
                    }
                }
            }
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

fn write_bar(out: &mut String, bar: &BarPayload, origin: Point, id: &str) -> fmt::Result {
    match bar {
        BarPayload::Raster { gradient, size } => {
            write_gradient_def(out, gradient, origin, id)?;
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{id})"/>"#,
                origin.x, origin.y, size.width, size.height
            )
        }
        BarPayload::Segments(segments) => {
            for segment in segments {
                let r = segment.rect + origin.to_vec2();
                write_rect(out, r)?;
                write_paint_attr(out, "fill", &Brush::Solid(segment.color))?;
                out.push_str("/>\n");
            }
            Ok(())
        }
    }
}

fn write_gradient_def(
    out: &mut String,
    gradient: &BarGradient,
    origin: Point,
    id: &str,
) -> fmt::Result {
    let start = gradient.start + origin.to_vec2();
    let end = gradient.end + origin.to_vec2();
    writeln!(
        out,
        r#"<defs><linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        start.x, start.y, end.x, end.y
    )?;
    for (offset, color) in &gradient.stops {
        let (value, opacity) = svg_color(*color);
        write!(out, r#"<stop offset="{offset}" stop-color="{value}""#)?;
        if let Some(o) = opacity {
            write!(out, r#" stop-opacity="{o}""#)?;
        }
        out.push_str("/>\n");
    }
    out.push_str("</linearGradient></defs>\n");
    Ok(())
}

fn write_rect(out: &mut String, r: Rect) -> fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.x0,
        r.y0,
        r.width(),
        r.height()
    )
}

fn write_text(out: &mut String, text: &PlacedText, origin: Point) -> fmt::Result {
    let element = &text.element;
    let pos = text.anchor + origin.to_vec2();
    let font_size = element.style.font_size * MM_PER_INCH / PT_PER_INCH;
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{}" dominant-baseline="{}""#,
        pos.x,
        pos.y,
        font_size,
        element.style.font_family.as_css_family(),
        text_anchor(element.hjust),
        dominant_baseline(element.vjust),
    )?;
    if element.angle != 0.0 {
        // SVG rotates clockwise.
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            -element.angle, pos.x, pos.y
        )?;
    }
    write_paint_attr(out, "fill", &Brush::Solid(element.color))?;
    out.push('>');
    let mut lines = text.text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(&escape_xml(first));
    }
    for line in lines {
        write!(
            out,
            r#"<tspan x="{}" dy="{}em">{}</tspan>"#,
            pos.x,
            element.style.line_height,
            escape_xml(line)
        )?;
    }
    out.push_str("</text>\n");
    Ok(())
}

fn text_anchor(hjust: f64) -> &'static str {
    if hjust < 0.25 {
        "start"
    } else if hjust > 0.75 {
        "end"
    } else {
        "middle"
    }
}

fn dominant_baseline(vjust: f64) -> &'static str {
    if vjust < 0.25 {
        "text-after-edge"
    } else if vjust > 0.75 {
        "text-before-edge"
    } else {
        "central"
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) -> fmt::Result {
    write_paint_attr(out, "stroke", &stroke.brush)?;
    write!(out, r#" stroke-width="{}""#, stroke.stroke_width)
}

fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => svg_color(*color),
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) -> fmt::Result {
    let (value, opacity) = svg_paint(brush);
    write!(out, r#" {name}="{value}""#)?;
    if let Some(o) = opacity {
        write!(out, r#" {name}-opacity="{o}""#)?;
    }
    Ok(())
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use colorbar::{Colorbar, ColorbarSpec, ContinuousColorScale, LegendTheme};
    use colorbar_text::HeuristicTextMeasurer;

    use super::*;

    fn grob(spec: ColorbarSpec) -> ColorbarGrob {
        Colorbar::new(spec)
            .train(&ContinuousColorScale::gradient((0.0, 10.0)))
            .unwrap()
            .gengrob(&LegendTheme::default(), &HeuristicTextMeasurer)
            .unwrap()
    }

    #[test]
    fn raster_bar_gets_a_fresh_gradient_each_time() {
        let grob = grob(ColorbarSpec::new().with_title("a < b"));
        let mut svg = SvgAssembler::new(4.0);
        let first = svg.assemble(&grob).unwrap();
        let second = svg.assemble(&grob).unwrap();
        assert!(first.contains("<linearGradient"), "{first}");
        assert!(first.contains("a &lt; b"), "{first}");
        assert_ne!(first, second);
    }

    #[test]
    fn segmented_bar_has_no_gradient() {
        let grob = grob(ColorbarSpec::new().with_raster(false).with_bins(4));
        let out = SvgAssembler::new(4.0).assemble(&grob).unwrap();
        assert!(!out.contains("<linearGradient"), "{out}");
        assert!(out.matches("<rect").count() >= 5, "{out}");
    }

    #[test]
    fn justification_maps_to_anchors() {
        assert_eq!(text_anchor(0.0), "start");
        assert_eq!(text_anchor(0.5), "middle");
        assert_eq!(text_anchor(1.0), "end");
        assert_eq!(dominant_baseline(0.0), "text-after-edge");
        assert_eq!(dominant_baseline(1.0), "text-before-edge");
    }
}
