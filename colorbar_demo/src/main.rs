// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colorbar demos: every layout template plus a few variants, as one HTML page.
//!
//! Set `RUST_LOG=colorbar=debug` to see the resolved grids.

mod report;
mod svg;

use std::error::Error;

use colorbar::{
    Aesthetic, ColorScale, Colorbar, ColorbarSpec, ContinuousColorScale, GrobAssembler,
    LayoutTemplate, LegendTheme, StrokeStyle, TrainedColorbar, train_guides,
};
use colorbar_text::HeuristicTextMeasurer;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;

use crate::report::Section;
use crate::svg::SvgAssembler;

const OUTPUT: &str = "colorbar_demo.html";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = LegendTheme::default();
    let mut svg = SvgAssembler::new(4.0);
    let mut sections = Vec::new();

    let scale = ContinuousColorScale::gradient((0.0, 20.0));
    for template in LayoutTemplate::all() {
        let spec = ColorbarSpec::new()
            .with_title("value")
            .with_orientation(template.orientation)
            .with_label_position(template.label_position)
            .with_title_position(template.title_position);
        let trained = Colorbar::new(spec).train(&scale)?;
        let caption = format!(
            "{:?} / labels {:?} / title {:?}",
            template.orientation, template.label_position, template.title_position
        );
        sections.push(render(&mut svg, &theme, &trained, caption)?);
    }

    for (caption, guide, scale) in variants() {
        let trained = guide.train(&scale)?;
        sections.push(render(&mut svg, &theme, &trained, caption.to_string())?);
    }

    // The size scale cannot drive a colorbar; its guide is dropped with a warning.
    let colour = Colorbar::new(ColorbarSpec::new().with_title("colour"));
    let size = Colorbar::new(ColorbarSpec::new().with_title("size").with_name("size"));
    let colour_scale = ContinuousColorScale::gradient((-1.0, 1.0));
    let size_scale = ContinuousColorScale::gradient((0.0, 5.0)).with_aesthetics(&[Aesthetic::Size]);
    let entries: [(&Colorbar, &dyn ColorScale); 2] =
        [(&colour, &colour_scale), (&size, &size_scale)];
    for trained in train_guides(&entries)? {
        sections.push(render(
            &mut svg,
            &theme,
            &trained,
            format!("trained from a mixed batch: {}", trained.spec().name),
        )?);
    }

    let html = report::render_report("Colorbar demo", &sections);
    std::fs::write(OUTPUT, html)?;
    tracing::info!(sections = sections.len(), "wrote {OUTPUT}");
    println!("wrote {OUTPUT}");
    Ok(())
}

fn render(
    svg: &mut SvgAssembler,
    theme: &LegendTheme,
    trained: &TrainedColorbar,
    caption: String,
) -> Result<Section, Box<dyn Error>> {
    let grob = trained.gengrob(theme, &HeuristicTextMeasurer)?;
    let svg = svg.assemble(&grob)?;
    Ok(Section { caption, svg })
}

fn variants() -> Vec<(&'static str, Colorbar, ContinuousColorScale)> {
    let viridis = vec![
        css::INDIGO,
        css::TEAL,
        css::MEDIUM_SEA_GREEN,
        css::YELLOW,
    ];
    vec![
        (
            "reversed",
            Colorbar::new(ColorbarSpec::new().with_title("reversed").with_reverse(true)),
            ContinuousColorScale::gradient((0.0, 100.0)),
        ),
        (
            "five segments, no raster",
            Colorbar::new(
                ColorbarSpec::new()
                    .with_title("binned")
                    .with_raster(false)
                    .with_bins(5),
            ),
            ContinuousColorScale::gradient_n((0.0, 1.0), viridis.clone()),
        ),
        (
            "labels hidden",
            Colorbar::new(ColorbarSpec::new().with_title("no labels").with_labels(false)),
            ContinuousColorScale::gradient((0.0, 1.0)),
        ),
        (
            "limit ticks hidden, black ticks",
            Colorbar::new(
                ColorbarSpec::new()
                    .with_title("limits")
                    .with_limit_ticks(false, false)
                    .with_tick_stroke(StrokeStyle::solid(css::BLACK, 0.3)),
            ),
            ContinuousColorScale::gradient((0.0, 20.0)).with_breaks(vec![0.0, 10.0, 20.0]),
        ),
        (
            "long bar, two-line title",
            Colorbar::new(
                ColorbarSpec::new()
                    .with_title("temperature\n(deg C)")
                    .with_bar_height(10.0)
                    .with_bins(100),
            ),
            ContinuousColorScale::gradient_n((-30.0, 45.0), viridis),
        ),
    ]
}
