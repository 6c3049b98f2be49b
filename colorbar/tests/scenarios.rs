// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end colorbar scenarios and the full template table.

use colorbar::{
    BarPayload, Colorbar, ColorbarError, ColorbarSpec, ContinuousColorScale, Element, GridArea,
    LabelPayload, LayoutTemplate, LegendTheme, Orientation, Position, TitlePayload,
    resolve_bar_label, resolve_with_title,
};
use colorbar_text::HeuristicTextMeasurer;
use kurbo::Size;

use Orientation::{Horizontal, Vertical};
use Position::{Bottom, Left, Right, Top};

const fn cell(row: usize, col: usize) -> GridArea {
    GridArea::cell(row, col)
}

const fn span(top: usize, left: usize, bottom: usize, right: usize) -> GridArea {
    GridArea::span(top, left, bottom, right)
}

/// `(orientation, label, title) -> (rows, cols, bar, label, title)`.
const TABLE: [(Orientation, Position, Position, usize, usize, GridArea, GridArea, GridArea); 16] = [
    (Horizontal, Top, Top, 5, 2, cell(5, 1), cell(3, 1), span(1, 1, 1, 2)),
    (Horizontal, Top, Bottom, 5, 2, cell(3, 1), cell(1, 1), span(5, 1, 5, 2)),
    (Horizontal, Top, Left, 4, 3, cell(3, 3), cell(1, 3), span(1, 1, 4, 1)),
    (Horizontal, Top, Right, 4, 3, cell(3, 1), cell(1, 1), span(1, 3, 4, 3)),
    (Horizontal, Bottom, Top, 5, 2, cell(3, 1), cell(5, 1), span(1, 1, 1, 2)),
    (Horizontal, Bottom, Bottom, 5, 2, cell(1, 1), cell(3, 1), span(5, 1, 5, 2)),
    (Horizontal, Bottom, Left, 4, 3, cell(1, 3), cell(3, 3), span(1, 1, 4, 1)),
    (Horizontal, Bottom, Right, 4, 3, cell(1, 1), cell(3, 1), span(1, 3, 4, 3)),
    (Vertical, Left, Top, 3, 4, cell(3, 3), cell(3, 1), span(1, 1, 1, 4)),
    (Vertical, Left, Bottom, 3, 4, cell(1, 3), cell(1, 1), span(3, 1, 3, 4)),
    (Vertical, Left, Left, 2, 5, cell(1, 5), cell(1, 3), span(1, 1, 2, 1)),
    (Vertical, Left, Right, 2, 5, cell(1, 3), cell(1, 1), span(1, 5, 2, 5)),
    (Vertical, Right, Top, 3, 4, cell(3, 1), cell(3, 3), span(1, 1, 1, 4)),
    (Vertical, Right, Bottom, 3, 4, cell(1, 1), cell(1, 3), span(3, 1, 3, 4)),
    (Vertical, Right, Left, 2, 5, cell(1, 3), cell(1, 5), span(1, 1, 2, 1)),
    (Vertical, Right, Right, 2, 5, cell(1, 1), cell(1, 3), span(1, 5, 2, 5)),
];

#[test]
fn template_table_matches_resolved_grids() {
    assert_eq!(LayoutTemplate::all().count(), TABLE.len());
    for (orientation, label_pos, title_pos, rows, cols, bar, label, title) in TABLE {
        let bar_size = match orientation {
            Horizontal => Size::new(40.0, 4.0),
            Vertical => Size::new(4.0, 40.0),
        };
        let block = resolve_bar_label(
            orientation,
            label_pos,
            bar_size,
            Element::Present(Size::new(6.0, 3.0)),
            1.0,
        )
        .unwrap();
        let layout =
            resolve_with_title(title_pos, &block, Element::Present(Size::new(10.0, 3.0)), 1.0);
        let case = (orientation, label_pos, title_pos);
        assert_eq!((layout.rows(), layout.cols()), (rows, cols), "{case:?}");
        assert_eq!(layout.bar, bar, "{case:?}");
        assert_eq!(layout.label, label, "{case:?}");
        assert_eq!(layout.title, title, "{case:?}");
        assert_eq!(layout.ticks, bar, "{case:?}");
        assert_eq!(layout.background, span(1, 1, rows, cols), "{case:?}");
    }
}

#[test]
fn fine_bins_over_a_twenty_unit_domain() {
    let scale = ContinuousColorScale::gradient((0.0, 20.0))
        .with_breaks(vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    let trained = Colorbar::new(ColorbarSpec::new().with_bins(100))
        .train(&scale)
        .unwrap();
    let geometry = trained.geometry();
    let interior = geometry
        .bar
        .iter()
        .filter(|s| s.value != 0.0 && s.value != 20.0)
        .count();
    assert!(interior <= 100, "{interior} interior stops");
    let labels: Vec<_> = geometry.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0", "5", "10", "15", "20"]);
}

#[test]
fn horizontal_bottom_labels_and_no_title() {
    let scale = ContinuousColorScale::gradient((0.0, 1.0));
    let theme = LegendTheme::default();
    let spec = ColorbarSpec::new()
        .with_orientation(Horizontal)
        .with_label_position(Bottom)
        .with_title_position(Top);
    let grob = Colorbar::new(spec.clone())
        .train(&scale)
        .unwrap()
        .gengrob(&theme, &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(grob.title, TitlePayload(Element::Absent));

    // margin, title, gap, bar, gap, label, margin
    let heights = &grob.layout.heights;
    assert_eq!(heights.len(), 7);
    assert_eq!(heights[1], 0.0);
    assert_eq!(heights[2], 0.0);
    assert!(grob.layout.label.top > grob.layout.bar.bottom);
    assert_eq!(grob.layout.bar.left, grob.layout.label.left);

    let config = spec.resolve(&theme).unwrap();
    let margin = config.margin.top + config.margin.bottom;
    let block: f64 = heights[3..6].iter().sum();
    assert!((grob.layout.size().height - margin - block).abs() < 1e-9);
}

#[test]
fn vertical_with_top_labels_fails_before_layout() {
    let scale = ContinuousColorScale::gradient((0.0, 1.0));
    let spec = ColorbarSpec::new()
        .with_orientation(Vertical)
        .with_label_position(Top);
    assert_eq!(
        spec.resolve(&LegendTheme::default()).unwrap_err(),
        ColorbarError::InvalidLabelPosition {
            position: Top,
            orientation: Vertical,
        }
    );
    assert!(Colorbar::new(spec).train(&scale).is_err());
}

#[test]
fn single_bin_collapses_ticks_to_the_centre() {
    let scale = ContinuousColorScale::gradient((0.0, 10.0)).with_breaks(vec![0.0, 5.0, 10.0]);
    let theme = LegendTheme::default();
    let spec = ColorbarSpec::new().with_bins(1).with_raster(false);
    let grob = Colorbar::new(spec.clone())
        .train(&scale)
        .unwrap()
        .gengrob(&theme, &HeuristicTextMeasurer)
        .unwrap();
    let BarPayload::Segments(segments) = &grob.bar else {
        panic!("raster was disabled");
    };
    assert!(!segments.is_empty());
    let centre = spec.resolve(&theme).unwrap().bar_length() / 2.0;
    assert_eq!(grob.ticks.marks.len(), 3);
    for mark in &grob.ticks.marks {
        assert!((mark.position - centre).abs() < 1e-9);
    }
}

#[test]
fn hidden_labels_keep_their_slot() {
    let scale = ContinuousColorScale::gradient((0.0, 1.0));
    let theme = LegendTheme::default();
    let shown = Colorbar::new(ColorbarSpec::new())
        .train(&scale)
        .unwrap()
        .gengrob(&theme, &HeuristicTextMeasurer)
        .unwrap();
    let hidden = Colorbar::new(ColorbarSpec::new().with_labels(false))
        .train(&scale)
        .unwrap()
        .gengrob(&theme, &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(hidden.label, LabelPayload(Element::Absent));
    assert_eq!(hidden.layout.cols(), shown.layout.cols());
    assert_eq!(hidden.layout.label, shown.layout.label);
    assert_eq!(hidden.layout.cell_rect(hidden.layout.label).width(), 0.0);
}

#[test]
fn long_title_widens_the_guide() {
    let scale = ContinuousColorScale::gradient((0.0, 1.0));
    let theme = LegendTheme::default();
    let title = "a rather long colorbar title";
    let grob = Colorbar::new(ColorbarSpec::new().with_title(title))
        .train(&scale)
        .unwrap()
        .gengrob(&theme, &HeuristicTextMeasurer)
        .unwrap();
    let title_rect = grob.layout.cell_rect(grob.layout.title);
    let bar_rect = grob.layout.cell_rect(grob.layout.bar);
    assert!(title_rect.width() > bar_rect.width());
    // the padding column takes up the difference
    let pad = grob.layout.widths[grob.layout.cols() - 2];
    assert!(pad > 0.0);
}

#[test]
fn ticks_at_non_round_limits_stay_on_the_bar() {
    let scale = ContinuousColorScale::gradient((0.13, 9.87)).with_breaks(vec![0.13, 5.0, 9.87]);
    let theme = LegendTheme::default();
    for orientation in [Horizontal, Vertical] {
        let spec = ColorbarSpec::new().with_orientation(orientation);
        let trained = Colorbar::new(spec.clone()).train(&scale).unwrap();
        assert_eq!(trained.geometry().bar_domain(), (0.13, 9.87));

        let grob = trained.gengrob(&theme, &HeuristicTextMeasurer).unwrap();
        let length = spec.resolve(&theme).unwrap().bar_length();
        assert_eq!(grob.ticks.marks.len(), 3);
        for mark in &grob.ticks.marks {
            assert!(
                (0.0..=length).contains(&mark.position),
                "{orientation:?}: tick at {} outside [0, {length}]",
                mark.position
            );
        }

        let bar = grob.layout.cell_rect(grob.layout.bar).size();
        for mark in &grob.ticks.marks {
            for line in mark.segments {
                for p in [line.p0, line.p1] {
                    let eps = 1e-9;
                    assert!(p.x >= -eps && p.x <= bar.width + eps, "{orientation:?}: {p:?}");
                    assert!(p.y >= -eps && p.y <= bar.height + eps, "{orientation:?}: {p:?}");
                }
            }
        }
    }
}
