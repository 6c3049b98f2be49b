// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout for the colorbar.
//!
//! The guide is laid out on a small grid of rows and columns. Layout happens
//! in two steps, each driven by a structural template picked from a fixed
//! table:
//!
//! 1. **Bar and labels.** Bar, gap and label are stacked in rows (horizontal
//!    bar) or columns (vertical bar), in the order the label position asks
//!    for. The block is always three tracks long.
//! 2. **Title.** A title track and a gap track are added before or after the
//!    block. One padding track is added on the cross axis of the block so
//!    that the grid is never narrower (or shorter) than its title.
//!
//! Hidden labels and a missing title keep their tracks at size zero, so all
//! 16 combinations of orientation, label position and title position give
//! grids of a fixed shape. Grid areas are 1-based and inclusive.

extern crate alloc;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::error::ColorbarError;
use crate::measure::{Element, ElementSizes};
use crate::spec::{EffectiveConfig, Orientation, Position};
use crate::unit::Margin;
use crate::z_order;

/// Track sizes along one grid axis, in millimetres.
pub type Tracks = SmallVec<[f64; 8]>;

/// A rectangle of grid cells. Indices are 1-based and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridArea {
    /// First row.
    pub top: usize,
    /// First column.
    pub left: usize,
    /// Last row.
    pub bottom: usize,
    /// Last column.
    pub right: usize,
}

impl GridArea {
    /// A single cell.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self::span(row, col, row, col)
    }

    /// Rows `top..=bottom`, columns `left..=right`.
    pub const fn span(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Moves the area down by `rows` and right by `cols`.
    #[must_use]
    pub const fn shifted(self, rows: usize, cols: usize) -> Self {
        Self::span(
            self.top + rows,
            self.left + cols,
            self.bottom + rows,
            self.right + cols,
        )
    }

    /// Whether the two areas share at least one cell.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.top <= other.bottom
            && other.top <= self.bottom
            && self.left <= other.right
            && other.left <= self.right
    }

    /// Whether the area is well formed and fits a `rows` by `cols` grid.
    pub fn is_within(&self, rows: usize, cols: usize) -> bool {
        self.top >= 1
            && self.left >= 1
            && self.top <= self.bottom
            && self.left <= self.right
            && self.bottom <= rows
            && self.right <= cols
    }
}

/// The named parts placed on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementName {
    /// Spans the whole grid.
    Background,
    /// The colour bar.
    Bar,
    /// The label block.
    Label,
    /// The title.
    Title,
    /// Tick marks, drawn over the bar.
    Ticks,
}

impl ElementName {
    /// All names, in paint order.
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::Bar,
        Self::Ticks,
        Self::Label,
        Self::Title,
    ];

    /// Paint order; see [`crate::z_order`].
    pub const fn z_index(self) -> i32 {
        match self {
            Self::Background => z_order::BACKGROUND,
            Self::Bar => z_order::BAR,
            Self::Ticks => z_order::TICKS,
            Self::Label => z_order::LABELS,
            Self::Title => z_order::TITLE,
        }
    }
}

/// The grid axis a block is stacked along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Stacked top to bottom.
    Rows,
    /// Stacked left to right.
    Columns,
}

/// One track of the bar and label block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockTrack {
    /// The bar.
    Bar,
    /// Spacing between bar and labels.
    Gap,
    /// The labels.
    Label,
}

/// Structure of the bar and label block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarLabelTemplate {
    /// Axis the three tracks run along.
    pub axis: Axis,
    /// Tracks in grid order.
    pub tracks: [BlockTrack; 3],
}

impl BarLabelTemplate {
    fn index_of(&self, track: BlockTrack) -> usize {
        self.tracks.iter().position(|t| *t == track).unwrap_or(0) + 1
    }
}

/// Where the title goes relative to the bar and label block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TitleTemplate {
    /// Axis the title and gap tracks are added along.
    pub axis: Axis,
    /// `true` when title and gap come before the block.
    pub leading: bool,
}

const BAR_LABEL_TEMPLATES: [(Orientation, Position, BarLabelTemplate); 4] = {
    use BlockTrack::{Bar, Gap, Label};
    [
        (
            Orientation::Horizontal,
            Position::Top,
            BarLabelTemplate {
                axis: Axis::Rows,
                tracks: [Label, Gap, Bar],
            },
        ),
        (
            Orientation::Horizontal,
            Position::Bottom,
            BarLabelTemplate {
                axis: Axis::Rows,
                tracks: [Bar, Gap, Label],
            },
        ),
        (
            Orientation::Vertical,
            Position::Left,
            BarLabelTemplate {
                axis: Axis::Columns,
                tracks: [Label, Gap, Bar],
            },
        ),
        (
            Orientation::Vertical,
            Position::Right,
            BarLabelTemplate {
                axis: Axis::Columns,
                tracks: [Bar, Gap, Label],
            },
        ),
    ]
};

impl TitleTemplate {
    /// The placement for a title on `position`.
    pub const fn for_position(position: Position) -> Self {
        let (axis, leading) = match position {
            Position::Top => (Axis::Rows, true),
            Position::Bottom => (Axis::Rows, false),
            Position::Left => (Axis::Columns, true),
            Position::Right => (Axis::Columns, false),
        };
        Self { axis, leading }
    }
}

/// The structural template for one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutTemplate {
    /// Bar direction.
    pub orientation: Orientation,
    /// Label side.
    pub label_position: Position,
    /// Title side.
    pub title_position: Position,
    /// Bar and label block structure.
    pub bar_label: BarLabelTemplate,
    /// Title placement.
    pub title: TitleTemplate,
}

impl LayoutTemplate {
    /// Looks up the template, failing on a label position the orientation does not allow.
    pub fn lookup(
        orientation: Orientation,
        label_position: Position,
        title_position: Position,
    ) -> Result<Self, ColorbarError> {
        let bar_label = bar_label_template(orientation, label_position)?;
        Ok(Self {
            orientation,
            label_position,
            title_position,
            bar_label,
            title: TitleTemplate::for_position(title_position),
        })
    }

    /// Every valid template: 2 orientations, 2 label positions each, 4 title positions.
    pub fn all() -> impl Iterator<Item = Self> {
        BAR_LABEL_TEMPLATES
            .into_iter()
            .flat_map(|(orientation, label_position, bar_label)| {
                Position::ALL.into_iter().map(move |title_position| Self {
                    orientation,
                    label_position,
                    title_position,
                    bar_label,
                    title: TitleTemplate::for_position(title_position),
                })
            })
    }
}

fn bar_label_template(
    orientation: Orientation,
    label_position: Position,
) -> Result<BarLabelTemplate, ColorbarError> {
    BAR_LABEL_TEMPLATES
        .iter()
        .find(|(o, p, _)| *o == orientation && *p == label_position)
        .map(|(_, _, t)| *t)
        .ok_or(ColorbarError::InvalidLabelPosition {
            position: label_position,
            orientation,
        })
}

/// The bar and label block on its own grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLabelLayout {
    /// Column widths.
    pub widths: Tracks,
    /// Row heights.
    pub heights: Tracks,
    /// Bar cell.
    pub bar: GridArea,
    /// Label cell.
    pub label: GridArea,
}

/// Arranges bar and labels with `gap` between them.
///
/// The gap is zero when the labels are absent; the label track is kept.
pub fn resolve_bar_label(
    orientation: Orientation,
    label_position: Position,
    bar: Size,
    label: Element<Size>,
    gap: f64,
) -> Result<BarLabelLayout, ColorbarError> {
    let template = bar_label_template(orientation, label_position)?;
    let gap = if label.is_present() { gap } else { 0.0 };
    let label = label.size();

    let extent = |track: BlockTrack, along: Axis| {
        let size = match track {
            BlockTrack::Bar => bar,
            BlockTrack::Label => label,
            BlockTrack::Gap => return gap,
        };
        match along {
            Axis::Rows => size.height,
            Axis::Columns => size.width,
        }
    };
    let stacked: Tracks = template
        .tracks
        .iter()
        .map(|t| extent(*t, template.axis))
        .collect();
    let bar_index = template.index_of(BlockTrack::Bar);
    let label_index = template.index_of(BlockTrack::Label);

    Ok(match template.axis {
        Axis::Rows => BarLabelLayout {
            widths: smallvec::smallvec![bar.width],
            heights: stacked,
            bar: GridArea::cell(bar_index, 1),
            label: GridArea::cell(label_index, 1),
        },
        Axis::Columns => BarLabelLayout {
            widths: stacked,
            heights: smallvec::smallvec![bar.height],
            bar: GridArea::cell(1, bar_index),
            label: GridArea::cell(1, label_index),
        },
    })
}

/// The final grid and the area of every named part.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLayout {
    /// Column widths in millimetres.
    pub widths: Tracks,
    /// Row heights in millimetres.
    pub heights: Tracks,
    /// Whole grid.
    pub background: GridArea,
    /// Bar cell.
    pub bar: GridArea,
    /// Label cell.
    pub label: GridArea,
    /// Title cells.
    pub title: GridArea,
    /// Same cell as the bar.
    pub ticks: GridArea,
}

/// Adds the title (and its gap) around a bar and label block.
///
/// The title spans the full cross axis of the grid. When the title is longer
/// than the block on that axis, a padding track makes up the difference.
pub fn resolve_with_title(
    title_position: Position,
    block: &BarLabelLayout,
    title: Element<Size>,
    gap: f64,
) -> ResolvedLayout {
    let gap = if title.is_present() { gap } else { 0.0 };
    let title = title.size();
    let template = TitleTemplate::for_position(title_position);

    let mut widths = block.widths.clone();
    let mut heights = block.heights.clone();
    let (mut bar, mut label) = (block.bar, block.label);

    let title_area = match template.axis {
        Axis::Rows => {
            let pad = (title.width - widths.iter().sum::<f64>()).max(0.0);
            widths.push(pad);
            if template.leading {
                heights.insert_many(0, [title.height, gap]);
                bar = bar.shifted(2, 0);
                label = label.shifted(2, 0);
                GridArea::span(1, 1, 1, widths.len())
            } else {
                heights.extend([gap, title.height]);
                GridArea::span(heights.len(), 1, heights.len(), widths.len())
            }
        }
        Axis::Columns => {
            let pad = (title.height - heights.iter().sum::<f64>()).max(0.0);
            heights.push(pad);
            if template.leading {
                widths.insert_many(0, [title.width, gap]);
                bar = bar.shifted(0, 2);
                label = label.shifted(0, 2);
                GridArea::span(1, 1, heights.len(), 1)
            } else {
                widths.extend([gap, title.width]);
                GridArea::span(1, widths.len(), heights.len(), widths.len())
            }
        }
    };

    ResolvedLayout {
        background: GridArea::span(1, 1, heights.len(), widths.len()),
        bar,
        label,
        title: title_area,
        ticks: bar,
        widths,
        heights,
    }
}

/// Runs both layout steps for `config`.
pub fn resolve_layout(
    config: &EffectiveConfig,
    sizes: &ElementSizes,
) -> Result<ResolvedLayout, ColorbarError> {
    let block = resolve_bar_label(
        config.orientation,
        config.label_position,
        sizes.bar,
        sizes.label,
        config.gap,
    )?;
    let layout = resolve_with_title(config.title_position, &block, sizes.title, config.gap);
    tracing::debug!(
        orientation = ?config.orientation,
        label_position = ?config.label_position,
        title_position = ?config.title_position,
        widths = ?layout.widths,
        heights = ?layout.heights,
        "resolved colorbar grid"
    );
    Ok(layout)
}

impl ResolvedLayout {
    /// The area of `name`.
    pub fn area(&self, name: ElementName) -> GridArea {
        match name {
            ElementName::Background => self.background,
            ElementName::Bar => self.bar,
            ElementName::Label => self.label,
            ElementName::Title => self.title,
            ElementName::Ticks => self.ticks,
        }
    }

    /// Every named area, in paint order.
    pub fn areas(&self) -> [(ElementName, GridArea); 5] {
        ElementName::ALL.map(|name| (name, self.area(name)))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.heights.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.widths.len()
    }

    /// Wraps the grid in one margin track on every side.
    ///
    /// Every area moves by one row and one column; the background grows to
    /// cover the margin too.
    #[must_use]
    pub fn with_margin(&self, margin: Margin<f64>) -> Self {
        let mut widths = Tracks::with_capacity(self.widths.len() + 2);
        widths.push(margin.left);
        widths.extend_from_slice(&self.widths);
        widths.push(margin.right);
        let mut heights = Tracks::with_capacity(self.heights.len() + 2);
        heights.push(margin.top);
        heights.extend_from_slice(&self.heights);
        heights.push(margin.bottom);
        Self {
            background: GridArea::span(1, 1, heights.len(), widths.len()),
            bar: self.bar.shifted(1, 1),
            label: self.label.shifted(1, 1),
            title: self.title.shifted(1, 1),
            ticks: self.ticks.shifted(1, 1),
            widths,
            heights,
        }
    }

    /// Absolute rectangle of `area` in millimetres, origin top-left, y down.
    pub fn cell_rect(&self, area: GridArea) -> Rect {
        let offset = |tracks: &[f64], first: usize| -> f64 {
            tracks.iter().take(first.saturating_sub(1)).sum()
        };
        let end = |tracks: &[f64], last: usize| -> f64 { tracks.iter().take(last).sum() };
        Rect::new(
            offset(&self.widths, area.left),
            offset(&self.heights, area.top),
            end(&self.widths, area.right),
            end(&self.heights, area.bottom),
        )
    }

    /// Total size of the grid.
    pub fn size(&self) -> Size {
        Size::new(self.widths.iter().sum(), self.heights.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    const BAR_H: Size = Size::new(50.0, 5.0);
    const BAR_V: Size = Size::new(5.0, 50.0);
    const LABEL: Size = Size::new(8.0, 3.0);
    const GAP: f64 = 1.0;

    fn bar_for(orientation: Orientation) -> Size {
        match orientation {
            Orientation::Horizontal => BAR_H,
            Orientation::Vertical => BAR_V,
        }
    }

    fn resolve(
        template: &LayoutTemplate,
        label: Element<Size>,
        title: Element<Size>,
    ) -> ResolvedLayout {
        let block = resolve_bar_label(
            template.orientation,
            template.label_position,
            bar_for(template.orientation),
            label,
            GAP,
        )
        .unwrap();
        resolve_with_title(template.title_position, &block, title, GAP)
    }

    #[test]
    fn there_are_sixteen_templates() {
        let all: Vec<_> = LayoutTemplate::all().collect();
        assert_eq!(all.len(), 16);
        for t in &all {
            assert_eq!(
                LayoutTemplate::lookup(t.orientation, t.label_position, t.title_position).unwrap(),
                *t
            );
        }
    }

    #[test]
    fn every_template_gives_a_coherent_grid() {
        let titles = [
            Element::Absent,
            Element::Present(Size::new(4.0, 2.0)),
            Element::Present(Size::new(120.0, 90.0)),
        ];
        let labels = [Element::Absent, Element::Present(LABEL)];
        for template in LayoutTemplate::all() {
            for title in titles {
                for label in labels {
                    let layout = resolve(&template, label, title);
                    let (rows, cols) = (layout.rows(), layout.cols());
                    for (name, area) in layout.areas() {
                        assert!(area.is_within(rows, cols), "{template:?} {name:?} {area:?}");
                    }
                    assert!(!layout.bar.overlaps(&layout.label), "{template:?}");
                    assert!(!layout.title.overlaps(&layout.bar), "{template:?}");
                    assert!(!layout.title.overlaps(&layout.label), "{template:?}");
                    assert_eq!(layout.background, GridArea::span(1, 1, rows, cols));
                    assert_eq!(layout.ticks, layout.bar);

                    let size = layout.size();
                    let title_size = title.size();
                    assert!(size.width >= title_size.width - 1e-9, "{template:?}");
                    assert!(size.height >= title_size.height - 1e-9, "{template:?}");
                }
            }
        }
    }

    #[test]
    fn grid_shape_does_not_depend_on_presence() {
        for template in LayoutTemplate::all() {
            let full = resolve(&template, Element::Present(LABEL), Element::Present(LABEL));
            let bare = resolve(&template, Element::Absent, Element::Absent);
            assert_eq!(full.rows(), bare.rows());
            assert_eq!(full.cols(), bare.cols());
            assert_eq!(full.areas(), bare.areas());
        }
    }

    #[test]
    fn horizontal_bottom_labels_without_title() {
        let block = resolve_bar_label(
            Orientation::Horizontal,
            Position::Bottom,
            BAR_H,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        assert_eq!(block.widths.len(), 1);
        assert_eq!(block.heights.as_slice(), &[5.0, GAP, 3.0]);
        assert!(block.label.top > block.bar.bottom);

        for position in Position::ALL {
            let layout = resolve_with_title(position, &block, Element::Absent, GAP);
            assert_eq!(layout.size().height, 5.0 + GAP + 3.0, "{position:?}");
            assert_eq!(layout.size().width, 50.0, "{position:?}");
        }
    }

    #[test]
    fn title_on_top_shifts_the_block_down() {
        let block = resolve_bar_label(
            Orientation::Vertical,
            Position::Right,
            BAR_V,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        assert_eq!(block.bar, GridArea::cell(1, 1));
        assert_eq!(block.label, GridArea::cell(1, 3));

        let title = Element::Present(Size::new(4.0, 2.0));
        let layout = resolve_with_title(Position::Top, &block, title, GAP);
        assert_eq!(layout.heights.as_slice(), &[2.0, GAP, 50.0]);
        assert_eq!(layout.bar, GridArea::cell(3, 1));
        assert_eq!(layout.label, GridArea::cell(3, 3));
        assert_eq!(layout.title, GridArea::span(1, 1, 1, 4));
        // block is 5 + 1 + 8 = 14 wide, title is narrower
        assert_eq!(layout.widths.as_slice(), &[5.0, GAP, 8.0, 0.0]);
    }

    #[test]
    fn wide_title_pads_the_block() {
        let block = resolve_bar_label(
            Orientation::Vertical,
            Position::Left,
            BAR_V,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        let layout = resolve_with_title(
            Position::Bottom,
            &block,
            Element::Present(Size::new(30.0, 2.0)),
            GAP,
        );
        assert_eq!(layout.widths.as_slice(), &[8.0, GAP, 5.0, 16.0]);
        assert_eq!(layout.size().width, 30.0);
        assert_eq!(layout.title, GridArea::span(3, 1, 3, 4));
        assert_eq!(layout.bar, GridArea::cell(1, 3));
    }

    #[test]
    fn tall_title_on_the_left_pads_rows() {
        let block = resolve_bar_label(
            Orientation::Horizontal,
            Position::Top,
            BAR_H,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        let layout = resolve_with_title(
            Position::Left,
            &block,
            Element::Present(Size::new(10.0, 20.0)),
            GAP,
        );
        assert_eq!(layout.widths.as_slice(), &[10.0, GAP, 50.0]);
        assert_eq!(layout.heights.as_slice(), &[3.0, GAP, 5.0, 11.0]);
        assert_eq!(layout.bar, GridArea::cell(3, 3));
        assert_eq!(layout.label, GridArea::cell(1, 3));
        assert_eq!(layout.title, GridArea::span(1, 1, 4, 1));
    }

    #[test]
    fn title_on_the_right_follows_the_block() {
        let block = resolve_bar_label(
            Orientation::Vertical,
            Position::Right,
            BAR_V,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        let layout = resolve_with_title(
            Position::Right,
            &block,
            Element::Present(Size::new(6.0, 2.0)),
            GAP,
        );
        assert_eq!(layout.bar, block.bar);
        assert_eq!(layout.title, GridArea::span(1, 5, 2, 5));
    }

    #[test]
    fn incompatible_label_position_fails_before_layout() {
        let err = resolve_bar_label(
            Orientation::Vertical,
            Position::Top,
            BAR_V,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ColorbarError::InvalidLabelPosition {
                position: Position::Top,
                orientation: Orientation::Vertical,
            }
        );
        assert!(
            LayoutTemplate::lookup(Orientation::Horizontal, Position::Right, Position::Top)
                .is_err()
        );
    }

    #[test]
    fn margin_wraps_every_area() {
        let block = resolve_bar_label(
            Orientation::Vertical,
            Position::Right,
            BAR_V,
            Element::Present(LABEL),
            GAP,
        )
        .unwrap();
        let title = Element::Present(Size::new(4.0, 2.0));
        let layout = resolve_with_title(Position::Top, &block, title, GAP);
        let framed = layout.with_margin(Margin::uniform(2.0));
        assert_eq!(framed.cols(), layout.cols() + 2);
        assert_eq!(framed.rows(), layout.rows() + 2);
        assert_eq!(framed.bar, layout.bar.shifted(1, 1));
        assert_eq!(
            framed.background,
            GridArea::span(1, 1, framed.rows(), framed.cols())
        );
        assert_eq!(framed.size().width, layout.size().width + 4.0);

        let bar = framed.cell_rect(framed.bar);
        assert_eq!(bar, Rect::new(2.0, 2.0 + 2.0 + GAP, 7.0, 2.0 + 2.0 + GAP + 50.0));
    }

    #[test]
    fn overlap_is_symmetric_and_cell_exact() {
        let a = GridArea::span(1, 1, 2, 2);
        assert!(a.overlaps(&GridArea::cell(2, 2)));
        assert!(GridArea::cell(2, 2).overlaps(&a));
        assert!(!a.overlaps(&GridArea::cell(3, 1)));
        assert!(!GridArea::cell(0, 1).is_within(3, 3));
    }

    #[test]
    fn paint_order_is_strictly_increasing() {
        let z: Vec<_> = ElementName::ALL.iter().map(|n| n.z_index()).collect();
        assert!(z.windows(2).all(|w| w[0] < w[1]), "{z:?}");
    }
}
