// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The laid-out colorbar and the assembly seam.

use kurbo::Rect;

use crate::layout::{ElementName, ResolvedLayout};
use crate::payload::{BackgroundPayload, BarPayload, LabelPayload, TickPayload, TitlePayload};

/// A fully resolved colorbar: the grid plus one payload per named part.
///
/// Built fresh for every render; compare [`ColorbarGrob::hash`] across
/// renders to find out whether the content changed.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorbarGrob {
    /// Grid tracks and areas, including the legend margin.
    pub layout: ResolvedLayout,
    /// Background of the whole grid.
    pub background: BackgroundPayload,
    /// The bar.
    pub bar: BarPayload,
    /// Labels, placed in the label cell.
    pub label: LabelPayload,
    /// Title, placed in the title cell.
    pub title: TitlePayload,
    /// Tick marks, placed in the bar cell.
    pub ticks: TickPayload,
    /// Content hash of the trained guide.
    pub hash: u64,
}

impl ColorbarGrob {
    /// Absolute cell rectangle of every part, in paint order.
    pub fn placements(&self) -> [(ElementName, Rect); 5] {
        let mut out = self
            .layout
            .areas()
            .map(|(name, area)| (name, self.layout.cell_rect(area)));
        out.sort_by_key(|(name, _)| name.z_index());
        out
    }
}

/// Turns a [`ColorbarGrob`] into a drawable for some backend.
///
/// Implementations place each payload in its cell (see
/// [`ColorbarGrob::placements`]) and combine them into one output.
pub trait GrobAssembler {
    /// The composite drawable.
    type Output;
    /// Backend failure.
    type Error;

    /// Assembles `grob`.
    fn assemble(&mut self, grob: &ColorbarGrob) -> Result<Self::Output, Self::Error>;
}
