// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Training and grob generation.
//!
//! A [`Colorbar`] is trained against a scale once per plot build, which
//! fixes the bar stops, tick entries and content hash. Each render then calls
//! [`TrainedColorbar::gengrob`] to size, lay out and place everything.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use colorbar_text::TextMeasurer;
use rustc_hash::FxHasher;

use crate::error::ColorbarError;
use crate::geometry::{ColorbarGeometry, derive_geometry};
use crate::grob::ColorbarGrob;
use crate::layout::resolve_layout;
use crate::measure::{Element, measure_elements};
use crate::payload::{BackgroundPayload, bar_payload, label_payload, tick_payload, title_payload};
use crate::scale::ColorScale;
use crate::spec::ColorbarSpec;
use crate::theme::LegendTheme;
use crate::tick::{tick_positions, trim_limit_ticks};

/// A colorbar guide before training.
#[derive(Clone, Debug, PartialEq)]
pub struct Colorbar {
    spec: ColorbarSpec,
}

impl Colorbar {
    /// Wraps a configuration.
    pub fn new(spec: ColorbarSpec) -> Self {
        Self { spec }
    }

    /// The configuration.
    pub fn spec(&self) -> &ColorbarSpec {
        &self.spec
    }

    /// Derives bar stops and tick entries from `scale`.
    ///
    /// Fails with [`ColorbarError::UnsupportedScaleKind`] for scales a
    /// colorbar cannot show, and with configuration errors before the scale
    /// is consulted.
    pub fn train<S: ColorScale + ?Sized>(
        &self,
        scale: &S,
    ) -> Result<TrainedColorbar, ColorbarError> {
        self.spec.validate()?;
        let breaks = scale.breaks();
        let mut geometry = derive_geometry(scale, &breaks, self.spec.bins)?;
        if self.spec.reverse {
            geometry = geometry.reversed();
        }
        let hash = content_hash(self.spec.title.as_deref(), &geometry, &self.spec.name);
        Ok(TrainedColorbar {
            spec: self.spec.clone(),
            geometry,
            hash,
        })
    }
}

/// A colorbar trained against a scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainedColorbar {
    spec: ColorbarSpec,
    geometry: ColorbarGeometry,
    hash: u64,
}

impl TrainedColorbar {
    /// The configuration.
    pub fn spec(&self) -> &ColorbarSpec {
        &self.spec
    }

    /// Bar stops and tick entries.
    pub fn geometry(&self) -> &ColorbarGeometry {
        &self.geometry
    }

    /// Content hash of title, labels, bar stops and guide name.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Sizes, lays out and places every part of the guide.
    pub fn gengrob(
        &self,
        theme: &LegendTheme,
        measurer: &dyn TextMeasurer,
    ) -> Result<ColorbarGrob, ColorbarError> {
        let config = self.spec.resolve(theme)?;
        let ticks = &self.geometry.ticks;
        let labels: Vec<String> = ticks.iter().map(|t| t.label.clone()).collect();

        let sizes = measure_elements(&config, &labels, measurer)?;
        let layout = resolve_layout(&config, &sizes)?.with_margin(config.margin);

        let positions = tick_positions(
            ticks,
            self.geometry.bar_domain(),
            config.bins,
            config.bar_length(),
        );
        let orientation = config.orientation;

        let label_element = if config.show_labels {
            Element::Present(&config.label_element)
        } else {
            Element::Absent
        };
        let label = label_payload(
            ticks,
            &positions,
            orientation,
            sizes.bar,
            layout.cell_rect(layout.label).size(),
            label_element,
        );
        let title = title_payload(
            Element::from_option(config.title.as_deref()),
            &config.title_element,
            layout.cell_rect(layout.title).size(),
        );
        let drawn = trim_limit_ticks(positions, config.draw_lower_limit, config.draw_upper_limit);
        let tick_marks = tick_payload(
            &drawn,
            orientation,
            sizes.bar,
            &config.tick_stroke,
            config.ticks,
        );

        Ok(ColorbarGrob {
            background: BackgroundPayload {
                fill: config.background_fill.clone(),
                stroke: config.background_stroke.clone(),
            },
            bar: bar_payload(&self.geometry.bar, orientation, sizes.bar, config.raster),
            label,
            title,
            ticks: tick_marks,
            hash: self.hash,
            layout,
        })
    }
}

/// Hashes what a rendered colorbar depends on besides the theme.
///
/// Stable across calls and processes for identical inputs.
pub fn content_hash(title: Option<&str>, geometry: &ColorbarGeometry, name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    title.hash(&mut hasher);
    geometry.ticks.len().hash(&mut hasher);
    for tick in &geometry.ticks {
        tick.label.hash(&mut hasher);
    }
    geometry.bar.len().hash(&mut hasher);
    for stop in &geometry.bar {
        stop.value.to_bits().hash(&mut hasher);
        for c in stop.color.components {
            c.to_bits().hash(&mut hasher);
        }
    }
    name.hash(&mut hasher);
    hasher.finish()
}

/// Trains several guides, dropping the ones a scale cannot drive.
///
/// Recoverable failures (see [`ColorbarError::is_recoverable`]) drop the
/// guide with a warning; any other failure aborts.
pub fn train_guides(
    entries: &[(&Colorbar, &dyn ColorScale)],
) -> Result<Vec<TrainedColorbar>, ColorbarError> {
    let mut out = Vec::with_capacity(entries.len());
    for (guide, scale) in entries {
        match guide.train(*scale) {
            Ok(trained) => out.push(trained),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(guide = %guide.spec.name, error = %err, "dropping colorbar guide");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(out)
}
