// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while training and laying out a colorbar.

use colorbar_text::MeasureError;

use crate::scale::{Aesthetic, ScaleError};
use crate::spec::{Orientation, Position};

/// Errors returned by colorbar training, configuration and layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ColorbarError {
    /// The scale cannot drive a colorbar: it is discrete, or maps no colour aesthetic.
    ///
    /// Recoverable at the guide-collection level (the guide is dropped).
    #[error("colorbar guide needs a continuous colour or fill scale ({reason})")]
    UnsupportedScaleKind {
        /// What was wrong with the scale.
        reason: UnsupportedReason,
    },
    /// The scale produced no finite break inside its limits.
    ///
    /// Recoverable at the guide-collection level (the guide is dropped).
    #[error("colorbar scale has no finite breaks inside its limits")]
    NoBreaks,
    /// The scale limits are not finite, or are reversed.
    #[error("invalid scale limits ({min}, {max})")]
    InvalidLimits {
        /// Lower limit as reported by the scale.
        min: f64,
        /// Upper limit as reported by the scale.
        max: f64,
    },
    /// The configured label position does not fit the orientation.
    #[error("label position `{position:?}` is invalid for a {orientation:?} colorbar")]
    InvalidLabelPosition {
        /// The configured label position.
        position: Position,
        /// The guide orientation.
        orientation: Orientation,
    },
    /// The configured bin count is zero.
    #[error("colorbar bin count must be at least 1")]
    InvalidBinCount,
    /// The scale collaborator failed to map a value.
    #[error(transparent)]
    Scale(#[from] ScaleError),
    /// The text measurement collaborator failed.
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

impl ColorbarError {
    /// Returns `true` for errors after which the rest of a plot can still render
    /// with this guide omitted.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsupportedScaleKind { .. } | Self::NoBreaks)
    }
}

/// Why a scale was rejected by [`ColorbarError::UnsupportedScaleKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The scale is discrete.
    Discrete,
    /// None of the scale's aesthetics is a colour aesthetic.
    NoColorAesthetic(smallvec::SmallVec<[Aesthetic; 2]>),
}

impl core::fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Discrete => f.write_str("scale is discrete"),
            Self::NoColorAesthetic(found) => write!(f, "scale maps {found:?}"),
        }
    }
}
