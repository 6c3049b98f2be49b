// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of the colorbar parts.
//!
//! Assemblers should paint in ascending z-index. Parts never share a value,
//! so the order is total.

/// Legend background.
pub const BACKGROUND: i32 = 0;
/// The colour bar.
pub const BAR: i32 = 10;
/// Tick marks over the bar.
pub const TICKS: i32 = 20;
/// Break labels.
pub const LABELS: i32 = 30;
/// Guide title.
pub const TITLE: i32 = 40;
