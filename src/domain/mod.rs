// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure selection geometry, no I/O and no rendering.

pub mod crop;
pub mod geometry;

pub use crop::{CropRegion, CropSelector, DragMode, SelectorSettings};
pub use geometry::{Bounds, Point, Rectangle};
