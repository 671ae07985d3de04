// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop selection module: selection state machine and pixel regions.

mod region;
mod selector;

pub use region::CropRegion;
pub use selector::{CropSelector, DragMode, SelectorSettings};
