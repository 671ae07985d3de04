// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Interactive crop selection engine.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod error;

pub use domain::{Bounds, CropRegion, CropSelector, DragMode, Point, Rectangle, SelectorSettings};
pub use error::{CropError, Result};
