// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Default half-size of the square hit zone around each corner handle.
pub const HANDLE_TOLERANCE: f32 = 10.0;

/// Default minimum width/height a resize may leave the selection with.
pub const MIN_SELECTION_SIZE: f32 = 20.0;

/// Default fraction of the bounds covered by the initial centered selection.
pub const INITIAL_SELECTION_FRACTION: f32 = 0.5;

/// Smallest selection side (in pixels) that still counts as a selection.
pub const MIN_REGION_PIXELS: f32 = 1.0;

/// Selection sides must exceed this before the thirds grid is drawn.
pub const GRID_MIN_SIZE: f32 = 10.0;

/// Drawn size of a corner handle square, in surface units.
pub const HANDLE_DRAW_SIZE: f32 = 8.0;

/// Width of the selection border, in surface units.
pub const BORDER_WIDTH: f32 = 2.0;

/// Width of a thirds grid line, in surface units.
pub const GRID_WIDTH: f32 = 1.0;

/// Config directory name (under the platform config dir).
pub const CONFIG_DIR: &str = "cropframe";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";
