// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Points, bounds and rectangles in surface-local coordinates.

use crate::error::{CropError, Result};

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// True if `other` lies in the square of half-size `tolerance` centered on `self`.
    pub fn is_near(self, other: Point, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// Fixed outer region a selection must stay within.
///
/// Both sides are strictly positive and finite; the only way to obtain a
/// value is through [`Bounds::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(CropError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bounds of a pixel image.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_pixels(width: u32, height: u32) -> Result<Self> {
        Self::new(width as f32, height as f32)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.max(0.0).min(self.width),
            point.y.max(0.0).min(self.height),
        )
    }
}

/// A crop rectangle stored as two corners.
///
/// The corners may be temporarily inverted while a new selection is being
/// drawn; [`Rectangle::normalized`] restores `x0 <= x1`, `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rectangle {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Zero-size rectangle anchored at `point`.
    pub fn collapsed(point: Point) -> Self {
        Self::from_corners(point, point)
    }

    /// Region covering `fraction` of each side, centered in `bounds`.
    pub fn centered(bounds: Bounds, fraction: f32) -> Self {
        let margin = (1.0 - fraction) / 2.0;
        Self::new(
            bounds.width() * margin,
            bounds.height() * margin,
            bounds.width() * (1.0 - margin),
            bounds.height() * (1.0 - margin),
        )
    }

    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width(), self.height())
    }

    /// Same rectangle with `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    /// Both corners clamped into `bounds`.
    pub fn clamped(&self, bounds: Bounds) -> Self {
        Self::from_corners(bounds.clamp(self.start()), bounds.clamp(self.end()))
    }

    /// Strict containment in the open rectangle `(x0, x1) x (y0, y1)`.
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x > self.x0 && point.x < self.x1 && point.y > self.y0 && point.y < self.y1
    }

    /// True if both corners lie inside `bounds`.
    pub fn is_within(&self, bounds: Bounds) -> bool {
        let inside = |p: Point| {
            (0.0..=bounds.width()).contains(&p.x) && (0.0..=bounds.height()).contains(&p.y)
        };
        inside(self.start()) && inside(self.end())
    }
}
