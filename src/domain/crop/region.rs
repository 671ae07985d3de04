// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Crop region domain model.

use crate::constant::MIN_REGION_PIXELS;
use crate::domain::geometry::Rectangle;

/// Crop region in pixel coordinates.
///
/// Built from a selection by rounding its corners to whole pixels, then
/// clipped to the image it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Snap a selection rectangle to whole pixels.
    ///
    /// Corners are rounded independently so adjacent selections share edges.
    /// Returns `None` if either side is below one pixel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rectangle(rect: &Rectangle) -> Option<Self> {
        let rect = rect.normalized();
        if rect.width() < MIN_REGION_PIXELS || rect.height() < MIN_REGION_PIXELS {
            return None;
        }

        let x0 = rect.x0.max(0.0).round() as u32;
        let y0 = rect.y0.max(0.0).round() as u32;
        let x1 = rect.x1.max(0.0).round() as u32;
        let y1 = rect.y1.max(0.0).round() as u32;

        let region = Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        region.is_valid().then_some(region)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Intersect with an image of the given size. `None` if nothing overlaps.
    pub fn clipped_to(&self, width: u32, height: u32) -> Option<Self> {
        let right = self.x.saturating_add(self.width).min(width);
        let bottom = self.y.saturating_add(self.height).min(height);
        if self.x >= right || self.y >= bottom {
            return None;
        }
        Some(Self::new(self.x, self.y, right - self.x, bottom - self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_corners_to_pixels() {
        let rect = Rectangle::new(10.4, 20.6, 110.5, 70.2);
        let region = CropRegion::from_rectangle(&rect).unwrap();
        assert_eq!(region.as_tuple(), (10, 21, 101, 49));
    }

    #[test]
    fn inverted_rectangle_is_normalized() {
        let rect = Rectangle::new(60.0, 60.0, 10.0, 10.0);
        assert_eq!(
            CropRegion::from_rectangle(&rect),
            Some(CropRegion::new(10, 10, 50, 50))
        );
    }

    #[test]
    fn sub_pixel_selection_is_rejected() {
        assert_eq!(
            CropRegion::from_rectangle(&Rectangle::new(5.0, 5.0, 5.5, 40.0)),
            None
        );
        assert_eq!(
            CropRegion::from_rectangle(&Rectangle::collapsed(Default::default())),
            None
        );
    }

    #[test]
    fn clipping_to_image() {
        let region = CropRegion::new(90, 40, 50, 50);
        assert_eq!(region.clipped_to(100, 60), Some(CropRegion::new(90, 40, 10, 20)));
        assert_eq!(CropRegion::new(100, 0, 5, 5).clipped_to(100, 60), None);
    }
}
