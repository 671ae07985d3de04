// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/preview.rs
//
// Raster renderer that paints the crop overlay onto a copy of the document.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{Blend, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::app::document::RasterDocument;
use crate::app::render::{OverlayLayout, Renderer};
use crate::domain::Rectangle;

const OVERLAY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);
const BORDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const HANDLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRID_COLOR: Rgba<u8> = Rgba([255, 255, 255, 204]);

pub struct PreviewRenderer {
    canvas: Blend<RgbaImage>,
}

impl PreviewRenderer {
    pub fn new(document: &RasterDocument) -> Self {
        Self {
            canvas: Blend(document.image().to_rgba8()),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas.0
    }

    fn fill(&mut self, area: &Rectangle, color: Rgba<u8>) {
        let (width, height) = self.canvas.0.dimensions();
        if let Some(rect) = pixel_rect(area, width, height) {
            draw_filled_rect_mut(&mut self.canvas, rect, color);
        }
    }
}

impl Renderer for PreviewRenderer {
    fn draw_overlay(&mut self, overlay: &OverlayLayout) {
        for area in &overlay.shade {
            self.fill(area, OVERLAY_COLOR);
        }
        for line in &overlay.grid {
            self.fill(line, GRID_COLOR);
        }
        for strip in &overlay.border {
            self.fill(strip, BORDER_COLOR);
        }
        for handle in &overlay.handles {
            self.fill(handle, HANDLE_COLOR);
        }
    }
}

// Covering pixel rectangle, clipped to the canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_rect(area: &Rectangle, width: u32, height: u32) -> Option<Rect> {
    let area = area.normalized();
    let x0 = area.x0.floor().max(0.0) as u32;
    let y0 = area.y0.floor().max(0.0) as u32;
    let x1 = (area.x1.ceil().max(0.0) as u32).min(width);
    let y1 = (area.y1.ceil().max(0.0) as u32).min(height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0, y1 - y0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render::render_selection;
    use crate::domain::CropSelector;
    use image::DynamicImage;

    fn gray_document() -> RasterDocument {
        let img = RgbaImage::from_pixel(40, 20, Rgba([200, 200, 200, 255]));
        RasterDocument::from_image(DynamicImage::ImageRgba8(img))
    }

    #[test]
    fn pixel_rect_clips_to_canvas() {
        let rect = pixel_rect(&Rectangle::new(-4.0, 2.5, 50.0, 7.2), 40, 20).unwrap();
        assert_eq!((rect.left(), rect.top(), rect.width(), rect.height()), (0, 2, 40, 6));
        assert!(pixel_rect(&Rectangle::new(41.0, 0.0, 45.0, 5.0), 40, 20).is_none());
    }

    #[test]
    fn overlay_darkens_outside_and_outlines_selection() {
        let document = gray_document();
        let mut selector = CropSelector::default();
        selector
            .initialize(40.0, 20.0, Rectangle::new(10.0, 5.0, 30.0, 15.0))
            .unwrap();

        let mut renderer = PreviewRenderer::new(&document);
        render_selection(&selector, &mut renderer, false).unwrap();
        let preview = renderer.into_image();

        let shaded = preview.get_pixel(0, 0);
        assert!(shaded[0] < 200, "outside pixel not darkened: {shaded:?}");
        assert_eq!(preview.get_pixel(20, 10), &Rgba([200, 200, 200, 255]));
        assert_eq!(preview.get_pixel(20, 5), &Rgba([255, 255, 255, 255]));
    }
}
