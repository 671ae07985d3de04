// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/render.rs
//
// Rendering and export capabilities, plus the overlay geometry (shade,
// border, handles, thirds grid) the renderer draws.

use crate::constant::{BORDER_WIDTH, GRID_MIN_SIZE, GRID_WIDTH, HANDLE_DRAW_SIZE};
use crate::domain::{Bounds, CropRegion, CropSelector, Point, Rectangle};
use crate::error::{CropError, Result};

/// Draws the crop overlay on top of the source surface.
pub trait Renderer {
    fn draw_overlay(&mut self, overlay: &OverlayLayout);
}

/// Extracts a pixel region from the source surface.
pub trait Exporter {
    type Output;

    fn export(&self, region: CropRegion) -> Result<Self::Output>;
}

/// Everything the renderer needs to draw, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub selection: Rectangle,
    /// Darkened areas outside the selection.
    pub shade: Vec<Rectangle>,
    /// Selection outline strips; empty for a degenerate selection.
    pub border: Vec<Rectangle>,
    /// Corner handle squares (top-left, top-right, bottom-left, bottom-right).
    pub handles: Vec<Rectangle>,
    /// Rule-of-thirds lines inside the selection.
    pub grid: Vec<Rectangle>,
}

impl OverlayLayout {
    pub fn new(bounds: Bounds, selection: Rectangle, show_grid: bool) -> Self {
        let sel = selection.normalized();
        let full = Rectangle::new(0.0, 0.0, bounds.width(), bounds.height());

        if sel.width() <= 0.0 || sel.height() <= 0.0 {
            return Self {
                selection: sel,
                shade: vec![full],
                border: Vec::new(),
                handles: Vec::new(),
                grid: Vec::new(),
            };
        }

        let shade = [
            Rectangle::new(0.0, 0.0, full.x1, sel.y0),
            Rectangle::new(0.0, sel.y1, full.x1, full.y1),
            Rectangle::new(0.0, sel.y0, sel.x0, sel.y1),
            Rectangle::new(sel.x1, sel.y0, full.x1, sel.y1),
        ]
        .into_iter()
        .filter(|r| r.width() > 0.0 && r.height() > 0.0)
        .collect();

        let bw = BORDER_WIDTH.min(sel.width()).min(sel.height());
        let border = vec![
            Rectangle::new(sel.x0, sel.y0, sel.x1, sel.y0 + bw),
            Rectangle::new(sel.x0, sel.y1 - bw, sel.x1, sel.y1),
            Rectangle::new(sel.x0, sel.y0, sel.x0 + bw, sel.y1),
            Rectangle::new(sel.x1 - bw, sel.y0, sel.x1, sel.y1),
        ];

        let half = HANDLE_DRAW_SIZE / 2.0;
        let handles = [
            sel.top_left(),
            sel.top_right(),
            sel.bottom_left(),
            sel.bottom_right(),
        ]
        .into_iter()
        .map(|c: Point| Rectangle::new(c.x - half, c.y - half, c.x + half, c.y + half))
        .collect();

        let mut grid = Vec::new();
        if show_grid && sel.width() > GRID_MIN_SIZE && sel.height() > GRID_MIN_SIZE {
            let step_x = sel.width() / 3.0;
            let step_y = sel.height() / 3.0;
            for i in 1..3 {
                let x = sel.x0 + step_x * i as f32;
                let y = sel.y0 + step_y * i as f32;
                grid.push(Rectangle::new(x, sel.y0, x + GRID_WIDTH, sel.y1));
                grid.push(Rectangle::new(sel.x0, y, sel.x1, y + GRID_WIDTH));
            }
        }

        Self {
            selection: sel,
            shade,
            border,
            handles,
            grid,
        }
    }

    /// Layout for the selector's current state, `None` before initialization.
    pub fn from_selector(selector: &CropSelector, show_grid: bool) -> Option<Self> {
        let bounds = selector.bounds()?;
        let selection = selector.current_rectangle()?;
        Some(Self::new(bounds, selection, show_grid))
    }
}

/// Redraw the overlay for the current selection.
pub fn render_selection<R: Renderer>(
    selector: &CropSelector,
    renderer: &mut R,
    show_grid: bool,
) -> Result<()> {
    let overlay = OverlayLayout::from_selector(selector, show_grid).ok_or(CropError::NotInitialized)?;
    renderer.draw_overlay(&overlay);
    Ok(())
}

/// Export the current selection through `exporter`.
pub fn export_selection<E: Exporter>(selector: &CropSelector, exporter: &E) -> Result<E::Output> {
    if selector.bounds().is_none() {
        return Err(CropError::NotInitialized);
    }
    let region = selector.crop_region().ok_or(CropError::EmptyRegion)?;
    log::debug!("exporting crop region {:?}", region.as_tuple());
    exporter.export(region)
}
