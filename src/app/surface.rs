// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/surface.rs
//
// Surface collaborator: client-to-surface coordinate mapping and the
// pointer event adapter that drives the crop selector.

use crate::domain::{Bounds, CropSelector, DragMode, Point};
use crate::error::Result;

/// Linear mapping between displayed (client) pixels and surface pixels.
///
/// The displayed element may be scaled by layout, so each axis has its own
/// factor `surface / displayed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    origin: Point,
    displayed: Bounds,
    surface: Bounds,
}

impl SurfaceMapping {
    /// `origin` is the top-left of the displayed element in client space.
    pub fn new(origin: Point, displayed: (f32, f32), surface: (f32, f32)) -> Result<Self> {
        Ok(Self {
            origin,
            displayed: Bounds::new(displayed.0, displayed.1)?,
            surface: Bounds::new(surface.0, surface.1)?,
        })
    }

    /// Surface shown at its native size with no offset.
    pub fn identity(surface: Bounds) -> Self {
        Self {
            origin: Point::default(),
            displayed: surface,
            surface,
        }
    }

    pub fn surface(&self) -> Bounds {
        self.surface
    }

    /// Per-axis surface pixels per displayed pixel.
    pub fn scale(&self) -> (f32, f32) {
        (
            self.surface.width() / self.displayed.width(),
            self.surface.height() / self.displayed.height(),
        )
    }

    pub fn to_surface(&self, client: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(
            (client.x - self.origin.x) * sx,
            (client.y - self.origin.y) * sy,
        )
    }

    pub fn to_display(&self, surface: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(
            surface.x / sx + self.origin.x,
            surface.y / sy + self.origin.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Mouse or touch event reduced to a phase and a client position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    /// Simultaneous touch points (1 for mouse input).
    pub touches: u8,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Point::new(x, y),
            touches: 1,
        }
    }

    pub fn touch(phase: PointerPhase, x: f32, y: f32, touches: u8) -> Self {
        Self {
            phase,
            position: Point::new(x, y),
            touches,
        }
    }
}

/// Whether an event was consumed by the crop tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Captured,
    Ignored,
}

/// Forwards normalized pointer events into a [`CropSelector`].
#[derive(Debug, Clone, Copy)]
pub struct GestureAdapter {
    mapping: SurfaceMapping,
}

impl GestureAdapter {
    pub fn new(mapping: SurfaceMapping) -> Self {
        Self { mapping }
    }

    pub fn handle(&self, selector: &mut CropSelector, event: PointerEvent) -> Status {
        if event.touches > 1 {
            log::trace!("ignoring multi-touch event ({} points)", event.touches);
            return Status::Ignored;
        }

        let point = self.mapping.to_surface(event.position);
        match event.phase {
            PointerPhase::Down => {
                if selector.begin_gesture(point) == DragMode::None {
                    return Status::Ignored;
                }
                // Always capture in crop mode so the viewer does not pan.
                Status::Captured
            }
            PointerPhase::Move => {
                if !selector.is_dragging() {
                    return Status::Ignored;
                }
                match selector.update_gesture(point) {
                    Ok(()) => Status::Captured,
                    Err(err) => {
                        log::debug!("pointer move dropped: {err}");
                        Status::Ignored
                    }
                }
            }
            PointerPhase::Up => {
                if !selector.is_dragging() {
                    return Status::Ignored;
                }
                selector.end_gesture();
                Status::Captured
            }
            PointerPhase::Cancel => {
                if !selector.is_dragging() {
                    return Status::Ignored;
                }
                selector.cancel_gesture();
                Status::Captured
            }
        }
    }

    /// Cursor to show with the pointer at `client`.
    pub fn cursor(&self, selector: &CropSelector, client: Point) -> &'static str {
        selector
            .hovered_mode(self.mapping.to_surface(client))
            .cursor_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rectangle;

    fn scaled_adapter() -> GestureAdapter {
        // 400x200 surface shown at 200x100, offset by (10, 20).
        let mapping =
            SurfaceMapping::new(Point::new(10.0, 20.0), (200.0, 100.0), (400.0, 200.0)).unwrap();
        GestureAdapter::new(mapping)
    }

    fn selector() -> CropSelector {
        let mut selector = CropSelector::default();
        selector.initialize_centered(400.0, 200.0).unwrap();
        selector
    }

    #[test]
    fn mapping_scales_per_axis() {
        let mapping =
            SurfaceMapping::new(Point::new(10.0, 20.0), (200.0, 50.0), (400.0, 200.0)).unwrap();
        assert_eq!(mapping.scale(), (2.0, 4.0));
        assert_eq!(mapping.to_surface(Point::new(60.0, 30.0)), Point::new(100.0, 40.0));
        assert_eq!(mapping.to_display(Point::new(100.0, 40.0)), Point::new(60.0, 30.0));
    }

    #[test]
    fn mapping_rejects_zero_display() {
        assert!(SurfaceMapping::new(Point::default(), (0.0, 10.0), (10.0, 10.0)).is_err());
    }

    #[test]
    fn drag_through_scaled_surface() {
        let adapter = scaled_adapter();
        let mut selector = selector();

        // Client (110, 70) is surface (200, 100): inside the selection.
        let down = PointerEvent::mouse(PointerPhase::Down, 110.0, 70.0);
        assert_eq!(adapter.handle(&mut selector, down), Status::Captured);
        assert_eq!(selector.mode(), DragMode::Move);

        let motion = PointerEvent::mouse(PointerPhase::Move, 135.0, 70.0);
        assert_eq!(adapter.handle(&mut selector, motion), Status::Captured);

        let up = PointerEvent::mouse(PointerPhase::Up, 135.0, 70.0);
        assert_eq!(adapter.handle(&mut selector, up), Status::Captured);
        assert_eq!(
            selector.current_rectangle(),
            Some(Rectangle::new(150.0, 50.0, 350.0, 150.0))
        );
    }

    #[test]
    fn multi_touch_is_ignored() {
        let adapter = scaled_adapter();
        let mut selector = selector();
        let event = PointerEvent::touch(PointerPhase::Down, 110.0, 70.0, 2);
        assert_eq!(adapter.handle(&mut selector, event), Status::Ignored);
        assert!(!selector.is_dragging());
    }

    #[test]
    fn idle_move_and_up_are_ignored() {
        let adapter = GestureAdapter::new(SurfaceMapping::identity(
            Bounds::new(400.0, 200.0).unwrap(),
        ));
        let mut selector = selector();
        let before = selector.current_rectangle();
        for phase in [PointerPhase::Move, PointerPhase::Up, PointerPhase::Cancel] {
            let event = PointerEvent::mouse(phase, 5.0, 5.0);
            assert_eq!(adapter.handle(&mut selector, event), Status::Ignored);
        }
        assert_eq!(selector.current_rectangle(), before);
    }

    #[test]
    fn cancel_restores_selection() {
        let adapter = GestureAdapter::new(SurfaceMapping::identity(
            Bounds::new(400.0, 200.0).unwrap(),
        ));
        let mut selector = selector();
        let before = selector.current_rectangle();
        adapter.handle(&mut selector, PointerEvent::touch(PointerPhase::Down, 5.0, 5.0, 1));
        adapter.handle(&mut selector, PointerEvent::touch(PointerPhase::Move, 90.0, 90.0, 1));
        let status =
            adapter.handle(&mut selector, PointerEvent::touch(PointerPhase::Cancel, 90.0, 90.0, 1));
        assert_eq!(status, Status::Captured);
        assert_eq!(selector.current_rectangle(), before);
    }

    #[test]
    fn cursor_follows_hit_test() {
        let adapter = scaled_adapter();
        let selector = selector();
        // Surface (100, 50) is the top-left handle.
        assert_eq!(adapter.cursor(&selector, Point::new(60.0, 45.0)), "nwse-resize");
        assert_eq!(adapter.cursor(&selector, Point::new(110.0, 70.0)), "move");
        assert_eq!(adapter.cursor(&selector, Point::new(12.0, 22.0)), "crosshair");
    }
}
