// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/selector.rs
//
// Crop selection state machine: hit-testing, drag modes and bounds clamping.

use crate::constant::{HANDLE_TOLERANCE, INITIAL_SELECTION_FRACTION, MIN_SELECTION_SIZE};
use crate::domain::crop::region::CropRegion;
use crate::domain::geometry::{Bounds, Point, Rectangle};
use crate::error::{CropError, Result};

/// What the active drag affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Move,
    New,
}

impl DragMode {
    pub fn is_active(self) -> bool {
        self != DragMode::None
    }

    /// True for the four corner handles.
    pub fn is_resize(self) -> bool {
        matches!(
            self,
            DragMode::TopLeft | DragMode::TopRight | DragMode::BottomLeft | DragMode::BottomRight
        )
    }

    /// Pointer cursor name to show for this mode.
    pub fn cursor_name(self) -> &'static str {
        match self {
            DragMode::None => "default",
            DragMode::TopLeft | DragMode::BottomRight => "nwse-resize",
            DragMode::TopRight | DragMode::BottomLeft => "nesw-resize",
            DragMode::Move => "move",
            DragMode::New => "crosshair",
        }
    }
}

/// Tunables of the selection engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorSettings {
    /// Half-size of the square hit zone around each corner.
    pub handle_tolerance: f32,
    /// Minimum side length resize gestures keep.
    pub min_size: f32,
    /// Fraction of the bounds covered by the centered initial selection.
    pub initial_fraction: f32,
    /// Grow a freshly drawn selection to `min_size` when the gesture ends.
    pub expand_small_selection: bool,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            handle_tolerance: HANDLE_TOLERANCE,
            min_size: MIN_SELECTION_SIZE,
            initial_fraction: INITIAL_SELECTION_FRACTION,
            expand_small_selection: true,
        }
    }
}

/// Rectangle-in-bounds selection driven by pointer gestures.
///
/// One gesture at a time: `begin_gesture` picks a [`DragMode`] by
/// hit-testing, `update_gesture` reshapes the rectangle for that mode and
/// `end_gesture` returns to idle. The rectangle never leaves the bounds.
#[derive(Debug, Clone, Default)]
pub struct CropSelector {
    settings: SelectorSettings,
    bounds: Option<Bounds>,
    rect: Rectangle,
    mode: DragMode,
    drag_offset: Option<Point>,
    gesture_start_rect: Option<Rectangle>,
}

impl CropSelector {
    pub fn new(settings: SelectorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set bounds and the starting rectangle, dropping any gesture in flight.
    ///
    /// The rectangle is normalized and clamped into the new bounds.
    pub fn initialize(&mut self, width: f32, height: f32, initial: Rectangle) -> Result<()> {
        let bounds = Bounds::new(width, height)?;
        self.bounds = Some(bounds);
        self.rect = initial.normalized().clamped(bounds);
        self.clear_gesture();
        log::debug!("crop selector initialized: {width}x{height}, {:?}", self.rect);
        Ok(())
    }

    /// Initialize with the centered region given by `initial_fraction`.
    pub fn initialize_centered(&mut self, width: f32, height: f32) -> Result<()> {
        let bounds = Bounds::new(width, height)?;
        let initial = Rectangle::centered(bounds, self.settings.initial_fraction);
        self.initialize(width, height, initial)
    }

    /// Forget bounds, rectangle and gesture state.
    pub fn reset(&mut self) {
        self.bounds = None;
        self.rect = Rectangle::default();
        self.clear_gesture();
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode.is_active()
    }

    /// Pointer offset from the top-left corner captured for a move.
    pub fn drag_offset(&self) -> Option<Point> {
        self.drag_offset
    }

    /// Mode a gesture starting at `point` would take.
    pub fn hovered_mode(&self, point: Point) -> DragMode {
        if self.bounds.is_none() {
            return DragMode::None;
        }
        if self.mode.is_active() {
            return self.mode;
        }
        self.hit_test(point)
    }

    fn hit_test(&self, point: Point) -> DragMode {
        let rect = self.rect.normalized();
        let tolerance = self.settings.handle_tolerance;

        let handles = [
            (rect.top_left(), DragMode::TopLeft),
            (rect.top_right(), DragMode::TopRight),
            (rect.bottom_left(), DragMode::BottomLeft),
            (rect.bottom_right(), DragMode::BottomRight),
        ];
        for (corner, mode) in handles {
            if corner.is_near(point, tolerance) {
                return mode;
            }
        }

        if rect.contains_strict(point) {
            DragMode::Move
        } else {
            DragMode::New
        }
    }

    /// Start a gesture at `point` and return the resolved mode.
    ///
    /// Ignored (returning the current mode) while another gesture is active
    /// or before initialization.
    pub fn begin_gesture(&mut self, point: Point) -> DragMode {
        let Some(bounds) = self.bounds else {
            log::warn!("crop gesture ignored: selector not initialized");
            return DragMode::None;
        };
        if self.mode.is_active() {
            log::debug!("crop gesture ignored: {:?} already active", self.mode);
            return self.mode;
        }

        self.rect = self.rect.normalized();
        self.gesture_start_rect = Some(self.rect);

        let mode = self.hit_test(point);
        match mode {
            DragMode::Move => {
                self.drag_offset = Some(point.offset_from(self.rect.top_left()));
            }
            DragMode::New => {
                self.rect = Rectangle::collapsed(bounds.clamp(point));
            }
            _ => {}
        }
        self.mode = mode;

        log::debug!("crop gesture begin at ({}, {}): {mode:?}", point.x, point.y);
        mode
    }

    /// Apply pointer motion to the active gesture.
    pub fn update_gesture(&mut self, point: Point) -> Result<()> {
        let Some(bounds) = self.bounds else {
            return Err(CropError::NoActiveGesture);
        };

        let p = bounds.clamp(point);
        let min_w = self.settings.min_size.min(bounds.width());
        let min_h = self.settings.min_size.min(bounds.height());
        let r = &mut self.rect;

        match self.mode {
            DragMode::TopLeft => {
                r.x0 = (r.x1 - min_w).min(p.x);
                r.y0 = (r.y1 - min_h).min(p.y);
            }
            DragMode::TopRight => {
                r.x1 = (r.x0 + min_w).max(p.x);
                r.y0 = (r.y1 - min_h).min(p.y);
            }
            DragMode::BottomLeft => {
                r.x0 = (r.x1 - min_w).min(p.x);
                r.y1 = (r.y0 + min_h).max(p.y);
            }
            DragMode::BottomRight => {
                r.x1 = (r.x0 + min_w).max(p.x);
                r.y1 = (r.y0 + min_h).max(p.y);
            }
            DragMode::Move => {
                let offset = self.drag_offset.unwrap_or_default();
                let (w, h) = r.dimensions();
                let x0 = (p.x - offset.x).min(bounds.width() - w).max(0.0);
                let y0 = (p.y - offset.y).min(bounds.height() - h).max(0.0);
                *r = Rectangle::new(x0, y0, x0 + w, y0 + h);
            }
            DragMode::New => {
                r.x1 = p.x;
                r.y1 = p.y;
            }
            DragMode::None => return Err(CropError::NoActiveGesture),
        }

        *r = r.clamped(bounds);

        // A corner pinned at the bounds pushes the opposite edge outward.
        match self.mode {
            DragMode::TopLeft | DragMode::BottomLeft => {
                r.x1 = r.x1.max(r.x0 + min_w).min(bounds.width());
            }
            DragMode::TopRight | DragMode::BottomRight => {
                r.x0 = r.x0.min(r.x1 - min_w).max(0.0);
            }
            _ => {}
        }
        match self.mode {
            DragMode::TopLeft | DragMode::TopRight => {
                r.y1 = r.y1.max(r.y0 + min_h).min(bounds.height());
            }
            DragMode::BottomLeft | DragMode::BottomRight => {
                r.y0 = r.y0.min(r.y1 - min_h).max(0.0);
            }
            _ => {}
        }
        Ok(())
    }

    /// Finish the active gesture. Idempotent.
    pub fn end_gesture(&mut self) {
        if !self.mode.is_active() {
            return;
        }
        let finished = self.mode;
        self.clear_gesture();
        self.rect = self.rect.normalized();

        if finished == DragMode::New && self.settings.expand_small_selection {
            if let Some(bounds) = self.bounds {
                self.rect = expand_to_min(self.rect, bounds, self.settings.min_size);
            }
        }
        log::debug!("crop gesture end ({finished:?}): {:?}", self.rect);
    }

    /// Abort the active gesture and restore the rectangle it started from.
    pub fn cancel_gesture(&mut self) {
        if !self.mode.is_active() {
            return;
        }
        if let Some(rect) = self.gesture_start_rect {
            self.rect = rect;
        }
        log::debug!("crop gesture cancelled ({:?})", self.mode);
        self.clear_gesture();
    }

    fn clear_gesture(&mut self) {
        self.mode = DragMode::None;
        self.drag_offset = None;
        self.gesture_start_rect = None;
    }

    /// Normalized selection, or `None` before initialization.
    pub fn current_rectangle(&self) -> Option<Rectangle> {
        self.bounds.map(|_| self.rect.normalized())
    }

    /// `(width, height)` of the current selection.
    pub fn dimensions(&self) -> Option<(f32, f32)> {
        self.current_rectangle().map(|r| r.dimensions())
    }

    pub fn has_selection(&self) -> bool {
        self.crop_region().is_some()
    }

    /// Selection snapped to whole pixels.
    pub fn crop_region(&self) -> Option<CropRegion> {
        self.current_rectangle()
            .and_then(|r| CropRegion::from_rectangle(&r))
    }
}

fn expand_to_min(rect: Rectangle, bounds: Bounds, min_size: f32) -> Rectangle {
    let (x0, x1) = expand_axis(rect.x0, rect.x1, min_size, bounds.width());
    let (y0, y1) = expand_axis(rect.y0, rect.y1, min_size, bounds.height());
    Rectangle::new(x0, y0, x1, y1)
}

// Grows [lo, hi] to `min` from `lo`, sliding back inside [0, limit].
fn expand_axis(lo: f32, hi: f32, min: f32, limit: f32) -> (f32, f32) {
    let min = min.min(limit);
    if hi - lo >= min {
        return (lo, hi);
    }
    let hi = lo + min;
    if hi > limit {
        (limit - min, limit)
    } else {
        (lo, hi)
    }
}
