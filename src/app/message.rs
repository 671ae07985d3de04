// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages and the update step that applies them.

use crate::app::model::AppModel;
use crate::app::surface::{PointerEvent, Status};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // Crop gestures.
    Pointer(PointerEvent),
    /// Abort the gesture in flight (Escape).
    CancelCrop,
    /// Throw the selection away and start from the centered region.
    ResetSelection,

    // View.
    ToggleGrid,
}

/// Apply one message to the model.
pub fn update(model: &mut AppModel, message: AppMessage) -> Status {
    match message {
        AppMessage::Pointer(event) => match &model.adapter {
            Some(adapter) => adapter.handle(&mut model.selector, event),
            None => {
                log::debug!("pointer event without an open surface");
                Status::Ignored
            }
        },
        AppMessage::CancelCrop => {
            if !model.selector.is_dragging() {
                return Status::Ignored;
            }
            model.selector.cancel_gesture();
            Status::Captured
        }
        AppMessage::ResetSelection => {
            let Some(bounds) = model.selector.bounds() else {
                return Status::Ignored;
            };
            match model
                .selector
                .initialize_centered(bounds.width(), bounds.height())
            {
                Ok(()) => Status::Captured,
                Err(e) => {
                    log::error!("Failed to reset selection: {e}");
                    Status::Ignored
                }
            }
        }
        AppMessage::ToggleGrid => {
            model.show_grid = !model.show_grid;
            Status::Captured
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::surface::{PointerPhase, SurfaceMapping};
    use crate::config::AppConfig;
    use crate::domain::{Bounds, Rectangle};

    fn model() -> AppModel {
        let mut model = AppModel::new(&AppConfig::default());
        model
            .open_surface(SurfaceMapping::identity(Bounds::new(400.0, 200.0).unwrap()))
            .unwrap();
        model
    }

    fn pointer(phase: PointerPhase, x: f32, y: f32) -> AppMessage {
        AppMessage::Pointer(PointerEvent::mouse(phase, x, y))
    }

    #[test]
    fn pointer_without_surface_is_ignored() {
        let mut model = AppModel::new(&AppConfig::default());
        let status = update(&mut model, pointer(PointerPhase::Down, 1.0, 1.0));
        assert_eq!(status, Status::Ignored);
    }

    #[test]
    fn reset_recenters_selection() {
        let mut model = model();
        update(&mut model, pointer(PointerPhase::Down, 10.0, 10.0));
        update(&mut model, pointer(PointerPhase::Move, 60.0, 60.0));
        update(&mut model, pointer(PointerPhase::Up, 60.0, 60.0));
        assert_eq!(
            model.selector.current_rectangle(),
            Some(Rectangle::new(10.0, 10.0, 60.0, 60.0))
        );

        assert_eq!(update(&mut model, AppMessage::ResetSelection), Status::Captured);
        assert_eq!(
            model.selector.current_rectangle(),
            Some(Rectangle::new(100.0, 50.0, 300.0, 150.0))
        );
    }

    #[test]
    fn cancel_only_while_dragging() {
        let mut model = model();
        assert_eq!(update(&mut model, AppMessage::CancelCrop), Status::Ignored);
        update(&mut model, pointer(PointerPhase::Down, 200.0, 100.0));
        update(&mut model, pointer(PointerPhase::Move, 240.0, 100.0));
        assert_eq!(update(&mut model, AppMessage::CancelCrop), Status::Captured);
        assert_eq!(
            model.selector.current_rectangle(),
            Some(Rectangle::new(100.0, 50.0, 300.0, 150.0))
        );
    }

    #[test]
    fn toggle_grid() {
        let mut model = model();
        let before = model.show_grid;
        update(&mut model, AppMessage::ToggleGrid);
        assert_eq!(model.show_grid, !before);
    }
}
