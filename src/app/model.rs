// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use crate::app::surface::{GestureAdapter, SurfaceMapping};
use crate::config::AppConfig;
use crate::domain::CropSelector;
use crate::error::Result;

pub struct AppModel {
    // Tools.
    pub selector: CropSelector,
    pub adapter: Option<GestureAdapter>,

    // View.
    pub show_grid: bool,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            selector: CropSelector::new(config.selector_settings()),
            adapter: None,
            show_grid: config.show_grid,
        }
    }

    /// Start cropping a surface, with the centered selection.
    pub fn open_surface(&mut self, mapping: SurfaceMapping) -> Result<()> {
        let surface = mapping.surface();
        self.selector
            .initialize_centered(surface.width(), surface.height())?;
        self.adapter = Some(GestureAdapter::new(mapping));
        Ok(())
    }

    /// Drop the surface and its selection.
    pub fn close_surface(&mut self) {
        self.selector.reset();
        self.adapter = None;
    }
}
