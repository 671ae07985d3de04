// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document.rs
//
// Raster source document: supplies the selection bounds and exports regions.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage, imageops};

use crate::app::render::Exporter;
use crate::domain::{Bounds, CropRegion};
use crate::error::{CropError, Result};

/// Represents a raster image document (PNG, JPEG, WebP, ...).
pub struct RasterDocument {
    /// The decoded image document.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let document = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        log::debug!(
            "opened {} ({}x{})",
            path.display(),
            document.width(),
            document.height()
        );
        Ok(Self { document })
    }

    pub fn from_image(document: DynamicImage) -> Self {
        Self { document }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.document
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Selection bounds covering the whole image.
    pub fn bounds(&self) -> Result<Bounds> {
        let (width, height) = self.dimensions();
        Bounds::from_pixels(width, height)
    }

    /// Save the current document to disk.
    pub fn save(&self, path: &Path) -> image::ImageResult<()> {
        self.document.save(path)
    }
}

impl Exporter for RasterDocument {
    type Output = RgbaImage;

    fn export(&self, region: CropRegion) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        let region = region
            .clipped_to(width, height)
            .ok_or(CropError::EmptyRegion)?;
        let (x, y, w, h) = region.as_tuple();
        Ok(imageops::crop_imm(&self.document, x, y, w, h).to_image())
    }
}
