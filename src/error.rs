// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Error types for crop selection and export.

use thiserror::Error;

/// Errors raised by the crop selection engine and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CropError {
    /// Bounds with a non-positive (or non-finite) side. Fatal to initialization.
    #[error("invalid bounds {width}x{height}: both sides must be positive")]
    InvalidBounds { width: f32, height: f32 },

    /// `update_gesture` called while no gesture is active.
    #[error("no active gesture")]
    NoActiveGesture,

    #[error("selector has not been initialized")]
    NotInitialized,

    #[error("crop region is empty")]
    EmptyRegion,

    #[error("gesture script line {line}: {message}")]
    Script { line: usize, message: String },
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CropError>;
