// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: surface glue, capabilities and the message loop.

#[cfg(feature = "image")]
pub mod document;
pub mod message;
pub mod model;
#[cfg(feature = "image")]
pub mod preview;
pub mod render;
pub mod script;
pub mod surface;

pub use message::{AppMessage, update};
pub use model::AppModel;
