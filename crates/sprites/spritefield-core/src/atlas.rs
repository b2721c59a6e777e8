//! Image-atlas collaborator interface.
//!
//! The atlas subsystem (rasterizing arbitrary images into a fixed-size
//! texture cell) lives outside this crate; the store only forwards requests
//! and hands the collaborator a single-shot completion. Completions carry no
//! ordering guarantee across sprites. Cancellation is not modeled: requests
//! are keyed by sprite index, so the most recent request for a slot simply
//! wins when its completion eventually fires.

use serde::{Deserialize, Serialize};

use crate::ids::SpriteId;

/// Decoded RGBA8 pixels for one sprite's custom image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Solid-color stand-in, handy for hosts and tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Fires exactly once when the collaborator finishes one request.
pub type ImageCompletion = Box<dyn FnOnce(SpriteId)>;

/// The external decode/raster step. Implementations must invoke `done`
/// exactly once per request, whenever the work completes; the store never
/// awaits them.
pub trait ImageAtlas {
    fn rasterize(&mut self, id: SpriteId, image: &ImageData, done: Option<ImageCompletion>);
}
