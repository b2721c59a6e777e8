//! Core configuration for spritefield-core.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;

/// Configuration for store sizing and the shared easing curve.
/// `capacity` is immutable once the store is constructed; the sprite
/// dimensions should be settled before slots are activated since the corner
/// expansion bakes them into the position arrays.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Number of sprite slots, fixed for the life of the store.
    pub capacity: u32,

    /// World-space quad size applied by the corner expansion.
    pub sprite_width: f32,
    pub sprite_height: f32,

    /// Atlas cell size in pixels; affects placeholder rasterization only.
    pub image_width: u32,
    pub image_height: u32,

    /// Curve shared by the rasterizer and the rebase fold. Keeping a single
    /// configured curve is what makes a rebase invisible on screen.
    pub easing: Easing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1024,
            sprite_width: 1.0,
            sprite_height: 1.0,
            image_width: 32,
            image_height: 32,
            easing: Easing::default(),
        }
    }
}
