//! Two-slot texture selection and crossfade scheduling.
//!
//! Each sprite draws from one of two fixed texture slots: the shared
//! placeholder glyph (slot 0) or the sprite's own atlas cell (slot 1). The
//! selection flip is instantaneous in the data model; the visible crossfade
//! is the rasterizer blending the base slot against the current slot over
//! the independent texture-timestamp window, exactly as color and opacity
//! blend over theirs.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::ids::SpriteId;
use crate::rebase::blend_between;
use crate::store::SpriteStore;

/// The two fixed texture slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TextureSlot {
    /// Shared default glyph.
    Placeholder,
    /// The sprite's own atlas cell.
    Custom,
}

impl TextureSlot {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            TextureSlot::Placeholder => TextureSlot::Custom,
            TextureSlot::Custom => TextureSlot::Placeholder,
        }
    }

    #[inline]
    pub(crate) fn from_raw(value: f32) -> Self {
        if value >= 0.5 {
            TextureSlot::Custom
        } else {
            TextureSlot::Placeholder
        }
    }

    #[inline]
    pub(crate) fn as_raw(self) -> f32 {
        match self {
            TextureSlot::Placeholder => 0.0,
            TextureSlot::Custom => 1.0,
        }
    }
}

impl SpriteStore {
    /// Slot the sprite is fading toward (or resting on).
    pub fn texture_slot(&self, id: SpriteId) -> TextureSlot {
        TextureSlot::from_raw(self.texture_index.get(id.index(), 0))
    }

    /// Slot the sprite is fading away from.
    pub fn base_texture_slot(&self, id: SpriteId) -> TextureSlot {
        TextureSlot::from_raw(self.base_texture_index.get(id.index(), 0))
    }

    /// Schedule a crossfade to the other slot over [start_ms, end_ms]. The
    /// only mutator of texture selection. Calling again before a fade
    /// completes restarts the window from whatever the pair currently is;
    /// there is no queueing.
    pub fn switch_textures(&mut self, id: SpriteId, start_ms: f64, end_ms: f64) {
        let from = self.texture_slot(id);
        let to = from.other();
        let index = id.index();
        self.base_texture_index.splat(index, 0, from.as_raw());
        self.texture_index.splat(index, 0, to.as_raw());
        self.set_base_texture_timestamp_ms(id, start_ms);
        self.set_texture_timestamp_ms(id, end_ms);
        trace!(
            "sprite {} texture crossfade {:?} -> {:?} over [{start_ms}, {end_ms}]",
            id.0,
            from,
            to
        );
    }

    /// Crossfade factor at `t_ms` under the shared easing: 0 shows only the
    /// base slot, 1 only the current slot.
    pub fn texture_blend(&self, id: SpriteId, t_ms: f64) -> f32 {
        blend_between(
            self.base_texture_timestamp_ms(id),
            self.texture_timestamp_ms(id),
            t_ms,
            &self.cfg.easing,
        )
    }
}
