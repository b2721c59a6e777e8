//! The interpolation collapse: fold a sprite's in-flight transition into a
//! new resting base state as of a query time.
//!
//! Rebase is what makes mid-transition redirection safe without a scheduler
//! or history: the blended value the rasterizer was showing at `t` becomes
//! the new base, the current half is left alone, and the caller then aims a
//! new target with a fresh timestamp. The fold must use the same easing the
//! rasterizer applies, or the folded base would not match the screen.

use crate::channel::Channel;
use crate::ease::functions::lerp_f32;
use crate::ease::Easing;
use crate::ids::SpriteId;
use crate::quad::CORNERS_PER_SPRITE;
use crate::store::SpriteStore;

/// Blend factor over a [base_ms, cur_ms] window at query time `t_ms`:
/// 0 before the window opens, 1 at or past its end, eased progress inside.
/// A degenerate window (cur == base) lands in the `t >= cur` branch. This is
/// the exact weighting the rasterizer applies per vertex; adapters can call
/// it directly to stay in lockstep with the fold.
#[inline]
pub fn blend_between(base_ms: f64, cur_ms: f64, t_ms: f64, easing: &Easing) -> f32 {
    if t_ms >= cur_ms {
        1.0
    } else if t_ms <= base_ms {
        0.0
    } else {
        easing.apply(((t_ms - base_ms) / (cur_ms - base_ms)) as f32)
    }
}

/// Fold one base channel toward its current twin, corner by corner, with
/// `b` weighting the current half. Corner-wise blending preserves the quad
/// rule since both twins share the same sprite size.
fn fold_channel(base: &mut Channel, current: &Channel, index: usize, b: f32) {
    for corner in 0..CORNERS_PER_SPRITE {
        for component in 0..current.stride() {
            let cur = current.corner(index, corner, component);
            let old = base.corner(index, corner, component);
            base.set_corner(index, corner, component, lerp_f32(old, cur, b));
        }
    }
}

impl SpriteStore {
    /// Blend factor for the position/color/opacity pair at `t_ms`, under
    /// the configured easing.
    pub fn blend_factor(&self, id: SpriteId, t_ms: f64) -> f32 {
        self.blend_factor_with(id, t_ms, &self.cfg.easing)
    }

    pub fn blend_factor_with(&self, id: SpriteId, t_ms: f64, easing: &Easing) -> f32 {
        blend_between(
            self.base_timestamp_ms(id),
            self.timestamp_ms(id),
            t_ms,
            easing,
        )
    }

    /// Collapse the sprite's interpolation into a new base state as of
    /// `t_ms`, using the configured (shared) easing. Current values are
    /// untouched; the caller is expected to follow up with a new target and
    /// a new timestamp.
    pub fn rebase(&mut self, id: SpriteId, t_ms: f64) {
        let easing = self.cfg.easing;
        self.rebase_with(id, t_ms, &easing);
    }

    /// Rebase with an explicit curve, for hosts that configure easing per
    /// call. The curve must match what the rasterizer is drawing with.
    pub fn rebase_with(&mut self, id: SpriteId, t_ms: f64, easing: &Easing) {
        let base_ms = self.base_timestamp_ms(id);
        let cur_ms = self.timestamp_ms(id);
        let b = blend_between(base_ms, cur_ms, t_ms, easing);

        let index = id.index();
        fold_channel(&mut self.base_position, &self.position, index, b);
        fold_channel(&mut self.base_color, &self.color, index, b);
        fold_channel(&mut self.base_opacity, &self.opacity, index, b);

        // Past the window the fold lands exactly at `t`. Inside it, the
        // base timestamp gets the same blend as every other attribute, so a
        // second rebase before the next set still collapses correctly and a
        // query below the window leaves the base untouched.
        let new_base_ms = if t_ms >= cur_ms {
            t_ms
        } else {
            base_ms + (cur_ms - base_ms) * b as f64
        };
        self.set_base_timestamp_ms(id, new_base_ms);
    }

    // ---- rasterizer-parity sampling ----------------------------------------
    // What the renderer would display at `t_ms`; used by hosts for picking
    // or debugging and by the continuity tests.

    pub fn sampled_x(&self, id: SpriteId, t_ms: f64) -> f32 {
        let b = self.blend_factor(id, t_ms);
        lerp_f32(self.base_x(id), self.x(id), b)
    }

    pub fn sampled_y(&self, id: SpriteId, t_ms: f64) -> f32 {
        let b = self.blend_factor(id, t_ms);
        lerp_f32(self.base_y(id), self.y(id), b)
    }

    pub fn sampled_z(&self, id: SpriteId, t_ms: f64) -> f32 {
        let b = self.blend_factor(id, t_ms);
        lerp_f32(self.base_z(id), self.z(id), b)
    }

    pub fn sampled_color(&self, id: SpriteId, t_ms: f64) -> [f32; 4] {
        let b = self.blend_factor(id, t_ms);
        let cur = self.color(id);
        let base = self.base_color(id);
        [
            lerp_f32(base[0], cur[0], b),
            lerp_f32(base[1], cur[1], b),
            lerp_f32(base[2], cur[2], b),
            lerp_f32(base[3], cur[3], b),
        ]
    }

    pub fn sampled_opacity(&self, id: SpriteId, t_ms: f64) -> f32 {
        let b = self.blend_factor(id, t_ms);
        lerp_f32(self.base_opacity(id), self.opacity(id), b)
    }
}
