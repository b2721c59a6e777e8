//! SpriteHandle: a lightweight accessor bound to one (store, slot) pair.
//!
//! A handle is a plain struct forwarding to the store; it owns nothing, so
//! any number of handles may be created for the same slot over time. The
//! mutable borrow serializes access, which is the whole concurrency model.

use crate::ids::SpriteId;
use crate::store::SpriteStore;
use crate::texture::TextureSlot;

pub struct SpriteHandle<'a> {
    store: &'a mut SpriteStore,
    id: SpriteId,
}

impl SpriteStore {
    /// Bind an accessor to one slot. Cheap; re-create freely.
    pub fn handle(&mut self, id: SpriteId) -> SpriteHandle<'_> {
        SpriteHandle { store: self, id }
    }
}

impl SpriteHandle<'_> {
    #[inline]
    pub fn id(&self) -> SpriteId {
        self.id
    }

    // ---- position -----------------------------------------------------------

    pub fn set_x(&mut self, value: f32) {
        self.store.set_x(self.id, value);
    }

    pub fn set_y(&mut self, value: f32) {
        self.store.set_y(self.id, value);
    }

    pub fn set_z(&mut self, value: f32) {
        self.store.set_z(self.id, value);
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.store.set_position(self.id, x, y, z);
    }

    pub fn set_base_x(&mut self, value: f32) {
        self.store.set_base_x(self.id, value);
    }

    pub fn set_base_y(&mut self, value: f32) {
        self.store.set_base_y(self.id, value);
    }

    pub fn set_base_z(&mut self, value: f32) {
        self.store.set_base_z(self.id, value);
    }

    pub fn set_base_position(&mut self, x: f32, y: f32, z: f32) {
        self.store.set_base_position(self.id, x, y, z);
    }

    pub fn x(&self) -> f32 {
        self.store.x(self.id)
    }

    pub fn y(&self) -> f32 {
        self.store.y(self.id)
    }

    pub fn z(&self) -> f32 {
        self.store.z(self.id)
    }

    pub fn base_x(&self) -> f32 {
        self.store.base_x(self.id)
    }

    pub fn base_y(&self) -> f32 {
        self.store.base_y(self.id)
    }

    pub fn base_z(&self) -> f32 {
        self.store.base_z(self.id)
    }

    // ---- color --------------------------------------------------------------

    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.store.set_color(self.id, r, g, b, a);
    }

    pub fn set_base_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.store.set_base_color(self.id, r, g, b, a);
    }

    pub fn color(&self) -> [f32; 4] {
        self.store.color(self.id)
    }

    pub fn base_color(&self) -> [f32; 4] {
        self.store.base_color(self.id)
    }

    // ---- opacity ------------------------------------------------------------

    pub fn set_opacity(&mut self, value: f32) {
        self.store.set_opacity(self.id, value);
    }

    pub fn set_base_opacity(&mut self, value: f32) {
        self.store.set_base_opacity(self.id, value);
    }

    pub fn opacity(&self) -> f32 {
        self.store.opacity(self.id)
    }

    pub fn base_opacity(&self) -> f32 {
        self.store.base_opacity(self.id)
    }

    // ---- timestamps ---------------------------------------------------------

    pub fn set_timestamp_ms(&mut self, wall_clock_ms: f64) {
        self.store.set_timestamp_ms(self.id, wall_clock_ms);
    }

    pub fn set_base_timestamp_ms(&mut self, wall_clock_ms: f64) {
        self.store.set_base_timestamp_ms(self.id, wall_clock_ms);
    }

    pub fn timestamp_ms(&self) -> f64 {
        self.store.timestamp_ms(self.id)
    }

    pub fn base_timestamp_ms(&self) -> f64 {
        self.store.base_timestamp_ms(self.id)
    }

    // ---- textures -----------------------------------------------------------

    pub fn texture_slot(&self) -> TextureSlot {
        self.store.texture_slot(self.id)
    }

    pub fn base_texture_slot(&self) -> TextureSlot {
        self.store.base_texture_slot(self.id)
    }

    pub fn texture_timestamp_ms(&self) -> f64 {
        self.store.texture_timestamp_ms(self.id)
    }

    pub fn base_texture_timestamp_ms(&self) -> f64 {
        self.store.base_texture_timestamp_ms(self.id)
    }

    pub fn switch_textures(&mut self, start_ms: f64, end_ms: f64) {
        self.store.switch_textures(self.id, start_ms, end_ms);
    }

    // ---- folding ------------------------------------------------------------

    pub fn rebase(&mut self, t_ms: f64) {
        self.store.rebase(self.id, t_ms);
    }
}
