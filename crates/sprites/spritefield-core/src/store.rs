//! SpriteStore: the columnar, capacity-bound dual-state attribute store.
//!
//! Every animated attribute is a current/base twin pair stored in separate
//! flat channels; timestamps are stored as offsets from the construction
//! wall clock so they stay small enough for an f32 GPU channel. The store
//! owns all attribute memory; only `&[f32]` views escape, plus a per-channel
//! dirty flag telling the rasterizer what to re-upload.

use hashbrown::HashMap;
use log::{debug, trace};

use crate::atlas::{ImageAtlas, ImageCompletion, ImageData};
use crate::channel::Channel;
use crate::config::Config;
use crate::error::StoreError;
use crate::ids::{SlotAllocator, SpriteId};
use crate::quad::{build_corner_ids, build_faces, CORNERS_PER_SPRITE, CORNER_STEPS};

/// The dynamic attribute groups, as the rasterizer sees them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChannelKind {
    Position,
    BasePosition,
    Color,
    BaseColor,
    Opacity,
    BaseOpacity,
    Timestamp,
    BaseTimestamp,
    TextureIndex,
    BaseTextureIndex,
    TextureTimestamp,
    BaseTextureTimestamp,
}

pub struct SpriteStore {
    pub(crate) cfg: Config,
    epoch_ms: f64,
    slots: SlotAllocator,

    pub(crate) position: Channel,
    pub(crate) base_position: Channel,
    pub(crate) color: Channel,
    pub(crate) base_color: Channel,
    pub(crate) opacity: Channel,
    pub(crate) base_opacity: Channel,
    pub(crate) timestamp: Channel,
    pub(crate) base_timestamp: Channel,
    pub(crate) texture_index: Channel,
    pub(crate) base_texture_index: Channel,
    pub(crate) texture_timestamp: Channel,
    pub(crate) base_texture_timestamp: Channel,

    faces: Vec<u32>,
    corner_ids: Vec<f32>,

    atlas: Option<Box<dyn ImageAtlas>>,
    image_requests: HashMap<u32, u64>,
}

impl SpriteStore {
    /// Create a store with `cfg.capacity` permanent slots. `epoch_ms` is
    /// the construction wall clock in milliseconds; every stored timestamp
    /// is an offset from it.
    pub fn new(cfg: Config, epoch_ms: f64) -> Self {
        let capacity = cfg.capacity;
        Self {
            slots: SlotAllocator::new(capacity),
            position: Channel::new(capacity, 3),
            base_position: Channel::new(capacity, 3),
            color: Channel::new(capacity, 4),
            base_color: Channel::new(capacity, 4),
            opacity: Channel::new(capacity, 1),
            base_opacity: Channel::new(capacity, 1),
            timestamp: Channel::new(capacity, 1),
            base_timestamp: Channel::new(capacity, 1),
            texture_index: Channel::new(capacity, 1),
            base_texture_index: Channel::new(capacity, 1),
            texture_timestamp: Channel::new(capacity, 1),
            base_texture_timestamp: Channel::new(capacity, 1),
            faces: build_faces(capacity),
            corner_ids: build_corner_ids(capacity),
            atlas: None,
            image_requests: HashMap::new(),
            cfg,
            epoch_ms,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.slots.capacity()
    }

    /// Slots handed out so far.
    #[inline]
    pub fn active(&self) -> u32 {
        self.slots.allocated()
    }

    /// Construction wall clock; the rasterizer needs it to decode stored
    /// timestamps.
    #[inline]
    pub fn epoch_ms(&self) -> f64 {
        self.epoch_ms
    }

    /// Activate the next unused slot.
    pub fn activate(&mut self) -> Result<SpriteId, StoreError> {
        let id = self.slots.alloc().ok_or(StoreError::CapacityExhausted {
            capacity: self.slots.capacity(),
        })?;
        trace!("activated sprite slot {}", id.0);
        Ok(id)
    }

    // ---- timestamp encoding -------------------------------------------------

    /// Store `wall_clock_ms` as an offset from the construction epoch. The
    /// offset keeps magnitudes in the tens of thousands instead of 10^12 so
    /// the f32 channel keeps millisecond precision; interpolation only ever
    /// looks at differences.
    #[inline]
    pub fn encode_timestamp(&self, wall_clock_ms: f64) -> f32 {
        (wall_clock_ms - self.epoch_ms) as f32
    }

    #[inline]
    pub fn decode_timestamp(&self, stored: f32) -> f64 {
        stored as f64 + self.epoch_ms
    }

    // ---- position -----------------------------------------------------------

    fn write_axis(channel: &mut Channel, cfg: &Config, id: SpriteId, axis: usize, value: f32) {
        let size = match axis {
            0 => cfg.sprite_width,
            1 => cfg.sprite_height,
            _ => 0.0,
        };
        let mut corners = [value; CORNERS_PER_SPRITE];
        if axis < 2 {
            for (corner, steps) in CORNER_STEPS.iter().enumerate() {
                corners[corner] = value + steps[axis] * size;
            }
        }
        channel.write_corners(id.index(), axis, corners);
    }

    pub fn set_x(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.position, &self.cfg, id, 0, value);
    }

    pub fn set_y(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.position, &self.cfg, id, 1, value);
    }

    pub fn set_z(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.position, &self.cfg, id, 2, value);
    }

    pub fn set_base_x(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.base_position, &self.cfg, id, 0, value);
    }

    pub fn set_base_y(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.base_position, &self.cfg, id, 1, value);
    }

    pub fn set_base_z(&mut self, id: SpriteId, value: f32) {
        Self::write_axis(&mut self.base_position, &self.cfg, id, 2, value);
    }

    pub fn set_position(&mut self, id: SpriteId, x: f32, y: f32, z: f32) {
        self.set_x(id, x);
        self.set_y(id, y);
        self.set_z(id, z);
    }

    pub fn set_base_position(&mut self, id: SpriteId, x: f32, y: f32, z: f32) {
        self.set_base_x(id, x);
        self.set_base_y(id, y);
        self.set_base_z(id, z);
    }

    #[inline]
    pub fn x(&self, id: SpriteId) -> f32 {
        self.position.get(id.index(), 0)
    }

    #[inline]
    pub fn y(&self, id: SpriteId) -> f32 {
        self.position.get(id.index(), 1)
    }

    #[inline]
    pub fn z(&self, id: SpriteId) -> f32 {
        self.position.get(id.index(), 2)
    }

    #[inline]
    pub fn base_x(&self, id: SpriteId) -> f32 {
        self.base_position.get(id.index(), 0)
    }

    #[inline]
    pub fn base_y(&self, id: SpriteId) -> f32 {
        self.base_position.get(id.index(), 1)
    }

    #[inline]
    pub fn base_z(&self, id: SpriteId) -> f32 {
        self.base_position.get(id.index(), 2)
    }

    // ---- color --------------------------------------------------------------
    // Channels carry the 0..255 convention; `a` is overlay strength, not
    // transparency. Values pass through unvalidated.

    pub fn set_r(&mut self, id: SpriteId, value: f32) {
        self.color.splat(id.index(), 0, value);
    }

    pub fn set_g(&mut self, id: SpriteId, value: f32) {
        self.color.splat(id.index(), 1, value);
    }

    pub fn set_b(&mut self, id: SpriteId, value: f32) {
        self.color.splat(id.index(), 2, value);
    }

    pub fn set_a(&mut self, id: SpriteId, value: f32) {
        self.color.splat(id.index(), 3, value);
    }

    pub fn set_base_r(&mut self, id: SpriteId, value: f32) {
        self.base_color.splat(id.index(), 0, value);
    }

    pub fn set_base_g(&mut self, id: SpriteId, value: f32) {
        self.base_color.splat(id.index(), 1, value);
    }

    pub fn set_base_b(&mut self, id: SpriteId, value: f32) {
        self.base_color.splat(id.index(), 2, value);
    }

    pub fn set_base_a(&mut self, id: SpriteId, value: f32) {
        self.base_color.splat(id.index(), 3, value);
    }

    pub fn set_color(&mut self, id: SpriteId, r: f32, g: f32, b: f32, a: f32) {
        self.set_r(id, r);
        self.set_g(id, g);
        self.set_b(id, b);
        self.set_a(id, a);
    }

    pub fn set_base_color(&mut self, id: SpriteId, r: f32, g: f32, b: f32, a: f32) {
        self.set_base_r(id, r);
        self.set_base_g(id, g);
        self.set_base_b(id, b);
        self.set_base_a(id, a);
    }

    #[inline]
    pub fn r(&self, id: SpriteId) -> f32 {
        self.color.get(id.index(), 0)
    }

    #[inline]
    pub fn g(&self, id: SpriteId) -> f32 {
        self.color.get(id.index(), 1)
    }

    #[inline]
    pub fn b(&self, id: SpriteId) -> f32 {
        self.color.get(id.index(), 2)
    }

    #[inline]
    pub fn a(&self, id: SpriteId) -> f32 {
        self.color.get(id.index(), 3)
    }

    pub fn color(&self, id: SpriteId) -> [f32; 4] {
        [self.r(id), self.g(id), self.b(id), self.a(id)]
    }

    #[inline]
    pub fn base_r(&self, id: SpriteId) -> f32 {
        self.base_color.get(id.index(), 0)
    }

    #[inline]
    pub fn base_g(&self, id: SpriteId) -> f32 {
        self.base_color.get(id.index(), 1)
    }

    #[inline]
    pub fn base_b(&self, id: SpriteId) -> f32 {
        self.base_color.get(id.index(), 2)
    }

    #[inline]
    pub fn base_a(&self, id: SpriteId) -> f32 {
        self.base_color.get(id.index(), 3)
    }

    pub fn base_color(&self, id: SpriteId) -> [f32; 4] {
        [
            self.base_r(id),
            self.base_g(id),
            self.base_b(id),
            self.base_a(id),
        ]
    }

    // ---- opacity ------------------------------------------------------------
    // True rendering transparency, 0..1.

    pub fn set_opacity(&mut self, id: SpriteId, value: f32) {
        self.opacity.splat(id.index(), 0, value);
    }

    pub fn set_base_opacity(&mut self, id: SpriteId, value: f32) {
        self.base_opacity.splat(id.index(), 0, value);
    }

    #[inline]
    pub fn opacity(&self, id: SpriteId) -> f32 {
        self.opacity.get(id.index(), 0)
    }

    #[inline]
    pub fn base_opacity(&self, id: SpriteId) -> f32 {
        self.base_opacity.get(id.index(), 0)
    }

    // ---- attribute timestamps ----------------------------------------------
    // The pair governing position/color/opacity transitions. Public API is
    // in wall-clock milliseconds; the channels hold encoded offsets.

    pub fn set_timestamp_ms(&mut self, id: SpriteId, wall_clock_ms: f64) {
        let stored = self.encode_timestamp(wall_clock_ms);
        self.timestamp.splat(id.index(), 0, stored);
    }

    pub fn set_base_timestamp_ms(&mut self, id: SpriteId, wall_clock_ms: f64) {
        let stored = self.encode_timestamp(wall_clock_ms);
        self.base_timestamp.splat(id.index(), 0, stored);
    }

    #[inline]
    pub fn timestamp_ms(&self, id: SpriteId) -> f64 {
        self.decode_timestamp(self.timestamp.get(id.index(), 0))
    }

    #[inline]
    pub fn base_timestamp_ms(&self, id: SpriteId) -> f64 {
        self.decode_timestamp(self.base_timestamp.get(id.index(), 0))
    }

    // ---- texture timestamps -------------------------------------------------
    // Independent pair governing the two-slot crossfade; never touched by
    // rebase. The texture indices themselves are mutated only by
    // switch_textures (texture.rs).

    pub fn set_texture_timestamp_ms(&mut self, id: SpriteId, wall_clock_ms: f64) {
        let stored = self.encode_timestamp(wall_clock_ms);
        self.texture_timestamp.splat(id.index(), 0, stored);
    }

    pub fn set_base_texture_timestamp_ms(&mut self, id: SpriteId, wall_clock_ms: f64) {
        let stored = self.encode_timestamp(wall_clock_ms);
        self.base_texture_timestamp.splat(id.index(), 0, stored);
    }

    #[inline]
    pub fn texture_timestamp_ms(&self, id: SpriteId) -> f64 {
        self.decode_timestamp(self.texture_timestamp.get(id.index(), 0))
    }

    #[inline]
    pub fn base_texture_timestamp_ms(&self, id: SpriteId) -> f64 {
        self.decode_timestamp(self.base_texture_timestamp.get(id.index(), 0))
    }

    // ---- rasterizer surface -------------------------------------------------

    pub(crate) fn channel(&self, kind: ChannelKind) -> &Channel {
        match kind {
            ChannelKind::Position => &self.position,
            ChannelKind::BasePosition => &self.base_position,
            ChannelKind::Color => &self.color,
            ChannelKind::BaseColor => &self.base_color,
            ChannelKind::Opacity => &self.opacity,
            ChannelKind::BaseOpacity => &self.base_opacity,
            ChannelKind::Timestamp => &self.timestamp,
            ChannelKind::BaseTimestamp => &self.base_timestamp,
            ChannelKind::TextureIndex => &self.texture_index,
            ChannelKind::BaseTextureIndex => &self.base_texture_index,
            ChannelKind::TextureTimestamp => &self.texture_timestamp,
            ChannelKind::BaseTextureTimestamp => &self.base_texture_timestamp,
        }
    }

    fn channel_mut(&mut self, kind: ChannelKind) -> &mut Channel {
        match kind {
            ChannelKind::Position => &mut self.position,
            ChannelKind::BasePosition => &mut self.base_position,
            ChannelKind::Color => &mut self.color,
            ChannelKind::BaseColor => &mut self.base_color,
            ChannelKind::Opacity => &mut self.opacity,
            ChannelKind::BaseOpacity => &mut self.base_opacity,
            ChannelKind::Timestamp => &mut self.timestamp,
            ChannelKind::BaseTimestamp => &mut self.base_timestamp,
            ChannelKind::TextureIndex => &mut self.texture_index,
            ChannelKind::BaseTextureIndex => &mut self.base_texture_index,
            ChannelKind::TextureTimestamp => &mut self.texture_timestamp,
            ChannelKind::BaseTextureTimestamp => &mut self.base_texture_timestamp,
        }
    }

    /// Flat per-vertex array for one attribute group, corner-major.
    pub fn buffer(&self, kind: ChannelKind) -> &[f32] {
        self.channel(kind).as_slice()
    }

    /// Components per corner vertex for one attribute group.
    pub fn buffer_stride(&self, kind: ChannelKind) -> usize {
        self.channel(kind).stride()
    }

    /// Has the group changed since the dirty flag was last consumed?
    pub fn is_dirty(&self, kind: ChannelKind) -> bool {
        self.channel(kind).is_dirty()
    }

    /// Consume the dirty flag; the rasterizer calls this right before
    /// deciding whether to re-upload the group.
    pub fn take_dirty(&mut self, kind: ChannelKind) -> bool {
        self.channel_mut(kind).take_dirty()
    }

    /// Static triangle-face indices covering all quads.
    #[inline]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Static corner-identity array (corner number per vertex).
    #[inline]
    pub fn corner_ids(&self) -> &[f32] {
        &self.corner_ids
    }

    // ---- image atlas --------------------------------------------------------

    /// Install the external atlas collaborator that rasterizes per-sprite
    /// custom images into texture slot 1.
    pub fn install_atlas(&mut self, atlas: Box<dyn ImageAtlas>) {
        self.atlas = Some(atlas);
    }

    /// Forward a custom image to the atlas collaborator, fire-and-forget.
    /// `on_complete` fires exactly once when the collaborator finishes; the
    /// store never awaits it. Requests are keyed by slot, so a newer request
    /// for the same sprite supersedes an older one whenever its completion
    /// lands.
    pub fn set_image_data(
        &mut self,
        id: SpriteId,
        image: &ImageData,
        on_complete: Option<ImageCompletion>,
    ) -> Result<(), StoreError> {
        assert!(
            id.index() < self.slots.capacity() as usize,
            "sprite index {} out of range (capacity {})",
            id.0,
            self.slots.capacity()
        );
        if self.atlas.is_none() {
            return Err(StoreError::AtlasNotInstalled);
        }
        let count = self.image_requests.entry(id.0).or_insert(0);
        *count += 1;
        debug!("image request #{} for sprite {}", *count, id.0);
        if let Some(atlas) = self.atlas.as_deref_mut() {
            atlas.rasterize(id, image, on_complete);
        }
        Ok(())
    }

    /// Requests issued so far for a slot (diagnostic surface; the latest
    /// one wins).
    pub fn image_request_count(&self, id: SpriteId) -> u64 {
        self.image_requests.get(&id.0).copied().unwrap_or(0)
    }
}
