//! Flat per-vertex attribute storage.
//!
//! One `Channel` per logical attribute: capacity x 4 corners x stride f32
//! values, zero-initialized, with a dirty flag the rasterizer consumes
//! before deciding whether to re-upload. Writes are immediately visible to
//! reads; an index past capacity panics through checked slice access.

use crate::quad::CORNERS_PER_SPRITE;

#[derive(Debug)]
pub struct Channel {
    data: Vec<f32>,
    stride: usize,
    dirty: bool,
}

impl Channel {
    pub(crate) fn new(capacity: u32, stride: usize) -> Self {
        Self {
            data: vec![0.0; capacity as usize * CORNERS_PER_SPRITE * stride],
            stride,
            dirty: false,
        }
    }

    #[inline]
    fn offset(&self, index: usize, corner: usize, component: usize) -> usize {
        debug_assert!(corner < CORNERS_PER_SPRITE);
        debug_assert!(component < self.stride);
        (index * CORNERS_PER_SPRITE + corner) * self.stride + component
    }

    /// Write `value` into one component of all four corners.
    #[inline]
    pub(crate) fn splat(&mut self, index: usize, component: usize, value: f32) {
        for corner in 0..CORNERS_PER_SPRITE {
            let at = self.offset(index, corner, component);
            self.data[at] = value;
        }
        self.dirty = true;
    }

    /// Write one component with a distinct value per corner.
    #[inline]
    pub(crate) fn write_corners(
        &mut self,
        index: usize,
        component: usize,
        values: [f32; CORNERS_PER_SPRITE],
    ) {
        for (corner, value) in values.into_iter().enumerate() {
            let at = self.offset(index, corner, component);
            self.data[at] = value;
        }
        self.dirty = true;
    }

    /// Write a single corner value.
    #[inline]
    pub(crate) fn set_corner(&mut self, index: usize, corner: usize, component: usize, value: f32) {
        let at = self.offset(index, corner, component);
        self.data[at] = value;
        self.dirty = true;
    }

    /// Representative read: corner 0.
    #[inline]
    pub(crate) fn get(&self, index: usize, component: usize) -> f32 {
        self.data[self.offset(index, 0, component)]
    }

    /// Read a specific corner (the spatial query reads the high-edge
    /// corners directly).
    #[inline]
    pub(crate) fn corner(&self, index: usize, corner: usize, component: usize) -> f32 {
        self.data[self.offset(index, corner, component)]
    }

    /// The whole flat array, laid out corner-major, ready for upload.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Components per corner vertex (3 for position, 4 for color, 1 for
    /// scalars).
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read-and-clear the dirty flag.
    #[inline]
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
