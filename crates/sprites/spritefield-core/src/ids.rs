//! Sprite slot identifiers and the capacity-bound slot allocator.

use serde::{Deserialize, Serialize};

/// Index of one sprite slot, permanently assigned at activation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

impl SpriteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Monotonic allocator for sprite slots. Slots are never reused or
/// compacted; a slot keeps whatever was last written for the life of the
/// store.
#[derive(Debug)]
pub struct SlotAllocator {
    next: u32,
    capacity: u32,
}

impl SlotAllocator {
    pub fn new(capacity: u32) -> Self {
        Self { next: 0, capacity }
    }

    /// Hand out the next unused slot; `None` once capacity is exhausted.
    #[inline]
    pub fn alloc(&mut self) -> Option<SpriteId> {
        if self.next >= self.capacity {
            return None;
        }
        let id = SpriteId(self.next);
        self.next += 1;
        Some(id)
    }

    #[inline]
    pub fn allocated(&self) -> u32 {
        self.next
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
