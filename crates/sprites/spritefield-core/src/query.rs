//! Point-containment query over sprite bounds.

use crate::ids::SpriteId;
use crate::store::SpriteStore;

impl SpriteStore {
    /// Sprites whose quad contains (x, y), inclusive of edges. Linear scan
    /// over all capacity slots; no index is maintained. The *current*,
    /// non-interpolated position is used even mid-transition. Slots never
    /// activated sit at the zero-initialized origin quad and can therefore
    /// match queries near the origin.
    pub fn sprites_at(&self, x: f32, y: f32) -> Vec<SpriteId> {
        let mut hits = Vec::new();
        for index in 0..self.capacity() as usize {
            // Corner 0 carries the low edge, corners 1/2 the high edges.
            let lo_x = self.position.corner(index, 0, 0);
            let hi_x = self.position.corner(index, 1, 0);
            let lo_y = self.position.corner(index, 0, 1);
            let hi_y = self.position.corner(index, 2, 1);
            if x >= lo_x && x <= hi_x && y >= lo_y && y <= hi_y {
                hits.push(SpriteId(index as u32));
            }
        }
        hits
    }
}
