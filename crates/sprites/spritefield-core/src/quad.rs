//! Static quad derivation: the 4-corner vertex expansion and face indices.
//!
//! Corner layout per sprite (axis-aligned, size w x h, anchored at x,y):
//!   0: (x,     y    )   1: (x + w, y    )
//!   2: (x,     y + h)   3: (x + w, y + h)
//! Z is uniform across corners. Two triangles cover the quad. Everything in
//! this module is derived once at construction and never mutated.

pub const CORNERS_PER_SPRITE: usize = 4;
pub const INDICES_PER_SPRITE: usize = 6;

/// Per-corner (x, y) offset multipliers for the quad rule.
pub(crate) const CORNER_STEPS: [[f32; 2]; CORNERS_PER_SPRITE] =
    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Triangles (0,1,2) and (2,1,3), counter-clockwise.
const FACE_PATTERN: [u32; INDICES_PER_SPRITE] = [0, 1, 2, 2, 1, 3];

/// Face indices for `capacity` quads.
pub(crate) fn build_faces(capacity: u32) -> Vec<u32> {
    let mut faces = Vec::with_capacity(capacity as usize * INDICES_PER_SPRITE);
    for sprite in 0..capacity {
        let first = sprite * CORNERS_PER_SPRITE as u32;
        for step in FACE_PATTERN {
            faces.push(first + step);
        }
    }
    faces
}

/// Corner-identity channel: each vertex carries its corner number so the
/// rasterizer can tell a sprite's four duplicates apart.
pub(crate) fn build_corner_ids(capacity: u32) -> Vec<f32> {
    let mut ids = Vec::with_capacity(capacity as usize * CORNERS_PER_SPRITE);
    for _ in 0..capacity {
        for corner in 0..CORNERS_PER_SPRITE {
            ids.push(corner as f32);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_cover_each_quad_once() {
        let faces = build_faces(2);
        assert_eq!(faces.len(), 2 * INDICES_PER_SPRITE);
        assert_eq!(&faces[..6], &[0, 1, 2, 2, 1, 3]);
        assert_eq!(&faces[6..], &[4, 5, 6, 6, 5, 7]);
    }

    #[test]
    fn corner_ids_repeat_per_sprite() {
        let ids = build_corner_ids(3);
        assert_eq!(ids.len(), 3 * CORNERS_PER_SPRITE);
        for sprite in 0..3 {
            for corner in 0..CORNERS_PER_SPRITE {
                assert_eq!(ids[sprite * CORNERS_PER_SPRITE + corner], corner as f32);
            }
        }
    }
}
