use talus_chunk::OccupancyGrid;

use crate::face::Face;

/// Per-face visibility: an unoccupied cell emits no solid geometry; an
/// occupied cell shows a face iff the neighbor behind it is outside the
/// grid (chunk boundary faces are always shown) or unoccupied.
#[inline]
pub fn face_visible(grid: &OccupancyGrid, x: usize, y: usize, z: usize, face: Face) -> bool {
    if !grid.get(x, y, z) {
        return false;
    }
    let (dx, dy, dz) = face.delta();
    !grid.occupied(x as i32 + dx, y as i32 + dy, z as i32 + dz)
}
