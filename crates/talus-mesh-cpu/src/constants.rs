use talus_geom::Vec3;

/// Edge length of one voxel cell in mesh units.
pub const CELL_SIZE: f32 = 1.0;

/// Buffer entries each cell reserves: 6 faces x 6 vertices.
pub const SLOTS_PER_CELL: usize = 36;

/// Buffer entries each face owns within its cell's slot range.
pub const SLOTS_PER_FACE: usize = 6;

/// The eight cube corner offsets scaled by [`CELL_SIZE`], indexed by the
/// bit pattern `x | y << 1 | z << 2` relative to the cell's min corner.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(CELL_SIZE, 0.0, 0.0),
    Vec3::new(0.0, CELL_SIZE, 0.0),
    Vec3::new(CELL_SIZE, CELL_SIZE, 0.0),
    Vec3::new(0.0, 0.0, CELL_SIZE),
    Vec3::new(CELL_SIZE, 0.0, CELL_SIZE),
    Vec3::new(0.0, CELL_SIZE, CELL_SIZE),
    Vec3::new(CELL_SIZE, CELL_SIZE, CELL_SIZE),
];
