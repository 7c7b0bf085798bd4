//! Occupancy grid storage and generation for one terrain chunk.
#![forbid(unsafe_code)]

use rand::Rng;
use talus_world::{ChunkDims, HeightSampler, NoiseLayer, WorldGenError};

/// Boolean solid/empty state for every cell of one chunk, linearized as
/// `(y * sz + z) * sx + x`. Populated once per build, read-only after.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(sx: usize, sy: usize, sz: usize) -> Self {
        Self {
            sx,
            sy,
            sz,
            cells: vec![false; sx * sy * sz],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.sz + z) * self.sx + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.cells[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, solid: bool) {
        let i = self.idx(x, y, z);
        self.cells[i] = solid;
    }

    /// Occupancy for a possibly out-of-bounds neighbor position; anything
    /// outside the grid reads as empty.
    #[inline]
    pub fn occupied(&self, x: i32, y: i32, z: i32) -> bool {
        if x < 0 || y < 0 || z < 0 {
            return false;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return false;
        }
        self.get(x, y, z)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.sx
            && (y as usize) < self.sy
            && (z as usize) < self.sz
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.sx * self.sy * self.sz
    }

    #[inline]
    pub fn has_solid(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkOccupancy {
    Empty,
    Populated,
}

impl ChunkOccupancy {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, ChunkOccupancy::Empty)
    }

    #[inline]
    pub fn has_cells(self) -> bool {
        matches!(self, ChunkOccupancy::Populated)
    }
}

#[derive(Clone, Debug)]
pub struct OccupancyResult {
    pub grid: OccupancyGrid,
    pub occupancy: ChunkOccupancy,
}

/// Fills one chunk's occupancy grid from the layered height field: a cell
/// `(x, y, z)` is solid iff `y < height_for(x, z)`. Phase offsets are
/// drawn from `rng` once per layer before any cell is visited.
pub fn generate_occupancy<R: Rng>(
    dims: ChunkDims,
    layers: &[NoiseLayer],
    rng: &mut R,
) -> Result<OccupancyResult, WorldGenError> {
    let (sx, sy, sz) = check_extents(dims)?;
    let sampler = HeightSampler::new(layers, rng)?;
    Ok(fill_from_sampler(&sampler, sx, sy, sz))
}

/// Same fill as [`generate_occupancy`] with a pre-built sampler, for
/// replaying explicit phase offsets.
pub fn generate_occupancy_with_sampler(
    dims: ChunkDims,
    sampler: &HeightSampler,
) -> Result<OccupancyResult, WorldGenError> {
    let (sx, sy, sz) = check_extents(dims)?;
    Ok(fill_from_sampler(sampler, sx, sy, sz))
}

/// Validates the extents and confirms the cell count fits in `usize`
/// before the grid is allocated.
fn check_extents(dims: ChunkDims) -> Result<(usize, usize, usize), WorldGenError> {
    let extents = dims.validate()?;
    dims.checked_volume()
        .ok_or(WorldGenError::ResourceExhausted {
            sx: dims.sx,
            sy: dims.sy,
            sz: dims.sz,
        })?;
    Ok(extents)
}

fn fill_from_sampler(sampler: &HeightSampler, sx: usize, sy: usize, sz: usize) -> OccupancyResult {
    let mut grid = OccupancyGrid::new(sx, sy, sz);
    let mut any_solid = false;
    for z in 0..sz {
        for x in 0..sx {
            // Height is a column property; sample it once per (x, z).
            let height = sampler.height_for(x, z, (sx, sy, sz));
            for y in 0..sy {
                if (y as f32) < height {
                    any_solid = true;
                    grid.set(x, y, z, true);
                }
            }
        }
    }
    OccupancyResult {
        grid,
        occupancy: if any_solid {
            ChunkOccupancy::Populated
        } else {
            ChunkOccupancy::Empty
        },
    }
}
