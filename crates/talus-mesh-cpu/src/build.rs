use std::time::Instant;

use rand::Rng;
use talus_chunk::{OccupancyGrid, generate_occupancy_with_sampler};
use talus_geom::{Aabb, Vec3};
use talus_world::{ChunkDims, HeightSampler, NoiseLayer, WorldGenError};
use thiserror::Error;

use crate::chunk::ChunkMeshCPU;
use crate::constants::{CELL_SIZE, SLOTS_PER_CELL};
use crate::cull::face_visible;
use crate::face::FACES;
use crate::mesh_build::{MeshBuild, MeshError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Builds one chunk mesh end to end: validate -> allocate -> generate
/// occupancy -> classify and write faces. A strict linear pipeline; any
/// failure aborts before later stages, and every failure is detected
/// before the first buffer write.
///
/// `rng` supplies the per-layer phase offsets; each concurrent chunk
/// build must own its own generator stream.
pub fn build_chunk_mesh<R: Rng>(
    dims: ChunkDims,
    layers: &[NoiseLayer],
    rng: &mut R,
) -> Result<ChunkMeshCPU, BuildError> {
    dims.validate()?;
    let sampler = HeightSampler::new(layers, rng)?;
    build_chunk_mesh_with_sampler(dims, &sampler)
}

/// Same pipeline with a pre-built sampler, for replaying explicit phase
/// offsets.
pub fn build_chunk_mesh_with_sampler(
    dims: ChunkDims,
    sampler: &HeightSampler,
) -> Result<ChunkMeshCPU, BuildError> {
    let (sx, sy, sz) = dims.validate()?;
    let cells = dims
        .checked_volume()
        .ok_or(WorldGenError::ResourceExhausted {
            sx: dims.sx,
            sy: dims.sy,
            sz: dims.sz,
        })?;

    let t_alloc = Instant::now();
    let mut build = MeshBuild::for_cells(cells)?;
    let alloc_ms = elapsed_ms(t_alloc);

    let t_gen = Instant::now();
    let out = generate_occupancy_with_sampler(dims, sampler)?;
    let gen_ms = elapsed_ms(t_gen);

    let t_faces = Instant::now();
    write_grid_faces(&out.grid, &mut build);
    let faces_ms = elapsed_ms(t_faces);

    log::debug!(
        "chunk mesh {sx}x{sy}x{sz}: alloc {alloc_ms} ms, gen {gen_ms} ms, faces {faces_ms} ms"
    );

    let bbox = Aabb::new(
        Vec3::ZERO,
        Vec3::new(
            sx as f32 * CELL_SIZE,
            sy as f32 * CELL_SIZE,
            sz as f32 * CELL_SIZE,
        ),
    );
    Ok(ChunkMeshCPU {
        dims: (sx, sy, sz),
        bbox,
        occupancy: out.occupancy,
        build,
    })
}

/// The classify-and-write stage: for every cell, every face in the table
/// is culled and written, visible or not, so slot addressing stays
/// independent of grid content. `build` must carry exactly
/// `grid.volume() * 36` slots.
pub fn write_grid_faces(grid: &OccupancyGrid, build: &mut MeshBuild) {
    debug_assert_eq!(build.slot_count(), grid.volume() * SLOTS_PER_CELL);
    for z in 0..grid.sz {
        for y in 0..grid.sy {
            for x in 0..grid.sx {
                let cell_base = grid.idx(x, y, z) * SLOTS_PER_CELL;
                let origin = Vec3::new(
                    x as f32 * CELL_SIZE,
                    y as f32 * CELL_SIZE,
                    z as f32 * CELL_SIZE,
                );
                for fd in &FACES {
                    let visible = face_visible(grid, x, y, z, fd.face);
                    build.write_face(cell_base + fd.slot_offset(), origin, fd, visible);
                }
            }
        }
    }
}
