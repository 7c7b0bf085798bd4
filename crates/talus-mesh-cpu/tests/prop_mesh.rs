use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use talus_chunk::OccupancyGrid;
use talus_geom::Vec3;
use talus_mesh_cpu::{
    FACES, MeshBuild, SLOTS_PER_CELL, SLOTS_PER_FACE, build_chunk_mesh, write_grid_faces,
};
use talus_world::{ChunkDims, NoiseLayer};

fn dim() -> impl Strategy<Value = i32> {
    1i32..=5
}

fn layer() -> impl Strategy<Value = NoiseLayer> {
    (0.2f32..=5.0, 0.2f32..=1.0).prop_map(|(s, w)| NoiseLayer::new(s, w))
}

fn layers() -> impl Strategy<Value = Vec<NoiseLayer>> {
    proptest::collection::vec(layer(), 1..=3)
}

fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (dim(), dim(), dim()).prop_flat_map(|(sx, sy, sz)| {
        let (sx, sy, sz) = (sx as usize, sy as usize, sz as usize);
        proptest::collection::vec(any::<bool>(), sx * sy * sz).prop_map(move |cells| {
            let mut grid = OccupancyGrid::new(sx, sy, sz);
            let mut i = 0;
            for y in 0..sy {
                for z in 0..sz {
                    for x in 0..sx {
                        grid.set(x, y, z, cells[i]);
                        i += 1;
                    }
                }
            }
            grid
        })
    })
}

proptest! {
    // Buffer lengths are always volume * 36 slots, never resized
    #[test]
    fn buffer_length_law(sx in dim(), sy in dim(), sz in dim(), ls in layers(), seed in any::<u64>()) {
        let dims = ChunkDims::new(sx, sy, sz);
        let mut rng = StdRng::seed_from_u64(seed);
        let cpu = build_chunk_mesh(dims, &ls, &mut rng).unwrap();
        let slots = dims.checked_volume().unwrap() * SLOTS_PER_CELL;
        prop_assert_eq!(cpu.build.positions().len(), slots * 3);
        prop_assert_eq!(cpu.build.indices().len(), slots);
        prop_assert_eq!(cpu.build.uvs().len(), slots * 2);
        // Identity index invariant
        for (i, &ix) in cpu.build.indices().iter().enumerate() {
            prop_assert_eq!(ix as usize, i);
        }
        // Assembly accepts the lengths it produced
        prop_assert!(cpu.assemble().is_ok());
    }

    // Two builds from the same seed produce byte-identical buffers
    #[test]
    fn determinism_from_seed(sx in dim(), sy in dim(), sz in dim(), ls in layers(), seed in any::<u64>()) {
        let dims = ChunkDims::new(sx, sy, sz);
        let a = build_chunk_mesh(dims, &ls, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = build_chunk_mesh(dims, &ls, &mut StdRng::seed_from_u64(seed)).unwrap();
        let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(a.build.positions()), bits(b.build.positions()));
        prop_assert_eq!(a.build.indices(), b.build.indices());
        prop_assert_eq!(bits(a.build.uvs()), bits(b.build.uvs()));
        prop_assert_eq!(a.occupancy, b.occupancy);
    }

    // Every unoccupied cell's 36 reserved slots hold the zero sentinel
    // while its index sub-range stays sequential
    #[test]
    fn empty_cells_are_degenerate(grid in arb_grid()) {
        let mut build = MeshBuild::for_cells(grid.volume()).unwrap();
        write_grid_faces(&grid, &mut build);
        for z in 0..grid.sz {
            for y in 0..grid.sy {
                for x in 0..grid.sx {
                    if grid.get(x, y, z) {
                        continue;
                    }
                    let base = grid.idx(x, y, z) * SLOTS_PER_CELL;
                    for i in 0..SLOTS_PER_CELL {
                        prop_assert_eq!(build.position_at(base + i), Vec3::ZERO);
                        prop_assert_eq!(build.indices()[base + i] as usize, base + i);
                    }
                }
            }
        }
    }

    // Occupied boundary cells always show their outward faces; faces
    // shared between two occupied cells are degenerate on both sides
    #[test]
    fn boundary_and_shared_face_law(grid in arb_grid()) {
        let mut build = MeshBuild::for_cells(grid.volume()).unwrap();
        write_grid_faces(&grid, &mut build);
        let face_degenerate = |cell_base: usize, fd: &talus_mesh_cpu::FaceDescriptor| {
            (0..SLOTS_PER_FACE).all(|i| build.position_at(cell_base + fd.slot_offset() + i) == Vec3::ZERO)
        };
        for z in 0..grid.sz {
            for y in 0..grid.sy {
                for x in 0..grid.sx {
                    if !grid.get(x, y, z) {
                        continue;
                    }
                    let base = grid.idx(x, y, z) * SLOTS_PER_CELL;
                    for fd in &FACES {
                        let (dx, dy, dz) = fd.delta();
                        let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
                        if !grid.in_bounds(nx, ny, nz) {
                            // Chunk boundary face: always emitted.
                            prop_assert!(!face_degenerate(base, fd));
                        } else if grid.occupied(nx, ny, nz) {
                            // Shared interior face: hidden from this side.
                            prop_assert!(face_degenerate(base, fd));
                        } else {
                            prop_assert!(!face_degenerate(base, fd));
                        }
                    }
                }
            }
        }
    }
}
