//! CPU meshing crate: fixed-slot face emission over an occupancy grid.
#![forbid(unsafe_code)]

pub mod build;
pub mod chunk;
pub mod constants;
pub mod cull;
pub mod face;
pub mod mesh_build;
pub mod sink;

pub use build::{BuildError, build_chunk_mesh, build_chunk_mesh_with_sampler, write_grid_faces};
pub use chunk::ChunkMeshCPU;
pub use constants::{CELL_SIZE, CUBE_CORNERS, SLOTS_PER_CELL, SLOTS_PER_FACE};
pub use cull::face_visible;
pub use face::{FACES, Face, FaceDescriptor, UV_PATTERN};
pub use mesh_build::{MeshBuild, MeshError};
pub use sink::{ColliderSink, MaterialBinding, MeshHandle, MeshSink};
