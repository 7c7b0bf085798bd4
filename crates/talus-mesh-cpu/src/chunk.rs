use talus_chunk::ChunkOccupancy;
use talus_geom::Aabb;

use crate::constants::SLOTS_PER_CELL;
use crate::mesh_build::{MeshBuild, MeshError};
use crate::sink::{ColliderSink, MaterialBinding, MeshHandle, MeshSink};

/// Finished CPU-side chunk mesh: the three flat buffers plus chunk
/// metadata. Immutable after the build pipeline hands it off.
#[derive(Clone, Debug)]
pub struct ChunkMeshCPU {
    pub dims: (usize, usize, usize),
    pub bbox: Aabb,
    pub occupancy: ChunkOccupancy,
    pub build: MeshBuild,
}

impl ChunkMeshCPU {
    /// Slot count the buffers must carry for these dims.
    #[inline]
    pub fn expected_slots(&self) -> usize {
        let (sx, sy, sz) = self.dims;
        sx * sy * sz * SLOTS_PER_CELL
    }

    /// Confirms all three buffer lengths match the dims-derived slot
    /// count and returns the buffer views. No other validation happens
    /// at assembly.
    pub fn assemble(&self) -> Result<(&[f32], &[u32], &[f32]), MeshError> {
        let expected = self.expected_slots();
        let (pos, idx, uv) = (
            self.build.positions(),
            self.build.indices(),
            self.build.uvs(),
        );
        if pos.len() != expected * 3 || idx.len() != expected || uv.len() != expected * 2 {
            return Err(MeshError::BufferLengthMismatch {
                expected,
                pos: pos.len(),
                idx: idx.len(),
                uv: uv.len(),
            });
        }
        Ok((pos, idx, uv))
    }

    /// Assembles and uploads the buffers with the material to bind, then
    /// asks the handle to recompute normals, bounds, and tangents, in
    /// that order.
    pub fn attach<S: MeshSink>(
        &self,
        sink: &mut S,
        material: MaterialBinding,
    ) -> Result<S::Handle, MeshError> {
        let (pos, idx, uv) = self.assemble()?;
        let mut handle = sink.upload(pos, idx, uv, material);
        handle.recompute_normals();
        handle.recompute_bounds();
        handle.recompute_tangents();
        Ok(handle)
    }

    /// [`attach`](Self::attach) plus collision-body binding on the
    /// uploaded mesh.
    pub fn attach_with_collider<S, C>(
        &self,
        sink: &mut S,
        colliders: &mut C,
        material: MaterialBinding,
    ) -> Result<(S::Handle, C::Body), MeshError>
    where
        S: MeshSink,
        C: ColliderSink<S::Handle>,
    {
        let handle = self.attach(sink, material)?;
        let body = colliders.attach_collider(&handle);
        Ok((handle, body))
    }
}
