use talus_geom::{Vec2, Vec3};
use thiserror::Error;

use crate::constants::{CUBE_CORNERS, SLOTS_PER_CELL, SLOTS_PER_FACE};
use crate::face::{FaceDescriptor, UV_PATTERN};

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh buffer allocation failed for {cells} cells")]
    ResourceExhausted { cells: usize },
    #[error(
        "buffer length mismatch: expected {expected} slots, found pos {pos} / idx {idx} / uv {uv} entries"
    )]
    BufferLengthMismatch {
        expected: usize,
        pos: usize,
        idx: usize,
        uv: usize,
    },
}

/// Flat fixed-stride mesh buffers: 3 floats per slot in `pos`, 2 in `uv`,
/// one index per slot in `idx`. The index buffer is the identity sequence
/// (slot i indexes vertex i); the mesh is non-indexed triangle soup and
/// no vertex is shared between faces.
///
/// Every cell owns a reserved 36-slot range and each face a fixed 6-slot
/// sub-range inside it, regardless of occupancy or visibility. Hidden
/// faces keep their slots as zero-area degenerate triangles, trading
/// memory for O(1) `cell,face -> offset` addressing with no remap pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Allocates buffers for `cells` cells (36 slots each) up front, with
    /// indices prefilled as the identity sequence. Allocation failure or
    /// slot-count overflow reports `ResourceExhausted` before any write.
    pub fn for_cells(cells: usize) -> Result<Self, MeshError> {
        let exhausted = || MeshError::ResourceExhausted { cells };
        let slots = cells.checked_mul(SLOTS_PER_CELL).ok_or_else(exhausted)?;
        if slots > u32::MAX as usize {
            return Err(exhausted());
        }
        let pos_len = slots.checked_mul(3).ok_or_else(exhausted)?;
        let uv_len = slots.checked_mul(2).ok_or_else(exhausted)?;

        let mut pos: Vec<f32> = Vec::new();
        pos.try_reserve_exact(pos_len).map_err(|_| exhausted())?;
        pos.resize(pos_len, 0.0);

        let mut uv: Vec<f32> = Vec::new();
        uv.try_reserve_exact(uv_len).map_err(|_| exhausted())?;
        uv.resize(uv_len, 0.0);

        let mut idx: Vec<u32> = Vec::new();
        idx.try_reserve_exact(slots).map_err(|_| exhausted())?;
        idx.extend(0..slots as u32);

        Ok(Self { pos, uv, idx })
    }

    /// Number of vertex slots across all three buffers.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.idx.len()
    }

    /// Writes one face's 6 slots at `slot_base`. Visible faces get
    /// `origin + corner` positions from the descriptor's triangles;
    /// hidden faces get the zero-vector sentinel in all six, leaving a
    /// degenerate triangle pair. UVs come from the shared pattern either
    /// way; indices are never rewritten.
    pub fn write_face(
        &mut self,
        slot_base: usize,
        origin: Vec3,
        descriptor: &FaceDescriptor,
        visible: bool,
    ) {
        for i in 0..SLOTS_PER_FACE {
            let slot = slot_base + i;
            let p = if visible {
                origin + CUBE_CORNERS[descriptor.corners[i]]
            } else {
                Vec3::ZERO
            };
            self.pos[slot * 3] = p.x;
            self.pos[slot * 3 + 1] = p.y;
            self.pos[slot * 3 + 2] = p.z;
            let uv = UV_PATTERN[i];
            self.uv[slot * 2] = uv.x;
            self.uv[slot * 2 + 1] = uv.y;
        }
    }

    #[inline]
    pub fn position_at(&self, slot: usize) -> Vec3 {
        Vec3::new(
            self.pos[slot * 3],
            self.pos[slot * 3 + 1],
            self.pos[slot * 3 + 2],
        )
    }

    #[inline]
    pub fn uv_at(&self, slot: usize) -> Vec2 {
        Vec2::new(self.uv[slot * 2], self.uv[slot * 2 + 1])
    }

    /// Interleaved vertex positions (x,y,z per slot).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Triangle indices; always the identity sequence.
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    /// Interleaved texture coordinates (u,v per slot).
    pub fn uvs(&self) -> &[f32] {
        &self.uv
    }
}
