//! Host-side sink that measures a chunk mesh instead of uploading it.

use talus_geom::{Aabb, Vec3};
use talus_mesh_cpu::{MaterialBinding, MeshHandle, MeshSink, SLOTS_PER_FACE};

/// A `MeshSink` that keeps the buffers it receives and derives summary
/// statistics on the recompute calls a real engine would service.
#[derive(Default)]
pub struct StatsSink;

pub struct StatsHandle {
    positions: Vec<f32>,
    visible_faces: usize,
    material: MaterialBinding,
    bounds: Option<Aabb>,
}

impl StatsHandle {
    /// Faces whose slot range holds any non-sentinel position.
    pub fn visible_faces(&self) -> usize {
        self.visible_faces
    }

    /// The material the caller asked to bind to the surface.
    pub fn material(&self) -> MaterialBinding {
        self.material
    }

    /// Bounds of the non-degenerate geometry, set by `recompute_bounds`.
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    fn position(&self, slot: usize) -> Vec3 {
        Vec3::new(
            self.positions[slot * 3],
            self.positions[slot * 3 + 1],
            self.positions[slot * 3 + 2],
        )
    }
}

impl MeshSink for StatsSink {
    type Handle = StatsHandle;

    fn upload(
        &mut self,
        positions: &[f32],
        indices: &[u32],
        _uvs: &[f32],
        material: MaterialBinding,
    ) -> StatsHandle {
        let slots = indices.len();
        let mut visible = 0usize;
        let mut face = 0;
        while face * SLOTS_PER_FACE < slots {
            let base = face * SLOTS_PER_FACE;
            let any_solid = (0..SLOTS_PER_FACE).any(|i| {
                let s = base + i;
                positions[s * 3] != 0.0 || positions[s * 3 + 1] != 0.0 || positions[s * 3 + 2] != 0.0
            });
            if any_solid {
                visible += 1;
            }
            face += 1;
        }
        StatsHandle {
            positions: positions.to_vec(),
            visible_faces: visible,
            material,
            bounds: None,
        }
    }
}

impl MeshHandle for StatsHandle {
    fn recompute_normals(&mut self) {
        // Normals are per-face constants here; nothing to derive for stats.
    }

    fn recompute_bounds(&mut self) {
        let slots = self.positions.len() / 3;
        let mut bounds: Option<Aabb> = None;
        for slot in 0..slots {
            let p = self.position(slot);
            if p == Vec3::ZERO {
                continue;
            }
            bounds = Some(match bounds {
                None => Aabb::new(p, p),
                Some(bb) => Aabb::new(
                    Vec3::new(bb.min.x.min(p.x), bb.min.y.min(p.y), bb.min.z.min(p.z)),
                    Vec3::new(bb.max.x.max(p.x), bb.max.y.max(p.y), bb.max.z.max(p.z)),
                ),
            });
        }
        self.bounds = bounds;
    }

    fn recompute_tangents(&mut self) {}
}
