use rand::SeedableRng;
use rand::rngs::StdRng;
use talus_chunk::ChunkOccupancy;
use talus_geom::{Aabb, Vec3};
use talus_mesh_cpu::{
    ColliderSink, MaterialBinding, MeshBuild, MeshError, MeshSink, MeshHandle, build_chunk_mesh,
};
use talus_world::{ChunkDims, NoiseLayer};

/// Records the upload and the recompute call order.
#[derive(Default)]
struct RecordingSink {
    uploads: usize,
}

struct RecordingHandle {
    positions: Vec<f32>,
    indices: Vec<u32>,
    uvs: Vec<f32>,
    material: MaterialBinding,
    calls: Vec<&'static str>,
}

impl MeshHandle for RecordingHandle {
    fn recompute_normals(&mut self) {
        self.calls.push("normals");
    }
    fn recompute_bounds(&mut self) {
        self.calls.push("bounds");
    }
    fn recompute_tangents(&mut self) {
        self.calls.push("tangents");
    }
}

impl MeshSink for RecordingSink {
    type Handle = RecordingHandle;

    fn upload(
        &mut self,
        positions: &[f32],
        indices: &[u32],
        uvs: &[f32],
        material: MaterialBinding,
    ) -> Self::Handle {
        self.uploads += 1;
        RecordingHandle {
            positions: positions.to_vec(),
            indices: indices.to_vec(),
            uvs: uvs.to_vec(),
            material,
            calls: Vec::new(),
        }
    }
}

struct CountingColliders {
    bodies: usize,
}

impl ColliderSink<RecordingHandle> for CountingColliders {
    type Body = usize;

    fn attach_collider(&mut self, mesh: &RecordingHandle) -> usize {
        assert!(!mesh.indices.is_empty());
        self.bodies += 1;
        self.bodies
    }
}

fn build_small() -> talus_mesh_cpu::ChunkMeshCPU {
    let layers = [NoiseLayer::new(1.5, 0.9)];
    let mut rng = StdRng::seed_from_u64(3);
    build_chunk_mesh(ChunkDims::new(2, 2, 2), &layers, &mut rng).unwrap()
}

#[test]
fn attach_uploads_then_recomputes_in_order() {
    let cpu = build_small();
    let mut sink = RecordingSink::default();
    let handle = cpu.attach(&mut sink, MaterialBinding(7)).unwrap();
    assert_eq!(sink.uploads, 1);
    assert_eq!(handle.material, MaterialBinding(7));
    assert_eq!(handle.calls, vec!["normals", "bounds", "tangents"]);
    assert_eq!(handle.positions.len(), cpu.build.positions().len());
    assert_eq!(handle.indices.len(), cpu.build.indices().len());
    assert_eq!(handle.uvs.len(), cpu.build.uvs().len());
}

#[test]
fn attach_with_collider_binds_a_body() {
    let cpu = build_small();
    let mut sink = RecordingSink::default();
    let mut colliders = CountingColliders { bodies: 0 };
    let (handle, body) = cpu
        .attach_with_collider(&mut sink, &mut colliders, MaterialBinding::default())
        .unwrap();
    assert_eq!(body, 1);
    assert_eq!(handle.calls, vec!["normals", "bounds", "tangents"]);
}

#[test]
fn assemble_rejects_mismatched_buffers() {
    // Hand-build a chunk whose dims disagree with its buffers; no upload
    // may happen.
    let cpu = talus_mesh_cpu::ChunkMeshCPU {
        dims: (2, 2, 2),
        bbox: Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0)),
        occupancy: ChunkOccupancy::Empty,
        build: MeshBuild::for_cells(1).unwrap(),
    };
    match cpu.assemble() {
        Err(MeshError::BufferLengthMismatch { expected, .. }) => {
            assert_eq!(expected, 8 * 36);
        }
        other => panic!("expected BufferLengthMismatch, got {other:?}"),
    }
    let mut sink = RecordingSink::default();
    assert!(cpu.attach(&mut sink, MaterialBinding::default()).is_err());
    assert_eq!(sink.uploads, 0);
}
