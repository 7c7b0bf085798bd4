//! Boundary traits for the host engine. The core never constructs
//! engine-native mesh or collider objects; it hands finished buffers to
//! these seams and asks the handle to recompute derived data.

/// Opaque mesh handle returned by a [`MeshSink`]. Normals, bounds, and
/// tangents are derived by the host geometry library, not by this crate.
pub trait MeshHandle {
    fn recompute_normals(&mut self);
    fn recompute_bounds(&mut self);
    fn recompute_tangents(&mut self);
}

/// Accepts assembled position/index/uv buffers plus the material to bind
/// to the rendered surface, and produces a mesh handle.
pub trait MeshSink {
    type Handle: MeshHandle;

    fn upload(
        &mut self,
        positions: &[f32],
        indices: &[u32],
        uvs: &[f32],
        material: MaterialBinding,
    ) -> Self::Handle;
}

/// Binds a collision body to an uploaded mesh.
pub trait ColliderSink<H: MeshHandle> {
    type Body;

    fn attach_collider(&mut self, mesh: &H) -> Self::Body;
}

/// Opaque render-material reference. Attached to the rendering surface by
/// sink implementations; irrelevant to buffer correctness.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct MaterialBinding(pub u16);
