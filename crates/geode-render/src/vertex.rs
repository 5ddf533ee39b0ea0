//! Interleaved vertex data ready for GPU upload.

use geode_poly::GeodesicMesh;

/// A single sphere-mesh vertex: unit-sphere position plus
/// equirectangular UV, interleaved to 20 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
    /// Texture coordinate. `u` may be slightly negative on vertices the
    /// seam repair duplicated; samplers with wrap addressing handle it.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 20]);

/// An interleaved vertex buffer and triangle index buffer, directly
/// consumable as a triangle-list pair by a rendering backend.
pub struct GpuSphereMesh {
    /// Interleaved vertex buffer.
    pub vertices: Vec<SphereVertex>,
    /// Index buffer, three indices per triangle.
    pub indices: Vec<u32>,
}

impl GpuSphereMesh {
    /// Interleave a generated mesh's position and texcoord buffers.
    #[must_use]
    pub fn from_geodesic(mesh: &GeodesicMesh) -> Self {
        debug_assert_eq!(mesh.texcoords.len(), mesh.vertices.len());
        let vertices = mesh
            .vertices
            .iter()
            .zip(&mesh.texcoords)
            .map(|(p, uv)| SphereVertex {
                position: [p.x, p.y, p.z],
                uv: [uv.x, uv.y],
            })
            .collect();
        Self {
            vertices,
            indices: mesh.indices.clone(),
        }
    }

    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the size of the vertex buffer in bytes.
    #[must_use]
    pub fn vertex_buffer_bytes(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<SphereVertex>()
    }

    /// Returns the size of the index buffer in bytes.
    #[must_use]
    pub fn index_buffer_bytes(&self) -> usize {
        self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
