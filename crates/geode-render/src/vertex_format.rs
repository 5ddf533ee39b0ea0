//! Canonical `wgpu::VertexBufferLayout` for sphere mesh rendering.
//!
//! Any pipeline drawing a [`GpuSphereMesh`](crate::GpuSphereMesh)
//! references [`SPHERE_VERTEX_LAYOUT`] to avoid layout drift bugs.
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x2 | uv       |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::vertex::SphereVertex;

/// Vertex attributes for the sphere mesh format.
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    // Attribute 0: unit-sphere position
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    // Attribute 1: equirectangular uv
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout for sphere mesh render pipelines.
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<SphereVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

/// Return the sphere vertex buffer layout as an owned value.
///
/// Equivalent to [`SPHERE_VERTEX_LAYOUT`] but convenient when a
/// `'static` lifetime is awkward to thread through.
pub fn sphere_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    SPHERE_VERTEX_LAYOUT
}

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

/// Stride must match `SphereVertex` size.
const _: () = assert!(
    mem::size_of::<SphereVertex>() == 20,
    "SphereVertex size changed — update SPHERE_VERTEX_LAYOUT"
);

/// Attribute offsets must be correct.
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[1].offset == 12);

/// Last attribute must fit within the stride.
const _: () = assert!(
    SPHERE_VERTEX_ATTRIBUTES[1].offset + 8 <= mem::size_of::<SphereVertex>() as u64,
    "Last attribute exceeds vertex stride"
);
