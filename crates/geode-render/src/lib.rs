//! GPU-ready packing for generated geodesic sphere meshes: interleaved
//! vertex data and the canonical vertex buffer layout.

pub mod vertex;
pub mod vertex_format;

pub use vertex::{GpuSphereMesh, SphereVertex};
pub use vertex_format::{
    SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT, sphere_vertex_buffer_layout,
};
