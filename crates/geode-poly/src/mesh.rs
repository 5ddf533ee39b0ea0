//! The geodesic mesh handle and its construction pipeline.

use glam::{Vec2, Vec3};
use tracing::{debug, info};

use crate::error::MeshError;
use crate::seam::repair_seams;
use crate::shape::BaseShape;
use crate::subdivide::{plan_counts, subdivide_once};
use crate::uv::project_uvs;

/// A subdivided polyhedral sphere with per-vertex texture coordinates.
///
/// All three buffers are owned by the mesh and live and die together;
/// dropping the mesh releases everything. Vertex indices handed out
/// during construction stay valid for the mesh's lifetime: the buffers
/// only ever grow, and existing entries are never reordered.
#[derive(Clone, Debug, PartialEq)]
pub struct GeodesicMesh {
    /// Which base polyhedron this mesh was refined from.
    pub shape: BaseShape,
    /// Vertex positions on the unit sphere.
    pub vertices: Vec<Vec3>,
    /// Equirectangular texture coordinates, index-aligned with
    /// `vertices`. Empty until UV projection runs.
    pub texcoords: Vec<Vec2>,
    /// Triangle indices, three per triangle, winding preserved from the
    /// base table.
    pub indices: Vec<u32>,
}

impl GeodesicMesh {
    /// The unrefined base polyhedron, vertices normalized onto the unit
    /// sphere, texcoords not yet projected.
    #[must_use]
    pub fn base(shape: BaseShape) -> Self {
        let mut vertices = shape.base_vertices().to_vec();
        for v in &mut vertices {
            *v = v.normalize();
        }
        Self {
            shape,
            vertices,
            texcoords: Vec::new(),
            indices: shape.base_indices().to_vec(),
        }
    }

    /// Number of vertex slots (positions; texcoords once projected).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build a complete geodesic sphere mesh.
///
/// Runs the whole pipeline: base table, `subdivisions` refinement
/// rounds, UV projection, seam repair. `subdivisions = 0` yields the
/// base polyhedron itself (plus whatever vertices seam repair
/// duplicates). Any storage failure at any stage aborts the build and
/// returns the error; partially built buffers are simply dropped.
pub fn generate_sphere(shape: BaseShape, subdivisions: u32) -> Result<GeodesicMesh, MeshError> {
    let (planned_vertices, planned_indices) = plan_counts(shape, subdivisions)?;

    let mut mesh = GeodesicMesh::base(shape);
    for round in 1..=subdivisions {
        subdivide_once(&mut mesh)?;
        debug!(
            "round {}/{}: {} vertices, {} triangles",
            round,
            subdivisions,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }
    debug_assert_eq!(mesh.vertex_count(), planned_vertices);
    debug_assert_eq!(mesh.indices.len(), planned_indices);

    project_uvs(&mut mesh)?;
    let duplicated = repair_seams(&mut mesh)?;

    info!(
        "Generated {:?} sphere at {} subdivisions: {} vertices, {} triangles, {} seam duplicates",
        shape,
        subdivisions,
        mesh.vertex_count(),
        mesh.triangle_count(),
        duplicated
    );
    Ok(mesh)
}
