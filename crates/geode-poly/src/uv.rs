//! Equirectangular texture-coordinate projection.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::mesh::GeodesicMesh;
use crate::shape::BaseShape;

/// Texture coordinate for a unit-sphere position.
///
/// Longitude `u = 0.5 * (1 + atan2(y, x) / π)` covers `[0, 1]` with a
/// discontinuity at the `y = 0, x < 0` antimeridian; latitude `v` is the
/// shape's own formula. Poles (`x = y = 0`) land at `u = 0.5`, which is
/// simply what `atan2(0, 0)` yields.
#[must_use]
pub fn equirect_uv(shape: BaseShape, p: Vec3) -> Vec2 {
    let u = 0.5 * (1.0 + p.y.atan2(p.x) / PI);
    Vec2::new(u, shape.latitude(p.z))
}

/// Compute one texture coordinate per vertex, index-aligned with the
/// vertex buffer.
///
/// Purely per-vertex; requires the vertex buffer to be final (no further
/// refinement). Replaces any previously projected texcoords.
pub fn project_uvs(mesh: &mut GeodesicMesh) -> Result<(), MeshError> {
    let mut texcoords = Vec::new();
    texcoords.try_reserve_exact(mesh.vertices.len())?;
    let shape = mesh.shape;
    texcoords.extend(mesh.vertices.iter().map(|p| equirect_uv(shape, *p)));
    mesh.texcoords = texcoords;
    Ok(())
}
