//! Triangle mesh refinement: each round splits every triangle into four.

use glam::Vec3;

use crate::error::MeshError;
use crate::mesh::GeodesicMesh;
use crate::shape::BaseShape;

/// Final vertex and index counts after `rounds` refinement rounds.
///
/// Each round quadruples the triangle count and appends three midpoint
/// vertices per pre-round triangle, so the totals are closed-form. All
/// arithmetic is overflow-checked, and the final vertex count must fit
/// the `u32` index width; an excessive depth fails here before any
/// buffer is touched.
pub(crate) fn plan_counts(shape: BaseShape, rounds: u32) -> Result<(usize, usize), MeshError> {
    let base_vertices = shape.base_vertices().len();
    let base_triangles = shape.base_indices().len() / 3;

    let growth = 4usize
        .checked_pow(rounds)
        .ok_or(MeshError::CapacityOverflow)?;
    let triangles = base_triangles
        .checked_mul(growth)
        .ok_or(MeshError::CapacityOverflow)?;
    let indices = triangles.checked_mul(3).ok_or(MeshError::CapacityOverflow)?;
    let vertices = base_vertices
        .checked_add(triangles - base_triangles)
        .ok_or(MeshError::CapacityOverflow)?;
    if vertices > u32::MAX as usize {
        return Err(MeshError::CapacityOverflow);
    }
    Ok((vertices, indices))
}

/// Perform one refinement round in place.
///
/// Every triangle `(i1, i2, i3)` is replaced by four children
/// `(i1, m12, m31), (i2, m23, m12), (i3, m31, m23), (m12, m23, m31)`,
/// where the edge midpoints are appended as three new vertices per
/// triangle. Midpoints are intentionally not shared between adjacent
/// triangles: every shared edge yields two numerically near-identical
/// vertices, one per side, which is what later lets the seam pass assign
/// them different corrected texture coordinates. Winding follows the
/// parent triangle.
///
/// Both buffers are grown to their final post-round size in one step
/// before any triangle is processed; a refused reservation aborts the
/// round with the mesh's triangle list intact.
pub fn subdivide_once(mesh: &mut GeodesicMesh) -> Result<(), MeshError> {
    let triangles = mesh.indices.len() / 3;
    let added_vertices = triangles.checked_mul(3).ok_or(MeshError::CapacityOverflow)?;
    let vertex_total = mesh
        .vertices
        .len()
        .checked_add(added_vertices)
        .ok_or(MeshError::CapacityOverflow)?;
    let index_total = mesh
        .indices
        .len()
        .checked_mul(4)
        .ok_or(MeshError::CapacityOverflow)?;
    if vertex_total > u32::MAX as usize {
        return Err(MeshError::CapacityOverflow);
    }

    mesh.vertices.try_reserve_exact(added_vertices)?;
    let mut refined = Vec::new();
    refined.try_reserve_exact(index_total)?;

    let shape = mesh.shape;
    let coarse = std::mem::take(&mut mesh.indices);
    for tri in coarse.chunks_exact(3) {
        let (i1, i2, i3) = (tri[0], tri[1], tri[2]);
        let v1 = mesh.vertices[i1 as usize];
        let v2 = mesh.vertices[i2 as usize];
        let v3 = mesh.vertices[i3 as usize];

        let midpoint = |a: Vec3, b: Vec3| match shape {
            BaseShape::Icosahedron => sphere_midpoint(a, b),
            BaseShape::Cube => face_midpoint(a, b, dominant_axis(v1 + v2 + v3)),
        };
        let m12 = push_vertex(&mut mesh.vertices, midpoint(v1, v2));
        let m23 = push_vertex(&mut mesh.vertices, midpoint(v2, v3));
        let m31 = push_vertex(&mut mesh.vertices, midpoint(v3, v1));

        refined.extend_from_slice(&[
            i1, m12, m31, //
            i2, m23, m12, //
            i3, m31, m23, //
            m12, m23, m31,
        ]);
    }
    mesh.indices = refined;
    Ok(())
}

fn push_vertex(vertices: &mut Vec<Vec3>, p: Vec3) -> u32 {
    let index = vertices.len() as u32;
    vertices.push(p);
    index
}

/// Spherical edge midpoint: endpoint sum pushed out to the unit sphere.
fn sphere_midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b).normalize()
}

/// Cube-family edge midpoint.
///
/// The two coordinates lying in the face plane are averaged; the
/// face-axis coordinate is carried over from the first endpoint (both
/// endpoints share it on an axis-aligned face), and the result is then
/// pushed out to the unit sphere.
fn face_midpoint(a: Vec3, b: Vec3, axis: usize) -> Vec3 {
    let mut mid = 0.5 * (a + b);
    match axis {
        0 => mid.x = a.x,
        1 => mid.y = a.y,
        _ => mid.z = a.z,
    }
    mid.normalize()
}

/// Axis (0, 1, 2) of the largest-magnitude component: which cube face a
/// triangle centroid points at.
fn dominant_axis(v: Vec3) -> usize {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax >= ay && ax >= az {
        0
    } else if ay >= az {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_one_round_quadruples_triangles_and_triples_vertices() {
        let mut mesh = GeodesicMesh::base(BaseShape::Icosahedron);
        subdivide_once(&mut mesh).unwrap();
        assert_eq!(mesh.triangle_count(), 80);
        // 12 base vertices + 3 midpoints per base triangle, no sharing.
        assert_eq!(mesh.vertex_count(), 12 + 20 * 3);
    }

    #[test]
    fn test_rounds_compound() {
        let mut mesh = GeodesicMesh::base(BaseShape::Icosahedron);
        subdivide_once(&mut mesh).unwrap();
        subdivide_once(&mut mesh).unwrap();
        assert_eq!(mesh.triangle_count(), 320);
        assert_eq!(mesh.vertex_count(), 72 + 80 * 3);
    }

    #[test]
    fn test_vertices_stay_on_unit_sphere() {
        for shape in BaseShape::ALL {
            let mut mesh = GeodesicMesh::base(shape);
            for _ in 0..3 {
                subdivide_once(&mut mesh).unwrap();
            }
            for v in &mesh.vertices {
                assert!(
                    (v.length() - 1.0).abs() < EPSILON,
                    "Vertex {v:?} of {shape:?} drifted off the unit sphere"
                );
            }
        }
    }

    #[test]
    fn test_indices_valid_after_refinement() {
        for shape in BaseShape::ALL {
            let mut mesh = GeodesicMesh::base(shape);
            for _ in 0..2 {
                subdivide_once(&mut mesh).unwrap();
            }
            assert_eq!(mesh.indices.len() % 3, 0);
            let n = mesh.vertex_count() as u32;
            for &idx in &mesh.indices {
                assert!(idx < n, "Index {idx} out of bounds (vertex count = {n})");
            }
        }
    }

    #[test]
    fn test_cube_winding_preserved_through_refinement() {
        let mut mesh = GeodesicMesh::base(BaseShape::Cube);
        for _ in 0..2 {
            subdivide_once(&mut mesh).unwrap();
        }
        for tri in mesh.indices.chunks_exact(3) {
            let a = mesh.vertices[tri[0] as usize];
            let b = mesh.vertices[tri[1] as usize];
            let c = mesh.vertices[tri[2] as usize];
            assert!(
                (b - a).cross(c - b).dot(a + b + c) > 0.0,
                "Refined cube triangle {tri:?} lost its outward winding"
            );
        }
    }

    #[test]
    fn test_cube_face_centers_land_on_axis_poles() {
        let mut mesh = GeodesicMesh::base(BaseShape::Cube);
        subdivide_once(&mut mesh).unwrap();
        // The diagonal midpoint of each face is the face center, which
        // normalizes onto the face's axis.
        for pole in [Vec3::Z, Vec3::NEG_Z, Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y] {
            assert!(
                mesh.vertices.iter().any(|v| (*v - pole).length() < EPSILON),
                "Expected a refined cube vertex at {pole:?}"
            );
        }
    }

    #[test]
    fn test_plan_counts_matches_refinement() {
        for shape in BaseShape::ALL {
            let (vertices, indices) = plan_counts(shape, 2).unwrap();
            let mut mesh = GeodesicMesh::base(shape);
            subdivide_once(&mut mesh).unwrap();
            subdivide_once(&mut mesh).unwrap();
            assert_eq!(mesh.vertex_count(), vertices);
            assert_eq!(mesh.indices.len(), indices);
        }
    }

    #[test]
    fn test_plan_counts_zero_rounds_is_base() {
        let (vertices, indices) = plan_counts(BaseShape::Icosahedron, 0).unwrap();
        assert_eq!(vertices, 12);
        assert_eq!(indices, 60);
    }

    #[test]
    fn test_plan_counts_rejects_excessive_depth() {
        assert!(plan_counts(BaseShape::Icosahedron, 4096).is_err());
        assert!(plan_counts(BaseShape::Cube, 64).is_err());
    }
}
