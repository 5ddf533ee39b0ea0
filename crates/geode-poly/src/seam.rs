//! Texture-seam repair for the longitude wraparound.
//!
//! Longitude `u` wraps from ~1 back to ~0 at the antimeridian. A triangle
//! whose vertices straddle that line would interpolate across almost the
//! whole texture width instead of across the thin seam, smearing the
//! texture. The repair pass duplicates the offending vertices with their
//! `u` shifted one full texture width down, so seam triangles interpolate
//! across the boundary while every other triangle keeps the original
//! vertex untouched.

use glam::Vec2;

use crate::error::MeshError;
use crate::mesh::GeodesicMesh;

/// Edge `|Δu|` above which an edge is judged to cross the seam.
///
/// Chosen to sit above any legitimate per-edge longitude delta the
/// supported meshes produce, and below a genuine wraparound delta, which
/// approaches 1.0.
pub const SEAM_THRESHOLD: f32 = 0.64;

/// Repair every seam-crossing edge in the mesh; returns the number of
/// vertices duplicated.
///
/// Each triangle's edges are checked in fixed order (1–2, 1–3, 2–3)
/// against the live index buffer, so a fix applied by an earlier edge is
/// visible to the later ones. A crossing edge is resolved by duplicating
/// the higher-`u` endpoint's position into a new vertex slot, assigning
/// the duplicate `u' = u - 1` with the same `v`, and repointing only this
/// triangle's index at it. Up to three duplications per triangle can
/// occur where a fan converges near a pole.
///
/// Vertex and texcoord buffers grow one point per duplication; capacity
/// grows in amortized batches but the logical lengths are accurate after
/// every append, so index computation inside the pass stays consistent.
pub fn repair_seams(mesh: &mut GeodesicMesh) -> Result<usize, MeshError> {
    debug_assert_eq!(mesh.texcoords.len(), mesh.vertices.len());

    let mut duplicated = 0usize;
    for tri in 0..mesh.indices.len() / 3 {
        let base = tri * 3;
        for (ea, eb) in [(0, 1), (0, 2), (1, 2)] {
            let ia = mesh.indices[base + ea] as usize;
            let ib = mesh.indices[base + eb] as usize;
            let ua = mesh.texcoords[ia].x;
            let ub = mesh.texcoords[ib].x;
            if (ua - ub).abs() <= SEAM_THRESHOLD {
                continue;
            }

            let (slot, high) = if ua > ub { (base + ea, ia) } else { (base + eb, ib) };
            let fresh = u32::try_from(mesh.vertices.len())
                .map_err(|_| MeshError::CapacityOverflow)?;
            mesh.vertices.try_reserve(1)?;
            mesh.texcoords.try_reserve(1)?;
            let position = mesh.vertices[high];
            let uv = mesh.texcoords[high];
            mesh.vertices.push(position);
            mesh.texcoords.push(Vec2::new(uv.x - 1.0, uv.y));
            mesh.indices[slot] = fresh;
            duplicated += 1;
        }
    }
    Ok(duplicated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::BaseShape;
    use crate::subdivide::subdivide_once;
    use crate::uv::project_uvs;
    use glam::Vec3;

    fn built(shape: BaseShape, rounds: u32) -> GeodesicMesh {
        let mut mesh = GeodesicMesh::base(shape);
        for _ in 0..rounds {
            subdivide_once(&mut mesh).unwrap();
        }
        project_uvs(&mut mesh).unwrap();
        mesh
    }

    #[test]
    fn test_no_triangle_straddles_seam_after_repair() {
        // Unrefined base triangles span up to half the texture width on
        // their own, so the threshold property only becomes meaningful
        // once at least one refinement round has run.
        for shape in BaseShape::ALL {
            for rounds in 1..=4 {
                let mut mesh = built(shape, rounds);
                repair_seams(&mut mesh).unwrap();
                for tri in mesh.indices.chunks_exact(3) {
                    let u: Vec<f32> = tri
                        .iter()
                        .map(|&i| mesh.texcoords[i as usize].x)
                        .collect();
                    let spread = [(0, 1), (0, 2), (1, 2)]
                        .iter()
                        .map(|&(a, b)| (u[a] - u[b]).abs())
                        .fold(0.0f32, f32::max);
                    assert!(
                        spread <= SEAM_THRESHOLD,
                        "{shape:?} at {rounds} rounds: triangle {tri:?} still spans Δu = {spread}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_base_icosahedron_duplicates_are_stable() {
        let mut mesh = built(BaseShape::Icosahedron, 0);
        let duplicated = repair_seams(&mut mesh).unwrap();
        // Four single-edge crossings plus the one two-edge triangle at
        // the antimeridian, with these base tables.
        assert_eq!(duplicated, 6);
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_duplicates_copy_position_and_shift_u() {
        let mut mesh = built(BaseShape::Icosahedron, 0);
        let originals = mesh.vertex_count();
        repair_seams(&mut mesh).unwrap();
        for dup in originals..mesh.vertex_count() {
            let twin = (0..originals)
                .find(|&i| mesh.vertices[i] == mesh.vertices[dup])
                .expect("every duplicate must copy an original position");
            assert_eq!(mesh.texcoords[twin].x - mesh.texcoords[dup].x, 1.0);
            assert_eq!(mesh.texcoords[twin].y, mesh.texcoords[dup].y);
        }
    }

    #[test]
    fn test_repair_leaves_calm_mesh_untouched() {
        let mut mesh = GeodesicMesh {
            shape: BaseShape::Icosahedron,
            vertices: vec![Vec3::X, Vec3::Y, Vec3::Z],
            texcoords: vec![
                Vec2::new(0.40, 0.5),
                Vec2::new(0.50, 0.5),
                Vec2::new(0.60, 0.5),
            ],
            indices: vec![0, 1, 2],
        };
        let duplicated = repair_seams(&mut mesh).unwrap();
        assert_eq!(duplicated, 0);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_crossing_edge_repoints_single_triangle() {
        // Two triangles share vertex 0; only the first crosses the seam.
        let mut mesh = GeodesicMesh {
            shape: BaseShape::Icosahedron,
            vertices: vec![Vec3::NEG_X, Vec3::Y, Vec3::Z, Vec3::X, Vec3::NEG_Y],
            texcoords: vec![
                Vec2::new(0.98, 0.5),
                Vec2::new(0.05, 0.5),
                Vec2::new(0.10, 0.4),
                Vec2::new(0.90, 0.5),
                Vec2::new(0.95, 0.6),
            ],
            indices: vec![0, 1, 2, 0, 3, 4],
        };
        let duplicated = repair_seams(&mut mesh).unwrap();
        assert_eq!(duplicated, 1);
        // The crossing triangle no longer points at vertex 0, the calm
        // triangle still does, and the original UV is untouched.
        assert_ne!(mesh.indices[0], 0);
        assert_eq!(mesh.indices[3], 0);
        assert_eq!(mesh.texcoords[0], Vec2::new(0.98, 0.5));
        let dup = mesh.indices[0] as usize;
        assert_eq!(mesh.vertices[dup], Vec3::NEG_X);
        assert!((mesh.texcoords[dup].x - (0.98 - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_texcoords_stay_aligned_after_repair() {
        for shape in BaseShape::ALL {
            let mut mesh = built(shape, 2);
            repair_seams(&mut mesh).unwrap();
            assert_eq!(mesh.texcoords.len(), mesh.vertices.len());
            let n = mesh.vertex_count() as u32;
            for &idx in &mesh.indices {
                assert!(idx < n);
            }
        }
    }
}
