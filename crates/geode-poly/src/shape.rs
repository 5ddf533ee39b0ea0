//! The two base polyhedra a geodesic sphere can be refined from.

use std::f32::consts::{PI, SQRT_2};

use glam::Vec3;

/// Golden ratio, `(1 + sqrt(5)) / 2`.
const PHI: f32 = 1.618_034;

/// Icosahedron corners `(0, ±1, ±φ), (±1, ±φ, 0), (±φ, 0, ±1)`.
///
/// All twelve lie at distance `sqrt(1 + φ²)` from the origin, so they
/// project onto the unit sphere by plain normalization.
const ICOSAHEDRON_VERTICES: [Vec3; 12] = [
    Vec3::new(0.0, 1.0, PHI),
    Vec3::new(0.0, 1.0, -PHI),
    Vec3::new(0.0, -1.0, PHI),
    Vec3::new(0.0, -1.0, -PHI),
    Vec3::new(1.0, PHI, 0.0),
    Vec3::new(1.0, -PHI, 0.0),
    Vec3::new(-1.0, PHI, 0.0),
    Vec3::new(-1.0, -PHI, 0.0),
    Vec3::new(PHI, 0.0, 1.0),
    Vec3::new(PHI, 0.0, -1.0),
    Vec3::new(-PHI, 0.0, 1.0),
    Vec3::new(-PHI, 0.0, -1.0),
];

/// The icosahedron's 20 faces.
const ICOSAHEDRON_INDICES: [u32; 60] = [
    0, 2, 8, 0, 2, 10, 0, 4, 6, 0, 4, 8, 0, 6, 10, //
    1, 3, 9, 1, 3, 11, 1, 4, 6, 1, 4, 9, 1, 6, 11, //
    2, 5, 7, 2, 5, 8, 2, 7, 10, 3, 5, 7, 3, 5, 9, //
    3, 7, 11, 4, 8, 9, 5, 8, 9, 6, 10, 11, 7, 10, 11,
];

/// Cube corners `(±1, ±1, ±1)`, all at distance `sqrt(3)`.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Two triangles per cube face, wound counter-clockwise seen from outside.
const CUBE_INDICES: [u32; 36] = [
    4, 5, 7, 5, 6, 7, // +Z
    0, 3, 1, 3, 2, 1, // -Z
    1, 2, 6, 1, 6, 5, // +X
    0, 4, 7, 0, 7, 3, // -X
    2, 3, 7, 2, 7, 6, // +Y
    0, 1, 5, 0, 5, 4, // -Y
];

/// Selects which base polyhedron a geodesic sphere is refined from.
///
/// The shape fixes two things for the whole construction: the base
/// vertex/index tables, and the latitude formula used when projecting
/// texture coordinates. The refinement and seam-repair machinery is
/// shape-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseShape {
    /// Corner cube, 8 vertices and 12 triangles.
    Cube,
    /// Regular icosahedron, 12 vertices and 20 triangles.
    Icosahedron,
}

impl BaseShape {
    /// Both supported base shapes.
    pub const ALL: [BaseShape; 2] = [BaseShape::Cube, BaseShape::Icosahedron];

    /// The unnormalized base vertex table for this shape.
    #[must_use]
    pub fn base_vertices(self) -> &'static [Vec3] {
        match self {
            BaseShape::Cube => &CUBE_VERTICES,
            BaseShape::Icosahedron => &ICOSAHEDRON_VERTICES,
        }
    }

    /// The base triangle index table for this shape.
    #[must_use]
    pub fn base_indices(self) -> &'static [u32] {
        match self {
            BaseShape::Cube => &CUBE_INDICES,
            BaseShape::Icosahedron => &ICOSAHEDRON_INDICES,
        }
    }

    /// Texture-space latitude for a unit-sphere `z` coordinate.
    ///
    /// `z` is clamped to `[-1, 1]` first so that normalization round-off
    /// cannot push `asin` out of its domain.
    #[must_use]
    pub fn latitude(self, z: f32) -> f32 {
        let z = z.clamp(-1.0, 1.0);
        match self {
            BaseShape::Cube => 0.5 * (1.0 - z * SQRT_2),
            BaseShape::Icosahedron => 0.5 * (1.0 - 2.0 * z.asin() / PI),
        }
    }
}
