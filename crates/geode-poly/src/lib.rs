//! Geodesic sphere generation: polyhedral subdivision, equirectangular
//! UV projection, and texture-seam repair.

pub mod error;
pub mod mesh;
pub mod seam;
pub mod shape;
pub mod subdivide;
pub mod uv;

pub use error::MeshError;
pub use mesh::{GeodesicMesh, generate_sphere};
pub use seam::{SEAM_THRESHOLD, repair_seams};
pub use shape::BaseShape;
pub use subdivide::subdivide_once;
pub use uv::{equirect_uv, project_uvs};
