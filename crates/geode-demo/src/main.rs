//! Command-line driver that generates a geodesic sphere and reports
//! buffer statistics.
//!
//! Run with `cargo run -p geode-demo` for the defaults, or e.g.
//! `cargo run -p geode-demo -- --shape cube --subdivisions 6`.

use clap::{Parser, ValueEnum};
use geode_poly::{BaseShape, generate_sphere};
use geode_render::GpuSphereMesh;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Cube,
    Icosahedron,
}

impl From<ShapeArg> for BaseShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Cube => BaseShape::Cube,
            ShapeArg::Icosahedron => BaseShape::Icosahedron,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Generate a subdivided geodesic sphere mesh")]
struct Args {
    /// Base polyhedron to refine.
    #[arg(long, value_enum, default_value_t = ShapeArg::Icosahedron)]
    shape: ShapeArg,

    /// Number of subdivision rounds (0 = the base polyhedron).
    #[arg(long, default_value_t = 4)]
    subdivisions: u32,
}

fn main() {
    geode_log::init_logging();
    let args = Args::parse();

    let mesh = match generate_sphere(args.shape.into(), args.subdivisions) {
        Ok(mesh) => mesh,
        Err(err) => {
            error!("failed to generate mesh: {err}");
            std::process::exit(1);
        }
    };

    let gpu = GpuSphereMesh::from_geodesic(&mesh);
    info!(
        "GPU buffers ready: {} vertices ({} bytes interleaved), {} triangles ({} index bytes)",
        gpu.vertices.len(),
        gpu.vertex_buffer_bytes(),
        gpu.triangle_count(),
        gpu.index_buffer_bytes()
    );
}
