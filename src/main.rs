//! CLI shell: builds one terrain chunk and reports what the mesher made.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use talus_geom::{Aabb, Vec3};
use talus_mesh_cpu::{MaterialBinding, build_chunk_mesh};
use talus_world::TerrainConfig;

mod stats;

use stats::StatsSink;

#[derive(Parser, Debug)]
#[command(name = "talus", about = "Noise-driven terrain chunk mesher")]
struct Args {
    /// TOML terrain config; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the config's RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Override chunk extents.
    #[arg(long)]
    sx: Option<i32>,
    #[arg(long)]
    sy: Option<i32>,
    #[arg(long)]
    sz: Option<i32>,
    /// Material slot handed to the sink alongside the buffers.
    #[arg(long, default_value_t = 0)]
    material: u16,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => TerrainConfig::load_from_path(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(sx) = args.sx {
        cfg.dims.sx = sx;
    }
    if let Some(sy) = args.sy {
        cfg.dims.sy = sy;
    }
    if let Some(sz) = args.sz {
        cfg.dims.sz = sz;
    }

    log::info!(
        "building chunk {}x{}x{} with {} layer(s), seed {}",
        cfg.dims.sx,
        cfg.dims.sy,
        cfg.dims.sz,
        cfg.layers.len(),
        cfg.seed
    );

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let cpu = build_chunk_mesh(cfg.dims, &cfg.layers, &mut rng)?;

    let mut sink = StatsSink::default();
    let handle = cpu.attach(&mut sink, MaterialBinding(args.material))?;

    let (sx, sy, sz) = cpu.dims;
    println!("chunk {sx}x{sy}x{sz} ({})", describe(cpu.occupancy));
    println!(
        "  buffers: {} positions, {} indices, {} uvs",
        cpu.build.positions().len(),
        cpu.build.indices().len(),
        cpu.build.uvs().len()
    );
    println!(
        "  faces: {} visible of {} reserved ({} triangles)",
        handle.visible_faces(),
        sx * sy * sz * 6,
        handle.visible_faces() * 2
    );
    println!("  material: slot {}", handle.material().0);
    if let Some(bounds) = handle.bounds() {
        println!("  bounds: {}", fmt_aabb(bounds));
    }
    Ok(())
}

fn describe(occ: talus_chunk::ChunkOccupancy) -> &'static str {
    if occ.is_empty() { "empty" } else { "populated" }
}

fn fmt_aabb(bb: Aabb) -> String {
    let f = |v: Vec3| format!("({:.1}, {:.1}, {:.1})", v.x, v.y, v.z);
    format!("{} .. {}", f(bb.min), f(bb.max))
}
