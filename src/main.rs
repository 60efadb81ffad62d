use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use riverseed_world::{RiverGenParams, load_params_from_path};

mod plan;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One log line per tile
    Log,
    /// Full report as TOML on stdout
    Toml,
}

#[derive(Parser, Debug)]
#[command(name = "riverseed", about = "Place river sources and partners across a grid of tiles")]
struct Args {
    /// River config (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the world seed from the config
    #[arg(long)]
    seed: Option<i64>,
    #[arg(long, default_value_t = 4)]
    tiles_x: i32,
    #[arg(long, default_value_t = 4)]
    tiles_z: i32,
    #[arg(long, value_enum, default_value_t = Format::Log)]
    format: Format,
    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => {
            let params = load_params_from_path(path)?;
            log::info!("river config loaded from {}", path.display());
            params
        }
        None => RiverGenParams::default(),
    };
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    log::info!(
        "planning {}x{} tiles of {} (padding {}), seed={} rng={:?}",
        args.tiles_x,
        args.tiles_z,
        params.tile_size,
        params.padding,
        params.seed,
        params.rng
    );
    let report = plan::plan_grid(&params, args.tiles_x, args.tiles_z)?;

    match args.format {
        Format::Log => {
            for tile in &report.tiles {
                match (tile.source, tile.partner) {
                    (Some(s), Some(p)) => log::info!(
                        "tile ({}, {}): {:?} ({}, {}) -> {:?} ({}, {})",
                        tile.tile_x, tile.tile_z, s.kind, s.x, s.z, p.kind, p.x, p.z
                    ),
                    (Some(s), None) => log::info!(
                        "tile ({}, {}): {:?} ({}, {}) without partner",
                        tile.tile_x, tile.tile_z, s.kind, s.x, s.z
                    ),
                    _ => log::info!("tile ({}, {}): nothing placed", tile.tile_x, tile.tile_z),
                }
            }
        }
        Format::Toml => println!("{}", toml::to_string(&report)?),
    }
    let (sources, partners) = report.placed();
    log::info!(
        "placed {} source(s) and {} partner(s) over {} tile(s)",
        sources,
        partners,
        report.tiles.len()
    );
    Ok(())
}
