use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use wall_map::planning::FreeSpaceSampler;
use wall_map::{MapConfig, Pose, WallMap};

#[derive(Parser, Debug)]
#[command(version, about = "Print a simulated laser scan and free points of a wall map", long_about = None)]
struct CliArgs {
    /// File path to the map description (e.g., "demos/maps/arena.json")
    #[arg(default_value = "demos/maps/arena.json")]
    map: String,

    /// Robot x position in metres
    #[arg(long, default_value_t = 0.561945)]
    x: f64,

    /// Robot y position in metres
    #[arg(long, default_value_t = 0.509381)]
    y: f64,

    /// Robot heading in radians
    #[arg(long, default_value_t = 0.039069)]
    heading: f64,

    /// Number of laser beams in the scan
    #[arg(long, default_value_t = 8)]
    beams: usize,

    /// Number of free points to sample
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Seed for the random generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let cli = CliArgs::parse();

    let map = match WallMap::<f64>::from_file(&cli.map, MapConfig::default()) {
        Ok(map) => Arc::new(map),
        Err(err) => {
            eprintln!("Failed to load {}: {err}", cli.map);
            std::process::exit(1);
        }
    };
    println!("Loaded {} walls:\n{map}", map.walls().len());

    let pose = Pose::new(cli.x, cli.y, cli.heading);
    println!("Scan from {pose}");
    let step = 360.0 / cli.beams.max(1) as f64;
    for (i, range) in map.scan(&pose, cli.beams).iter().enumerate() {
        println!("  {:6.1} deg: {:.3} m", i as f64 * step, range);
    }

    let mut sampler = FreeSpaceSampler::new(map, StdRng::seed_from_u64(cli.seed));
    println!("Free points:");
    for _ in 0..cli.samples {
        match sampler.sample() {
            Ok(p) => println!("  ({:.3}, {:.3})", p.x, p.y),
            Err(err) => {
                eprintln!("Sampling failed: {err}");
                break;
            }
        }
    }
}
