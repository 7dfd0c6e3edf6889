use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orrery::{Orrery, SimulationClock, SystemConfig};

#[derive(Parser, Debug)]
#[command(about = "Step a Keplerian orrery and print each body's transform")]
struct Args {
    /// System description
    #[arg(short, long, default_value = "planets.toml")]
    file: PathBuf,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value_t = 180)]
    frames: u32,

    /// Frame rate of the simulated render loop
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Playback rate multiplier
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Print every Nth frame
    #[arg(long, default_value_t = 60)]
    every: u32,

    /// Override the phase seed from the system file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "fps must be positive");

    let mut config = SystemConfig::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }

    let (mut orrery, _rejected) = Orrery::from_config(&config)?;
    let mut clock = SimulationClock::new();
    clock.set_rate(args.rate);

    let frame_delta = 1.0 / args.fps;
    let every = args.every.max(1);

    for frame in 1..=args.frames {
        let elapsed = clock.advance(frame_delta);
        let frames = orrery.tick(elapsed);

        if frame % every != 0 && frame != args.frames {
            continue;
        }

        println!("frame {frame} (t = {elapsed:.3} s)");
        for body_frame in frames {
            let Some(body) = orrery.body(body_frame.id) else {
                continue;
            };
            let p = body_frame.world_position;
            print!(
                "  {:<12} pos ({:>10.4}, {:>10.4}, {:>10.4})  spin {:>9.4}",
                body.name(),
                p.x,
                p.y,
                p.z,
                body_frame.local.spin.angle % std::f64::consts::TAU,
            );
            if let Some(sweep) = body_frame.local.orbit_sweep {
                print!("  sweep {:>9.4}", sweep % std::f64::consts::TAU);
            }
            if body_frame.diverged {
                print!("  (fallback)");
            }
            println!();
        }
    }

    Ok(())
}
