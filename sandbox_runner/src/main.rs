//! Headless frame loop for the rectangle sandbox.
//!
//! Stands in for a windowed front end: it steps the simulation once per frame
//! and prints each body's velocity readout every few frames.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use rect_physics::{SceneConfig, SimulationContext};

#[derive(Parser, Debug)]
#[command(about = "Step the rectangle sandbox and print body velocities")]
struct Args {
    /// Scene description (JSON). Defaults to the built-in two-box scene.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print the readout every N frames (0 disables it).
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Pace frames to the scene's tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// More logging to stderr; repeat for trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn install_logging(verbose: u8) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off, Trace};
    let level = match verbose {
        0 => Info,
        1 => Debug,
        _ => Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn load_scene(path: &Path) -> anyhow::Result<SceneConfig> {
    let file =
        File::open(path).with_context(|| format!("failed to open scene {}", path.display()))?;
    let scene = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse scene {}", path.display()))?;
    Ok(scene)
}

fn print_readout(frame: u64, ctx: &SimulationContext) {
    println!("Frame {}:", frame);
    for state in ctx.snapshot() {
        let anchor = state.label_anchor();
        println!(
            "  body {} at ({:.1}, {:.1}) {}",
            state.index,
            anchor.x,
            anchor.y,
            state.velocity_label()
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    install_logging(args.verbose)?;

    let scene = match &args.scene {
        Some(path) => load_scene(path)?,
        None => SceneConfig::default(),
    };
    let mut ctx = scene.build().context("invalid scene")?;
    let tick = ctx.config().tick_duration();

    log::info!(
        "running {} frames at {} Hz{}",
        args.frames,
        ctx.config().tick_rate_hz,
        if args.realtime { " (realtime)" } else { "" }
    );

    let started = Instant::now();
    let mut collisions = 0;
    for frame in 1..=args.frames {
        let frame_start = Instant::now();
        let report = ctx
            .step()
            .with_context(|| format!("simulation failed on frame {}", frame))?;
        collisions += report.collisions;

        if args.report_every > 0 && frame % args.report_every == 0 {
            print_readout(frame, &ctx);
        }

        if args.realtime {
            if let Some(remaining) = tick.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    log::info!(
        "simulated {} frames in {:.2?}, {} collisions resolved",
        ctx.tick(),
        started.elapsed(),
        collisions
    );
    Ok(())
}
