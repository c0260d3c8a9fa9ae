use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use carousel::constants::*;
use carousel::headless::{HeadlessEngine, HeadlessSurface, parse_events};
use carousel::slide_loader::{load_slides, shuffle};
use carousel::{Carousel, CarouselConfig, Slide};

/// Drive a slide carousel headlessly and print every change of the visible slides.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of images to use as slides
    dir: Option<PathBuf>,

    /// Number of generated slides when no directory is given
    #[arg(long, default_value_t = 4, conflicts_with = "dir")]
    count: usize,

    /// Duration of one slide animation (ms)
    #[arg(long, default_value_t = ANIMATION_SPEED.as_millis() as u64)]
    animation_speed: u64,

    /// Delay between automatic advances (ms)
    #[arg(long, default_value_t = INTERVAL_DELAY.as_millis() as u64)]
    interval_delay: u64,

    /// Width of one slide (px)
    #[arg(long, default_value_t = SLIDE_WIDTH)]
    slide_width: f32,

    /// Frames per second of the simulation loop
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Simulated run time (ms)
    #[arg(long, default_value_t = 10_000)]
    run_for: u64,

    /// Scripted input, e.g. "1500=next,1600=prev,3000=focus-in,9000=focus-out"
    #[arg(long, default_value = "")]
    events: String,

    /// Shuffle the slide order
    #[arg(long)]
    shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // --- Load Slides ---
    let mut slides = match &args.dir {
        Some(dir) => load_slides(dir)
            .with_context(|| format!("Error loading images from '{}'", dir.display()))?,
        None => Slide::generated(args.count),
    };
    if args.shuffle {
        shuffle(&mut slides, args.seed);
    }

    let config = CarouselConfig {
        animation_speed: Duration::from_millis(args.animation_speed),
        interval_delay: Duration::from_millis(args.interval_delay),
        slide_width: args.slide_width,
    };
    let events = parse_events(&args.events)?;

    let surface = HeadlessSurface::new(slides.clone());
    let carousel = Carousel::new(slides, surface, &config).context("Error creating carousel")?;
    let mut engine = HeadlessEngine::new(carousel, events);

    let frame_time = Duration::from_secs(1) / args.fps;
    let run_for = Duration::from_millis(args.run_for);

    println!("{}", engine.initial_frame());

    // --- Main Loop ---
    while engine.clock() < run_for {
        if let Some(report) = engine.render_frame(frame_time) {
            println!("{}", report);
        }
    }

    Ok(())
}
