use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use gesture_snake::game::GameConfig;
use gesture_snake::gesture::{GestureClassifier, GestureConfig};
use gesture_snake::modes::PlayMode;
use gesture_snake::source::{LandmarkSource, ReplaySource};

#[derive(Parser)]
#[command(name = "gesture-snake")]
#[command(version, about = "Snake steered by hand gestures, keyboard as fallback")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Milliseconds per game tick
    #[arg(long, default_value = "125")]
    tick_ms: u64,

    /// JSONL file of recorded hand landmark frames to drive gesture control
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Minimum dominant-axis displacement for a swipe, as a fraction of the frame
    #[arg(long, default_value = "0.05")]
    swipe_threshold: f32,

    /// Minimum swipe speed, in frame fractions per second
    #[arg(long, default_value = "0.02")]
    swipe_speed_threshold: f32,

    /// Minimum seconds between two accepted gestures
    #[arg(long, default_value = "0.3")]
    swipe_cooldown: f64,

    /// Disable swipe detection, classify pointing poses only
    #[arg(long)]
    no_swipe: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let game_config = GameConfig::new(cli.width, cli.height)
        .with_tick(Duration::from_millis(cli.tick_ms));

    let gesture_config = GestureConfig {
        swipe_threshold: cli.swipe_threshold,
        swipe_speed_threshold: cli.swipe_speed_threshold,
        swipe_cooldown: Duration::from_secs_f64(cli.swipe_cooldown),
        use_swipe: !cli.no_swipe,
        ..Default::default()
    };

    let source: Option<Box<dyn LandmarkSource>> = match &cli.landmarks {
        Some(path) => Some(Box::new(ReplaySource::open(path)?)),
        None => None,
    };

    let mut mode = PlayMode::new(game_config, GestureClassifier::new(gesture_config), source);
    mode.run().await
}
