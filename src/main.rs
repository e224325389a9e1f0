//! # Marcher Main Entry Point
//!
//! Parses the command line, sets up logging and the macroquad window, loads
//! the shader into a display, and runs the game shell.

use clap::Parser;
use macroquad::miniquad;
use macroquad::prelude::*;
use marcher::config::{GAME_TITLE, SHADER_FILE, WINDOW_HEIGHT, WINDOW_WIDTH};
use marcher::rendering::display::Display;
use marcher::{Game, MarcherResult};

/// Command line arguments for the raymarching playground.
#[derive(Parser, Debug)]
#[command(name = "marcher")]
#[command(about = "A real-time raymarching playground behind a menu-driven game shell")]
#[command(version)]
struct Args {
    /// Start in fullscreen desktop mode
    #[arg(long)]
    fullscreen: bool,

    /// Fragment shader asset path, relative to the assets folder
    #[arg(long, default_value = SHADER_FILE)]
    shader: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: GAME_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        platform: miniquad::conf::Platform {
            // Vertical sync caps the frame rate to the display.
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> MarcherResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    log::info!("Starting {} v{}", GAME_TITLE, marcher::VERSION);

    set_pc_assets_folder("assets");

    // A missing or broken shader aborts startup.
    let display = Display::new(&args.shader).await?;

    let mut game = Game::new(display, args.fullscreen);
    game.initialize();
    game.run().await
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
