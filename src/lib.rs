//! # Marcher
//!
//! A real-time raymarching playground: a full-screen shader scene behind a
//! small menu-driven shell.
//!
//! ## Architecture Overview
//!
//! The crate is split along the seams that keep the control logic testable
//! without a window:
//!
//! - **Game Flow**: a pure state machine (`game::state`) owning the
//!   menu-vs-scene mode, the active menu id, and the running/fullscreen flags
//! - **Command System**: menu entries bind explicit [`Command`] values that
//!   the game dispatches against the flow
//! - **Rendering System**: macroquad-based display management for the shader
//!   material, the offscreen render target, and the menu widgets
//! - **Input System**: per-frame translation of macroquad input state into
//!   menu navigation and the in-game cancel
//!
//! All raymarching math lives in the fragment shader asset; the host side
//! only feeds it the `iResolution` and `iTime` uniforms.

pub mod game;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the marcher application.
#[derive(thiserror::Error, Debug)]
pub enum MarcherError {
    /// Asset loading or shader compilation failed
    #[error("asset error: {0}")]
    Asset(#[from] macroquad::Error),

    /// Application state is invalid
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the marcher codebase.
pub type MarcherResult<T> = Result<T, MarcherError>;

/// Version information for the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration constants.
pub mod config {
    /// Window title shown while windowed.
    pub const GAME_TITLE: &str = "Raymarching Playground";

    /// Windowed-mode width in pixels; also the shader resolution.
    pub const WINDOW_WIDTH: i32 = 848;

    /// Windowed-mode height in pixels; also the shader resolution.
    pub const WINDOW_HEIGHT: i32 = 480;

    /// Fragment shader asset, relative to the assets folder.
    pub const SHADER_FILE: &str = "shaders/raymarch.frag";

    /// Top-left x of every menu, in screen pixels.
    pub const MENU_X: f32 = 20.0;

    /// Top-left y of every menu, in screen pixels.
    pub const MENU_Y: f32 = 20.0;
}
