//! # Rendering Module
//!
//! Display management for the shader scene and the menu widgets, built on
//! macroquad's material, render target, and text drawing primitives.

pub mod display;
pub mod menu;

pub use display::*;
pub use menu::*;
