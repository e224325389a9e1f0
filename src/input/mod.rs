//! # Input Module
//!
//! Per-frame translation of macroquad input state into the events the game
//! shell understands: pointer state plus keyboard navigation while a menu is
//! active, and the cancel key while the scene is running.
//!
//! macroquad exposes input as per-frame state queries rather than an event
//! queue, so the handler is polled once per frame and never blocks.

use macroquad::prelude::*;

/// Keyboard navigation event for the active menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNav {
    /// Move the selection up one entry.
    Up,
    /// Move the selection down one entry.
    Down,
    /// Invoke the selected entry.
    Confirm,
    /// Invoke the menu's back action.
    Cancel,
}

/// Everything the active menu needs from one frame of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuFrameInput {
    /// Pointer position in screen pixels.
    pub pointer: Vec2,
    /// Whether the primary button was pressed this frame.
    pub clicked: bool,
    /// Keyboard navigation, if any key was pressed this frame.
    pub nav: Option<MenuNav>,
}

/// Input handler polling macroquad once per frame.
pub struct InputHandler {
    /// Whether W/S mirror the arrow keys for menu navigation.
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Whether the in-game cancel key was pressed this frame.
    pub fn cancel_pressed(&self) -> bool {
        is_key_pressed(KeyCode::Escape)
    }

    /// Collects this frame's pointer state and keyboard navigation for the
    /// active menu.
    pub fn menu_frame(&self) -> MenuFrameInput {
        let (mouse_x, mouse_y) = mouse_position();

        MenuFrameInput {
            pointer: vec2(mouse_x, mouse_y),
            clicked: is_mouse_button_pressed(MouseButton::Left),
            nav: self.nav_pressed(),
        }
    }

    fn nav_pressed(&self) -> Option<MenuNav> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(MenuNav::Cancel);
        }
        if is_key_pressed(KeyCode::Enter) {
            return Some(MenuNav::Confirm);
        }
        if is_key_pressed(KeyCode::Up) {
            return Some(MenuNav::Up);
        }
        if is_key_pressed(KeyCode::Down) {
            return Some(MenuNav::Down);
        }

        if self.wasd_enabled {
            if is_key_pressed(KeyCode::W) {
                return Some(MenuNav::Up);
            }
            if is_key_pressed(KeyCode::S) {
                return Some(MenuNav::Down);
            }
        }

        None
    }
}
