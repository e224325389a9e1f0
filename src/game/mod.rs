//! # Game Module
//!
//! The game shell: owns the flow state machine, the menu registry, the
//! display, and the input handler, and runs the frame loop.
//!
//! Per frame the loop routes input to either the in-game cancel check or the
//! active menu, dispatches any produced [`Command`] against [`GameFlow`],
//! executes resulting [`Effect`]s against the display, and draws exactly one
//! of the menu layer or the shader scene.

pub mod state;

pub use state::*;

use crate::config::{MENU_X, MENU_Y};
use crate::input::InputHandler;
use crate::rendering::display::Display;
use crate::rendering::menu::Menu;
use crate::MarcherResult;
use macroquad::prelude::*;

/// Builds the three menus with their command bindings.
///
/// Registry order matches [`MenuId::index`]: Main, Options, Exit. Cancel on
/// the main menu opens the exit confirmation; cancel everywhere else returns
/// to the main menu.
pub fn default_menus() -> Vec<Menu> {
    let position = vec2(MENU_X, MENU_Y);
    vec![
        Menu::new(
            position,
            "Raymarching Playground",
            vec![
                ("Run", Command::EnterGame),
                ("Options", Command::ShowMenu(MenuId::Options)),
                ("Exit", Command::ShowMenu(MenuId::Exit)),
            ],
            Command::ShowMenu(MenuId::Exit),
        ),
        Menu::new(
            position,
            "Options",
            vec![
                ("Toggle Fullscreen", Command::ToggleFullscreen),
                ("Back", Command::ShowMenu(MenuId::Main)),
            ],
            Command::ShowMenu(MenuId::Main),
        ),
        Menu::new(
            position,
            "Are you sure?",
            vec![
                ("Yes", Command::Quit),
                ("No", Command::ShowMenu(MenuId::Main)),
            ],
            Command::ShowMenu(MenuId::Main),
        ),
    ]
}

/// The application shell coordinating flow state, menus, display, and input.
pub struct Game {
    flow: GameFlow,
    menus: Vec<Menu>,
    display: Display,
    input: InputHandler,
    run_start: f64,
}

impl Game {
    /// Creates the game shell around an initialized display.
    pub fn new(display: Display, fullscreen: bool) -> Self {
        let menus = default_menus();
        debug_assert_eq!(menus.len(), MenuId::COUNT);

        Self {
            flow: GameFlow::new(fullscreen),
            menus,
            display,
            input: InputHandler::new(),
            run_start: 0.0,
        }
    }

    /// Applies the startup window mode before the first frame.
    pub fn initialize(&mut self) {
        if self.flow.is_fullscreen() {
            self.display.apply_window_mode(true);
            self.display.rebuild_render_target();
        }
    }

    /// Runs the frame loop until the flow stops.
    pub async fn run(&mut self) -> MarcherResult<()> {
        // Route the window close button through the flow instead of a hard
        // process exit.
        prevent_quit();
        self.run_start = get_time();
        log::info!("entering frame loop");

        while self.flow.is_running() {
            clear_background(BLACK);

            self.process_input();
            self.draw();

            next_frame().await;
        }

        log::info!("frame loop ended");
        Ok(())
    }

    /// Routes this frame's input to the in-game cancel or the active menu.
    fn process_input(&mut self) {
        if is_quit_requested() {
            self.flow.request_quit();
            return;
        }

        match self.flow.mode() {
            GameMode::InGame => {
                if self.input.cancel_pressed() {
                    self.flow.leave_game();
                }
            }
            GameMode::InMenu => {
                let frame = self.input.menu_frame();
                let menu = &mut self.menus[self.flow.active_menu().index()];
                if let Some(command) = menu.handle_input(&frame) {
                    self.dispatch(command);
                }
            }
        }
    }

    /// Applies a command to the flow and executes any resulting effect.
    fn dispatch(&mut self, command: Command) {
        if let Some(effect) = self.flow.apply(command) {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::WindowModeChanged => {
                self.display.apply_window_mode(self.flow.is_fullscreen());
                self.display.rebuild_render_target();
            }
        }
    }

    /// Draws the active menu or the shader scene, plus the frame stats.
    fn draw(&mut self) {
        match self.flow.mode() {
            GameMode::InMenu => {
                self.menus[self.flow.active_menu().index()].draw();
            }
            GameMode::InGame => {
                let elapsed = (get_time() - self.run_start) as f32;
                self.display.draw_scene(elapsed);
            }
        }

        self.display.draw_frame_stats(get_frame_time());
    }
}
