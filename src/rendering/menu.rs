//! # Menu Widget
//!
//! A titled list of selectable entries with a bound back action. Layout and
//! hit-testing are pure functions of the menu position and the row
//! constants, so pointer and keyboard handling are unit-testable without a
//! window; only [`Menu::draw`] touches macroquad.

use crate::game::state::Command;
use crate::input::{MenuFrameInput, MenuNav};
use macroquad::prelude::*;

/// Title text size in pixels.
const TITLE_FONT_SIZE: f32 = 40.0;

/// Entry text size in pixels.
const ENTRY_FONT_SIZE: f32 = 26.0;

/// Vertical distance from the menu origin to the first entry.
const TITLE_GAP: f32 = 64.0;

/// Height of one entry row, hit area included.
const ROW_HEIGHT: f32 = 38.0;

/// Width of the clickable area of every entry.
const ENTRY_WIDTH: f32 = 300.0;

/// Horizontal text inset inside an entry row.
const ENTRY_PAD: f32 = 10.0;

/// One selectable menu line.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Text shown for this entry.
    pub label: String,
    /// Command produced when the entry is invoked.
    pub command: Command,
}

/// A labeled list of selectable commands with a back action.
///
/// # Examples
///
/// ```
/// use macroquad::math::vec2;
/// use marcher::game::state::{Command, MenuId};
/// use marcher::rendering::menu::Menu;
///
/// let menu = Menu::new(
///     vec2(20.0, 20.0),
///     "Are you sure?",
///     vec![("Yes", Command::Quit), ("No", Command::ShowMenu(MenuId::Main))],
///     Command::ShowMenu(MenuId::Main),
/// );
/// assert_eq!(menu.entries().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    position: Vec2,
    title: String,
    entries: Vec<MenuEntry>,
    back: Command,
    selected: usize,
    hovered: Option<usize>,
}

impl Menu {
    /// Creates a menu from (label, command) pairs and a back command.
    pub fn new(
        position: Vec2,
        title: &str,
        entries: Vec<(&str, Command)>,
        back: Command,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(label, command)| MenuEntry {
                label: label.to_string(),
                command,
            })
            .collect();

        Self {
            position,
            title: title.to_string(),
            entries,
            back,
            selected: 0,
            hovered: None,
        }
    }

    /// The menu entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The command bound to the cancel input.
    pub fn back_command(&self) -> Command {
        self.back
    }

    /// Index of the keyboard-selected entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the pointer-hovered entry, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Clickable rectangle of the entry at `index`, in screen pixels.
    pub fn entry_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + TITLE_GAP + index as f32 * ROW_HEIGHT,
            ENTRY_WIDTH,
            ROW_HEIGHT,
        )
    }

    /// The entry under `point`, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        (0..self.entries.len()).find(|&i| self.entry_rect(i).contains(point))
    }

    /// Processes one frame of input and returns the invoked command, if any.
    ///
    /// Pointer hover moves the selection; a click invokes the hovered entry.
    /// Up/Down wrap around the entry list, Confirm invokes the selection,
    /// and Cancel produces the back command.
    pub fn handle_input(&mut self, input: &MenuFrameInput) -> Option<Command> {
        self.hovered = self.hit_test(input.pointer);

        if let Some(index) = self.hovered {
            self.selected = index;
            if input.clicked {
                return Some(self.entries[index].command);
            }
        }

        match input.nav {
            Some(MenuNav::Up) => {
                self.selected = if self.selected == 0 {
                    self.entries.len() - 1
                } else {
                    self.selected - 1
                };
            }
            Some(MenuNav::Down) => {
                self.selected = (self.selected + 1) % self.entries.len();
            }
            Some(MenuNav::Confirm) => return Some(self.entries[self.selected].command),
            Some(MenuNav::Cancel) => return Some(self.back),
            None => {}
        }

        None
    }

    /// Draws the title and entries, highlighting the selected row.
    pub fn draw(&self) {
        draw_text(
            &self.title,
            self.position.x,
            self.position.y + TITLE_FONT_SIZE,
            TITLE_FONT_SIZE,
            GOLD,
        );

        for (index, entry) in self.entries.iter().enumerate() {
            let rect = self.entry_rect(index);
            let highlighted = self.hovered == Some(index) || self.selected == index;

            if highlighted {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::new(1.0, 1.0, 1.0, 0.08));
            }

            let color = if highlighted { WHITE } else { LIGHTGRAY };
            // Baseline sits roughly two thirds down the row for the default font.
            draw_text(
                &entry.label,
                rect.x + ENTRY_PAD,
                rect.y + ROW_HEIGHT * 0.68,
                ENTRY_FONT_SIZE,
                color,
            );
        }
    }
}
