//! # Game Flow State
//!
//! The pure application state machine: which menu is active, whether the
//! shader scene or the menu layer owns the frame, and the running and
//! fullscreen flags.
//!
//! Nothing in this module touches the window. Menu entries bind [`Command`]
//! values, [`GameFlow::apply`] consumes them, and side effects that must
//! reach the windowing layer are surfaced as [`Effect`] values for the
//! caller to execute. That keeps every transition testable headless.

/// Which layer owns input routing and drawing for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// The shader scene is rendered; only the cancel key is observed.
    InGame,
    /// The active menu is rendered and receives all input.
    InMenu,
}

/// Symbolic id of one of the three menus.
///
/// The menu registry is addressed exclusively through these ids, so an
/// out-of-range menu index cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    /// Entry menu: Run / Options / Exit.
    Main,
    /// Options menu: fullscreen toggle.
    Options,
    /// Exit confirmation: Yes / No.
    Exit,
}

impl MenuId {
    /// Number of menus in the registry.
    pub const COUNT: usize = 3;

    /// Position of this menu in the registry.
    pub fn index(self) -> usize {
        match self {
            MenuId::Main => 0,
            MenuId::Options => 1,
            MenuId::Exit => 2,
        }
    }
}

/// An action a menu entry can trigger.
///
/// Commands are plain values bound to menu entries at construction time and
/// dispatched by the game against [`GameFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu layer and start rendering the shader scene.
    EnterGame,
    /// Switch the active menu.
    ShowMenu(MenuId),
    /// Flip the fullscreen flag; the window must be re-moded afterwards.
    ToggleFullscreen,
    /// Stop the frame loop.
    Quit,
}

/// A side effect the caller must execute after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The fullscreen flag changed; rebuild the window mode and the
    /// offscreen render target.
    WindowModeChanged,
}

/// The application flow state.
///
/// Starts in the menu layer on the main menu. Mutated only through
/// [`apply`](Self::apply), [`leave_game`](Self::leave_game) and
/// [`request_quit`](Self::request_quit).
///
/// # Examples
///
/// ```
/// use marcher::game::state::{Command, GameFlow, GameMode, MenuId};
///
/// let mut flow = GameFlow::new(false);
/// assert_eq!(flow.mode(), GameMode::InMenu);
///
/// flow.apply(Command::EnterGame);
/// assert_eq!(flow.mode(), GameMode::InGame);
///
/// flow.leave_game();
/// assert_eq!(flow.active_menu(), MenuId::Main);
/// ```
#[derive(Debug, Clone)]
pub struct GameFlow {
    mode: GameMode,
    active_menu: MenuId,
    fullscreen: bool,
    running: bool,
}

impl GameFlow {
    /// Creates the initial flow state: in the main menu, running.
    pub fn new(fullscreen: bool) -> Self {
        Self {
            mode: GameMode::InMenu,
            active_menu: MenuId::Main,
            fullscreen,
            running: true,
        }
    }

    /// Applies a menu command and returns the side effect the caller must
    /// execute, if any.
    pub fn apply(&mut self, command: Command) -> Option<Effect> {
        match command {
            Command::EnterGame => {
                log::debug!("entering scene");
                self.mode = GameMode::InGame;
                None
            }
            Command::ShowMenu(id) => {
                log::debug!("switching to menu {:?}", id);
                self.active_menu = id;
                None
            }
            Command::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                log::debug!("fullscreen -> {}", self.fullscreen);
                Some(Effect::WindowModeChanged)
            }
            Command::Quit => {
                log::info!("quit requested from menu");
                self.running = false;
                None
            }
        }
    }

    /// Cancel while in-game: back to the menu layer, reset to the main menu.
    pub fn leave_game(&mut self) {
        log::debug!("leaving scene, back to main menu");
        self.mode = GameMode::InMenu;
        self.active_menu = MenuId::Main;
    }

    /// Window close request: stop the loop regardless of mode.
    pub fn request_quit(&mut self) {
        log::info!("window close requested");
        self.running = false;
    }

    /// Whether the frame loop should keep iterating.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The layer that owns the current frame.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The menu receiving input while [`GameMode::InMenu`].
    pub fn active_menu(&self) -> MenuId {
        self.active_menu
    }

    /// Current fullscreen flag.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_main_menu_running() {
        let flow = GameFlow::new(false);
        assert_eq!(flow.mode(), GameMode::InMenu);
        assert_eq!(flow.active_menu(), MenuId::Main);
        assert!(flow.is_running());
        assert!(!flow.is_fullscreen());
    }

    #[test]
    fn enter_game_switches_mode_only() {
        let mut flow = GameFlow::new(false);
        let effect = flow.apply(Command::EnterGame);
        assert_eq!(effect, None);
        assert_eq!(flow.mode(), GameMode::InGame);
        assert_eq!(flow.active_menu(), MenuId::Main, "menu id must be untouched");
    }

    #[test]
    fn leave_game_resets_to_main_menu() {
        let mut flow = GameFlow::new(false);
        flow.apply(Command::ShowMenu(MenuId::Options));
        flow.apply(Command::EnterGame);
        flow.leave_game();
        assert_eq!(flow.mode(), GameMode::InMenu);
        assert_eq!(flow.active_menu(), MenuId::Main);
        assert!(flow.is_running());
    }

    #[test]
    fn toggle_fullscreen_round_trips() {
        let mut flow = GameFlow::new(false);

        let first = flow.apply(Command::ToggleFullscreen);
        assert_eq!(first, Some(Effect::WindowModeChanged));
        assert!(flow.is_fullscreen());

        let second = flow.apply(Command::ToggleFullscreen);
        assert_eq!(second, Some(Effect::WindowModeChanged));
        assert!(!flow.is_fullscreen(), "double toggle must restore the flag");
    }

    #[test]
    fn quit_command_stops_the_loop() {
        let mut flow = GameFlow::new(false);
        flow.apply(Command::Quit);
        assert!(!flow.is_running());
    }

    #[test]
    fn close_request_stops_the_loop_in_any_mode() {
        let mut in_menu = GameFlow::new(false);
        in_menu.request_quit();
        assert!(!in_menu.is_running());

        let mut in_game = GameFlow::new(false);
        in_game.apply(Command::EnterGame);
        in_game.request_quit();
        assert!(!in_game.is_running());
    }

    #[test]
    fn menu_ids_cover_the_registry() {
        assert_eq!(MenuId::Main.index(), 0);
        assert_eq!(MenuId::Options.index(), 1);
        assert_eq!(MenuId::Exit.index(), 2);
        assert!(MenuId::Main.index() < MenuId::COUNT);
        assert!(MenuId::Options.index() < MenuId::COUNT);
        assert!(MenuId::Exit.index() < MenuId::COUNT);
    }
}
