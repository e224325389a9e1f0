//! Integration tests driving the real menu registry against the flow state
//! machine, mirroring how the game shell dispatches commands.

use macroquad::math::vec2;
use marcher::game::default_menus;
use marcher::game::state::{Command, Effect, GameFlow, GameMode, MenuId};
use marcher::input::MenuFrameInput;
use marcher::rendering::menu::Menu;
use proptest::prelude::*;

/// Clicks the entry with the given label on the flow's active menu and
/// applies the produced command, exactly as the shell does.
fn select(menus: &mut [Menu], flow: &mut GameFlow, label: &str) -> Option<Effect> {
    let menu = &mut menus[flow.active_menu().index()];
    let index = menu
        .entries()
        .iter()
        .position(|entry| entry.label == label)
        .unwrap_or_else(|| panic!("no entry labeled {:?}", label));

    let rect = menu.entry_rect(index);
    let input = MenuFrameInput {
        pointer: vec2(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0),
        clicked: true,
        nav: None,
    };
    let command = menu
        .handle_input(&input)
        .expect("clicking an entry must produce a command");

    flow.apply(command)
}

#[test]
fn registry_arity_matches_menu_ids() {
    let menus = default_menus();
    assert_eq!(menus.len(), MenuId::COUNT);
}

#[test]
fn run_enters_game_and_cancel_returns_to_main() {
    let mut menus = default_menus();
    let mut flow = GameFlow::new(false);

    select(&mut menus, &mut flow, "Run");
    assert_eq!(flow.mode(), GameMode::InGame);

    // The in-game cancel input.
    flow.leave_game();
    assert_eq!(flow.mode(), GameMode::InMenu);
    assert_eq!(flow.active_menu(), MenuId::Main);
}

#[test]
fn exit_confirmation_yes_stops_the_loop() {
    let mut menus = default_menus();
    let mut flow = GameFlow::new(false);

    select(&mut menus, &mut flow, "Exit");
    assert_eq!(flow.active_menu(), MenuId::Exit);

    select(&mut menus, &mut flow, "Yes");
    assert!(!flow.is_running());
}

#[test]
fn exit_confirmation_no_returns_to_main_without_stopping() {
    let mut menus = default_menus();
    let mut flow = GameFlow::new(false);

    select(&mut menus, &mut flow, "Exit");
    select(&mut menus, &mut flow, "No");

    assert!(flow.is_running());
    assert_eq!(flow.active_menu(), MenuId::Main);
    assert_eq!(flow.mode(), GameMode::InMenu);
}

#[test]
fn options_toggle_fullscreen_then_back_scenario() {
    let mut menus = default_menus();
    let mut flow = GameFlow::new(false);

    select(&mut menus, &mut flow, "Options");
    assert_eq!(flow.active_menu(), MenuId::Options);

    let effect = select(&mut menus, &mut flow, "Toggle Fullscreen");
    assert_eq!(effect, Some(Effect::WindowModeChanged));

    select(&mut menus, &mut flow, "Back");

    assert_eq!(flow.mode(), GameMode::InMenu);
    assert_eq!(flow.active_menu(), MenuId::Main);
    assert!(flow.is_fullscreen(), "the flag must have flipped exactly once");
    assert!(flow.is_running());
}

#[test]
fn fullscreen_toggle_round_trips_through_the_options_menu() {
    let mut menus = default_menus();
    let mut flow = GameFlow::new(false);

    select(&mut menus, &mut flow, "Options");
    select(&mut menus, &mut flow, "Toggle Fullscreen");
    select(&mut menus, &mut flow, "Toggle Fullscreen");

    assert!(!flow.is_fullscreen());
}

#[test]
fn cancel_bindings_per_menu() {
    let menus = default_menus();

    assert_eq!(
        menus[MenuId::Main.index()].back_command(),
        Command::ShowMenu(MenuId::Exit),
        "cancel on the main menu opens the exit confirmation"
    );
    assert_eq!(
        menus[MenuId::Options.index()].back_command(),
        Command::ShowMenu(MenuId::Main)
    );
    assert_eq!(
        menus[MenuId::Exit.index()].back_command(),
        Command::ShowMenu(MenuId::Main)
    );
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::EnterGame),
        Just(Command::ShowMenu(MenuId::Main)),
        Just(Command::ShowMenu(MenuId::Options)),
        Just(Command::ShowMenu(MenuId::Exit)),
        Just(Command::ToggleFullscreen),
        Just(Command::Quit),
    ]
}

proptest! {
    /// Whatever sequence of commands arrives, the active menu id always
    /// addresses a registry slot.
    #[test]
    fn any_command_sequence_keeps_the_menu_id_valid(
        commands in prop::collection::vec(command_strategy(), 0..64)
    ) {
        let menus = default_menus();
        let mut flow = GameFlow::new(false);

        for command in commands {
            flow.apply(command);
            prop_assert!(flow.active_menu().index() < menus.len());
        }
    }

    /// The fullscreen flag is a pure parity of the toggles applied.
    #[test]
    fn fullscreen_flag_tracks_toggle_parity(
        commands in prop::collection::vec(command_strategy(), 0..64)
    ) {
        let mut flow = GameFlow::new(false);
        let toggles = commands
            .iter()
            .filter(|&&c| c == Command::ToggleFullscreen)
            .count();

        for command in commands {
            flow.apply(command);
        }

        prop_assert_eq!(flow.is_fullscreen(), toggles % 2 == 1);
    }
}
