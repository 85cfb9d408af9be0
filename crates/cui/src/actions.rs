use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::CloseHelp => app.show_help = false,
        InputAction::PlaySlot(index) => app.play_slot(index),
        InputAction::DrawOrRun => app.draw_or_run(),
        InputAction::ToggleEquip => app.toggle_equip(),
        InputAction::NewGame => app.new_game(),
    }
}
