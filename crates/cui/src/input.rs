use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    CloseHelp,
    PlaySlot(usize),
    DrawOrRun,
    ToggleEquip,
    NewGame,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::CloseHelp,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('1') => InputAction::PlaySlot(0),
        KeyCode::Char('2') => InputAction::PlaySlot(1),
        KeyCode::Char('3') => InputAction::PlaySlot(2),
        KeyCode::Char('4') => InputAction::PlaySlot(3),
        KeyCode::Char('d') | KeyCode::Char(' ') => InputAction::DrawOrRun,
        KeyCode::Char('r') => InputAction::DrawOrRun,
        KeyCode::Char('e') => InputAction::ToggleEquip,
        KeyCode::Char('n') => InputAction::NewGame,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_slot_keys() {
        for (ch, slot) in [('1', 0), ('2', 1), ('3', 2), ('4', 3)] {
            assert_eq!(
                map_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
                InputAction::PlaySlot(slot)
            );
        }
    }

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            InputAction::DrawOrRun
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE)),
            InputAction::ToggleEquip
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }
}
