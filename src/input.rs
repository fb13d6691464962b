use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Restart,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Steer(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Steer(Direction::Right),
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys_steer() {
        assert_eq!(
            command_for(press(KeyCode::Left)),
            Some(Command::Steer(Direction::Left))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('j'))),
            Some(Command::Steer(Direction::Down))
        );
        assert_eq!(command_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_and_restart() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(press(KeyCode::Char('r'))), Some(Command::Restart));
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for(release), None);
    }
}
