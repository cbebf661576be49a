use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use twenty48::Direction;

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Maps a key press to a command. Key releases and unknown keys are ignored.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Command::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Command::Move(Direction::Down),
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}
