/// Input layer: one blocking key read per turn.
///
/// The game is strictly turn-based, so there is no held-key tracking —
/// every key press is edge-triggered and maps to exactly one command.
/// Bindings come from the config; arrow keys always work. Any other key is
/// the unrecognized catch-all: it still costs a turn (a zero-delta step).

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::KeyConfig;
use crate::domain::entity::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Take one turn; `None` is the unrecognized-input stay request.
    Step(Option<Direction>),
    Restart,
    Quit,
    /// Terminal resized; redraw without consuming a turn.
    Redraw,
}

/// Block until the next command-worthy event.
pub fn read_command(keys: &KeyConfig) -> io::Result<Command> {
    loop {
        match event::read()? {
            Event::Resize(_, _) => return Ok(Command::Redraw),
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                {
                    return Ok(Command::Quit);
                }
                match key.code {
                    KeyCode::Up => return Ok(Command::Step(Some(Direction::Up))),
                    KeyCode::Down => return Ok(Command::Step(Some(Direction::Down))),
                    KeyCode::Left => return Ok(Command::Step(Some(Direction::Left))),
                    KeyCode::Right => return Ok(Command::Step(Some(Direction::Right))),
                    KeyCode::Esc => return Ok(Command::Quit),
                    KeyCode::Char(c) => return Ok(translate_char(keys, c)),
                    _ => continue,
                }
            }
            _ => continue,
        }
    }
}

fn translate_char(keys: &KeyConfig, c: char) -> Command {
    let c = c.to_ascii_lowercase();
    if c == keys.up {
        Command::Step(Some(Direction::Up))
    } else if c == keys.down {
        Command::Step(Some(Direction::Down))
    } else if c == keys.left {
        Command::Step(Some(Direction::Left))
    } else if c == keys.right {
        Command::Step(Some(Direction::Right))
    } else if c == keys.quit {
        Command::Quit
    } else if c == keys.restart {
        Command::Restart
    } else {
        Command::Step(None)
    }
}
