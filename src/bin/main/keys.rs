use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::{
    content::Section,
    input::{InputEvent, InputProvider},
};

/// Non-blocking keyboard input from the controlling terminal.
pub(super) struct KeyInput;

impl KeyInput {
    pub(super) const fn new() -> Self {
        Self
    }
}

impl InputProvider for KeyInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && let Some(mapped) = map_key(key)
            {
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(InputEvent::NextSection),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(InputEvent::PrevSection),
        KeyCode::Char(digit @ '1'..='7') => {
            let index = digit as usize - '1' as usize;
            Section::ALL.get(index).copied().map(InputEvent::ShowSection)
        }
        KeyCode::Char('t') => Some(InputEvent::ToggleTerminal),
        KeyCode::Esc => Some(InputEvent::CloseTerminal),
        KeyCode::Char('d') => Some(InputEvent::ToggleTheme),
        KeyCode::Char('q') => Some(InputEvent::Quit),
        _ => None,
    }
}
