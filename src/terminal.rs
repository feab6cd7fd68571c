use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ui::{prelude::*, Backend, InputMap};

/// How long a poll waits for input before the frame gets redrawn.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Raw mode terminal on the alternate screen.
///
/// The terminal is restored when the value is dropped.
pub struct Terminal {
    out: io::Stdout,
    keys: InputMap,
}

impl Terminal {
    pub fn open() -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        log::debug!("terminal opened");

        Ok(Terminal {
            out,
            keys: InputMap::default(),
        })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ =
            execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Backend for Terminal {
    fn present(&mut self, frame: &Buffer) -> anyhow::Result<()> {
        let ansi = frame.to_ansi();
        let rows = ansi.lines().take(frame.height() as usize);
        for (y, line) in rows.enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16), Print(line))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn poll(&mut self) -> anyhow::Result<Option<InputAction>> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(key_name(&key).and_then(|k| self.keys.action(&k)))
            }
            _ => Ok(None),
        }
    }
}

/// Name of a key press in `[mods-]key` form, eg. `C-c` or `S-Up`.
fn key_name(key: &KeyEvent) -> Option<String> {
    let (base, is_char) = match key.code {
        KeyCode::Up => ("Up".to_string(), false),
        KeyCode::Down => ("Down".to_string(), false),
        KeyCode::Left => ("Left".to_string(), false),
        KeyCode::Right => ("Right".to_string(), false),
        KeyCode::Home => ("Home".to_string(), false),
        KeyCode::End => ("End".to_string(), false),
        KeyCode::PageUp => ("PgUp".to_string(), false),
        KeyCode::PageDown => ("PgDn".to_string(), false),
        KeyCode::Enter => ("Ret".to_string(), false),
        KeyCode::Esc => ("Esc".to_string(), false),
        KeyCode::Char(' ') => ("Sp".to_string(), false),
        KeyCode::Char(c) => (c.to_string(), true),
        _ => return None,
    };

    let mut ret = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        ret.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        ret.push_str("A-");
    }
    // Shifted characters already show up as the shifted char.
    if key.modifiers.contains(KeyModifiers::SHIFT) && !is_char {
        ret.push_str("S-");
    }
    ret.push_str(&base);

    Some(ret)
}
