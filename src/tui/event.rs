//! # Event Sources
//!
//! Where key presses come from. The driver loop only sees `EventSource`, so
//! the real terminal and a scripted list of labels are interchangeable.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::key::{Key, ParseKeyError};

/// TUI-level input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    /// Terminal resized; only needs a redraw.
    Resize,
}

/// A sequential stream of events.
pub trait EventSource {
    /// Block until the next event. `Ok(None)` means the source is exhausted.
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>>;
}

/// Translate a crossterm key event. Releases/repeats and keys with no label
/// (media keys, bare modifiers, ...) map to `None`.
pub fn key_from_crossterm(key_event: &KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);

    let key = match key_event.code {
        KeyCode::Char(c) if ctrl => Key::Ctrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) if alt => Key::Alt(c),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace if alt => Key::AltBackspace,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

/// Events read from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        loop {
            match event::read()? {
                Event::Key(key_event) => {
                    debug!(
                        "Key event: {:?} with modifiers {:?}",
                        key_event.code, key_event.modifiers
                    );
                    if let Some(key) = key_from_crossterm(&key_event) {
                        return Ok(Some(TuiEvent::Key(key)));
                    }
                }
                Event::Resize(_, _) => return Ok(Some(TuiEvent::Resize)),
                _ => {}
            }
        }
    }
}

/// A fixed sequence of keys, e.g. from a `--script` file.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    keys: VecDeque<Key>,
}

impl ScriptedEvents {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Parse canonical labels (`"down"`, `"ctrl+c"`, `"space"`, ...).
    pub fn from_labels<'a>(
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ParseKeyError> {
        let keys = labels
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Key>, _>>()?;
        Ok(Self::new(keys))
    }

    /// One label per line. Blank lines and lines starting with `#` are skipped;
    /// surrounding whitespace is trimmed, so a space key is written `space`.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut keys = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let label = line.trim();
            if label.is_empty() || label.starts_with('#') {
                continue;
            }
            let key = label.parse::<Key>().map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {e}", number + 1))
            })?;
            keys.push(key);
        }
        Ok(Self::new(keys))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        Ok(self.keys.pop_front().map(TuiEvent::Key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_chars_become_ctrl_keys() {
        let key = key_from_crossterm(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(key, Some(Key::Ctrl('c')));
        let key = key_from_crossterm(&press(KeyCode::Char('C'), KeyModifiers::CONTROL));
        assert_eq!(key, Some(Key::Ctrl('c')));
    }

    #[test]
    fn test_shifted_chars_stay_printable() {
        let key = key_from_crossterm(&press(KeyCode::Char('E'), KeyModifiers::SHIFT));
        assert_eq!(key, Some(Key::Char('E')));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            key_from_crossterm(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(
            key_from_crossterm(&press(KeyCode::Backspace, KeyModifiers::ALT)),
            Some(Key::AltBackspace)
        );
        assert_eq!(
            key_from_crossterm(&press(KeyCode::F(3), KeyModifiers::NONE)),
            Some(Key::F(3))
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut release = press(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_from_crossterm(&release), None);
    }

    #[test]
    fn test_unlabelled_keys_are_dropped() {
        assert_eq!(
            key_from_crossterm(&press(KeyCode::CapsLock, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_scripted_events_yield_in_order_then_end() {
        let mut source = ScriptedEvents::from_labels(["down", "space"]).unwrap();
        assert_eq!(source.next_event().unwrap(), Some(TuiEvent::Key(Key::Down)));
        assert_eq!(
            source.next_event().unwrap(),
            Some(TuiEvent::Key(Key::Char(' ')))
        );
        assert_eq!(source.next_event().unwrap(), None);
    }

    #[test]
    fn test_script_reader_skips_comments_and_blank_lines() {
        let script = "# add eggs\ni\nE\n\n  g  \nspace\nenter\n";
        let source = ScriptedEvents::from_reader(script.as_bytes()).unwrap();
        assert_eq!(source.remaining(), 5);
    }

    #[test]
    fn test_script_reader_reports_bad_line() {
        let err = ScriptedEvents::from_reader("i\nwhat\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"));
    }
}
