//! # Keys
//!
//! A key press as the core sees it. The adapter turns terminal events into
//! `Key` values; everything downstream matches on variants, never on strings.
//!
//! Each key has a canonical label (`"up"`, `"ctrl+c"`, `"enter"`, `" "`).
//! Labels are what the view shows as "last key" and what scripted sessions
//! are written in, so `label()` and `FromStr` are inverses.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    BackTab,
    /// Function key, F1..=F24
    F(u8),
    /// Printable character, including space
    Char(char),
    Ctrl(char),
    Alt(char),
    AltBackspace,
}

impl Key {
    /// Canonical label, e.g. `"down"`, `"ctrl+c"`, `"q"`.
    pub fn label(&self) -> String {
        match self {
            Key::Up => "up".into(),
            Key::Down => "down".into(),
            Key::Left => "left".into(),
            Key::Right => "right".into(),
            Key::Home => "home".into(),
            Key::End => "end".into(),
            Key::PageUp => "pgup".into(),
            Key::PageDown => "pgdown".into(),
            Key::Enter => "enter".into(),
            Key::Esc => "esc".into(),
            Key::Backspace => "backspace".into(),
            Key::Delete => "delete".into(),
            Key::Tab => "tab".into(),
            Key::BackTab => "shift+tab".into(),
            Key::F(n) => format!("f{n}"),
            Key::Char(c) => c.to_string(),
            Key::Ctrl(c) => format!("ctrl+{c}"),
            Key::Alt(c) => format!("alt+{c}"),
            Key::AltBackspace => "alt+backspace".into(),
        }
    }

    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_control())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(pub String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized key label: {:?}", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

/// Returns the single char in `s`, or `None` if it has zero or several.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pgup" => Key::PageUp,
            "pgdown" => Key::PageDown,
            "enter" => Key::Enter,
            "esc" => Key::Esc,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "tab" => Key::Tab,
            "shift+tab" => Key::BackTab,
            "alt+backspace" => Key::AltBackspace,
            "space" => Key::Char(' '),
            _ => {
                if let Some(c) = single_char(s) {
                    Key::Char(c)
                } else if let Some(c) = s.strip_prefix("ctrl+").and_then(single_char) {
                    Key::Ctrl(c)
                } else if let Some(c) = s.strip_prefix("alt+").and_then(single_char) {
                    Key::Alt(c)
                } else if let Some(n) = s
                    .strip_prefix('f')
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| (1..=24).contains(n))
                {
                    Key::F(n)
                } else {
                    return Err(ParseKeyError(s.to_string()));
                }
            }
        };
        Ok(key)
    }
}
