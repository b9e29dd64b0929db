//! # Draft
//!
//! The single-line text field used while composing a new item.
//!
//! `Draft` owns the text and a cursor stored as a byte offset that always
//! sits on a char boundary (`0..=text.len()`). It only ever sees keys the
//! session hands it in Insert mode; Enter/Esc are the session's business.

use crate::core::key::Key;

pub const DEFAULT_CHAR_LIMIT: usize = 255;
pub const DEFAULT_PLACEHOLDER: &str = "Midway on our life's journey, I found myself";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    cursor: usize,
    /// Maximum length in chars; inserts past it are dropped
    char_limit: usize,
    placeholder: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_LIMIT, DEFAULT_PLACEHOLDER)
    }
}

impl Draft {
    pub fn new(char_limit: usize, placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            char_limit,
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor as a byte offset into `text()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the draft empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Apply a standard text-field edit. Returns `true` if text or cursor changed.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) if key.is_printable() => self.insert_char(*c),
            Key::Backspace | Key::Ctrl('h') => self.delete_back(),
            Key::Delete | Key::Ctrl('d') => self.delete_forward(),
            Key::Left | Key::Ctrl('b') => self.move_left(),
            Key::Right | Key::Ctrl('f') => self.move_right(),
            Key::Home | Key::Ctrl('a') => self.move_to(0),
            Key::End | Key::Ctrl('e') => self.move_to(self.text.len()),
            Key::Ctrl('w') | Key::AltBackspace => self.delete_word_back(),
            Key::Ctrl('u') => self.delete_to_start(),
            Key::Ctrl('k') => self.delete_to_end(),
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) -> bool {
        if self.text.chars().count() >= self.char_limit {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_char_boundary(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = next_char_boundary(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
        true
    }

    fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = prev_char_boundary(&self.text, self.cursor);
        true
    }

    fn move_right(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.cursor = next_char_boundary(&self.text, self.cursor);
        true
    }

    fn move_to(&mut self, pos: usize) -> bool {
        if self.cursor == pos {
            return false;
        }
        self.cursor = pos;
        true
    }

    fn delete_word_back(&mut self) -> bool {
        let start = prev_word_boundary(&self.text, self.cursor);
        if start == self.cursor {
            return false;
        }
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.text.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    fn delete_to_end(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.truncate(self.cursor);
        true
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Skip non-word chars backwards, then word chars, readline `backward-word` style.
fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = chars.peek().map(|&(i, c)| i + c.len_utf8()).unwrap_or(0);
    for (i, c) in chars {
        if !is_word_char(c) {
            break;
        }
        boundary = i;
    }
    boundary
}
