//! # Session State
//!
//! Everything one running todo list knows about itself.
//!
//! ```text
//! Session
//! ├── items: Vec<String>        // the list, insertion order, duplicates ok
//! ├── cursor: usize             // 0 when empty, else < items.len()
//! ├── checked: BTreeSet<usize>  // indices into items, always valid
//! ├── mode: Mode                // Normal or Insert
//! ├── draft: Draft              // text being composed in Insert mode
//! ├── last_key: String          // label of the last key, display only
//! └── title: String             // banner text
//! ```
//!
//! Fields are private: the mutators below are the only way in, and each one
//! leaves `cursor` and `checked` valid for the current `items`. Transitions
//! are driven by `update()` in action.rs.

use std::collections::BTreeSet;

use log::debug;

use crate::core::config::ResolvedConfig;
use crate::core::draft::Draft;

pub const DEFAULT_TITLE: &str = "Todo List!";

/// Which key bindings are live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Navigate, check and delete items.
    #[default]
    Normal,
    /// Compose a new item in the draft field.
    Insert,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    items: Vec<String>,
    cursor: usize,
    checked: BTreeSet<usize>,
    mode: Mode,
    draft: Draft,
    last_key: String,
    title: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Session {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            cursor: 0,
            checked: BTreeSet::new(),
            mode: Mode::Normal,
            draft: Draft::default(),
            last_key: String::new(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            draft: Draft::new(config.char_limit, config.placeholder.clone()),
            title: config.title.clone(),
            ..Self::new(config.items.clone())
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn checked(&self) -> &BTreeSet<usize> {
        &self.checked
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn last_key(&self) -> &str {
        &self.last_key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ------------------------------------------------------------------------
    // Mutators (crate-private; see action::update)
    // ------------------------------------------------------------------------

    pub(crate) fn set_last_key(&mut self, label: String) {
        self.last_key = label;
    }

    pub(crate) fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Flip the checked state of the item under the cursor. No-op when empty.
    pub(crate) fn toggle_checked(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if !self.checked.remove(&self.cursor) {
            self.checked.insert(self.cursor);
        }
    }

    /// Remove the item under the cursor.
    ///
    /// Checked indices above the removed one shift down so each check mark
    /// stays on the item it was set on. The cursor is clamped to the new length.
    pub(crate) fn delete_current(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let removed = self.cursor;
        let item = self.items.remove(removed);
        debug!("Deleted item {removed}: {item:?}");

        self.checked = self
            .checked
            .iter()
            .filter(|&&i| i != removed)
            .map(|&i| if i > removed { i - 1 } else { i })
            .collect();
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }

    pub(crate) fn enter_insert(&mut self) {
        self.mode = Mode::Insert;
        self.draft.clear();
    }

    /// Append the draft (empty or not) as a new item and return to Normal.
    pub(crate) fn commit_draft(&mut self) {
        let text = self.draft.take();
        debug!("Appending item {}: {text:?}", self.items.len());
        self.items.push(text);
        self.mode = Mode::Normal;
    }

    pub(crate) fn cancel_draft(&mut self) {
        self.draft.clear();
        self.mode = Mode::Normal;
    }
}
