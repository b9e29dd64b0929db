//! # Actions
//!
//! Every key press becomes an `Action` through one explicit table, `bind()`,
//! keyed on `(mode, key)`. `update()` then applies the action to the session.
//!
//! ```text
//! Session + Key  →  bind(mode, key)  →  Action  →  update()  →  Session + Effect
//! ```
//!
//! `update()` takes the session by value and hands back the next one. No I/O,
//! no terminal, so `assert_eq!(update(session, key), expected)` is a test.

use log::{debug, info};

use crate::core::key::Key;
use crate::core::state::{Mode, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    EnterInsert,
    CursorUp,
    CursorDown,
    ToggleChecked,
    DeleteItem,
    CommitDraft,
    CancelDraft,
    /// Hand the key to the draft's text-field editing.
    EditDraft,
    Ignore,
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The key table.
pub fn bind(mode: Mode, key: &Key) -> Action {
    match (mode, key) {
        (_, Key::Ctrl('c')) => Action::Quit,

        (Mode::Normal, Key::Char('q')) => Action::Quit,
        (Mode::Normal, Key::Char('i' | '[')) => Action::EnterInsert,
        (Mode::Normal, Key::Up | Key::Char('k')) => Action::CursorUp,
        (Mode::Normal, Key::Down | Key::Char('j')) => Action::CursorDown,
        (Mode::Normal, Key::Enter | Key::Char(' ')) => Action::ToggleChecked,
        (Mode::Normal, Key::Char('d') | Key::Delete) => Action::DeleteItem,
        (Mode::Normal, _) => Action::Ignore,

        (Mode::Insert, Key::Enter) => Action::CommitDraft,
        (Mode::Insert, Key::Esc | Key::Char(']')) => Action::CancelDraft,
        (Mode::Insert, _) => Action::EditDraft,
    }
}

/// A row of the help footer: the keys and what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub keys: &'static [&'static str],
    pub action: Action,
    pub help: &'static str,
}

const NORMAL_BINDINGS: &[Binding] = &[
    Binding {
        keys: &["i", "["],
        action: Action::EnterInsert,
        help: "switch to input mode",
    },
    Binding {
        keys: &["up", "k"],
        action: Action::CursorUp,
        help: "move up",
    },
    Binding {
        keys: &["down", "j"],
        action: Action::CursorDown,
        help: "move down",
    },
    Binding {
        keys: &["enter", "space"],
        action: Action::ToggleChecked,
        help: "check or uncheck",
    },
    Binding {
        keys: &["d", "delete"],
        action: Action::DeleteItem,
        help: "delete item",
    },
    Binding {
        keys: &["ctrl+c", "q"],
        action: Action::Quit,
        help: "quit",
    },
];

const INSERT_BINDINGS: &[Binding] = &[
    Binding {
        keys: &["enter"],
        action: Action::CommitDraft,
        help: "add item",
    },
    Binding {
        keys: &["esc", "]"],
        action: Action::CancelDraft,
        help: "return to selection mode",
    },
    Binding {
        keys: &["ctrl+c"],
        action: Action::Quit,
        help: "quit",
    },
];

/// The bindings active in `mode`, in footer order.
pub fn bindings(mode: Mode) -> &'static [Binding] {
    match mode {
        Mode::Normal => NORMAL_BINDINGS,
        Mode::Insert => INSERT_BINDINGS,
    }
}

/// Apply one key press to the session.
///
/// The key's label is recorded as `last_key` before dispatch, whether or not
/// any binding matches.
pub fn update(mut session: Session, key: Key) -> (Session, Effect) {
    session.set_last_key(key.label());
    let mode = session.mode();
    let action = bind(mode, &key);
    debug!("Key {:?} in {} -> {:?}", key.label(), mode.label(), action);

    match action {
        Action::Quit => return (session, Effect::Quit),
        Action::EnterInsert => {
            session.enter_insert();
            info!("Entered insert mode");
        }
        Action::CursorUp => session.move_up(),
        Action::CursorDown => session.move_down(),
        Action::ToggleChecked => session.toggle_checked(),
        Action::DeleteItem => session.delete_current(),
        Action::CommitDraft => {
            session.commit_draft();
            info!("Item added, back to normal mode ({} items)", session.items().len());
        }
        Action::CancelDraft => {
            session.cancel_draft();
            info!("Draft discarded, back to normal mode");
        }
        Action::EditDraft => {
            session.draft_mut().handle_key(&key);
        }
        Action::Ignore => {}
    }

    (session, Effect::None)
}
