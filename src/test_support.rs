//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Effect, update};
use crate::core::key::Key;
use crate::core::state::Session;

/// Creates a Normal-mode session pre-seeded with `items`.
pub fn session_with(items: &[&str]) -> Session {
    Session::new(items.iter().map(|s| s.to_string()).collect())
}

/// Apply one key, given by its label.
pub fn press(session: Session, label: &str) -> (Session, Effect) {
    let key: Key = label
        .parse()
        .unwrap_or_else(|e| panic!("bad key label in test: {e}"));
    update(session, key)
}

/// Apply a sequence of keys, ignoring effects.
pub fn press_all(session: Session, labels: &[&str]) -> Session {
    labels
        .iter()
        .fold(session, |session, label| press(session, label).0)
}
