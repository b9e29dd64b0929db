//! # Core Application Logic
//!
//! The todo list itself. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Key → Action (bind)  │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Scripted  │      │   Tests    │
//!     │  Adapter   │      │  (--script)│      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct — all list state in one place
//! - [`action`]: The key table and `update()`
//! - [`view`]: The text frame derived from a `Session`
//! - [`key`]: Keys and their canonical labels
//! - [`draft`]: The text field used in Insert mode
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod draft;
pub mod key;
pub mod state;
pub mod view;
