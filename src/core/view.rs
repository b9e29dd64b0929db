//! # View
//!
//! Derives the text frame shown after every key press. Pure: same session,
//! same frame.
//!
//! A `ViewFrame` is a list of typed lines. Its `Display` output is the plain
//! newline-delimited frame; the kinds let an adapter colour each line without
//! re-deriving anything.
//!
//! ```text
//! <-------------------------------Todo List!------------------------------->
//!
//! No items added yet!                     (only when the list is empty)
//! Press i or [ to add an item to the list.
//!
//! Enter what you'd like to add to the list.  > Eggs   (Insert mode only)
//!
//! Todo Items
//!
//! > [x] Buy carrots
//!   [ ] Buy celery
//!
//! Press i or [ to switch to input mode
//! ...
//! Last Key Press: j
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::core::action::bindings;
use crate::core::state::{Mode, Session};

/// Total width of the title banner, including the angle brackets.
pub const BANNER_WIDTH: usize = 84;
pub const PROMPT_TEXT: &str = "Enter what you'd like to add to the list.  > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Title,
    Notice,
    Prompt,
    Header,
    Item { selected: bool, checked: bool },
    Help,
    LastKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFrame {
    pub lines: Vec<ViewLine>,
    /// Where the draft's text cursor sits, as (line index, display column).
    /// `Some` only in Insert mode.
    pub cursor: Option<(usize, usize)>,
}

impl ViewFrame {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(ViewLine {
            kind,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, "");
    }
}

impl fmt::Display for ViewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

/// `<----title---->`, padded with dashes to `BANNER_WIDTH`.
pub fn banner(title: &str) -> String {
    let inner = BANNER_WIDTH - 2;
    let dashes = inner.saturating_sub(title.width());
    let left = dashes / 2;
    format!("<{}{}{}>", "-".repeat(left), title, "-".repeat(dashes - left))
}

fn help_line(keys: &[&str], help: &str) -> String {
    format!("Press {} to {}", keys.join(" or "), help)
}

pub fn render(session: &Session) -> ViewFrame {
    let mut frame = ViewFrame::default();

    frame.push(LineKind::Title, banner(session.title()));
    frame.blank();

    if session.items().is_empty() {
        frame.push(LineKind::Notice, "No items added yet!");
        frame.push(LineKind::Notice, "Press i or [ to add an item to the list.");
        frame.blank();
    }

    if session.mode() == Mode::Insert {
        let draft = session.draft();
        let shown = if draft.is_empty() {
            draft.placeholder()
        } else {
            draft.text()
        };
        let column = PROMPT_TEXT.width() + draft.text()[..draft.cursor()].width();
        frame.cursor = Some((frame.lines.len(), column));
        frame.push(LineKind::Prompt, format!("{PROMPT_TEXT}{shown}"));
        frame.blank();
    }

    frame.push(LineKind::Header, "Todo Items");
    frame.blank();

    for (index, item) in session.items().iter().enumerate() {
        let selected = session.cursor() == index;
        let checked = session.is_checked(index);
        frame.push(
            LineKind::Item { selected, checked },
            format!(
                "{} [{}] {}",
                if selected { ">" } else { " " },
                if checked { "x" } else { " " },
                item
            ),
        );
    }
    if !session.items().is_empty() {
        frame.blank();
    }

    for binding in bindings(session.mode()) {
        frame.push(LineKind::Help, help_line(binding.keys, binding.help));
    }
    frame.push(
        LineKind::LastKey,
        format!("Last Key Press: {}", session.last_key()),
    );

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{press_all, session_with};

    fn item_rows(frame: &ViewFrame) -> Vec<&str> {
        frame
            .lines
            .iter()
            .filter(|l| matches!(l.kind, LineKind::Item { .. }))
            .map(|l| l.text.as_str())
            .collect()
    }

    #[test]
    fn test_banner_is_fixed_width_and_centered() {
        let b = banner("Todo List!");
        assert_eq!(b.width(), BANNER_WIDTH);
        assert!(b.starts_with("<-"));
        assert!(b.ends_with("->"));
        assert!(b.contains("-Todo List!-"));
    }

    #[test]
    fn test_banner_with_oversized_title_has_no_dashes() {
        let title = "x".repeat(100);
        assert_eq!(banner(&title), format!("<{title}>"));
    }

    #[test]
    fn test_empty_list_shows_notice_and_no_rows() {
        let frame = render(&Session::default());
        let text = frame.to_string();
        assert!(text.contains("No items added yet!"));
        assert!(text.contains("Todo Items"));
        assert!(item_rows(&frame).is_empty());
        assert!(frame.cursor.is_none());
    }

    #[test]
    fn test_rows_show_cursor_and_checked_markers() {
        let session = press_all(session_with(&["a", "b", "c"]), &["space", "down"]);
        let frame = render(&session);
        assert_eq!(item_rows(&frame), ["  [x] a", "> [ ] b", "  [ ] c"]);
        assert!(!frame.to_string().contains("No items added yet!"));
    }

    #[test]
    fn test_section_order() {
        let session = press_all(session_with(&["a"]), &["i", "z"]);
        let kinds: Vec<LineKind> = render(&session)
            .lines
            .iter()
            .map(|l| l.kind)
            .filter(|k| *k != LineKind::Blank)
            .collect();
        let title = kinds.iter().position(|k| *k == LineKind::Title);
        let prompt = kinds.iter().position(|k| *k == LineKind::Prompt);
        let header = kinds.iter().position(|k| *k == LineKind::Header);
        let help = kinds.iter().position(|k| *k == LineKind::Help);
        assert_eq!(title, Some(0));
        assert!(prompt < header);
        assert!(header < help);
        assert_eq!(kinds.last(), Some(&LineKind::LastKey));
    }

    #[test]
    fn test_insert_prompt_shows_draft_and_cursor_column() {
        let session = press_all(Session::default(), &["i", "E", "g", "g", "s", "left"]);
        let frame = render(&session);
        let (line, column) = frame.cursor.unwrap();
        assert_eq!(frame.lines[line].kind, LineKind::Prompt);
        assert_eq!(frame.lines[line].text, format!("{PROMPT_TEXT}Eggs"));
        assert_eq!(column, PROMPT_TEXT.width() + 3);
    }

    #[test]
    fn test_insert_prompt_shows_placeholder_when_draft_empty() {
        let session = press_all(Session::default(), &["i"]);
        let frame = render(&session);
        let (line, column) = frame.cursor.unwrap();
        assert!(frame.lines[line].text.ends_with(session.draft().placeholder()));
        assert_eq!(column, PROMPT_TEXT.width());
    }

    #[test]
    fn test_footer_follows_mode() {
        let normal = render(&Session::default()).to_string();
        assert!(normal.contains("Press i or [ to switch to input mode"));
        assert!(normal.contains("Press ctrl+c or q to quit"));

        let insert = render(&press_all(Session::default(), &["i"])).to_string();
        assert!(insert.contains("Press esc or ] to return to selection mode"));
        assert!(insert.contains("Press ctrl+c to quit"));
        assert!(!insert.contains("switch to input mode"));
    }

    #[test]
    fn test_last_key_is_final_line() {
        let session = press_all(session_with(&["a"]), &["j"]);
        let text = render(&session).to_string();
        assert_eq!(text.lines().last(), Some("Last Key Press: j"));
    }

    #[test]
    fn test_render_is_pure() {
        let session = press_all(session_with(&["a", "b"]), &["j", "space"]);
        assert_eq!(render(&session), render(&session));
    }
}
