use crate::core::view::{LineKind, ViewFrame};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

const GREEN: Color = Color::Rgb(0x23, 0xd1, 0x8b);
const FOREGROUND: Color = Color::Indexed(205);
const BACKGROUND: Color = Color::Indexed(240);

/// Draw a view frame line by line, placing the terminal cursor in the draft
/// while inserting.
pub fn draw_ui(frame: &mut Frame, view: &ViewFrame) {
    let area = frame.area();
    let offset = scroll_offset(view, area.height);

    let lines: Vec<Line> = view
        .lines
        .iter()
        .map(|line| Line::styled(line.text.as_str(), line_style(line.kind)))
        .collect();
    let paragraph = Paragraph::new(Text::from(lines)).scroll((offset, 0));
    frame.render_widget(paragraph, area);

    if let Some(position) = cursor_position(view, area, offset) {
        frame.set_cursor_position(position);
    }
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Blank => Style::default(),
        LineKind::Title => Style::default().fg(GREEN),
        LineKind::Notice => Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        LineKind::Prompt | LineKind::Header => Style::default().fg(FOREGROUND),
        LineKind::Item { selected: true, .. } => {
            Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
        }
        LineKind::Item { selected: false, .. } => Style::default(),
        LineKind::Help | LineKind::LastKey => Style::default().fg(BACKGROUND),
    }
}

/// The line that must stay on screen: the prompt while inserting, else the
/// selected item.
fn focus_line(view: &ViewFrame) -> Option<usize> {
    view.cursor.map(|(line, _)| line).or_else(|| {
        view.lines
            .iter()
            .position(|l| matches!(l.kind, LineKind::Item { selected: true, .. }))
    })
}

/// Rows to scroll so the focus line fits in `height` rows.
fn scroll_offset(view: &ViewFrame, height: u16) -> u16 {
    let height = usize::from(height);
    match focus_line(view) {
        Some(line) if height > 0 && line >= height => {
            u16::try_from(line + 1 - height).unwrap_or(u16::MAX)
        }
        _ => 0,
    }
}

fn cursor_position(view: &ViewFrame, area: Rect, offset: u16) -> Option<(u16, u16)> {
    let (line, column) = view.cursor?;
    let row = u16::try_from(line).ok()?.checked_sub(offset)?;
    let column = u16::try_from(column).ok()?;
    (row < area.height && column < area.width).then(|| (area.x + column, area.y + row))
}
