//! # Frame Sinks
//!
//! Where frames go after each transition. The terminal sink draws with
//! ratatui; the capture sink keeps the plain text for scripts and tests.

use std::io;

use ratatui::DefaultTerminal;

use crate::core::view::ViewFrame;
use crate::tui::ui;

pub trait FrameSink {
    fn present(&mut self, frame: &ViewFrame) -> io::Result<()>;
}

/// Draws frames on the real terminal.
pub struct TerminalSink {
    terminal: DefaultTerminal,
}

impl TerminalSink {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, frame: &ViewFrame) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, frame))?;
        Ok(())
    }
}

/// Keeps every presented frame as plain text.
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub frames: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl FrameSink for CaptureSink {
    fn present(&mut self, frame: &ViewFrame) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}
