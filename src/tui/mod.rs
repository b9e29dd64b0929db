//! # TUI Adapter
//!
//! The ratatui-specific layer. Reads key events, feeds them through
//! `core::action::update`, and draws the frame `core::view::render` derives.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The list only changes on a key press, so the loop blocks on the next
//! event and redraws once per event (resizes included). Nothing animates, so
//! there is no poll timeout.

mod event;
mod sink;
mod ui;

pub use event::{EventSource, ScriptedEvents, TerminalEvents, TuiEvent, key_from_crossterm};
pub use sink::{CaptureSink, FrameSink, TerminalSink};

use log::{debug, info, warn};
use std::io::{self, stdout};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Effect, update};
use crate::core::state::Session;
use crate::core::view::render;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Disambiguated escape codes let a lone Esc arrive without the usual
        // delay; terminals without the protocol ignore the request.
        execute!(
            stdout(),
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady bar cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run a session to completion.
///
/// Presents the initial frame, then one frame per event, until the source
/// runs dry or a transition asks to quit. Returns the final session.
pub fn drive<S, R>(mut session: Session, source: &mut S, sink: &mut R) -> io::Result<Session>
where
    S: EventSource + ?Sized,
    R: FrameSink + ?Sized,
{
    sink.present(&render(&session))?;

    while let Some(event) = source.next_event()? {
        if let TuiEvent::Key(key) = event {
            let (next, effect) = update(session, key);
            session = next;
            if effect == Effect::Quit {
                info!("Quit requested");
                return Ok(session);
            }
        }
        sink.present(&render(&session))?;
    }

    debug!("Event source exhausted");
    Ok(session)
}

/// Run a session on the real terminal.
pub fn run(session: Session) -> io::Result<Session> {
    let terminal = ratatui::try_init()?;
    let guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Terminal modes unavailable: {e}"))
        .ok();

    let mut sink = TerminalSink::new(terminal);
    let result = drive(session, &mut TerminalEvents, &mut sink);

    drop(guard);
    drop(sink);
    ratatui::try_restore()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Key;
    use crate::core::state::Mode;

    /// A source that fails after its scripted keys run out.
    struct FailingSource(ScriptedEvents);

    impl EventSource for FailingSource {
        fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
            match self.0.next_event()? {
                Some(event) => Ok(Some(event)),
                None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone")),
            }
        }
    }

    #[test]
    fn test_drive_presents_initial_frame_and_one_per_event() {
        let mut source = ScriptedEvents::from_labels(["i", "E", "enter"]).unwrap();
        let mut sink = CaptureSink::new();
        let session = drive(Session::default(), &mut source, &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 4);
        assert_eq!(session.items(), ["E"]);
        assert!(sink.last().unwrap().contains("> [ ] E"));
    }

    #[test]
    fn test_drive_stops_on_quit_without_presenting() {
        let mut source = ScriptedEvents::from_labels(["j", "q", "i"]).unwrap();
        let mut sink = CaptureSink::new();
        let session = drive(Session::default(), &mut source, &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(session.last_key(), "q");
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_drive_redraws_on_resize_without_transition() {
        struct ResizeThenEnd(bool);
        impl EventSource for ResizeThenEnd {
            fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
                Ok(std::mem::replace(&mut self.0, false).then_some(TuiEvent::Resize))
            }
        }

        let mut sink = CaptureSink::new();
        let session = drive(Session::default(), &mut ResizeThenEnd(true), &mut sink).unwrap();
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0], sink.frames[1]);
        assert_eq!(session.last_key(), "");
    }

    #[test]
    fn test_drive_propagates_source_errors() {
        let mut source = FailingSource(ScriptedEvents::new([Key::Down]));
        let mut sink = CaptureSink::new();
        let err = drive(Session::default(), &mut source, &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.frames.len(), 2);
    }
}
