//! Terminal event polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to a TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Terminal resize (columns, rows)
    Resize(u16, u16),
    /// No input within the poll interval
    Tick,
}

/// Polls crossterm for events with a fixed tick rate.
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl EventHandler {
    /// Blocks until the next event or tick.
    ///
    /// Only key presses are forwarded; release/repeat events are dropped so
    /// Windows terminals do not double-fire.
    pub fn next(&self) -> Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            return Ok(match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => TuiEvent::Key(key),
                Event::Resize(cols, rows) => TuiEvent::Resize(cols, rows),
                _ => TuiEvent::Tick,
            });
        }
        Ok(TuiEvent::Tick)
    }
}
