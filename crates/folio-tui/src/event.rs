use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, waiting at most the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.next_within(self.tick_rate)
    }

    /// Poll for the next event, waiting at most `timeout`.
    /// Used at frame rate while a transition or deferred frame is pending,
    /// and to wake up in time for the autoplay deadline.
    pub fn next_within(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        let timeout = timeout.min(self.tick_rate);
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only handle key press events, ignore release events
        // (crossterm 0.27+ sends release events on some systems)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, drag or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
