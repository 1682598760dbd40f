//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  Mouse
//! wheel motion is translated into [`WheelSample`]s here; every other mouse
//! event is dropped.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

use crate::core::wheel::WheelSample;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Wheel(WheelSample),
    Resize(u16, u16),
}

/// Translate one crossterm event.  `None` for events the page ignores.
pub fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) if k.kind != KeyEventKind::Release => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => match m.kind {
            // Terminals report one notch per event; up is positive wheelDelta.
            MouseEventKind::ScrollUp => Some(AppEvent::Wheel(WheelSample::from_notches(1.0))),
            MouseEventKind::ScrollDown => Some(AppEvent::Wheel(WheelSample::from_notches(-1.0))),
            _ => None,
        },
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(poll_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        // Poll with a timeout so a dropped receiver is noticed even when the
        // terminal is quiet.
        if !event::poll(poll_rate).unwrap_or(false) {
            if tx.is_closed() {
                break;
            }
            continue;
        }
        let Ok(ev) = event::read() else {
            continue;
        };
        if let Some(app_event) = translate(ev) {
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
