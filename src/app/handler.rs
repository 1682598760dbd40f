//! Input handling — maps key/wheel/resize events and frame ticks to state
//! mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;
use crate::core::scroll::{Phase, ScrollSurface};
use crate::core::wheel::WheelSample;

use super::state::AppState;

/// Wheel input: normalise, move the target, wake the follower loop.
pub fn handle_wheel(state: &mut AppState, sample: WheelSample) {
    let extent = state.page.extent();
    let notches = state.scroll.handle_wheel(sample, extent);
    tracing::trace!(notches, to = state.scroll.state().target_position, "wheel");
    if state.status_message.take().is_some() || state.debug {
        state.request_redraw();
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Any key dismisses the last status message.
    if state.status_message.take().is_some() {
        state.request_redraw();
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    let extent = state.page.extent();
    let row = state.page.row_height();
    // Keep one row of overlap so the reader doesn't lose their place.
    let page = (extent.viewport_height - row).max(row);

    match action {
        Action::Quit => state.should_quit = true,
        Action::LineUp => {
            state.scroll.handle_wheel(WheelSample::from_notches(1.0), extent);
        }
        Action::LineDown => {
            state.scroll.handle_wheel(WheelSample::from_notches(-1.0), extent);
        }
        Action::PageUp => state.scroll.scroll_by(-page, extent),
        Action::PageDown => state.scroll.scroll_by(page, extent),
        Action::Top => state.scroll.scroll_to(0.0, extent),
        Action::Bottom => state.scroll.scroll_to(extent.max_scroll(), extent),
        Action::ToggleDebug => {
            state.debug = !state.debug;
            state.status_message = Some(format!(
                "Debug overlay {}",
                if state.debug { "on" } else { "off" }
            ));
            state.request_redraw();
        }
    }
}

/// Terminal resized: the page gets the new viewport, the controller re-clamps.
pub fn handle_resize(state: &mut AppState, viewport_rows: u16) {
    state.page.set_viewport_rows(viewport_rows);
    state.scroll.relayout(state.page.extent());
    state.request_redraw();
}

/// One animation frame.  Returns `true` while another frame is wanted.
///
/// On the frame that settles, the page lands on the target itself: the
/// controller stops inside its threshold band, which can be most of a row
/// short of where the reader asked to go.
pub fn on_frame(state: &mut AppState) -> bool {
    let before = state.page.offset_rows();
    let was_animating = state.scroll.is_animating();
    let frame = state.scroll.tick(&mut state.page);
    state.frames += 1;
    tracing::trace!(position = frame.position, step = frame.step, "frame");

    if was_animating && frame.phase == Phase::Idle {
        state.page.set_offset(state.scroll.state().target_position);
    }

    if state.page.offset_rows() != before || state.debug {
        state.request_redraw();
    }
    frame.phase == Phase::Converging
}
