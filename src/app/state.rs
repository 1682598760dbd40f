//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::scroll::ScrollController;

use super::page::Page;

/// Top-level application state.
pub struct AppState {
    /// The scrolled document.
    pub page: Page,
    /// Owns the page's scroll position once input arrives.
    pub scroll: ScrollController,
    pub config: AppConfig,
    /// Show the controller overlay.
    pub debug: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Set by anything that changes what is on screen; cleared after a draw.
    pub needs_redraw: bool,
    /// Frames delivered to the controller since start-up.
    pub frames: u64,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(page: Page, config: AppConfig) -> Self {
        Self {
            page,
            scroll: ScrollController::new(config.scroll),
            config,
            debug: false,
            should_quit: false,
            needs_redraw: true,
            frames: 0,
            status_message: None,
        }
    }

    /// Ask for a redraw on the next loop iteration.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}
