//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the motion sidebar, in columns.
const SIDEBAR_WIDTH: u16 = 28;

/// Primary screen layout: page, motion sidebar, and a bottom status bar.
pub struct AppLayout {
    pub page_area: Rect,
    pub sidebar_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // page + sidebar
                Constraint::Length(1), // status bar
            ])
            .split(area);

        // Narrow terminals drop the sidebar entirely.
        let sidebar = if rows[0].width >= SIDEBAR_WIDTH * 2 {
            SIDEBAR_WIDTH
        } else {
            0
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(sidebar)])
            .split(rows[0]);

        Self {
            page_area: cols[0],
            sidebar_area: cols[1],
            status_area: rows[1],
        }
    }

    /// Rows of page content visible inside the page block's borders.
    pub fn viewport_rows(&self) -> u16 {
        self.page_area.height.saturating_sub(2)
    }
}
