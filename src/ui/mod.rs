//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer reads the page and controller state and turns them into cells
//! on the terminal.  Nothing here mutates scroll state.

pub mod debug;
pub mod layout;
pub mod page_widget;
pub mod sidebar;
pub mod theme;
