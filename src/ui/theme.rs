//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page ───────────────────────────────────────────────────
    pub fn page_style() -> Style {
        Style::default().fg(Color::Gray).bg(Color::Black)
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn art_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn wave_style() -> Style {
        Style::default().fg(Color::Blue)
    }

    // ── sidebar ────────────────────────────────────────────────
    pub fn gauge_style() -> Style {
        Style::default().fg(Color::LightCyan).bg(Color::Black)
    }

    pub fn label_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
