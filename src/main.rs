//! Inertial wheel scrolling for a terminal scrollytelling page.
//!
//! Run the binary to open the page; scroll with the mouse wheel or the
//! keyboard.  Run with `--write-config` to persist the effective settings.

mod app;
mod config;
mod core;
mod error;
mod ui;

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    page::Page,
    state::AppState,
};
use crate::config::{Action, AppConfig};
use crate::core::scroll::ScrollSurface;
use crate::ui::{
    debug::DebugOverlay, layout::AppLayout, page_widget::PageWidget, sidebar::Sidebar,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Smooth-scrolling terminal page")]
struct Cli {
    /// Scroll distance per wheel notch, in virtual pixels.
    #[arg(long)]
    speed: Option<f64>,

    /// Divisor of the remaining distance per frame (>= 1; higher = softer).
    #[arg(long)]
    smoothing: Option<f64>,

    /// Per-frame step at which the easing loop settles.
    #[arg(long)]
    threshold: Option<f64>,

    /// Milliseconds between animation frames.
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Virtual pixels per terminal row.
    #[arg(long = "row-height")]
    row_height: Option<f64>,

    /// Start with the controller overlay visible.
    #[arg(long)]
    debug: bool,

    /// Save the effective settings to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(v) = self.speed {
            config.scroll.speed = v;
        }
        if let Some(v) = self.smoothing {
            config.scroll.smoothing = v;
        }
        if let Some(v) = self.threshold {
            config.scroll.threshold = v;
        }
        if let Some(v) = self.frame_ms {
            config.set_frame_ms(v);
        }
        if let Some(v) = self.row_height {
            config.row_height = v;
        }
    }
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    let page_block = Block::default()
        .title(" tide ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(PageWidget::new(&state.page).block(page_block), layout.page_area);
    frame.render_widget(Sidebar { page: &state.page }, layout.sidebar_area);

    let hint = format!(
        "{}/{}: scroll | {}: page | {}: debug | {}: quit",
        state.config.short_binding(Action::LineDown),
        state.config.short_binding(Action::LineUp),
        state.config.short_binding(Action::PageDown),
        state.config.short_binding(Action::ToggleDebug),
        state.config.short_binding(Action::Quit),
    );
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.debug {
        frame.render_widget(
            DebugOverlay {
                scroll: &state.scroll,
                extent: state.page.extent(),
                frames: state.frames,
            },
            layout.page_area,
        );
    }
}

fn viewport_rows(width: u16, height: u16) -> u16 {
    AppLayout::from_area(Rect::new(0, 0, width, height)).viewport_rows()
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    cli.apply(&mut config);
    config.validate().context("invalid scroll settings")?;

    if cli.write_config {
        let path = config.save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    tracing::info!(
        speed = config.scroll.speed,
        smoothing = config.scroll.smoothing,
        threshold = config.scroll.threshold,
        frame_ms = config.frame_ms,
        "starting"
    );

    let frame_interval = Duration::from_millis(config.frame_ms);
    let page = Page::ocean(config.row_height);
    let mut state = AppState::new(page, config);
    state.debug = cli.debug;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    handler::handle_resize(&mut state, viewport_rows(size.width, size.height));

    // ── async plumbing ────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));
    let mut frame_clock = tokio::time::interval(frame_interval);
    frame_clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // ── event loop ────────────────────────────────────────────
    loop {
        if state.needs_redraw {
            terminal.draw(|frame| draw(frame, &state))?;
            state.needs_redraw = false;
        }

        if state.should_quit {
            break;
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Wheel(sample) => handler::handle_wheel(&mut state, sample),
                    AppEvent::Resize(w, h) => handler::handle_resize(&mut state, viewport_rows(w, h)),
                }
            }

            // The frame clock is only polled while the controller is moving,
            // so an idle page schedules nothing.
            _ = frame_clock.tick(), if state.scroll.is_animating() => {
                if !handler::on_frame(&mut state) {
                    tracing::debug!(frames = state.frames, "frame clock parked");
                }
            }

            else => break,
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["tide-scroll", "--speed", "45", "--smoothing", "6", "--debug"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.scroll.speed, 45.0);
        assert_eq!(config.scroll.smoothing, 6.0);
        assert_eq!(config.scroll.threshold, 0.5);
        assert!(cli.debug);
    }

    #[test]
    fn cli_rejects_bad_smoothing_via_validate() {
        let cli = Cli::parse_from(["tide-scroll", "--smoothing", "0.2"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn cli_frame_interval_is_clamped_like_the_config_file() {
        let mut config = AppConfig::default();
        Cli::parse_from(["tide-scroll", "--frame-ms", "100000"]).apply(&mut config);
        assert_eq!(config.frame_ms, 100);
        Cli::parse_from(["tide-scroll", "--frame-ms", "1"]).apply(&mut config);
        assert_eq!(config.frame_ms, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_screen_draws_page_status_and_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = AppState::new(Page::ocean(10.0), AppConfig::default());
        state.debug = true;
        handler::handle_resize(&mut state, viewport_rows(100, 30));

        terminal.draw(|frame| draw(frame, &state)).unwrap();
        let buf = terminal.backend().buffer();
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("HUMPBACK WHALE"));
        assert!(text.contains("quit"));
        assert!(text.contains("phase"));
    }
}
