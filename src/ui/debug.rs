//! Controller debug overlay, toggled with `d` or started with `--debug`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::scroll::{Phase, ScrollController, ScrollExtent};

pub struct DebugOverlay<'a> {
    pub scroll: &'a ScrollController,
    pub extent: ScrollExtent,
    pub frames: u64,
}

impl DebugOverlay<'_> {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let state = self.scroll.state();
        let config = self.scroll.config();
        vec![
            (
                "phase",
                match self.scroll.phase() {
                    Phase::Idle => "idle".into(),
                    Phase::Converging => "converging".into(),
                },
            ),
            ("target", format!("{:.2}", state.target_position)),
            ("current", format!("{:.2}", state.current_position)),
            ("max", format!("{:.0}", self.extent.max_scroll())),
            ("notches", format!("{:+.3}", self.scroll.last_notches())),
            ("step", format!("{:+.3}", self.scroll.last_step())),
            ("frames", self.frames.to_string()),
            (
                "tuning",
                format!("{}/{}/{}", config.speed, config.smoothing, config.threshold),
            ),
        ]
    }
}

impl Widget for DebugOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows();
        let height = rows.len() as u16 + 2;
        let popup = top_right(30, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" scroll ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(k, v)| {
                Line::from(vec![
                    Span::styled(format!(" {k:<8}"), Style::default().fg(Color::DarkGray)),
                    Span::styled(v, Style::default().fg(Color::White)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Fixed-size rectangle in the top-right corner, clamped to `area`.
fn top_right(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(area.x + area.width - w, area.y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll::ScrollConfig;

    #[test]
    fn reports_phase_and_positions() {
        let mut scroll = ScrollController::new(ScrollConfig::default());
        let extent = ScrollExtent::new(1000.0, 100.0);
        scroll.scroll_to(120.0, extent);
        let overlay = DebugOverlay {
            scroll: &scroll,
            extent,
            frames: 3,
        };
        let rows = overlay.rows();
        assert_eq!(rows[0].1, "converging");
        assert_eq!(rows[1].1, "120.00");
        assert_eq!(rows[3].1, "900");
        assert_eq!(rows[6].1, "3");
        assert_eq!(rows[7].1, "30/12/0.5");
    }

    #[test]
    fn renders_inside_small_areas() {
        let scroll = ScrollController::new(ScrollConfig::default());
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        DebugOverlay {
            scroll: &scroll,
            extent: ScrollExtent::default(),
            frames: 0,
        }
        .render(area, &mut buf);
    }
}
