//! Motion sidebar — progress through the active section and the values
//! derived from it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::app::page::Page;
use crate::core::motions;

use super::theme::Theme;

/// One derived value for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionReading {
    pub label: &'static str,
    pub value: f64,
}

/// Progress and motion values for the section under the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarModel {
    pub title: &'static str,
    /// Clamped to `[0, 1]` for the gauge.
    pub progress: f64,
    pub readings: Vec<MotionReading>,
}

impl SidebarModel {
    pub fn from_page(page: &Page) -> Option<Self> {
        let index = page.active_section();
        let section = page.sections().get(index)?;
        let layout = page.layouts().get(index).copied()?;
        let height = section.rows as f64 * page.row_height();
        let local = page.local_scroll(index);

        let readings = section
            .motions
            .iter()
            .map(|m| MotionReading {
                label: m.label,
                value: motions::calc_value(height, &m.options, local),
            })
            .collect();

        Some(Self {
            title: section.title,
            progress: motions::ratio(&layout, page.offset()).min(1.0),
            readings,
        })
    }
}

pub struct Sidebar<'a> {
    pub page: &'a Page,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 4 {
            return;
        }
        let Some(model) = SidebarModel::from_page(self.page) else {
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", model.title))
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        Gauge::default()
            .gauge_style(Theme::gauge_style())
            .ratio(model.progress)
            .label(format!("{:.0}%", model.progress * 100.0))
            .render(chunks[0], buf);

        let mut lines = vec![Line::raw("")];
        for r in &model.readings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<8}", r.label), Theme::label_style()),
                Span::styled(format!("{:>8.2}", r.value), Theme::value_style()),
            ]));
        }
        Paragraph::new(lines).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll::ScrollSurface;

    #[test]
    fn top_of_page_reads_start_values() {
        let mut page = Page::ocean(10.0);
        page.set_viewport_rows(20);
        let model = SidebarModel::from_page(&page).unwrap();
        assert_eq!(model.title, "Humpback whale");
        assert_eq!(model.progress, 0.0);
        assert_eq!(model.readings[0].value, 0.0);
        assert_eq!(model.readings[1].value, 3.0);
    }

    #[test]
    fn mid_section_interpolates() {
        let mut page = Page::ocean(10.0);
        page.set_viewport_rows(20);
        // Whale is 600px tall; bloom runs 3.0 → 1.0 over the whole height.
        page.set_offset(150.0);
        let model = SidebarModel::from_page(&page).unwrap();
        assert_eq!(model.readings[1].value, 2.5);
        // 150 / (600 - 200)
        assert_eq!(model.progress, 0.375);
    }

    #[test]
    fn progress_gauge_is_clamped() {
        let mut page = Page::ocean(10.0);
        page.set_viewport_rows(20);
        // Past the whale's scrollable span (400px) but still in view.
        page.set_offset(450.0);
        let model = SidebarModel::from_page(&page).unwrap();
        assert_eq!(model.title, "Humpback whale");
        assert_eq!(model.progress, 1.0);
    }
}
