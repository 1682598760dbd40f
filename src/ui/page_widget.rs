//! Renders the scrolled [`Page`] inside a bordered block.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::app::page::{LineKind, Page};

use super::theme::Theme;

/// The page widget — created fresh each frame.
pub struct PageWidget<'a> {
    page: &'a Page,
    block: Option<Block<'a>>,
}

impl<'a> PageWidget<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self { page, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Only the visible slice is styled; the rest never reaches the buffer.
        let first = self.page.offset_rows() as usize;
        let lines: Vec<Line> = self
            .page
            .lines(inner.width as usize)
            .into_iter()
            .skip(first)
            .take(inner.height as usize)
            .map(|(kind, text)| {
                let style = match kind {
                    LineKind::Heading => Theme::heading_style(),
                    LineKind::Text => Theme::page_style(),
                    LineKind::Art => Theme::art_style(),
                    LineKind::Wave => Theme::wave_style(),
                };
                Line::styled(text, style)
            })
            .collect();

        Paragraph::new(lines)
            .style(Theme::page_style())
            .render(inner, buf);
    }
}
