//! The scrollytelling page — the element whose offset the controller owns.
//!
//! Content is laid out in terminal rows; all scroll arithmetic happens in
//! virtual pixels (`rows × row_height`) so the controller's speed and
//! threshold mean the same thing regardless of terminal size.

use crate::core::motions::{self, MotionOptions, SectionLayout};
use crate::core::scroll::{ScrollExtent, ScrollSurface};

/// What a content line is, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Text,
    Art,
    Wave,
}

/// A scroll-driven value shown next to a section.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub label: &'static str,
    pub options: MotionOptions,
}

/// One chapter of the page.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub blurb: &'static [&'static str],
    pub art: &'static [&'static str],
    /// Height in rows, including padding.
    pub rows: usize,
    pub motions: Vec<Motion>,
}

impl Section {
    /// Render the section into exactly `rows` lines.
    fn lines(&self, width: usize) -> Vec<(LineKind, String)> {
        let mut out = Vec::with_capacity(self.rows);
        out.push((LineKind::Heading, format!("  {}", self.title.to_uppercase())));
        out.push((LineKind::Text, String::new()));
        out.extend(self.blurb.iter().map(|l| (LineKind::Text, format!("  {l}"))));
        out.push((LineKind::Text, String::new()));

        let art_w = self.art.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let pad = " ".repeat(width.saturating_sub(art_w) / 2);
        out.extend(self.art.iter().map(|l| (LineKind::Art, format!("{pad}{l}"))));

        let mut i = 0;
        while out.len() < self.rows {
            out.push((LineKind::Wave, wave_line(width, i)));
            i += 1;
        }
        out.truncate(self.rows);
        out
    }
}

/// Filler between chapters; shifts phase per row so scrolling reads as motion.
fn wave_line(width: usize, row: usize) -> String {
    const PATTERN: &[char] = &['~', ' ', ' ', '.', ' ', ' ', '~', ' ', ' ', ' ', '°', ' '];
    (0..width)
        .map(|x| {
            if (x + row * 3) % 7 == 0 {
                PATTERN[(x + row) % PATTERN.len()]
            } else {
                ' '
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<Section>,
    /// Virtual pixels per row.
    row_height: f64,
    viewport_rows: u16,
    /// Current scroll offset in virtual pixels.
    offset: f64,
}

impl Page {
    pub fn new(sections: Vec<Section>, row_height: f64) -> Self {
        Self {
            sections,
            row_height,
            viewport_rows: 0,
            offset: 0.0,
        }
    }

    /// The whale → seahorse → coral story.
    pub fn ocean(row_height: f64) -> Self {
        Self::new(ocean_sections(), row_height)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(|s| s.rows).sum()
    }

    /// Update the visible height.  The offset is re-clamped to the new bound.
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.offset = self.offset.clamp(0.0, self.extent().max_scroll());
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_rows as f64 * self.row_height
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset snapped to whole rows for rendering.
    pub fn offset_rows(&self) -> u16 {
        let rows = (self.offset / self.row_height).round();
        rows.clamp(0.0, u16::MAX as f64) as u16
    }

    /// Pixel geometry of every section.
    pub fn layouts(&self) -> Vec<SectionLayout> {
        let viewport = self.viewport_height();
        let mut top = 0.0;
        self.sections
            .iter()
            .map(|s| {
                let height = s.rows as f64 * self.row_height;
                let layout = motions::set_layout(top, height, viewport);
                top += height;
                layout
            })
            .collect()
    }

    /// Index of the section under the middle of the viewport.
    pub fn active_section(&self) -> usize {
        let probe = self.offset + self.viewport_height() / 2.0;
        let mut top = 0.0;
        for (i, s) in self.sections.iter().enumerate() {
            top += s.rows as f64 * self.row_height;
            if probe < top {
                return i;
            }
        }
        self.sections.len().saturating_sub(1)
    }

    /// Section-relative scroll offset, as fed to `calc_value`.
    pub fn local_scroll(&self, index: usize) -> f64 {
        let top: f64 = self.sections[..index]
            .iter()
            .map(|s| s.rows as f64 * self.row_height)
            .sum();
        self.offset - top
    }

    /// Every content line, `width` columns wide.
    pub fn lines(&self, width: usize) -> Vec<(LineKind, String)> {
        self.sections.iter().flat_map(|s| s.lines(width)).collect()
    }
}

impl ScrollSurface for Page {
    fn extent(&self) -> ScrollExtent {
        ScrollExtent::new(self.total_rows() as f64 * self.row_height, self.viewport_height())
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.extent().max_scroll());
    }
}

fn ocean_sections() -> Vec<Section> {
    vec![
        Section {
            title: "Humpback whale",
            blurb: &[
                "Twenty points per vertex, jittered a little, drift in the dark.",
                "Scroll to sink deeper. The wheel sets where you are going;",
                "the page eases there a twelfth of the way each frame.",
            ],
            art: &[
                r"                 .-'",
                r"            '--./ /     _.---.",
                r"            '-,  (__..-`       \",
                r"               \          .     |",
                r"                `,.__.   ,__.--/",
                r"                  '._/_.'___.-`",
            ],
            rows: 60,
            motions: vec![
                Motion {
                    label: "morph",
                    options: MotionOptions::new(0.1, 0.7, 0.0, 100.0),
                },
                Motion {
                    label: "bloom",
                    options: MotionOptions::new(0.0, 1.0, 3.0, 1.0),
                },
            ],
        },
        Section {
            title: "Seahorse",
            blurb: &[
                "The particles pull apart and settle into a new outline.",
                "Flick the wheel hard: the target jumps, the motion does not.",
            ],
            art: &[
                r"      _",
                r"     ( \_",
                r"      \  )",
                r"      /  \",
                r"     (   /",
                r"      \ (",
                r"       `-'",
            ],
            rows: 72,
            motions: vec![
                Motion {
                    label: "morph",
                    options: MotionOptions::new(0.0, 0.5, 0.0, 100.0),
                },
                Motion {
                    label: "bloom",
                    options: MotionOptions::new(0.2, 0.9, 1.0, 2.5),
                },
            ],
        },
        Section {
            title: "Coral",
            blurb: &[
                "The reef at the bottom. Keep scrolling and nothing moves:",
                "the target is clamped to the end of the page.",
            ],
            art: &[
                r"    \ | /   \|/    \ | /",
                r"   --\|/-- --|-- --\|/--",
                r"      |     /|\     |",
                r"    __|____/_|_\____|__",
            ],
            rows: 56,
            motions: vec![
                Motion {
                    label: "morph",
                    options: MotionOptions::new(0.0, 0.6, 0.0, 100.0),
                },
                Motion {
                    label: "bloom",
                    options: MotionOptions::new(0.0, 0.8, 2.5, 0.6),
                },
            ],
        },
    ]
}
