//! Deterministic page layout: greedy word wrap and page breaking.
//!
//! The engine maps an assembled text blob onto fixed-size pages. Width
//! measurement is an injected capability; the engine performs no metric
//! estimation of its own.

use core::fmt;
use core::mem;
use std::sync::Arc;

/// Text width measurement capability supplied by the output backend.
pub trait TextMeasurer: Send + Sync {
    /// Rendered width of `text` at `font_size`, in page units.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Page geometry and type metrics for layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Page width in page units.
    pub page_width: f32,
    /// Page height in page units.
    pub page_height: f32,
    /// Uniform margin applied on all four edges.
    pub margin: f32,
    /// Font size used for both measurement and drawing.
    pub font_size: f32,
    /// Fixed vertical advance per output line, independent of glyph metrics.
    pub line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::a4()
    }
}

impl LayoutConfig {
    /// A4 portrait (595x842) with 50-unit margins, 12-unit type on an
    /// 18-unit line.
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 50.0,
            font_size: 12.0,
            line_height: 18.0,
        }
    }

    /// Horizontal span available to a wrapped line.
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn top_cursor(&self) -> f32 {
        self.page_height - self.margin
    }

    fn line_floor(&self) -> f32 {
        self.margin + self.line_height
    }
}

/// One drawn line and its position on a page.
///
/// `y` is the text baseline anchor in page coordinates (origin bottom-left,
/// y grows upward).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Page of placed lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPage {
    /// 1-based page number.
    pub page_number: usize,
    /// Placed lines in top-to-bottom order.
    pub lines: Vec<PlacedLine>,
}

impl LayoutPage {
    fn new(page_number: usize) -> Self {
        Self {
            page_number,
            lines: Vec::new(),
        }
    }
}

/// Greedy, never-backtracking line/page layout over an abstract measurer.
#[derive(Clone)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
    measurer: Arc<dyn TextMeasurer>,
}

impl fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine").field("cfg", &self.cfg).finish()
    }
}

impl LayoutEngine {
    /// Create an engine over `cfg` and the backend's measurement capability.
    pub fn new(cfg: LayoutConfig, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self { cfg, measurer }
    }

    /// Geometry this engine lays out against.
    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Lay `text` onto pages.
    ///
    /// The blob splits into segments on `\n`. Blank or whitespace-only
    /// segments consume one line height without drawing, preserving the
    /// assembler's intentional spacing. Non-empty segments word-wrap
    /// greedily against the usable width. Page-break decisions are made per
    /// physical output line, never per segment, so a paragraph may split
    /// across pages mid-sentence; a line itself never splits across pages.
    pub fn paginate(&self, text: &str) -> Vec<LayoutPage> {
        let mut st = LayoutState::new(self.cfg);
        for segment in text.split('\n') {
            if segment.trim().is_empty() {
                st.advance_blank_line();
                continue;
            }
            for line in self.wrap_segment(segment) {
                st.place_line(line);
            }
        }
        let pages = st.into_pages();
        log::debug!("laid out {} bytes of text onto {} page(s)", text.len(), pages.len());
        pages
    }

    /// Greedy word wrap of one segment.
    ///
    /// Tokens accumulate into a candidate line while the measured candidate
    /// fits the usable width; the first token that does not fit starts the
    /// next line. A single token wider than the usable width is placed alone
    /// and allowed to overflow the right margin, never split or hyphenated.
    fn wrap_segment(&self, segment: &str) -> Vec<String> {
        let usable = self.cfg.usable_width();
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in segment.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                let mut joined = String::with_capacity(current.len() + 1 + word.len());
                joined.push_str(&current);
                joined.push(' ');
                joined.push_str(word);
                joined
            };

            if self.measurer.text_width(&candidate, self.cfg.font_size) <= usable {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(mem::take(&mut current));
                }
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Cursor state threaded through one pagination run.
struct LayoutState {
    cfg: LayoutConfig,
    cursor_y: f32,
    page: LayoutPage,
    done: Vec<LayoutPage>,
}

impl LayoutState {
    fn new(cfg: LayoutConfig) -> Self {
        Self {
            cfg,
            cursor_y: cfg.top_cursor(),
            page: LayoutPage::new(1),
            done: Vec::new(),
        }
    }

    /// Roll to a fresh page when the cursor has run out of vertical room.
    ///
    /// Applies to every consumed line slot, drawn or blank, so runs of blank
    /// lines paginate the same way drawn lines do.
    fn ensure_line_slot(&mut self) {
        if self.cursor_y < self.cfg.line_floor() {
            self.start_next_page();
        }
    }

    fn start_next_page(&mut self) {
        let next = self.page.page_number + 1;
        self.done.push(mem::replace(&mut self.page, LayoutPage::new(next)));
        self.cursor_y = self.cfg.top_cursor();
    }

    fn advance_blank_line(&mut self) {
        self.ensure_line_slot();
        self.cursor_y -= self.cfg.line_height;
    }

    fn place_line(&mut self, text: String) {
        self.ensure_line_slot();
        self.page.lines.push(PlacedLine {
            x: self.cfg.margin,
            y: self.cursor_y,
            text,
        });
        self.cursor_y -= self.cfg.line_height;
    }

    fn into_pages(mut self) -> Vec<LayoutPage> {
        self.done.push(self.page);
        self.done
    }
}
