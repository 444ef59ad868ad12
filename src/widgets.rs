//! Reusable clickable UI components.
//!
//! Each component keeps rendering and click target registration together,
//! so a target always lands on the row or columns its text was drawn at.
//!
//! # Components
//!
//! - [`NavLinks`]: Inline navigation links (rendering + click targets).
//! - [`PageBuilder`]: Scrollable document with clickable lines and anchors.
//! - [`wrap_text`]: Word wrapping so one document line is one screen row.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── NavLinks ───────────────────────────────────────────────────

/// A row of navigation links, right-aligned within its area.
///
/// # Example
/// ```ignore
/// NavLinks::new("  ")
///     .link("Projects", style, NAV_PROJECTS)
///     .link("Skills", style, NAV_SKILLS)
///     .render(f, area, &mut cs);
/// ```
pub struct NavLinks<'a> {
    links: Vec<(String, Style, u16)>,
    separator: &'a str,
}

impl<'a> NavLinks<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            links: Vec::new(),
            separator,
        }
    }

    pub fn link(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.links.push((label.into(), style, action_id));
        self
    }

    /// Display width of the rendered links, separators included.
    pub fn width(&self) -> u16 {
        let sep = Line::from(self.separator).width();
        let labels: usize = self
            .links
            .iter()
            .map(|(label, _, _)| Line::from(format!(" {} ", label)).width())
            .sum();
        (labels + sep * self.links.len().saturating_sub(1)) as u16
    }

    /// Render right-aligned in `area` and register one target per link.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let total = self.width().min(area.width);
        let x = area.x + area.width - total;
        let sep_width = Line::from(self.separator).width() as u16;

        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();
        for (i, (label, style, action_id)) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        let target = Rect::new(x, area.y, total, area.height.min(1));
        f.render_widget(Paragraph::new(Line::from(spans)), target);
        cs.register_inline_targets(&widths, sep_width, x, area.y, total, area.height.max(1));
    }
}

// ── PageBuilder ────────────────────────────────────────────────

/// Builds a scrollable document one row at a time, pairing lines with
/// click actions and recording where anchors `A` begin.
///
/// Lines must already fit the viewport width (see [`wrap_text`]); the
/// document is rendered without wrapping so line index == document row.
///
/// # Example
/// ```ignore
/// let mut page = PageBuilder::new(area.width);
/// page.anchor(Section::Projects);
/// page.push(Line::from("Projects"));
/// page.push_clickable(Line::from("◆ Cryptocurrency ..."), TOGGLE_PROJECT_BASE);
/// page.register_targets(area, &mut cs, scroll_row);
/// ```
pub struct PageBuilder<'a, A> {
    width: u16,
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
    anchors: Vec<(A, u16)>,
}

impl<'a, A: Copy + PartialEq> PageBuilder<'a, A> {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            lines: Vec::new(),
            actions: Vec::new(),
            anchors: Vec::new(),
        }
    }

    /// Content width lines are wrapped to.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self, count: u16) {
        for _ in 0..count {
            self.lines.push(Line::from(""));
        }
    }

    /// Add a line that triggers `action_id` when clicked.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.len();
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Wrap `text` to the page width (minus `indent`) and push each row.
    pub fn push_wrapped(&mut self, text: &str, indent: u16, style: Style) {
        let pad = " ".repeat(indent as usize);
        let width = self.width.saturating_sub(indent.saturating_mul(2)).max(1);
        for row in wrap_text(text, width as usize) {
            self.lines.push(Line::from(Span::styled(format!("{}{}", pad, row), style)));
        }
    }

    /// Wrapped text where every row is clickable.
    pub fn push_wrapped_clickable(&mut self, text: &str, indent: u16, style: Style, action_id: u16) {
        let start = self.len();
        self.push_wrapped(text, indent, style);
        for idx in start..self.len() {
            self.actions.push((idx, action_id));
        }
    }

    /// Mark the next pushed line as the start of `anchor`.
    pub fn anchor(&mut self, anchor: A) {
        let idx = self.len();
        self.anchors.push((anchor, idx));
    }

    pub fn len(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn anchors(&self) -> &[(A, u16)] {
        &self.anchors
    }

    pub fn anchor_row(&self, anchor: A) -> Option<u16> {
        self.anchors.iter().find(|(a, _)| *a == anchor).map(|(_, r)| *r)
    }

    /// Rows the document would take if wrapped at the page width; equals
    /// `len()` when every line fits.
    pub fn visual_height(&self) -> usize {
        Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: false })
            .line_count(self.width)
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for clickable lines visible in `area` when
    /// the document is scrolled down by `scroll` rows.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, scroll: u16) {
        for &(line_idx, action_id) in &self.actions {
            if line_idx < scroll {
                continue;
            }
            let offset = line_idx - scroll;
            if offset >= area.height {
                continue;
            }
            cs.add_row_target(area, area.y + offset, action_id);
        }
    }
}

// ── wrap_text ──────────────────────────────────────────────────

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();

        if word_width > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let w = Span::raw(ch.to_string()).width();
                if current_width + w > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
            continue;
        }

        let needed = if current.is_empty() { word_width } else { word_width + 1 };
        if current_width + needed > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
