//! Geometry of the last rendered document: where each section starts and
//! how far the page can scroll.

use super::effects::CELL_HEIGHT_PX;
use super::state::Section;

/// Recorded by every render pass, read by navigation and scroll handling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// First document row of each section, in document order.
    pub anchors: Vec<(Section, u16)>,
    /// Total document rows.
    pub content_rows: u16,
    /// Rows visible below the navigation bar.
    pub viewport_rows: u16,
}

impl PageLayout {
    /// True once a document has been laid out (anchors exist).
    pub fn is_laid_out(&self) -> bool {
        !self.anchors.is_empty()
    }

    pub fn anchor_row(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
    }

    /// Largest scroll offset (px) that still fills the viewport.
    pub fn max_scroll_px(&self) -> f64 {
        self.content_rows.saturating_sub(self.viewport_rows) as f64 * CELL_HEIGHT_PX
    }

    pub fn clamp_scroll(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_px())
    }

    /// Scroll offset (px) that brings `section` to the top of the viewport,
    /// or `None` when the section is not part of the document.
    pub fn target_offset(&self, section: Section) -> Option<f64> {
        let row = self.anchor_row(section)?;
        Some(self.clamp_scroll(row as f64 * CELL_HEIGHT_PX))
    }

    /// Viewport height in pixels.
    pub fn page_px(&self) -> f64 {
        self.viewport_rows as f64 * CELL_HEIGHT_PX
    }
}
