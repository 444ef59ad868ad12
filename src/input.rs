//! Input normalisation: event types, click targets, and pixel/pointer
//! coordinate conversion.
//!
//! Nothing here touches the DOM, so the whole module is host-testable.

use ratzilla::ratatui::layout::Rect;

/// Non-character keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Esc,
}

/// All input the page reacts to, normalised from keyboard, mouse, touch and wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A character key press.
    Key(char),
    /// A navigation key press.
    Nav(NavKey),
    /// A click/tap on a registered target, identified by a semantic action ID
    /// (see `portfolio::actions`).
    Click(u16),
    /// Wheel scroll by a pixel delta (positive = down).
    Scroll(f64),
    /// Pointer moved; coordinates already normalised to roughly [-0.5, 0.5].
    Pointer(f64, f64),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width target on `row`, ignored when the row lies outside `area`.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register targets for labels laid out left to right on one line.
    ///
    /// `items` holds `(display_width, action_id)` per label, `gap` is the
    /// display width between labels. Each target covers its label plus half
    /// of each neighbouring gap; the first reaches back to `x` and the last
    /// runs to `x + total_width`, so the line has no dead columns.
    pub fn register_inline_targets(
        &mut self,
        items: &[(u16, u16)],
        gap: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = items.len();
        if n == 0 || total_width == 0 {
            return;
        }

        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in items.iter().enumerate() {
            if i > 0 {
                cursor += gap;
            }
            starts.push(cursor);
            cursor += w;
        }

        for (i, &(width, action_id)) in items.iter().enumerate() {
            let left = if i == 0 { 0 } else { starts[i] - gap / 2 - gap % 2 };
            let right = if i == n - 1 {
                total_width
            } else {
                starts[i] + width + gap / 2
            };
            let right = right.min(total_width);
            if right > left {
                self.add_click_target(Rect::new(x + left, y, right - left, height), action_id);
            }
        }
    }

    /// Hit-test a cell against all targets. Later registrations win on
    /// overlap, so overlays drawn last take the click.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Below this width the navigation links collapse into the menu button.
pub const NARROW_WIDTH: u16 = 60;

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Convert a pixel Y coordinate (relative to the grid's top edge) to a row.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate (relative to the grid's left edge) to a column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols { None } else { Some(col) }
}

/// Express a pointer position as an offset from the viewport centre,
/// scaled so the viewport spans [-0.5, 0.5] on each axis.
///
/// A degenerate viewport yields the centre.
pub fn normalize_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return (0.0, 0.0);
    }
    (client_x / viewport_w - 0.5, client_y / viewport_h - 0.5)
}

/// Wheel delta in pixels. `mode` follows `WheelEvent.deltaMode`:
/// 0 = pixels, 1 = lines, 2 = pages.
pub fn wheel_delta_px(delta: f64, mode: u32, line_px: f64, page_px: f64) -> f64 {
    match mode {
        1 => delta * line_px,
        2 => delta * page_px,
        _ => delta,
    }
}
