//! Scroll- and pointer-driven visual values.
//!
//! Every function here is pure: the render pass feeds it the snapshot's
//! scroll offset or pointer position and applies the result to cells.
//! Each value is clamped so content never becomes invisible or illegible.

use ratzilla::ratatui::style::Color;

use crate::content::Rgb;

/// Pixel height of one terminal row; converts scroll pixels to rows.
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Pixel width of one terminal column.
pub const CELL_WIDTH_PX: f64 = 8.0;

pub const HERO_OPACITY_FLOOR: f64 = 0.4;
pub const HERO_BLUR_MAX: f64 = 6.0;
pub const HERO_SCALE_FLOOR: f64 = 0.5;
/// Navigation bar gains a backdrop once scrolled past this offset.
pub const NAV_BACKDROP_AFTER_PX: f64 = 100.0;
/// How far the hero glow travels for a pointer at the viewport edge.
pub const GLOW_TRAVEL_PX: f64 = 50.0;
/// Fraction of glyphs replaced at maximum blur.
const MAX_DITHER: f64 = 0.6;

/// Hero presentation at a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    /// Name opacity, 1 at the top, never below `HERO_OPACITY_FLOOR`.
    pub opacity: f64,
    /// Blur radius, 0 at the top, never above `HERO_BLUR_MAX`.
    pub blur: f64,
    pub scale: f64,
    /// Downward shift of the name (px).
    pub parallax_px: f64,
    pub tagline_opacity: f64,
    pub tagline_parallax_px: f64,
    pub indicator_opacity: f64,
}

impl HeroStyle {
    pub fn at(scroll_y: f64) -> Self {
        let y = scroll_y.max(0.0);
        Self {
            opacity: (1.0 - y * 0.002).max(HERO_OPACITY_FLOOR),
            blur: (y * 0.015).min(HERO_BLUR_MAX),
            scale: (1.0 - y * 0.0005).max(HERO_SCALE_FLOOR),
            parallax_px: y * 0.5,
            tagline_opacity: (1.0 - y * 0.002).clamp(0.0, 1.0),
            tagline_parallax_px: y * 0.3,
            indicator_opacity: (1.0 - y * 0.01).clamp(0.0, 1.0),
        }
    }

    /// Parallax shift in whole rows.
    pub fn parallax_rows(&self) -> u16 {
        (self.parallax_px / CELL_HEIGHT_PX) as u16
    }

    pub fn tagline_parallax_rows(&self) -> u16 {
        (self.tagline_parallax_px / CELL_HEIGHT_PX) as u16
    }

    /// Share of name glyphs to dither at this blur radius.
    pub fn blur_coverage(&self) -> f64 {
        self.blur / HERO_BLUR_MAX * MAX_DITHER
    }
}

/// Introduction heading fades in over the first 500px.
pub fn intro_reveal(scroll_y: f64) -> f64 {
    (scroll_y * 0.002).clamp(0.0, 1.0)
}

/// Statistic cards start appearing after 200px.
pub fn stat_reveal(scroll_y: f64) -> f64 {
    ((scroll_y - 200.0) * 0.003).clamp(0.0, 1.0)
}

pub fn nav_backdrop(scroll_y: f64) -> bool {
    scroll_y > NAV_BACKDROP_AFTER_PX
}

/// Glow displacement in pixels for a normalised pointer position.
pub fn glow_offset(pointer: (f64, f64)) -> (f64, f64) {
    (pointer.0 * GLOW_TRAVEL_PX, pointer.1 * GLOW_TRAVEL_PX)
}

/// Tint strength at normalised distance `d` from the glow centre
/// (0 at centre, 1 at the rim). Zero outside the rim.
pub fn glow_intensity(d: f64) -> f64 {
    if d >= 1.0 {
        0.0
    } else {
        0.3 * (1.0 - d) * (1.0 - d)
    }
}

/// Colour of the hero glow: purple at full strength.
pub const GLOW_RGB: Rgb = (147, 51, 234);

/// Scale a colour toward black; terminal stand-in for opacity over a black page.
pub fn fade(rgb: Rgb, opacity: f64) -> Color {
    let o = opacity.clamp(0.0, 1.0);
    Color::Rgb(
        (rgb.0 as f64 * o).round() as u8,
        (rgb.1 as f64 * o).round() as u8,
        (rgb.2 as f64 * o).round() as u8,
    )
}

/// Linear interpolation between two colours, `t` in [0, 1].
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Ordered-dither threshold in [0, 1) for a cell. A glyph is blurred when
/// this is below the blur coverage, so coverage grows monotonically.
pub fn dither_threshold(x: u16, y: u16) -> f64 {
    BAYER_4X4[(y % 4) as usize][(x % 4) as usize] as f64 / 16.0
}
