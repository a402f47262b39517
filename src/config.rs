//! Page-wide constants and runtime configuration.
//!
//! All geometry, scale ratios and timing parameters live here so they can
//! be tuned in one place. The defaults target a 128×160 ST7735S panel.

use embedded_graphics::pixelcolor::Rgb565;

use crate::error::{Error, Result};

// Capacity

/// Maximum number of options a single page can hold.
pub const MAX_OPTIONS: usize = 8;

// Option box geometry (default mode)

/// Box width, border included (px).
pub const BOX_WIDTH: u32 = 96;

/// Box height, border included (px).
pub const BOX_HEIGHT: u32 = 28;

/// Border stroke width (px).
pub const BOX_BORDER: u32 = 1;

/// Vertical gap above and below every box (px).
pub const BOX_Y_MARGIN: u32 = 4;

/// Horizontal gap between border and icon, and between icon and text (px).
pub const ICON_X_MARGIN: u32 = 4;

/// Share of the inner box height the icon occupies (percent).
pub const ICON_Y_RATIO_PCT: u32 = 80;

/// Label glyph height (px).
pub const TEXT_SIZE: u32 = 10;

// Hover mode

/// Box scale in hover mode, as a ratio (6/5 = 1.2×).
pub const BOX_HOVER_SCALE: (u32, u32) = (6, 5);

/// Border scale in hover mode.
pub const BORDER_HOVER_SCALE: u32 = 2;

// Timing

/// Render tick period (ms).
pub const RENDER_TICK_MS: u64 = 10;

/// Colour theme shared by every option box on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Rgb565,
    /// Border, icon and text colour of a box in default mode.
    pub default: Rgb565,
    /// Border, icon and text colour of the hovered box. Also the
    /// full-bleed background once a selection is confirmed.
    pub hovered: Rgb565,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        background: Rgb565::new(3, 7, 6),
        default: Rgb565::new(24, 50, 24),
        hovered: Rgb565::new(31, 42, 4),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything a page needs besides its menu items and a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub theme: Theme,
    pub box_width: u32,
    pub box_height: u32,
    pub border: u32,
    pub y_margin: u32,
    pub icon_x_margin: u32,
    pub icon_y_ratio_pct: u32,
    pub text_size: u32,
    /// Hover scale as `(numerator, denominator)`.
    pub hover_scale: (u32, u32),
    pub border_hover_scale: u32,
    pub tick_ms: u64,
}

impl PageConfig {
    /// Height of one ring slot: the box plus its margin on both sides.
    pub const fn slot_height(&self) -> u32 {
        self.box_height + 2 * self.y_margin
    }

    /// Apply the hover scale to `value`, truncating. A zero denominator
    /// leaves the value unscaled.
    pub const fn hover_scaled(&self, value: u32) -> u32 {
        let (num, den) = self.hover_scale;
        if den == 0 {
            return value;
        }
        value * num / den
    }

    /// Edge of a hovered box whose default edge is at `at` and whose
    /// hovered extent is `scaled`, so the box grows about its centre.
    /// Truncates toward zero.
    pub const fn hover_origin(&self, at: i32, scaled: u32) -> i32 {
        let (num, den) = self.hover_scale;
        if den == 0 {
            return at;
        }
        let den2 = 2 * den as i64;
        let grow = scaled as i64 * (num as i64 - den as i64);
        ((at as i64 * den2 - grow) / den2) as i32
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let invalid = self.box_width == 0
            || self.box_height == 0
            || self.hover_scale.1 == 0
            || self.icon_y_ratio_pct > 100
            || self.tick_ms == 0;
        if invalid {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: Theme::DEFAULT,
            box_width: BOX_WIDTH,
            box_height: BOX_HEIGHT,
            border: BOX_BORDER,
            y_margin: BOX_Y_MARGIN,
            icon_x_margin: ICON_X_MARGIN,
            icon_y_ratio_pct: ICON_Y_RATIO_PCT,
            text_size: TEXT_SIZE,
            hover_scale: BOX_HOVER_SCALE,
            border_hover_scale: BORDER_HOVER_SCALE,
            tick_ms: RENDER_TICK_MS,
        }
    }
}
