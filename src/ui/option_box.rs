//! One option of the menu: an icon + label inside a bordered box.
//!
//! The box has two geometry modes. Both are pure functions of the ring
//! anchor and the [`PageConfig`], so scrolling (which moves the anchor)
//! and hovering (which picks the mode) can never drift apart. A third,
//! transient state reverses the colours during the selection transition.

use embedded_graphics::image::{GetPixel, ImageRaw};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

use crate::config::PageConfig;
use crate::ui::display::{font_for_size, text_style};
use crate::ui::input_logic::wrap_anchor;

/// 1-bit icon bitmap. Set pixels are drawn in the palette's `on` colour.
pub type Icon = ImageRaw<'static, BinaryColor>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoxMode {
    Default,
    Hovered,
}

/// Icon colour remap table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconPalette {
    pub on: Rgb565,
    pub off: Rgb565,
}

impl IconPalette {
    pub fn map(&self, color: BinaryColor) -> Rgb565 {
        match color {
            BinaryColor::On => self.on,
            BinaryColor::Off => self.off,
        }
    }
}

/// Box dimensions for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxGeometry {
    pub top_left: Point,
    pub size: Size,
    pub border: u32,
    pub icon_x_margin: u32,
    pub text_size: u32,
}

impl BoxGeometry {
    /// Geometry of a box resting at `anchor` (screen coordinates).
    pub fn default_mode(anchor: Point, cfg: &PageConfig) -> Self {
        Self {
            top_left: anchor,
            size: Size::new(cfg.box_width, cfg.box_height),
            border: cfg.border,
            icon_x_margin: cfg.icon_x_margin,
            text_size: cfg.text_size,
        }
    }

    /// Hovered geometry: scaled up about the centre of the default box.
    pub fn hovered_mode(anchor: Point, cfg: &PageConfig) -> Self {
        let width = cfg.hover_scaled(cfg.box_width);
        let height = cfg.hover_scaled(cfg.box_height);

        Self {
            top_left: Point::new(
                cfg.hover_origin(anchor.x, width),
                cfg.hover_origin(anchor.y, height),
            ),
            size: Size::new(width, height),
            border: cfg.border * cfg.border_hover_scale,
            icon_x_margin: cfg.hover_scaled(cfg.icon_x_margin),
            text_size: cfg.hover_scaled(cfg.text_size),
        }
    }
}

/// Derived drawing positions, recomputed whenever a field changes.
#[derive(Clone, Copy)]
struct BoxLayout {
    frame: Rectangle,
    icon: Rectangle,
    text_origin: Point,
    font: &'static MonoFont<'static>,
}

/// Visual state of one menu option.
#[derive(Clone)]
pub struct OptionEntry {
    label: &'static str,
    icon: Icon,
    cfg: PageConfig,
    x: i32,
    /// Anchor on the ring, always in `[0, content_height)`.
    ring_y: i32,
    /// Screen y of ring position 0.
    origin_y: i32,
    mode: BoxMode,
    geometry: BoxGeometry,
    foreground: Rgb565,
    background: Rgb565,
    palette: IconPalette,
    visible: bool,
    border_visible: bool,
    layout: BoxLayout,
}

impl OptionEntry {
    pub fn new(
        label: &'static str,
        icon: Icon,
        x: i32,
        ring_y: i32,
        origin_y: i32,
        cfg: &PageConfig,
    ) -> Self {
        let anchor = Point::new(x, ring_y + origin_y);
        let geometry = BoxGeometry::default_mode(anchor, cfg);
        let mut entry = Self {
            label,
            icon,
            cfg: *cfg,
            x,
            ring_y,
            origin_y,
            mode: BoxMode::Default,
            geometry,
            foreground: cfg.theme.default,
            background: cfg.theme.background,
            palette: IconPalette {
                on: cfg.theme.default,
                off: cfg.theme.background,
            },
            visible: true,
            border_visible: true,
            layout: layout_for(&geometry, cfg.icon_y_ratio_pct),
        };
        entry.reset();
        entry
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Ring anchor: `x` is fixed, `y` wraps within the content height.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.ring_y)
    }

    /// Where the default-mode box sits on screen.
    pub fn screen_anchor(&self) -> Point {
        Point::new(self.x, self.ring_y + self.origin_y)
    }

    pub fn mode(&self) -> BoxMode {
        self.mode
    }

    pub fn geometry(&self) -> BoxGeometry {
        self.geometry
    }

    pub fn foreground(&self) -> Rgb565 {
        self.foreground
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn palette(&self) -> IconPalette {
        self.palette
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn border_visible(&self) -> bool {
        self.border_visible
    }

    /// Bounding box as drawn.
    pub fn frame(&self) -> Rectangle {
        self.layout.frame
    }

    /// Back to default mode at the current anchor.
    pub fn reset(&mut self) {
        let theme = self.cfg.theme;
        self.mode = BoxMode::Default;
        self.geometry = BoxGeometry::default_mode(self.screen_anchor(), &self.cfg);
        self.foreground = theme.default;
        self.background = theme.background;
        self.palette = IconPalette {
            on: theme.default,
            off: theme.background,
        };
        self.relayout();
    }

    /// Switch to hovered mode at the current anchor.
    pub fn hover(&mut self) {
        let theme = self.cfg.theme;
        self.mode = BoxMode::Hovered;
        self.geometry = BoxGeometry::hovered_mode(self.screen_anchor(), &self.cfg);
        self.foreground = theme.hovered;
        self.background = theme.background;
        self.palette = IconPalette {
            on: theme.hovered,
            off: theme.background,
        };
        self.relayout();
    }

    /// Move along the ring by `delta` and drop back to default mode.
    pub fn scroll(&mut self, delta: i32, content_height: i32) {
        self.ring_y = wrap_anchor(self.ring_y, delta, content_height);
        self.reset();
    }

    /// Swap foreground and background, remapping the icon to match.
    pub fn reverse_color(&mut self) {
        core::mem::swap(&mut self.foreground, &mut self.background);
        self.palette = IconPalette {
            on: self.foreground,
            off: self.background,
        };
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn hide_border(&mut self) {
        self.border_visible = false;
    }

    fn relayout(&mut self) {
        self.layout = layout_for(&self.geometry, self.cfg.icon_y_ratio_pct);
    }

    fn draw_icon<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = self.layout.icon;
        let side = area.size.width;
        let src = self.icon.size();
        if side == 0 || src.width == 0 || src.height == 0 {
            return Ok(());
        }

        // Nearest-neighbour scale into the square icon area.
        let icon = &self.icon;
        let palette = self.palette;
        let pixels = area.points().filter_map(move |p| {
            let local = p - area.top_left;
            let sx = local.x as u32 * src.width / side;
            let sy = local.y as u32 * src.height / side;
            icon.pixel(Point::new(sx as i32, sy as i32))
                .map(|color| Pixel(p, palette.map(color)))
        });
        target.draw_iter(pixels)
    }
}

impl Drawable for OptionEntry {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let mut style = PrimitiveStyleBuilder::new().fill_color(self.background);
        if self.border_visible && self.geometry.border > 0 {
            style = style
                .stroke_color(self.foreground)
                .stroke_width(self.geometry.border)
                .stroke_alignment(StrokeAlignment::Inside);
        }
        self.layout.frame.into_styled(style.build()).draw(target)?;

        self.draw_icon(target)?;

        Text::with_baseline(
            self.label,
            self.layout.text_origin,
            text_style(self.layout.font, self.foreground),
            Baseline::Middle,
        )
        .draw(target)?;

        Ok(())
    }
}

fn layout_for(geometry: &BoxGeometry, icon_y_ratio_pct: u32) -> BoxLayout {
    let frame = Rectangle::new(geometry.top_left, geometry.size);
    let inner_height = geometry.size.height.saturating_sub(2 * geometry.border);
    let icon_side = inner_height * icon_y_ratio_pct.min(100) / 100;

    let icon_top_left = geometry.top_left
        + Point::new(
            (geometry.border + geometry.icon_x_margin) as i32,
            (geometry.border + (inner_height - icon_side) / 2) as i32,
        );
    let text_origin = Point::new(
        icon_top_left.x + (icon_side + geometry.icon_x_margin) as i32,
        geometry.top_left.y + (geometry.size.height / 2) as i32,
    );

    BoxLayout {
        frame,
        icon: Rectangle::new(icon_top_left, Size::new(icon_side, icon_side)),
        text_origin,
        font: font_for_size(geometry.text_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 8×8 checkerboard-ish bitmap, one byte per row.
    const ICON: [u8; 8] = [0xFF, 0x81, 0xBD, 0xA5, 0xA5, 0xBD, 0x81, 0xFF];

    fn entry() -> OptionEntry {
        let cfg = PageConfig::default();
        OptionEntry::new("Timer", ImageRaw::new(&ICON, 8), 16, 72, -13, &cfg)
    }

    #[test]
    fn default_geometry_sits_on_anchor() {
        let e = entry();
        let cfg = PageConfig::default();
        assert_eq!(e.mode(), BoxMode::Default);
        assert_eq!(e.screen_anchor(), Point::new(16, 59));
        assert_eq!(e.frame(), Rectangle::new(Point::new(16, 59), Size::new(96, 28)));
        assert_eq!(e.foreground(), cfg.theme.default);
        assert_eq!(e.background(), cfg.theme.background);
    }

    #[test]
    fn hovered_geometry_grows_about_centre() {
        let mut e = entry();
        e.hover();
        let g = e.geometry();
        assert_eq!(e.mode(), BoxMode::Hovered);
        assert_eq!(g.size, Size::new(115, 33));
        // Origin of (16, 59) minus (11.5, 3.3), truncated.
        assert_eq!(g.top_left, Point::new(4, 55));
        assert_eq!(g.border, 2);
        assert_eq!(g.text_size, 12);
        assert_eq!(e.palette().on, PageConfig::default().theme.hovered);
    }

    #[test]
    fn hover_is_recomputed_from_anchor_after_scroll() {
        let cfg = PageConfig::default();
        let mut e = entry();
        e.hover();
        e.scroll(-36, 144);
        assert_eq!(e.mode(), BoxMode::Default);
        assert_eq!(e.anchor(), Point::new(16, 36));

        e.hover();
        let expected = BoxGeometry::hovered_mode(Point::new(16, 36 - 13), &cfg);
        assert_eq!(e.geometry(), expected);
    }

    #[test]
    fn scroll_wraps_within_content() {
        let mut e = entry();
        e.scroll(36, 144);
        assert_eq!(e.anchor().y, 108);
        e.scroll(36, 144);
        assert_eq!(e.anchor().y, 0);
    }

    #[test]
    fn reverse_color_swaps_and_remaps_icon() {
        let mut e = entry();
        e.hover();
        let (fg, bg) = (e.foreground(), e.background());
        e.reverse_color();
        assert_eq!(e.foreground(), bg);
        assert_eq!(e.background(), fg);
        assert_eq!(e.palette(), IconPalette { on: bg, off: fg });
    }

    #[test]
    fn oversized_icon_ratio_is_clamped_to_inner_box() {
        let cfg = PageConfig { icon_y_ratio_pct: 120, ..PageConfig::default() };
        let mut e = OptionEntry::new("Timer", ImageRaw::new(&ICON, 8), 16, 72, -13, &cfg);
        e.hover();
        let g = e.geometry();
        assert_eq!(e.layout.icon.size.height, g.size.height - 2 * g.border);
    }

    #[test]
    fn hide_flags() {
        let mut e = entry();
        e.hide();
        e.hide_border();
        assert!(!e.is_visible());
        assert!(!e.border_visible());
    }
}
