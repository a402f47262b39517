//! Drawing surface and text helpers.

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X13, FONT_6X9,
    FONT_7X14, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// A colour panel the render loop owns exclusively.
///
/// Filling and drawing come from [`DrawTarget`]; `present` pushes the
/// finished frame (a buffered driver flushes here, a direct-drawing one
/// can just return `Ok`). All calls must be complete when they return.
pub trait Surface: DrawTarget<Color = Rgb565> + OriginDimensions {
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Candidate label fonts, tallest first.
const FONTS: [&MonoFont<'static>; 11] = [
    &FONT_10X20,
    &FONT_9X18,
    &FONT_9X15,
    &FONT_7X14,
    &FONT_6X13,
    &FONT_6X12,
    &FONT_6X10,
    &FONT_6X9,
    &FONT_5X8,
    &FONT_5X7,
    &FONT_4X6,
];

/// Tallest font whose glyph height fits `text_size`, falling back to the
/// smallest one.
pub fn font_for_size(text_size: u32) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .copied()
        .find(|font| font.character_size.height <= text_size)
        .unwrap_or(&FONT_4X6)
}

pub fn text_style(font: &'static MonoFont<'static>, color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(font, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_picks_tallest_that_fits() {
        assert_eq!(font_for_size(10).character_size, Size::new(6, 10));
        assert_eq!(font_for_size(12).character_size, Size::new(6, 12));
        assert_eq!(font_for_size(19).character_size, Size::new(9, 18));
        assert_eq!(font_for_size(40).character_size, Size::new(10, 20));
    }

    #[test]
    fn tiny_text_falls_back_to_smallest_font() {
        assert_eq!(font_for_size(1).character_size, Size::new(4, 6));
    }
}
