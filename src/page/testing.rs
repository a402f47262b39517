//! Host-side fixtures shared by the page tests.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::page::{MenuItem, TickSource};
use crate::ui::display::Surface;

const WEATHER: [u8; 8] = [0x00, 0x3C, 0x7E, 0xFF, 0xFF, 0x24, 0x48, 0x00];
const BATTERY: [u8; 8] = [0x18, 0x7E, 0x42, 0x5A, 0x5A, 0x5A, 0x42, 0x7E];
const TIMER: [u8; 8] = [0x3C, 0x42, 0x91, 0x91, 0x9D, 0x81, 0x42, 0x3C];
const SURPRISE: [u8; 8] = [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00];

pub const SCREEN: Size = Size::new(128, 160);

pub fn items() -> [MenuItem; 4] {
    [
        MenuItem::new("Weather", ImageRaw::new(&WEATHER, 8)),
        MenuItem::new("Battery", ImageRaw::new(&BATTERY, 8)),
        MenuItem::new("Timer", ImageRaw::new(&TIMER, 8)),
        MenuItem::new("???", ImageRaw::new(&SURPRISE, 8)),
    ]
}

/// In-memory panel that counts presented frames.
pub struct FrameBuffer {
    size: Size,
    pixels: std::vec::Vec<Rgb565>,
    pub frames: usize,
    pub fail_present: bool,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: std::vec![Rgb565::BLACK; (size.width * size.height) as usize],
            frames: 0,
            fail_present: false,
        }
    }

    pub fn pixel(&self, p: Point) -> Rgb565 {
        self.pixels[(p.y as u32 * self.size.width + p.x as u32) as usize]
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = ();

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0
                && p.y >= 0
                && (p.x as u32) < self.size.width
                && (p.y as u32) < self.size.height
            {
                let index = (p.y as u32 * self.size.width + p.x as u32) as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl Surface for FrameBuffer {
    fn present(&mut self) -> Result<(), Self::Error> {
        if self.fail_present {
            return Err(());
        }
        self.frames += 1;
        Ok(())
    }
}

/// Tick source that just yields, so a joined future gets to run between
/// render ticks.
pub struct YieldTicks;

impl TickSource for YieldTicks {
    async fn next_tick(&mut self) {
        embassy_futures::yield_now().await;
    }
}
