//! [`Canvas`] adapter for `embedded-graphics` draw targets

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::{Circle, Line, Primitive, PrimitiveStyle, Rectangle};

use crate::Canvas;
use crate::color::Rgb;

const fn to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Draws the face on any RGB888 display
///
/// Draw errors are dropped; a frame is redrawn in full on the next
/// invalidation anyway.
pub struct DisplayCanvas<D> {
    display: D,
}

impl<D: DrawTarget<Color = Rgb888>> DisplayCanvas<D> {
    pub const fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_inner(self) -> D {
        self.display
    }
}

impl<D: DrawTarget<Color = Rgb888>> Canvas for DisplayCanvas<D> {
    fn fill_rect(&mut self, rect: Rectangle, color: Rgb) {
        let _ = self.display.fill_solid(&rect, to_rgb888(color));
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        let _ = Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
            .draw(&mut self.display);
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        let _ = Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_stroke(to_rgb888(color), 1))
            .draw(&mut self.display);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb) {
        let _ = Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(to_rgb888(color), width))
            .draw(&mut self.display);
    }
}
