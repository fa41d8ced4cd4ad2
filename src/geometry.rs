//! Angles and polar projection for the clock hands.
//!
//! Angles are in degrees, clockwise from 12 o'clock.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;

use crate::clock::Time;

/// One full turn of the dial
pub const FULL_CIRCLE: f32 = 360.0;

/// Angle of the minute hand
pub fn minute_angle(minutes: u8) -> f32 {
    FULL_CIRCLE * f32::from(minutes) / 60.0
}

/// Angle of the hour hand
///
/// While animating, `time.hours` is on the 60-unit scale produced by the
/// hand sweep, otherwise it is an hour of a 12-hour dial. Both get the
/// same minutes-through-the-hour offset.
pub fn hour_angle(time: Time, animating: bool) -> f32 {
    let divisions = if animating { 60.0 } else { 12.0 };
    let base = FULL_CIRCLE * f32::from(time.hours) / divisions;

    // (minute_angle / FULL_CIRCLE) * (FULL_CIRCLE / 12)
    base + minute_angle(time.minutes) / 12.0
}

/// Project a point `length` pixels away from `center` at `degrees`
#[allow(clippy::cast_possible_truncation)]
pub fn polar_point(center: Point, degrees: f32, length: i32) -> Point {
    let radians = degrees.to_radians();
    #[allow(clippy::cast_precision_loss)]
    let length = length as f32;

    let dx = libm::roundf(libm::sinf(radians) * length) as i32;
    let dy = libm::roundf(-libm::cosf(radians) * length) as i32;

    Point::new(center.x + dx, center.y + dy)
}

/// Returns the center of a rectangle, rounding towards its top left corner
#[allow(clippy::cast_possible_wrap)]
pub const fn center_of(bounds: &Rectangle) -> Point {
    Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + (bounds.size.height / 2) as i32,
    )
}
