//! Face rendering
//!
//! Turns a [`FaceState`] into drawing commands. Rendering has no side
//! effects on the state.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;

use crate::Canvas;
use crate::color::{BLACK, WHITE};
use crate::config::FaceConfig;
use crate::geometry::{hour_angle, minute_angle, polar_point};
use crate::state::FaceState;

/// Hand angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub minute: f32,
    pub hour: f32,
}

/// Hand end points, `None` for a hand too short to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandGeometry {
    pub minute: Option<Point>,
    pub hour: Option<Point>,
}

/// Angles of both hands for the time currently shown
pub fn hand_angles(state: &FaceState) -> HandAngles {
    let animating = state.clock.is_animating();
    let time = state.clock.display_time();
    HandAngles {
        minute: minute_angle(time.minutes),
        hour: hour_angle(time, animating),
    }
}

/// End points of both hands around `center`
pub fn hand_geometry(state: &FaceState, config: &FaceConfig, center: Point) -> HandGeometry {
    let radius = state.radius();
    let angles = hand_angles(state);

    let minute = config
        .draws_minute_hand(radius)
        .then(|| polar_point(center, angles.minute, config.minute_hand_length(radius)));
    let hour = config
        .draws_hour_hand(radius)
        .then(|| polar_point(center, angles.hour, config.hour_hand_length(radius)));

    HandGeometry { minute, hour }
}

/// Draw the whole face
#[allow(clippy::cast_possible_wrap)]
pub fn render_face<C: Canvas>(
    canvas: &mut C,
    bounds: Rectangle,
    center: Point,
    state: &FaceState,
    config: &FaceConfig,
) {
    canvas.fill_rect(bounds, WHITE);

    // the 12 dot
    let dot = Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + config.dot_offset,
    );
    canvas.fill_circle(dot, config.dot_radius, BLACK);
    canvas.draw_circle(dot, config.dot_radius, BLACK);

    let hands = hand_geometry(state, config, center);
    if let Some(minute) = hands.minute {
        canvas.draw_line(center, minute, config.hand_width, BLACK);
    }
    if let Some(hour) = hands.hour {
        canvas.draw_line(center, hour, config.hand_width, state.background.hand_color());
    }
}
