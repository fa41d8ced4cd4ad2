use embassy_time::Duration;

use crate::animation::Curve;

/// Gap between the hand tips and the face edge, in pixels
pub const HAND_MARGIN: i32 = 8;

/// Radius of the fully grown face, in pixels
pub const FINAL_RADIUS: u16 = 60;

/// Base animation duration
pub const ANIMATION_DURATION: Duration = Duration::from_millis(600);

/// Delay before both animations start
pub const ANIMATION_DELAY: Duration = Duration::from_millis(600);

/// Configuration for the intro animations
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimings {
    /// Duration of the radius growth; the hand sweep takes twice as long
    pub duration: Duration,
    /// Delay before both animations start
    pub delay: Duration,
    /// Timing curve shared by both animations
    pub curve: Curve,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION,
            delay: ANIMATION_DELAY,
            curve: Curve::EaseInOut,
        }
    }
}

/// Configuration for the watchface
#[derive(Debug, Clone, Copy)]
pub struct FaceConfig {
    pub hand_margin: i32,
    pub final_radius: u16,
    /// Stroke width of both hands
    pub hand_width: u32,
    /// Added to the minute hand length
    pub minute_hand_extension: i32,
    /// Subtracted from the hour hand length on top of two margins
    pub hour_hand_inset: i32,
    /// Distance of the 12 o'clock dot from the top edge
    pub dot_offset: i32,
    pub dot_radius: u32,
    pub timings: AnimationTimings,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            hand_margin: HAND_MARGIN,
            final_radius: FINAL_RADIUS,
            hand_width: 10,
            minute_hand_extension: 2,
            hour_hand_inset: 5,
            dot_offset: 20,
            dot_radius: 6,
            timings: AnimationTimings::default(),
        }
    }
}

#[allow(clippy::cast_lossless)]
impl FaceConfig {
    /// Minute hand length for a face radius
    pub const fn minute_hand_length(&self, radius: u16) -> i32 {
        radius as i32 - self.hand_margin + self.minute_hand_extension
    }

    /// Hour hand length for a face radius
    pub const fn hour_hand_length(&self, radius: u16) -> i32 {
        radius as i32 - 2 * self.hand_margin - self.hour_hand_inset
    }

    /// The minute hand is drawn only past one margin
    pub const fn draws_minute_hand(&self, radius: u16) -> bool {
        radius as i32 > self.hand_margin
    }

    /// The hour hand is drawn only past two margins
    pub const fn draws_hour_hand(&self, radius: u16) -> bool {
        radius as i32 > 2 * self.hand_margin
    }
}
