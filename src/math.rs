use embassy_time::Duration;

/// Upper bound of a normalized animation progress value
pub const ANIMATION_NORMALIZED_MAX: u16 = u16::MAX;

const MAX: u32 = ANIMATION_NORMALIZED_MAX as u32;
const HALF: u32 = MAX / 2;

/// Calculate normalized progress (0-65535) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress16(elapsed: Duration, duration: Duration) -> u16 {
    if duration.as_millis() == 0 {
        return ANIMATION_NORMALIZED_MAX;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return ANIMATION_NORMALIZED_MAX;
    }

    ((elapsed.as_millis() * MAX as u64) / duration.as_millis()) as u16
}

/// Scale `max` by a normalized progress value
///
/// Integer math, truncating. Returns 0 at progress 0 and exactly `max` at
/// [`ANIMATION_NORMALIZED_MAX`].
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_progress(progress: u16, max: u16) -> u16 {
    ((progress as u32 * max as u32) / MAX) as u16
}

/// Ease in quadratic
#[allow(clippy::cast_possible_truncation)]
pub const fn ease_in_quad(progress: u16) -> u16 {
    let t = progress as u32;
    (t * t / MAX) as u16
}

/// Ease out quadratic
#[allow(clippy::cast_possible_truncation)]
pub const fn ease_out_quad(progress: u16) -> u16 {
    let inv = MAX - progress as u32;
    (MAX - inv * inv / MAX) as u16
}

/// Ease in out quadratic
#[allow(clippy::cast_possible_truncation)]
pub const fn ease_in_out_quad(progress: u16) -> u16 {
    let t = progress as u32;
    if t <= HALF {
        (2 * t * t / MAX) as u16
    } else {
        let inv = MAX - t;
        (MAX - 2 * inv * inv / MAX) as u16
    }
}
