//! Clock state
//!
//! Holds the last known wall-clock time and the transient time shown while
//! the hands sweep in.

/// Time shown by the hands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    /// Hour of a 12-hour dial, or 0-60 while the hands sweep in
    pub hours: u8,
    pub minutes: u8,
}

impl Time {
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }
}

/// Local wall-clock sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallTime {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl WallTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Check if two samples fall into the same minute
    pub const fn same_minute(self, other: WallTime) -> bool {
        self.hour == other.hour && self.minute == other.minute
    }
}

/// Convert an hour of a 12-hour dial to the 60-unit scale
#[allow(clippy::cast_possible_truncation)]
pub const fn hours_to_minutes(hours_out_of_12: u8) -> u8 {
    (hours_out_of_12 as u16 * 60 / 12) as u8
}

#[derive(Debug, Clone, Default)]
pub struct ClockState {
    last: Time,
    animated: Time,
    animating: bool,
}

impl ClockState {
    pub const fn new() -> Self {
        Self {
            last: Time::new(0, 0),
            animated: Time::new(0, 0),
            animating: false,
        }
    }

    /// Store a wall-clock sample as the last known time
    ///
    /// Afternoon hours are folded onto the dial by subtracting 12. Midnight
    /// stays 0 and noon stays 12.
    pub fn tick(&mut self, now: WallTime) {
        let mut hours = now.hour;
        if hours > 12 {
            hours -= 12;
        }
        self.last = Time::new(hours, now.minute);
    }

    pub const fn last(&self) -> Time {
        self.last
    }

    pub const fn animated(&self) -> Time {
        self.animated
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Time the hands should show right now
    pub const fn display_time(&self) -> Time {
        if self.animating {
            self.animated
        } else {
            self.last
        }
    }

    pub(crate) fn set_animated(&mut self, time: Time) {
        self.animated = time;
    }

    pub(crate) fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }
}
