//! Frame scheduling and timing utilities.
//!
//! Plays the role of the event loop: dispatches minute ticks, advances the
//! animations, redraws when needed and tells the caller how long to sleep.

use embassy_time::{Duration, Instant};

use crate::clock::WallTime;
use crate::storage::Storage;
use crate::{Canvas, Watchface};

/// Default target frame rate while animating (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Longest sleep while no animation is pending.
///
/// Inbox messages are only drained inside [`FrameScheduler::tick`], so this
/// bounds how late a configuration change shows up.
pub const DEFAULT_IDLE_SLEEP: Duration = Duration::from_millis(500);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was drawn during this tick.
    pub rendered: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// While an animation is pending the scheduler paces frames with drift
/// correction. Once the face is idle it polls at `idle_sleep` intervals, never
/// sleeping past the next wall-clock minute.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(watchface, canvas);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(uptime_ms()), read_rtc());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, C: Canvas, S: Storage, const INBOX_SIZE: usize> {
    canvas: C,
    watchface: Watchface<'a, S, INBOX_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
    idle_sleep: Duration,
}

impl<'a, C: Canvas, S: Storage, const INBOX_SIZE: usize> FrameScheduler<'a, C, S, INBOX_SIZE> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(watchface: Watchface<'a, S, INBOX_SIZE>, canvas: C) -> Self {
        Self::with_frame_duration(watchface, canvas, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        watchface: Watchface<'a, S, INBOX_SIZE>,
        canvas: C,
        frame_duration: Duration,
    ) -> Self {
        Self {
            canvas,
            watchface,
            next_frame: Instant::from_millis(0),
            frame_duration,
            idle_sleep: DEFAULT_IDLE_SLEEP,
        }
    }

    /// Set the longest sleep while no animation is pending.
    #[must_use]
    pub fn with_idle_sleep(mut self, idle_sleep: Duration) -> Self {
        self.idle_sleep = idle_sleep;
        self
    }

    /// Process one loop iteration and return timing information.
    ///
    /// This method:
    /// 1. Dispatches a minute tick if the wall-clock minute changed
    /// 2. Processes messages and advances the animations
    /// 3. Renders the face if it is dirty
    /// 4. Returns the deadline for the next iteration
    pub fn tick(&mut self, now: Instant, wall_time: WallTime) -> FrameResult {
        if !self.watchface.wall_time().same_minute(wall_time) {
            self.watchface.tick(wall_time);
        }

        self.watchface.process(now);
        let rendered = self.watchface.render(&mut self.canvas);

        if !self.watchface.animations().is_active() {
            let until_next_minute = Duration::from_secs(u64::from(60 - wall_time.second.min(59)));
            let sleep_duration = until_next_minute.min(self.idle_sleep);
            self.next_frame = now + sleep_duration;
            return FrameResult {
                next_deadline: self.next_frame,
                sleep_duration,
                rendered,
            };
        }

        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            rendered,
        }
    }

    /// Get a reference to the watchface.
    pub fn watchface(&self) -> &Watchface<'a, S, INBOX_SIZE> {
        &self.watchface
    }

    /// Get a mutable reference to the watchface.
    pub fn watchface_mut(&mut self) -> &mut Watchface<'a, S, INBOX_SIZE> {
        &mut self.watchface
    }

    /// Get a reference to the canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
