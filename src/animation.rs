//! Intro animations
//!
//! An [`Animation`] turns elapsed time into a normalized progress value and
//! feeds it to an [`AnimationTarget`]. The watchface runs two of them once at
//! startup: the face radius grows and the hands sweep in from 12 o'clock.

use embassy_time::{Duration, Instant};

use crate::clock::{Time, hours_to_minutes};
use crate::config::FaceConfig;
use crate::math::{
    ANIMATION_NORMALIZED_MAX, ease_in_out_quad, ease_in_quad, ease_out_quad, progress16,
    scale_progress,
};
use crate::state::FaceState;

/// Timing curve applied to linear progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map linear progress through the curve
    pub const fn apply(self, progress: u16) -> u16 {
        match self {
            Self::Linear => progress,
            Self::EaseIn => ease_in_quad(progress),
            Self::EaseOut => ease_out_quad(progress),
            Self::EaseInOut => ease_in_out_quad(progress),
        }
    }
}

/// Receives animation progress
///
/// `started` runs once when the delay has passed, `update` on every step
/// and `stopped` once after the final update.
pub trait AnimationTarget {
    fn update(&self, state: &mut FaceState, progress: u16);

    fn started(&self, _state: &mut FaceState) {}

    fn stopped(&self, _state: &mut FaceState) {}
}

/// What happened during one animation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationStep {
    /// The animation left its delay during this step
    pub started: bool,
    /// Eased progress, `None` if the animation is not running
    pub progress: Option<u16>,
    /// The animation reached its end during this step
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Scheduled,
    Running,
    Finished,
}

/// Delayed, one-shot animation
#[derive(Debug, Clone)]
pub struct Animation<T> {
    target: T,
    duration: Duration,
    delay: Duration,
    curve: Curve,
    /// Time at which the delay ends
    start_time: Instant,
    phase: Phase,
}

impl<T: AnimationTarget> Animation<T> {
    pub const fn new(target: T, duration: Duration, delay: Duration, curve: Curve) -> Self {
        Self {
            target,
            duration,
            delay,
            curve,
            start_time: Instant::from_millis(0),
            phase: Phase::Idle,
        }
    }

    /// Schedule the animation to start after its delay
    ///
    /// An animation runs once; scheduling it again has no effect.
    pub fn schedule(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        self.start_time = now + self.delay;
        self.phase = Phase::Scheduled;
    }

    /// Advance the animation without touching any state
    pub fn step(&mut self, now: Instant) -> AnimationStep {
        let mut step = AnimationStep::default();
        match self.phase {
            Phase::Idle | Phase::Finished => return step,
            Phase::Scheduled => {
                if now < self.start_time {
                    return step;
                }
                self.phase = Phase::Running;
                step.started = true;
            }
            Phase::Running => {}
        }

        let elapsed = now.duration_since(self.start_time);
        if elapsed >= self.duration {
            step.progress = Some(ANIMATION_NORMALIZED_MAX);
            step.finished = true;
            self.phase = Phase::Finished;
            return step;
        }

        let progress = progress16(elapsed, self.duration);
        step.progress = Some(self.curve.apply(progress));
        step
    }

    /// Advance the animation and run the target hooks
    ///
    /// Returns `true` if the target received a progress update.
    pub fn tick(&mut self, now: Instant, state: &mut FaceState) -> bool {
        let step = self.step(now);
        if step.started {
            self.target.started(state);
        }
        if let Some(progress) = step.progress {
            self.target.update(state, progress);
        }
        if step.finished {
            self.target.stopped(state);
        }
        step.progress.is_some()
    }

    /// Check if the animation is waiting for its delay or running
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Scheduled | Phase::Running)
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }
}

/// Grows the face radius from zero
#[derive(Debug, Clone, Copy)]
pub struct RadiusGrowth {
    pub final_radius: u16,
}

impl AnimationTarget for RadiusGrowth {
    fn update(&self, state: &mut FaceState, progress: u16) {
        state.set_radius(scale_progress(progress, self.final_radius));
    }
}

/// Sweeps both hands from 12 o'clock to the last known time
///
/// Hours are swept on the 60-unit scale so the hour hand moves as smoothly
/// as the minute hand.
#[derive(Debug, Clone, Copy)]
pub struct HandSweep;

impl AnimationTarget for HandSweep {
    #[allow(clippy::cast_possible_truncation)]
    fn update(&self, state: &mut FaceState, progress: u16) {
        let last = state.clock.last();
        let hours = scale_progress(progress, u16::from(hours_to_minutes(last.hours)));
        let minutes = scale_progress(progress, u16::from(last.minutes));
        state.clock.set_animated(Time::new(hours as u8, minutes as u8));
    }

    fn started(&self, state: &mut FaceState) {
        state.clock.set_animating(true);
    }

    fn stopped(&self, state: &mut FaceState) {
        state.clock.set_animating(false);
    }
}

/// Runs the radius growth and the hand sweep side by side
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    radius: Animation<RadiusGrowth>,
    hands: Animation<HandSweep>,
}

impl AnimationDriver {
    pub fn new(config: &FaceConfig) -> Self {
        let timings = config.timings;
        Self {
            radius: Animation::new(
                RadiusGrowth {
                    final_radius: config.final_radius,
                },
                timings.duration,
                timings.delay,
                timings.curve,
            ),
            hands: Animation::new(
                HandSweep,
                timings.duration * 2,
                timings.delay,
                timings.curve,
            ),
        }
    }

    /// Schedule both animations
    pub fn schedule(&mut self, now: Instant) {
        self.radius.schedule(now);
        self.hands.schedule(now);
    }

    /// Advance both animations
    ///
    /// Returns `true` if the face needs a redraw.
    pub fn tick(&mut self, now: Instant, state: &mut FaceState) -> bool {
        let radius_changed = self.radius.tick(now, state);
        let hands_changed = self.hands.tick(now, state);
        radius_changed || hands_changed
    }

    /// Check if any animation is still waiting or running
    pub const fn is_active(&self) -> bool {
        self.radius.is_pending() || self.hands.is_pending()
    }

    pub const fn radius(&self) -> &Animation<RadiusGrowth> {
        &self.radius
    }

    pub const fn hands(&self) -> &Animation<HandSweep> {
        &self.hands
    }
}
