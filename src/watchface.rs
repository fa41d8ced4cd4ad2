use embassy_time::Instant;
use embedded_graphics::primitives::Rectangle;

use crate::Canvas;
use crate::animation::AnimationDriver;
use crate::clock::WallTime;
use crate::config::FaceConfig;
use crate::message::MessageReceiver;
use crate::message_processor::MessageProcessor;
use crate::render::render_face;
use crate::settings::BackgroundSetting;
use crate::state::FaceState;
use crate::storage::Storage;
use crate::window::WindowLayers;

/// Watchface - the main orchestrator
///
/// Owns the face state and routes every event to it: minute ticks,
/// animation steps, inbox messages and window lifecycle.
pub struct Watchface<'a, S: Storage, const INBOX_SIZE: usize> {
    // External dependencies and configuration
    messages: MessageProcessor<'a, INBOX_SIZE>,
    storage: S,
    config: FaceConfig,

    // Internal state
    state: FaceState,
    animations: AnimationDriver,
    window: Option<WindowLayers>,
    /// Wall-clock sample of the last minute tick
    wall_time: WallTime,
}

impl<'a, S: Storage, const INBOX_SIZE: usize> Watchface<'a, S, INBOX_SIZE> {
    /// Start the watchface
    ///
    /// Stores the current time, loads persisted settings and schedules the
    /// intro animations relative to `now`.
    pub fn new(
        messages: MessageReceiver<'a, INBOX_SIZE>,
        storage: S,
        config: &FaceConfig,
        wall_time: WallTime,
        now: Instant,
    ) -> Self {
        let background = BackgroundSetting::load(&storage);
        let mut face = Self {
            messages: MessageProcessor::new(messages),
            storage,
            config: *config,
            state: FaceState::new(background, config.final_radius),
            animations: AnimationDriver::new(config),
            window: None,
            wall_time,
        };
        face.tick(wall_time);
        face.animations.schedule(now);
        face
    }

    /// Create the window layers
    ///
    /// Loading an already loaded window keeps the existing layers.
    pub fn load_window(&mut self, bounds: Rectangle) {
        if self.window.is_none() {
            self.window = Some(WindowLayers::load(bounds));
        }
    }

    /// Destroy the window layers
    pub fn unload_window(&mut self) {
        self.window = None;
    }

    /// Minute tick
    pub fn tick(&mut self, wall_time: WallTime) {
        self.wall_time = wall_time;
        self.state.clock.tick(wall_time);
        self.request_redraw();
    }

    /// Process pending messages and advance animations
    pub fn process(&mut self, now: Instant) {
        let effects = self
            .messages
            .process_pending(&mut self.state.background, &mut self.storage);
        if effects.redraw {
            self.request_redraw();
        }

        if self.animations.tick(now, &mut self.state) {
            self.request_redraw();
        }
    }

    /// Draw the face if the canvas layer is dirty
    ///
    /// Returns `true` if a frame was drawn.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> bool {
        let Some(window) = self.window.as_mut() else {
            return false;
        };
        if !window.canvas.take_dirty() {
            return false;
        }
        render_face(
            canvas,
            window.canvas.bounds(),
            window.center(),
            &self.state,
            &self.config,
        );
        true
    }

    fn request_redraw(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.canvas.mark_dirty();
        }
    }

    pub const fn state(&self) -> &FaceState {
        &self.state
    }

    /// Wall-clock sample the face last ticked with
    pub const fn wall_time(&self) -> WallTime {
        self.wall_time
    }

    pub const fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub const fn window(&self) -> Option<&WindowLayers> {
        self.window.as_ref()
    }

    pub const fn animations(&self) -> &AnimationDriver {
        &self.animations
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Shut the watchface down, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}
