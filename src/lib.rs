#![no_std]

pub mod animation;
pub mod channel;
pub mod clock;
pub mod color;
pub mod config;
pub mod display;
pub mod frame_scheduler;
pub mod geometry;
pub mod math;
pub mod message;
pub mod message_processor;
pub mod render;
pub mod settings;
pub mod state;
pub mod storage;
pub mod watchface;
pub mod window;

pub use animation::{AnimationDriver, Curve};
pub use clock::{ClockState, Time, WallTime};
pub use config::{AnimationTimings, FaceConfig};
pub use display::DisplayCanvas;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use message::{
    AppMessage, AppMessageResult, ConfigMessage, MessageChannel, MessageReceiver, MessageSender,
};
pub use settings::BackgroundSetting;
pub use state::FaceState;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use watchface::Watchface;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
pub use embedded_graphics::geometry::{Point, Size};
pub use embedded_graphics::primitives::Rectangle;

/// Abstract drawing surface
///
/// Implement this trait to support different displays.
/// The watchface is generic over this trait.
pub trait Canvas {
    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rectangle, color: Rgb);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb);

    /// Stroke the outline of a circle
    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgb);

    /// Stroke a line of the given width
    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb);
}
