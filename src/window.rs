//! Window layers
//!
//! The canvas layer and two text layers exist only between window load and
//! unload.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::color::Rgb;
use crate::geometry::center_of;

/// Layer the face is drawn on
#[derive(Debug, Clone)]
pub struct CanvasLayer {
    bounds: Rectangle,
    dirty: bool,
}

impl CanvasLayer {
    /// New layers start dirty so the first frame gets drawn
    pub const fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            dirty: true,
        }
    }

    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag, returning its previous value
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

/// Text overlay
#[derive(Debug, Clone)]
pub struct TextLayer {
    pub frame: Rectangle,
    /// `None` is transparent
    pub background: Option<Rgb>,
    pub alignment: Alignment,
}

impl TextLayer {
    pub const fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            background: None,
            alignment: Alignment::Center,
        }
    }
}

/// Layers owned by the loaded window
#[derive(Debug, Clone)]
pub struct WindowLayers {
    pub canvas: CanvasLayer,
    pub hour_text: TextLayer,
    pub minute_text: TextLayer,
    center: Point,
}

impl WindowLayers {
    /// Build the layers for a window of the given bounds
    ///
    /// The text layers split the window into a left and a right half.
    pub fn load(bounds: Rectangle) -> Self {
        let half = Size::new(bounds.size.width / 2, bounds.size.height);
        #[allow(clippy::cast_possible_wrap)]
        let right = bounds.top_left + Point::new(half.width as i32, 0);

        Self {
            canvas: CanvasLayer::new(bounds),
            hour_text: TextLayer::new(Rectangle::new(bounds.top_left, half)),
            minute_text: TextLayer::new(Rectangle::new(right, half)),
            center: center_of(&bounds),
        }
    }

    /// Face center
    pub const fn center(&self) -> Point {
        self.center
    }
}
