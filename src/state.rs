use crate::clock::ClockState;
use crate::settings::BackgroundSetting;

/// Everything the render callback reads
#[derive(Debug, Clone)]
pub struct FaceState {
    pub clock: ClockState,
    pub background: BackgroundSetting,
    radius: u16,
    final_radius: u16,
}

impl FaceState {
    pub const fn new(background: BackgroundSetting, final_radius: u16) -> Self {
        Self {
            clock: ClockState::new(),
            background,
            radius: 0,
            final_radius,
        }
    }

    /// Current face radius, never past the fully grown one
    pub const fn radius(&self) -> u16 {
        if self.radius < self.final_radius {
            self.radius
        } else {
            self.final_radius
        }
    }

    pub const fn final_radius(&self) -> u16 {
        self.final_radius
    }

    pub(crate) fn set_radius(&mut self, radius: u16) {
        self.radius = radius;
    }
}
