//! Background (hour hand color) setting
//!
//! Loaded once at startup, replaced by complete configuration messages.

use crate::color::{Rgb, palette_color};
use crate::message::{ConfigMessage, MESSAGE_KEY_BACKGROUND_COLOR, MESSAGE_KEY_BACKGROUND_ON};
use crate::storage::{Storage, StorageError};

/// Color used until the companion app sends one
pub const DEFAULT_BACKGROUND_COLOR: u32 = 0x0055FF;

/// Error returned when a configuration message cannot be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// The message lacks the color, the flag, or both
    Incomplete,
    /// The setting changed but could not be persisted
    Storage(StorageError),
}

impl From<StorageError> for SettingsError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSetting {
    /// 0xRRGGBB
    pub color: u32,
    pub enabled: bool,
}

impl Default for BackgroundSetting {
    fn default() -> Self {
        Self {
            color: DEFAULT_BACKGROUND_COLOR,
            enabled: false,
        }
    }
}

impl BackgroundSetting {
    /// Load the persisted setting, falling back to defaults per key
    #[allow(clippy::cast_sign_loss)]
    pub fn load<S: Storage>(storage: &S) -> Self {
        let defaults = Self::default();
        Self {
            color: storage
                .read_int(MESSAGE_KEY_BACKGROUND_COLOR)
                .map_or(defaults.color, |color| color as u32),
            enabled: storage
                .read_bool(MESSAGE_KEY_BACKGROUND_ON)
                .unwrap_or(defaults.enabled),
        }
    }

    /// Apply a configuration message and persist it
    ///
    /// Partial messages leave the setting untouched. When persisting fails
    /// the in-memory setting is already updated.
    #[allow(clippy::cast_sign_loss)]
    pub fn apply<S: Storage>(
        &mut self,
        message: &ConfigMessage,
        storage: &mut S,
    ) -> Result<(), SettingsError> {
        let (Some(color), Some(enabled)) = (message.background_color, message.background_on)
        else {
            return Err(SettingsError::Incomplete);
        };

        self.enabled = enabled;
        self.color = color as u32;

        storage.write_bool(MESSAGE_KEY_BACKGROUND_ON, enabled)?;
        storage.write_int(MESSAGE_KEY_BACKGROUND_COLOR, color)?;

        Ok(())
    }

    /// Color of the hour hand on the display palette
    pub const fn hand_color(&self) -> Rgb {
        palette_color(self.color)
    }
}
