//! Message processing module
//!
//! Drains the inbox and applies configuration to the background setting.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::message::{AppMessage, ConfigMessage, MessageReceiver};
use crate::settings::BackgroundSetting;
use crate::storage::Storage;

/// Side effects from processing messages that the watchface should apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageEffects {
    /// A configuration message arrived
    pub redraw: bool,
    /// The background setting changed
    pub settings_changed: bool,
}

/// Processes inbox messages
pub struct MessageProcessor<'a, const SIZE: usize> {
    messages: MessageReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> MessageProcessor<'a, SIZE> {
    /// Create a new message processor
    pub const fn new(messages: MessageReceiver<'a, SIZE>) -> Self {
        Self { messages }
    }

    /// Process all pending messages from the channel (non-blocking)
    pub fn process_pending<S: Storage>(
        &mut self,
        settings: &mut BackgroundSetting,
        storage: &mut S,
    ) -> MessageEffects {
        let mut effects = MessageEffects::default();

        while let Ok(message) = self.messages.try_receive() {
            match message {
                AppMessage::Received(config) => {
                    effects.settings_changed |= Self::process_config(&config, settings, storage);
                    effects.redraw = true;
                }
                AppMessage::InboxDropped(_reason) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[inbox] message dropped: {:?}", _reason);
                }
                AppMessage::OutboxSent => {
                    #[cfg(feature = "esp32-log")]
                    println!("[outbox] send success");
                }
                AppMessage::OutboxFailed(_reason) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[outbox] send failed: {:?}", _reason);
                }
            }
        }

        effects
    }

    /// Apply a configuration message
    ///
    /// Returns `true` if the in-memory setting changed.
    fn process_config<S: Storage>(
        config: &ConfigMessage,
        settings: &mut BackgroundSetting,
        storage: &mut S,
    ) -> bool {
        let before = *settings;
        match settings.apply(config, storage) {
            Ok(()) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[settings] color=0x{:06X} enabled={}",
                    settings.color, settings.enabled
                );
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[settings] config not applied: {:?}", _error);
            }
        }
        *settings != before
    }
}
