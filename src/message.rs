//! Companion app messages
//!
//! Inbound dictionaries, inbox/outbox notifications and the inbox channel.

use crate::channel::{Channel, Receiver, Sender};

/// Message key of the hour hand color (32-bit 0xRRGGBB)
pub const MESSAGE_KEY_BACKGROUND_COLOR: u32 = 0;

/// Message key of the custom color toggle (16-bit flag)
pub const MESSAGE_KEY_BACKGROUND_ON: u32 = 1;

/// Typed value of a dictionary tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
}

impl TupleValue {
    /// Read the value as a 32-bit integer
    #[allow(clippy::cast_possible_wrap)]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Int8(value) => value as i32,
            Self::Int16(value) => value as i32,
            Self::Int32(value) => value,
            Self::Uint8(value) => value as i32,
            Self::Uint16(value) => value as i32,
            Self::Uint32(value) => value as i32,
        }
    }

    /// Read the value as a flag
    pub const fn as_bool(self) -> bool {
        self.as_i32() != 0
    }
}

/// A single key/value pair of an inbound dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple {
    pub key: u32,
    pub value: TupleValue,
}

impl Tuple {
    pub const fn new(key: u32, value: TupleValue) -> Self {
        Self { key, value }
    }
}

/// Find a tuple by key
pub fn find(tuples: &[Tuple], key: u32) -> Option<TupleValue> {
    tuples
        .iter()
        .find(|tuple| tuple.key == key)
        .map(|tuple| tuple.value)
}

/// Configuration sent by the companion app
///
/// Fields are optional on the wire; the settings store only accepts a
/// message that carries both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    /// Hour hand color, 0xRRGGBB
    pub background_color: Option<i32>,
    /// Whether the custom color is enabled
    pub background_on: Option<bool>,
}

impl ConfigMessage {
    /// Complete configuration message
    pub const fn new(background_color: i32, background_on: bool) -> Self {
        Self {
            background_color: Some(background_color),
            background_on: Some(background_on),
        }
    }

    /// Decode a configuration from dictionary tuples
    ///
    /// Unknown keys are ignored.
    pub fn from_tuples(tuples: &[Tuple]) -> Self {
        Self {
            background_color: find(tuples, MESSAGE_KEY_BACKGROUND_COLOR).map(TupleValue::as_i32),
            background_on: find(tuples, MESSAGE_KEY_BACKGROUND_ON).map(TupleValue::as_bool),
        }
    }
}

/// Result codes reported with inbox/outbox notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessageResult {
    Ok,
    SendTimeout,
    SendRejected,
    NotConnected,
    AppNotRunning,
    InvalidArgs,
    Busy,
    BufferOverflow,
    OutOfMemory,
    Closed,
    InternalError,
}

/// Events delivered by the messaging layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// A dictionary was received from the companion app
    Received(ConfigMessage),
    /// An inbound message was dropped before it reached the watchface
    InboxDropped(AppMessageResult),
    /// An outbound message was acknowledged
    OutboxSent,
    /// An outbound message failed
    OutboxFailed(AppMessageResult),
}

/// Type alias for message sender
pub type MessageSender<'a, const SIZE: usize> = Sender<'a, AppMessage, SIZE>;

/// Type alias for message receiver
pub type MessageReceiver<'a, const SIZE: usize> = Receiver<'a, AppMessage, SIZE>;

/// Type alias for the inbox channel
pub type MessageChannel<const SIZE: usize> = Channel<AppMessage, SIZE>;
