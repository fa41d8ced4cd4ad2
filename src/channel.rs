//! Bounded inbox for `no_std` environments.
//!
//! Messages may arrive from an interrupt or a radio task while the event
//! loop drains them, so the queue lives behind a `critical-section` mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
///
/// Carries the rejected message back to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded FIFO shared between producers and the event loop.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Consumer handle
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Enqueue a message, handing it back if the queue is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Dequeue the oldest message
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.with_queue(|queue| queue.pop_front().ok_or(TryReceiveError))
    }

    /// Number of queued messages
    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_queue<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.queue.borrow(cs).borrow_mut()))
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// See [`Channel::try_send`].
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Consumer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// See [`Channel::try_receive`].
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Check if nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}
