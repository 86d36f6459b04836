//! Control-event channel for `no_std` environments.
//!
//! Navigation and quit events come from the outside world (keyboard,
//! buttons, an RF remote) and are drained by the scheduler once per tick.
//! The queue is a fixed-size `heapless::Deque` guarded by critical
//! sections, so it is safe to feed from an interrupt handler.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// External event consumed by the scheduler. No payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Switch to the next animation.
    Next,
    /// Switch to the previous animation.
    Previous,
    /// Leave the run loop and tear down.
    Quit,
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ControlEvent);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe queue of [`ControlEvent`]s.
pub struct ControlChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlEvent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    /// Try to send an event into the channel.
    ///
    /// Returns `Err(TrySendError(event))` if the channel is full.
    pub fn try_send(&self, event: ControlEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Try to receive an event from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<ControlEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    /// Try to send an event into the channel.
    pub fn try_send(&self, event: ControlEvent) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }
}

/// A receiver handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    /// Try to receive an event from the channel.
    pub fn try_receive(&self) -> Result<ControlEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}
