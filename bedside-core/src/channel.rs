//! Single-slot input event channel
//!
//! One slot, two write policies:
//!
//! - [`EventChannel::overwrite`] replaces whatever is pending. The encoder
//!   uses it from its edge handler; only the latest rotation matters.
//! - [`EventChannel::send`] waits until the slot is empty. The button task
//!   uses it so presses are not dropped by a slow consumer.
//!
//! An overwrite can still replace an unread button event. Delivery is
//! "latest value wins", not a queue.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::waitqueue::WakerRegistration;

use crate::input::InputEvent;

/// Returned by [`EventChannel::try_send`] when the slot is occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotFull(pub InputEvent);

struct Slot {
    event: Option<InputEvent>,
    receiver: WakerRegistration,
    sender: WakerRegistration,
}

/// Single-capacity mailbox for [`InputEvent`]s
pub struct EventChannel<M: RawMutex> {
    slot: Mutex<M, RefCell<Slot>>,
}

impl<M: RawMutex> EventChannel<M> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(Slot {
                event: None,
                receiver: WakerRegistration::new(),
                sender: WakerRegistration::new(),
            })),
        }
    }

    /// Store `event`, replacing any unread one
    ///
    /// Never waits. Returns the event that was discarded, if any.
    pub fn overwrite(&self, event: InputEvent) -> Option<InputEvent> {
        self.slot.lock(|s| {
            let mut s = s.borrow_mut();
            let previous = s.event.replace(event);
            s.receiver.wake();
            previous
        })
    }

    /// Store `event` if the slot is empty
    pub fn try_send(&self, event: InputEvent) -> Result<(), SlotFull> {
        self.slot.lock(|s| {
            let mut s = s.borrow_mut();
            if s.event.is_some() {
                return Err(SlotFull(event));
            }
            s.event = Some(event);
            s.receiver.wake();
            Ok(())
        })
    }

    /// Store `event`, waiting for the slot to become empty first
    pub async fn send(&self, event: InputEvent) {
        poll_fn(|cx| {
            self.slot.lock(|s| {
                let mut s = s.borrow_mut();
                if s.event.is_some() {
                    s.sender.register(cx.waker());
                    Poll::Pending
                } else {
                    s.event = Some(event);
                    s.receiver.wake();
                    Poll::Ready(())
                }
            })
        })
        .await
    }

    /// Take the pending event, if any
    pub fn try_receive(&self) -> Option<InputEvent> {
        self.slot.lock(|s| {
            let mut s = s.borrow_mut();
            let event = s.event.take();
            if event.is_some() {
                s.sender.wake();
            }
            event
        })
    }

    /// Wait for an event and take it
    pub async fn receive(&self) -> InputEvent {
        poll_fn(|cx| {
            self.slot.lock(|s| {
                let mut s = s.borrow_mut();
                match s.event.take() {
                    Some(event) => {
                        s.sender.wake();
                        Poll::Ready(event)
                    }
                    None => {
                        s.receiver.register(cx.waker());
                        Poll::Pending
                    }
                }
            })
        })
        .await
    }

    #[cfg(test)]
    fn is_occupied(&self) -> bool {
        self.slot.lock(|s| s.borrow().event.is_some())
    }
}

impl<M: RawMutex> Default for EventChannel<M> {
    fn default() -> Self {
        Self::new()
    }
}
