//! Snooze: count down, then ring again
//!
//! The alarm can be disarmed from here with a deliberate gesture: rotate,
//! long press, rotate the other way. Each step must follow within
//! [`BOOST_MS`](super::BOOST_MS) of the previous one; the idle timer
//! resets the gesture.

use crate::input::Direction;
use crate::traits::{
    Action, Board, DisplayDriver, DisplayExt, Element, NetworkTime, Notice, Payload,
};

use super::context::Gesture;
use super::{Context, StateId};

fn set_gesture<B: Board>(ctx: &mut Context<B>, gesture: Gesture) {
    ctx.snooze.gesture = gesture;
    let display = ctx.board.display();
    match gesture {
        Gesture::Waiting | Gesture::Cancelled => display.hide(Element::SnoozeCancel),
        _ => display.update(
            Element::SnoozeCancel,
            Payload::Step(gesture.step()),
            Action::Show,
        ),
    }
}

pub(super) fn enter<B: Board>(ctx: &mut Context<B>) {
    ctx.snooze.gesture = Gesture::Waiting;
    ctx.boost();
    ctx.snooze.start_ms = ctx.now_ms;
    ctx.snooze.remaining_s = ctx.settings.snooze_s;
    let remaining = ctx.snooze.remaining_s;
    ctx.board
        .display()
        .show(Element::SnoozeTime, Payload::Seconds(remaining));
}

pub(super) fn run<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    let elapsed_s = ctx.now_ms.saturating_sub(ctx.snooze.start_ms) / 1000;
    let elapsed_s = u16::try_from(elapsed_s).unwrap_or(u16::MAX);
    let left = ctx.settings.snooze_s.saturating_sub(elapsed_s);

    if left == 0 {
        return Some(StateId::Alarm);
    }
    if left < ctx.snooze.remaining_s {
        ctx.snooze.remaining_s = left;
        ctx.board
            .display()
            .show(Element::SnoozeTime, Payload::Seconds(left));
    }
    None
}

pub(super) fn timer_expired<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.board.display().set_boost(false);
    set_gesture(ctx, Gesture::Waiting);
    None
}

pub(super) fn short_press<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.boost();
    None
}

pub(super) fn long_press<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    if let Gesture::FirstRotation(first) = ctx.snooze.gesture {
        set_gesture(ctx, Gesture::AfterLongPress(first));
    }
    ctx.boost();
    None
}

pub(super) fn rotated<B: Board>(
    ctx: &mut Context<B>,
    _position: i16,
    direction: Direction,
) -> Option<StateId> {
    match ctx.snooze.gesture {
        Gesture::Waiting => set_gesture(ctx, Gesture::FirstRotation(direction)),
        Gesture::AfterLongPress(first) if direction == first.opposite() => {
            ctx.armed = false;
            ctx.board.display().hide(Element::AlarmTime);
            ctx.board.network().notify(Notice::AlarmStopped);
            set_gesture(ctx, Gesture::Cancelled);
            return Some(StateId::Time);
        }
        _ => {}
    }
    ctx.boost();
    None
}

pub(super) fn exit<B: Board>(ctx: &mut Context<B>) {
    let display = ctx.board.display();
    display.hide(Element::SnoozeTime);
    display.hide(Element::SnoozeCancel);
    // Keep the display bright after a cancel, Time picks up the deadline
    if ctx.snooze.gesture == Gesture::Cancelled {
        ctx.boost();
    }
}
