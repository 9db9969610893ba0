//! Time: the resting state

use crate::input::Direction;
use crate::traits::{Action, Board, DisplayDriver, DisplayExt, Element, NetworkTime, Payload};

use super::{Context, StateId};

pub(super) fn enter<B: Board>(ctx: &mut Context<B>) {
    let now = ctx.shown_time;
    ctx.board.display().show_time(Element::Clock, now);
    // Force a fresh time-until-alarm readout on the next run. A readout
    // left over from before a disarm has to go now, run only sees changes.
    ctx.time.bed_time = None;
    if !ctx.armed {
        ctx.board.display().hide(Element::BedTime);
    }
}

pub(super) fn run<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    let now = ctx.shown_time;

    if ctx.armed && now == ctx.alarm_time && ctx.ring_guard != Some(now) {
        ctx.ring_guard = Some(now);
        return Some(StateId::Alarm);
    }

    let bed_time = ctx.armed.then(|| now.until(ctx.alarm_time));
    if bed_time != ctx.time.bed_time {
        match bed_time {
            Some(left) => ctx.board.display().show_time(Element::BedTime, left),
            None => ctx.board.display().hide(Element::BedTime),
        }
        ctx.time.bed_time = bed_time;
    }
    None
}

pub(super) fn timer_expired<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.board.display().set_boost(false);
    None
}

pub(super) fn short_press<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    // A press on a dark display only wakes it
    if ctx.board.display().is_lit() {
        ctx.armed = !ctx.armed;
        let action = if ctx.armed { Action::Show } else { Action::Hide };
        let alarm = ctx.alarm_time;
        ctx.board
            .display()
            .update(Element::AlarmTime, Payload::Time(alarm), action);
    }
    ctx.boost();
    None
}

pub(super) fn long_press<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    Some(StateId::SetAlarm)
}

pub(super) fn rotated<B: Board>(
    ctx: &mut Context<B>,
    _position: i16,
    _direction: Direction,
) -> Option<StateId> {
    if !ctx.board.network().is_connected() {
        return Some(StateId::WifiPairing);
    }
    ctx.boost();
    None
}

pub(super) fn exit<B: Board>(_ctx: &mut Context<B>) {}
