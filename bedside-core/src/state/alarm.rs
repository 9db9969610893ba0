//! Alarm: ring with rising volume

use crate::input::Direction;
use crate::traits::audio::MAX_VOLUME;
use crate::traits::{
    Action, AudioPlayer, Board, DisplayDriver, DisplayExt, Element, NetworkTime, Notice, Payload,
};

use super::{Context, StateId, ALARM_START_MS, ALARM_START_VOLUME, BLINK_MS};

pub(super) fn enter<B: Board>(ctx: &mut Context<B>) {
    ctx.board.display().set_max_brightness(true);

    ctx.alarm.volume = ALARM_START_VOLUME;
    ctx.alarm.counter = 0;
    ctx.alarm.lit = false;
    let melody = ctx.settings.melody;
    let audio = ctx.board.audio();
    audio.set_volume(ALARM_START_VOLUME);
    audio.loop_track(melody);

    // First firing starts the blink and crescendo cadence
    ctx.trigger(ALARM_START_MS);
    ctx.board.network().notify(Notice::AlarmTriggered);
}

pub(super) fn run<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    None
}

pub(super) fn timer_expired<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.alarm.counter += 1;
    if ctx.alarm.counter >= ctx.settings.crescendo_steps() {
        ctx.alarm.counter = 0;
        if ctx.alarm.volume < MAX_VOLUME {
            ctx.alarm.volume += 1;
            let volume = ctx.alarm.volume;
            ctx.board.audio().set_volume(volume);
        }
    }
    ctx.trigger(BLINK_MS);

    ctx.alarm.lit = !ctx.alarm.lit;
    let lit = ctx.alarm.lit;
    ctx.board
        .display()
        .update(Element::AlarmActive, Payload::None, Action::Blink(lit));
    None
}

pub(super) fn short_press<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    Some(StateId::Snooze)
}

pub(super) fn long_press<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    None
}

/// Emergency stop
pub(super) fn rotated<B: Board>(
    ctx: &mut Context<B>,
    _position: i16,
    _direction: Direction,
) -> Option<StateId> {
    ctx.board.network().notify(Notice::AlarmStopped);
    Some(StateId::Time)
}

pub(super) fn exit<B: Board>(ctx: &mut Context<B>) {
    ctx.board.audio().stop();
    let display = ctx.board.display();
    display.set_max_brightness(false);
    display.hide(Element::AlarmActive);
    let alarm = ctx.alarm_time;
    ctx.board.display().show_time(Element::AlarmTime, alarm);
}
