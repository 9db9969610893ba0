//! SetAlarm: edit hour, then minute
//!
//! The edited field blinks every [`BLINK_MS`]. Rotation writes the dial
//! position into the field and shows it solid until the next blink.

use crate::input::{DialRange, Direction};
use crate::traits::audio::{CONFIRMATION_TRACK, CONFIRMATION_VOLUME};
use crate::traits::{
    Action, AudioPlayer, Board, Dial, DisplayDriver, DisplayExt, Element, Field, Payload,
    Persistence,
};

use super::context::EditPhase;
use super::{Context, StateId, BLINK_MS, BOOST_MS};

fn field(phase: EditPhase) -> Field {
    match phase {
        EditPhase::Hour => Field::Hours,
        EditPhase::Minute => Field::Minutes,
    }
}

/// Show the alarm time with the edited field blanked or solid
fn render<B: Board>(ctx: &mut Context<B>) {
    let action = if ctx.set_alarm.hidden {
        Action::HidePartial(field(ctx.set_alarm.phase))
    } else {
        Action::Show
    };
    let alarm = ctx.alarm_time;
    ctx.board
        .display()
        .update(Element::AlarmTime, Payload::Time(alarm), action);
}

/// Start editing `phase`: blank it, seed the dial, start blinking
fn begin<B: Board>(ctx: &mut Context<B>, phase: EditPhase) {
    ctx.set_alarm.phase = phase;
    ctx.set_alarm.hidden = true;
    render(ctx);
    ctx.trigger(BLINK_MS);

    let (range, value) = match phase {
        EditPhase::Hour => (DialRange::HOURS, ctx.alarm_time.hour),
        EditPhase::Minute => (DialRange::MINUTES, ctx.alarm_time.minute),
    };
    let dial = ctx.board.dial();
    dial.set_range(range);
    dial.set_position(i16::from(value));
}

pub(super) fn enter<B: Board>(ctx: &mut Context<B>) {
    ctx.board.display().set_boost(true);
    ctx.set_alarm.original = ctx.alarm_time;
    begin(ctx, EditPhase::Hour);
}

pub(super) fn run<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    None
}

pub(super) fn timer_expired<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.set_alarm.hidden = !ctx.set_alarm.hidden;
    render(ctx);
    ctx.trigger(BLINK_MS);
    None
}

pub(super) fn short_press<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    match ctx.set_alarm.phase {
        EditPhase::Hour => {
            begin(ctx, EditPhase::Minute);
            None
        }
        EditPhase::Minute => Some(StateId::Time),
    }
}

pub(super) fn long_press<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.alarm_time = ctx.set_alarm.original;
    Some(StateId::Time)
}

pub(super) fn rotated<B: Board>(
    ctx: &mut Context<B>,
    _position: i16,
    _direction: Direction,
) -> Option<StateId> {
    let position = ctx.board.dial().position();
    match ctx.set_alarm.phase {
        EditPhase::Hour => ctx.alarm_time.hour = position.clamp(0, 23) as u8,
        EditPhase::Minute => ctx.alarm_time.minute = position.clamp(0, 59) as u8,
    }
    ctx.set_alarm.hidden = false;
    render(ctx);
    ctx.trigger(BLINK_MS);
    None
}

/// Commit: arm and persist, then keep the result on screen
pub(super) fn exit<B: Board>(ctx: &mut Context<B>) {
    let alarm = ctx.alarm_time;
    ctx.board.display().show_time(Element::AlarmTime, alarm);
    ctx.armed = true;
    ctx.board.storage().save_alarm_time(alarm);

    if ctx.settings.sounds_enabled {
        let audio = ctx.board.audio();
        audio.set_volume(CONFIRMATION_VOLUME);
        audio.play_track(CONFIRMATION_TRACK);
    }
    ctx.trigger(BOOST_MS);
}
