//! WifiPairing: wait for credentials

use crate::input::Direction;
use crate::traits::{
    Action, Board, DisplayExt, DisplayDriver, Element, NetworkTime, Payload, Persistence,
};

use super::{Context, StateId, BLINK_MS};

pub(super) fn enter<B: Board>(ctx: &mut Context<B>) {
    ctx.board.network().start_pairing();
    ctx.pairing.lit = true;
    ctx.board.display().show(Element::WifiSetting, Payload::None);
    ctx.trigger(BLINK_MS);
}

pub(super) fn run<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    let network = ctx.board.network();
    if !network.is_connected() {
        return None;
    }
    if let Some(credentials) = network.paired_credentials() {
        ctx.board.storage().save_credentials(&credentials);
    }
    Some(StateId::Time)
}

pub(super) fn timer_expired<B: Board>(ctx: &mut Context<B>) -> Option<StateId> {
    ctx.pairing.lit = !ctx.pairing.lit;
    let lit = ctx.pairing.lit;
    ctx.board
        .display()
        .update(Element::WifiSetting, Payload::None, Action::Blink(lit));
    ctx.trigger(BLINK_MS);
    None
}

pub(super) fn short_press<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    None
}

pub(super) fn long_press<B: Board>(_ctx: &mut Context<B>) -> Option<StateId> {
    None
}

/// Abort pairing
pub(super) fn rotated<B: Board>(
    _ctx: &mut Context<B>,
    _position: i16,
    _direction: Direction,
) -> Option<StateId> {
    Some(StateId::Time)
}

pub(super) fn exit<B: Board>(ctx: &mut Context<B>) {
    ctx.board.network().stop_pairing();
    ctx.board.display().hide(Element::WifiSetting);
}
