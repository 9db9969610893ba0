//! State machine driver
//!
//! Owns the [`Context`] and the current state, routes input events and
//! control-loop ticks to the state hooks, and runs the transition
//! protocol.

use crate::clock::ClockTime;
use crate::config::Persisted;
use crate::input::{Direction, InputEvent};
use crate::traits::{AudioPlayer, Board, DisplayExt, Element, NetworkTime};

use super::{alarm, pairing, set_alarm, snooze, time};
use super::{Context, StateId};

/// The alarm clock
pub struct ClockMachine<B: Board> {
    state: StateId,
    ctx: Context<B>,
}

impl<B: Board> ClockMachine<B> {
    /// Create the machine from restored configuration and enter Time
    pub fn new(board: B, persisted: &Persisted, now_ms: u64) -> Self {
        let mut machine = Self {
            state: StateId::Time,
            ctx: Context::new(board, persisted, now_ms),
        };
        machine.enter(StateId::Time);
        machine
    }

    pub fn state(&self) -> StateId {
        self.state
    }

    pub fn context(&self) -> &Context<B> {
        &self.ctx
    }

    pub fn board(&mut self) -> &mut B {
        &mut self.ctx.board
    }

    pub fn alarm_time(&self) -> ClockTime {
        self.ctx.alarm_time
    }

    pub fn is_armed(&self) -> bool {
        self.ctx.armed
    }

    /// Route one input event to the current state
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) {
        self.ctx.now_ms = now_ms;
        let ctx = &mut self.ctx;
        let next = match event {
            InputEvent::ShortPress => match self.state {
                StateId::Time => time::short_press(ctx),
                StateId::SetAlarm => set_alarm::short_press(ctx),
                StateId::Alarm => alarm::short_press(ctx),
                StateId::Snooze => snooze::short_press(ctx),
                StateId::WifiPairing => pairing::short_press(ctx),
            },
            InputEvent::LongPress => match self.state {
                StateId::Time => time::long_press(ctx),
                StateId::SetAlarm => set_alarm::long_press(ctx),
                StateId::Alarm => alarm::long_press(ctx),
                StateId::Snooze => snooze::long_press(ctx),
                StateId::WifiPairing => pairing::long_press(ctx),
            },
            InputEvent::Rotation {
                position,
                direction,
            } => self.rotated(position, direction),
        };
        self.follow(next);
    }

    fn rotated(&mut self, position: i16, direction: Direction) -> Option<StateId> {
        let ctx = &mut self.ctx;
        match self.state {
            StateId::Time => time::rotated(ctx, position, direction),
            StateId::SetAlarm => set_alarm::rotated(ctx, position, direction),
            StateId::Alarm => alarm::rotated(ctx, position, direction),
            StateId::Snooze => snooze::rotated(ctx, position, direction),
            StateId::WifiPairing => pairing::rotated(ctx, position, direction),
        }
    }

    /// One control-loop iteration
    ///
    /// Refreshes the clock and status icons, then fires the state timer if
    /// it expired, otherwise runs the state's periodic hook.
    pub fn tick(&mut self, now_ms: u64) {
        self.ctx.now_ms = now_ms;
        self.refresh_clock();
        self.refresh_status();

        let ctx = &mut self.ctx;
        let next = if ctx.timer.take_expired(now_ms) {
            match self.state {
                StateId::Time => time::timer_expired(ctx),
                StateId::SetAlarm => set_alarm::timer_expired(ctx),
                StateId::Alarm => alarm::timer_expired(ctx),
                StateId::Snooze => snooze::timer_expired(ctx),
                StateId::WifiPairing => pairing::timer_expired(ctx),
            }
        } else {
            match self.state {
                StateId::Time => time::run(ctx),
                StateId::SetAlarm => set_alarm::run(ctx),
                StateId::Alarm => alarm::run(ctx),
                StateId::Snooze => snooze::run(ctx),
                StateId::WifiPairing => pairing::run(ctx),
            }
        };
        self.follow(next);
    }

    fn follow(&mut self, next: Option<StateId>) {
        if let Some(next) = next {
            self.transition(next);
        }
    }

    /// Cancel the timer, exit the old state, enter the new one
    fn transition(&mut self, next: StateId) {
        self.ctx.timer.cancel();
        self.exit(self.state);
        self.state = next;
        self.enter(next);
    }

    fn enter(&mut self, state: StateId) {
        let ctx = &mut self.ctx;
        match state {
            StateId::Time => time::enter(ctx),
            StateId::SetAlarm => set_alarm::enter(ctx),
            StateId::Alarm => alarm::enter(ctx),
            StateId::Snooze => snooze::enter(ctx),
            StateId::WifiPairing => pairing::enter(ctx),
        }
    }

    fn exit(&mut self, state: StateId) {
        let ctx = &mut self.ctx;
        match state {
            StateId::Time => time::exit(ctx),
            StateId::SetAlarm => set_alarm::exit(ctx),
            StateId::Alarm => alarm::exit(ctx),
            StateId::Snooze => snooze::exit(ctx),
            StateId::WifiPairing => pairing::exit(ctx),
        }
    }

    /// Re-render the clock when the wall-clock minute changes
    fn refresh_clock(&mut self) {
        let ctx = &mut self.ctx;
        let now = ctx.board.network().current_time();
        if now != ctx.shown_time {
            ctx.shown_time = now;
            ctx.ring_guard = None;
            ctx.board.display().show_time(Element::Clock, now);
        }
    }

    /// Update status icons whose state changed since last shown
    fn refresh_status(&mut self) {
        let ctx = &mut self.ctx;
        let wifi = ctx.board.network().is_connected();
        let broker = ctx.board.network().is_broker_connected();
        let audio = ctx.board.audio().is_online();

        for (element, shown, now) in [
            (Element::WifiStatus, &mut ctx.icons.wifi, wifi),
            (Element::BrokerStatus, &mut ctx.icons.broker, broker),
            (Element::Audio, &mut ctx.icons.audio, audio),
        ] {
            if *shown != Some(now) {
                *shown = Some(now);
                ctx.board.display().show_flag(element, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input::quadrature::turn;
    use crate::state::context::Gesture;
    use crate::state::mock::{Call, MockBoard};
    use crate::state::{ALARM_START_MS, BLINK_MS, BOOST_MS};
    use crate::traits::audio::{CONFIRMATION_TRACK, MAX_VOLUME};
    use crate::traits::{Action, Notice, Payload};

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    fn machine_at(now: ClockTime, alarm: ClockTime) -> ClockMachine<MockBoard> {
        let mut board = MockBoard::default();
        board.time = now;
        board.connected = true;
        let persisted = Persisted {
            alarm_time: alarm,
            ..Persisted::default()
        };
        ClockMachine::new(board, &persisted, 0)
    }

    /// Arm the alarm from Time with a press on a lit display
    fn arm(m: &mut ClockMachine<MockBoard>, now_ms: u64) {
        m.board().lit = true;
        m.dispatch(InputEvent::ShortPress, now_ms);
        assert!(m.is_armed());
    }

    /// Turn the mock dial one detent and dispatch the resulting event
    fn rotate(m: &mut ClockMachine<MockBoard>, direction: Direction, now_ms: u64) {
        let event = turn(&mut m.board().dial, direction).unwrap();
        m.dispatch(event, now_ms);
    }

    fn ring(m: &mut ClockMachine<MockBoard>) {
        arm(m, 0);
        m.tick(10);
        assert_eq!(m.state(), StateId::Alarm);
    }

    #[test]
    fn test_starts_in_time_showing_clock() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        assert_eq!(m.state(), StateId::Time);
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::Clock, Payload::Time(at(22, 15)), Action::Show)));
    }

    #[test]
    fn test_first_tick_shows_all_status_icons() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.tick(10);
        for element in [Element::WifiStatus, Element::BrokerStatus, Element::Audio] {
            assert_eq!(m.board().count_element(element), 1);
        }
        // Unchanged flags are not re-rendered
        m.tick(20);
        assert_eq!(m.board().count_element(Element::WifiStatus), 1);
        m.board().connected = false;
        m.tick(30);
        assert_eq!(m.board().count_element(Element::WifiStatus), 2);
    }

    #[test]
    fn test_clock_refreshes_on_minute_change() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().time = at(22, 16);
        m.tick(10);
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::Clock, Payload::Time(at(22, 16)), Action::Show)));
    }

    #[test]
    fn test_press_on_dark_display_only_wakes() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().lit = false;
        m.dispatch(InputEvent::ShortPress, 0);
        assert!(!m.is_armed());
        assert_eq!(m.board().boost, Some(true));
        assert_eq!(m.context().timer.deadline(), Some(BOOST_MS));
    }

    #[test]
    fn test_short_press_toggles_armed() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        arm(&mut m, 0);
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::AlarmTime, Payload::Time(at(7, 0)), Action::Show)));
        m.dispatch(InputEvent::ShortPress, 100);
        assert!(!m.is_armed());
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::AlarmTime, Payload::Time(at(7, 0)), Action::Hide)));
    }

    #[test]
    fn test_boost_expires() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.dispatch(InputEvent::ShortPress, 0);
        m.tick(BOOST_MS - 1);
        assert_eq!(m.board().boost, Some(true));
        m.tick(BOOST_MS);
        assert_eq!(m.board().boost, Some(false));
    }

    #[test]
    fn test_bed_time_shown_while_armed() {
        let mut m = machine_at(at(22, 30), at(7, 0));
        arm(&mut m, 0);
        m.tick(10);
        assert!(m.board().calls.contains(&Call::Display(
            Element::BedTime,
            Payload::Time(at(8, 30)),
            Action::Show
        )));
        m.board().time = at(22, 31);
        m.tick(20);
        assert!(m.board().calls.contains(&Call::Display(
            Element::BedTime,
            Payload::Time(at(8, 29)),
            Action::Show
        )));
        m.dispatch(InputEvent::ShortPress, 30);
        m.tick(40);
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::BedTime, Payload::None, Action::Hide)));
    }

    #[test]
    fn test_rotation_boosts_when_connected() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        rotate(&mut m, Direction::Increasing, 0);
        assert_eq!(m.state(), StateId::Time);
        assert_eq!(m.board().boost, Some(true));
    }

    #[test]
    fn test_rotation_starts_pairing_when_disconnected() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().connected = false;
        rotate(&mut m, Direction::Increasing, 0);
        assert_eq!(m.state(), StateId::WifiPairing);
        assert!(m.board().pairing);
    }

    #[test]
    fn test_pairing_persists_credentials_on_connect() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().connected = false;
        rotate(&mut m, Direction::Increasing, 0);
        m.tick(10);
        assert_eq!(m.state(), StateId::WifiPairing);

        // Blink while waiting
        m.tick(BLINK_MS);
        assert!(m.board().calls.contains(&Call::Display(
            Element::WifiSetting,
            Payload::None,
            Action::Blink(false)
        )));

        m.board().connected = true;
        m.board().credentials = Some(Default::default());
        m.tick(BLINK_MS + 10);
        assert_eq!(m.state(), StateId::Time);
        assert!(m.board().calls.contains(&Call::SaveCredentials));
        assert!(!m.board().pairing);
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::WifiSetting, Payload::None, Action::Hide)));
    }

    #[test]
    fn test_rotation_aborts_pairing() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().connected = false;
        rotate(&mut m, Direction::Increasing, 0);
        rotate(&mut m, Direction::Decreasing, 100);
        assert_eq!(m.state(), StateId::Time);
        assert!(!m.board().pairing);
        assert!(!m.board().calls.contains(&Call::SaveCredentials));
    }

    #[test]
    fn test_pairing_ignores_button() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.board().connected = false;
        rotate(&mut m, Direction::Increasing, 0);
        m.dispatch(InputEvent::ShortPress, 10);
        m.dispatch(InputEvent::LongPress, 20);
        assert_eq!(m.state(), StateId::WifiPairing);
    }

    // End-to-end (1): armed alarm at the current minute rings on the next tick
    #[test]
    fn test_armed_alarm_rings() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        assert_eq!(m.board().looping, Some(1));
        assert_eq!(m.board().volume, 5);
        assert!(m.board().max_brightness);
        assert!(m
            .board()
            .calls
            .contains(&Call::Notify(Notice::AlarmTriggered)));
    }

    #[test]
    fn test_disarmed_alarm_does_not_ring() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        m.tick(10);
        assert_eq!(m.state(), StateId::Time);
    }

    #[test]
    fn test_emergency_stop_does_not_retrigger_same_minute() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        rotate(&mut m, Direction::Increasing, 20);
        assert_eq!(m.state(), StateId::Time);
        assert_eq!(m.board().looping, None);
        assert!(!m.board().max_brightness);
        assert!(m.board().calls.contains(&Call::Notify(Notice::AlarmStopped)));

        m.tick(30);
        assert_eq!(m.state(), StateId::Time);

        // Next day, same minute
        m.board().time = at(7, 1);
        m.tick(40);
        m.board().time = at(7, 0);
        m.tick(50);
        assert_eq!(m.state(), StateId::Alarm);
    }

    #[test]
    fn test_alarm_long_press_is_noop() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        m.dispatch(InputEvent::LongPress, 20);
        assert_eq!(m.state(), StateId::Alarm);
    }

    #[test]
    fn test_crescendo() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        m.ctx.settings = Settings {
            crescendo_factor: 3,
            ..Settings::default()
        };
        ring(&mut m);

        let mut now = 10 + ALARM_START_MS;
        let mut firings = 0u32;
        let mut last = m.board().volume;
        while firings < 200 {
            m.tick(now);
            firings += 1;
            let volume = m.board().volume;
            assert!(volume <= MAX_VOLUME);
            assert!(volume >= last);
            assert!(volume - last <= 1);
            let expected = (5 + firings / 3).min(u32::from(MAX_VOLUME)) as u8;
            assert_eq!(volume, expected, "after {firings} firings");
            last = volume;
            now += BLINK_MS;
        }
    }

    #[test]
    fn test_alarm_icon_blinks() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        m.tick(10 + ALARM_START_MS);
        m.tick(10 + ALARM_START_MS + BLINK_MS);
        let blinks: heapless::Vec<bool, 4> = m
            .board()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Display(Element::AlarmActive, _, Action::Blink(lit)) => Some(*lit),
                _ => None,
            })
            .collect();
        assert_eq!(blinks.as_slice(), &[true, false]);
    }

    // End-to-end (2): snooze runs out and rings again
    #[test]
    fn test_snooze_rings_again() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        m.ctx.settings.snooze_s = 60;
        ring(&mut m);
        m.dispatch(InputEvent::ShortPress, 1000);
        assert_eq!(m.state(), StateId::Snooze);
        assert_eq!(m.board().looping, None);

        // Boost window ends, countdown keeps going
        m.tick(1000 + BOOST_MS);
        m.tick(1000 + 59_999);
        assert_eq!(m.state(), StateId::Snooze);
        assert!(m.board().calls.contains(&Call::Display(
            Element::SnoozeTime,
            Payload::Seconds(1),
            Action::Show
        )));
        m.tick(1000 + 60_000);
        assert_eq!(m.state(), StateId::Alarm);
        assert_eq!(m.board().looping, Some(1));
    }

    #[test]
    fn test_snooze_countdown_only_decreases() {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        m.dispatch(InputEvent::ShortPress, 0);
        m.board().calls.clear();
        m.tick(500);
        m.tick(999);
        assert_eq!(m.board().count_element(Element::SnoozeTime), 0);
        m.tick(1000);
        assert!(m.board().calls.contains(&Call::Display(
            Element::SnoozeTime,
            Payload::Seconds(299),
            Action::Show
        )));
    }

    fn snoozing() -> ClockMachine<MockBoard> {
        let mut m = machine_at(at(7, 0), at(7, 0));
        ring(&mut m);
        m.dispatch(InputEvent::ShortPress, 100);
        assert_eq!(m.state(), StateId::Snooze);
        m
    }

    #[test]
    fn test_snooze_cancel_gesture() {
        let mut m = snoozing();
        rotate(&mut m, Direction::Increasing, 200);
        m.dispatch(InputEvent::LongPress, 1200);
        rotate(&mut m, Direction::Decreasing, 2200);
        assert_eq!(m.state(), StateId::Time);
        assert!(!m.is_armed());
        assert!(m.board().calls.contains(&Call::Notify(Notice::AlarmStopped)));
        assert!(m
            .board()
            .calls
            .contains(&Call::Display(Element::AlarmTime, Payload::None, Action::Hide)));
        // Boost carried into Time, then released by Time's timer
        assert_eq!(m.context().timer.deadline(), Some(2200 + BOOST_MS));
        m.tick(2200 + BOOST_MS);
        assert_eq!(m.board().boost, Some(false));
    }

    #[test]
    fn test_snooze_cancel_hides_bed_time() {
        let mut m = machine_at(at(6, 59), at(7, 0));
        arm(&mut m, 0);
        m.tick(10);
        assert!(m.board().calls.contains(&Call::Display(
            Element::BedTime,
            Payload::Time(at(0, 1)),
            Action::Show
        )));

        m.board().time = at(7, 0);
        m.tick(20);
        assert_eq!(m.state(), StateId::Alarm);
        m.dispatch(InputEvent::ShortPress, 100);
        rotate(&mut m, Direction::Increasing, 200);
        m.dispatch(InputEvent::LongPress, 1200);
        rotate(&mut m, Direction::Decreasing, 2200);
        assert_eq!(m.state(), StateId::Time);
        for i in 1..=5 {
            m.tick(2200 + i * 10);
        }

        let last = m
            .board()
            .calls
            .iter()
            .rev()
            .find(|c| matches!(c, Call::Display(Element::BedTime, _, _)))
            .copied();
        assert_eq!(
            last,
            Some(Call::Display(Element::BedTime, Payload::None, Action::Hide))
        );
    }

    #[test]
    fn test_snooze_same_direction_does_not_cancel() {
        let mut m = snoozing();
        rotate(&mut m, Direction::Increasing, 200);
        m.dispatch(InputEvent::LongPress, 1200);
        rotate(&mut m, Direction::Increasing, 2200);
        assert_eq!(m.state(), StateId::Snooze);
        assert!(m.is_armed());
    }

    #[test]
    fn test_snooze_long_press_before_rotation_does_not_count() {
        let mut m = snoozing();
        m.dispatch(InputEvent::LongPress, 200);
        rotate(&mut m, Direction::Increasing, 400);
        rotate(&mut m, Direction::Decreasing, 600);
        assert_eq!(m.state(), StateId::Snooze);
        assert_eq!(m.context().snooze.gesture, Gesture::FirstRotation(Direction::Increasing));
    }

    #[test]
    fn test_snooze_idle_gap_resets_gesture() {
        let mut m = snoozing();
        rotate(&mut m, Direction::Increasing, 200);
        m.dispatch(InputEvent::LongPress, 1200);
        // Idle for the full window
        m.tick(1200 + BOOST_MS);
        assert_eq!(m.context().snooze.gesture, Gesture::Waiting);
        rotate(&mut m, Direction::Decreasing, 1200 + BOOST_MS + 10);
        assert_eq!(m.state(), StateId::Snooze);
        assert_eq!(m.context().snooze.gesture, Gesture::FirstRotation(Direction::Decreasing));
    }

    #[test]
    fn test_snooze_gesture_just_inside_window() {
        let mut m = snoozing();
        rotate(&mut m, Direction::Increasing, 200);
        m.tick(200 + BOOST_MS - 1);
        m.dispatch(InputEvent::LongPress, 200 + BOOST_MS - 1);
        m.tick(200 + 2 * BOOST_MS - 2);
        rotate(&mut m, Direction::Decreasing, 200 + 2 * BOOST_MS - 2);
        assert_eq!(m.state(), StateId::Time);
    }

    // End-to-end (3): edit hour then minute with the dial
    #[test]
    fn test_set_alarm_with_dial() {
        let mut m = machine_at(at(22, 15), at(7, 20));
        m.ctx.settings.sounds_enabled = true;
        m.dispatch(InputEvent::LongPress, 0);
        assert_eq!(m.state(), StateId::SetAlarm);
        assert_eq!(m.board().dial.position(), 7);
        assert!(m.board().calls.contains(&Call::Display(
            Element::AlarmTime,
            Payload::Time(at(7, 20)),
            Action::HidePartial(crate::traits::Field::Hours)
        )));

        for i in 0..3 {
            rotate(&mut m, Direction::Increasing, 100 + i);
        }
        m.dispatch(InputEvent::ShortPress, 200);
        assert_eq!(m.board().dial.position(), 20);
        for i in 0..10 {
            rotate(&mut m, Direction::Increasing, 300 + i);
        }
        m.dispatch(InputEvent::ShortPress, 400);

        assert_eq!(m.state(), StateId::Time);
        assert_eq!(m.alarm_time(), at(10, 30));
        assert!(m.is_armed());
        assert_eq!(m.board().saved_alarm, Some(at(10, 30)));
        assert_eq!(m.board().played, Some(CONFIRMATION_TRACK));
        assert_eq!(m.board().volume, 10);
        assert_eq!(m.context().timer.deadline(), Some(400 + BOOST_MS));
    }

    #[test]
    fn test_set_alarm_hour_wraps() {
        let mut m = machine_at(at(22, 15), at(23, 0));
        m.dispatch(InputEvent::LongPress, 0);
        rotate(&mut m, Direction::Increasing, 10);
        m.dispatch(InputEvent::ShortPress, 20);
        m.dispatch(InputEvent::ShortPress, 30);
        assert_eq!(m.alarm_time(), at(0, 0));
    }

    // End-to-end (4): long press cancels the edit
    #[test]
    fn test_set_alarm_cancel_restores() {
        let mut m = machine_at(at(22, 15), at(6, 45));
        m.dispatch(InputEvent::LongPress, 0);
        for i in 0..5 {
            rotate(&mut m, Direction::Decreasing, 10 + i);
        }
        m.dispatch(InputEvent::ShortPress, 100);
        rotate(&mut m, Direction::Increasing, 110);
        m.dispatch(InputEvent::LongPress, 200);

        assert_eq!(m.state(), StateId::Time);
        assert_eq!(m.alarm_time(), at(6, 45));
        assert_eq!(m.board().saved_alarm, Some(at(6, 45)));
        // Sounds disabled by default
        assert_eq!(m.board().played, None);
    }

    #[test]
    fn test_set_alarm_blinks_edited_field() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.dispatch(InputEvent::LongPress, 0);
        m.board().calls.clear();
        m.tick(BLINK_MS);
        m.tick(2 * BLINK_MS);
        let actions: heapless::Vec<Action, 4> = m
            .board()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Display(Element::AlarmTime, _, action) => Some(*action),
                _ => None,
            })
            .collect();
        assert_eq!(
            actions.as_slice(),
            &[
                Action::Show,
                Action::HidePartial(crate::traits::Field::Hours)
            ]
        );
    }

    #[test]
    fn test_transition_drops_pending_timer() {
        let mut m = machine_at(at(22, 15), at(7, 0));
        m.dispatch(InputEvent::ShortPress, 0);
        assert!(m.context().timer.is_armed());
        m.dispatch(InputEvent::LongPress, 10);
        // SetAlarm re-armed its own blink timer, not the boost
        assert_eq!(m.context().timer.deadline(), Some(10 + BLINK_MS));
    }
}
