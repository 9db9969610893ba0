//! Network task
//!
//! Keeps the WiFi link up, publishes its state in [`LINK`] and handles
//! pairing and alarm notices for the state machine.
//!
//! A dropped link is retried immediately per [`ReconnectPolicy`], then
//! rechecked on a slow period. The clock is synchronised on every
//! successful connect.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use bedside_core::clock::ClockTime;
use bedside_core::config::WifiCredentials;
use bedside_core::net::{ReconnectAction, ReconnectPolicy};

use crate::channels::{LinkStatus, NetCommand, LINK, NET_CMD, PAIRED};
use crate::wall_clock;

/// Connect failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum LinkError {
    /// No credentials stored
    Unpaired,
    /// No WiFi radio on this board
    NoRadio,
}

/// WiFi radio seam
///
/// The Pico has no radio. Boards with a CYW43 replace `connect` with a
/// join followed by an SNTP query.
struct Radio;

impl Radio {
    async fn connect(&mut self, credentials: Option<&WifiCredentials>) -> Result<ClockTime, LinkError> {
        let credentials = credentials.ok_or(LinkError::Unpaired)?;
        debug!("Joining {:?}", credentials);
        Err(LinkError::NoRadio)
    }
}

fn publish(update: impl FnOnce(&mut LinkStatus)) {
    LINK.lock(|l| {
        let mut status = l.get();
        update(&mut status);
        l.set(status);
    });
}

#[embassy_executor::task]
pub async fn network_task(mut credentials: Option<WifiCredentials>) {
    info!("Network task started");

    let mut radio = Radio;
    let mut policy = ReconnectPolicy::new();
    let mut delay_ms = 0;

    loop {
        match select(NET_CMD.receive(), Timer::after(Duration::from_millis(delay_ms))).await {
            Either::First(cmd) => {
                // Restarts the recheck wait
                handle_command(cmd, &mut credentials);
                continue;
            }
            Either::Second(()) => {}
        }

        if LINK.lock(|l| l.get().connected) {
            delay_ms = ReconnectPolicy::recheck_delay_ms(wall_clock::is_synced());
            continue;
        }

        delay_ms = loop {
            match radio.connect(credentials.as_ref()).await {
                Ok(time) => {
                    info!("Link up, time {:?}", time);
                    wall_clock::set(time);
                    policy.on_connected();
                    publish(|s| s.connected = true);
                    break ReconnectPolicy::recheck_delay_ms(true);
                }
                Err(LinkError::Unpaired) => {
                    break ReconnectPolicy::recheck_delay_ms(wall_clock::is_synced());
                }
                Err(e) => match policy.on_disconnect() {
                    ReconnectAction::RetryNow(n) => warn!("Connect failed: {:?}, retry {}", e, n),
                    ReconnectAction::Backoff => {
                        warn!("Connect failed: {:?}, backing off", e);
                        break ReconnectPolicy::recheck_delay_ms(wall_clock::is_synced());
                    }
                },
            }
        };
    }
}

fn handle_command(cmd: NetCommand, credentials: &mut Option<WifiCredentials>) {
    match cmd {
        NetCommand::StartPairing => {
            info!("Pairing started");
            PAIRED.lock(|p| p.borrow_mut().take());
            publish(|s| s.pairing = true);
        }
        NetCommand::StopPairing => {
            info!("Pairing stopped");
            publish(|s| s.pairing = false);
            if let Some(paired) = PAIRED.lock(|p| p.borrow().clone()) {
                *credentials = Some(paired);
            }
        }
        NetCommand::Notify(notice) => {
            if LINK.lock(|l| l.get().broker) {
                info!("Publishing {:?}", notice);
            } else {
                debug!("Broker offline, dropped {:?}", notice);
            }
        }
    }
}
