//! Wall-clock time of day
//!
//! The RP2040 has no battery-backed RTC. The clock counts from midnight at
//! boot until the network task reports a time sync, then from the synced
//! minute.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Instant;

use bedside_core::clock::ClockTime;

#[derive(Clone, Copy)]
struct Sync {
    at: Instant,
    minute_of_day: u16,
}

static SYNC: Mutex<CriticalSectionRawMutex, Cell<Option<Sync>>> = Mutex::new(Cell::new(None));

/// Record a time sync at the current instant
pub fn set(time: ClockTime) {
    let sync = Sync {
        at: Instant::now(),
        minute_of_day: time.minute_of_day(),
    };
    SYNC.lock(|s| s.set(Some(sync)));
}

pub fn is_synced() -> bool {
    SYNC.lock(|s| s.get().is_some())
}

/// Current local time
pub fn now() -> ClockTime {
    let sync = SYNC.lock(|s| s.get());
    let (since, base) = match sync {
        Some(sync) => (sync.at, sync.minute_of_day),
        None => (Instant::from_ticks(0), 0),
    };
    let elapsed_min = since.elapsed().as_secs() / 60;
    let minutes = (u64::from(base) + elapsed_min) % u64::from(bedside_core::clock::MINUTES_PER_DAY);
    ClockTime::from_minute_of_day(minutes as u16)
}

/// Monotonic milliseconds since boot
pub fn uptime_ms() -> u64 {
    Instant::now().as_millis()
}
