//! Rotary encoder task
//!
//! Wakes on any edge of either line and feeds the level pair to the shared
//! decoder. Committed detents land in the event slot, replacing whatever
//! rotation was still unread.

use defmt::*;
use embassy_futures::select::select;

use bedside_hal::{gpio::read_pair, EdgeInput};
use bedside_hal_rp2040::gpio::Rp2040Input;

use crate::channels::{DIAL, EVENTS};

#[embassy_executor::task]
pub async fn encoder_task(mut a: Rp2040Input<'static>, mut b: Rp2040Input<'static>) {
    info!("Encoder task started");

    let (la, lb) = read_pair(&a, &b);
    DIAL.seed(la, lb);

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;

        // An edge landing between this read and the next wait is seen one
        // edge late. The skipped state shows up as a two-line code, which
        // the decoder ignores; a mismatched terminal code cancels the latch.
        let (la, lb) = read_pair(&a, &b);
        if let Some(event) = DIAL.on_edge(la, lb, &EVENTS) {
            trace!("Detent: {:?}", event);
        }
    }
}
