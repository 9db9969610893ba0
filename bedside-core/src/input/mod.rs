//! Hardware input decoding
//!
//! Turns raw GPIO levels into semantic [`InputEvent`]s:
//! - [`quadrature`] runs on every encoder edge and commits detents
//! - [`debounce`] samples the push-button on a fixed period

pub mod debounce;
pub mod events;
pub mod quadrature;

pub use debounce::{ButtonDebouncer, DebounceConfig, DebounceError};
pub use events::{Direction, InputEvent};
pub use quadrature::{DialRange, QuadratureDecoder, RangeError, SharedDecoder};
