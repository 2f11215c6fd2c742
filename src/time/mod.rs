//! Page clock: virtual timers and debouncing.

pub mod debounce;
pub mod timers;

pub use debounce::Debouncer;
pub use timers::{Millis, TimerId, TimerQueue};
