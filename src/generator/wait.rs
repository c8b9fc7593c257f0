//! Wait strategies for sequence exhaustion
//!
//! A short spin catches the common case where the next millisecond is only
//! microseconds away; after that the waiter parks between clock polls.

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Perform spin-wait loop, checking for timestamp advancement
///
/// Returns Some(new_ts) if timestamp advanced, None if spin loops exhausted
#[inline]
pub(crate) fn spin_wait<F>(from_timestamp: u64, config: &SnowflakeConfig, get_time: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Poll the clock until it passes `from_timestamp`, sleeping `interval` between polls.
/// A zero interval busy-polls.
pub(crate) fn park_until_next_ms<F>(from_timestamp: u64, interval: Duration, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        if interval.is_zero() {
            std::hint::spin_loop();
        } else {
            thread::sleep(interval);
        }
    }
}
