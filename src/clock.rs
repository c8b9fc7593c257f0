//! Time sources for Snowflake generation
//!
//! The generator reads wall-clock milliseconds through the [`Clock`] trait so
//! that tests can freeze, advance or rewind time deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// ```
/// use snowflake_id::Clock;
///
/// struct FixedTime;
/// impl Clock for FixedTime {
///     fn now_millis(&self) -> u64 {
///         1_672_531_205_000
///     }
/// }
///
/// assert_eq!(FixedTime.now_millis(), 1_672_531_205_000);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline(always)]
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// The operating system's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Times before 1970 read as 0
    #[inline(always)]
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// A manually driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `millis` milliseconds since the Unix epoch
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Jump to an absolute reading, forwards or backwards
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::Release);
    }

    /// Move the clock forwards, saturating at `u64::MAX`
    pub fn advance(&self, millis: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                Some(cur.saturating_add(millis))
            });
    }

    /// Move the clock backwards, saturating at zero
    pub fn rewind(&self, millis: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                Some(cur.saturating_sub(millis))
            });
    }
}

impl Clock for ManualClock {
    #[inline(always)]
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_reasonable() {
        let now = SystemClock.now_millis();
        // After 2023-01-01
        assert!(now > 1_672_531_200_000);
        // Before 2100-01-01
        assert!(now < 4_102_444_800_000);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let observer = clock.clone();

        clock.advance(5);
        assert_eq!(observer.now_millis(), 1_005);

        clock.rewind(10);
        assert_eq!(observer.now_millis(), 995);

        clock.set(7);
        assert_eq!(observer.now_millis(), 7);

        clock.rewind(100);
        assert_eq!(observer.now_millis(), 0);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 3);
        clock.advance(10);
        assert_eq!(clock.now_millis(), u64::MAX);
        clock.advance(1);
        assert_eq!(clock.now_millis(), u64::MAX);
    }

    #[test]
    fn test_arc_clock_delegates() {
        let clock = Arc::new(ManualClock::new(42));
        assert_eq!(clock.now_millis(), 42);
        assert_eq!((&*clock).now_millis(), 42);
    }
}
