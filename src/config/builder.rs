//! SnowflakeConfig builder for constructing configuration

use std::time::Duration;

use super::{
    SnowflakeConfig, DEFAULT_EPOCH, MAX_DATACENTER_ID, MAX_EPOCH, MAX_SEQUENCE, MAX_WORKER_ID,
};
use crate::error::{Result, SnowflakeError};

/// Default configuration values
pub(super) const DEFAULT_DATACENTER_ID: u8 = 1;
pub(super) const DEFAULT_WORKER_ID: u8 = 1;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_PARK_INTERVAL: Duration = Duration::from_micros(100);

/// Builder for SnowflakeConfig
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    pub(super) datacenter_id: u8,
    pub(super) worker_id: u8,
    pub(super) initial_sequence: u16,
    pub(super) epoch: u64,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) park_interval: Duration,
}

/// Check that `value` lies in `0..=max`
pub(super) fn check_range(field: &'static str, value: i64, max: i64) -> Result<i64> {
    if !(0..=max).contains(&value) {
        return Err(SnowflakeError::InvalidConfiguration { field, value, max });
    }
    Ok(value)
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            datacenter_id: DEFAULT_DATACENTER_ID,
            worker_id: DEFAULT_WORKER_ID,
            initial_sequence: 0,
            epoch: DEFAULT_EPOCH,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            park_interval: DEFAULT_PARK_INTERVAL,
        }
    }

    /// Set the datacenter ID (0-31)
    pub fn datacenter_id(mut self, id: i64) -> Result<Self> {
        self.datacenter_id = check_range("datacenter_id", id, MAX_DATACENTER_ID as i64)? as u8;
        Ok(self)
    }

    /// Set the worker ID (0-31)
    pub fn worker_id(mut self, id: i64) -> Result<Self> {
        self.worker_id = check_range("worker_id", id, MAX_WORKER_ID as i64)? as u8;
        Ok(self)
    }

    /// Set the initial sequence value (0-4095)
    pub fn sequence(mut self, sequence: i64) -> Result<Self> {
        self.initial_sequence = check_range("sequence", sequence, MAX_SEQUENCE as i64)? as u16;
        Ok(self)
    }

    /// Set a custom epoch in milliseconds since the Unix epoch (0..=MAX_EPOCH)
    pub fn epoch(mut self, epoch: i64) -> Result<Self> {
        self.epoch = check_range("epoch", epoch, MAX_EPOCH as i64)? as u64;
        Ok(self)
    }

    /// Enable or disable micro spin before parking on sequence overflow
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to parking
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Sleep between clock polls once spinning is exhausted.
    /// `Duration::ZERO` turns the wait into a pure busy-poll.
    pub const fn park_interval(mut self, interval: Duration) -> Self {
        self.park_interval = interval;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
