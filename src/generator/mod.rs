//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Timestamp + sequence pair guarded by the mutex
//! - `wait` - Spin and park strategies
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use parking_lot::Mutex;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::{
    SnowflakeConfig, DATACENTER_ID_SHIFT, MAX_TIMESTAMP, TIMESTAMP_SHIFT, WORKER_ID_SHIFT,
};
use crate::error::{Result, SnowflakeError};
use crate::extractor::{SnowflakeExtractor, SnowflakeParts};

use state::State;
use wait::{park_until_next_ms, spin_wait};

/// Thread-safe Snowflake ID generator.
///
/// Share one instance per `(datacenter_id, worker_id)` pair, typically as an
/// `Arc<SnowflakeGenerator>` created by the application at startup.
#[derive(Debug)]
pub struct SnowflakeGenerator<C: Clock = SystemClock> {
    pub(crate) state: Mutex<State>,
    clock: C,
    node_prefix: u64,

    pub config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl SnowflakeGenerator<SystemClock> {
    /// Create with the given datacenter and worker IDs and default settings
    pub fn new(datacenter_id: i64, worker_id: i64) -> Result<Self> {
        let config = SnowflakeConfig::builder()
            .datacenter_id(datacenter_id)?
            .worker_id(worker_id)?
            .build();
        Ok(Self::with_config(config))
    }

    /// Create with custom configuration
    pub fn with_config(config: SnowflakeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create from `SNOWFLAKE_*` environment variables
    pub fn from_env() -> Result<Self> {
        SnowflakeConfig::from_env().map(Self::with_config)
    }
}

impl Default for SnowflakeGenerator<SystemClock> {
    fn default() -> Self {
        Self::with_config(SnowflakeConfig::default())
    }
}

impl<C: Clock> SnowflakeGenerator<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(config: SnowflakeConfig, clock: C) -> Self {
        debug!(
            datacenter_id = config.datacenter_id(),
            worker_id = config.worker_id(),
            epoch = config.epoch(),
            "snowflake generator created"
        );
        Self {
            state: Mutex::new(State::new(config.initial_sequence())),
            clock,
            node_prefix: Self::compute_node_prefix(&config),
            config,
            extract: SnowflakeExtractor::new(config.epoch()),
        }
    }

    #[inline(always)]
    fn compute_node_prefix(config: &SnowflakeConfig) -> u64 {
        ((config.datacenter_id() as u64) << DATACENTER_ID_SHIFT)
            | ((config.worker_id() as u64) << WORKER_ID_SHIFT)
    }

    #[inline(always)]
    pub fn datacenter_id(&self) -> u8 {
        self.config.datacenter_id()
    }

    #[inline(always)]
    pub fn worker_id(&self) -> u8 {
        self.config.worker_id()
    }

    #[inline(always)]
    pub fn epoch(&self) -> u64 {
        self.config.epoch()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Decompose an ID produced with this generator's epoch. Takes no lock.
    #[inline]
    pub fn parse(&self, id: u64) -> SnowflakeParts {
        self.extract.parse(id)
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Block until the clock reads later than `from_ts`
    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        if let Some(new_ts) = spin_wait(from_ts, &self.config, || self.now_ms()) {
            return new_ts;
        }
        park_until_next_ms(from_ts, self.config.park_interval(), || self.now_ms())
    }

    /// Pack an absolute timestamp and sequence with this generator's node bits
    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u16) -> Result<u64> {
        let epoch = self.config.epoch();
        let elapsed = timestamp
            .checked_sub(epoch)
            .filter(|elapsed| *elapsed <= MAX_TIMESTAMP)
            .ok_or(SnowflakeError::TimestampOutOfRange { timestamp, epoch })?;
        Ok((elapsed << TIMESTAMP_SHIFT) | self.node_prefix | sequence as u64)
    }
}
