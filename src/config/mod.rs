//! Configuration for the Snowflake generator

mod builder;

use std::time::Duration;

pub use builder::SnowflakeConfigBuilder;
use builder::{
    DEFAULT_DATACENTER_ID, DEFAULT_PARK_INTERVAL, DEFAULT_SPIN_ENABLED,
    DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY, DEFAULT_WORKER_ID,
};

use crate::error::{Result, SnowflakeError};

/// Bit layout: 1 sign | 41 timestamp | 5 datacenter | 5 worker | 12 sequence
pub const TIMESTAMP_BITS: u8 = 41;
pub const DATACENTER_ID_BITS: u8 = 5;
pub const WORKER_ID_BITS: u8 = 5;
pub const SEQUENCE_BITS: u8 = 12;

pub const WORKER_ID_SHIFT: u8 = SEQUENCE_BITS;
pub const DATACENTER_ID_SHIFT: u8 = SEQUENCE_BITS + WORKER_ID_BITS;
pub const TIMESTAMP_SHIFT: u8 = SEQUENCE_BITS + WORKER_ID_BITS + DATACENTER_ID_BITS;

pub const MAX_DATACENTER_ID: u8 = ((1u16 << DATACENTER_ID_BITS) - 1) as u8;
pub const MAX_WORKER_ID: u8 = ((1u16 << WORKER_ID_BITS) - 1) as u8;
pub const MAX_SEQUENCE: u16 = ((1u32 << SEQUENCE_BITS) - 1) as u16;
pub const MAX_TIMESTAMP: u64 = (1u64 << TIMESTAMP_BITS) - 1;

/// 2023-01-01T00:00:00Z in milliseconds since the Unix epoch
pub const DEFAULT_EPOCH: u64 = 1_672_531_200_000;
/// Largest epoch for which every decoded timestamp still fits in an `i64`
pub const MAX_EPOCH: u64 = i64::MAX as u64 - MAX_TIMESTAMP;

pub const ENV_DATACENTER_ID: &str = "SNOWFLAKE_DATACENTER_ID";
pub const ENV_WORKER_ID: &str = "SNOWFLAKE_WORKER_ID";
pub const ENV_EPOCH: &str = "SNOWFLAKE_EPOCH";

/// Configuration for the Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    datacenter_id: u8,
    worker_id: u8,
    initial_sequence: u16,
    epoch: u64,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    park_interval: Duration,
}

impl SnowflakeConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            datacenter_id: b.datacenter_id,
            worker_id: b.worker_id,
            initial_sequence: b.initial_sequence,
            epoch: b.epoch,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
            park_interval: b.park_interval,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Build a configuration from `SNOWFLAKE_DATACENTER_ID`, `SNOWFLAKE_WORKER_ID`
    /// and `SNOWFLAKE_EPOCH`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(id) = parse_var(&lookup, ENV_DATACENTER_ID)? {
            builder = builder.datacenter_id(id)?;
        }
        if let Some(id) = parse_var(&lookup, ENV_WORKER_ID)? {
            builder = builder.worker_id(id)?;
        }
        if let Some(epoch) = parse_var(&lookup, ENV_EPOCH)? {
            builder = builder.epoch(epoch)?;
        }
        Ok(builder.build())
    }

    #[inline(always)]
    pub const fn datacenter_id(&self) -> u8 {
        self.datacenter_id
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u8 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn initial_sequence(&self) -> u16 {
        self.initial_sequence
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn park_interval(&self) -> Duration {
        self.park_interval
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
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
}

fn parse_var<F>(lookup: &F, key: &'static str) -> Result<Option<i64>>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| SnowflakeError::InvalidEnvironment { key, value: raw })
}
