use std::fmt;

use chrono::{DateTime, Local, Utc};

use crate::config::{
    DATACENTER_ID_SHIFT, DEFAULT_EPOCH, MAX_DATACENTER_ID, MAX_SEQUENCE, MAX_WORKER_ID,
    TIMESTAMP_SHIFT, WORKER_ID_SHIFT,
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Components recovered from a Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    pub datacenter_id: u8,
    pub worker_id: u8,
    pub sequence: u16,
}

impl SnowflakeParts {
    /// The timestamp as a UTC datetime, if representable
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// The timestamp rendered in local time as `YYYY-MM-DD HH:MM:SS`.
    /// Empty when the timestamp lies outside the range chrono can represent.
    pub fn datetime_string(&self) -> String {
        self.datetime_utc()
            .map(|dt| dt.with_timezone(&Local).format(DATETIME_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for SnowflakeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestamp={}", self.timestamp_ms)?;
        let datetime = self.datetime_string();
        if !datetime.is_empty() {
            write!(f, " ({datetime})")?;
        }
        write!(
            f,
            " datacenter_id={} worker_id={} sequence={}",
            self.datacenter_id, self.worker_id, self.sequence
        )
    }
}

/// Snowflake component extractor. Stateless apart from the epoch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SnowflakeExtractor {
    epoch: u64,
}

impl Default for SnowflakeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

impl SnowflakeExtractor {
    /// Create an extractor for IDs generated against `epoch`
    pub const fn new(epoch: u64) -> Self {
        Self { epoch }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Timestamp component, in milliseconds since the configured epoch
    #[inline(always)]
    pub const fn timestamp(&self, id: u64) -> u64 {
        id >> TIMESTAMP_SHIFT
    }

    /// Timestamp component, in milliseconds since the Unix epoch.
    /// Saturates at `u64::MAX` for an epoch too large to offset the timestamp.
    #[inline(always)]
    pub const fn timestamp_ms(&self, id: u64) -> u64 {
        self.timestamp(id).saturating_add(self.epoch)
    }

    #[inline(always)]
    pub const fn datacenter_id(&self, id: u64) -> u8 {
        ((id >> DATACENTER_ID_SHIFT) & MAX_DATACENTER_ID as u64) as u8
    }

    #[inline(always)]
    pub const fn worker_id(&self, id: u64) -> u8 {
        ((id >> WORKER_ID_SHIFT) & MAX_WORKER_ID as u64) as u8
    }

    #[inline(always)]
    pub const fn sequence(&self, id: u64) -> u16 {
        (id & MAX_SEQUENCE as u64) as u16
    }

    /// Decompose into (timestamp since epoch, datacenter ID, worker ID, sequence)
    #[inline]
    pub const fn decompose(&self, id: u64) -> (u64, u8, u8, u16) {
        (
            self.timestamp(id),
            self.datacenter_id(id),
            self.worker_id(id),
            self.sequence(id),
        )
    }

    /// Decompose into [`SnowflakeParts`] with an absolute timestamp
    #[inline]
    pub const fn parse(&self, id: u64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp_ms: self.timestamp_ms(id),
            datacenter_id: self.datacenter_id(id),
            worker_id: self.worker_id(id),
            sequence: self.sequence(id),
        }
    }
}
