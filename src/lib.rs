//! # snowflake-id
//!
//! A thread-safe Snowflake ID generator.
//!
//! Each ID is a positive 64-bit integer laid out as
//!
//! ```text
//! | 1 sign | 41 timestamp (ms since epoch) | 5 datacenter | 5 worker | 12 sequence |
//! ```
//!
//! IDs from one generator are strictly increasing, and generators with distinct
//! `(datacenter_id, worker_id)` pairs never collide. A clock that moves
//! backwards is reported as an error rather than papered over.
//!
//! ```
//! use snowflake_id::SnowflakeGenerator;
//!
//! let generator = SnowflakeGenerator::new(1, 7).unwrap();
//! let id = generator.generate().unwrap();
//! let parts = generator.parse(id);
//! assert_eq!((parts.datacenter_id, parts.worker_id), (1, 7));
//! ```

#![forbid(unsafe_code)]

mod clock;
mod config;
mod error;
mod extractor;
mod generator;
pub mod global;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder};
pub use config::{
    DATACENTER_ID_BITS, DATACENTER_ID_SHIFT, DEFAULT_EPOCH, MAX_DATACENTER_ID, MAX_EPOCH, MAX_SEQUENCE,
    MAX_TIMESTAMP, MAX_WORKER_ID, SEQUENCE_BITS, TIMESTAMP_BITS, TIMESTAMP_SHIFT, WORKER_ID_BITS,
    WORKER_ID_SHIFT,
};
pub use error::{Result, SnowflakeError};
pub use extractor::{SnowflakeExtractor, SnowflakeParts};
pub use generator::SnowflakeGenerator;
pub use global::{
    generate_snowflake_id, generate_snowflake_id_str, global_generator,
    install_global_generator, parse_snowflake_id, reset_global_generator,
};
