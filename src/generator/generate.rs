//! ID generation logic

use std::cmp::Ordering;

use tracing::{trace, warn};

use super::SnowflakeGenerator;
use crate::clock::Clock;
use crate::config::MAX_SEQUENCE;
use crate::error::{Result, SnowflakeError};

impl<C: Clock> SnowflakeGenerator<C> {
    /// Generate a new Snowflake ID.
    ///
    /// IDs from one generator are strictly increasing. Fails with
    /// [`SnowflakeError::ClockMovedBackwards`] if the clock reads earlier than
    /// the last issued timestamp; no ID is consumed in that case.
    pub fn generate(&self) -> Result<u64> {
        let mut state = self.state.lock();
        let now = self.now_ms();

        let (timestamp, sequence) = match state.last_timestamp {
            None => (now, state.sequence),
            Some(last) => match now.cmp(&last) {
                Ordering::Less => {
                    let delta = last - now;
                    warn!(delta, last, now, "clock moved backwards");
                    return Err(SnowflakeError::ClockMovedBackwards { delta });
                }
                Ordering::Greater => (now, 0),
                Ordering::Equal => {
                    let sequence = (state.sequence + 1) & MAX_SEQUENCE;
                    if sequence == 0 {
                        trace!(timestamp = last, "sequence exhausted, waiting for next millisecond");
                        (self.wait_next_millis(last), 0)
                    } else {
                        (now, sequence)
                    }
                }
            },
        };

        let id = self.assemble_id(timestamp, sequence)?;
        state.last_timestamp = Some(timestamp);
        state.sequence = sequence;
        Ok(id)
    }

    /// Generate a new Snowflake ID rendered as a decimal string
    pub fn generate_as_string(&self) -> Result<String> {
        self.generate().map(|id| id.to_string())
    }
}
