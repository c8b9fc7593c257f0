use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = SnowflakeError> = std::result::Result<T, E>;

/// Represents errors that can occur during Snowflake ID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// A construction parameter is outside its allowed range
    #[error("{field} {value} is invalid. Allowed range is 0..={max}")]
    InvalidConfiguration {
        field: &'static str,
        value: i64,
        max: i64,
    },
    /// An environment variable could not be parsed as an integer
    #[error("Environment variable {key} has invalid value {value:?}")]
    InvalidEnvironment { key: &'static str, value: String },
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: u64 },
    /// The clock reading cannot be encoded in the 41-bit timestamp field
    #[error("Timestamp {timestamp} cannot be encoded relative to epoch {epoch}")]
    TimestampOutOfRange { timestamp: u64, epoch: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid = SnowflakeError::InvalidConfiguration {
            field: "datacenter_id",
            value: 32,
            max: 31,
        };
        assert_eq!(
            invalid.to_string(),
            "datacenter_id 32 is invalid. Allowed range is 0..=31"
        );

        let clock_backwards = SnowflakeError::ClockMovedBackwards { delta: 100 };
        assert_eq!(
            clock_backwards.to_string(),
            "Clock moved backwards. Refusing to generate id for 100 milliseconds"
        );

        let env = SnowflakeError::InvalidEnvironment {
            key: "SNOWFLAKE_WORKER_ID",
            value: "abc".into(),
        };
        assert_eq!(
            env.to_string(),
            "Environment variable SNOWFLAKE_WORKER_ID has invalid value \"abc\""
        );
    }

    #[test]
    fn test_error_clone() {
        let original = SnowflakeError::TimestampOutOfRange {
            timestamp: 5,
            epoch: 10,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert!(format!("{:?}", cloned).contains("TimestampOutOfRange"));
    }
}
