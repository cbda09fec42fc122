//! UTC timestamp stamped on chat messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moment a message was created. Serializes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic_enough_for_transcripts() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(first <= second);
    }

    #[test]
    fn serializes_as_rfc3339_utc() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T09:05:00Z\"").unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2024-01-15T09:05:00Z\"");
    }
}
