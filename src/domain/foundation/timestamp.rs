//! Wall-clock instant a session began.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC instant, rendered as RFC 3339 with millisecond precision in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Whole milliseconds elapsed from `earlier` to `self`.
    ///
    /// Clock steps that put `earlier` in the future yield zero.
    pub fn millis_since(&self, earlier: &Timestamp) -> u64 {
        let elapsed = self.0.signed_duration_since(earlier.0).num_milliseconds();
        u64::try_from(elapsed).unwrap_or(0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
