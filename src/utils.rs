//! Small shared helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time in milliseconds since the Unix epoch.
///
/// Used for the informational `timestamp` field on [`crate::Trade`]. Falls
/// back to `0` if the system clock is set before the epoch, which can only
/// happen on a misconfigured machine and should never affect matching
/// correctness since timestamps here are informational, not an ordering key.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_a_plausible_timestamp() {
        // Any time after 2020-01-01T00:00:00Z in milliseconds.
        assert!(current_time_millis() > 1_577_836_800_000);
    }
}
