//! High-resolution wall-clock timestamps

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as nanoseconds since the Unix epoch.
///
/// This is a realtime clock, not a monotonic one: the value can jump
/// backwards if the system clock is adjusted. A clock set before the
/// epoch yields `0`.
pub fn nanos_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_now_is_nonzero() {
        assert!(nanos_now() > 0);
    }

    #[test]
    fn test_nanos_now_advances() {
        let before = nanos_now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let after = nanos_now();

        assert!(after > before);
    }
}
