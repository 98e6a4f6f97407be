//! Time management utilities

use std::time::{Duration, Instant};

/// Block the calling thread for at least `duration`
///
/// There is no early wake: the call returns only after the full duration.
/// Returns the time actually spent blocked.
pub fn hold(duration: Duration) -> Duration {
    let started = Instant::now();
    loop {
        let elapsed = started.elapsed();
        match duration.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => std::thread::sleep(remaining),
            _ => return elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_waits_full_duration() {
        let start = Instant::now();
        let held = hold(Duration::from_millis(25));
        assert!(held >= Duration::from_millis(25));
        assert!(start.elapsed() >= held);
    }

    #[test]
    fn test_hold_zero_returns_immediately() {
        let held = hold(Duration::ZERO);
        assert!(held < Duration::from_secs(1));
    }
}
