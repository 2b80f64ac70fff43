//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the wall-clock value instead
/// of relying on the system clock. Multiple clones of the same `FakePlatform`
/// share the same underlying time state, allowing tests to advance time after
/// the trace under test has been constructed.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now_micros: Arc<Mutex<u64>>,
}

impl FakePlatform {
    /// Creates a new fake platform with the clock at zero.
    pub(crate) fn new() -> Self {
        Self {
            now_micros: Arc::new(Mutex::new(0)),
        }
    }

    /// Sets the current wall-clock value in microseconds.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during recording.
    pub(crate) fn set_now_micros(&self, micros: u64) {
        *self
            .now_micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = micros;
    }

    /// Advances the current wall-clock value by the given microseconds.
    pub(crate) fn advance_micros(&self, micros: u64) {
        let mut now = self
            .now_micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *now = now
            .checked_add(micros)
            .expect("fake clock advanced past u64::MAX");
    }
}

impl Platform for FakePlatform {
    fn wall_clock_micros(&self) -> u64 {
        *self
            .now_micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_zero() {
        let platform = FakePlatform::new();
        assert_eq!(platform.wall_clock_micros(), 0);
    }

    #[test]
    fn set_overrides_current_time() {
        let platform = FakePlatform::new();
        platform.set_now_micros(2_000_000);

        assert_eq!(platform.wall_clock_micros(), 2_000_000);
    }

    #[test]
    fn advance_is_relative() {
        let platform = FakePlatform::new();
        platform.set_now_micros(1_000_000);
        platform.advance_micros(500_000);

        assert_eq!(platform.wall_clock_micros(), 1_500_000);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_now_micros(42);
        assert_eq!(platform2.wall_clock_micros(), 42);

        platform2.advance_micros(8);
        assert_eq!(platform1.wall_clock_micros(), 50);
    }
}
