//! Real platform implementation backed by the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::pal::abstractions::Platform;

/// Reads the system wall clock.
///
/// The microsecond count is composed as whole seconds since the Unix epoch
/// times 1 000 000 plus the in-second microsecond fraction.
#[derive(Clone, Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn wall_clock_micros(&self) -> u64 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is set before the Unix epoch");

        since_epoch
            .as_secs()
            .checked_mul(1_000_000)
            .and_then(|seconds| seconds.checked_add(u64::from(since_epoch.subsec_micros())))
            .expect("system clock microseconds overflow u64 - this indicates an unrealistic scenario")
    }
}
