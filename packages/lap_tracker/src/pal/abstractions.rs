//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides the current wall-clock time.
///
/// This trait abstracts the underlying clock source, allowing for both a real
/// implementation (using the system clock) and a fake implementation (for
/// testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current wall-clock time as microseconds since the Unix epoch.
    fn wall_clock_micros(&self) -> u64;
}
