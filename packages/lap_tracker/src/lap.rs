/// A named timestamp checkpoint within a [`Section`](crate::Section).
///
/// Laps are recorded in timing order; the elapsed time reported for a lap is
/// the delta to the lap immediately before it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lap {
    name: String,
    timestamp_micros: u64,
}

impl Lap {
    pub(crate) fn new(name: impl Into<String>, timestamp_micros: u64) -> Self {
        Self {
            name: name.into(),
            timestamp_micros,
        }
    }

    /// The lap name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the lap was recorded, in microseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_micros(&self) -> u64 {
        self.timestamp_micros
    }

    /// Updates the timestamp in place, keeping the lap's position in its
    /// section's timing order.
    pub(crate) fn set_timestamp_micros(&mut self, timestamp_micros: u64) {
        self.timestamp_micros = timestamp_micros;
    }
}
