use crate::Lap;

/// Name of the synthetic lap recorded when a section starts. It is the
/// reference point for the first delta, never a reported interval itself.
pub(crate) const START_LAP: &str = "start";

/// Name of the synthetic lap recorded when a section stops. Renderers treat
/// it as the terminator of the section's lap sequence.
pub(crate) const END_LAP: &str = "end";

/// A named timed interval that may nest inside another section.
///
/// A section is created by [`Trace::start`](crate::Trace::start), mutated by
/// [`Trace::lap`](crate::Trace::lap) and [`Trace::stop`](crate::Trace::stop),
/// and persists in the trace until the whole trace is discarded.
#[derive(Clone, Debug)]
pub struct Section {
    name: String,
    parent: Option<String>,
    laps: Vec<Lap>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            laps: Vec::new(),
        }
    }

    /// The section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the section that was current when this one was started, if
    /// any. Stopping this section makes the parent current again.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The recorded laps in timing order, beginning with `"start"`.
    #[must_use]
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    /// Whether an `"end"` lap has been recorded for this section.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.laps.iter().any(|lap| lap.name() == END_LAP)
    }

    /// Records a lap keyed by name.
    ///
    /// A lap whose name is already present in this section has its timestamp
    /// updated in place, keeping the original position in the timing order.
    pub(crate) fn record_lap(&mut self, name: &str, timestamp_micros: u64) {
        if let Some(existing) = self.laps.iter_mut().find(|lap| lap.name() == name) {
            existing.set_timestamp_micros(timestamp_micros);
        } else {
            self.laps.push(Lap::new(name, timestamp_micros));
        }
    }
}
