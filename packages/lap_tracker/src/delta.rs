//! Pairwise delta computation over a section's ordered laps.

use std::fmt;

use crate::section::{END_LAP, START_LAP};
use crate::{Error, Result, Section};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// One computed delta in raw microsecond form.
///
/// Rendering a report appends one record per computed delta (including the
/// section total) to the trace's debug log, retrievable via
/// [`Trace::debug_log`](crate::Trace::debug_log) for diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeltaRecord {
    current_micros: u64,
    previous_micros: u64,
    delta_micros: u64,
}

impl DeltaRecord {
    /// Timestamp of the later lap of the pair.
    #[must_use]
    pub fn current_micros(&self) -> u64 {
        self.current_micros
    }

    /// Timestamp of the earlier lap of the pair.
    #[must_use]
    pub fn previous_micros(&self) -> u64 {
        self.previous_micros
    }

    /// Elapsed microseconds between the two laps.
    #[must_use]
    pub fn delta_micros(&self) -> u64 {
        self.delta_micros
    }
}

impl fmt::Display for DeltaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} = {}",
            self.current_micros, self.previous_micros, self.delta_micros
        )
    }
}

/// Per-lap timing of one section: the delta of each lap after `"start"` plus
/// the section total.
#[derive(Debug)]
pub(crate) struct SectionTiming {
    pub(crate) rows: Vec<TimingRow>,
    pub(crate) total_micros: u64,
}

/// One reported interval: the lap that closes it and the elapsed time since
/// the lap before it.
#[derive(Debug)]
pub(crate) struct TimingRow {
    pub(crate) lap_name: String,
    pub(crate) delta_micros: u64,
}

/// Computes inter-lap deltas and the section total in a single pass by index.
///
/// The `"start"` lap is the reference point and produces no row of its own;
/// the `"end"` lap terminates the pass. Every computed delta, total included,
/// also yields a [`DeltaRecord`] for the debug log.
pub(crate) fn section_timing(section: &Section) -> Result<(SectionTiming, Vec<DeltaRecord>)> {
    let laps = section.laps();

    let first = laps.first().filter(|lap| lap.name() == START_LAP);
    let (Some(first), true) = (first, section.is_terminated()) else {
        return Err(Error::MissingEndLap {
            section: section.name().to_string(),
        });
    };

    let mut rows = Vec::new();
    let mut records = Vec::new();
    let mut previous = first.timestamp_micros();
    let mut total_micros = 0;

    for lap in laps.iter().skip(1) {
        let current = lap.timestamp_micros();
        let delta_micros = current.saturating_sub(previous);

        records.push(DeltaRecord {
            current_micros: current,
            previous_micros: previous,
            delta_micros,
        });
        rows.push(TimingRow {
            lap_name: lap.name().to_string(),
            delta_micros,
        });

        if lap.name() == END_LAP {
            total_micros = current.saturating_sub(first.timestamp_micros());
            records.push(DeltaRecord {
                current_micros: current,
                previous_micros: first.timestamp_micros(),
                delta_micros: total_micros,
            });
            break;
        }

        previous = current;
    }

    Ok((SectionTiming { rows, total_micros }, records))
}

/// Formats a microsecond count as seconds with fixed six-decimal precision.
pub(crate) fn format_seconds(micros: u64) -> String {
    #[expect(
        clippy::cast_precision_loss,
        reason = "timestamps within any realistic trace lifetime fit f64 exactly"
    )]
    let seconds = micros as f64 / MICROS_PER_SECOND;
    format!("{seconds:.6}")
}

/// Formats a delta as a percentage of `base_micros`, rounded to two decimals
/// with trailing zeros trimmed: `40%`, `33.33%`.
///
/// A zero base renders `0%` rather than dividing by zero.
pub(crate) fn format_percent(delta_micros: u64, base_micros: u64) -> String {
    if base_micros == 0 {
        return "0%".to_string();
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "deltas within any realistic trace lifetime fit f64 exactly"
    )]
    let percent = (delta_micros as f64) * 100.0 / (base_micros as f64);
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{rounded}%")
}
