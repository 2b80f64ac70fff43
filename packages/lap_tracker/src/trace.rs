//! The in-memory trace store.

use std::collections::{HashMap, HashSet};

use crate::delta::DeltaRecord;
use crate::pal::{Platform, PlatformFacade};
use crate::report::{self, Report, ReportFormat};
use crate::section::{END_LAP, START_LAP, Section};
use crate::{Error, Result};

/// Records nested timed sections and the laps inside them.
///
/// A `Trace` is an explicitly constructed value with an explicit lifecycle:
/// create it when instrumentation begins, pass it to whatever needs to record
/// into it, render and discard it after the final report. Sections are kept
/// in insertion order, which is also the report order; a section is never
/// removed for the lifetime of the trace.
///
/// Every identifier accepted by [`Self::start`] or [`Self::lap`] is held in a
/// global registry for the lifetime of the trace and may never repeat, so
/// every timing checkpoint across the whole trace has a unique label.
///
/// # Examples
///
/// ```
/// use lap_tracker::Trace;
///
/// # fn main() -> lap_tracker::Result<()> {
/// let mut trace = Trace::new();
///
/// trace.start("request")?;
/// trace.lap("parsed")?;
/// trace.stop("request")?;
///
/// let report = trace.to_text_report()?;
/// print!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Trace {
    sections: Vec<Section>,
    index_by_name: HashMap<String, usize>,
    current: Option<String>,
    registry: HashSet<String>,
    debug_log: Vec<DeltaRecord>,
    platform: PlatformFacade,
}

impl Trace {
    /// Creates a trace backed by the system wall clock.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default trace' that is not actually a default trace"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            index_by_name: HashMap::new(),
            current: None,
            registry: HashSet::new(),
            debug_log: Vec::new(),
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a trace with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that doesn't rely on the system wall clock.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            sections: Vec::new(),
            index_by_name: HashMap::new(),
            current: None,
            registry: HashSet::new(),
            debug_log: Vec::new(),
            platform,
        }
    }

    /// Opens a new section and makes it current.
    ///
    /// If a section is already open, the new one becomes its child and the
    /// parent is restored as current when the new section is stopped. A
    /// `"start"` lap stamped with the current time is recorded immediately.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateIdentifier`] when `name` was already used as a
    /// section name or lap key in this trace; the trace is left unmodified.
    pub fn start(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.register(&name)?;

        let mut section = Section::new(name.clone(), self.current.clone());
        section.record_lap(START_LAP, self.platform.wall_clock_micros());

        self.index_by_name.insert(name.clone(), self.sections.len());
        self.sections.push(section);

        tracing::debug!(section = %name, "section started");
        self.current = Some(name);
        Ok(())
    }

    /// Records a lap in the currently open section.
    ///
    /// Equivalent to [`Self::lap_keyed`] with an empty iterator key.
    ///
    /// # Errors
    ///
    /// [`Error::NoCurrentSection`] when no section is open;
    /// [`Error::DuplicateIdentifier`] when `name` was already used. The trace
    /// is left unmodified in both cases.
    pub fn lap(&mut self, name: impl Into<String>) -> Result<()> {
        self.lap_keyed(name, "")
    }

    /// Records a lap in the currently open section, registering the composite
    /// `name + iterator_key` for uniqueness.
    ///
    /// The iterator key lets loop-based instrumentation produce a unique
    /// registry key per call while the stored lap keeps the plain,
    /// human-readable `name`. Because storage is keyed by the plain name, a
    /// repeated name within one section updates that lap's timestamp in place
    /// rather than adding a second lap.
    ///
    /// # Errors
    ///
    /// [`Error::NoCurrentSection`] when no section is open;
    /// [`Error::DuplicateIdentifier`] when the composite key was already
    /// used. The trace is left unmodified in both cases.
    pub fn lap_keyed(&mut self, name: impl Into<String>, iterator_key: &str) -> Result<()> {
        let name = name.into();

        if self.current.is_none() {
            return Err(Error::NoCurrentSection { lap: name });
        }

        let composite = format!("{name}{iterator_key}");
        self.register(&composite)?;

        let now = self.platform.wall_clock_micros();
        self.current_section_mut()
            .expect("current section is always present in the store")
            .record_lap(&name, now);
        Ok(())
    }

    /// Stops the named section, recording its `"end"` lap.
    ///
    /// The `"end"` lap is written directly into the named section regardless
    /// of which section is current. The stopped section's parent (or no
    /// section at all, for a root section) becomes current. The section
    /// itself stays in the trace and appears in reports.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSection`] when `name` was never started.
    pub fn stop(&mut self, name: &str) -> Result<()> {
        let Some(&index) = self.index_by_name.get(name) else {
            return Err(Error::UnknownSection {
                section: name.to_string(),
            });
        };

        let now = self.platform.wall_clock_micros();
        let section = self
            .sections
            .get_mut(index)
            .expect("index map entries always point at a stored section");
        section.record_lap(END_LAP, now);

        self.current = section.parent().map(ToString::to_string);
        tracing::debug!(section = name, "section stopped");
        Ok(())
    }

    /// The recorded sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Name of the innermost open section, if any.
    #[must_use]
    pub fn current_section(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Raw microsecond delta records accumulated by report rendering, in
    /// computation order, for diagnostics.
    #[must_use]
    pub fn debug_log(&self) -> &[DeltaRecord] {
        &self.debug_log
    }

    /// Whether any sections have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Renders the indented plain-text report over all recorded sections.
    ///
    /// Rendering appends the computed deltas to the debug log but leaves the
    /// recorded sections untouched; rendering an unchanged trace again yields
    /// a byte-identical report.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEndLap`] when any section was not stopped.
    pub fn to_text_report(&mut self) -> Result<Report> {
        let (body, records) = report::render_text(self)?;
        self.debug_log.extend(records);
        Ok(Report::new(body, ReportFormat::Text))
    }

    /// Renders the semicolon-delimited tabular report over all recorded
    /// sections.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEndLap`] when any section was not stopped.
    pub fn to_csv_report(&mut self) -> Result<Report> {
        let (body, records) = report::render_csv(self)?;
        self.debug_log.extend(records);
        Ok(Report::new(body, ReportFormat::Csv))
    }

    fn current_section_mut(&mut self) -> Option<&mut Section> {
        let index = *self.index_by_name.get(self.current.as_deref()?)?;
        self.sections.get_mut(index)
    }

    fn register(&mut self, identifier: &str) -> Result<()> {
        if !self.registry.insert(identifier.to_string()) {
            tracing::warn!(identifier, "duplicate identifier rejected");
            return Err(Error::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }
}
