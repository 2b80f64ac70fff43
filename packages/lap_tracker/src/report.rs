//! Rendered trace reports.

use std::fmt::{self, Write};

use crate::delta::{self, DeltaRecord};
use crate::{Result, Trace};

/// Lap lines in the text format carry a single fixed indent under their
/// section header.
const LAP_INDENT: &str = "    ";

/// Section header label of the tabular format.
const CSV_SECTION_LABEL: &str = "Sección";

/// Default logical name used for artifact naming when the caller does not
/// provide one.
const DEFAULT_LOGICAL_NAME: &str = "trace";

/// Output format of a rendered report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReportFormat {
    /// Indented plain text, one block per section.
    Text,

    /// Semicolon-delimited rows, one row per line.
    Csv,
}

impl ReportFormat {
    /// File extension used when a report of this format is persisted.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }
}

/// A fully rendered report.
///
/// Obtained from [`Trace::to_text_report`] or [`Trace::to_csv_report`]. The
/// body is final at creation; rendering the same unchanged trace again yields
/// a byte-identical body. Persist it through a
/// [`DirectorySink`](crate::DirectorySink) or consume it via [`Self::body`].
///
/// # Examples
///
/// ```
/// use lap_tracker::Trace;
///
/// # fn main() -> lap_tracker::Result<()> {
/// let mut trace = Trace::new();
/// trace.start("checkout")?;
/// trace.lap("cart_loaded")?;
/// trace.stop("checkout")?;
///
/// let report = trace.to_text_report()?;
/// assert!(report.body().starts_with("Section: checkout"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    body: String,
    format: ReportFormat,
    logical_name: String,
}

impl Report {
    pub(crate) fn new(body: String, format: ReportFormat) -> Self {
        Self {
            body,
            format,
            logical_name: DEFAULT_LOGICAL_NAME.to_string(),
        }
    }

    /// Replaces the default logical name (`trace`) used when the report is
    /// persisted as an artifact.
    #[must_use]
    pub fn with_logical_name(mut self, logical_name: impl Into<String>) -> Self {
        self.logical_name = logical_name.into();
        self
    }

    /// The rendered report body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The format this report was rendered in.
    #[must_use]
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Logical name used for artifact naming.
    #[must_use]
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Prints the report body to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// Renders the indented plain-text report over all sections in insertion
/// order.
pub(crate) fn render_text(trace: &Trace) -> Result<(String, Vec<DeltaRecord>)> {
    let mut output = String::new();
    let mut records = Vec::new();

    for section in trace.sections() {
        let (timing, section_records) = delta::section_timing(section)?;
        records.extend(section_records);

        writeln!(output, "Section: {}", section.name())
            .expect("writing to a String never fails");

        for row in &timing.rows {
            writeln!(
                output,
                "{LAP_INDENT}[{}] => {}",
                row.lap_name,
                delta::format_seconds(row.delta_micros)
            )
            .expect("writing to a String never fails");
        }

        writeln!(
            output,
            "Total: {} => {}",
            section.name(),
            delta::format_seconds(timing.total_micros)
        )
        .expect("writing to a String never fails");
    }

    Ok((output, records))
}

/// Renders the semicolon-delimited tabular report over all sections in
/// insertion order.
///
/// Percentages in every section are relative to the total of the first
/// rendered section.
pub(crate) fn render_csv(trace: &Trace) -> Result<(String, Vec<DeltaRecord>)> {
    let mut output = String::new();
    let mut records = Vec::new();
    let mut percent_base_micros: Option<u64> = None;

    for section in trace.sections() {
        let (timing, section_records) = delta::section_timing(section)?;
        records.extend(section_records);

        let base_micros = *percent_base_micros.get_or_insert(timing.total_micros);

        writeln!(output, "{CSV_SECTION_LABEL}: {};;", section.name())
            .expect("writing to a String never fails");

        for row in &timing.rows {
            writeln!(
                output,
                "{};{};{}",
                row.lap_name,
                delta::format_seconds(row.delta_micros),
                delta::format_percent(row.delta_micros, base_micros)
            )
            .expect("writing to a String never fails");
        }

        writeln!(
            output,
            "Total: {};{};",
            section.name(),
            delta::format_seconds(timing.total_micros)
        )
        .expect("writing to a String never fails");
    }

    Ok((output, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::pal::{FakePlatform, PlatformFacade};

    fn create_test_trace() -> (Trace, FakePlatform) {
        let platform = FakePlatform::new();
        let trace = Trace::with_platform(PlatformFacade::fake(platform.clone()));
        (trace, platform)
    }

    #[test]
    fn text_report_matches_reference_layout() {
        let (mut trace, clock) = create_test_trace();

        trace.start("work").unwrap();
        clock.set_now_micros(2_000_000);
        trace.lap("mid").unwrap();
        clock.set_now_micros(5_000_000);
        trace.stop("work").unwrap();

        let report = trace.to_text_report().unwrap();
        assert_eq!(
            report.body(),
            "Section: work\n    [mid] => 2.000000\n    [end] => 3.000000\nTotal: work => 5.000000\n"
        );
        assert_eq!(report.format(), ReportFormat::Text);
    }

    #[test]
    fn csv_report_matches_reference_layout() {
        let (mut trace, clock) = create_test_trace();

        trace.start("work").unwrap();
        clock.set_now_micros(2_000_000);
        trace.lap("mid").unwrap();
        clock.set_now_micros(5_000_000);
        trace.stop("work").unwrap();

        let report = trace.to_csv_report().unwrap();
        assert_eq!(
            report.body(),
            "Sección: work;;\nmid;2.000000;40%\nend;3.000000;60%\nTotal: work;5.000000;\n"
        );
        assert_eq!(report.format(), ReportFormat::Csv);
    }

    #[test]
    fn csv_percentages_use_first_section_total_throughout() {
        let (mut trace, clock) = create_test_trace();

        // First section: total 4 seconds.
        trace.start("first").unwrap();
        clock.set_now_micros(4_000_000);
        trace.stop("first").unwrap();

        // Second section: total 2 seconds, reported against the 4s base.
        trace.start("second").unwrap();
        clock.set_now_micros(6_000_000);
        trace.stop("second").unwrap();

        let report = trace.to_csv_report().unwrap();
        assert!(report.body().contains("end;4.000000;100%"));
        assert!(report.body().contains("end;2.000000;50%"));
    }

    #[test]
    fn sections_render_in_insertion_order() {
        let (mut trace, clock) = create_test_trace();

        trace.start("alpha").unwrap();
        clock.advance_micros(1_000);
        trace.stop("alpha").unwrap();

        trace.start("beta").unwrap();
        clock.advance_micros(1_000);
        trace.stop("beta").unwrap();

        let report = trace.to_text_report().unwrap();
        let alpha_at = report.body().find("Section: alpha").unwrap();
        let beta_at = report.body().find("Section: beta").unwrap();
        assert!(alpha_at < beta_at);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let (mut trace, clock) = create_test_trace();

        trace.start("work").unwrap();
        clock.advance_micros(1_234);
        trace.lap("step").unwrap();
        clock.advance_micros(5_678);
        trace.stop("work").unwrap();

        let first_text = trace.to_text_report().unwrap();
        let second_text = trace.to_text_report().unwrap();
        assert_eq!(first_text.body(), second_text.body());

        let first_csv = trace.to_csv_report().unwrap();
        let second_csv = trace.to_csv_report().unwrap();
        assert_eq!(first_csv.body(), second_csv.body());
    }

    #[test]
    fn unstopped_section_fails_to_render() {
        let (mut trace, _clock) = create_test_trace();

        trace.start("open").unwrap();

        let result = trace.to_text_report();
        assert!(matches!(
            result,
            Err(Error::MissingEndLap { section }) if section == "open"
        ));
    }

    #[test]
    fn logical_name_defaults_and_can_be_replaced() {
        let (mut trace, clock) = create_test_trace();
        trace.start("work").unwrap();
        clock.advance_micros(1);
        trace.stop("work").unwrap();

        let report = trace.to_text_report().unwrap();
        assert_eq!(report.logical_name(), "trace");

        let renamed = report.with_logical_name("startup");
        assert_eq!(renamed.logical_name(), "startup");
    }

    #[test]
    fn extension_follows_format() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
    }

    static_assertions::assert_impl_all!(Report: Send, Sync);
}
