//! Report persistence.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{Report, Result};

/// Timestamp layout used in artifact names, e.g. `2024-05-01_13:45:09`.
const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Persists finished reports under a fixed base directory.
///
/// Each write lands in `<base>/<logicalName>_<timestamp>.<extension>`, where
/// the timestamp is the local wall clock at write time and the extension
/// follows the report's format. Content is appended if the artifact already
/// exists. The base directory is fixed at construction and must exist; the
/// sink does not manage directories, permissions or rotation.
///
/// # Examples
///
/// ```
/// use lap_tracker::{DirectorySink, Trace};
///
/// # fn main() -> lap_tracker::Result<()> {
/// let mut trace = Trace::new();
/// trace.start("boot")?;
/// trace.stop("boot")?;
///
/// let report = trace.to_text_report()?;
/// let sink = DirectorySink::new(std::env::temp_dir());
/// let path = sink.write(&report)?;
/// assert!(path.extension().is_some_and(|ext| ext == "txt"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DirectorySink {
    base_dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory artifacts are written into.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes the report under a generated artifact name and returns the
    /// artifact path.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) when the artifact cannot be opened or
    /// written.
    pub fn write(&self, report: &Report) -> Result<PathBuf> {
        let artifact_name = format!(
            "{}_{}.{}",
            report.logical_name(),
            Local::now().format(ARTIFACT_TIMESTAMP_FORMAT),
            report.format().extension()
        );
        let path = self.base_dir.join(artifact_name);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(report.body().as_bytes())?;

        tracing::debug!(
            path = %path.display(),
            bytes = report.body().len(),
            "report artifact written"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportFormat;

    fn test_report(format: ReportFormat) -> Report {
        Report::new("Section: test\nTotal: test => 0.000001\n".to_string(), format)
    }

    #[test]
    fn artifact_name_combines_logical_name_timestamp_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        let path = sink.write(&test_report(ReportFormat::Text)).unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("trace_"));
        assert!(file_name.ends_with(".txt"));
    }

    #[test]
    fn logical_name_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        let report = test_report(ReportFormat::Csv).with_logical_name("startup");
        let path = sink.write(&report).unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("startup_"));
        assert!(file_name.ends_with(".csv"));
    }

    #[test]
    fn written_artifact_contains_the_body() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        let report = test_report(ReportFormat::Text);
        let path = sink.write(&report).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, report.body());
    }

    #[test]
    fn missing_base_directory_surfaces_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("does_not_exist"));

        let result = sink.write(&test_report(ReportFormat::Text));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    static_assertions::assert_impl_all!(DirectorySink: Send, Sync);
}
