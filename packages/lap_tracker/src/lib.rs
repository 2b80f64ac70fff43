//! Hierarchical wall-clock interval tracking utilities for instrumentation
//! and performance analysis.
//!
//! This package records how long the named phases of a running process take,
//! enabling analysis of where elapsed time goes inside an instrumented
//! process.
//!
//! The core functionality includes:
//! - [`Trace`] - Records named sections and the laps inside them
//! - [`Section`] - A named timed interval that may nest inside another section
//! - [`Lap`] - A named timestamp checkpoint within a section
//! - [`Report`] - A rendered report (indented text or semicolon-delimited CSV)
//! - [`DirectorySink`] - Persists reports as timestamped artifacts
//!
//! # Simple usage
//!
//! Mark a section as it begins and ends, recording laps at the checkpoints
//! you care about:
//!
//! ```
//! use lap_tracker::Trace;
//!
//! # fn main() -> lap_tracker::Result<()> {
//! let mut trace = Trace::new();
//!
//! trace.start("request")?;
//! trace.lap("headers_parsed")?;
//! trace.lap("body_read")?;
//! trace.stop("request")?;
//!
//! // Render elapsed time between consecutive laps plus the section total.
//! let report = trace.to_text_report()?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Nesting
//!
//! Starting a section while another is open makes the new one a child of the
//! previously current one; stopping it restores the parent as current:
//!
//! ```
//! use lap_tracker::Trace;
//!
//! # fn main() -> lap_tracker::Result<()> {
//! let mut trace = Trace::new();
//!
//! trace.start("request")?;
//!
//! trace.start("database")?;
//! trace.lap("rows_fetched")?;
//! trace.stop("database")?;
//!
//! // "request" is current again; laps recorded now land in it.
//! trace.lap("response_built")?;
//! trace.stop("request")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Identifier uniqueness
//!
//! Every identifier passed to [`Trace::start`] or [`Trace::lap`] must be
//! unique for the lifetime of the trace; a repeat is rejected with
//! [`Error::DuplicateIdentifier`] and leaves the trace unmodified. For laps
//! recorded in a loop, [`Trace::lap_keyed`] disambiguates the registry key
//! per call while keeping the stored lap name stable:
//!
//! ```
//! use lap_tracker::Trace;
//!
//! # fn main() -> lap_tracker::Result<()> {
//! let mut trace = Trace::new();
//! trace.start("import")?;
//!
//! for i in 0..3 {
//!     // Registry keys "chunk_processed0", "chunk_processed1", ...
//!     trace.lap_keyed("chunk_processed", &i.to_string())?;
//! }
//!
//! trace.stop("import")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Persisting reports
//!
//! A [`DirectorySink`] writes a finished report under a generated,
//! timestamped artifact name inside a fixed base directory:
//!
//! ```
//! use lap_tracker::{DirectorySink, Trace};
//!
//! # fn main() -> lap_tracker::Result<()> {
//! let mut trace = Trace::new();
//! trace.start("startup")?;
//! trace.stop("startup")?;
//!
//! let report = trace.to_csv_report()?.with_logical_name("startup_timings");
//!
//! let sink = DirectorySink::new(std::env::temp_dir());
//! let path = sink.write(&report)?;
//! println!("report written to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! Recording is single-threaded by design: a [`Trace`] is a plain owned value
//! mutated through `&mut self`, with no internal locking. Move it between
//! threads if you must, but concurrent instrumentation calls require external
//! synchronization or one trace per thread.

mod delta;
mod error;
mod lap;
mod pal;
mod report;
mod section;
mod sink;
mod trace;

pub use delta::DeltaRecord;
pub use error::{Error, Result};
pub use lap::Lap;
pub use report::{Report, ReportFormat};
pub use section::Section;
pub use sink::DirectorySink;
pub use trace::Trace;
