use thiserror::Error;

/// Errors that can occur while recording or rendering a trace.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An identifier passed to `start` or `lap` was already registered
    /// earlier in this trace's lifetime.
    ///
    /// Identifiers are never released; pick distinct names per call-site and
    /// use an iterator key for laps recorded in loops.
    #[error("identifier '{identifier}' has already been used in this trace")]
    DuplicateIdentifier {
        /// The section name or composite lap key that was rejected.
        identifier: String,
    },

    /// A lap was recorded while no section was open.
    #[error("cannot record lap '{lap}': no section is currently open")]
    NoCurrentSection {
        /// The lap name that could not be recorded.
        lap: String,
    },

    /// `stop` named a section that was never started.
    #[error("cannot stop section '{section}': it was never started")]
    UnknownSection {
        /// The section name that was not found in the trace.
        section: String,
    },

    /// A renderer encountered a section whose laps do not include `"end"`.
    ///
    /// Every section must be stopped before the trace is rendered.
    #[error("section '{section}' has no end lap; stop it before rendering")]
    MissingEndLap {
        /// The section that was still open at render time.
        section: String,
    },

    /// Writing a report artifact failed.
    #[error("failed to write report artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for trace operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
