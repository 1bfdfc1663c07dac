//! Pipeline orchestration error types.

/// Specific error conditions for pipeline orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Reading an input document from disk failed
    #[display("Failed to read input file {}: {}", path, message)]
    InputRead {
        /// Path that failed
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Writing the analysis output failed
    #[display("Failed to write output file {}: {}", path, message)]
    OutputWrite {
        /// Path that failed
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Pipeline error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at {}:{}", kind, file, line)]
pub struct PipelineError {
    /// The specific error kind
    pub kind: PipelineErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
