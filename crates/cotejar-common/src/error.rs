//! Error types with actionable diagnostics.
//!
//! The harness has a single failure domain: any fault ends the run, so
//! every variant carries enough context for the final error line to be
//! actionable on its own.

use thiserror::Error;

/// Result type alias for cotejar operations.
pub type Result<T> = std::result::Result<T, CotejarError>;

/// Errors that can occur while aggregating or reporting a run.
#[derive(Error, Debug)]
pub enum CotejarError {
    /// A variant was never selected, so its average is undefined.
    #[error("No trials recorded for {variant}\n  → Variant selection is random; rerun, or raise the trial count until every variant is sampled")]
    EmptyAccumulator { variant: String },

    /// A metric averaged to zero and cannot anchor a ratio.
    #[error("Arithmetic fault while {context}\n  → An averaged metric was zero; timings below tick resolution cannot be ranked")]
    Arithmetic { context: String },

    /// Generic error for unexpected conditions.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CotejarError {
    /// Get the error code for the final error line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyAccumulator { .. } => "E001",
            Self::Arithmetic { .. } => "E002",
            Self::Internal { .. } => "E999",
        }
    }
}
