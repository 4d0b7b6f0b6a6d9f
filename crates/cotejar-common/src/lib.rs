//! Shared infrastructure for the cotejar benchmark tool.
//!
//! This crate provides the utilities the harness crate leans on:
//! - CLI styling for console output
//! - Error handling with actionable diagnostics
//! - Progress announcements for long runs

pub mod cli;
pub mod error;
pub mod progress;

pub use error::{CotejarError, Result};
pub use progress::Progress;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_has_actionable_message() {
        let err = CotejarError::EmptyAccumulator { variant: "BTreeMap".into() };
        let msg = err.to_string();
        assert!(msg.contains("BTreeMap"));
        assert!(msg.contains("No trials"));
    }

    #[test]
    fn test_error_line_carries_a_code() {
        let err = CotejarError::Internal { message: "unexpected state".into() };
        assert_eq!(err.code(), "E999");
    }
}
