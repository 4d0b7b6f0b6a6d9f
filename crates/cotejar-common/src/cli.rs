//! Console styling for CLI output.

/// ANSI styling helpers. Styled text goes around, never inside, the
/// report body — the report itself stays plain text.
pub mod styles {
    const RESET: &str = "\x1b[0m";

    /// Bold cyan section header.
    pub fn header(text: &str) -> String {
        format!("\x1b[1;36m{text}{RESET}")
    }

    /// Bold red error line.
    pub fn error(text: &str) -> String {
        format!("\x1b[1;31m{text}{RESET}")
    }

    /// Bold green completion line.
    pub fn success(text: &str) -> String {
        format!("\x1b[1;32m{text}{RESET}")
    }

    /// Dim informational line.
    pub fn info(text: &str) -> String {
        format!("\x1b[2m{text}{RESET}")
    }
}
