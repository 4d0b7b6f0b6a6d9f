//! Per-trial progress announcements.

/// Announces trial progress on stdout, one line per trial.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    /// Announce the trial about to run. `trial` is zero-based; the line
    /// numbers trials from one.
    pub fn announce(&self, trial: usize, variant: &str) {
        println!("{}", self.line(trial, variant));
    }

    fn line(&self, trial: usize, variant: &str) -> String {
        format!(
            "Currently executing test {} of {} for {} object",
            trial + 1,
            self.total,
            variant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_one_based() {
        let progress = Progress::new(8000);
        assert_eq!(
            progress.line(0, "HashMap"),
            "Currently executing test 1 of 8000 for HashMap object"
        );
    }

    #[test]
    fn test_line_names_the_variant() {
        let progress = Progress::new(3);
        assert_eq!(
            progress.line(2, "BTreeMap"),
            "Currently executing test 3 of 3 for BTreeMap object"
        );
    }
}
