//! Container comparison benchmark harness.
//!
//! This crate measures insertion time, lookup time, full-traversal time,
//! and memory footprint for four in-memory key/value container kinds
//! across repeated randomized trials, then reports per-variant averages
//! and a performance coefficient against the best observed value for
//! each metric.

pub mod aggregate;
pub mod container;
pub mod heap;
pub mod report;
pub mod runner;

pub use aggregate::{Aggregate, Fixed, TrialResult};
pub use container::{Container, ContainerKind, SortedPairs};
pub use report::Summary;
pub use runner::{BenchConfig, Harness, RunOutcome, KEYS_PER_TRIAL, TRIALS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_run_end_to_end() {
        let mut harness = Harness::new(BenchConfig::new(8, 32).with_quiet().with_seed(1));
        let outcome = harness.run();
        let summary = Summary::from_outcome(&outcome).unwrap();

        assert_eq!(outcome.total_trials(), 8);
        match summary.render() {
            Ok(report) => assert!(report.contains("--------- Results for")),
            // A coarse clock can collapse the single-lookup timing to a
            // zero average, which is the defined arithmetic-fault path.
            Err(e) => assert_eq!(e.code(), "E002"),
        }
    }

    #[test]
    fn test_shipped_constants_keep_every_lookup_a_hit() {
        // The counter starts at 27 and advances once per trial; it must
        // stay below the key count for the planted sentinel to be
        // reachable in every trial of a full run.
        assert!(27 + TRIALS < KEYS_PER_TRIAL);
    }
}
