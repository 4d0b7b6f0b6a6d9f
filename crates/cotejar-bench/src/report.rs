//! Report rendering: per-variant averages and performance coefficients.

use cotejar_common::Result;

use crate::aggregate::{self, Aggregate, Fixed};
use crate::container::ContainerKind;
use crate::runner::RunOutcome;

/// Aggregated view of a finished run.
#[derive(Debug)]
pub struct Summary {
    /// Per-variant average, `None` when the variant was never drawn.
    pub averages: [Option<Aggregate>; 4],
    /// Trial counts per variant, in `ContainerKind::ALL` order.
    pub counts: [usize; 4],
    /// Per-field minimum over the sampled variants.
    pub minimum: Option<Aggregate>,
}

impl Summary {
    /// Aggregates the outcome. An unsampled variant is carried as `None`
    /// and rendered as a sentinel line rather than failing the run.
    pub fn from_outcome(outcome: &RunOutcome) -> Result<Summary> {
        let mut averages: [Option<Aggregate>; 4] = [None; 4];
        let mut counts = [0usize; 4];

        for kind in ContainerKind::ALL {
            let results = outcome.results_for(kind);
            counts[kind.index()] = results.len();
            if !results.is_empty() {
                averages[kind.index()] = Some(aggregate::average(kind.name(), results)?);
            }
        }

        let minimum = Aggregate::field_min(averages.iter().flatten());
        Ok(Summary { averages, counts, minimum })
    }

    /// Line-oriented report, one block per variant in `ALL` order.
    ///
    /// A coefficient of 1.00 marks the variant that achieved the best
    /// observed value for that metric.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();

        for kind in ContainerKind::ALL {
            let idx = kind.index();
            out.push_str(&format!("--------- Results for {}\n", kind.name()));

            match (&self.averages[idx], &self.minimum) {
                (Some(avg), Some(minimum)) => {
                    let coefficient = aggregate::coefficients(minimum, avg)?;
                    out.push_str(&format!("# Tests {}\n", self.counts[idx]));
                    out.push_str(
                        "Memory Used    Insert Ticks    Search Ticks    ForEach Ticks\n",
                    );
                    out.push_str("Average Values:\n");
                    out.push_str(&metric_row(avg));
                    out.push_str("Performance Coefficient:\n");
                    out.push_str(&metric_row(&coefficient));
                }
                _ => out.push_str("(not sampled in this run)\n"),
            }

            out.push('\n');
        }

        Ok(out)
    }
}

/// One metric row in the reference's column widths.
fn metric_row(aggregate: &Aggregate) -> String {
    format!(
        "{:>11} {:>13} {:>14} {:>14}\n",
        group_thousands(aggregate.mem_bytes),
        group_thousands(aggregate.insert_ticks),
        group_thousands(aggregate.search_ticks),
        group_thousands(aggregate.iter_ticks),
    )
}

/// Thousands separators and two fixed decimals, e.g. `1,234,567.89`.
fn group_thousands(value: Fixed) -> String {
    let hundredths = value.to_hundredths();
    let whole = (hundredths / 100).to_string();
    let frac = hundredths % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TrialResult;
    use crate::runner::{BenchConfig, Harness};

    fn trial(mem: u64, insert: u64, search: u64, iter: u64) -> TrialResult {
        TrialResult { mem_bytes: mem, insert_ticks: insert, search_ticks: search, iter_ticks: iter }
    }

    fn outcome_with(trials: [Vec<TrialResult>; 4]) -> RunOutcome {
        let selections = ContainerKind::ALL
            .iter()
            .flat_map(|kind| std::iter::repeat(*kind).take(trials[kind.index()].len()))
            .collect();
        RunOutcome { accumulators: trials, selections }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(Fixed::from_int(0)), "0.00");
        assert_eq!(group_thousands(Fixed::from_int(999)), "999.00");
        assert_eq!(group_thousands(Fixed::from_int(1_000)), "1,000.00");
        assert_eq!(group_thousands(Fixed::from_int(1_234_567)), "1,234,567.00");
    }

    #[test]
    fn test_render_reports_every_sampled_variant() {
        let outcome = outcome_with([
            vec![trial(1000, 10, 1, 1)],
            vec![trial(2000, 20, 2, 2)],
            vec![trial(3000, 30, 3, 3)],
            vec![trial(4000, 40, 4, 4)],
        ]);
        let summary = Summary::from_outcome(&outcome).unwrap();
        let report = summary.render().unwrap();

        for kind in ContainerKind::ALL {
            assert!(report.contains(&format!("--------- Results for {}", kind.name())));
        }
        assert!(report.contains("# Tests 1"));
        assert!(report.contains("Average Values:"));
        assert!(report.contains("Performance Coefficient:"));
        assert!(report.contains("1,000.00"));
        // The best variant per field scores exactly 1.00
        assert!(report.contains("1.00"));
    }

    #[test]
    fn test_unsampled_variant_renders_a_sentinel() {
        let outcome = outcome_with([
            vec![trial(1000, 10, 1, 1)],
            vec![],
            vec![trial(3000, 30, 3, 3)],
            vec![trial(4000, 40, 4, 4)],
        ]);
        let summary = Summary::from_outcome(&outcome).unwrap();
        assert!(summary.averages[ContainerKind::Ordered.index()].is_none());

        let report = summary.render().unwrap();
        assert!(report.contains("--------- Results for BTreeMap\n(not sampled in this run)"));
        // The sampled variants still report in full.
        assert!(report.contains("# Tests 1"));
    }

    #[test]
    fn test_zero_trial_run_renders_sentinels_only() {
        let mut harness = Harness::new(BenchConfig::new(0, 16).with_quiet().with_seed(11));
        let outcome = harness.run();
        let summary = Summary::from_outcome(&outcome).unwrap();
        assert!(summary.minimum.is_none());

        let report = summary.render().unwrap();
        assert_eq!(report.matches("(not sampled in this run)").count(), 4);
        assert!(!report.contains("Average Values:"));
    }

    #[test]
    fn test_minimum_never_exceeds_any_average() {
        let outcome = outcome_with([
            vec![trial(10, 100, 7, 40), trial(30, 120, 9, 44)],
            vec![trial(5, 400, 3, 90)],
            vec![trial(80, 90, 30, 20)],
            vec![trial(200, 1000, 2, 300)],
        ]);
        let summary = Summary::from_outcome(&outcome).unwrap();
        let minimum = summary.minimum.unwrap();

        for avg in summary.averages.iter().flatten() {
            assert!(minimum.mem_bytes <= avg.mem_bytes);
            assert!(minimum.insert_ticks <= avg.insert_ticks);
            assert!(minimum.search_ticks <= avg.search_ticks);
            assert!(minimum.iter_ticks <= avg.iter_ticks);
        }
    }

    #[test]
    fn test_metric_row_width_is_stable() {
        let aggregate = Aggregate {
            mem_bytes: Fixed::from_int(1),
            insert_ticks: Fixed::from_int(1),
            search_ticks: Fixed::from_int(1),
            iter_ticks: Fixed::from_int(1),
        };
        let row = metric_row(&aggregate);
        // 11 + 13 + 14 + 14 column widths plus three separators.
        assert_eq!(row.len(), 11 + 1 + 13 + 1 + 14 + 1 + 14 + 1);
        assert_eq!(row.split_whitespace().collect::<Vec<_>>(), vec!["1.00"; 4]);
    }
}
