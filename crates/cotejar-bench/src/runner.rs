//! Trial execution: variant selection, the timed workload, and
//! per-variant accumulation.

use std::hint::black_box;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use cotejar_common::Progress;

use crate::aggregate::TrialResult;
use crate::container::{Container, ContainerKind};
use crate::heap;

/// Trials in a full run.
pub const TRIALS: usize = 8_000;
/// Keys inserted per trial.
pub const KEYS_PER_TRIAL: usize = 50_000;
/// Key-prefix alphabet. The random draw range is the array length, so the
/// two cannot drift apart.
pub const LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
/// Letter forced into one key per trial so a lookup target exists.
pub const SENTINEL: char = 'C';
/// Starting value of the search counter; it advances before each trial,
/// so the first trial observes 28.
const INITIAL_SEARCH_INDEX: usize = 27;

/// Run parameters.
///
/// The binary always runs `default()`; the narrower constructor and the
/// builder methods exist for tests, not for user-facing configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub trials: usize,
    pub keys_per_trial: usize,
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { trials: TRIALS, keys_per_trial: KEYS_PER_TRIAL, seed: None, quiet: false }
    }
}

impl BenchConfig {
    pub fn new(trials: usize, keys_per_trial: usize) -> Self {
        Self { trials, keys_per_trial, seed: None, quiet: false }
    }

    /// Fix the RNG seed; two runs with the same seed draw the same
    /// variant and letter sequences.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Suppress per-trial progress lines.
    pub fn with_quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Per-variant accumulators, indexed in `ContainerKind::ALL` order.
    /// Append-only while the run is in flight.
    pub accumulators: [Vec<TrialResult>; 4],
    /// Variant drawn for each trial, in execution order.
    pub selections: Vec<ContainerKind>,
}

impl RunOutcome {
    pub fn results_for(&self, kind: ContainerKind) -> &[TrialResult] {
        &self.accumulators[kind.index()]
    }

    pub fn total_trials(&self) -> usize {
        self.selections.len()
    }
}

/// Executes trials and accumulates per-variant results.
///
/// The search counter lives here as ordinary sequential state — one
/// logical thread of control, mutated once per trial.
pub struct Harness {
    config: BenchConfig,
    search_index: usize,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Self {
        Self { config, search_index: INITIAL_SEARCH_INDEX }
    }

    /// Runs every trial to completion and returns the accumulators.
    pub fn run(&mut self) -> RunOutcome {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let progress = Progress::new(self.config.trials);
        let mut outcome = RunOutcome {
            accumulators: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            selections: Vec::with_capacity(self.config.trials),
        };

        for trial in 0..self.config.trials {
            self.search_index += 1;
            let kind = ContainerKind::from_draw(rng.gen_range(0..ContainerKind::ALL.len()));
            if !self.config.quiet {
                progress.announce(trial, kind.name());
            }

            let (result, container) = self.run_trial(kind, &mut rng);
            drop(container);
            outcome.accumulators[kind.index()].push(result);
            outcome.selections.push(kind);
        }

        outcome
    }

    /// One complete insert/lookup/traverse workload against a fresh
    /// container. The populated container is handed back so callers can
    /// inspect it; the run loop drops it immediately.
    fn run_trial(&self, kind: ContainerKind, rng: &mut SmallRng) -> (TrialResult, Container) {
        let mut container = Container::empty(kind);

        let mem_before = heap::live_bytes();
        let mut insert_ticks: u64 = 0;
        for i in 0..self.config.keys_per_trial {
            let letter = if i == self.search_index { SENTINEL } else { random_letter(rng) };
            let key = format!("{letter}_key{i}");
            let value = format!("value{i}");

            let clock = Instant::now();
            container.insert(key, value);
            insert_ticks += ticks(clock);
        }
        let mem_bytes = heap::live_bytes().saturating_sub(mem_before) as u64;

        // The counter has not moved since the sentinel was planted, but
        // once it exceeds the key count the planted index is never
        // reached and this lookup misses. That is the reference
        // behavior, kept as-is.
        let needle = format!("{SENTINEL}_key{}", self.search_index);
        let clock = Instant::now();
        black_box(container.get(&needle));
        let search_ticks = ticks(clock);

        let clock = Instant::now();
        black_box(container.traverse());
        let iter_ticks = ticks(clock);

        (TrialResult { mem_bytes, insert_ticks, search_ticks, iter_ticks }, container)
    }
}

fn ticks(clock: Instant) -> u64 {
    clock.elapsed().as_nanos() as u64
}

/// Uniform draw over `LETTERS`.
fn random_letter(rng: &mut SmallRng) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())]
}
