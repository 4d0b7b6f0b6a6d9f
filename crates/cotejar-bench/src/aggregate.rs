//! Trial results and exact fixed-point aggregation.

use std::fmt;

use cotejar_common::{CotejarError, Result};

/// Measurements from one trial: a memory delta plus three timings.
///
/// Every field is non-negative by construction; a value is final once the
/// trial ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Live-heap growth across the insertion loop, in bytes.
    pub mem_bytes: u64,
    /// Sum of per-insert elapsed nanoseconds.
    pub insert_ticks: u64,
    /// Elapsed nanoseconds of the single sentinel lookup.
    pub search_ticks: u64,
    /// Elapsed nanoseconds of the full forward traversal.
    pub iter_ticks: u64,
}

const SCALE: u128 = 1_000_000;

/// Fixed-point decimal with six fractional digits.
///
/// Backed by exact `u128` arithmetic, so averaging thousands of samples
/// carries no binary-float rounding bias. Divisions round half-up. Six
/// digits keep even the widest realistic best-to-worst metric ratio away
/// from rounding to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(u128);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    pub fn from_int(value: u64) -> Fixed {
        Fixed(u128::from(value) * SCALE)
    }

    /// `self / other` rounded half-up. `None` when `other` is zero.
    pub fn checked_div(self, other: Fixed) -> Option<Fixed> {
        if other.0 == 0 {
            return None;
        }
        Some(Fixed((self.0 * SCALE + other.0 / 2) / other.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Value in hundredths, rounded half-up from the six stored digits.
    pub fn to_hundredths(self) -> u128 {
        (self.0 + 5_000) / 10_000
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.to_hundredths();
        write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
    }
}

/// Four averaged (or minimized) metrics.
///
/// The cross-variant minimum is taken per field, so its fields may
/// originate from different variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub mem_bytes: Fixed,
    pub insert_ticks: Fixed,
    pub search_ticks: Fixed,
    pub iter_ticks: Fixed,
}

impl Aggregate {
    /// Per-field minimum across the given aggregates — for a full run,
    /// the four variant averages. `None` for an empty iterator.
    pub fn field_min<'a, I>(aggregates: I) -> Option<Aggregate>
    where
        I: IntoIterator<Item = &'a Aggregate>,
    {
        aggregates.into_iter().copied().reduce(|a, b| Aggregate {
            mem_bytes: a.mem_bytes.min(b.mem_bytes),
            insert_ticks: a.insert_ticks.min(b.insert_ticks),
            search_ticks: a.search_ticks.min(b.search_ticks),
            iter_ticks: a.iter_ticks.min(b.iter_ticks),
        })
    }
}

/// Arithmetic mean of every field. An empty accumulator is a defined
/// failure, never a silent zero.
pub fn average(variant: &str, results: &[TrialResult]) -> Result<Aggregate> {
    if results.is_empty() {
        return Err(CotejarError::EmptyAccumulator { variant: variant.to_string() });
    }

    let count = results.len() as u128;
    let total =
        |field: fn(&TrialResult) -> u64| results.iter().map(|r| u128::from(field(r))).sum::<u128>();
    // count > 0 is guaranteed by the guard above
    let mean = |sum: u128| Fixed((sum * SCALE + count / 2) / count);

    Ok(Aggregate {
        mem_bytes: mean(total(|r| r.mem_bytes)),
        insert_ticks: mean(total(|r| r.insert_ticks)),
        search_ticks: mean(total(|r| r.search_ticks)),
        iter_ticks: mean(total(|r| r.iter_ticks)),
    })
}

/// Per-field `minimum / average` performance coefficients, each in
/// `(0, 1]`. A zero average is an arithmetic fault, mirroring the
/// reference's uncaught division-by-zero.
pub fn coefficients(minimum: &Aggregate, avg: &Aggregate) -> Result<Aggregate> {
    let ratio = |min: Fixed, avg: Fixed, metric: &str| {
        min.checked_div(avg).ok_or_else(|| CotejarError::Arithmetic {
            context: format!("dividing best {metric} by a zero average"),
        })
    };

    Ok(Aggregate {
        mem_bytes: ratio(minimum.mem_bytes, avg.mem_bytes, "memory")?,
        insert_ticks: ratio(minimum.insert_ticks, avg.insert_ticks, "insert time")?,
        search_ticks: ratio(minimum.search_ticks, avg.search_ticks, "search time")?,
        iter_ticks: ratio(minimum.iter_ticks, avg.iter_ticks, "traversal time")?,
    })
}
