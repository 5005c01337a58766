//! Synthetic CPU load.
//!
//! `run` burns CPU by summing squares over a range whose length scales with
//! the requested load factor. The work is synchronous and runs to completion;
//! callers on the async runtime should move it onto the blocking pool.
//!
//! Every loop index goes through `black_box`, otherwise the optimizer replaces
//! the loop with the closed-form sum and no CPU is spent at all.

use std::fmt;
use std::hint::black_box;
use std::ops::Range;
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::config::ITERATIONS_PER_UNIT;

/// Exact sum of squares. Stays in `u128` until an addition would overflow,
/// then continues in arbitrary precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareSum {
    Exact(u128),
    Wide(BigUint),
}

impl fmt::Display for SquareSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareSum::Exact(v) => write!(f, "{}", v),
            SquareSum::Wide(v) => write!(f, "{}", v),
        }
    }
}

/// Outcome of one load run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// Sum of `i * i` over the iteration range
    pub result: SquareSum,
    /// Iterations actually performed
    pub iterations: u64,
    /// Wall-clock time spent in the loop only
    pub elapsed: Duration,
}

/// Number of iterations for load factor `n`, clamped at zero.
///
/// Saturates instead of overflowing for extreme `n`.
pub fn iteration_count(n: i64) -> u64 {
    let bound = n.saturating_mul(ITERATIONS_PER_UNIT);
    u64::try_from(bound).unwrap_or(0)
}

/// Sum of squares of `0..iterations`.
pub fn sum_of_squares(iterations: u64) -> SquareSum {
    accumulate(0..iterations, 0)
}

/// Add the squares of `range` to `acc`, promoting to `BigUint` on overflow.
///
/// `i * i` cannot overflow `u128` for any `u64` index; only the running sum can.
fn accumulate(mut range: Range<u64>, mut acc: u128) -> SquareSum {
    let mut overflowed = None;
    for i in range.by_ref() {
        let square = u128::from(black_box(i)).pow(2);
        match acc.checked_add(square) {
            Some(next) => acc = next,
            None => {
                overflowed = Some(square);
                break;
            }
        }
    }

    let Some(square) = overflowed else {
        return SquareSum::Exact(acc);
    };

    let mut wide = BigUint::from(acc) + square;
    for i in range {
        wide += u128::from(black_box(i)).pow(2);
    }
    SquareSum::Wide(wide)
}

/// Run the load loop for factor `n` and time it.
pub fn run(n: i64) -> LoadOutcome {
    let iterations = iteration_count(n);

    let start = Instant::now();
    let result = black_box(sum_of_squares(iterations));
    let elapsed = start.elapsed();

    LoadOutcome {
        result,
        iterations,
        elapsed,
    }
}
