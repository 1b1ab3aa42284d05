//! The completion procedure that computes the minimal solutions of `A·x = 0`.
//!
//! This is a variant of the algorithm of Contejean and Devie. It starts with
//! a frontier of candidates, usually the unit vectors, and works in rounds.
//! In each round
//!
//! 1. every candidate `x` with `A·x = 0` is added to the set of minimal
//!    solutions (unless it is already there),
//! 2. every remaining candidate that is dominated by a minimal solution is
//!    dropped, since neither it nor anything derived from it can be minimal,
//! 3. every remaining candidate `x` is extended to `x + e_i` for each
//!    unit vector `e_i` with `A·x · A·e_i < 0`. The condition means that
//!    `A·e_i` points back towards the origin from `A·x`, so `A·(x + e_i)` is
//!    closer to zero in that direction.
//!
//! The extended candidates form the frontier of the next round and the
//! procedure stops when the frontier is empty. Termination follows from
//! Dickson's lemma: the minimal solutions form an antichain in
//! `ℕ^n`, which is finite, and every candidate past a certain size is
//! dominated by one of them.
//!
//! Without further bookkeeping a vector like `e_1 + e_2` would be reached both
//! from `e_1` and from `e_2`, and in general a vector would be generated once
//! for every order of its unit steps. To prevent this, each candidate carries
//! a freeze mask of directions it may no longer be extended in. When a
//! candidate is extended, the `k`-th child freezes the directions of the
//! `k - 1` children before it. The seeds freeze every direction after their
//! own, so `e_i` may only grow in the directions `0..=i`.
//!
//! A round only reads the minimal solutions of the same round, so the
//! extension step could be run in parallel for all pending candidates, as
//! long as the next frontier is collected before the next round starts.

use log::{debug, trace, warn};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::basis::{MinimalSet, evaluate};
use crate::limit::Limit;
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::Error;

/// A vector on the frontier together with the directions in which it may no
/// longer be extended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    value: Vector,
    /// 1 at the frozen directions and 0 everywhere else.
    frozen: Vector,
}

impl Candidate {
    pub fn new(value: Vector, frozen: Vector) -> Self {
        Self { value, frozen }
    }

    /// The seed for direction `i` in a problem with `dim` variables.
    /// It may only be extended in the directions `0..=i`.
    pub fn seed(i: usize, dim: usize) -> Self {
        Self {
            value: Vector::unit(i).slice(0, dim),
            frozen: Vector::ones(dim).sub(&Vector::ones(i + 1)),
        }
    }

    pub fn value(&self) -> &Vector {
        &self.value
    }

    pub fn frozen(&self) -> &Vector {
        &self.frozen
    }

    /// Replaces entry `i` of the value, keeping the freeze mask.
    pub fn with_entry<V: Into<BigInt>>(&self, i: usize, value: V) -> Self {
        Self {
            value: self.value.set(i, value),
            frozen: self.frozen.clone(),
        }
    }

    fn is_frozen(&self, direction: usize) -> bool {
        !self.frozen.get(direction).is_zero()
    }
}

/// Counters collected during a run of [`Completion::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionStats {
    /// Number of rounds, i.e. frontiers that were classified.
    pub rounds: usize,

    /// Number of candidates that were classified.
    pub candidates: usize,

    /// Number of candidates that were dropped because a minimal solution
    /// dominates them.
    pub dominated: usize,

    /// Number of extensions that a [`Limit`] rejected.
    pub limited: usize,

    /// Whether the run stopped because of the round limit
    /// before the frontier was empty.
    pub truncated: bool,
}

/// A unit direction with its precomputed image `A·e_i`.
struct Direction {
    index: usize,
    unit: Vector,
    image: Vector,
}

/// The completion procedure for a fixed matrix.
/// See the module documentation [`crate::completion`].
pub struct Completion<'a> {
    matrix: &'a Matrix,
    directions: Vec<Direction>,
    limits: &'a [&'a dyn Limit],
    max_rounds: Option<usize>,
}

impl<'a> Completion<'a> {
    /// Sets up the procedure for the matrix that extends candidates in the
    /// given directions, which are column indices of the matrix.
    /// The directions are tried in the order given.
    pub fn new<I>(
        matrix: &'a Matrix,
        directions: I,
        limits: &'a [&'a dyn Limit],
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = usize>,
    {
        let dim = matrix.num_cols();
        let directions = directions
            .into_iter()
            .map(|index| -> Result<Direction, Error> {
                // Directions past the last column are zero.
                let unit = if index < dim {
                    Vector::zeros(dim).set(index, 1)
                } else {
                    Vector::zeros(dim)
                };
                let image = evaluate(matrix, &unit)?;
                Ok(Direction { index, unit, image })
            })
            .collect::<Result<_, Error>>()?;

        Ok(Self { matrix, directions, limits, max_rounds: None })
    }

    /// Stops after this many rounds even if the frontier is not empty.
    /// The result then contains only the solutions found so far.
    pub fn max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Runs the procedure starting from the given frontier and returns the
    /// minimal solutions sorted with [`Vector::cmp_magnitude`].
    pub fn run(
        &self,
        frontier: Vec<Candidate>,
    ) -> Result<(Vec<Vector>, CompletionStats), Error> {
        debug!(
            "completing {}x{} matrix from {} seeds in {} directions",
            self.matrix.num_rows(),
            self.matrix.num_cols(),
            frontier.len(),
            self.directions.len(),
        );

        let mut stats = CompletionStats::default();
        let mut accepted = MinimalSet::new();
        let mut frontier = frontier;

        while !frontier.is_empty() {
            if self.max_rounds.is_some_and(|max| stats.rounds >= max) {
                warn!(
                    "stopping after {} rounds with {} candidates left",
                    stats.rounds,
                    frontier.len()
                );
                stats.truncated = true;
                break;
            }

            stats.rounds += 1;
            stats.candidates += frontier.len();

            // Classify the frontier. The residuals of the unsolved candidates
            // are needed again for the extension.
            let mut unsolved = Vec::new();
            for candidate in frontier {
                let residual = evaluate(self.matrix, &candidate.value)?;
                if residual.is_zero() {
                    accepted.insert(candidate.value);
                } else {
                    unsolved.push((candidate, residual));
                }
            }

            let num_unsolved = unsolved.len();
            let pending: Vec<_> = unsolved
                .into_iter()
                .filter(|(c, _)| !accepted.dominates(&c.value))
                .collect();
            stats.dominated += num_unsolved - pending.len();

            trace!(
                "round {}: {} solutions, {} pending, {} dominated",
                stats.rounds,
                accepted.len(),
                pending.len(),
                num_unsolved - pending.len(),
            );

            frontier = Vec::new();
            for (candidate, residual) in &pending {
                self.extend(candidate, residual, &mut frontier, &mut stats);
            }
        }

        debug!("found {} minimal solutions: {stats:?}", accepted.len());
        Ok((accepted.into_sorted(), stats))
    }

    /// Pushes the extensions of a candidate onto the next frontier.
    fn extend(
        &self,
        candidate: &Candidate,
        residual: &Vector,
        next: &mut Vec<Candidate>,
        stats: &mut CompletionStats,
    ) {
        // Directions used by the earlier children of this candidate.
        let mut siblings = Vector::empty();

        for d in &self.directions {
            if candidate.is_frozen(d.index) {
                continue;
            }

            if !residual.dot(&d.image).is_negative() {
                continue;
            }

            let value = candidate.value.add(&d.unit);
            if self.limits.iter().any(|l| l.stop(&value)) {
                stats.limited += 1;
                continue;
            }

            next.push(Candidate {
                value,
                frozen: candidate.frozen.add(&siblings),
            });
            siblings = siblings.add(&d.unit);
        }
    }
}
