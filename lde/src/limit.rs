//! Limits prune the search for solutions.
//!
//! The completion procedure terminates for every matrix, but the number of
//! candidates it has to look at can be huge. A [`Limit`] is asked about every
//! candidate before it is added to the frontier and can reject it, which also
//! rejects everything that would have been derived from it. Solutions that
//! are only reachable through rejected candidates are not found.

use num_bigint::BigInt;

use crate::vector::Vector;

/// A predicate that stops the search at a candidate.
///
/// Limits must not depend on anything but the candidate, i.e. calling
/// [`Limit::stop`] twice with the same vector has to return the same answer.
pub trait Limit: Send + Sync {
    /// Should the candidate be discarded?
    fn stop(&self, candidate: &Vector) -> bool;
}

impl<F> Limit for F
where
    F: Fn(&Vector) -> bool + Send + Sync,
{
    fn stop(&self, candidate: &Vector) -> bool {
        self(candidate)
    }
}

/// Stops once any entry of the candidate reaches the bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxCoordinate {
    bound: BigInt,
}

impl MaxCoordinate {
    pub fn new<B: Into<BigInt>>(bound: B) -> Self {
        Self { bound: bound.into() }
    }

    pub fn bound(&self) -> &BigInt {
        &self.bound
    }
}

impl Limit for MaxCoordinate {
    fn stop(&self, candidate: &Vector) -> bool {
        candidate.iter().any(|e| e >= &self.bound)
    }
}

/// Shorthand for [`MaxCoordinate::new`].
pub fn max_coordinate_limit<B: Into<BigInt>>(bound: B) -> MaxCoordinate {
    MaxCoordinate::new(bound)
}

/// Stops once the sum of the entries of the candidate reaches the bound.
///
/// Every round of the completion increases the sum of each candidate by one,
/// so this also limits the number of rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxSum {
    bound: BigInt,
}

impl MaxSum {
    pub fn new<B: Into<BigInt>>(bound: B) -> Self {
        Self { bound: bound.into() }
    }

    pub fn bound(&self) -> &BigInt {
        &self.bound
    }
}

impl Limit for MaxSum {
    fn stop(&self, candidate: &Vector) -> bool {
        candidate.sum() >= self.bound
    }
}
