//! The building blocks of the completion procedure: evaluating `A·x` for a
//! candidate and deciding whether a candidate is dominated by the solutions
//! found so far.

use std::collections::HashSet;

use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::Error;

/// Computes `A·x`.
///
/// `x` may be shorter than the number of columns of `A`, in which case the
/// missing entries are zero, but it must not be longer.
pub fn evaluate(a: &Matrix, x: &Vector) -> Result<Vector, Error> {
    if x.len() > a.num_cols() {
        return Err(Error::LengthMismatch {
            expected: a.num_cols(),
            found: x.len(),
        });
    }

    Ok(a.mul_vec_post(x))
}

/// Is `candidate` dominated by any vector in `basis`?
///
/// Such a candidate can never be a minimal solution,
/// and neither can anything that is obtained by increasing its entries.
pub fn is_dominated<'a, I>(candidate: &Vector, basis: I) -> bool
where
    I: IntoIterator<Item = &'a Vector>,
{
    basis.into_iter().any(|b| candidate.dominates(b))
}

/// An antichain of solutions in the order they were found.
///
/// Vectors are deduplicated by value, so `[1, 2]` and `[1, 2, 0]` count as
/// the same solution.
#[derive(Clone, Debug, Default)]
pub struct MinimalSet {
    members: Vec<Vector>,
    seen: HashSet<Vector>,
}

impl MinimalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vector unless an equal one is already present.
    /// Returns whether the vector was added.
    ///
    /// The caller is responsible for only inserting minimal solutions,
    /// this doesn't check for domination.
    pub fn insert(&mut self, v: Vector) -> bool {
        if self.seen.contains(&v) {
            return false;
        }

        self.seen.insert(v.clone());
        self.members.push(v);
        true
    }

    pub fn contains(&self, v: &Vector) -> bool {
        self.seen.contains(v)
    }

    /// Is `v` dominated by a member of the set?
    pub fn dominates(&self, v: &Vector) -> bool {
        is_dominated(v, &self.members)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.members.iter()
    }

    /// Returns the members sorted with [`Vector::cmp_magnitude`].
    pub fn into_sorted(self) -> Vec<Vector> {
        let mut members = self.members;
        members.sort_by(Vector::cmp_magnitude);
        members
    }
}

impl<'a> IntoIterator for &'a MinimalSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
