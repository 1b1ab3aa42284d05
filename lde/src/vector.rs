//! Vectors of arbitrary precision integers.
//!
//! A [`Vector`] behaves as if it was infinitely long with all entries past the
//! stored ones being zero. This means that `[1, 2]` and `[1, 2, 0, 0]` are
//! the same vector: they compare equal, hash the same and are ordered the
//! same. Only [`Vector::len`], iteration and the [`Display`] output see the
//! stored entries.
//!
//! All operations that change a vector return a new one. The solver shares
//! vectors between candidates and the basis, so nothing is ever modified
//! after it was created.
//!
//! [`Display`]: std::fmt::Display

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Neg, Sub};

use itertools::{EitherOrBoth, Itertools};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{NEG_ONE, ONE, ZERO};

/// A zero-extended vector of [`BigInt`]s.
/// See the module documentation [`crate::vector`].
#[derive(Clone, Default)]
pub struct Vector {
    entries: Vec<BigInt>,
}

impl Vector {
    /// Returns a vector without stored entries, i.e. the zero vector.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns a vector with `n` stored zeros.
    pub fn zeros(n: usize) -> Self {
        Self::from_iter(std::iter::repeat_n(BigInt::zero(), n))
    }

    /// Returns a vector with `n` stored ones.
    pub fn ones(n: usize) -> Self {
        Self::from_iter(std::iter::repeat_n(ONE.clone(), n))
    }

    /// The unit vector `e_j` with dimension `j + 1`.
    pub fn unit(j: usize) -> Self {
        Self::zeros(j + 1).set(j, ONE.clone())
    }

    /// Creates a vector from a slice or array.
    pub fn from_entries<U, V>(a: U) -> Self
    where
        U: AsRef<[V]>,
        V: Into<BigInt> + Clone,
    {
        Self::from_iter(a.as_ref().iter().cloned().map(Into::into))
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no stored entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Are all entries zero?
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(Zero::is_zero)
    }

    /// Returns an iterator over the stored entries.
    pub fn iter(&self) -> std::slice::Iter<'_, BigInt> {
        self.entries.iter()
    }

    /// Returns the stored entries.
    pub fn as_slice(&self) -> &[BigInt] {
        &self.entries
    }

    /// Returns the entry at index `i`, which is zero past the stored entries.
    pub fn get(&self, i: usize) -> &BigInt {
        self.entries.get(i).unwrap_or(&*ZERO)
    }

    /// Returns a copy of the vector with the entry at index `i` replaced.
    /// The copy is extended with zeros if `i` is past the stored entries.
    pub fn set<V: Into<BigInt>>(&self, i: usize, value: V) -> Self {
        let mut entries = self.entries.clone();
        if i >= entries.len() {
            entries.resize(i + 1, BigInt::zero());
        }
        entries[i] = value.into();
        Self { entries }
    }

    /// Iterates over the entries of both vectors up to the longer of the two,
    /// filling in zeros for the shorter one.
    fn zip_padded<'a>(
        &'a self,
        other: &'a Vector,
    ) -> impl Iterator<Item = (&'a BigInt, &'a BigInt)> + 'a {
        self.iter().zip_longest(other.iter()).map(|p| match p {
            EitherOrBoth::Both(a, b) => (a, b),
            EitherOrBoth::Left(a) => (a, &*ZERO),
            EitherOrBoth::Right(b) => (&*ZERO, b),
        })
    }

    /// Returns the sum of two vectors.
    /// The dimension is the larger of the two.
    pub fn add(&self, rhs: &Vector) -> Vector {
        self.zip_padded(rhs).map(|(a, b)| a + b).collect()
    }

    /// Returns the difference of two vectors.
    /// The dimension is the larger of the two.
    pub fn sub(&self, rhs: &Vector) -> Vector {
        self.zip_padded(rhs).map(|(a, b)| a - b).collect()
    }

    /// Multiplies every entry by `c`.
    pub fn scale(&self, c: &BigInt) -> Vector {
        self.iter().map(|e| e * c).collect()
    }

    /// Negates every entry.
    pub fn neg(&self) -> Vector {
        self.scale(&NEG_ONE)
    }

    /// Returns the entries in `start..end` as a new vector.
    ///
    /// The order of `start` and `end` doesn't matter and the result always
    /// has `|end - start|` entries, padded with zeros where necessary.
    pub fn slice(&self, start: usize, end: usize) -> Vector {
        let (s, e) = (start.min(end), start.max(end));
        (s..e).map(|i| self.get(i).clone()).collect()
    }

    /// Computes the dot product. Missing entries of the shorter vector are
    /// zero, so only the common prefix contributes.
    pub fn dot(&self, other: &Vector) -> BigInt {
        self.iter()
            .zip(other.iter())
            .fold(BigInt::zero(), |acc, (a, b)| acc + a * b)
    }

    /// Sum of all entries.
    pub fn sum(&self) -> BigInt {
        self.iter().sum()
    }

    /// Is any entry negative?
    pub fn has_negative(&self) -> bool {
        self.iter().any(Signed::is_negative)
    }

    /// Does this vector dominate `other`, i.e. is every entry at least as
    /// large as the corresponding one in `other` and at least one strictly
    /// larger?
    pub fn dominates(&self, other: &Vector) -> bool {
        self.zip_padded(other).all(|(a, b)| a >= b)
            && self.zip_padded(other).any(|(a, b)| a > b)
    }

    /// Compares two vectors by the first entry in which they differ.
    pub fn cmp_magnitude(&self, other: &Vector) -> Ordering {
        self.zip_padded(other)
            .map(|(a, b)| a.cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// The stored entries without trailing zeros.
    /// This is what determines the value of the vector.
    fn significant(&self) -> &[BigInt] {
        let len = self.entries.len()
            - self.entries.iter().rev().take_while(|e| e.is_zero()).count();
        &self.entries[..len]
    }
}

impl FromIterator<BigInt> for Vector {
    fn from_iter<I: IntoIterator<Item = BigInt>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl From<Vec<BigInt>> for Vector {
    fn from(entries: Vec<BigInt>) -> Self {
        Self { entries }
    }
}

impl From<Vector> for Vec<BigInt> {
    fn from(v: Vector) -> Self {
        v.entries
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a BigInt;
    type IntoIter = std::slice::Iter<'a, BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Vector {
    type Output = BigInt;

    fn index(&self, idx: usize) -> &Self::Output {
        self.get(idx)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::neg(self)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.zip_padded(other).all(|(a, b)| a == b)
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_magnitude(other)
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(" "))
    }
}
