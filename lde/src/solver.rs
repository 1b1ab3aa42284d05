//! Solves systems of linear diophantine equations over the non-negative
//! integers.
//!
//! [`solve_homogeneous`] computes the minimal solutions of `A·x = 0`.
//! [`solve_nonhomogeneous`] reduces `A·x = b` to the homogeneous system
//! `[-b | A]·(x_0, x) = 0` and looks for the minimal solutions with `x_0` equal
//! to zero or one. Those with `x_0 = 1` solve `A·x = b`, those with `x_0 = 0`
//! solve `A·x = 0`.

use std::iter::once;

use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::completion::{Candidate, Completion, CompletionStats};
use crate::limit::{Limit, MaxCoordinate, MaxSum};
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::Error;

/// Settings for a [`Solver`].
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    /// The maximum number of rounds of the completion.
    /// If the limit is hit, the solutions found so far are returned,
    /// which is usually not the complete basis.
    /// The default is no limit.
    pub max_rounds: Option<usize>,

    /// Discard candidates with an entry at least this large.
    pub max_coordinate: Option<BigInt>,

    /// Discard candidates whose entries sum to at least this.
    pub max_sum: Option<BigInt>,
}

/// The solutions of `A·x = b`.
///
/// Every non-negative solution is `s + h_1 + ... + h_k` for some `s` in
/// `specific` and (not necessarily distinct) `h_i` in `homogeneous`.
/// If `b` is zero then `specific` is empty and the solutions are the
/// sums of homogeneous solutions, including the empty sum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solutions {
    /// The minimal solutions of `A·x = b`.
    pub specific: Vec<Vector>,

    /// The minimal solutions of `A·x = 0`.
    pub homogeneous: Vec<Vector>,
}

impl Solutions {
    /// Returns `(specific, homogeneous)`.
    pub fn into_parts(self) -> (Vec<Vector>, Vec<Vector>) {
        (self.specific, self.homogeneous)
    }
}

/// A configured solver.
///
/// ```
/// use lde::{Matrix, Solver, Vector};
///
/// let a = Matrix::from_array([[6, -9, 2]]);
/// let basis = Solver::new().max_coordinate(4).homogeneous(&a).unwrap();
/// assert_eq!(basis, [
///     Vector::from_entries([2, 2, 3]),
///     Vector::from_entries([3, 2, 0]),
/// ]);
/// ```
#[derive(Default)]
pub struct Solver<'a> {
    config: SolverConfig,
    limits: Vec<&'a dyn Limit>,
}

impl<'a> Solver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config, limits: Vec::new() }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Adds a limit. A candidate is discarded if any limit stops it.
    pub fn with_limit(mut self, limit: &'a dyn Limit) -> Self {
        self.limits.push(limit);
        self
    }

    /// Adds limits. A candidate is discarded if any limit stops it.
    pub fn with_limits(mut self, limits: &[&'a dyn Limit]) -> Self {
        self.limits.extend_from_slice(limits);
        self
    }

    /// See [`SolverConfig::max_coordinate`].
    pub fn max_coordinate<B: Into<BigInt>>(mut self, bound: B) -> Self {
        self.config.max_coordinate = Some(bound.into());
        self
    }

    /// See [`SolverConfig::max_sum`].
    pub fn max_sum<B: Into<BigInt>>(mut self, bound: B) -> Self {
        self.config.max_sum = Some(bound.into());
        self
    }

    /// See [`SolverConfig::max_rounds`].
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = Some(rounds);
        self
    }

    /// Runs the completion with the configured limits.
    fn complete<I>(
        &self,
        a: &Matrix,
        directions: I,
        frontier: Vec<Candidate>,
    ) -> Result<(Vec<Vector>, CompletionStats), Error>
    where
        I: IntoIterator<Item = usize>,
    {
        let max_coordinate = self.config.max_coordinate.clone().map(MaxCoordinate::new);
        let max_sum = self.config.max_sum.clone().map(MaxSum::new);

        let mut limits = self.limits.clone();
        if let Some(l) = &max_coordinate {
            limits.push(l);
        }
        if let Some(l) = &max_sum {
            limits.push(l);
        }

        Completion::new(a, directions, &limits)?
            .max_rounds(self.config.max_rounds)
            .run(frontier)
    }

    /// Computes the minimal solutions of `A·x = 0`,
    /// sorted with [`Vector::cmp_magnitude`].
    pub fn homogeneous(&self, a: &Matrix) -> Result<Vec<Vector>, Error> {
        let cols = a.num_cols();
        let frontier = (0..cols).map(|i| Candidate::seed(i, cols)).collect();
        let (basis, _) = self.complete(a, 0..cols, frontier)?;
        Ok(basis)
    }

    /// Computes the minimal solutions of `A·x = b` and `A·x = 0`.
    pub fn nonhomogeneous(&self, a: &Matrix, b: &Vector) -> Result<Solutions, Error> {
        // [-b | A]
        let columns: Vec<_> = once(b.neg()).chain(a.columns()).collect();
        let augmented = Matrix::from_columns(&columns);
        let cols = augmented.num_cols();

        // Column 0 is never a direction, so x_0 keeps the value of the seed.
        let specific_seeds = if b.is_zero() {
            false
        } else if let Some(row) = infeasible_row(a, b) {
            debug!("row {row} has no integer solutions, skipping specific seeds");
            false
        } else {
            true
        };

        let mut frontier = Vec::new();
        for i in 1..cols {
            let seed = Candidate::seed(i, cols);
            if specific_seeds {
                let with_b = seed.with_entry(0, 1);
                frontier.push(seed);
                frontier.push(with_b);
            } else {
                frontier.push(seed);
            }
        }

        let (basis, stats) = self.complete(&augmented, 1..cols, frontier)?;

        let mut solutions = Solutions::default();
        for v in basis {
            let x = v.slice(1, cols);
            if v.get(0).is_zero() {
                solutions.homogeneous.push(x);
            } else {
                solutions.specific.push(x);
            }
        }

        debug!(
            "{} specific and {} homogeneous solutions after {} rounds",
            solutions.specific.len(),
            solutions.homogeneous.len(),
            stats.rounds,
        );

        Ok(solutions)
    }
}

/// Returns a row `i` such that the gcd of the coefficients in row `i` doesn't
/// divide `b_i`, in which case `A·x = b` has no integer solutions.
fn infeasible_row(a: &Matrix, b: &Vector) -> Option<usize> {
    (0..a.num_rows().max(b.len())).find(|&i| {
        let g = a.row(i).iter().fold(BigInt::zero(), |g, e| g.gcd(e));
        !Integer::is_multiple_of(b.get(i), &g)
    })
}

/// Computes the minimal solutions of `A·x = 0`,
/// sorted with [`Vector::cmp_magnitude`].
///
/// Each solution has one entry per column of `A`.
pub fn solve_homogeneous(a: &Matrix, limits: &[&dyn Limit]) -> Result<Vec<Vector>, Error> {
    Solver::new().with_limits(limits).homogeneous(a)
}

/// Computes the minimal solutions of `A·x = b` and of `A·x = 0`.
/// See [`Solutions`].
pub fn solve_nonhomogeneous(
    a: &Matrix,
    b: &Vector,
    limits: &[&dyn Limit],
) -> Result<Solutions, Error> {
    Solver::new().with_limits(limits).nonhomogeneous(a, b)
}

#[cfg(test)]
mod test {
    use rand::{distr::{Distribution as _, Uniform}, rngs::StdRng, SeedableRng};

    use super::*;
    use crate::basis::evaluate;
    use crate::limit::max_coordinate_limit;

    fn v<const D: usize>(a: [i64; D]) -> Vector {
        Vector::from_entries(a)
    }

    /// Checks the properties every result has to have.
    fn check_basis(a: &Matrix, rhs: &Vector, basis: &[Vector]) {
        for x in basis {
            assert_eq!(x.len(), a.num_cols());
            assert!(!x.has_negative(), "{x} is not non-negative");
            assert_eq!(&evaluate(a, x).unwrap(), rhs, "{x} is not a solution");
        }

        for (i, x) in basis.iter().enumerate() {
            for (j, y) in basis.iter().enumerate() {
                if i != j {
                    assert_ne!(x, y, "{x} is a duplicate");
                    assert!(!x.dominates(y), "{x} dominates {y}");
                }
            }
        }

        assert!(basis.is_sorted(), "{basis:?} is not sorted");
    }

    #[test]
    fn homogeneous_two_equations() {
        let a = Matrix::from_array([[-1, 1, 2, -3], [-1, 3, -2, -1]]);
        let basis = solve_homogeneous(&a, &[]).unwrap();
        assert_eq!(basis, [v([0, 1, 1, 1]), v([4, 2, 1, 0])]);
        check_basis(&a, &Vector::zeros(2), &basis);
    }

    #[test]
    fn homogeneous_one_equation() {
        let a = Matrix::from_array([[6, -9, 2]]);
        let basis = solve_homogeneous(&a, &[]).unwrap();
        assert_eq!(basis, [v([0, 2, 9]), v([1, 2, 6]), v([2, 2, 3]), v([3, 2, 0])]);
    }

    #[test]
    fn homogeneous_is_deterministic() {
        let a = Matrix::from_array([[-1, 1, 2, -3], [-1, 3, -2, -1]]);
        let first = solve_homogeneous(&a, &[]).unwrap();
        for _ in 0..3 {
            assert_eq!(solve_homogeneous(&a, &[]).unwrap(), first);
        }
    }

    #[test]
    fn homogeneous_without_columns() {
        assert!(solve_homogeneous(&Matrix::empty(), &[]).unwrap().is_empty());
        assert!(solve_homogeneous(&Matrix::zero(2, 0), &[]).unwrap().is_empty());
    }

    #[test]
    fn homogeneous_without_rows() {
        // Every unit vector solves the empty system.
        let basis = solve_homogeneous(&Matrix::zero(0, 3), &[]).unwrap();
        assert_eq!(basis, [v([0, 0, 1]), v([0, 1, 0]), v([1, 0, 0])]);
    }

    #[test]
    fn nonhomogeneous_positive_coefficients() {
        let a = Matrix::from_array([[3, 9, 5]]);
        let b = v([20]);
        let (m1, m0) = solve_nonhomogeneous(&a, &b, &[]).unwrap().into_parts();
        assert_eq!(m1, [v([0, 0, 4]), v([2, 1, 1]), v([5, 0, 1])]);
        assert!(m0.is_empty());
        check_basis(&a, &b, &m1);
    }

    #[test]
    fn nonhomogeneous_mixed_coefficients() {
        let a = Matrix::from_array([[6, -9, 2]]);
        let b = v([20]);
        let s = solve_nonhomogeneous(&a, &b, &[]).unwrap();
        assert_eq!(s.specific, [v([0, 0, 10]), v([1, 0, 7]), v([2, 0, 4]), v([3, 0, 1])]);
        assert_eq!(s.homogeneous, [v([0, 2, 9]), v([1, 2, 6]), v([2, 2, 3]), v([3, 2, 0])]);
        check_basis(&a, &b, &s.specific);
        check_basis(&a, &Vector::zeros(1), &s.homogeneous);
    }

    #[test]
    fn nonhomogeneous_zero_rhs() {
        let a = Matrix::from_array([[6, -9, 2]]);
        let (m1, m0) = solve_nonhomogeneous(&a, &v([0]), &[]).unwrap().into_parts();
        assert!(m1.is_empty());
        assert_eq!(m0, [v([0, 2, 9]), v([1, 2, 6]), v([2, 2, 3]), v([3, 2, 0])]);
    }

    #[test]
    fn nonhomogeneous_with_limit() {
        let a = Matrix::from_array([[6, -9, 2]]);
        let limit = max_coordinate_limit(4);
        let (m1, m0) = solve_nonhomogeneous(&a, &v([0]), &[&limit]).unwrap().into_parts();
        assert!(m1.is_empty());
        assert_eq!(m0, [v([2, 2, 3]), v([3, 2, 0])]);
    }

    #[test]
    fn nonhomogeneous_two_equations() {
        let a = Matrix::from_array([[-1, 1, 2, -3], [-1, 3, -2, -1]]);
        let b = v([2, 2]);
        let s = solve_nonhomogeneous(&a, &b, &[]).unwrap();
        assert_eq!(s.specific, [v([2, 2, 1, 0])]);
        assert_eq!(s.homogeneous, solve_homogeneous(&a, &[]).unwrap());
        check_basis(&a, &b, &s.specific);
    }

    #[test]
    fn nonhomogeneous_unsolvable() {
        // 2x = 3 has no integer solution.
        let a = Matrix::from_array([[2]]);
        let s = solve_nonhomogeneous(&a, &v([3]), &[]).unwrap();
        assert_eq!(s, Solutions::default());
    }

    #[test]
    fn infeasible_rows() {
        let a = Matrix::from_array([[2, -4], [3, 3]]);
        assert_eq!(infeasible_row(&a, &v([6, 3])), None);
        assert_eq!(infeasible_row(&a, &v([3, 3])), Some(0));
        assert_eq!(infeasible_row(&a, &v([2, 4])), Some(1));
        assert_eq!(infeasible_row(&a, &v([2, 3, 1])), Some(2));
        assert_eq!(infeasible_row(&a, &v([2, 3, 0])), None);
    }

    #[test]
    fn infeasible_rhs_keeps_homogeneous() {
        let a = Matrix::from_array([[2, -4]]);
        let s = solve_nonhomogeneous(&a, &v([3]), &[]).unwrap();
        assert!(s.specific.is_empty());
        assert_eq!(s.homogeneous, [v([2, 1])]);

        let s = solve_nonhomogeneous(&a, &v([6]), &[]).unwrap();
        assert_eq!(s.specific, [v([3, 0])]);
        assert_eq!(s.homogeneous, [v([2, 1])]);
    }

    #[test]
    fn rhs_longer_than_matrix() {
        // The missing second row of A is zero, so 0 = 1 can't be solved.
        let a = Matrix::from_array([[1, -1]]);
        let s = solve_nonhomogeneous(&a, &v([3, 1]), &[]).unwrap();
        assert!(s.specific.is_empty());
        assert_eq!(s.homogeneous, [v([1, 1])]);

        let s = solve_nonhomogeneous(&a, &v([3, 0]), &[]).unwrap();
        assert_eq!(s.specific, [v([3, 0])]);
    }

    #[test]
    fn solver_config() {
        let a = Matrix::from_array([[6, -9, 2]]);
        let config = SolverConfig {
            max_coordinate: Some(4.into()),
            ..Default::default()
        };
        let solver = Solver::with_config(config);
        assert_eq!(solver.config().max_coordinate, Some(BigInt::from(4)));
        assert_eq!(solver.config().max_rounds, None);
        let basis = solver.homogeneous(&a).unwrap();
        assert_eq!(basis, [v([2, 2, 3]), v([3, 2, 0])]);

        let solver = Solver::new().max_sum(8).max_rounds(3);
        assert_eq!(solver.config().max_sum, Some(BigInt::from(8)));
        assert_eq!(solver.config().max_rounds, Some(3));

        let basis = Solver::new().max_sum(8).homogeneous(&a).unwrap();
        assert_eq!(basis, [v([2, 2, 3]), v([3, 2, 0])]);

        let large_z = |x: &Vector| x.get(2) > &BigInt::from(6);
        let basis = Solver::new().with_limit(&large_z).homogeneous(&a).unwrap();
        assert_eq!(basis, [v([1, 2, 6]), v([2, 2, 3]), v([3, 2, 0])]);

        let basis = Solver::new().max_rounds(1).homogeneous(&a).unwrap();
        assert!(basis.is_empty());
    }

    /// Random small systems with bounded search. The results have to satisfy
    /// the basis properties and the homogeneous part of the non-homogeneous
    /// solution has to be the homogeneous basis.
    #[test]
    fn random_systems() {
        let rng = &mut StdRng::seed_from_u64(0);
        let coefficient = Uniform::new_inclusive(-3i64, 3).unwrap();
        let rows = Uniform::new_inclusive(1usize, 2).unwrap();
        let cols = Uniform::new_inclusive(1usize, 4).unwrap();

        for _ in 0..100 {
            let (r, c) = (rows.sample(rng), cols.sample(rng));
            let entries = (0..r * c).map(|_| coefficient.sample(rng).into()).collect();
            let a = Matrix::new(r, c, entries).unwrap();
            let b: Vector = (0..r).map(|_| BigInt::from(coefficient.sample(rng))).collect();

            let solver = Solver::new().max_sum(7);
            let h = solver.homogeneous(&a).unwrap();
            check_basis(&a, &Vector::zeros(r), &h);
            assert_eq!(solver.homogeneous(&a).unwrap(), h);

            let s = solver.nonhomogeneous(&a, &b).unwrap();
            check_basis(&a, &b, &s.specific);
            assert_eq!(s.homogeneous, h, "a: {a:?}, b: {b:?}");
        }
    }
}
