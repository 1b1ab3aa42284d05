//! Minimal non-negative solutions of linear diophantine equations.
//!
//! Given an integer matrix `A` this crate computes the minimal basis of the
//! non-negative integer solutions of `A·x = 0`, i.e. the solutions that are
//! not componentwise greater than another solution. Every non-negative
//! solution is a sum of basis vectors. For `A·x = b` it computes a set of
//! specific solutions together with the homogeneous basis, such that every
//! non-negative solution is one of the specific solutions plus a sum of
//! homogeneous basis vectors.
//!
//! The algorithm is a completion procedure in the style of Contejean and
//! Devie. See [`completion`] for the details.
//!
//! All arithmetic is done on [`BigInt`]s, so there are no overflows.
//!
//! ```
//! use lde::{Matrix, Vector};
//!
//! let a = Matrix::from_array([[-1, 1, 2, -3], [-1, 3, -2, -1]]);
//! let basis = lde::solve_homogeneous(&a, &[]).unwrap();
//! assert_eq!(basis, [
//!     Vector::from_entries([0, 1, 1, 1]),
//!     Vector::from_entries([4, 2, 1, 0]),
//! ]);
//! ```

pub mod basis;
pub mod completion;
pub mod limit;
pub mod matrix;
pub mod solver;
pub mod vector;

pub use limit::{Limit, MaxCoordinate, MaxSum, max_coordinate_limit};
pub use matrix::Matrix;
pub use num_bigint::BigInt;
pub use solver::{
    Solutions, Solver, SolverConfig, solve_homogeneous, solve_nonhomogeneous,
};
pub use vector::Vector;

use num_traits::{One, Zero};

lazy_static::lazy_static! {
    /// Returned by reference for entries outside of a vector or matrix.
    pub(crate) static ref ZERO: BigInt = BigInt::zero();
    pub(crate) static ref ONE: BigInt = BigInt::one();
    pub(crate) static ref NEG_ONE: BigInt = -BigInt::one();
}

/// Errors are contract violations by the caller, e.g. adding matrices of
/// different shapes. The solver itself never produces them for valid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The shapes of two matrices are incompatible for an operation,
    /// or a matrix was constructed from the wrong number of entries.
    #[error("shape mismatch in {op}: {left:?} and {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A vector has more entries than the matrix has columns.
    #[error("vector has {found} entries but the matrix has {expected} columns")]
    LengthMismatch { expected: usize, found: usize },
}
