//! Matrices of arbitrary precision integers.
//!
//! Like [`Vector`]s, matrices read as zero outside of their shape and
//! [`Matrix::set`] returns a copy that grows as needed.

use std::fmt::{Debug, Display};
use std::ops::Index;

use itertools::{Itertools, iproduct};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::vector::Vector;
use crate::{Error, ZERO};

/// A row-major matrix.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// The entries in row-major order.
    entries: Vec<BigInt>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Returns a matrix with no rows and no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns an r×c zero matrix.
    pub fn zero(r: usize, c: usize) -> Self {
        Self {
            entries: vec![BigInt::zero(); r * c],
            rows: r,
            cols: c,
        }
    }

    /// Creates a matrix from its entries in row-major order.
    pub fn new(r: usize, c: usize, entries: Vec<BigInt>) -> Result<Self, Error> {
        if entries.len() != r * c {
            return Err(Error::ShapeMismatch {
                op: "new",
                left: (r, c),
                right: (entries.len(), 1),
            });
        }

        Ok(Self { entries, rows: r, cols: c })
    }

    /// Creates a matrix from an array of rows.
    pub fn from_array<U: Into<BigInt>, const RS: usize, const CS: usize>(
        a: [[U; CS]; RS],
    ) -> Self {
        let entries = a.into_iter().flatten().map(Into::into).collect();
        Self { entries, rows: RS, cols: CS }
    }

    /// Creates a matrix with the given vectors as rows.
    /// The number of columns is the length of the longest vector.
    pub fn from_rows(rows: &[Vector]) -> Self {
        let cols = rows.iter().map(Vector::len).max().unwrap_or(0);
        let entries = iproduct!(rows.iter(), 0..cols)
            .map(|(r, c)| r.get(c).clone())
            .collect();
        Self { entries, rows: rows.len(), cols }
    }

    /// Creates a matrix with the given vectors as columns.
    /// The number of rows is the length of the longest vector.
    pub fn from_columns(cols: &[Vector]) -> Self {
        let rows = cols.iter().map(Vector::len).max().unwrap_or(0);
        let entries = iproduct!(0..rows, cols.iter())
            .map(|(r, c)| c.get(r).clone())
            .collect();
        Self { entries, rows, cols: cols.len() }
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The number of rows of the matrix.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of the matrix.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Is the matrix empty, i.e. has it zero rows or columns?
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the entry at row `r` and column `c`.
    /// Entries outside of the matrix are zero.
    pub fn get(&self, r: usize, c: usize) -> &BigInt {
        if r < self.rows && c < self.cols {
            &self.entries[r * self.cols + c]
        } else {
            &*ZERO
        }
    }

    /// Returns a copy of the matrix with the entry at row `r` and column `c`
    /// replaced. If the entry is outside of the matrix, then the copy has
    /// enough rows and columns to contain it and the new entries are zero.
    pub fn set<V: Into<BigInt>>(&self, r: usize, c: usize, value: V) -> Self {
        let rows = self.rows.max(r + 1);
        let cols = self.cols.max(c + 1);

        let mut entries: Vec<BigInt> = if cols == self.cols {
            let mut entries = self.entries.clone();
            entries.resize(rows * cols, BigInt::zero());
            entries
        } else {
            iproduct!(0..rows, 0..cols)
                .map(|(i, j)| self.get(i, j).clone())
                .collect()
        };

        entries[r * cols + c] = value.into();
        Self { entries, rows, cols }
    }

    /// The stored entries of row `r`.
    fn row_slice(&self, r: usize) -> &[BigInt] {
        &self.entries[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns row `r` as a vector with one entry per column.
    /// Rows past the end of the matrix are zero.
    pub fn row(&self, r: usize) -> Vector {
        if r >= self.rows {
            return Vector::zeros(self.cols);
        }

        Vector::from_entries(self.row_slice(r))
    }

    /// Returns column `c` as a vector with one entry per row.
    /// Columns past the end of the matrix are zero.
    pub fn column(&self, c: usize) -> Vector {
        if c >= self.cols {
            return Vector::zeros(self.rows);
        }

        (0..self.rows).map(|r| self.get(r, c).clone()).collect()
    }

    /// Returns all rows.
    pub fn rows(&self) -> Vec<Vector> {
        (0..self.rows).map(|r| self.row(r)).collect()
    }

    /// Returns all columns.
    pub fn columns(&self) -> Vec<Vector> {
        (0..self.cols).map(|c| self.column(c)).collect()
    }

    /// Returns an iterator over the entries in row-major order.
    pub fn entries_row_major(&self) -> std::slice::Iter<'_, BigInt> {
        self.entries.iter()
    }

    /// Creates the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        let entries = iproduct!(0..self.cols, 0..self.rows)
            .map(|(c, r)| self.get(r, c).clone())
            .collect();
        Self { entries, rows: self.cols, cols: self.rows }
    }

    /// Adds two matrices of the same shape.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                op: "add",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let entries = self
            .entries
            .iter()
            .zip(&rhs.entries)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { entries, rows: self.rows, cols: self.cols })
    }

    /// Computes the matrix product `self * rhs`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch {
                op: "mul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let entries = iproduct!(0..self.rows, 0..rhs.cols)
            .map(|(r, c)| {
                (0..self.cols).fold(BigInt::zero(), |acc, k| {
                    acc + self.get(r, k) * rhs.get(k, c)
                })
            })
            .collect();
        Ok(Self { entries, rows: self.rows, cols: rhs.cols })
    }

    /// Computes the matrix-vector product `self * rhs`. Entries of `rhs` past
    /// the number of columns are ignored and missing ones are zero.
    pub fn mul_vec_post(&self, rhs: &Vector) -> Vector {
        (0..self.rows)
            .map(|r| {
                self.row_slice(r)
                    .iter()
                    .zip(rhs.iter())
                    .fold(BigInt::zero(), |acc, (a, b)| acc + a * b)
            })
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = BigInt;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        self.get(r, c)
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|r| self.row_slice(r)))
            .finish()
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            write!(f, "[{}]", self.row_slice(r).iter().join(" "))?;
        }
        write!(f, "]")
    }
}
