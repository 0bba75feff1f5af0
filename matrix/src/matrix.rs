/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::error::{LinalgError, MatrixConstructionFault, Result};
use crate::observer::{MatrixEvent, MatrixObserver};
use crate::{Float, Vector};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A dense matrix, stored as a list of rows.
///
/// A [`Matrix`] always has at least one row, and all its rows
/// have the same length. These invariants are checked when the
/// matrix is built and cannot be broken afterwards.
///
/// Mutation requires `&mut self`, so a [`Matrix`] has a single
/// writer at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector>", into = "Vec<Vector>")]
pub struct Matrix {
    // Never empty, all of the same length
    pub(crate) rows: Vec<Vector>,
}

impl Matrix {
    /// Creates a [`Matrix`] whose rows are `rows`.
    ///
    /// Returns an error if there are no rows or if the rows
    /// have different lengths.
    pub fn new(rows: Vec<Vector>) -> Result<Self> {
        let first = rows.first().ok_or(MatrixConstructionFault::NoRows)?;
        let ncols = first.len();
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(MatrixConstructionFault::RaggedRows.into());
        }
        Ok(Self { rows })
    }

    /// Creates a [`Matrix`] from rows that might not be there.
    ///
    /// This is meant for callers that collect rows from somewhere
    /// else and might have gaps. A missing list returns a
    /// [`LinalgError::NullArgument`]; a missing row, a
    /// [`LinalgError::MatrixConstruction`] error.
    ///
    /// ```
    /// use matrix::{LinalgError, Matrix, Vector};
    ///
    /// let rows = vec![None, Some(Vector::new(vec![1., 2.]).unwrap())];
    /// let err = Matrix::from_optional_rows(Some(rows)).unwrap_err();
    /// assert_eq!(err.to_string(), "No vector can be null.");
    ///
    /// let err = Matrix::from_optional_rows(None).unwrap_err();
    /// assert_eq!(err, LinalgError::NullArgument("rows"));
    /// ```
    pub fn from_optional_rows(rows: Option<Vec<Option<Vector>>>) -> Result<Self> {
        let rows = rows.ok_or(LinalgError::NullArgument("rows"))?;
        if rows.is_empty() {
            return Err(MatrixConstructionFault::NoRows.into());
        }
        let rows = rows
            .into_iter()
            .collect::<Option<Vec<Vector>>>()
            .ok_or(MatrixConstructionFault::MissingRow)?;
        Self::new(rows)
    }

    /// Creates a [`Matrix`] from a vector containing its elements,
    /// ordered by row
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<Float>) -> Result<Self> {
        if nrows == 0 {
            return Err(MatrixConstructionFault::NoRows.into());
        }
        if ncols == 0 {
            return Err(LinalgError::VectorConstruction(
                "A Vector must contain at least one element".to_string(),
            ));
        }
        if Self::n_elements(nrows, ncols)? != data.len() {
            return Err(MatrixConstructionFault::RaggedRows.into());
        }
        let rows = data
            .chunks(ncols)
            .map(|chunk| Vector::from_raw(chunk.to_vec()))
            .collect();
        Ok(Self { rows })
    }

    /// Creates a [`Matrix`] of `nrows` and `ncols` full of zeroes
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        let n = Self::n_elements(nrows, ncols)?;
        Self::from_data(nrows, ncols, vec![0.0; n])
    }

    fn n_elements(nrows: usize, ncols: usize) -> Result<usize> {
        nrows
            .checked_mul(ncols)
            .ok_or_else(|| MatrixConstructionFault::TooLarge { nrows, ncols }.into())
    }

    /// Creates an Identity matrix of size NxN
    pub fn identity(n: usize) -> Result<Self> {
        let mut ret = Self::zeros(n, n)?;
        for (i, row) in ret.rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Ok(ret)
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Checks whether the number of rows equals the number of columns
    pub fn is_square(&self) -> bool {
        self.height() == self.width()
    }

    /// Borrows all the rows
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Iterates over the rows
    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.rows.iter()
    }

    /// Borrows one row
    pub fn row(&self, nrow: usize) -> Result<&Vector> {
        self.rows.get(nrow).ok_or(LinalgError::IndexOutOfRange {
            index: nrow,
            len: self.height(),
        })
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float> {
        self.row(nrow)?.get(ncol)
    }

    /// Sets an element into the matrix, returning the old value.
    ///
    /// This does not notify anyone.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float> {
        let len = self.height();
        self.rows
            .get_mut(nrow)
            .ok_or(LinalgError::IndexOutOfRange { index: nrow, len })?
            .set(ncol, v)
    }

    /// Puts `new_row` in place of row `nrow` and tells the `observer`.
    pub(crate) fn replace_row(
        &mut self,
        nrow: usize,
        new_row: Vector,
        observer: &mut dyn MatrixObserver,
    ) {
        debug_assert_eq!(new_row.len(), self.width());
        log::trace!("replacing row {} with |{}|", nrow, new_row);
        self.rows[nrow] = new_row;
        observer.notify(&MatrixEvent::RowChanged {
            row: nrow,
            new_row: self.rows[nrow].clone(),
        });
    }

    /* ARITHMETIC OPERATION */

    /// Adds `self` and `other`, row by row.
    pub fn add_matrix(&self, other: &Matrix) -> Result<Matrix> {
        if self.size() != other.size() {
            return Err(LinalgError::MatrixArithmetic(format!(
                "Matrices being added are of different sizes... found {:?} and {:?}",
                self.size(),
                other.size()
            )));
        }
        let rows = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<Vector>>>()?;
        Ok(Matrix { rows })
    }

    /// Multiplies every element by `s`
    pub fn scale(&self, s: Float) -> Matrix {
        Matrix {
            rows: self.iter().map(|r| r.scale(s)).collect(),
        }
    }

    /// Multiplies `self` by `other`.
    ///
    /// `other` is transposed first, so that every element of the result
    /// is the dot product between a row of `self` and a row of the
    /// transposed `other`.
    pub fn dot_matrix(&self, other: &Matrix) -> Result<Matrix> {
        if self.width() != other.height() {
            return Err(LinalgError::MatrixArithmetic(format!(
                "Size mismatch for Matrix multiplication... the other matrix must have {} rows, found {}",
                self.width(),
                other.height()
            )));
        }
        let columns = other.transpose();
        let mut rows = Vec::with_capacity(self.height());
        for row in self.iter() {
            let data = columns
                .iter()
                .map(|col| row.dot(col))
                .collect::<Result<Vec<Float>>>()?;
            rows.push(Vector::from_raw(data));
        }
        Ok(Matrix { rows })
    }

    /// Creates a new [`Matrix`] whose rows are the columns of `self`
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.width())
            .map(|c| Vector::from_raw(self.iter().map(|r| r[c]).collect()))
            .collect();
        Matrix { rows }
    }

    /// Checks if two matrices have the same size and equal(ish) rows.
    /// See [`Vector::compare`].
    pub fn compare(&self, other: &Matrix) -> bool {
        self.size() == other.size()
            && self.iter().zip(other.iter()).all(|(a, b)| a.compare(b))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

/// Hashes the rows. Same caveats as the [`Vector`] hash.
impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state)
    }
}

impl TryFrom<Vec<Vector>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vector>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vector> {
    fn from(m: Matrix) -> Self {
        m.rows
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|{}|", row)?;
        }
        Ok(())
    }
}

impl std::ops::Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, other: &Matrix) -> Self::Output {
        if self.size() != other.size() {
            panic!("Matrices being added are of different sizes");
        }
        Matrix {
            rows: self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        }
    }
}

impl std::ops::Mul<Float> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: Float) -> Self::Output {
        self.scale(s)
    }
}

impl std::ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Self::Output {
        match self.dot_matrix(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}
