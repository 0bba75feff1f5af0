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

use crate::error::{LinalgError, Result};
use crate::observer::{MatrixEvent, MatrixObserver, NoObserver};
use crate::{Float, Matrix, Vector};

/// The sign of the cofactor of element `(0, x)`.
///
/// Only valid when expanding along the first row.
fn cofactor_sign(x: usize) -> Float {
    if x % 2 == 0 {
        1.
    } else {
        -1.
    }
}

impl Matrix {
    /// Calculates the determinant of a square matrix by means of a
    /// [Laplace expansion](https://en.wikipedia.org/wiki/Laplace_expansion)
    /// along the first row.
    ///
    /// Returns an error if the matrix is not square.
    ///
    /// # Note
    /// The cost of this grows factorially with the size of the
    /// matrix, so it is only meant for small matrices.
    ///
    /// ```
    /// use matrix::{Matrix, Vector};
    ///
    /// let m = Matrix::new(vec![
    ///     Vector::new(vec![3., 1.]).unwrap(),
    ///     Vector::new(vec![4., 2.]).unwrap(),
    /// ]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 2.);
    /// ```
    pub fn determinant(&self) -> Result<Float> {
        self.determinant_with(&mut NoObserver)
    }

    /// Same as [`Matrix::determinant`], but tells `observer` about
    /// every minor that is built during the expansion.
    pub fn determinant_with(&self, observer: &mut dyn MatrixObserver) -> Result<Float> {
        if !self.is_square() {
            return Err(LinalgError::MatrixPrecondition(format!(
                "The determinant is only defined for square matrices... found {} rows and {} columns",
                self.height(),
                self.width()
            )));
        }
        Ok(self.expand(observer))
    }

    fn expand(&self, observer: &mut dyn MatrixObserver) -> Float {
        let n = self.height();
        match n {
            1 => self.rows[0][0],
            2 => self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0],
            _ => {
                let mut det = 0.0;
                for x in 0..n {
                    let minor = self.minor(x, 0);
                    log::trace!("expanding {}x{} minor of column {}", n - 1, n - 1, x);
                    observer.notify(&MatrixEvent::MinorCreated(minor.clone()));
                    det += self.rows[0][x] * minor.expand(observer) * cofactor_sign(x);
                }
                det
            }
        }
    }

    /// Builds the matrix that results from removing column `x` and
    /// row `y` from `self`.
    ///
    /// Returns an error if the matrix has a single row or column, or
    /// if `x` or `y` are out of bounds.
    pub fn sub_matrix(&self, x: usize, y: usize) -> Result<Matrix> {
        let (nrows, ncols) = self.size();
        if nrows < 2 || ncols < 2 {
            return Err(LinalgError::MatrixPrecondition(format!(
                "Cannot remove a row and a column from a {}x{} matrix",
                nrows, ncols
            )));
        }
        if x >= ncols {
            return Err(LinalgError::IndexOutOfRange {
                index: x,
                len: ncols,
            });
        }
        if y >= nrows {
            return Err(LinalgError::IndexOutOfRange {
                index: y,
                len: nrows,
            });
        }
        Ok(self.minor(x, y))
    }

    // Assumes the bounds have been checked
    fn minor(&self, x: usize, y: usize) -> Matrix {
        let ncols = self.width() - 1;
        let data: Vec<Float> = self
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != y)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(c, _)| *c != x)
                    .map(|(_, v)| *v)
            })
            .collect();

        Matrix {
            rows: data
                .chunks(ncols)
                .map(|chunk| Vector::from_raw(chunk.to_vec()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    fn m(rows: &[&[Float]]) -> Matrix {
        Matrix::new(
            rows.iter()
                .map(|r| Vector::from_slice(r).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_cofactor_sign() {
        assert_eq!(cofactor_sign(0), 1.);
        assert_eq!(cofactor_sign(1), -1.);
        assert_eq!(cofactor_sign(2), 1.);
        assert_eq!(cofactor_sign(7), -1.);
    }

    #[test]
    fn test_one_by_one() -> Result<()> {
        assert_eq!(m(&[&[-7.5]]).determinant()?, -7.5);
        Ok(())
    }

    #[test]
    fn test_two_by_two() -> Result<()> {
        assert_eq!(m(&[&[3., 1.], &[4., 2.]]).determinant()?, 2.);
        assert_eq!(m(&[&[1., 3.], &[2., 4.]]).determinant()?, -2.);
        Ok(())
    }

    #[test]
    fn test_three_by_three() -> Result<()> {
        let a = m(&[&[-4., -3., 3.], &[0., 2., -2.], &[1., 4., -1.]]);
        assert_eq!(a.determinant()?, -24.);
        Ok(())
    }

    #[test]
    fn test_four_by_four() -> Result<()> {
        let a = m(&[
            &[1., 0., 2., -1.],
            &[3., 0., 0., 5.],
            &[2., 1., 4., -3.],
            &[1., 0., 5., 0.],
        ]);
        assert_eq!(a.determinant()?, 30.);

        let eye = Matrix::identity(5)?;
        assert_eq!(eye.determinant()?, 1.);
        Ok(())
    }

    #[test]
    fn test_singular() -> Result<()> {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.], &[7., 8., 9.]]);
        assert_eq!(a.determinant()?, 0.);
        Ok(())
    }

    #[test]
    fn test_not_square() {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
        assert!(matches!(
            a.determinant(),
            Err(LinalgError::MatrixPrecondition(_))
        ));
    }

    #[test]
    fn test_minor_events() -> Result<()> {
        let a = m(&[&[-4., -3., 3.], &[0., 2., -2.], &[1., 4., -1.]]);
        let mut events: Vec<MatrixEvent> = Vec::new();
        let det = a.determinant_with(&mut events)?;
        assert_eq!(det, -24.);
        assert_eq!(
            events,
            vec![
                MatrixEvent::MinorCreated(m(&[&[2., -2.], &[4., -1.]])),
                MatrixEvent::MinorCreated(m(&[&[0., -2.], &[1., -1.]])),
                MatrixEvent::MinorCreated(m(&[&[0., 2.], &[1., 4.]])),
            ]
        );

        // Minors of minors are reported too
        let mut count = 0;
        Matrix::identity(4)?.determinant_with(&mut |_e: &MatrixEvent| count += 1)?;
        assert_eq!(count, 4 + 4 * 3);
        Ok(())
    }

    #[test]
    fn test_sub_matrix() -> Result<()> {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.], &[7., 8., 9.]]);
        assert_eq!(a.sub_matrix(0, 0)?, m(&[&[5., 6.], &[8., 9.]]));
        assert_eq!(a.sub_matrix(1, 2)?, m(&[&[1., 3.], &[4., 6.]]));

        let b = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
        assert_eq!(b.sub_matrix(2, 1)?, m(&[&[1., 2.]]));
        Ok(())
    }

    #[test]
    fn test_sub_matrix_fail() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        assert_eq!(
            a.sub_matrix(2, 0),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(a.sub_matrix(0, 2).is_err());
        assert!(matches!(
            m(&[&[1., 2.]]).sub_matrix(0, 0),
            Err(LinalgError::MatrixPrecondition(_))
        ));
    }
}
