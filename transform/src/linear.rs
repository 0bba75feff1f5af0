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

//! Transformations that work in any number of dimensions

use matrix::{Float, LinalgError, Matrix, Result};

fn check_dimension(size: usize, dimension: usize) -> Result<()> {
    if dimension >= size {
        return Err(LinalgError::IndexOutOfRange {
            index: dimension,
            len: size,
        });
    }
    Ok(())
}

/// Projects onto every axis but `dimension`; i.e., an identity matrix
/// of `size` whose `dimension` diagonal element is zero.
pub fn orthogonal_projection(size: usize, dimension: usize) -> Result<Matrix> {
    check_dimension(size, dimension)?;
    let mut m = Matrix::identity(size)?;
    m.set(dimension, dimension, 0.)?;
    Ok(m)
}

/// Scales the `dimension` axis by `factor`, leaving the others untouched
pub fn scale(size: usize, dimension: usize, factor: Float) -> Result<Matrix> {
    check_dimension(size, dimension)?;
    let mut m = Matrix::identity(size)?;
    m.set(dimension, dimension, factor)?;
    Ok(m)
}

/// Scales all axes by `factor`
pub fn uniform_scale(size: usize, factor: Float) -> Result<Matrix> {
    Ok(Matrix::identity(size)?.scale(factor))
}

/// Shears the `dimension` axis by `factor`. The result is an identity
/// matrix whose row `dimension` contains `factor` in every other column.
///
/// ```
/// use matrix::{Matrix, Vector};
///
/// let expected = Matrix::new(vec![
///     Vector::new(vec![1., 0.]).unwrap(),
///     Vector::new(vec![2., 1.]).unwrap(),
/// ]).unwrap();
/// assert_eq!(transform::shear(2, 1, 2.).unwrap(), expected);
/// ```
pub fn shear(size: usize, dimension: usize, factor: Float) -> Result<Matrix> {
    check_dimension(size, dimension)?;
    let mut m = Matrix::identity(size)?;
    for c in (0..size).filter(|c| *c != dimension) {
        m.set(dimension, c, factor)?;
    }
    Ok(m)
}

/// Mirrors the `dimension` axis
pub fn reflection(size: usize, dimension: usize) -> Result<Matrix> {
    scale(size, dimension, -1.)
}

/// Combines several transformations into one. The first one in
/// `transformations` is the first one to be applied, so the result is
/// $`M_n \times ... \times M_2 \times M_1`$.
pub fn concatenate(transformations: &[Matrix]) -> Result<Matrix> {
    let (last, rest) = transformations
        .split_last()
        .ok_or_else(|| {
            LinalgError::MatrixPrecondition("There are no transformations to concatenate".to_string())
        })?;
    log::debug!("concatenating {} transformations", transformations.len());
    rest.iter()
        .rev()
        .try_fold(last.clone(), |acc, m| acc.dot_matrix(m))
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{apply, from_rows};
    use matrix::Vector;

    #[test]
    fn test_orthogonal_projection() -> Result<()> {
        let p = orthogonal_projection(3, 1)?;
        assert_eq!(p, from_rows([[1., 0., 0.], [0., 0., 0.], [0., 0., 1.]])?);
        assert_eq!(
            orthogonal_projection(3, 3),
            Err(LinalgError::IndexOutOfRange { index: 3, len: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_scale() -> Result<()> {
        assert_eq!(scale(2, 0, 3.)?, from_rows([[3., 0.], [0., 1.]])?);
        assert_eq!(uniform_scale(2, 3.)?, from_rows([[3., 0.], [0., 3.]])?);
        Ok(())
    }

    #[test]
    fn test_shear() -> Result<()> {
        assert_eq!(shear(2, 1, 2.)?, from_rows([[1., 0.], [2., 1.]])?);
        assert_eq!(
            shear(3, 0, 0.5)?,
            from_rows([[1., 0.5, 0.5], [0., 1., 0.], [0., 0., 1.]])?
        );
        assert!(shear(2, 2, 1.).is_err());
        Ok(())
    }

    #[test]
    fn test_reflection() -> Result<()> {
        let r = reflection(3, 2)?;
        assert_eq!(r.determinant()?, -1.);
        let v = Vector::new(vec![1., 2., 3.])?;
        assert_eq!(apply(&r, &v)?, Vector::new(vec![1., 2., -3.])?);
        Ok(())
    }

    #[test]
    fn test_concatenate() -> Result<()> {
        let s = scale(2, 0, 2.)?;
        let r = reflection(2, 0)?;
        let sh = shear(2, 1, 1.)?;

        // Scale first, then shear.
        let c = concatenate(&[s.clone(), sh.clone()])?;
        assert_eq!(c, sh.dot_matrix(&s)?);

        let c = concatenate(&[s.clone(), r.clone(), sh.clone()])?;
        assert_eq!(c, sh.dot_matrix(&r)?.dot_matrix(&s)?);

        assert_eq!(concatenate(&[r.clone()])?, r);
        assert!(concatenate(&[]).is_err());
        Ok(())
    }
}
