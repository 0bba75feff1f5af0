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

//! Affine transformations in three dimensions, using homogeneous
//! coordinates (i.e., 4x4 matrices).

use crate::{apply, concatenate};
use matrix::{Float, LinalgError, Matrix, Result, Vector};

/// Appends a `1` to `v`, so it can be transformed by an affine matrix
pub fn rank_up(v: &Vector) -> Result<Vector> {
    let mut data = v.as_slice().to_vec();
    data.push(1.);
    Vector::new(data)
}

/// Removes the last element of `v`.
///
/// Fails if `v` has a single element.
pub fn rank_down(v: &Vector) -> Result<Vector> {
    let data = v.as_slice();
    Vector::from_slice(&data[..data.len() - 1])
}

/// A 4x4 matrix that moves points by `(dx, dy, dz)`
pub fn affine_translation(dx: Float, dy: Float, dz: Float) -> Result<Matrix> {
    let mut m = Matrix::identity(4)?;
    m.set(0, 3, dx)?;
    m.set(1, 3, dy)?;
    m.set(2, 3, dz)?;
    Ok(m)
}

/// Embeds a 3x3 linear transformation into a 4x4 affine one
pub fn cushion(m: &Matrix) -> Result<Matrix> {
    if m.size() != (3, 3) {
        return Err(LinalgError::MatrixPrecondition(format!(
            "Only 3x3 matrices can be cushioned... found {}x{}",
            m.height(),
            m.width()
        )));
    }
    let mut ret = Matrix::identity(4)?;
    for (r, row) in m.iter().enumerate() {
        for (c, x) in row.iter().enumerate() {
            ret.set(r, c, *x)?;
        }
    }
    Ok(ret)
}

/// Moves `point` (a Vector of 3 elements) by `(dx, dy, dz)`
pub fn translate(point: &Vector, dx: Float, dy: Float, dz: Float) -> Result<Vector> {
    chain_affine(point, dx, dy, dz, &[])
}

/// Applies every 3x3 transformation in `chain` to `point` (in order)
/// and then moves it by `(dx, dy, dz)`.
pub fn chain_affine(
    point: &Vector,
    dx: Float,
    dy: Float,
    dz: Float,
    chain: &[Matrix],
) -> Result<Vector> {
    let mut all = chain.iter().map(cushion).collect::<Result<Vec<Matrix>>>()?;
    all.push(affine_translation(dx, dy, dz)?);
    let m = concatenate(&all)?;
    rank_down(&apply(&m, &rank_up(point)?)?)
}
