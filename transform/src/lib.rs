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

#![deny(missing_docs)]

//! Named transformations (projections, scaling, shear, reflections,
//! rotations and affine translations) built on top of the [`matrix`] crate.
//!
//! Nothing in here touches the internals of [`Matrix`] or [`Vector`]; every
//! transformation is assembled through their public constructors.
//!
//! ```rust
//! use transform::{apply, degrees, rotation_2d};
//! use matrix::Vector;
//!
//! let r = rotation_2d(degrees(90.)).unwrap();
//! let v = Vector::new(vec![1., 0.]).unwrap();
//! assert_eq!(apply(&r, &v).unwrap(), Vector::new(vec![0., 1.]).unwrap());
//! ```

use matrix::{Float, LinalgError, Matrix, Result, Vector};

mod affine;
mod linear;
mod spatial;

pub use crate::affine::{
    affine_translation, chain_affine, cushion, rank_down, rank_up, translate,
};
pub use crate::linear::{
    concatenate, orthogonal_projection, reflection, scale, shear, uniform_scale,
};
pub use crate::spatial::{
    angle_between, cross, rotation_2d, rotation_x, rotation_y, rotation_z, skew_xy, skew_xz,
    skew_zy,
};

/// Transforms degrees into radians
pub fn degrees(deg: Float) -> Float {
    deg.to_radians()
}

/// Applies the transformation `m` to `v`; i.e., calculates
/// $`M \times v`$, treating `v` as a column.
pub fn apply(m: &Matrix, v: &Vector) -> Result<Vector> {
    if m.width() != v.len() {
        return Err(LinalgError::MatrixArithmetic(format!(
            "A {}x{} transformation cannot be applied to a Vector of {} elements",
            m.height(),
            m.width(),
            v.len()
        )));
    }
    let data = m
        .iter()
        .map(|row| row.dot(v))
        .collect::<Result<Vec<Float>>>()?;
    Vector::new(data)
}

/// Builds a square [`Matrix`] from its rows
pub(crate) fn from_rows<const N: usize>(rows: [[Float; N]; N]) -> Result<Matrix> {
    let data = rows.iter().flatten().copied().collect();
    Matrix::from_data(N, N, data)
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_apply() -> Result<()> {
        let m = from_rows([[1., 2.], [3., 4.]])?;
        let v = Vector::new(vec![1., 1.])?;
        assert_eq!(apply(&m, &v)?, Vector::new(vec![3., 7.])?);

        let v = Vector::new(vec![1., 1., 1.])?;
        assert!(matches!(
            apply(&m, &v),
            Err(LinalgError::MatrixArithmetic(_))
        ));
        Ok(())
    }

    #[test]
    fn test_degrees() {
        assert!((degrees(180.) - std::f64::consts::PI).abs() < 1e-12);
    }
}
