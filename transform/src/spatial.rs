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

//! Transformations and products in two and three dimensions

use crate::from_rows;
use matrix::{Float, LinalgError, Matrix, Result, Vector};

/// A counter-clockwise rotation of `rads` radians in the plane
pub fn rotation_2d(rads: Float) -> Result<Matrix> {
    let (s, c) = rads.sin_cos();
    from_rows([[c, -s], [s, c]])
}

/// A rotation of `rads` radians around the X axis
pub fn rotation_x(rads: Float) -> Result<Matrix> {
    let (s, c) = rads.sin_cos();
    from_rows([[1., 0., 0.], [0., c, -s], [0., s, c]])
}

/// A rotation of `rads` radians around the Y axis
pub fn rotation_y(rads: Float) -> Result<Matrix> {
    let (s, c) = rads.sin_cos();
    from_rows([[c, 0., s], [0., 1., 0.], [-s, 0., c]])
}

/// A rotation of `rads` radians around the Z axis
pub fn rotation_z(rads: Float) -> Result<Matrix> {
    let (s, c) = rads.sin_cos();
    from_rows([[c, -s, 0.], [s, c, 0.], [0., 0., 1.]])
}

/// Skews X and Y proportionally to Z
pub fn skew_xy(x: Float, y: Float) -> Result<Matrix> {
    from_rows([[1., 0., x], [0., 1., y], [0., 0., 1.]])
}

/// Skews X and Z proportionally to Y
pub fn skew_xz(x: Float, z: Float) -> Result<Matrix> {
    from_rows([[1., x, 0.], [0., 1., 0.], [0., z, 1.]])
}

/// Skews Y and Z proportionally to X
pub fn skew_zy(y: Float, z: Float) -> Result<Matrix> {
    from_rows([[1., 0., 0.], [y, 1., 0.], [z, 0., 1.]])
}

fn check_r3(v: &Vector) -> Result<()> {
    if v.len() != 3 {
        return Err(LinalgError::VectorArithmetic {
            expected: 3,
            found: v.len(),
        });
    }
    Ok(())
}

/// The cross product between two vectors of three elements
pub fn cross(a: &Vector, b: &Vector) -> Result<Vector> {
    check_r3(a)?;
    check_r3(b)?;
    Vector::new(vec![
        a[1] * b[2] - b[1] * a[2],
        a[2] * b[0] - b[2] * a[0],
        a[0] * b[1] - b[0] * a[1],
    ])
}

/// The angle between two vectors of three elements, in radians,
/// calculated as $`\arcsin(|a \times b| / (|a| |b|))`$.
///
/// Note that this is always within $`[0, \pi/2]`$.
pub fn angle_between(a: &Vector, b: &Vector) -> Result<Float> {
    let c = cross(a, b)?;
    let ratio = c.length() / (a.length() * b.length());
    // Rounding can push the ratio slightly over 1
    Ok(ratio.min(1.).asin())
}
