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

//! The tolerant comparison shared by [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) equality.
//!
//! Reduction introduces rounding noise, so two numbers are considered
//! equal when they match exactly or when their difference, rounded to
//! [`ROUNDING_DECIMALS`] places, is not larger than [`TOLERANCE`].

use crate::Float;

/// The largest (rounded) difference between two numbers that are
/// still considered equal.
pub const TOLERANCE: Float = 0.0001;

/// The number of decimal places the difference is rounded to before
/// comparing it against [`TOLERANCE`].
pub const ROUNDING_DECIMALS: i32 = 8;

/// Rounds `x` to `decimals` decimal places.
fn round_to(x: Float, decimals: i32) -> Float {
    let factor = (10.0 as Float).powi(decimals);
    (x * factor).round() / factor
}

/// Checks whether `a` and `b` are equal(ish).
///
/// ```
/// use matrix::approx_eq;
/// assert!(approx_eq(1.0010, 1.0011));
/// assert!(!approx_eq(1.0010, 1.0012));
/// ```
pub fn approx_eq(a: Float, b: Float) -> bool {
    a == b || round_to(a - b, ROUNDING_DECIMALS).abs() <= TOLERANCE
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_exact() {
        assert!(approx_eq(0.0, 0.0));
        assert!(approx_eq(-0.0, 0.0));
        assert!(approx_eq(Float::INFINITY, Float::INFINITY));
        assert!(approx_eq(1e300, 1e300));
    }

    #[test]
    fn test_within_tolerance() {
        assert!(approx_eq(1.0010, 1.0011));
        assert!(approx_eq(1.0011, 1.0010));
        assert!(approx_eq(1.0, 0.99999999));
        assert!(approx_eq(-2.0, -2.00005));
    }

    #[test]
    fn test_outside_tolerance() {
        assert!(!approx_eq(1.0010, 1.0012));
        assert!(!approx_eq(1.0012, 1.0010));
        assert!(!approx_eq(1.0, 2.0));
        assert!(!approx_eq(Float::NAN, Float::NAN));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 8), 0.12345679);
        assert_eq!(round_to(-0.5, 0), -1.0);
    }
}
