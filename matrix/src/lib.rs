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

//! A small library for dense Vectors and Matrices of arbitrary size.
//!
//! Besides the basic arithmetic (adding, scaling, multiplying and
//! transposing), a [`Matrix`] can be reduced into its
//! [Reduced Row Echelon Form](https://en.wikipedia.org/wiki/Row_echelon_form)
//! (see [`Matrix::reduce_to_rref`]), it can classify the linear system it
//! represents (see [`SystemState`]) and it can calculate its determinant.
//!
//! All comparisons are tolerant (see [`approx_eq`]), as reducing a matrix
//! introduces rounding errors.
//!
//! ## Quickstart
//!
//! ```rust
//! use matrix::{Matrix, SystemState, Vector};
//!
//! // x = 2; y = 3; z = 0
//! let mut m = Matrix::new(vec![
//!     Vector::new(vec![1., 0., 0., 2.]).unwrap(),
//!     Vector::new(vec![0., 1., 0., 3.]).unwrap(),
//!     Vector::new(vec![0., 0., 1., 0.]).unwrap(),
//! ]).unwrap();
//!
//! assert_eq!(m.determinant().unwrap_err().to_string(), "The determinant is only defined for square matrices... found 3 rows and 4 columns");
//! assert_eq!(m.system_state().unwrap(), SystemState::Consistent);
//! ```
//!
//! ## Watching what happens
//!
//! The operations that mutate a [`Matrix`] or build minors have a `_with`
//! version that receives a [`MatrixObserver`]. Use [`LogObserver`] to send
//! everything to the [`log`] facade, or a `Vec<MatrixEvent>` to record it.

/// The kind of floating point number used in the library
pub type Float = f64;

mod determinant;
mod error;
mod matrix;
mod observer;
mod rref;
pub mod tolerance;
mod vector;

pub use crate::error::{LinalgError, MatrixConstructionFault, Result};
pub use crate::matrix::Matrix;
pub use crate::observer::{LogObserver, MatrixEvent, MatrixObserver, NoObserver};
pub use crate::rref::SystemState;
pub use crate::tolerance::approx_eq;
pub use crate::vector::Vector;
