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

//! The main `linalg` crate, putting the dense [`matrix`] kernel and the
//! named [`transform`]ations together.
//!
//! ```rust
//! use linalg::{Matrix, SystemState, Vector};
//!
//! // x + 2y = 2; x + y = 3
//! let mut system = Matrix::new(vec![
//!     Vector::new(vec![1., 2., 2.]).unwrap(),
//!     Vector::new(vec![1., 1., 3.]).unwrap(),
//! ]).unwrap();
//! assert_eq!(system.system_state().unwrap(), SystemState::Consistent);
//! assert_eq!(system[0], Vector::new(vec![1., 0., 4.]).unwrap());
//! assert_eq!(system[1], Vector::new(vec![0., 1., -1.]).unwrap());
//! ```

// Re-exports
pub use matrix::*;
pub use transform;
