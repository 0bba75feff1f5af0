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

use thiserror::Error;

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// The invariant that was broken when building a [`Matrix`](crate::Matrix)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixConstructionFault {
    /// No rows were given
    #[error("You must pass in at least one vector.")]
    NoRows,

    /// One of the rows was missing
    #[error("No vector can be null.")]
    MissingRow,

    /// Rows have different lengths
    #[error("All the vectors must be the same size.")]
    RaggedRows,

    /// The number of elements does not fit in memory
    #[error("A matrix of {nrows} rows and {ncols} columns is too large.")]
    TooLarge {
        /// Requested rows
        nrows: usize,
        /// Requested columns
        ncols: usize,
    },
}

/// Everything that can go wrong in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A required argument was not given
    #[error("argument '{0}' cannot be null")]
    NullArgument(&'static str),

    /// A [`Vector`](crate::Vector) was created with no elements
    #[error("{0}")]
    VectorConstruction(String),

    /// Two vectors of different lengths were combined
    #[error("Vectors must have a matching amount of members (found {expected} and {found})")]
    VectorArithmetic {
        /// Length of the vector the operation was called on
        expected: usize,
        /// Length of the other operand
        found: usize,
    },

    /// A [`Matrix`](crate::Matrix) could not be built
    #[error(transparent)]
    MatrixConstruction(#[from] MatrixConstructionFault),

    /// Two matrices do not have compatible shapes
    #[error("{0}")]
    MatrixArithmetic(String),

    /// The matrix does not have the shape an operation requires
    /// (e.g., calculating the determinant of a non-square matrix)
    #[error("{0}")]
    MatrixPrecondition(String),

    /// An element, row or column does not exist
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of elements available
        len: usize,
    },
}
