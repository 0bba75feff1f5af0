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
use crate::observer::{MatrixObserver, NoObserver};
use crate::tolerance::approx_eq;
use crate::Matrix;
use serde::{Deserialize, Serialize};

/// The state of a system of linear equations, written as an
/// augmented [`Matrix`] (i.e., the last column contains the constants)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemState {
    /// There is exactly one solution
    Consistent,
    /// There is no solution
    Inconsistent,
    /// There are infinitely many solutions
    Dependent,
}

impl std::fmt::Display for SystemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SystemState::Consistent => "consistent",
            SystemState::Inconsistent => "inconsistent",
            SystemState::Dependent => "dependent",
        };
        write!(f, "{}", s)
    }
}

impl Matrix {
    /// Transforms `self` into its [Reduced Row Echelon Form](https://en.wikipedia.org/wiki/Row_echelon_form),
    /// using [Gaussian Elimination](https://en.wikipedia.org/wiki/Gaussian_elimination).
    ///
    /// The last column is treated as the constants of an augmented system,
    /// so it is never used as a pivot.
    ///
    /// # Note
    /// Rows are never swapped. When a pivot is zero, its row is not
    /// normalized and the matrix might not end up fully reduced.
    pub fn reduce_to_rref(&mut self) {
        self.reduce_to_rref_with(&mut NoObserver)
    }

    /// Same as [`Matrix::reduce_to_rref`], but tells `observer` about
    /// every row that is replaced.
    pub fn reduce_to_rref_with(&mut self, observer: &mut dyn MatrixObserver) {
        let steps = self.height().min(self.width() - 1);
        log::debug!(
            "reducing {}x{} matrix in {} steps",
            self.height(),
            self.width(),
            steps
        );

        for i in 0..steps {
            // Make the pivot equal to 1.
            let pivot = self.rows[i][i];
            if pivot != 0.0 {
                let normalized = self.rows[i].scale(1. / pivot);
                self.replace_row(i, normalized, observer);
            }

            // Eliminate column `i` from all other rows
            for j in 0..self.height() {
                if j == i {
                    continue;
                }
                let other = self.rows[j][i];
                if other == 0.0 {
                    continue;
                }
                let pivot_row = &self.rows[i];
                let same_sign = (other < 0.0 && pivot_row[i] < 0.0)
                    || (other > 0.0 && pivot_row[i] > 0.0);
                let s = if same_sign { -other.abs() } else { other.abs() };
                let new_row = &self.rows[j] + &pivot_row.scale(s);
                self.replace_row(j, new_row, observer);
            }
        }
    }

    /// Reduces `self` (see [`Matrix::reduce_to_rref`]) and classifies the
    /// system it represents by looking at its last row.
    ///
    /// `self` is mutated in the process. Returns an error if the
    /// matrix has less than two columns.
    pub fn system_state(&mut self) -> Result<SystemState> {
        self.system_state_with(&mut NoObserver)
    }

    /// Same as [`Matrix::system_state`], but tells `observer` about
    /// every row that is replaced.
    pub fn system_state_with(&mut self, observer: &mut dyn MatrixObserver) -> Result<SystemState> {
        let (nrows, ncols) = self.size();
        if ncols < 2 {
            return Err(LinalgError::MatrixPrecondition(format!(
                "An augmented system needs at least two columns... found {}",
                ncols
            )));
        }

        self.reduce_to_rref_with(observer);

        let last = &self.rows[nrows - 1];
        let state = if approx_eq(last[ncols - 2], 1.0) {
            SystemState::Consistent
        } else if approx_eq(last[ncols - 1], 0.0) {
            SystemState::Dependent
        } else {
            SystemState::Inconsistent
        };
        log::debug!("system is {}", state);
        Ok(state)
    }
}
