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

//! Hooks for watching a [`Matrix`] while it is being reduced or
//! expanded.
//!
//! Observers are handed in explicitly to the operations that emit
//! events (e.g., [`Matrix::reduce_to_rref_with`]) and are called
//! synchronously, before the operation returns. They are a side
//! channel: results never depend on them.

use crate::{Matrix, Vector};

/// Something that happened to a [`Matrix`]
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixEvent {
    /// A row was replaced. Contains the index of the row and a copy of
    /// the new row.
    RowChanged {
        /// The index of the replaced row
        row: usize,
        /// A snapshot of the new row
        new_row: Vector,
    },

    /// A minor was built while expanding a determinant
    MinorCreated(Matrix),
}

impl std::fmt::Display for MatrixEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixEvent::RowChanged { row, new_row } => {
                write!(f, "row {} changed to |{}|", row, new_row)
            }
            MatrixEvent::MinorCreated(m) => {
                let (h, w) = m.size();
                write!(f, "created {}x{} minor", h, w)
            }
        }
    }
}

/// Receives [`MatrixEvent`]s
pub trait MatrixObserver {
    /// Called every time something happens
    fn notify(&mut self, event: &MatrixEvent);
}

/// An observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl MatrixObserver for NoObserver {
    fn notify(&mut self, _event: &MatrixEvent) {}
}

/// Forwards every event to the [`log`] facade, at `debug` level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MatrixObserver for LogObserver {
    fn notify(&mut self, event: &MatrixEvent) {
        log::debug!("{}", event);
    }
}

/// Records every event, in order
impl MatrixObserver for Vec<MatrixEvent> {
    fn notify(&mut self, event: &MatrixEvent) {
        self.push(event.clone())
    }
}

impl<F: FnMut(&MatrixEvent)> MatrixObserver for F {
    fn notify(&mut self, event: &MatrixEvent) {
        self(event)
    }
}
