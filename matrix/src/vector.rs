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
use crate::tolerance::approx_eq;
use crate::Float;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An ordered, fixed-length list of numbers.
///
/// The number of elements is decided when the [`Vector`] is created
/// and never changes, although the elements themselves can be
/// modified in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Float>", into = "Vec<Float>")]
pub struct Vector {
    // Never empty
    data: Vec<Float>,
}

impl Vector {
    /// Creates a [`Vector`] containing `data`.
    ///
    /// Returns an error if `data` is empty.
    pub fn new(data: Vec<Float>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::VectorConstruction(
                "A Vector must contain at least one element".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Wraps `data` without checking it. Callers guarantee it is not empty.
    pub(crate) fn from_raw(data: Vec<Float>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    /// Creates a [`Vector`] by copying the elements in `data`.
    pub fn from_slice(data: &[Float]) -> Result<Self> {
        Self::new(data.to_vec())
    }

    /// Creates a [`Vector`] of `size` elements, all of them zero.
    ///
    /// Returns an error if `size` is zero.
    pub fn zeros(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LinalgError::VectorConstruction(format!(
                "The size of a Vector must be positive... found {}",
                size
            )));
        }
        Ok(Self {
            data: vec![0.0; size],
        })
    }

    /// The number of elements in the [`Vector`]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`, as a [`Vector`] cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Result<Float> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Sets the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, v: Float) -> Result<Float> {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(x) => Ok(std::mem::replace(x, v)),
            None => Err(LinalgError::IndexOutOfRange { index, len }),
        }
    }

    /// Borrows the elements
    pub fn as_slice(&self) -> &[Float] {
        &self.data
    }

    /// Iterates over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Float> {
        self.data.iter()
    }

    /// Iterates mutably over the elements
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Float> {
        self.data.iter_mut()
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::VectorArithmetic {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }

    /// Adds `self` and `other`, element by element.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Vector {
            data: self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        })
    }

    /// Substracts `other` from `self`, element by element.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.add(&other.scale(-1.0))
    }

    /// Multiplies every element by `s`
    pub fn scale(&self, s: Float) -> Vector {
        Vector {
            data: self.iter().map(|a| a * s).collect(),
        }
    }

    /// Calculates the dot product between `self` and `other`
    pub fn dot(&self, other: &Vector) -> Result<Float> {
        self.check_len(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// The magnitude of the [`Vector`]; i.e., $`\sqrt{v \cdot v}`$
    pub fn length(&self) -> Float {
        self.iter().map(|a| a * a).sum::<Float>().sqrt()
    }

    /// Checks whether two vectors have the same length and equal(ish)
    /// elements. See [`approx_eq`].
    pub fn compare(&self, other: &Vector) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

/// Hashes the exact bits of each element (`-0.0` is treated as `0.0`).
///
/// Equality is tolerant, so two vectors that are equal but not
/// identical may hash differently. Do not rely on [`Vector`] as a
/// map key.
impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for x in self.iter() {
            (x + 0.0).to_bits().hash(state);
        }
    }
}

impl TryFrom<Vec<Float>> for Vector {
    type Error = LinalgError;

    fn try_from(data: Vec<Float>) -> Result<Self> {
        Vector::new(data)
    }
}

impl From<Vector> for Vec<Float> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl std::ops::IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Float;
    type IntoIter = std::slice::Iter<'a, Float>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl std::ops::Add<&Vector> for &Vector {
    type Output = Vector;

    /// # Panics
    /// Panics if the vectors have different lengths. Use [`Vector::add`]
    /// to get an error instead.
    fn add(self, other: &Vector) -> Self::Output {
        if self.len() != other.len() {
            panic!("Vectors being added are of different sizes");
        }
        Vector {
            data: self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        }
    }
}

impl std::ops::Sub<&Vector> for &Vector {
    type Output = Vector;

    /// # Panics
    /// Panics if the vectors have different lengths.
    fn sub(self, other: &Vector) -> Self::Output {
        if self.len() != other.len() {
            panic!("Vectors being substracted are of different sizes");
        }
        Vector {
            data: self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        }
    }
}

impl std::ops::Mul<Float> for &Vector {
    type Output = Vector;

    fn mul(self, s: Float) -> Self::Output {
        self.scale(s)
    }
}

impl std::ops::Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
