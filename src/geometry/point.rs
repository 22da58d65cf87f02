// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

#[derive(Clone, Debug, PartialEq)]
pub struct Point3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn from_vals<V>(vals: [V; 3]) -> Self
    where
        V: Into<T>,
    {
        let [x, y, z] = vals;
        Self::new(x.into(), y.into(), z.into())
    }

    pub fn from_f64s(x: f64, y: f64, z: f64) -> Self {
        Self::new(T::from_float(x), T::from_float(y), T::from_float(z))
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Position as an `f64` vector from the origin. Lossy for exact scalars.
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(
            self.coords[0].to_f64_lossy(),
            self.coords[1].to_f64_lossy(),
            self.coords[2].to_f64_lossy(),
        )
    }

    pub fn scaled(&self, s: &T) -> Self {
        Self::new(
            self.coords[0].clone() * s.clone(),
            self.coords[1].clone() * s.clone(),
            self.coords[2].clone() * s.clone(),
        )
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.coords[0].clone() + other.coords[0].clone(),
            self.coords[1].clone() + other.coords[1].clone(),
            self.coords[2].clone() + other.coords[2].clone(),
        )
    }
}

impl<T: Scalar> Default for Point3<T> {
    fn default() -> Self {
        Self::origin()
    }
}
