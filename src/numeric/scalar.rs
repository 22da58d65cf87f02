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

use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Sub},
};

use num_traits::{One, ToPrimitive, Zero};

/// Coordinate type of a mesh.
///
/// Geometry refinement only ever forms rational combinations of positions, so
/// any exact field works here. Shading always happens in `f64`, through
/// [`Scalar::to_f64_lossy`].
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + ToPrimitive
    + From<i32>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn from_num_den(num: i64, den: i64) -> Self;

    fn from_float(value: f64) -> Self;

    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_num_den(num: i64, den: i64) -> Self {
        num as f64 / den as f64
    }

    #[inline]
    fn from_float(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        *self
    }
}
