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
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

use num_traits::{One, ToPrimitive, Zero};
use rug::Rational;

use crate::numeric::scalar::Scalar;

/// Arbitrary-precision rational coordinate.
///
/// Loop stencils have rational weights, so a mesh over `ExactRational`
/// refines its positions without any rounding.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    pub fn new(num: i64, den: i64) -> Self {
        ExactRational(Rational::from((num, den)))
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;

    fn add(mut self, rhs: ExactRational) -> ExactRational {
        self.0 += rhs.0;
        self
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;

    fn sub(mut self, rhs: ExactRational) -> ExactRational {
        self.0 -= rhs.0;
        self
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;

    fn mul(mut self, rhs: ExactRational) -> ExactRational {
        self.0 *= rhs.0;
        self
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl Div for ExactRational {
    type Output = ExactRational;

    fn div(mut self, rhs: ExactRational) -> ExactRational {
        self.0 /= rhs.0;
        self
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl Scalar for ExactRational {
    fn from_num_den(num: i64, den: i64) -> Self {
        ExactRational::new(num, den)
    }

    // Non-finite input has no rational value; it maps to zero.
    fn from_float(value: f64) -> Self {
        ExactRational(Rational::from_f64(value).unwrap_or_default())
    }
}
