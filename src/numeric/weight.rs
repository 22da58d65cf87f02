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

use std::ops::{Add, Mul, Neg, Sub};

use crate::numeric::scalar::Scalar;

/// Exact rational stencil weight `num / den`, kept in lowest terms with a
/// positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Weight {
    num: i64,
    den: i64,
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Weight {
    pub const ZERO: Weight = Weight { num: 0, den: 1 };
    pub const ONE: Weight = Weight { num: 1, den: 1 };

    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "stencil weight with zero denominator");
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num, den);
        if g == 0 {
            Weight { num: 0, den: 1 }
        } else {
            Weight {
                num: num / g,
                den: den / g,
            }
        }
    }

    #[inline]
    pub const fn num(&self) -> i64 {
        self.num
    }

    #[inline]
    pub const fn den(&self) -> i64 {
        self.den
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    #[inline]
    pub fn to_scalar<T: Scalar>(&self) -> T {
        T::from_num_den(self.num, self.den)
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Weight) -> Weight {
        self + (-rhs)
    }
}

impl Neg for Weight {
    type Output = Weight;

    fn neg(self) -> Weight {
        Weight {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Mul<i64> for Weight {
    type Output = Weight;

    fn mul(self, rhs: i64) -> Weight {
        Weight::new(self.num * rhs, self.den)
    }
}

impl Mul for Weight {
    type Output = Weight;

    fn mul(self, rhs: Weight) -> Weight {
        Weight::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}
