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

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};

/// Number type the triangulation predicates are evaluated in.
///
/// Comparisons are plain `PartialOrd`: no tolerance is applied, so a corner
/// is convex only when its cross product is strictly positive.
pub trait Scalar:
    Clone
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + ToPrimitive
{
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Returns -1, 0, or +1. Incomparable values (NaN) report 0.
    fn sign(&self) -> i8 {
        let zero = Self::zero();
        if *self > zero {
            1
        } else if *self < zero {
            -1
        } else {
            0
        }
    }

    fn is_finite(&self) -> bool {
        self.to_f64().is_some_and(f64::is_finite)
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }
}

impl Scalar for f32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn sign_of_floats() {
        assert_eq!(2.5_f64.sign(), 1);
        assert_eq!((-0.5_f32).sign(), -1);
        assert_eq!(0.0_f64.sign(), 0);
        assert_eq!(f64::NAN.sign(), 0);
    }

    #[test]
    fn finiteness() {
        assert!(1.0_f64.is_finite());
        assert!(!f64::INFINITY.is_finite());
        assert!(!f32::NAN.is_finite());
    }

    #[test]
    fn num_den() {
        assert_eq!(f64::from_num_den(1, 4), 0.25);
    }
}
