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

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};
use rug::Integer;

use crate::numeric::scalar::Scalar;

/// Arbitrary-precision rational backed by `rug::Rational` (GMP).
///
/// Every predicate evaluated in this type is exact, so convexity and
/// containment never suffer from rounding.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Rational(pub rug::Rational);

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;

    // rug panics on a zero divisor; callers check `is_zero` first.
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational(rug::Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0().is_eq()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational(rug::Rational::from(1))
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Integer::from(self.0.trunc_ref()).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Integer::from(self.0.trunc_ref()).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational(rug::Rational::from(value))
    }
}

impl From<rug::Rational> for Rational {
    fn from(value: rug::Rational) -> Self {
        Rational(value)
    }
}

impl Scalar for Rational {
    fn from_num_den(num: i32, den: i32) -> Self {
        Rational(rug::Rational::from((num, den)))
    }

    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    // A rational is always finite, even when it overflows f64.
    fn is_finite(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{ToPrimitive, Zero};

    use super::Rational;
    use crate::numeric::scalar::Scalar;

    #[test]
    fn arithmetic_is_exact() {
        let third = Rational::from_num_den(1, 3);
        let sum = third.clone() + third.clone() + third;
        assert_eq!(sum, Rational::from(1));
    }

    #[test]
    fn sign_and_zero() {
        assert!(Rational::zero().is_zero());
        assert_eq!(Rational::from_num_den(-1, 7).sign(), -1);
        assert_eq!(Rational::from(3).sign(), 1);
    }

    #[test]
    fn converts_to_primitives() {
        let r = Rational::from_num_den(7, 2);
        assert_eq!(r.to_i64(), Some(3));
        assert_eq!(r.to_f64(), Some(3.5));
    }
}
