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

use crate::geometry::point_2::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

/// Direction in which a ring of vertices is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Whether a corner with the given turn (see
    /// [`corner_turn`](crate::kernel::predicates::corner_turn)) is convex
    /// for a ring traversed in this direction.
    #[inline]
    pub fn is_convex_turn<T: Scalar>(self, turn: &T) -> bool {
        match self {
            Winding::CounterClockwise => *turn > T::zero(),
            Winding::Clockwise => *turn < T::zero(),
        }
    }
}

/// Twice the signed area enclosed by the ring (shoelace sum).
pub fn double_signed_area<T: Scalar>(points: &[Point2<T>]) -> T {
    let n = points.len();
    let mut sum = T::zero();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        sum = sum + (a.x.clone() * b.y.clone() - b.x.clone() * a.y.clone());
    }
    sum
}

/// Signed area of the ring, positive for counter-clockwise order.
pub fn signed_area<T: Scalar>(points: &[Point2<T>]) -> T {
    double_signed_area(points) / (T::one() + T::one())
}

/// Orientation of the ring, or `None` when it encloses no area.
pub fn winding<T: Scalar>(points: &[Point2<T>]) -> Option<Winding> {
    match double_signed_area(points).sign() {
        1 => Some(Winding::CounterClockwise),
        -1 => Some(Winding::Clockwise),
        _ => None,
    }
}

/// Signed area of triangle abc.
pub fn triangle_area<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    orient2d(a, b, c) / (T::one() + T::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn area_of_square() {
        assert_eq!(signed_area(&square()), 4.0);
        assert_eq!(winding(&square()), Some(Winding::CounterClockwise));
    }

    #[test]
    fn reversed_square_is_clockwise() {
        let mut pts = square();
        pts.reverse();
        assert_eq!(signed_area(&pts), -4.0);
        assert_eq!(winding(&pts), Some(Winding::Clockwise));
    }

    #[test]
    fn flat_ring_has_no_winding() {
        let pts: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert_eq!(winding(&pts), None);
    }

    #[test]
    fn convex_turn_depends_on_winding() {
        assert!(Winding::CounterClockwise.is_convex_turn(&1.0));
        assert!(!Winding::CounterClockwise.is_convex_turn(&0.0));
        assert!(Winding::Clockwise.is_convex_turn(&-1.0));
    }
}
