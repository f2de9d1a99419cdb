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

//! Optional checks for the strict triangulation path.
//!
//! The core algorithm trusts its input. These checks reject what it cannot
//! handle: too few vertices, non-finite coordinates, coincident neighbours,
//! self-intersections and rings without area.

use crate::error::PolygonError;
use crate::geometry::polygon::winding;
use crate::geometry::{Point2, Winding};
use crate::kernel::predicates::{corner_turn, segments_intersect};
use crate::numeric::scalar::Scalar;

/// Checks that `points` describe a simple polygon and returns its winding.
///
/// The self-intersection test compares every pair of non-adjacent edges and
/// is quadratic in the vertex count.
pub fn validate<T: Scalar>(points: &[Point2<T>]) -> Result<Winding, PolygonError> {
    let n = points.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { count: n });
    }
    if u32::try_from(n).is_err() {
        return Err(PolygonError::TooManyVertices { count: n });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(PolygonError::NonFiniteCoordinate { index });
    }

    for i in 0..n {
        let j = (i + 1) % n;
        if points[i] == points[j] {
            return Err(PolygonError::DuplicateVertex {
                first: i.min(j),
                second: i.max(j),
            });
        }
    }

    // adjacent edges folding back onto each other
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];
        let cur = &points[i];
        if corner_turn(prev, cur, next).is_zero() && (prev - cur).dot(&(next - cur)) > T::zero()
        {
            return Err(PolygonError::SelfIntersection {
                first: (i + n - 1) % n,
                second: i,
            });
        }
    }

    for i in 0..n {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(&points[i], &points[i + 1], &points[j], &points[(j + 1) % n]) {
                return Err(PolygonError::SelfIntersection {
                    first: i,
                    second: j,
                });
            }
        }
    }

    winding(points).ok_or(PolygonError::ZeroArea)
}
