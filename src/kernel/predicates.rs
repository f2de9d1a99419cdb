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

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

/// Turn at `cur` when walking `prev -> cur -> next`.
///
/// Evaluated as `x2 * y1 - x1 * y2` with `(x1, y1) = prev - cur` and
/// `(x2, y2) = next - cur`. Positive for a left turn.
pub fn corner_turn<T: Scalar>(prev: &Point2<T>, cur: &Point2<T>, next: &Point2<T>) -> T {
    let to_prev = prev - cur;
    let to_next = next - cur;
    to_next.cross(&to_prev)
}

/// Convexity of a corner of a counter-clockwise ring. Collinear corners are
/// not convex.
pub fn is_convex_corner<T: Scalar>(prev: &Point2<T>, cur: &Point2<T>, next: &Point2<T>) -> bool {
    corner_turn(prev, cur, next) > T::zero()
}

/// Barycentric containment of `p` in triangle abc.
///
/// With `u` measured along `c - a` and `v` along `b - a`, `p` is inside when
/// `u >= 0`, `v >= 0` and `u + v < 1`: the two edges through `a` count as
/// inside, the edge `bc` does not. A zero-area triangle contains nothing.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d02 = v0.dot(&v2);
    let d11 = v1.dot(&v1);
    let d12 = v1.dot(&v2);

    let denom = d00.clone() * d11.clone() - d01.clone() * d01.clone();
    if denom.is_zero() {
        return false;
    }
    let inv = T::one() / denom;
    let u = (d11 * d02.clone() - d01.clone() * d12.clone()) * inv.clone();
    let v = (d00 * d12 - d01 * d02) * inv;

    let zero = T::zero();
    u >= zero && v >= zero && u + v < T::one()
}

/// Whether `p` lies on the closed segment ab, assuming the three points are
/// collinear.
fn within_bounds<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> bool {
    let (min_x, max_x) = if a.x < b.x { (&a.x, &b.x) } else { (&b.x, &a.x) };
    let (min_y, max_y) = if a.y < b.y { (&a.y, &b.y) } else { (&b.y, &a.y) };
    &p.x >= min_x && &p.x <= max_x && &p.y >= min_y && &p.y <= max_y
}

/// Closed segment intersection test: touching endpoints and collinear
/// overlaps count as intersecting.
pub fn segments_intersect<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
) -> bool {
    let o1 = orient2d(a, b, c).sign();
    let o2 = orient2d(a, b, d).sign();
    let o3 = orient2d(c, d, a).sign();
    let o4 = orient2d(c, d, b).sign();

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    (o1 == 0 && within_bounds(c, a, b))
        || (o2 == 0 && within_bounds(d, a, b))
        || (o3 == 0 && within_bounds(a, c, d))
        || (o4 == 0 && within_bounds(b, c, d))
}
