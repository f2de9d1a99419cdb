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

use zonetri::Point2;
use zonetri::kernel::{corner_turn, is_convex_corner, orient2d, point_in_triangle};

#[test]
fn test_orient2d() {
    let a = Point2::<f64>::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.0, 1.0);

    assert!(orient2d(&a, &b, &c) > 0.0);
    assert!(orient2d(&a, &c, &b) < 0.0);
}

#[test]
fn corner_turn_matches_orientation() {
    let prev = Point2::<f64>::new(-1.0, -2.0);
    let cur = Point2::new(3.0, 0.5);
    let next = Point2::new(1.0, 4.0);

    let turn = corner_turn(&prev, &cur, &next);
    assert_eq!(turn.signum(), orient2d(&prev, &cur, &next).signum());
    assert!(is_convex_corner(&prev, &cur, &next));
    assert!(!is_convex_corner(&next, &cur, &prev));
}

#[test]
fn containment_ignores_orientation_of_triangle() {
    let a = Point2::<f64>::new(0.0, 0.0);
    let b = Point2::new(0.0, 3.0);
    let c = Point2::new(3.0, 0.0);
    let p = Point2::new(1.0, 1.0);

    assert!(point_in_triangle(&p, &a, &b, &c));
    assert!(point_in_triangle(&p, &a, &c, &b));
}

#[test]
fn single_precision() {
    let a = Point2 { x: 0.0_f32, y: 0.0 };
    let b = Point2 { x: 2.0_f32, y: 0.0 };
    let c = Point2 { x: 0.0_f32, y: 2.0 };
    let p = Point2 { x: 0.5_f32, y: 0.5 };

    assert!(is_convex_corner(&c, &a, &b));
    assert!(point_in_triangle(&p, &a, &b, &c));
}
