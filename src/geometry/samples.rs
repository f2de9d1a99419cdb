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

//! Polygon generators used by tests, benchmarks and demos.

use std::f64::consts::PI;

use rand::Rng;

use crate::geometry::point_2::Point2;

/// Random star-shaped polygon around the origin.
///
/// Vertex `i` sits at angle `2*pi*i/n`; its radius is a running sum of
/// uniform samples damped by 1.5 each step, so consecutive radii are
/// correlated and the outline stays within a disc of radius 1. The ring is
/// simple and counter-clockwise.
pub fn random_radial_polygon<R>(rng: &mut R, n: usize) -> Vec<Point2<f64>>
where
    R: Rng + ?Sized,
{
    let mut r = 0.0;
    (0..n)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / n as f64;
            r += rng.random::<f64>();
            r /= 1.5;
            Point2 {
                x: 0.5 * r * phi.cos(),
                y: 0.5 * r * phi.sin(),
            }
        })
        .collect()
}

/// Counter-clockwise regular polygon with `n` vertices on a circle.
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / n as f64;
            Point2 {
                x: radius * phi.cos(),
                y: radius * phi.sin(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::geometry::polygon::{Winding, winding};

    #[test]
    fn radial_polygon_is_counter_clockwise() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = random_radial_polygon(&mut rng, 64);
        assert_eq!(pts.len(), 64);
        assert_eq!(winding(&pts), Some(Winding::CounterClockwise));
        assert!(pts.iter().all(|p| p.x.hypot(p.y) <= 1.0));
    }

    #[test]
    fn regular_polygon_vertices_on_circle() {
        let pts = regular_polygon(6, 2.0);
        for p in &pts {
            assert!((p.x.hypot(p.y) - 2.0).abs() < 1e-12);
        }
    }
}
