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

use crate::geometry::polygon::winding;
use crate::geometry::{Point2, Winding};
use crate::numeric::scalar::Scalar;

/// How the orientation of the input ring is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WindingPolicy {
    /// Assume counter-clockwise input without checking.
    #[default]
    CounterClockwise,
    /// Assume clockwise input without checking.
    Clockwise,
    /// Measure the signed area first. A ring without area is treated as
    /// counter-clockwise.
    Auto,
}

impl WindingPolicy {
    pub fn resolve<T: Scalar>(self, points: &[Point2<T>]) -> Winding {
        match self {
            WindingPolicy::CounterClockwise => Winding::CounterClockwise,
            WindingPolicy::Clockwise => Winding::Clockwise,
            WindingPolicy::Auto => winding(points).unwrap_or(Winding::CounterClockwise),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TriangulateOptions {
    pub winding: WindingPolicy,
    /// Run [`validate`](super::validation::validate) before the strict
    /// entry points triangulate.
    pub validate: bool,
}

impl TriangulateOptions {
    pub fn with_winding(mut self, winding: WindingPolicy) -> Self {
        self.winding = winding;
        self
    }

    pub fn validated(mut self) -> Self {
        self.validate = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_unchecked_ccw() {
        let options = TriangulateOptions::default();
        assert_eq!(options.winding, WindingPolicy::CounterClockwise);
        assert!(!options.validate);
    }

    #[test]
    fn auto_detects_clockwise() {
        let pts: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(WindingPolicy::Auto.resolve(&pts), Winding::Clockwise);
        assert_eq!(
            WindingPolicy::CounterClockwise.resolve(&pts),
            Winding::CounterClockwise
        );
    }
}
