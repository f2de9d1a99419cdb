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

pub mod ear_clipping;
pub mod options;
pub mod triangulator;
pub mod validation;

use crate::error::PolygonError;
use crate::geometry::Point2;
use crate::geometry::polygon::triangle_area;
use crate::numeric::scalar::Scalar;

pub use ear_clipping::{VertexRecord, required_capacity};
pub use options::{TriangulateOptions, WindingPolicy};
pub use triangulator::Triangulator;
pub use validation::validate;

pub trait Triangulate2D<T: Scalar> {
    fn triangulate(points: &[Point2<T>]) -> Result<Triangulation, PolygonError>;
}

/// Triangles as index triples into the polygon's point slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Triangulation {
    pub triangles: Vec<[u32; 3]>,
}

impl Triangulation {
    /// Groups a flat index buffer into triangles; a trailing partial
    /// triple is dropped.
    pub fn from_indices(indices: &[u32]) -> Self {
        Self {
            triangles: indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat index list for indexed triangle-list drawing.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Sum of the signed triangle areas.
    pub fn area<T: Scalar>(&self, points: &[Point2<T>]) -> T {
        self.triangles.iter().fold(T::zero(), |acc, t| {
            acc + triangle_area(
                &points[t[0] as usize],
                &points[t[1] as usize],
                &points[t[2] as usize],
            )
        })
    }
}

/// Ear clipping with winding detection and no validation.
pub struct EarClipping;

impl<T: Scalar> Triangulate2D<T> for EarClipping {
    fn triangulate(points: &[Point2<T>]) -> Result<Triangulation, PolygonError> {
        let options = TriangulateOptions::default().with_winding(WindingPolicy::Auto);
        Triangulator::with_options(options).triangulate_polygon(points)
    }
}

/// Triangulates the first `point_count` points of a counter-clockwise simple
/// polygon into `indices`.
///
/// Passing `None` for either buffer queries the capacity `indices` needs,
/// `3 * point_count`. See [`Triangulator::triangulate`] for the full
/// contract.
pub fn triangulate<T: Scalar>(
    points: Option<&[Point2<T>]>,
    point_count: usize,
    indices: Option<&mut [u32]>,
) -> usize {
    Triangulator::new().triangulate(points, point_count, indices)
}

/// Strict triangulation of a whole point slice.
pub fn try_triangulate<T: Scalar>(
    points: &[Point2<T>],
    options: &TriangulateOptions,
) -> Result<Triangulation, PolygonError> {
    Triangulator::with_options(*options).triangulate_polygon(points)
}
