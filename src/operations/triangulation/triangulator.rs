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

use crate::error::PolygonError;
use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::Triangulation;
use crate::operations::triangulation::ear_clipping::{EarZones, required_capacity};
use crate::operations::triangulation::options::TriangulateOptions;
use crate::operations::triangulation::validation::validate;

/// Reusable ear-clipping engine.
///
/// Holds the vertex-to-slot index between calls so that re-triangulating a
/// polygon of the same size does not allocate.
#[derive(Debug, Clone, Default)]
pub struct Triangulator {
    options: TriangulateOptions,
    slots: Vec<u32>,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TriangulateOptions) -> Self {
        Self {
            options,
            slots: Vec::new(),
        }
    }

    pub fn options(&self) -> &TriangulateOptions {
        &self.options
    }

    /// Triangulates the first `point_count` points into `indices`.
    ///
    /// Returns 0 when `point_count` is 0. When either buffer is missing, or
    /// too short to hold `point_count` points or
    /// [`required_capacity`]`(point_count)` indices, nothing is written and
    /// the required index capacity is returned. Otherwise returns the number
    /// of triangles stored as index triples at the front of `indices`,
    /// `point_count - 2` for a polygon with at least three vertices.
    ///
    /// The polygon is not validated; see [`Self::triangulate_into`] for the
    /// checked variant.
    pub fn triangulate<T: Scalar>(
        &mut self,
        points: Option<&[Point2<T>]>,
        point_count: usize,
        indices: Option<&mut [u32]>,
    ) -> usize {
        if point_count == 0 {
            return 0;
        }
        let capacity = required_capacity(point_count);
        let (Some(points), Some(indices)) = (points, indices) else {
            return capacity;
        };
        if points.len() < point_count
            || indices.len() < capacity
            || u32::try_from(point_count).is_err()
        {
            return capacity;
        }

        let points = &points[..point_count];
        let winding = self.options.winding.resolve(points);

        self.slots.clear();
        self.slots.resize(point_count, 0);
        EarZones::new(points, &mut indices[..capacity], &mut self.slots, winding).run()
    }

    /// Checked variant of [`Self::triangulate`] over a whole point slice.
    pub fn triangulate_into<T: Scalar>(
        &mut self,
        points: &[Point2<T>],
        indices: &mut [u32],
    ) -> Result<usize, PolygonError> {
        let n = points.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices { count: n });
        }
        if u32::try_from(n).is_err() {
            return Err(PolygonError::TooManyVertices { count: n });
        }
        let required = required_capacity(n);
        if indices.len() < required {
            return Err(PolygonError::BufferTooSmall {
                required,
                actual: indices.len(),
            });
        }
        if self.options.validate {
            validate(points)?;
        }

        Ok(self.triangulate(Some(points), n, Some(indices)))
    }

    /// Triangulates into a freshly allocated [`Triangulation`].
    pub fn triangulate_polygon<T: Scalar>(
        &mut self,
        points: &[Point2<T>],
    ) -> Result<Triangulation, PolygonError> {
        let mut indices = vec![0; required_capacity(points.len())];
        let count = self.triangulate_into(points, &mut indices)?;
        indices.truncate(3 * count);
        Ok(Triangulation::from_indices(&indices))
    }
}
