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

//! Ear-clipping triangulation of simple polygons.
//!
//! [`triangulate`] partitions a counter-clockwise simple polygon into
//! `n - 2` triangles written as index triples into a caller-provided buffer
//! of `3 * n` slots. The buffer doubles as the working ring: vertices are
//! kept in four zones (clipped, reflex, convex, ear) and moved between them
//! by swaps, so each clipped ear costs a constant number of
//! re-classifications.
//!
//! ```
//! use zonetri::{Point2, required_capacity, triangulate};
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let mut indices = vec![0u32; required_capacity(square.len())];
//! let count = triangulate(Some(&square[..]), square.len(), Some(&mut indices[..]));
//! assert_eq!(count, 2);
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use error::PolygonError;
pub use geometry::{Point2, Winding};
pub use numeric::Scalar;
pub use operations::triangulation::{
    EarClipping, Triangulate2D, TriangulateOptions, Triangulation, Triangulator, WindingPolicy,
    required_capacity, triangulate, try_triangulate, validate,
};
