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

use thiserror::Error;

/// Reasons the strict triangulation path refuses a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("{count} vertices cannot be addressed by 32-bit indices")]
    TooManyVertices { count: usize },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("vertices {first} and {second} coincide")]
    DuplicateVertex { first: usize, second: usize },

    #[error("polygon encloses no area")]
    ZeroArea,

    #[error("edges {first} and {second} intersect")]
    SelfIntersection { first: usize, second: usize },

    #[error("index buffer holds {actual} slots but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
}
