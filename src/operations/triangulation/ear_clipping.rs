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

//! Linear-time ear clipping over a single index buffer.
//!
//! The caller's index buffer holds one [`VertexRecord`] per polygon vertex
//! and is split into four contiguous zones:
//!
//! ```text
//! [0, r)  clipped ears, i.e. the output triangles
//! [r, c)  reflex vertices
//! [c, e)  convex vertices that are not ears
//! [e, n)  ears
//! ```
//!
//! Clipping an ear rotates it into the output zone, rewrites the links of
//! its two neighbours and moves each neighbour to the zone matching its new
//! classification. Emptiness tests only look at the reflex zone, since a
//! vertex inside a candidate ear of a simple polygon is always reflex.

use tracing::{debug, trace, warn};

use crate::geometry::{Point2, Winding};
use crate::kernel::predicates::{corner_turn, point_in_triangle};
use crate::numeric::scalar::Scalar;

/// One node of the shrinking ring: `[prev, vertex, next]` point indices.
pub type VertexRecord = [u32; 3];

/// Index slots the caller must provide for `point_count` vertices.
///
/// Only `3 * (point_count - 2)` slots end up holding triangles; the rest is
/// ring storage used while clipping.
pub const fn required_capacity(point_count: usize) -> usize {
    point_count.saturating_mul(3)
}

pub(crate) struct EarZones<'a, T: Scalar> {
    points: &'a [Point2<T>],
    ring: &'a mut [u32],
    /// vertex id -> position of its record in `ring`
    slots: &'a mut [u32],
    winding: Winding,
    n: usize,
    r: usize,
    c: usize,
    e: usize,
}

impl<'a, T: Scalar> EarZones<'a, T> {
    /// Writes the identity ring: position `i` holds `(i - 1, i, i + 1)`
    /// modulo `n`.
    ///
    /// `ring` must hold `3 * points.len()` slots and `slots` one per point.
    pub(crate) fn new(
        points: &'a [Point2<T>],
        ring: &'a mut [u32],
        slots: &'a mut [u32],
        winding: Winding,
    ) -> Self {
        let n = points.len();
        debug_assert_eq!(ring.len(), 3 * n);
        debug_assert_eq!(slots.len(), n);

        for i in 0..n {
            ring[3 * i] = ((i + n - 1) % n) as u32;
            ring[3 * i + 1] = i as u32;
            ring[3 * i + 2] = ((i + 1) % n) as u32;
            slots[i] = i as u32;
        }

        Self {
            points,
            ring,
            slots,
            winding,
            n,
            r: 0,
            c: 0,
            e: 0,
        }
    }

    #[inline]
    fn record(&self, i: usize) -> VertexRecord {
        [self.ring[3 * i], self.ring[3 * i + 1], self.ring[3 * i + 2]]
    }

    #[inline]
    fn write(&mut self, i: usize, record: VertexRecord) {
        self.ring[3 * i..3 * i + 3].copy_from_slice(&record);
    }

    /// Points the slot of whatever vertex now lives at position `i` back at
    /// `i`.
    #[inline]
    fn reindex(&mut self, i: usize) {
        let vertex = self.ring[3 * i + 1] as usize;
        self.slots[vertex] = i as u32;
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let a = self.record(i);
        let b = self.record(j);
        self.write(i, b);
        self.write(j, a);
        self.reindex(i);
        self.reindex(j);
    }

    #[inline]
    fn point(&self, vertex: u32) -> &Point2<T> {
        &self.points[vertex as usize]
    }

    fn is_convex(&self, i: usize) -> bool {
        let [prev, cur, next] = self.record(i);
        let turn = corner_turn(self.point(prev), self.point(cur), self.point(next));
        self.winding.is_convex_turn(&turn)
    }

    /// No other reflex vertex lies inside the triangle of record `i`.
    fn is_empty_ear(&self, i: usize) -> bool {
        let [ia, ib, ic] = self.record(i);
        let (a, b, c) = (self.point(ia), self.point(ib), self.point(ic));

        (self.r..self.c).all(|j| {
            let v = self.ring[3 * j + 1];
            v == ia || v == ib || v == ic || !point_in_triangle(self.point(v), a, b, c)
        })
    }

    /// Moves every record of `[l, n)` failing `keep` to the front of that
    /// range and returns the first position of the records that passed.
    fn partition(&mut self, mut l: usize, keep: fn(&Self, usize) -> bool) -> usize {
        for i in l..self.n {
            if !keep(self, i) {
                self.swap(i, l);
                l += 1;
            }
        }
        l
    }

    fn classify(&mut self) {
        self.r = 0;
        self.c = self.partition(self.r, Self::is_convex);
        self.e = self.partition(self.c, Self::is_empty_ear);
    }

    /// Guarantees a non-empty ear zone.
    ///
    /// A convex vertex blocked only by a reflex vertex that later turned
    /// convex is not re-examined by the neighbour updates, so a valid
    /// polygon can run out of known ears. Those are recovered by testing the
    /// convex zone again. If that finds nothing the input was not a simple
    /// polygon in the expected winding, and a vertex is clipped anyway so
    /// the run still terminates with in-range indices.
    fn ensure_ear(&mut self) {
        if self.e < self.n {
            return;
        }

        debug!(convex = self.e - self.c, "ear zone exhausted, re-testing convex vertices");
        self.e = self.partition(self.c, Self::is_empty_ear);
        if self.e < self.n {
            return;
        }

        warn!(
            active = self.n - self.r,
            reflex = self.c - self.r,
            "no ear found, clipping a vertex regardless"
        );
        let last = self.n - 1;
        if self.c < self.n {
            self.swap(self.c, last);
        } else {
            self.c = last;
        }
        self.e = last;
    }

    /// Moves the first ear into the output zone and returns it.
    ///
    /// The ear takes the first reflex slot, the displaced reflex record takes
    /// the first convex slot and the displaced convex record takes the slot
    /// the ear left, so every zone boundary advances by one.
    fn clip_ear(&mut self) -> VertexRecord {
        let (r, c, e) = (self.r, self.c, self.e);

        let ear = self.record(e);
        self.write(e, self.record(c));
        self.write(c, self.record(r));
        self.write(r, ear);

        // positions may coincide; each reads back its final record
        self.reindex(e);
        self.reindex(c);
        self.reindex(r);

        self.r += 1;
        self.c += 1;
        self.e += 1;
        ear
    }

    /// Joins the neighbour on `side` (0 = prev, 2 = next) of a clipped ear to
    /// the ear's opposite neighbour and re-classifies it.
    fn relink(&mut self, ear: &VertexRecord, side: usize) {
        let j = self.slots[ear[side] as usize] as usize;
        self.ring[3 * j + 2 - side] = ear[2 - side];
        self.relocate(j);
    }

    fn relocate(&mut self, j: usize) {
        if j < self.c {
            // reflex
            if !self.is_convex(j) {
                return;
            }
            self.c -= 1;
            self.swap(self.c, j);
            if self.is_empty_ear(self.c) {
                self.e -= 1;
                self.swap(self.e, self.c);
            }
        } else if j < self.e {
            // convex, not an ear
            if self.is_empty_ear(j) {
                self.e -= 1;
                self.swap(self.e, j);
            }
        } else {
            // ear
            if self.is_convex(j) && self.is_empty_ear(j) {
                return;
            }
            self.swap(self.e, j);
            self.e += 1;
            if !self.is_convex(self.e - 1) {
                self.swap(self.c, self.e - 1);
                self.c += 1;
            }
        }
    }

    /// Clips ears until three vertices remain and returns the number of
    /// triangles now at the front of the buffer.
    pub(crate) fn run(mut self) -> usize {
        self.classify();
        debug!(
            vertices = self.n,
            reflex = self.c - self.r,
            convex = self.e - self.c,
            ears = self.n - self.e,
            "classified polygon corners"
        );

        while self.r + 3 < self.n {
            self.ensure_ear();
            let ear = self.clip_ear();
            trace!(prev = ear[0], vertex = ear[1], next = ear[2], "clipped ear");

            self.relink(&ear, 0);
            self.relink(&ear, 2);
        }

        debug!(triangles = self.r + 1, "triangulation complete");
        self.r + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2 { x, y }).collect()
    }

    fn zones<'a>(
        points: &'a [Point2<f64>],
        ring: &'a mut Vec<u32>,
        slots: &'a mut Vec<u32>,
    ) -> EarZones<'a, f64> {
        ring.resize(3 * points.len(), 0);
        slots.resize(points.len(), 0);
        EarZones::new(points, ring, slots, Winding::CounterClockwise)
    }

    fn assert_slots_consistent(z: &EarZones<'_, f64>) {
        for i in z.r..z.n {
            let v = z.ring[3 * i + 1] as usize;
            assert_eq!(z.slots[v] as usize, i, "slot of vertex {v}");
        }
    }

    #[test]
    fn identity_ring() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let (mut ring, mut slots) = (Vec::new(), Vec::new());
        let z = zones(&points, &mut ring, &mut slots);
        assert_eq!(z.record(0), [3, 0, 1]);
        assert_eq!(z.record(3), [2, 3, 0]);
        assert_slots_consistent(&z);
    }

    #[test]
    fn convex_polygon_has_no_reflex_zone() {
        let points = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.0), (1.0, 3.0), (-1.0, 1.0)]);
        let (mut ring, mut slots) = (Vec::new(), Vec::new());
        let mut z = zones(&points, &mut ring, &mut slots);
        z.classify();
        assert_eq!((z.r, z.c, z.e), (0, 0, 0));
        assert_slots_consistent(&z);
    }

    #[test]
    fn arrow_zones() {
        // vertex 4 is reflex and blocks the corners at 1 and 2
        let points = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (3.0, 2.0),
        ]);
        let (mut ring, mut slots) = (Vec::new(), Vec::new());
        let mut z = zones(&points, &mut ring, &mut slots);
        z.classify();

        assert_eq!(z.c - z.r, 1);
        assert_eq!(z.record(z.r)[1], 4);
        let mut ears: Vec<u32> = (z.e..z.n).map(|i| z.record(i)[1]).collect();
        ears.sort_unstable();
        assert_eq!(ears, vec![0, 3]);
        assert_eq!(z.e - z.c, 2);
        assert_slots_consistent(&z);
    }

    #[test]
    fn clipping_keeps_ring_linked() {
        let points = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (2.0, 1.0),
            (0.0, 4.0),
        ]);
        let (mut ring, mut slots) = (Vec::new(), Vec::new());
        let mut z = zones(&points, &mut ring, &mut slots);
        z.classify();

        z.ensure_ear();
        let ear = z.clip_ear();
        z.relink(&ear, 0);
        z.relink(&ear, 2);
        assert_slots_consistent(&z);

        // the surviving four records still form one cycle
        let active: Vec<VertexRecord> = (z.r..z.n).map(|i| z.record(i)).collect();
        assert_eq!(active.len(), 4);
        for rec in &active {
            assert_ne!(rec[1], ear[1]);
            let next = active.iter().find(|o| o[1] == rec[2]).expect("next is active");
            assert_eq!(next[0], rec[1]);
        }
        assert!(z.r <= z.c && z.c <= z.e && z.e <= z.n);
    }

    #[test]
    fn stalled_ear_zone_is_refilled() {
        let points = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let (mut ring, mut slots) = (Vec::new(), Vec::new());
        let mut z = zones(&points, &mut ring, &mut slots);
        z.classify();
        // pretend every ear was demoted
        z.e = z.n;
        z.ensure_ear();
        assert_eq!(z.e, 0);
    }
}
