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

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use zonetri::geometry::samples::{random_radial_polygon, regular_polygon};
use zonetri::{Triangulator, required_capacity};

fn bench_radial(c: &mut Criterion) {
    let mut group = c.benchmark_group("radial");
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in [100, 1_000, 10_000] {
        let points = random_radial_polygon(&mut rng, n);
        let mut indices = vec![0u32; required_capacity(n)];
        let mut triangulator = Triangulator::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                triangulator.triangulate(
                    Some(black_box(&points[..])),
                    n,
                    Some(&mut indices[..]),
                )
            })
        });
    }
    group.finish();
}

fn bench_convex(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex");
    for n in [100, 1_000, 10_000] {
        let points = regular_polygon(n, 1.0);
        let mut indices = vec![0u32; required_capacity(n)];
        let mut triangulator = Triangulator::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                triangulator.triangulate(
                    Some(black_box(&points[..])),
                    n,
                    Some(&mut indices[..]),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_radial, bench_convex);
criterion_main!(benches);
