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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    geometry::Point2, numeric::scalar::Scalar, operations::triangulation::Triangulation,
};

/// Write a triangulated polygon as a Wavefront OBJ file in the `z = 0`
/// plane.
pub fn write_obj<T: Scalar, P: AsRef<Path>>(
    points: &[Point2<T>],
    triangulation: &Triangulation,
    path: P,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(points, triangulation, &mut out)?;
    out.flush()
}

pub fn write_obj_to<T: Scalar, W: Write>(
    points: &[Point2<T>],
    triangulation: &Triangulation,
    out: &mut W,
) -> io::Result<()> {
    // 1) write vertices
    for p in points {
        writeln!(
            out,
            "v {:?} {:?} 0.0",
            p.x.to_f64().unwrap_or(f64::NAN),
            p.y.to_f64().unwrap_or(f64::NAN)
        )?;
    }

    // 2) write faces (1-based indices)
    for t in &triangulation.triangles {
        let (a, b, c) = (t[0] as usize, t[1] as usize, t[2] as usize);
        if a >= points.len() || b >= points.len() || c >= points.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("triangle {t:?} references a missing vertex"),
            ));
        }
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_vertices_and_faces() {
        let points = vec![
            Point2 { x: 0.0, y: 0.0 },
            Point2 { x: 1.0, y: 0.0 },
            Point2 { x: 0.0, y: 1.0 },
        ];
        let tri = Triangulation {
            triangles: vec![[0, 1, 2]],
        };
        let mut buf = Vec::new();
        write_obj_to(&points, &tri, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n");
    }

    #[test]
    fn rejects_dangling_index() {
        let points = vec![Point2 { x: 0.0, y: 0.0 }];
        let tri = Triangulation {
            triangles: vec![[0, 1, 2]],
        };
        let err = write_obj_to(&points, &tri, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
