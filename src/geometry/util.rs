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

use crate::geometry::vector::Vector3;

pub const EPS: f64 = 1e-10;

/// Rotates `v` about the unit `axis` by `angle` radians (Rodrigues' formula).
#[inline]
pub fn rotate_about_axis(v: &Vector3, axis: &Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    *v * cos + axis.cross(v) * sin + *axis * (axis.dot(v) * (1.0 - cos))
}

/// Unit normal of the polygon through `corners` (Newell's method).
///
/// Returns `None` for polygons with (numerically) zero area.
pub fn polygon_normal(corners: &[Vector3]) -> Option<Vector3> {
    let mut n = Vector3::zero();
    for (i, a) in corners.iter().enumerate() {
        let b = &corners[(i + 1) % corners.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n.try_normalized()
}

/// Interleaves `vectors` into an `xyz` buffer of `f32`s, as uploaded to a GPU.
pub fn flatten_f32(vectors: &[Vector3]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        flat.extend_from_slice(&[v.x as f32, v.y as f32, v.z as f32]);
    }
    flat
}
