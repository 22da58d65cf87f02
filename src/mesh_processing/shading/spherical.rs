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

//! Nonlinear averaging of unit normals on the sphere.
//!
//! A linear stencil average is refined by a fixed number of fixed-point
//! steps: the inputs are pulled into the tangent plane of the current
//! estimate through the exponential map, averaged there with the same stencil
//! weights, and the estimate is rotated along the resulting tangent vector.

use crate::{
    geometry::{
        util::{EPS, rotate_about_axis},
        vector::Vector3,
    },
    mesh_processing::stencil::Stencil,
};

pub const SPHERICAL_ITERATIONS: usize = 3;

/// Maps `ni` into the tangent plane of `nk`, at a distance from the origin
/// equal to the angle between the two.
pub fn exponential_map(nk: &Vector3, ni: &Vector3) -> Vector3 {
    let Some(direction) = (*ni - *nk * ni.dot(nk)).try_normalized() else {
        return Vector3::zero();
    };
    let cos = nk.normalized().dot(&ni.normalized()).clamp(-1.0, 1.0);
    direction * cos.acos()
}

/// Rotates `nk` about `nk x update` by `|update|` radians. Leaves `nk` as is
/// when the update has no tangential part.
pub fn rotate_along(nk: &Vector3, update: &Vector3) -> Vector3 {
    let angle = update.norm();
    if angle < EPS {
        return *nk;
    }
    match nk.cross(update).try_normalized() {
        Some(axis) => rotate_about_axis(nk, &axis, angle),
        None => *nk,
    }
}

pub fn spherical_average(stencil: &Stencil, linear: Vector3, normals: &[Vector3]) -> Vector3 {
    spherical_average_iterations(stencil, linear, normals, SPHERICAL_ITERATIONS)
}

pub fn spherical_average_iterations(
    stencil: &Stencil,
    linear: Vector3,
    normals: &[Vector3],
    iterations: usize,
) -> Vector3 {
    let mut nk = linear;
    for _ in 0..iterations {
        let update: Vector3 = stencil.apply_with(|v| exponential_map(&nk, &normals[v]));
        nk = rotate_along(&nk, &update);
    }
    nk
}
