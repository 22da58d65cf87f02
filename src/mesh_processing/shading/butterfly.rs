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

use crate::{
    geometry::vector::Vector3,
    mesh::basic_types::Mesh,
    mesh_processing::stencil::butterfly_edge_stencil,
    numeric::scalar::Scalar,
};

/// Butterfly normal refinement. Butterfly is interpolating: normals of
/// existing vertices are carried over, only edge points are averaged.
pub fn refine_normals<T: Scalar>(control: &Mesh<T>, normals: &[Vector3]) -> Vec<Vector3> {
    let mut refined = vec![Vector3::zero(); control.num_verts() + control.num_edges()];

    for (v, n) in normals.iter().enumerate().take(control.num_verts()) {
        refined[v] = n.normalized();
    }
    for h in control.edge_representatives() {
        let stencil = butterfly_edge_stencil(control, h);
        refined[control.num_verts() + control.edge_of(h)] = stencil.apply(normals).normalized();
    }
    refined
}
