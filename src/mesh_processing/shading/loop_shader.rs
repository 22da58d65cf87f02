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
    geometry::{util::EPS, vector::Vector3},
    mesh::basic_types::Mesh,
    mesh_processing::{
        shading::spherical::spherical_average,
        stencil::{Stencil, loop_edge_stencil, loop_vertex_stencil},
    },
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAveraging {
    Linear,
    Spherical,
}

/// Refines `normals` (one per control vertex) with the Loop stencils and
/// returns one normal per vertex of the subdivided mesh.
pub fn refine_normals<T: Scalar>(
    control: &Mesh<T>,
    normals: &[Vector3],
    averaging: LoopAveraging,
) -> Vec<Vector3> {
    let mut refined = vec![Vector3::zero(); control.num_verts() + control.num_edges()];

    let refine = |stencil: &Stencil| {
        let linear = stencil.apply(normals).normalized();
        match averaging {
            LoopAveraging::Linear => linear,
            LoopAveraging::Spherical => spherical_average(stencil, linear, normals),
        }
    };

    for v in 0..control.num_verts() {
        refined[v] = refine(&loop_vertex_stencil(control, v));
    }
    for h in control.edge_representatives() {
        refined[control.num_verts() + control.edge_of(h)] = refine(&loop_edge_stencil(control, h));
    }
    refined
}

/// Refines blend weights with the Loop stencils. No renormalization; the
/// stencils are convex, so weights stay in `[0, 1]`.
pub fn refine_blend_weights<T: Scalar>(control: &Mesh<T>, weights: &[f64]) -> Vec<f64> {
    let mut refined = vec![0.0; control.num_verts() + control.num_edges()];

    for v in 0..control.num_verts() {
        refined[v] = loop_vertex_stencil(control, v).apply(weights);
    }
    for h in control.edge_representatives() {
        refined[control.num_verts() + control.edge_of(h)] = loop_edge_stencil(control, h).apply(weights);
    }
    debug_assert!(
        refined.iter().all(|w| (-EPS..=1.0 + EPS).contains(w)),
        "blend weight left [0, 1]"
    );
    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point3, mesh::builder::MeshBuilder};

    /// Interior valence-5 vertex 0 inside a ring of boundary vertices.
    fn pentagon_fan() -> Mesh<f64> {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.5]));
        for k in 0..5 {
            let angle = std::f64::consts::TAU / 5.0 * k as f64;
            builder.add_vertex(Point3::from_f64s(angle.cos(), angle.sin(), 0.0));
        }
        for i in 1..=5 {
            builder.add_triangle(0, i, i % 5 + 1);
        }
        builder.build().unwrap()
    }

    #[test]
    fn blend_weights_are_plain_stencil_averages() {
        let mesh = pentagon_fan();
        let weights = [0.2, 0.9, 0.1, 0.5, 0.7, 0.3];
        let refined = refine_blend_weights(&mesh, &weights);
        assert_eq!(refined.len(), mesh.num_verts() + mesh.num_edges());

        for v in 0..mesh.num_verts() {
            assert_eq!(refined[v], loop_vertex_stencil(&mesh, v).apply(&weights[..]));
        }
        for h in mesh.edge_representatives() {
            let expected = loop_edge_stencil(&mesh, h).apply(&weights[..]);
            assert_eq!(refined[mesh.num_verts() + mesh.edge_of(h)], expected);
        }
        // Centre: 5/8 of itself plus 3/40 of each neighbour.
        assert!((refined[0] - (0.625 * 0.2 + 0.075 * 2.5)).abs() < 1e-12);
    }
}
