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

//! One step of Loop subdivision.
//!
//! The refined mesh is indexed deterministically from the control mesh: every
//! control half-edge `h` spawns the three half-edges `3h..3h + 3` of the corner
//! triangle at its origin and the half-edge `3H + h` of the central triangle
//! of its face. Vertex `v` keeps its index, and the edge point of undirected
//! edge `e` is vertex `V + e`.

use tracing::{debug, warn};

use crate::{
    config::SubdivisionParams,
    error::{SubdivisionError, SubdivisionResult},
    mesh::basic_types::Mesh,
    mesh_processing::{
        shading::{SubdivisionShader, refine_blend_weights},
        stencil::{loop_edge_stencil, loop_vertex_stencil},
    },
    numeric::scalar::Scalar,
};

/// Subdivides `control` once, refining every shading buffer.
pub fn subdivide<T: Scalar>(control: &Mesh<T>) -> SubdivisionResult<Mesh<T>> {
    subdivide_with(control, &SubdivisionParams::default())
}

/// Subdivides `control` once, refining the normals of the shaders in `params`.
///
/// The control mesh is only read. Blend weights are always refined, since
/// every renderer reads them.
pub fn subdivide_with<T: Scalar>(
    control: &Mesh<T>,
    params: &SubdivisionParams,
) -> SubdivisionResult<Mesh<T>> {
    check_preconditions(control, params)?;

    let mut mesh = allocate(control);
    refine_geometry(control, &mut mesh);
    refine_topology(control, &mut mesh);
    mesh.extract_attributes();

    for method in params.methods() {
        let Some(normals) = control.subdivided_normals(method) else {
            continue;
        };
        let shader = SubdivisionShader::for_method(method);
        if let Some(refined) = shader.refine_normals(control, method, normals) {
            mesh.subdivided_normals.insert(method, refined);
        }
    }
    mesh.blend_weights = refine_blend_weights(control, control.blend_weights());

    debug!(
        vertices = mesh.num_verts(),
        half_edges = mesh.num_half_edges(),
        edges = mesh.num_edges(),
        faces = mesh.num_faces(),
        "Loop subdivision step complete"
    );

    Ok(mesh)
}

fn check_preconditions<T: Scalar>(
    control: &Mesh<T>,
    params: &SubdivisionParams,
) -> SubdivisionResult<()> {
    let projected = control.num_faces() * 4;
    if projected > params.max_faces {
        warn!(projected, max = params.max_faces, "Subdivision rejected: mesh too large");
        return Err(SubdivisionError::MeshTooLarge {
            current: control.num_faces(),
            projected,
            max: params.max_faces,
        });
    }

    for face in control.faces() {
        if face.valence != 3 {
            return Err(SubdivisionError::NonTriangularFace {
                face: face.index,
                valence: face.valence,
            });
        }
    }

    for (h, he) in control.half_edges().iter().enumerate() {
        if he.face != h / 3 || he.next != triple_next(h) {
            return Err(SubdivisionError::UnorderedFaceHalfEdges { face: he.face });
        }
    }

    let expected = control.num_verts();
    for method in params.methods() {
        let normals = control
            .subdivided_normals(method)
            .ok_or(SubdivisionError::MissingNormals(method))?;
        if normals.len() != expected {
            return Err(SubdivisionError::NormalLength {
                method,
                expected,
                found: normals.len(),
            });
        }
    }

    let found = control.blend_weights().len();
    if found != expected {
        return Err(SubdivisionError::BlendWeightLength { expected, found });
    }

    Ok(())
}

/// Empty mesh with exactly the element counts of the refined mesh.
fn allocate<T: Scalar>(control: &Mesh<T>) -> Mesh<T> {
    let num_verts = control.num_verts() + control.num_edges();
    let num_half_edges = 4 * control.num_half_edges();
    let num_faces = 4 * control.num_faces();
    let num_edges = 2 * control.num_edges() + 3 * control.num_faces();
    Mesh::with_sizes(num_verts, num_half_edges, num_faces, num_edges)
}

/// Positions and valences of vertex points and edge points.
fn refine_geometry<T: Scalar>(control: &Mesh<T>, mesh: &mut Mesh<T>) {
    for v in 0..control.num_verts() {
        let stencil = loop_vertex_stencil(control, v);
        let vertex = &mut mesh.vertices[v];
        vertex.position = stencil.apply_by(|u| control.position(u));
        vertex.valence = control.vertex(v).valence;
    }

    for h in control.edge_representatives() {
        let stencil = loop_edge_stencil(control, h);
        let vertex = &mut mesh.vertices[control.num_verts() + control.edge_of(h)];
        vertex.position = stencil.apply_by(|u| control.position(u));
        vertex.valence = if control.is_boundary_edge(h) { 4 } else { 6 };
    }
}

#[inline]
fn triple_next(h: usize) -> usize {
    if h % 3 == 2 { h - 2 } else { h + 1 }
}

#[inline]
fn triple_prev(h: usize) -> usize {
    if h % 3 == 0 { h + 2 } else { h - 1 }
}

/// Connectivity of the refined mesh, derived from control half-edge indices.
fn refine_topology<T: Scalar>(control: &Mesh<T>, mesh: &mut Mesh<T>) {
    for face in mesh.faces.iter_mut() {
        face.valence = 3;
    }

    let num_half_edges = control.num_half_edges();
    let num_verts = control.num_verts();
    let num_edges = control.num_edges();

    for h in 0..num_half_edges {
        let prev = control.prev(h);
        let twin = control.twin(h);
        let prev_twin = control.twin(prev);
        let edge = control.edge_of(h);
        let prev_edge = control.edge_of(prev);

        let h1 = 3 * h;
        let h2 = 3 * h + 1;
        let h3 = 3 * h + 2;
        let h4 = 3 * num_half_edges + h;

        let twin1 = twin.map(|t| 3 * control.next(t) + 2);
        let twin3 = prev_twin.map(|t| 3 * t);

        let origin1 = control.origin(h);
        let origin2 = num_verts + edge;
        let origin3 = num_verts + prev_edge;

        let edge1 = 2 * edge + usize::from(twin.is_some_and(|t| h < t));
        let inner_edge = 2 * num_edges + h;
        let edge3 = 2 * prev_edge + usize::from(prev_twin.is_none_or(|t| prev > t));

        set_half_edge_data(mesh, h1, edge1, origin1, twin1);
        set_half_edge_data(mesh, h2, inner_edge, origin2, Some(h4));
        set_half_edge_data(mesh, h3, edge3, origin3, twin3);
        set_half_edge_data(mesh, h4, inner_edge, origin3, Some(h2));
    }
}

fn set_half_edge_data<T: Scalar>(
    mesh: &mut Mesh<T>,
    h: usize,
    edge: usize,
    origin: usize,
    twin: Option<usize>,
) {
    let face = h / 3;
    let he = &mut mesh.half_edges[h];
    he.index = h;
    he.edge = edge;
    he.origin = origin;
    he.face = face;
    he.next = triple_next(h);
    he.prev = triple_prev(h);
    he.twin = twin;

    mesh.vertices[origin].out = Some(h);
    mesh.faces[face].side = h;
}
