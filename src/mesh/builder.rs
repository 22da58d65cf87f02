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

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{MeshError, MeshResult},
    geometry::point::Point3,
    mesh::{basic_types::Mesh, face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Collects an indexed polygon list and turns it into a validated base mesh.
///
/// Half-edges of face `f` are laid out consecutively in corner order, so a
/// triangle mesh stores face `f` at half-edges `3f..3f + 3`, which is the
/// layout the Loop subdivider relies on.
#[derive(Debug, Clone)]
pub struct MeshBuilder<T: Scalar = f64> {
    positions: Vec<Point3<T>>,
    faces: Vec<SmallVec<[usize; 4]>>,
}

impl<T: Scalar> Default for MeshBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> MeshBuilder<T> {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, position: Point3<T>) -> usize {
        self.positions.push(position);
        self.positions.len() - 1
    }

    /// Adds a polygon given its corners in counter-clockwise order.
    pub fn add_face(&mut self, corners: &[usize]) -> usize {
        self.faces.push(SmallVec::from_slice(corners));
        self.faces.len() - 1
    }

    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> usize {
        self.add_face(&[v0, v1, v2])
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Wires the half-edge structure, validates that it is manifold and
    /// computes the base-mesh attributes (normals, blend weights, buffers).
    pub fn build(self) -> MeshResult<Mesh<T>> {
        let vertex_count = self.positions.len();
        for (f, corners) in self.faces.iter().enumerate() {
            if corners.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face: f,
                    corners: corners.len(),
                });
            }
            for (i, &v) in corners.iter().enumerate() {
                if v >= vertex_count {
                    return Err(MeshError::VertexOutOfRange {
                        face: f,
                        vertex: v,
                        count: vertex_count,
                    });
                }
                if corners[..i].contains(&v) {
                    return Err(MeshError::RepeatedCorner { face: f, vertex: v });
                }
            }
        }

        let mut mesh = Mesh::new();
        mesh.vertices = self
            .positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| Vertex::new(p, i))
            .collect();

        // Directed edge (from, to) -> half-edge
        let mut edge_map: AHashMap<(usize, usize), usize> = AHashMap::new();

        for (f, corners) in self.faces.iter().enumerate() {
            let base = mesh.half_edges.len();
            let n = corners.len();

            for i in 0..n {
                let h = base + i;
                let from = corners[i];
                let to = corners[(i + 1) % n];
                if edge_map.insert((from, to), h).is_some() {
                    return Err(MeshError::NonManifoldEdge { from, to });
                }

                let mut he = HalfEdge::new(h);
                he.origin = from;
                he.face = f;
                he.next = base + (i + 1) % n;
                he.prev = base + (i + n - 1) % n;
                mesh.half_edges.push(he);

                mesh.vertices[from].out.get_or_insert(h);
            }

            mesh.faces.push(Face {
                side: base,
                valence: n,
                ..Face::new(f)
            });
        }

        // Twins and undirected edge ids, numbered in first-seen order.
        let mut edge_count = 0;
        for h in 0..mesh.half_edges.len() {
            let from = mesh.half_edges[h].origin;
            let to = mesh.dest(h);
            let twin = edge_map.get(&(to, from)).copied();
            mesh.half_edges[h].twin = twin;

            if mesh.half_edges[h].edge == usize::MAX {
                mesh.half_edges[h].edge = edge_count;
                if let Some(t) = twin {
                    mesh.half_edges[t].edge = edge_count;
                }
                edge_count += 1;
            }
        }
        mesh.edge_count = edge_count;

        // Valence counts undirected edges, so boundary fans get their extra spoke.
        let mut outgoing = vec![0usize; mesh.vertices.len()];
        for h in 0..mesh.half_edges.len() {
            let he = &mesh.half_edges[h];
            outgoing[he.origin] += 1;
            if he.is_edge_representative() {
                let (a, b) = (he.origin, mesh.dest(h));
                mesh.vertices[a].valence += 1;
                mesh.vertices[b].valence += 1;
            }
        }

        for v in 0..mesh.vertices.len() {
            if mesh.outgoing_half_edges(v).len() != outgoing[v] {
                return Err(MeshError::NonManifoldVertex { vertex: v });
            }
        }

        mesh.set_base_mesh();
        mesh.extract_attributes();

        debug!(
            vertices = mesh.num_verts(),
            edges = mesh.num_edges(),
            faces = mesh.num_faces(),
            boundary = !mesh.is_closed(),
            "Built base mesh"
        );

        Ok(mesh)
    }
}
