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

use smallvec::SmallVec;

use crate::{impl_mesh, mesh::half_edge::HalfEdge};

impl_mesh! {
    #[inline]
    pub fn origin(&self, h: usize) -> usize {
        self.half_edges[h].origin
    }

    /// Vertex `h` points at.
    #[inline]
    pub fn dest(&self, h: usize) -> usize {
        self.half_edges[self.half_edges[h].next].origin
    }

    #[inline]
    pub fn next(&self, h: usize) -> usize {
        self.half_edges[h].next
    }

    #[inline]
    pub fn prev(&self, h: usize) -> usize {
        self.half_edges[h].prev
    }

    #[inline]
    pub fn twin(&self, h: usize) -> Option<usize> {
        self.half_edges[h].twin
    }

    #[inline]
    pub fn face_of(&self, h: usize) -> usize {
        self.half_edges[h].face
    }

    #[inline]
    pub fn edge_of(&self, h: usize) -> usize {
        self.half_edges[h].edge
    }

    #[inline]
    pub fn is_boundary_edge(&self, h: usize) -> bool {
        self.half_edges[h].is_boundary()
    }

    /// Next outgoing half-edge around `origin(h)` in umbrella order
    /// (`twin` then `next`). `None` when `h` lies on the boundary.
    #[inline]
    pub fn rot_next_around_vertex(&self, h: usize) -> Option<usize> {
        self.half_edges[h].twin.map(|t| self.half_edges[t].next)
    }

    /// Inverse of [`Mesh::rot_next_around_vertex`]. `None` when `prev(h)`
    /// lies on the boundary.
    #[inline]
    pub fn rot_prev_around_vertex(&self, h: usize) -> Option<usize> {
        self.half_edges[self.half_edges[h].prev].twin
    }

    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        let Some(start) = self.vertices[v].out else {
            return false;
        };
        let mut h = start;
        loop {
            match self.rot_next_around_vertex(h) {
                None => return true,
                Some(n) if n == start => return false,
                Some(n) => h = n,
            }
        }
    }

    /// The outgoing half-edge of `v` without a twin, if `v` is on the boundary.
    pub fn next_boundary_half_edge(&self, v: usize) -> Option<usize> {
        let start = self.vertices[v].out?;
        let mut h = start;
        loop {
            match self.rot_next_around_vertex(h) {
                None => return Some(h),
                Some(n) if n == start => return None,
                Some(n) => h = n,
            }
        }
    }

    /// The incoming half-edge of `v` without a twin, if `v` is on the boundary.
    pub fn prev_boundary_half_edge(&self, v: usize) -> Option<usize> {
        let start = self.vertices[v].out?;
        let mut h = start;
        loop {
            match self.rot_prev_around_vertex(h) {
                None => return Some(self.prev(h)),
                Some(p) if p == start => return None,
                Some(p) => h = p,
            }
        }
    }

    /// Every outgoing half-edge of `v` exactly once, in umbrella order.
    /// On the boundary the walk starts right after the incoming boundary
    /// half-edge and ends with the outgoing one.
    pub fn outgoing_half_edges(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut result = SmallVec::new();
        let Some(start) = self.vertices[v].out else {
            return result;
        };

        let mut first = start;
        loop {
            match self.rot_prev_around_vertex(first) {
                None => break,
                Some(p) if p == start => {
                    first = start;
                    break;
                }
                Some(p) => first = p,
            }
        }

        let mut h = first;
        loop {
            result.push(h);
            match self.rot_next_around_vertex(h) {
                Some(n) if n != first => h = n,
                _ => break,
            }
        }
        result
    }

    /// Neighbouring vertices of `v`, in the order of [`Mesh::outgoing_half_edges`],
    /// followed by the far end of the incoming boundary edge for boundary vertices.
    pub fn one_ring(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut ring: SmallVec<[usize; 8]> = self
            .outgoing_half_edges(v)
            .iter()
            .map(|&h| self.dest(h))
            .collect();
        if let Some(incoming) = self.prev_boundary_half_edge(v) {
            ring.push(self.origin(incoming));
        }
        ring
    }

    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 4]> {
        let face = &self.faces[f];
        let mut result = SmallVec::with_capacity(face.valence);
        let mut h = face.side;
        for _ in 0..face.valence {
            result.push(h);
            h = self.half_edges[h].next;
        }
        result
    }

    pub fn face_vertices(&self, f: usize) -> SmallVec<[usize; 4]> {
        self.face_half_edges(f)
            .iter()
            .map(|&h| self.half_edges[h].origin)
            .collect()
    }

    /// One half-edge per undirected edge: the higher-indexed half of an
    /// interior pair, or the single half-edge of a boundary edge.
    pub fn edge_representatives(&self) -> impl Iterator<Item = usize> + '_ {
        self.half_edges
            .iter()
            .filter(|he| he.is_edge_representative())
            .map(|he| he.index)
    }

    pub fn boundary_vertices(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&v| self.is_boundary_vertex(v))
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        !self.half_edges.iter().any(HalfEdge::is_boundary)
    }

    /// True when every face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.faces.iter().all(|f| f.valence == 3)
    }
}
