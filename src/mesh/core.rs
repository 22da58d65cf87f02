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

use crate::{
    geometry::{point::Point3, vector::Vector3},
    impl_mesh,
    mesh::{basic_types::AveragingMethod, face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    /// An empty mesh. Populated by the builder or the subdivider.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_count: 0,
            is_base_mesh: false,
            vertex_coords: Vec::new(),
            base_normals: Vec::new(),
            subdivided_normals: AHashMap::new(),
            blend_weights: Vec::new(),
            poly_indices: Vec::new(),
        }
    }

    /// Allocates placeholder elements for every slot, so that refinement can
    /// write elements by index in any order.
    pub(crate) fn with_sizes(num_verts: usize, num_half_edges: usize, num_faces: usize, num_edges: usize) -> Self {
        let mut mesh = Self::new();
        mesh.vertices = (0..num_verts).map(|v| Vertex::new(Point3::origin(), v)).collect();
        mesh.half_edges = (0..num_half_edges).map(HalfEdge::new).collect();
        mesh.faces = (0..num_faces).map(Face::new).collect();
        mesh.edge_count = num_edges;
        mesh
    }

    #[inline]
    pub fn num_verts(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    #[inline]
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex(&self, v: usize) -> &Vertex<T> {
        &self.vertices[v]
    }

    #[inline]
    pub fn half_edge(&self, h: usize) -> &HalfEdge {
        &self.half_edges[h]
    }

    #[inline]
    pub fn face(&self, f: usize) -> &Face {
        &self.faces[f]
    }

    #[inline]
    pub fn position(&self, v: usize) -> &Point3<T> {
        &self.vertices[v].position
    }

    /// True for the original, un-subdivided mesh a hierarchy starts from.
    #[inline]
    pub fn is_base_mesh(&self) -> bool {
        self.is_base_mesh
    }

    /// Flattened `xyz` coordinates, as of the last [`Mesh::extract_attributes`].
    pub fn vertex_coords(&self) -> &[f32] {
        &self.vertex_coords
    }

    /// Face-major polygon corner indices, as of the last [`Mesh::extract_attributes`].
    pub fn poly_indices(&self) -> &[u32] {
        &self.poly_indices
    }

    /// Angle-weighted vertex normals of this mesh's own geometry.
    pub fn base_normals(&self) -> &[Vector3] {
        &self.base_normals
    }

    pub fn subdivided_normals(&self, method: AveragingMethod) -> Option<&[Vector3]> {
        self.subdivided_normals.get(&method).map(Vec::as_slice)
    }

    /// Averaging methods with a subdivided-normal buffer, in a stable order.
    pub fn averaging_methods(&self) -> Vec<AveragingMethod> {
        let mut methods: Vec<_> = self.subdivided_normals.keys().copied().collect();
        methods.sort();
        methods
    }

    pub fn blend_weights(&self) -> &[f64] {
        &self.blend_weights
    }
}

impl<T: crate::numeric::scalar::Scalar> Default for crate::mesh::basic_types::Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}
