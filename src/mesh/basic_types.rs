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

use std::fmt;

use ahash::AHashMap;

use crate::{
    geometry::vector::Vector3,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// How subdivided shading normals are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AveragingMethod {
    /// Loop stencils on normals, then renormalized.
    Linear,
    /// Loop stencils refined on the unit sphere.
    Spherical,
    /// Interpolating Butterfly stencil on edge points.
    Butterfly,
}

impl AveragingMethod {
    pub const ALL: [AveragingMethod; 3] = [
        AveragingMethod::Linear,
        AveragingMethod::Spherical,
        AveragingMethod::Butterfly,
    ];
}

impl fmt::Display for AveragingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AveragingMethod::Linear => "linear",
            AveragingMethod::Spherical => "spherical",
            AveragingMethod::Butterfly => "butterfly",
        };
        f.write_str(name)
    }
}

/// Half-edge mesh with index-stable vertex, half-edge and face arrays.
///
/// Connectivity is written once, by [`MeshBuilder`](crate::mesh::builder::MeshBuilder)
/// or by the subdivider, and is read-only afterwards. The attribute buffers
/// are caches derived from it and may be recomputed at any time.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar = f64> {
    pub(crate) vertices: Vec<Vertex<T>>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) edge_count: usize,
    pub(crate) is_base_mesh: bool,

    pub(crate) vertex_coords: Vec<f32>,
    pub(crate) base_normals: Vec<Vector3>,
    pub(crate) subdivided_normals: AHashMap<AveragingMethod, Vec<Vector3>>,
    pub(crate) blend_weights: Vec<f64>,
    pub(crate) poly_indices: Vec<u32>,
}
