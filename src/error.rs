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

//! Error types for mesh construction and subdivision.

use thiserror::Error;

use crate::mesh::basic_types::AveragingMethod;

/// Reasons a polygon list cannot become a manifold half-edge mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("Face {face} references vertex {vertex}, but the mesh has {count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        count: usize,
    },

    #[error("Face {face} has {corners} corners (at least 3 required)")]
    DegenerateFace { face: usize, corners: usize },

    #[error("Face {face} visits vertex {vertex} more than once")]
    RepeatedCorner { face: usize, vertex: usize },

    /// The directed edge is already used by another face: either the edge has
    /// more than two faces or neighbouring faces disagree on orientation.
    #[error("Directed edge {from} -> {to} belongs to more than one face")]
    NonManifoldEdge { from: usize, to: usize },

    #[error("Vertex {vertex} has more than one fan of faces")]
    NonManifoldVertex { vertex: usize },
}

/// Precondition violations detected before a subdivision step starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivisionError {
    #[error("Loop subdivision needs triangles, but face {face} has {valence} sides")]
    NonTriangularFace { face: usize, valence: usize },

    /// Half-edges of face `f` must be `3f`, `3f + 1`, `3f + 2` in `next` order.
    #[error("Half-edges of face {face} are not stored as a consecutive triple")]
    UnorderedFaceHalfEdges { face: usize },

    #[error("Control mesh has no {0} normals to refine")]
    MissingNormals(AveragingMethod),

    #[error("Control mesh has {found} {method} normals for {expected} vertices")]
    NormalLength {
        method: AveragingMethod,
        expected: usize,
        found: usize,
    },

    #[error("Control mesh has {found} blend weights for {expected} vertices")]
    BlendWeightLength { expected: usize, found: usize },

    #[error("Subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        current: usize,
        projected: usize,
        max: usize,
    },
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;

pub type SubdivisionResult<T> = std::result::Result<T, SubdivisionError>;
