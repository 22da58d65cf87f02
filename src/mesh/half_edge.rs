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

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub origin: usize,       // vertex this half-edge leaves from
    pub face: usize,
    pub next: usize,
    pub prev: usize,
    pub twin: Option<usize>, // None on the mesh boundary
    pub edge: usize,         // undirected edge shared with the twin
    pub index: usize,
}

impl HalfEdge {
    pub fn new(index: usize) -> Self {
        Self {
            origin: usize::MAX,
            face: usize::MAX,
            next: usize::MAX,
            prev: usize::MAX,
            twin: None,
            edge: usize::MAX,
            index,
        }
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }

    /// Whether this half-edge is the one that speaks for its undirected edge
    /// (the higher index of the pair, or the only one on a boundary).
    #[inline]
    pub fn is_edge_representative(&self) -> bool {
        self.twin.is_none_or(|t| self.index > t)
    }
}
