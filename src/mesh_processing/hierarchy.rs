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

use tracing::{debug, info};

use crate::{
    config::SubdivisionParams,
    error::SubdivisionResult,
    mesh::basic_types::Mesh,
    mesh_processing::loop_subdivision::subdivide_with,
    numeric::scalar::Scalar,
};

/// A base mesh and its successive Loop refinements.
///
/// Level 0 is the base mesh; level `k + 1` is level `k` subdivided once. Levels
/// are computed on demand and kept until [`SubdivisionHierarchy::truncate`].
#[derive(Debug, Clone)]
pub struct SubdivisionHierarchy<T: Scalar = f64> {
    levels: Vec<Mesh<T>>,
    params: SubdivisionParams,
}

impl<T: Scalar> SubdivisionHierarchy<T> {
    pub fn new(base: Mesh<T>) -> Self {
        Self::with_params(base, SubdivisionParams::default())
    }

    pub fn with_params(base: Mesh<T>, params: SubdivisionParams) -> Self {
        Self {
            levels: vec![base],
            params,
        }
    }

    /// Deepest level computed so far.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn level(&self, k: usize) -> Option<&Mesh<T>> {
        self.levels.get(k)
    }

    pub fn levels(&self) -> &[Mesh<T>] {
        &self.levels
    }

    pub fn base(&self) -> &Mesh<T> {
        &self.levels[0]
    }

    pub fn finest(&self) -> &Mesh<T> {
        &self.levels[self.depth()]
    }

    pub fn params(&self) -> &SubdivisionParams {
        &self.params
    }

    /// Makes sure level `depth` exists, subdividing only the missing levels,
    /// and returns it. On error the levels computed so far are kept.
    pub fn subdivide_to(&mut self, depth: usize) -> SubdivisionResult<&Mesh<T>> {
        while self.depth() < depth {
            let next = subdivide_with(self.finest(), &self.params)?;
            self.levels.push(next);
            debug!(level = self.depth(), faces = self.finest().num_faces(), "Subdivision level added");
        }
        info!(depth, faces = self.levels[depth].num_faces(), "Subdivision hierarchy ready");
        Ok(&self.levels[depth])
    }

    /// Drops every level deeper than `depth`. The base mesh is always kept.
    pub fn truncate(&mut self, depth: usize) {
        self.levels.truncate(depth.saturating_add(1));
    }
}
