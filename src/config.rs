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

//! Immutable settings passed into each subdivision or render call.

use smallvec::SmallVec;

use crate::{mesh::basic_types::AveragingMethod, mesh_processing::shading::SubdivisionShader};

/// Parameters for one Loop subdivision step.
#[derive(Debug, Clone, PartialEq)]
pub struct SubdivisionParams {
    /// Shaders whose normal buffers are refined alongside the geometry.
    pub shaders: SmallVec<[SubdivisionShader; 2]>,

    /// Maximum faces allowed in the result (prevents runaway memory use).
    pub max_faces: usize,
}

impl Default for SubdivisionParams {
    fn default() -> Self {
        Self {
            shaders: SmallVec::from_slice(&SubdivisionShader::ALL),
            max_faces: 20_000_000,
        }
    }
}

impl SubdivisionParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refine only the shading normals of `shaders`.
    #[must_use]
    pub fn with_shaders(mut self, shaders: &[SubdivisionShader]) -> Self {
        self.shaders.clear();
        for &shader in shaders {
            if !self.shaders.contains(&shader) {
                self.shaders.push(shader);
            }
        }
        self
    }

    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Averaging methods produced by the active shaders.
    pub fn methods(&self) -> impl Iterator<Item = AveragingMethod> + '_ {
        self.shaders.iter().flat_map(|s| s.methods().iter().copied())
    }
}

/// Which normals a renderer should draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadingConfig {
    /// Use refined shading normals instead of the mesh's own normals.
    pub subdivision_shading: bool,
    /// Interpolate refined and base normals by the blend weights.
    pub blend_normals: bool,
    pub averaging_method: AveragingMethod,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            subdivision_shading: false,
            blend_normals: false,
            averaging_method: AveragingMethod::Linear,
        }
    }
}

impl ShadingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_subdivision_shading(mut self, enabled: bool) -> Self {
        self.subdivision_shading = enabled;
        self
    }

    #[must_use]
    pub const fn with_blend_normals(mut self, enabled: bool) -> Self {
        self.blend_normals = enabled;
        self
    }

    #[must_use]
    pub const fn with_averaging_method(mut self, method: AveragingMethod) -> Self {
        self.averaging_method = method;
        self
    }
}
