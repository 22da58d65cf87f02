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

//! Subdivision shading: refinement of per-vertex shading normals and blend
//! weights, independent of the geometry.

pub mod butterfly;
pub mod loop_shader;
pub mod spherical;

use crate::{
    geometry::vector::Vector3,
    mesh::basic_types::{AveragingMethod, Mesh},
    numeric::scalar::Scalar,
};

pub use loop_shader::{LoopAveraging, refine_blend_weights};

/// Normal refinement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubdivisionShader {
    /// Loop stencils, linear and spherical averaging.
    Loop,
    /// Butterfly stencil on edge points, normals only.
    Butterfly,
}

impl SubdivisionShader {
    pub const ALL: [SubdivisionShader; 2] = [SubdivisionShader::Loop, SubdivisionShader::Butterfly];

    pub const fn methods(&self) -> &'static [AveragingMethod] {
        match self {
            SubdivisionShader::Loop => &[AveragingMethod::Linear, AveragingMethod::Spherical],
            SubdivisionShader::Butterfly => &[AveragingMethod::Butterfly],
        }
    }

    /// The shader that produces `method`.
    pub const fn for_method(method: AveragingMethod) -> SubdivisionShader {
        match method {
            AveragingMethod::Linear | AveragingMethod::Spherical => SubdivisionShader::Loop,
            AveragingMethod::Butterfly => SubdivisionShader::Butterfly,
        }
    }

    /// Refines the control mesh's `method` normals. `None` if this shader
    /// does not produce `method`.
    pub fn refine_normals<T: Scalar>(
        &self,
        control: &Mesh<T>,
        method: AveragingMethod,
        normals: &[Vector3],
    ) -> Option<Vec<Vector3>> {
        let refined = match (self, method) {
            (SubdivisionShader::Loop, AveragingMethod::Linear) => {
                loop_shader::refine_normals(control, normals, LoopAveraging::Linear)
            }
            (SubdivisionShader::Loop, AveragingMethod::Spherical) => {
                loop_shader::refine_normals(control, normals, LoopAveraging::Spherical)
            }
            (SubdivisionShader::Butterfly, AveragingMethod::Butterfly) => {
                butterfly::refine_normals(control, normals)
            }
            _ => return None,
        };
        Some(refined)
    }
}
