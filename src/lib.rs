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

//! Loop subdivision of triangle meshes with subdivision shading.
//!
//! A [`MeshBuilder`] turns an indexed polygon list into a half-edge [`Mesh`].
//! [`subdivide`] refines a triangle mesh once with Loop's stencils and, along
//! with the geometry, refines per-vertex shading normals (linear, spherical or
//! Butterfly averaging) and blend weights. [`SubdivisionHierarchy`] keeps
//! every level of a base mesh's refinement.
//!
//! ```
//! use subshade::{AveragingMethod, MeshBuilder, Point3, subdivide};
//!
//! let mut builder = MeshBuilder::<f64>::new();
//! let a = builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
//! let b = builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
//! let c = builder.add_vertex(Point3::from_vals([0.0, 1.0, 0.0]));
//! builder.add_triangle(a, b, c);
//!
//! let base = builder.build().unwrap();
//! let fine = subdivide(&base).unwrap();
//! assert_eq!(fine.num_verts(), 6);
//! assert_eq!(fine.num_faces(), 4);
//! assert_eq!(fine.subdivided_normals(AveragingMethod::Spherical).unwrap().len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod mesh_processing;
pub mod numeric;

pub use config::{ShadingConfig, SubdivisionParams};
pub use error::{MeshError, MeshResult, SubdivisionError, SubdivisionResult};
pub use geometry::{Point3, Vector3};
pub use mesh::{AveragingMethod, Mesh, MeshBuilder};
pub use mesh_processing::{SubdivisionHierarchy, SubdivisionShader, subdivide, subdivide_with};
pub use numeric::{ExactRational, Scalar, Weight};
