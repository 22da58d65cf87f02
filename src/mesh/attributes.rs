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
use tracing::warn;

use crate::{
    config::ShadingConfig,
    geometry::{
        util::{flatten_f32, polygon_normal},
        vector::Vector3,
    },
    impl_mesh,
    mesh::basic_types::AveragingMethod,
};

impl_mesh! {
    /// Recomputes the unit normal of every face from the current positions.
    pub fn compute_face_normals(&mut self) {
        for f in 0..self.faces.len() {
            let corners: SmallVec<[Vector3; 4]> = self
                .face_vertices(f)
                .iter()
                .map(|&v| self.vertices[v].position.to_vector())
                .collect();
            let normal = polygon_normal(&corners);
            debug_assert!(normal.is_some(), "face {} has zero area", f);
            self.faces[f].normal = normal.unwrap_or_default();
        }
    }

    /// Angle-weighted vertex normals: every face corner contributes its face
    /// normal scaled by the interior angle at that corner.
    pub fn compute_base_normals(&mut self) {
        self.compute_face_normals();

        let mut normals = vec![Vector3::zero(); self.vertices.len()];
        for he in &self.half_edges {
            let centre = self.vertices[he.origin].position.to_vector();
            let before = self.vertices[self.origin(he.prev)].position.to_vector();
            let after = self.vertices[self.dest(he.index)].position.to_vector();

            let edge_a = before - centre;
            let edge_b = after - centre;
            if edge_a.try_normalized().is_none() || edge_b.try_normalized().is_none() {
                debug_assert!(false, "zero-length edge at half-edge {}", he.index);
                continue;
            }

            let angle = edge_a.angle_to(&edge_b);
            normals[he.origin] += self.faces[he.face].normal * angle;
        }

        for n in normals.iter_mut() {
            *n = n.normalized();
        }
        self.base_normals = normals;
    }

    /// Marks extraordinary vertices: 1.0 where the valence differs from 6.
    pub fn compute_base_blend_weights(&mut self) {
        self.blend_weights = self
            .vertices
            .iter()
            .map(|v| if v.valence != 6 { 1.0 } else { 0.0 })
            .collect();
    }

    /// Marks this mesh as the root of a subdivision hierarchy and seeds every
    /// shading buffer that later levels refine.
    pub fn set_base_mesh(&mut self) {
        self.is_base_mesh = true;
        self.compute_base_normals();
        for method in AveragingMethod::ALL {
            self.subdivided_normals.insert(method, self.base_normals.clone());
        }
        self.compute_base_blend_weights();
    }

    /// Refreshes the base normals and the flat coordinate and index buffers a
    /// renderer reads.
    pub fn extract_attributes(&mut self) {
        self.compute_base_normals();

        self.vertex_coords.clear();
        self.vertex_coords.reserve(self.vertices.len() * 3);
        for v in &self.vertices {
            let p = v.position.to_vector();
            self.vertex_coords.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }

        self.poly_indices.clear();
        self.poly_indices.reserve(self.half_edges.len());
        for f in 0..self.faces.len() {
            let mut h = self.faces[f].side;
            for _ in 0..self.faces[f].valence {
                self.poly_indices.push(self.half_edges[h].origin as u32);
                h = self.half_edges[h].next;
            }
        }
    }

    /// `w * subdivided + (1 - w) * base` per vertex, with `w` the blend weight.
    pub fn blended_normals(&self, method: AveragingMethod) -> Option<Vec<Vector3>> {
        let subdivided = self.subdivided_normals.get(&method)?;
        if subdivided.len() != self.base_normals.len() || self.blend_weights.len() != self.base_normals.len() {
            return None;
        }

        let blended = subdivided
            .iter()
            .zip(&self.base_normals)
            .zip(&self.blend_weights)
            .map(|((&s, &b), &w)| s * w + b * (1.0 - w))
            .collect();
        Some(blended)
    }

    /// Shading normals selected by `config`, flattened to `xyz` floats.
    ///
    /// Falls back to the base normals when the requested buffer is missing.
    pub fn render_normals(&self, config: &ShadingConfig) -> Vec<f32> {
        if !config.subdivision_shading {
            return flatten_f32(&self.base_normals);
        }

        let method = config.averaging_method;
        let selected = if config.blend_normals {
            self.blended_normals(method)
        } else {
            self.subdivided_normals.get(&method).cloned()
        };

        match selected {
            Some(normals) => flatten_f32(&normals),
            None => {
                warn!(%method, "no subdivided normals for averaging method, using base normals");
                flatten_f32(&self.base_normals)
            }
        }
    }
}
