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

//! Refinement stencils as explicit `(vertex, weight)` lists.
//!
//! The same stencil refines positions, shading normals, blend weights and the
//! exponential-map vectors of spherical averaging; only the attribute it is
//! applied to changes.

use smallvec::SmallVec;

use crate::{
    geometry::{point::Point3, vector::Vector3},
    mesh::basic_types::Mesh,
    numeric::{scalar::Scalar, weight::Weight},
};

/// Butterfly tension parameter `w`.
pub const BUTTERFLY_TENSION: Weight = Weight::new(1, 16);

/// A per-vertex attribute that can be combined linearly.
pub trait Blend {
    fn blank() -> Self;
    fn add_weighted(&mut self, value: &Self, weight: Weight);
}

impl Blend for f64 {
    fn blank() -> Self {
        0.0
    }

    fn add_weighted(&mut self, value: &Self, weight: Weight) {
        *self += value * weight.to_f64();
    }
}

impl Blend for Vector3 {
    fn blank() -> Self {
        Vector3::zero()
    }

    fn add_weighted(&mut self, value: &Self, weight: Weight) {
        *self += *value * weight.to_f64();
    }
}

impl<T: Scalar> Blend for Point3<T> {
    fn blank() -> Self {
        Point3::origin()
    }

    fn add_weighted(&mut self, value: &Self, weight: Weight) {
        let w: T = weight.to_scalar();
        *self = self.add(&value.scaled(&w));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stencil {
    terms: SmallVec<[(usize, Weight); 8]>,
}

impl Stencil {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: usize, weight: Weight) {
        self.terms.push((vertex, weight));
    }

    pub fn terms(&self) -> &[(usize, Weight)] {
        &self.terms
    }

    pub fn total_weight(&self) -> Weight {
        self.terms.iter().map(|&(_, w)| w).sum()
    }

    /// Combined weight of `vertex` (a vertex may appear in several terms).
    pub fn weight_of(&self, vertex: usize) -> Weight {
        self.terms
            .iter()
            .filter(|&&(v, _)| v == vertex)
            .map(|&(_, w)| w)
            .sum()
    }

    pub fn apply<A: Blend>(&self, values: &[A]) -> A {
        self.apply_by(|v| &values[v])
    }

    pub fn apply_by<'a, A: Blend + 'a>(&self, value: impl Fn(usize) -> &'a A) -> A {
        let mut acc = A::blank();
        for &(v, w) in &self.terms {
            acc.add_weighted(value(v), w);
        }
        acc
    }

    /// Like [`Stencil::apply`], for values computed on the fly.
    pub fn apply_with<A: Blend>(&self, mut value: impl FnMut(usize) -> A) -> A {
        let mut acc = A::blank();
        for &(v, w) in &self.terms {
            acc.add_weighted(&value(v), w);
        }
        acc
    }
}

/// Loop weight `beta` for an interior vertex of the given valence.
pub fn loop_beta(valence: usize) -> Weight {
    match valence {
        3 => Weight::new(3, 16),
        6 => Weight::new(1, 16),
        k => Weight::new(3, 8 * k as i64),
    }
}

/// Stencil of the vertex point replacing `v`.
pub fn loop_vertex_stencil<T: Scalar>(mesh: &Mesh<T>, v: usize) -> Stencil {
    let mut stencil = Stencil::new();
    let Some(out) = mesh.vertex(v).out else {
        stencil.push(v, Weight::ONE);
        return stencil;
    };

    if let (Some(incoming), Some(outgoing)) =
        (mesh.prev_boundary_half_edge(v), mesh.next_boundary_half_edge(v))
    {
        stencil.push(mesh.origin(incoming), Weight::new(1, 8));
        stencil.push(v, Weight::new(6, 8));
        stencil.push(mesh.dest(outgoing), Weight::new(1, 8));
        return stencil;
    }

    let valence = mesh.vertex(v).valence;
    let beta = loop_beta(valence);
    let centre = if valence == 6 {
        beta * 10
    } else {
        Weight::ONE - beta * valence as i64
    };
    stencil.push(v, centre);

    let mut h = out;
    loop {
        stencil.push(mesh.dest(h), beta);
        match mesh.rot_next_around_vertex(h) {
            Some(n) if n != out => h = n,
            _ => break,
        }
    }
    debug_assert_eq!(stencil.terms().len(), valence + 1, "valence of vertex {} is stale", v);
    stencil
}

/// Stencil of the edge point on the undirected edge of `h`.
pub fn loop_edge_stencil<T: Scalar>(mesh: &Mesh<T>, h: usize) -> Stencil {
    let mut stencil = Stencil::new();
    let a = mesh.origin(h);
    let b = mesh.dest(h);

    let Some(t) = mesh.twin(h) else {
        stencil.push(a, Weight::new(1, 2));
        stencil.push(b, Weight::new(1, 2));
        return stencil;
    };

    stencil.push(a, Weight::new(6, 16));
    stencil.push(b, Weight::new(6, 16));
    stencil.push(mesh.origin(mesh.prev(h)), Weight::new(2, 16));
    stencil.push(mesh.origin(mesh.prev(t)), Weight::new(2, 16));
    stencil
}

/// Eight-point Butterfly stencil of the edge point on the edge of `h`.
///
/// A wing vertex whose triangle is missing contributes nothing, the same as a
/// zero vector in its slot.
pub fn butterfly_edge_stencil<T: Scalar>(mesh: &Mesh<T>, h: usize) -> Stencil {
    let mut stencil = Stencil::new();
    let a = mesh.origin(h);
    let b = mesh.dest(h);

    let Some(t) = mesh.twin(h) else {
        stencil.push(a, Weight::new(1, 2));
        stencil.push(b, Weight::new(1, 2));
        return stencil;
    };

    let w = BUTTERFLY_TENSION;
    stencil.push(a, Weight::new(1, 2));
    stencil.push(b, Weight::new(1, 2));
    stencil.push(mesh.origin(mesh.prev(h)), w * 2);
    stencil.push(mesh.origin(mesh.prev(t)), w * 2);

    // Apex of the triangle across the edge of `x`.
    let wing = |x: usize| mesh.twin(x).map(|tx| mesh.origin(mesh.prev(tx)));
    let wings = [
        wing(mesh.prev(h)),
        wing(mesh.next(t)),
        wing(mesh.prev(t)),
        wing(mesh.next(h)),
    ];
    for v in wings.into_iter().flatten() {
        stencil.push(v, -w);
    }
    stencil
}
