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

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

use subshade::{
    AveragingMethod, Mesh, MeshBuilder, Point3, ShadingConfig, SubdivisionParams,
    SubdivisionShader, Vector3, subdivide, subdivide_with,
};

fn create_octahedron() -> Mesh {
    create_scaled_octahedron(&[1.0; 6])
}

fn create_scaled_octahedron(scales: &[f64; 6]) -> Mesh {
    let axes = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let mut builder = MeshBuilder::new();
    for (axis, s) in axes.iter().zip(scales) {
        builder.add_vertex(Point3::from_f64s(axis[0] * s, axis[1] * s, axis[2] * s));
    }
    for i in 0..4 {
        let j = (i + 1) % 4;
        builder.add_triangle(i, j, 4);
        builder.add_triangle(j, i, 5);
    }
    builder.build().unwrap()
}

/// Regular centre vertex with a ring at height `ring_z`.
fn make_hex_patch(ring_z: f64) -> Mesh {
    let mut builder = MeshBuilder::new();
    builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    for k in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * k as f64;
        builder.add_vertex(Point3::from_f64s(angle.cos(), angle.sin(), ring_z));
    }
    for i in 1..=6 {
        builder.add_triangle(0, i, i % 6 + 1);
    }
    builder.build().unwrap()
}

fn edge_point(control: &Mesh, a: usize, b: usize) -> usize {
    let h = (0..control.num_half_edges())
        .find(|&h| control.origin(h) == a && control.dest(h) == b)
        .unwrap();
    control.num_verts() + control.edge_of(h)
}

fn assert_unit(normals: &[Vector3]) {
    for n in normals {
        assert!(n.is_finite());
        assert!((n.norm() - 1.0).abs() < 1e-5, "normal {:?} is not unit", n);
    }
}

fn assert_vec_eq(a: &Vector3, b: &Vector3) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
}

#[test]
fn test_every_buffer_is_refined() {
    let base = create_octahedron();
    let fine = subdivide(&base).unwrap();

    assert_eq!(fine.averaging_methods(), AveragingMethod::ALL.to_vec());
    for method in AveragingMethod::ALL {
        let normals = fine.subdivided_normals(method).unwrap();
        assert_eq!(normals.len(), fine.num_verts());
        assert_unit(normals);
    }
    assert_eq!(fine.base_normals().len(), fine.num_verts());
    assert_unit(fine.base_normals());
    assert_eq!(fine.blend_weights().len(), fine.num_verts());
    assert_eq!(fine.vertex_coords().len(), 3 * fine.num_verts());
    assert_eq!(fine.poly_indices().len(), 3 * fine.num_faces());
}

#[test]
fn test_symmetric_octahedron_normals() {
    let base = create_octahedron();
    for n in base.base_normals() {
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }
    assert_vec_eq(&base.base_normals()[0], &Vector3::new(1.0, 0.0, 0.0));

    let fine = subdivide(&base).unwrap();
    let diagonal = Vector3::new(1.0, 1.0, 0.0).normalized();
    let e01 = edge_point(&base, 0, 1);

    for method in AveragingMethod::ALL {
        let normals = fine.subdivided_normals(method).unwrap();
        assert_vec_eq(&normals[0], &Vector3::new(1.0, 0.0, 0.0));
        assert_vec_eq(&normals[4], &Vector3::new(0.0, 0.0, 1.0));
        assert_vec_eq(&normals[e01], &diagonal);
    }
}

#[test]
fn test_flat_patch_is_a_spherical_fixed_point() {
    let base = make_hex_patch(0.0);
    let fine = subdivide(&base).unwrap();
    let finer = subdivide(&fine).unwrap();
    let up = Vector3::new(0.0, 0.0, 1.0);

    for mesh in [&fine, &finer] {
        for method in AveragingMethod::ALL {
            for n in mesh.subdivided_normals(method).unwrap() {
                assert_vec_eq(n, &up);
            }
        }
    }
}

#[test]
fn test_spherical_stays_close_to_linear() {
    let base = make_hex_patch(-0.5);
    let fine = subdivide(&base).unwrap();
    let linear = fine.subdivided_normals(AveragingMethod::Linear).unwrap();
    let spherical = fine.subdivided_normals(AveragingMethod::Spherical).unwrap();

    // The centre's neighbourhood is rotationally symmetric.
    assert_vec_eq(&linear[0], &Vector3::new(0.0, 0.0, 1.0));
    assert_vec_eq(&spherical[0], &Vector3::new(0.0, 0.0, 1.0));

    for (l, s) in linear.iter().zip(spherical) {
        assert!(l.angle_to(s) < 0.1);
    }
}

#[test]
fn test_butterfly_keeps_existing_normals() {
    let base = create_scaled_octahedron(&[1.0, 1.3, 0.8, 1.1, 0.9, 1.2]);
    let fine = subdivide(&base).unwrap();
    let refined = fine.subdivided_normals(AveragingMethod::Butterfly).unwrap();
    let control = base.subdivided_normals(AveragingMethod::Butterfly).unwrap();

    for v in 0..base.num_verts() {
        assert_vec_eq(&refined[v], &control[v]);
    }
}

#[test]
fn test_butterfly_edge_point_on_octahedron() {
    let base = create_octahedron();
    let fine = subdivide(&base).unwrap();
    let butterfly = fine.subdivided_normals(AveragingMethod::Butterfly).unwrap();
    let diagonal = Vector3::new(0.0, 1.0, 1.0).normalized();
    assert_vec_eq(&butterfly[edge_point(&base, 1, 4)], &diagonal);
}

#[test]
fn test_butterfly_edge_points_near_boundary() {
    let base = make_hex_patch(-0.5);
    let fine = subdivide(&base).unwrap();
    let butterfly = fine.subdivided_normals(AveragingMethod::Butterfly).unwrap();
    let n = base.subdivided_normals(AveragingMethod::Butterfly).unwrap();

    // Edge 0 -> 1 lies in faces (0, 1, 2) and (0, 6, 1). Its wings are the
    // apexes across 2-0 and 0-6, i.e. vertices 3 and 5; the wings across the
    // boundary edges 1-2 and 6-1 are missing and contribute nothing.
    let expected =
        ((n[0] + n[1]) * 0.5 + (n[2] + n[6]) * 0.125 - (n[3] + n[5]) * 0.0625).normalized();
    assert_vec_eq(&butterfly[edge_point(&base, 0, 1)], &expected);

    // Boundary edges take the normalized two-point average.
    let expected = ((n[1] + n[2]) * 0.5).normalized();
    assert_vec_eq(&butterfly[edge_point(&base, 1, 2)], &expected);
}

#[test]
fn test_blend_weights() {
    let base = make_hex_patch(0.0);
    let fine = subdivide(&base).unwrap();
    let weights = fine.blend_weights();

    assert_relative_eq!(weights[0], 0.375);
    assert_relative_eq!(weights[1], 1.0);
    assert_relative_eq!(weights[edge_point(&base, 0, 1)], 0.625);
    assert_relative_eq!(weights[edge_point(&base, 1, 2)], 1.0);

    let finer = subdivide(&fine).unwrap();
    assert!(finer.blend_weights().iter().all(|w| (0.0..=1.0).contains(w)));
}

#[test]
fn test_shader_selection() {
    let base = create_octahedron();
    let params = SubdivisionParams::new().with_shaders(&[SubdivisionShader::Butterfly]);
    let fine = subdivide_with(&base, &params).unwrap();

    assert_eq!(fine.averaging_methods(), vec![AveragingMethod::Butterfly]);
    assert!(fine.subdivided_normals(AveragingMethod::Linear).is_none());
    assert_eq!(fine.blend_weights().len(), fine.num_verts());

    // Linear normals are gone, so further Loop shading must be refused.
    let loop_params = SubdivisionParams::new().with_shaders(&[SubdivisionShader::Loop]);
    assert!(subdivide_with(&fine, &loop_params).is_err());
    assert!(subdivide_with(&fine, &params).is_ok());

    // Rendering a missing buffer falls back to the base normals.
    let config = ShadingConfig::new()
        .with_subdivision_shading(true)
        .with_averaging_method(AveragingMethod::Spherical);
    let base_flat: Vec<f32> = fine
        .base_normals()
        .iter()
        .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
        .collect();
    assert_eq!(fine.render_normals(&config), base_flat);
}

#[test]
fn test_blended_normals_interpolate() {
    let base = make_hex_patch(-0.5);
    let fine = subdivide(&base).unwrap();
    let blended = fine.blended_normals(AveragingMethod::Linear).unwrap();
    let subdivided = fine.subdivided_normals(AveragingMethod::Linear).unwrap();
    let weights = fine.blend_weights();

    for v in 0..fine.num_verts() {
        let expected = subdivided[v] * weights[v] + fine.base_normals()[v] * (1.0 - weights[v]);
        assert_vec_eq(&blended[v], &expected);
    }

    let config = ShadingConfig::new()
        .with_subdivision_shading(true)
        .with_blend_normals(true);
    assert_eq!(fine.render_normals(&config).len(), 3 * fine.num_verts());
}

#[test]
fn test_random_octahedra() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut scales = [0.0; 6];
        for s in scales.iter_mut() {
            *s = rng.random_range(0.5..1.5);
        }
        let base = create_scaled_octahedron(&scales);
        let fine = subdivide(&base).unwrap();
        let finer = subdivide(&fine).unwrap();

        for mesh in [&fine, &finer] {
            assert_unit(mesh.base_normals());
            for method in AveragingMethod::ALL {
                assert_unit(mesh.subdivided_normals(method).unwrap());
            }
            assert!(mesh.blend_weights().iter().all(|w| (0.0..=1.0).contains(w)));
        }
        // Every octahedron vertex is extraordinary; the stencils preserve constants.
        for &w in finer.blend_weights() {
            assert_relative_eq!(w, 1.0, epsilon = 1e-12);
        }
    }
}
