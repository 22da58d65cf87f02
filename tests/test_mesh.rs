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

use subshade::{
    AveragingMethod, Mesh, MeshBuilder, MeshError, Point3, ShadingConfig, Vector3, subdivide,
};

fn create_test_tetrahedron() -> Mesh {
    let mut builder = MeshBuilder::new();
    let v0 = builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    let v1 = builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    let v2 = builder.add_vertex(Point3::from_vals([0.0, 1.0, 0.0]));
    let v3 = builder.add_vertex(Point3::from_vals([0.0, 0.0, 1.0]));

    builder.add_triangle(v0, v2, v1);
    builder.add_triangle(v0, v1, v3);
    builder.add_triangle(v1, v2, v3);
    builder.add_triangle(v2, v0, v3);
    builder.build().unwrap()
}

fn make_single_triangle() -> Mesh {
    let mut builder = MeshBuilder::new();
    let a = builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    let b = builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    let c = builder.add_vertex(Point3::from_vals([0.0, 1.0, 0.0]));
    builder.add_triangle(a, b, c);
    builder.build().unwrap()
}

/// Centre vertex 0 surrounded by six boundary vertices, flat in the xy-plane.
fn make_hex_patch() -> Mesh {
    let mut builder = MeshBuilder::new();
    builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    for k in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * k as f64;
        builder.add_vertex(Point3::from_f64s(angle.cos(), angle.sin(), 0.0));
    }
    for i in 1..=6 {
        builder.add_triangle(0, i, i % 6 + 1);
    }
    builder.build().unwrap()
}

fn assert_connectivity_consistent(mesh: &Mesh) {
    for (h, he) in mesh.half_edges().iter().enumerate() {
        assert_eq!(he.index, h);
        assert_eq!(mesh.prev(mesh.next(h)), h);
        assert_eq!(mesh.next(mesh.prev(h)), h);
        assert_eq!(mesh.face_of(mesh.next(h)), he.face);
        if let Some(t) = he.twin {
            assert_eq!(mesh.twin(t), Some(h));
            assert_eq!(mesh.origin(t), mesh.dest(h));
            assert_eq!(mesh.edge_of(t), he.edge);
        }
        assert!(he.edge < mesh.num_edges());
    }
    for (v, vertex) in mesh.vertices().iter().enumerate() {
        if let Some(out) = vertex.out {
            assert_eq!(mesh.origin(out), v);
        }
    }
}

#[test]
fn test_tetrahedron_creation() {
    let mesh = create_test_tetrahedron();
    assert_eq!(mesh.num_verts(), 4);
    assert_eq!(mesh.num_faces(), 4);
    assert_eq!(mesh.num_half_edges(), 12);
    assert_eq!(mesh.num_edges(), 6);
    assert!(mesh.is_closed());
    assert!(mesh.is_triangle_mesh());
    assert!(mesh.is_base_mesh());
    assert_connectivity_consistent(&mesh);

    for v in 0..4 {
        assert_eq!(mesh.vertex(v).valence, 3);
        assert!(!mesh.is_boundary_vertex(v));
        assert_eq!(mesh.outgoing_half_edges(v).len(), 3);
    }
}

#[test]
fn test_face_half_edges_are_consecutive() {
    let mesh = create_test_tetrahedron();
    for f in 0..mesh.num_faces() {
        let hs = mesh.face_half_edges(f);
        assert_eq!(hs.as_slice(), &[3 * f, 3 * f + 1, 3 * f + 2]);
    }
    assert_eq!(mesh.face_vertices(0).as_slice(), &[0, 2, 1]);
}

#[test]
fn test_one_ring_of_boundary_vertex() {
    let mesh = make_hex_patch();
    assert_eq!(mesh.vertex(0).valence, 6);
    assert!(!mesh.is_boundary_vertex(0));

    let mut ring = mesh.one_ring(0).to_vec();
    ring.sort_unstable();
    assert_eq!(ring, vec![1, 2, 3, 4, 5, 6]);

    // Boundary vertex 1 sees the centre and both boundary neighbours.
    assert!(mesh.is_boundary_vertex(1));
    assert_eq!(mesh.vertex(1).valence, 3);
    let ring = mesh.one_ring(1);
    assert_eq!(ring.len(), 3);
    assert_eq!(ring[ring.len() - 1], 6);
    assert!(ring.contains(&0) && ring.contains(&2));

    let incoming = mesh.prev_boundary_half_edge(1).unwrap();
    let outgoing = mesh.next_boundary_half_edge(1).unwrap();
    assert_eq!(mesh.origin(incoming), 6);
    assert_eq!(mesh.dest(outgoing), 2);
    assert_eq!(mesh.boundary_vertices(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_edge_representatives_cover_each_edge_once() {
    let mesh = make_hex_patch();
    let mut edges: Vec<usize> = mesh.edge_representatives().map(|h| mesh.edge_of(h)).collect();
    edges.sort_unstable();
    assert_eq!(edges, (0..mesh.num_edges()).collect::<Vec<_>>());
    assert_eq!(mesh.num_edges(), 12);
}

#[test]
fn test_builder_rejects_bad_faces() {
    let mut builder = MeshBuilder::<f64>::new();
    builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    builder.add_face(&[0, 1]);
    assert_eq!(
        builder.build().unwrap_err(),
        MeshError::DegenerateFace { face: 0, corners: 2 }
    );

    let mut builder = MeshBuilder::<f64>::new();
    builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    builder.add_triangle(0, 1, 5);
    assert_eq!(
        builder.build().unwrap_err(),
        MeshError::VertexOutOfRange { face: 0, vertex: 5, count: 2 }
    );

    let mut builder = MeshBuilder::<f64>::new();
    builder.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    builder.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    builder.add_triangle(0, 1, 0);
    assert_eq!(
        builder.build().unwrap_err(),
        MeshError::RepeatedCorner { face: 0, vertex: 0 }
    );
}

#[test]
fn test_builder_rejects_non_manifold_input() {
    // Two faces traversing 0 -> 1 in the same direction.
    let mut builder = MeshBuilder::<f64>::new();
    for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, -1.0, 0.0]] {
        builder.add_vertex(Point3::from_vals(p));
    }
    builder.add_triangle(0, 1, 2);
    builder.add_triangle(0, 1, 3);
    assert_eq!(
        builder.build().unwrap_err(),
        MeshError::NonManifoldEdge { from: 0, to: 1 }
    );

    // Bow-tie: two fans meeting at vertex 0 only.
    let mut builder = MeshBuilder::<f64>::new();
    for p in [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [-1.0, -1.0, 0.0],
    ] {
        builder.add_vertex(Point3::from_vals(p));
    }
    builder.add_triangle(0, 1, 2);
    builder.add_triangle(0, 3, 4);
    assert_eq!(
        builder.build().unwrap_err(),
        MeshError::NonManifoldVertex { vertex: 0 }
    );
}

#[test]
fn test_quad_mesh_builds() {
    let mut builder = MeshBuilder::<f64>::new();
    for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]] {
        builder.add_vertex(Point3::from_vals(p));
    }
    builder.add_face(&[0, 1, 2, 3]);
    let mesh = builder.build().unwrap();

    assert!(!mesh.is_triangle_mesh());
    assert_eq!(mesh.face(0).valence, 4);
    assert_eq!(mesh.poly_indices(), &[0, 1, 2, 3]);
    for n in mesh.base_normals() {
        assert!((*n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }
}

#[test]
fn test_base_normals_are_unit() {
    let mesh = create_test_tetrahedron();
    assert_eq!(mesh.base_normals().len(), 4);
    for n in mesh.base_normals() {
        assert!((n.norm() - 1.0).abs() < 1e-5);
    }

    // The apex at the origin is flanked by three right angles, so its normal
    // points evenly away from the three axis-aligned faces.
    let expected = Vector3::new(-1.0, -1.0, -1.0).normalized();
    assert!((mesh.base_normals()[0] - expected).norm() < 1e-12);
}

#[test]
fn test_repeated_base_normals_stay_unit() {
    let mut mesh = subdivide(&make_hex_patch()).unwrap();
    for _ in 0..5 {
        mesh.compute_base_normals();
        assert_eq!(mesh.base_normals().len(), mesh.num_verts());
        for n in mesh.base_normals() {
            assert!((n.norm() - 1.0).abs() < 1e-5);
        }
    }
    assert!(mesh.half_edges().iter().any(|he| he.is_boundary()));
    assert!(!mesh.is_closed());
}

#[test]
fn test_base_mesh_seeds_shading_buffers() {
    let mesh = make_hex_patch();
    assert_eq!(mesh.averaging_methods(), AveragingMethod::ALL.to_vec());
    for method in AveragingMethod::ALL {
        assert_eq!(mesh.subdivided_normals(method).unwrap(), mesh.base_normals());
    }

    // Only the regular centre vertex has weight zero.
    let weights = mesh.blend_weights();
    assert_eq!(weights[0], 0.0);
    assert!(weights[1..].iter().all(|&w| w == 1.0));
}

#[test]
fn test_extracted_buffers() {
    let mesh = make_single_triangle();
    assert_eq!(
        mesh.vertex_coords(),
        &[0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(mesh.poly_indices(), &[0, 1, 2]);
}

#[test]
fn test_render_normals_selection() {
    let mesh = make_single_triangle();
    let base: Vec<f32> = mesh
        .base_normals()
        .iter()
        .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
        .collect();

    let off = ShadingConfig::new();
    assert_eq!(mesh.render_normals(&off), base);

    let on = ShadingConfig::new()
        .with_subdivision_shading(true)
        .with_averaging_method(AveragingMethod::Butterfly);
    assert_eq!(mesh.render_normals(&on), base);

    let blended = on.with_blend_normals(true);
    let normals = mesh.render_normals(&blended);
    assert_eq!(normals.len(), 9);
    for chunk in normals.chunks(3) {
        assert!((chunk[2] - 1.0).abs() < 1e-6);
    }
}
