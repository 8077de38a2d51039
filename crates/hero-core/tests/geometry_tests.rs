// Host-side tests for vertex sampling and recentring.

use glam::{Mat4, Vec3};
use hero_core::{fibonacci_sphere, recenter, sample_nodes, MeshNode, BOUNDING_RADIUS_SCALE};

fn triangle() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
    ]
}

#[test]
fn sampled_cloud_is_centred_on_origin() {
    let nodes = vec![MeshNode::new(
        Mat4::from_translation(Vec3::new(10.0, -4.0, 2.0)),
        triangle(),
    )];
    let cloud = sample_nodes(&nodes, 1);
    assert_eq!(cloud.len(), 3);
    let centroid: Vec3 = cloud.positions.iter().copied().sum::<Vec3>() / cloud.len() as f32;
    assert!(centroid.length() < 1e-5, "centroid not at origin: {centroid:?}");
}

#[test]
fn bounding_radius_pads_max_distance() {
    let cloud = recenter(vec![Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
    assert!((cloud.bounding_radius - 2.0 * BOUNDING_RADIUS_SCALE).abs() < 1e-5);
}

#[test]
fn node_transforms_are_applied_before_centring() {
    // Uniform scale doubles every distance from the centroid.
    let unit = sample_nodes(&[MeshNode::new(Mat4::IDENTITY, triangle())], 1);
    let scaled = sample_nodes(
        &[MeshNode::new(Mat4::from_scale(Vec3::splat(2.0)), triangle())],
        1,
    );
    assert!((scaled.bounding_radius - unit.bounding_radius * 2.0).abs() < 1e-4);
    for (a, b) in unit.positions.iter().zip(&scaled.positions) {
        assert!((*a * 2.0 - *b).length() < 1e-5);
    }
}

#[test]
fn stride_counts_across_nodes() {
    let nodes = vec![
        MeshNode::new(Mat4::IDENTITY, triangle()),
        MeshNode::new(Mat4::IDENTITY, triangle()),
    ];
    assert_eq!(sample_nodes(&nodes, 1).len(), 6);
    assert_eq!(sample_nodes(&nodes, 2).len(), 3);
    assert_eq!(sample_nodes(&nodes, 4).len(), 2);
    // stride 0 is treated as 1
    assert_eq!(sample_nodes(&nodes, 0).len(), 6);
}

#[test]
fn non_finite_vertices_are_dropped() {
    let nodes = vec![MeshNode::new(
        Mat4::IDENTITY,
        vec![Vec3::ONE, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::NEG_ONE],
    )];
    let cloud = sample_nodes(&nodes, 1);
    assert_eq!(cloud.len(), 2);
    assert!(cloud.positions.iter().all(|p| p.is_finite()));
}

#[test]
fn empty_input_gives_inert_cloud() {
    let cloud = sample_nodes(&[], 1);
    assert!(cloud.is_empty());
    assert_eq!(cloud.bounding_radius, 0.0);
    assert!(cloud.effective_radius() > 0.0);

    let cloud = sample_nodes(&[MeshNode::new(Mat4::IDENTITY, Vec::new())], 3);
    assert!(cloud.is_empty());
}

#[test]
fn fibonacci_sphere_points_sit_on_radius() {
    let radius = 1.3;
    let cloud = fibonacci_sphere(2000, radius);
    assert_eq!(cloud.len(), 2000);
    for p in &cloud.positions {
        // Recentring moves the centroid only by a hair for an even spiral.
        assert!((p.length() - radius).abs() < 0.01, "off-sphere point {p:?}");
    }
    assert!((cloud.bounding_radius - radius * BOUNDING_RADIUS_SCALE).abs() < 0.02);
}

#[test]
fn fibonacci_sphere_handles_tiny_counts() {
    assert!(fibonacci_sphere(0, 1.0).is_empty());
    let one = fibonacci_sphere(1, 1.0);
    assert_eq!(one.len(), 1);
    assert_eq!(one.positions[0], Vec3::ZERO);
    assert_eq!(one.bounding_radius, 0.0);
}
