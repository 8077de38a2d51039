// Host-side tests for pointer smoothing and the hit-proxy ray test.

use glam::{Vec2, Vec3};
use hero_core::{
    hit_proxy_point, local_to_world, ray_sphere, world_to_local, Camera, CloudTransform,
    PointerTracker, Smoothing, FAR_SENTINEL,
};

#[test]
fn tracker_starts_and_releases_far_away() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.current(), FAR_SENTINEL);
    assert_eq!(tracker.target(), FAR_SENTINEL);

    tracker.set_target_local(Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(tracker.target(), Vec3::new(0.1, 0.2, 0.3));
    tracker.release();
    assert_eq!(tracker.target(), FAR_SENTINEL);
}

#[test]
fn non_finite_targets_are_ignored() {
    let mut tracker = PointerTracker::default();
    tracker.set_target_local(Vec3::X);
    tracker.set_target_local(Vec3::new(f32::NAN, 0.0, 0.0));
    tracker.set_target_world(Vec3::new(0.0, f32::INFINITY, 0.0), 0.4);
    assert_eq!(tracker.target(), Vec3::X);
}

#[test]
fn step_converges_on_target_while_active() {
    let mut tracker = PointerTracker::default();
    tracker.set_target_local(Vec3::new(0.5, -0.25, 0.0));
    let smoothing = Smoothing::exponential_from_per_frame(0.18);
    for _ in 0..400 {
        tracker.step(1.0 / 60.0, smoothing, true);
    }
    assert!((tracker.current() - tracker.target()).length() < 1e-4);
}

#[test]
fn inactive_step_drifts_back_to_sentinel() {
    let mut tracker = PointerTracker::default();
    tracker.set_target_local(Vec3::ZERO);
    tracker.step(1.0 / 60.0, Smoothing::PerFrame(1.0), true);
    assert_eq!(tracker.current(), Vec3::ZERO);

    tracker.step(1.0 / 60.0, Smoothing::PerFrame(1.0), false);
    assert_eq!(tracker.current(), FAR_SENTINEL);
    // The latest input is kept for when interaction resumes.
    assert_eq!(tracker.target(), Vec3::ZERO);
}

#[test]
fn exponential_smoothing_ignores_frame_splitting() {
    let smoothing = Smoothing::exponential_from_per_frame(0.18);
    let mut once = PointerTracker::default();
    let mut twice = PointerTracker::default();
    once.set_target_local(Vec3::ZERO);
    twice.set_target_local(Vec3::ZERO);

    once.step(1.0 / 30.0, smoothing, true);
    twice.step(1.0 / 60.0, smoothing, true);
    twice.step(1.0 / 60.0, smoothing, true);

    let a = once.current();
    let b = twice.current();
    assert!((a - b).length() / a.length() < 1e-4, "{a:?} vs {b:?}");
}

#[test]
fn world_and_local_round_trip() {
    let p = Vec3::new(0.7, -0.2, 1.1);
    for rotation in [0.0, 0.3, -1.2, 4.0] {
        let back = world_to_local(local_to_world(p, rotation), rotation);
        assert!((back - p).length() < 1e-5);
    }
    // A quarter turn about Y takes +X to -Z.
    let w = local_to_world(Vec3::X, std::f32::consts::FRAC_PI_2);
    assert!((w - Vec3::NEG_Z).length() < 1e-6);
}

#[test]
fn ray_sphere_hits_front_face() {
    let hit = ray_sphere(Vec3::new(0.0, 0.0, 4.0), Vec3::NEG_Z, Vec3::ZERO, 1.5);
    assert_eq!(hit, Some(2.5));
}

#[test]
fn ray_sphere_misses_and_ignores_spheres_behind() {
    assert_eq!(
        ray_sphere(Vec3::new(0.0, 3.0, 4.0), Vec3::NEG_Z, Vec3::ZERO, 1.5),
        None
    );
    assert_eq!(
        ray_sphere(Vec3::new(0.0, 0.0, 4.0), Vec3::Z, Vec3::ZERO, 1.5),
        None
    );
}

#[test]
fn ray_from_inside_reports_exit() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
    assert_eq!(hit, Some(2.0));
}

fn transform(radius: f32, scale: f32) -> CloudTransform {
    CloudTransform {
        rotation_y: 0.0,
        hit_proxy_radius: radius,
        hit_proxy_scale: scale,
        point_size: 0.015,
    }
}

#[test]
fn centre_ray_hits_front_of_proxy() {
    let camera = Camera::looking_at_origin(4.0, 1.0);
    let hit = hit_proxy_point(&camera, Vec2::ZERO, &transform(1.5, 1.0)).expect("hit");
    assert!((hit - Vec3::new(0.0, 0.0, 1.5)).length() < 1e-4, "{hit:?}");
}

#[test]
fn corner_ray_misses_small_proxy() {
    let camera = Camera::looking_at_origin(4.0, 1.0);
    assert!(hit_proxy_point(&camera, Vec2::new(0.95, 0.95), &transform(0.5, 1.0)).is_none());
}

#[test]
fn grown_proxy_catches_wider_rays() {
    let camera = Camera::looking_at_origin(4.0, 1.0);
    let ndc = Vec2::new(0.8, 0.0);
    assert!(hit_proxy_point(&camera, ndc, &transform(1.0, 1.0)).is_none());
    // Camera inside the grown proxy: the ray exits through the far side.
    let hit = hit_proxy_point(&camera, ndc, &transform(1.0, 5.0)).expect("hit");
    assert!((hit.length() - 5.0).abs() < 1e-3);
}

#[test]
fn degenerate_proxy_never_hits() {
    let camera = Camera::looking_at_origin(4.0, 1.0);
    assert!(hit_proxy_point(&camera, Vec2::ZERO, &transform(0.0, 1.0)).is_none());
    assert!(hit_proxy_point(&camera, Vec2::ZERO, &transform(f32::NAN, 1.0)).is_none());
}

#[test]
fn camera_at_the_centre_yields_no_hit() {
    let camera = Camera::looking_at_origin(0.0, 1.0);
    assert!(hit_proxy_point(&camera, Vec2::ZERO, &transform(1.0, 1.0)).is_none());
}
