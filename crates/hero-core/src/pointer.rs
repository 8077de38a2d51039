use crate::binding::CloudTransform;
use crate::constants::FAR_SENTINEL;
use crate::params::Smoothing;
use crate::state::Camera;
use glam::{Quat, Vec2, Vec3};

/// Pointer position in the cloud's local space, smoothed toward the latest
/// input so the influence region glides rather than jumps.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    current: Vec3,
    target: Vec3,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            current: FAR_SENTINEL,
            target: FAR_SENTINEL,
        }
    }
}

impl PointerTracker {
    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target_local(&mut self, p: Vec3) {
        if p.is_finite() {
            self.target = p;
        }
    }

    /// Take a world-space hit point and undo the cloud's ambient spin.
    pub fn set_target_world(&mut self, p: Vec3, rotation_y: f32) {
        self.set_target_local(world_to_local(p, rotation_y));
    }

    /// Pointer left the interactive region.
    pub fn release(&mut self) {
        self.target = FAR_SENTINEL;
    }

    /// Move `current` toward the target, or toward the sentinel when the
    /// pointer is not allowed to interact.
    pub fn step(&mut self, dt_sec: f32, smoothing: Smoothing, active: bool) {
        let goal = if active { self.target } else { FAR_SENTINEL };
        let alpha = smoothing.alpha(dt_sec);
        self.current = self.current.lerp(goal, alpha);
    }
}

#[inline]
pub fn world_to_local(p: Vec3, rotation_y: f32) -> Vec3 {
    Quat::from_rotation_y(-rotation_y) * p
}

#[inline]
pub fn local_to_world(p: Vec3, rotation_y: f32) -> Vec3 {
    Quat::from_rotation_y(rotation_y) * p
}

/// Nearest non-negative hit distance of a ray against a sphere.
///
/// `ray_dir` must be normalised. A ray starting inside the sphere reports the
/// exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

/// World-space point where the ray through `ndc` meets the cloud's hit proxy.
pub fn hit_proxy_point(camera: &Camera, ndc: Vec2, transform: &CloudTransform) -> Option<Vec3> {
    let radius = transform.hit_radius();
    if !(radius.is_finite() && radius > 0.0) {
        return None;
    }
    let (origin, dir) = camera.ray_from_ndc(ndc.x, ndc.y);
    if dir == Vec3::ZERO {
        return None;
    }
    ray_sphere(origin, dir, Vec3::ZERO, radius).map(|t| origin + dir * t)
}
