//! Scene-level state shared by the integrator and the frontends.
//!
//! These types avoid platform-specific APIs and are used on both native and
//! web targets. Inputs (scroll, pointer) are written by event handlers as the
//! latest known value and consumed once per frame by [`SceneState::advance`].

use crate::constants::{CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::params::CloudParams;
use crate::pointer::PointerTracker;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the cloud centre.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalised device coordinates.
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize_or_zero();
        (self.eye, rd)
    }
}

/// Smoothed inputs driving one cloud.
#[derive(Clone, Debug)]
pub struct SceneState {
    scroll_target: f32,
    scroll: f32,
    interaction_radius: f32,
    time: f32,
    pub pointer: PointerTracker,
}

impl SceneState {
    pub fn new(params: &CloudParams) -> Self {
        Self {
            scroll_target: 0.0,
            scroll: 0.0,
            interaction_radius: params.interaction_radius,
            time: 0.0,
            pointer: PointerTracker::default(),
        }
    }

    /// Latest raw scroll progress; clamped to \[0, 1\].
    pub fn set_scroll(&mut self, raw: f32) {
        if raw.is_finite() {
            self.scroll_target = raw.clamp(0.0, 1.0);
        }
    }

    /// Jump straight to a scroll level, e.g. when the page loads mid-scroll.
    pub fn snap_scroll(&mut self, raw: f32) {
        self.set_scroll(raw);
        self.scroll = self.scroll_target;
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn scroll_target(&self) -> f32 {
        self.scroll_target
    }

    #[inline]
    pub fn interaction_radius(&self) -> f32 {
        self.interaction_radius
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Whether the pointer may displace particles at the current scroll level.
    #[inline]
    pub fn interaction_active(&self, params: &CloudParams) -> bool {
        self.scroll < params.interaction_cutoff
    }

    /// Advance time and all smoothed values by one frame.
    pub fn advance(&mut self, dt_sec: f32, params: &CloudParams) {
        self.time += dt_sec;
        let a = params.scroll_smoothing.alpha(dt_sec);
        self.scroll += (self.scroll_target - self.scroll) * a;
        let r = params.radius_smoothing.alpha(dt_sec);
        self.interaction_radius += (params.interaction_radius - self.interaction_radius) * r;
        let active = self.interaction_active(params);
        self.pointer.step(dt_sec, params.pointer_smoothing, active);
    }
}
