//! Hand-off between the integrator and whatever draws the particles.

use crate::constants::{
    HIT_PROXY_SCROLL_GROWTH, POINT_SIZE_BASE, POINT_SIZE_SCROLL, ROTATION_SCROLL_SLOWDOWN,
    ROTATION_SPEED,
};
use glam::{Mat4, Vec3};

/// Whole-cloud transform and sizing for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CloudTransform {
    pub rotation_y: f32,
    /// Unscaled radius of the invisible pointer-collision sphere.
    pub hit_proxy_radius: f32,
    pub hit_proxy_scale: f32,
    pub point_size: f32,
}

impl CloudTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }

    /// Radius the pointer ray should be tested against this frame.
    #[inline]
    pub fn hit_radius(&self) -> f32 {
        self.hit_proxy_radius * self.hit_proxy_scale
    }
}

/// Slow spin around Y that eases off as the cloud disperses.
#[inline]
pub fn ambient_rotation(time_sec: f32, scroll: f32) -> f32 {
    time_sec * ROTATION_SPEED * (1.0 - scroll * ROTATION_SCROLL_SLOWDOWN)
}

#[inline]
pub fn hit_proxy_scale(scroll: f32) -> f32 {
    1.0 + scroll * HIT_PROXY_SCROLL_GROWTH
}

#[inline]
pub fn point_size(scroll: f32) -> f32 {
    POINT_SIZE_BASE + scroll * POINT_SIZE_SCROLL
}

/// Dirty flags plus the transform the renderer should apply.
#[derive(Clone, Debug, Default)]
pub struct RenderBinding {
    positions_dirty: bool,
    colors_dirty: bool,
    transform: CloudTransform,
}

impl RenderBinding {
    pub fn mark_dirty(&mut self) {
        self.positions_dirty = true;
        self.colors_dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.positions_dirty || self.colors_dirty
    }

    /// Returns `(positions_dirty, colors_dirty)` and clears both.
    pub fn take_dirty(&mut self) -> (bool, bool) {
        let flags = (self.positions_dirty, self.colors_dirty);
        self.positions_dirty = false;
        self.colors_dirty = false;
        flags
    }

    pub fn set_transform(&mut self, transform: CloudTransform) {
        self.transform = transform;
    }

    pub fn transform(&self) -> CloudTransform {
        self.transform
    }
}

/// GPU-facing per-particle record: position, sprite size and RGBA.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Interleave positions and colours into `out`, reusing its allocation.
pub fn pack_instances(
    positions: &[Vec3],
    colors: &[Vec3],
    size: f32,
    opacity: f32,
    out: &mut Vec<ParticleInstance>,
) {
    out.clear();
    out.extend(
        positions
            .iter()
            .zip(colors.iter())
            .map(|(p, c)| ParticleInstance {
                pos: p.to_array(),
                size,
                color: [c.x, c.y, c.z, opacity],
            }),
    );
}

/// Draw layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Stars,
    Cloud,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Stars, Layer::Cloud];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Layer::Stars => 0,
            Layer::Cloud => 1,
        }
    }
}

/// Anything that can receive particle instances for drawing.
pub trait ParticleSink {
    /// Replace the instance data of `layer`.
    fn upload(&mut self, layer: Layer, instances: &[ParticleInstance]);
    /// Set the model transform of `layer` for the next draw.
    fn set_model(&mut self, layer: Layer, model: Mat4);
}
