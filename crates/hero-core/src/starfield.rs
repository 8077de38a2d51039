//! Static background stars behind the cloud.

use crate::binding::{Layer, ParticleInstance, ParticleSink};
use crate::constants::{STAR_OPACITY, STAR_POINT_SIZE, STAR_SPIN_X, STAR_SPIN_Y};
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

pub struct Starfield {
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
    instances: Vec<ParticleInstance>,
}

impl Starfield {
    /// Scatter `count` stars in a shell between `radius / 2` and `radius`.
    pub fn new<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.gen_range(0.0..TAU);
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let r = radius * (0.5 + rng.gen::<f32>() * 0.5);
            positions.push(Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ));
            sizes.push(rng.gen::<f32>() * 0.5 + 0.1);
        }
        let instances = positions
            .iter()
            .zip(&sizes)
            .map(|(p, s)| ParticleInstance {
                pos: p.to_array(),
                size: STAR_POINT_SIZE * (0.5 + *s),
                color: [1.0, 1.0, 1.0, STAR_OPACITY],
            })
            .collect();
        Self {
            positions,
            sizes,
            instances,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Euler angles `(x, y)` of the slow drift at `time_sec`.
    #[inline]
    pub fn rotation(time_sec: f32) -> (f32, f32) {
        (time_sec * STAR_SPIN_X, time_sec * STAR_SPIN_Y)
    }

    pub fn model_matrix(time_sec: f32) -> Mat4 {
        let (x, y) = Self::rotation(time_sec);
        Mat4::from_rotation_x(x) * Mat4::from_rotation_y(y)
    }

    /// Stars never move relative to each other; upload once, then only
    /// [`Starfield::flush_to`] each frame.
    pub fn upload_to<S: ParticleSink + ?Sized>(&self, sink: &mut S) {
        sink.upload(Layer::Stars, &self.instances);
    }

    pub fn flush_to<S: ParticleSink + ?Sized>(&self, sink: &mut S, time_sec: f32) {
        sink.set_model(Layer::Stars, Self::model_matrix(time_sec));
    }
}
