//! Per-particle parallel arrays.
//!
//! Every array has exactly one entry per particle and the count is fixed when
//! the store is built. Only `positions`, `velocities` and `colors` change after
//! that; they are written by the integrator every frame.

use crate::color::{hsl, BASE_HSL, CYAN_INDEX, PALETTE, WHITE_INDEX};
use crate::constants::{
    ACCENT_PROBABILITY, EXPAND_JITTER_XY, EXPAND_JITTER_Z, EXPAND_MAX, EXPAND_MIN, ORIGIN_EPSILON,
    STRENGTH_MAX, STRENGTH_MIN, WHITE_PROBABILITY,
};
use crate::geometry::SampledCloud;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) colors: Vec<Vec3>,
    origins: Vec<Vec3>,
    expanded: Vec<Vec3>,
    expanded_colors: Vec<Vec3>,
    phases: Vec<f32>,
    strengths: Vec<f32>,
}

impl ParticleStore {
    /// Derive all per-particle attributes from a sampled cloud.
    pub fn build<R: Rng + ?Sized>(cloud: &SampledCloud, rng: &mut R) -> Self {
        let n = cloud.len();
        let base = hsl(BASE_HSL);
        let mut store = Self {
            positions: cloud.positions.clone(),
            velocities: vec![Vec3::ZERO; n],
            colors: vec![base; n],
            origins: cloud.positions.clone(),
            expanded: Vec::with_capacity(n),
            expanded_colors: Vec::with_capacity(n),
            phases: Vec::with_capacity(n),
            strengths: Vec::with_capacity(n),
        };

        for origin in &cloud.positions {
            store.phases.push(rng.gen_range(0.0..TAU));
            store.strengths.push(rng.gen_range(STRENGTH_MIN..=STRENGTH_MAX));
            store.expanded.push(expanded_target(*origin, rng));
            store.expanded_colors.push(hsl(PALETTE[palette_pick(rng)]));
        }
        store
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn origins(&self) -> &[Vec3] {
        &self.origins
    }

    pub fn expanded(&self) -> &[Vec3] {
        &self.expanded
    }

    pub fn expanded_colors(&self) -> &[Vec3] {
        &self.expanded_colors
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    pub fn strengths(&self) -> &[f32] {
        &self.strengths
    }

    /// Overwrite current positions, e.g. to start from a scattered state.
    /// Ignored if the length does not match the particle count.
    pub fn set_positions(&mut self, positions: &[Vec3]) {
        if positions.len() == self.positions.len() {
            self.positions.copy_from_slice(positions);
        }
    }
}

/// Push `origin` outward by a random factor and add a little jitter.
fn expanded_target<R: Rng + ?Sized>(origin: Vec3, rng: &mut R) -> Vec3 {
    let factor = rng.gen_range(EXPAND_MIN..EXPAND_MAX);
    let jitter = Vec3::new(
        rng.gen_range(-EXPAND_JITTER_XY..EXPAND_JITTER_XY),
        rng.gen_range(-EXPAND_JITTER_XY..EXPAND_JITTER_XY),
        rng.gen_range(-EXPAND_JITTER_Z..EXPAND_JITTER_Z),
    );
    if origin.length() > ORIGIN_EPSILON {
        origin * factor + jitter
    } else {
        origin
    }
}

// Mostly cyan and white, with a few accents from the rest of the palette.
fn palette_pick<R: Rng + ?Sized>(rng: &mut R) -> usize {
    if rng.gen_bool(ACCENT_PROBABILITY) {
        rng.gen_range(0..WHITE_INDEX)
    } else if rng.gen_bool(WHITE_PROBABILITY) {
        WHITE_INDEX
    } else {
        CYAN_INDEX
    }
}
