//! Per-frame particle integrator.
//!
//! Each frame every particle gets a base position between its origin and its
//! dispersed target (driven by scroll), a pointer push on top of that while
//! the cloud is formed, and then springs toward the result with damped
//! velocity. Colour follows the same scalars and is never integrated.

use crate::binding::{
    ambient_rotation, hit_proxy_scale, pack_instances, point_size, CloudTransform, Layer,
    ParticleInstance, ParticleSink, RenderBinding,
};
use crate::color::{hsl, mix, BASE_HSL, HOVER_HSL};
use crate::constants::{
    CLOUD_OPACITY, DISTANCE_EPSILON, NOISE_POSITION_SCALE, NOISE_TIME_SCALE, RADIUS_EPSILON,
    TANGENT_STRENGTH,
};
use crate::error::Result;
use crate::geometry::{effective_radius, SampledCloud};
use crate::noise::ValueNoise;
use crate::params::CloudParams;
use crate::particles::ParticleStore;
use crate::state::SceneState;
use glam::Vec3;
use rand::prelude::*;

/// Cubic ease `3t² − 2t³` on `t` clamped to \[0, 1\].
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    if t.is_nan() {
        return 0.0;
    }
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear pointer influence: 1 at the pointer, 0 at and beyond `radius`.
#[inline]
pub fn influence(distance: f32, radius: f32) -> f32 {
    let r = effective_radius(radius);
    if distance.is_nan() {
        return 0.0;
    }
    (1.0 - distance / r).clamp(0.0, 1.0)
}

/// Formed→dispersed blend for a scroll level; reaches 1 at `threshold`.
#[inline]
pub fn blend_factor(scroll: f32, threshold: f32) -> f32 {
    if scroll.is_nan() {
        return 0.0;
    }
    (scroll / threshold.max(RADIUS_EPSILON)).clamp(0.0, 1.0)
}

/// Rest position for a particle at blend `t`: the origin at 0 and the
/// dispersed target at 1, both exactly.
#[inline]
pub fn base_position(origin: Vec3, expanded: Vec3, t: f32) -> Vec3 {
    mix(origin, expanded, t)
}

/// Pointer push on a single particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    /// Directly away from the pointer.
    pub radial: Vec3,
    /// Perpendicular drift, weaker than `radial`.
    pub tangential: Vec3,
    /// Eased influence in \[0, 1\].
    pub influence: f32,
}

impl Displacement {
    #[inline]
    pub fn total(&self) -> Vec3 {
        self.radial + self.tangential
    }
}

/// Compute the push a pointer at `pointer` applies to a particle at `particle`.
///
/// `radius` and `magnitude` are in local units (already scaled by the bounding
/// radius). `wobble` is a time-varying angle offset added to `phase` so the
/// tangential drift swirls instead of pointing one way.
pub fn displacement(
    particle: Vec3,
    pointer: Vec3,
    radius: f32,
    magnitude: f32,
    strength: f32,
    phase: f32,
    wobble: f32,
) -> Displacement {
    let offset = particle - pointer;
    let dist = offset.length();
    let eased = smoothstep(influence(dist, radius));
    if eased <= 0.0 || !dist.is_finite() || dist <= DISTANCE_EPSILON {
        return Displacement {
            influence: eased,
            ..Default::default()
        };
    }

    let dir = offset / dist;
    let radial_strength = magnitude * eased * strength;
    let (u, v) = dir.any_orthonormal_pair();
    let angle = phase + wobble;
    let tangent = u * angle.cos() + v * angle.sin();

    Displacement {
        radial: dir * radial_strength,
        tangential: tangent * radial_strength * TANGENT_STRENGTH,
        influence: eased,
    }
}

pub struct ParticleEngine {
    params: CloudParams,
    store: ParticleStore,
    bounding_radius: f32,
    state: SceneState,
    noise: ValueNoise,
    binding: RenderBinding,
    base_color: Vec3,
    hover_color: Vec3,
    scratch: Vec<ParticleInstance>,
}

impl ParticleEngine {
    pub fn new(cloud: &SampledCloud, params: CloudParams) -> Result<Self> {
        params.validate()?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let noise = ValueNoise::new(rng.gen_range(0.0..1000.0));
        let store = ParticleStore::build(cloud, &mut rng);
        log::info!(
            "[engine] particles={} bounding_radius={:.3} seed={:?}",
            store.len(),
            cloud.bounding_radius,
            params.seed
        );
        Ok(Self::assemble(params, store, cloud.bounding_radius, noise))
    }

    /// An inert cloud with no particles, used when the asset never arrives.
    pub fn empty(params: CloudParams) -> Self {
        Self::assemble(params, ParticleStore::default(), 0.0, ValueNoise::new(0.0))
    }

    fn assemble(
        params: CloudParams,
        store: ParticleStore,
        bounding_radius: f32,
        noise: ValueNoise,
    ) -> Self {
        let state = SceneState::new(&params);
        Self {
            params,
            store,
            bounding_radius,
            state,
            noise,
            binding: RenderBinding::default(),
            base_color: hsl(BASE_HSL),
            hover_color: hsl(HOVER_HSL),
            scratch: Vec::new(),
        }
    }

    pub fn params(&self) -> &CloudParams {
        &self.params
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }

    pub fn binding(&self) -> &RenderBinding {
        &self.binding
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Pointer influence extent in local units.
    #[inline]
    pub fn effective_interaction_radius(&self) -> f32 {
        (self.state.interaction_radius() * self.bounding_radius).max(RADIUS_EPSILON)
    }

    /// Maximum radial push in local units.
    #[inline]
    pub fn effective_displacement(&self) -> f32 {
        self.params.displacement * self.bounding_radius
    }

    pub fn set_scroll(&mut self, raw: f32) {
        self.state.set_scroll(raw);
    }

    /// Retarget the pointer influence radius (fraction of the bounding
    /// radius). The live radius eases toward it via `radius_smoothing`.
    /// Non-finite or negative values are ignored.
    pub fn set_interaction_radius(&mut self, radius: f32) {
        if radius.is_finite() && radius >= 0.0 {
            self.params.interaction_radius = radius;
        }
    }

    /// Feed a world-space hit on the pointer proxy.
    pub fn pointer_world(&mut self, hit: Vec3) {
        let rotation_y = self.binding.transform().rotation_y;
        self.state.pointer.set_target_world(hit, rotation_y);
    }

    pub fn release_pointer(&mut self) {
        self.state.pointer.release();
    }

    /// Advance the simulation by one rendered frame of `dt_sec` seconds.
    pub fn frame(&mut self, dt_sec: f32) -> CloudTransform {
        let dt = if dt_sec.is_finite() {
            dt_sec.max(0.0)
        } else {
            0.0
        };
        self.state.advance(dt, &self.params);

        let scroll = self.state.scroll();
        let time = self.state.time();
        let transform = CloudTransform {
            rotation_y: ambient_rotation(time, scroll),
            hit_proxy_radius: self.bounding_radius,
            hit_proxy_scale: hit_proxy_scale(scroll),
            point_size: point_size(self.state.scroll_target()),
        };
        self.binding.set_transform(transform);

        if self.store.is_empty() {
            return transform;
        }

        let blend = blend_factor(scroll, self.params.dispersal_threshold);
        let interactive = self.state.interaction_active(&self.params) && blend < 1.0;
        let radius = self.effective_interaction_radius();
        let magnitude = self.effective_displacement();
        let max_step = self
            .params
            .max_speed
            .map(|m| m * effective_radius(self.bounding_radius));
        let pointer = self.state.pointer.current();
        let stiffness = self.params.stiffness;
        let damping = self.params.damping;
        let noise_t = time * NOISE_TIME_SCALE;

        let store = &mut self.store;
        for i in 0..store.len() {
            let origin = store.origins()[i];
            let base = base_position(origin, store.expanded()[i], blend);
            let p = store.positions[i];

            let push = if interactive {
                let wobble = self.noise.sample(
                    origin.x * NOISE_POSITION_SCALE,
                    origin.y * NOISE_POSITION_SCALE,
                    noise_t,
                );
                displacement(
                    p,
                    pointer,
                    radius,
                    magnitude,
                    store.strengths()[i],
                    store.phases()[i],
                    wobble,
                )
            } else {
                Displacement::default()
            };

            let target = base + push.total() * (1.0 - blend);
            let mut v = (store.velocities[i] + (target - p) * stiffness) * damping;
            if let Some(max) = max_step {
                v = v.clamp_length_max(max);
            }
            if !v.is_finite() {
                v = Vec3::ZERO;
            }
            let next = p + v;
            store.positions[i] = if next.is_finite() { next } else { base };
            store.velocities[i] = v;

            let hover = mix(self.base_color, self.hover_color, push.influence * (1.0 - blend));
            store.colors[i] = mix(hover, store.expanded_colors()[i], blend);
        }

        self.binding.mark_dirty();
        transform
    }

    /// Push the latest transform to `sink`, plus positions and colours if they
    /// changed since the last flush.
    pub fn flush_to<S: ParticleSink + ?Sized>(&mut self, sink: &mut S) {
        let transform = self.binding.transform();
        sink.set_model(Layer::Cloud, transform.model_matrix());
        let (positions_dirty, colors_dirty) = self.binding.take_dirty();
        if !(positions_dirty || colors_dirty) {
            return;
        }
        pack_instances(
            self.store.positions(),
            self.store.colors(),
            transform.point_size,
            CLOUD_OPACITY,
            &mut self.scratch,
        );
        sink.upload(Layer::Cloud, &self.scratch);
    }
}
