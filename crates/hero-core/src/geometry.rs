//! Vertex sampling for the particle cloud.
//!
//! A cloud is built either from mesh vertices (see [`crate::asset`]) or from a
//! synthetic Fibonacci sphere. In both cases the result is centred on the
//! local origin and carries a bounding-sphere radius that every distance-based
//! effect parameter is scaled by.

use crate::constants::{BOUNDING_RADIUS_SCALE, RADIUS_EPSILON};
use glam::{Mat4, Vec3};

/// Vertices of one mesh primitive together with its world transform.
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub transform: Mat4,
    pub positions: Vec<Vec3>,
}

impl MeshNode {
    pub fn new(transform: Mat4, positions: Vec<Vec3>) -> Self {
        Self {
            transform,
            positions,
        }
    }
}

/// Centred particle positions plus the normalisation radius.
#[derive(Clone, Debug, Default)]
pub struct SampledCloud {
    pub positions: Vec<Vec3>,
    pub bounding_radius: f32,
}

impl SampledCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounding radius clamped away from zero, safe to divide by.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        effective_radius(self.bounding_radius)
    }
}

#[inline]
pub fn effective_radius(bounding_radius: f32) -> f32 {
    if bounding_radius.is_finite() {
        bounding_radius.max(RADIUS_EPSILON)
    } else {
        RADIUS_EPSILON
    }
}

/// Transform, subsample and recentre the vertices of `nodes`.
///
/// `stride` keeps every Nth vertex counted across all nodes; a stride of 0 is
/// treated as 1. Non-finite vertices are dropped.
pub fn sample_nodes(nodes: &[MeshNode], stride: usize) -> SampledCloud {
    let stride = stride.max(1);
    let mut positions = Vec::new();
    let mut index = 0usize;
    for node in nodes {
        for p in &node.positions {
            if index % stride == 0 {
                let world = node.transform.transform_point3(*p);
                if world.is_finite() {
                    positions.push(world);
                }
            }
            index += 1;
        }
    }
    recenter(positions)
}

/// Recentre `positions` on their centroid and compute the bounding radius.
pub fn recenter(mut positions: Vec<Vec3>) -> SampledCloud {
    if positions.is_empty() {
        log::warn!("[geometry] no vertices sampled; cloud will be empty");
        return SampledCloud::default();
    }
    let sum: Vec3 = positions.iter().copied().sum();
    let center = sum / positions.len() as f32;
    let mut max_dist = 0.0f32;
    for p in positions.iter_mut() {
        *p -= center;
        max_dist = max_dist.max(p.length());
    }
    SampledCloud {
        positions,
        bounding_radius: max_dist * BOUNDING_RADIUS_SCALE,
    }
}

/// Evenly distribute `count` points over a sphere using the golden-angle spiral.
pub fn fibonacci_sphere(count: usize, radius: f32) -> SampledCloud {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let positions = (0..count)
        .map(|i| {
            let y = if count > 1 {
                1.0 - 2.0 * (i as f32 + 0.5) / count as f32
            } else {
                0.0
            };
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect();
    recenter(positions)
}
