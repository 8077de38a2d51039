// Host-side tests for the renderer hand-off and the background starfield.

use glam::{Mat4, Vec3};
use hero_core::{
    ambient_rotation, fibonacci_sphere, hit_proxy_scale, pack_instances, point_size, CloudParams,
    Layer, ParticleEngine, ParticleInstance, ParticleSink, Starfield, CLOUD_OPACITY,
    STAR_OPACITY,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct RecordingSink {
    uploads: Vec<(Layer, usize)>,
    models: Vec<(Layer, Mat4)>,
    last_cloud: Vec<ParticleInstance>,
    last_stars: Vec<ParticleInstance>,
}

impl ParticleSink for RecordingSink {
    fn upload(&mut self, layer: Layer, instances: &[ParticleInstance]) {
        self.uploads.push((layer, instances.len()));
        match layer {
            Layer::Cloud => self.last_cloud = instances.to_vec(),
            Layer::Stars => self.last_stars = instances.to_vec(),
        }
    }

    fn set_model(&mut self, layer: Layer, model: Mat4) {
        self.models.push((layer, model));
    }
}

fn engine() -> ParticleEngine {
    let params = CloudParams {
        seed: Some(10),
        ..CloudParams::default()
    };
    ParticleEngine::new(&fibonacci_sphere(64, 1.0), params).unwrap()
}

#[test]
fn instance_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    let instances = [ParticleInstance::default(); 2];
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), 64);
}

#[test]
fn pack_instances_interleaves_and_reuses_buffer() {
    let positions = [Vec3::X, Vec3::Y];
    let colors = [Vec3::new(0.1, 0.2, 0.3), Vec3::ONE];
    let mut out = vec![ParticleInstance::default(); 5];
    pack_instances(&positions, &colors, 0.02, 0.9, &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].pos, [1.0, 0.0, 0.0]);
    assert_eq!(out[0].color, [0.1, 0.2, 0.3, 0.9]);
    assert_eq!(out[1].size, 0.02);
}

#[test]
fn flush_uploads_only_after_a_frame() {
    let mut engine = engine();
    let mut sink = RecordingSink::default();

    engine.flush_to(&mut sink);
    assert!(sink.uploads.is_empty());
    assert_eq!(sink.models.len(), 1);

    engine.frame(1.0 / 60.0);
    engine.flush_to(&mut sink);
    assert_eq!(sink.uploads, vec![(Layer::Cloud, 64)]);
    assert!(sink
        .last_cloud
        .iter()
        .all(|i| i.color[3] == CLOUD_OPACITY));

    // Nothing changed since the last flush.
    engine.flush_to(&mut sink);
    assert_eq!(sink.uploads.len(), 1);
    assert_eq!(sink.models.len(), 3);
}

#[test]
fn flushed_instances_mirror_store() {
    let mut engine = engine();
    let mut sink = RecordingSink::default();
    engine.frame(1.0 / 60.0);
    engine.flush_to(&mut sink);
    let store = engine.store();
    for ((inst, p), c) in sink.last_cloud.iter().zip(store.positions()).zip(store.colors()) {
        assert_eq!(inst.pos, p.to_array());
        assert_eq!(&inst.color[..3], &c.to_array()[..]);
    }
}

#[test]
fn transform_follows_scroll() {
    assert_eq!(hit_proxy_scale(0.0), 1.0);
    assert_eq!(hit_proxy_scale(1.0), 5.0);
    assert!((point_size(1.0) - 0.035).abs() < 1e-7);
    assert!((point_size(0.0) - 0.015).abs() < 1e-7);
    let full = ambient_rotation(10.0, 0.0);
    let dispersed = ambient_rotation(10.0, 1.0);
    assert!((full - 0.3).abs() < 1e-6);
    assert!((dispersed - full * 0.5).abs() < 1e-6);
}

#[test]
fn frame_reports_hit_proxy_for_current_scroll() {
    let mut engine = engine();
    engine.state_mut().snap_scroll(0.25);
    let transform = engine.frame(1.0 / 60.0);
    assert_eq!(transform.hit_proxy_radius, engine.bounding_radius());
    assert_eq!(transform.hit_proxy_scale, 2.0);
    assert!((transform.hit_radius() - engine.bounding_radius() * 2.0).abs() < 1e-6);
    assert_eq!(engine.binding().transform(), transform);
}

#[test]
fn starfield_fills_a_shell() {
    let mut rng = StdRng::seed_from_u64(3);
    let stars = Starfield::new(2000, 15.0, &mut rng);
    assert_eq!(stars.len(), 2000);
    for p in stars.positions() {
        let r = p.length();
        assert!((7.5 - 1e-3..=15.0 + 1e-3).contains(&r), "star at radius {r}");
    }
    for s in stars.sizes() {
        assert!((0.1..=0.6).contains(s));
    }
}

#[test]
fn starfield_uploads_once_and_spins_slowly() {
    let mut rng = StdRng::seed_from_u64(4);
    let stars = Starfield::new(100, 15.0, &mut rng);
    let mut sink = RecordingSink::default();
    stars.upload_to(&mut sink);
    stars.flush_to(&mut sink, 0.0);
    stars.flush_to(&mut sink, 100.0);
    assert_eq!(sink.uploads, vec![(Layer::Stars, 100)]);
    assert_eq!(sink.models[0], (Layer::Stars, Mat4::IDENTITY));
    let (x, y) = Starfield::rotation(100.0);
    assert!((x - 0.5).abs() < 1e-6 && (y - 1.0).abs() < 1e-6);
    assert!(sink.models.iter().all(|(layer, _)| *layer == Layer::Stars));
    assert!(sink.last_stars.iter().all(|i| i.color == [1.0, 1.0, 1.0, STAR_OPACITY]));
}
