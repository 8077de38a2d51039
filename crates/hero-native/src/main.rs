mod cli;
mod controls;
mod gpu;

use anyhow::Result;
use clap::Parser;
use hero_core::asset::load_glb;
use hero_core::{
    fibonacci_sphere, hit_proxy_point, sample_nodes, Camera, CloudParams, ParticleEngine,
    SampledCloud, Starfield, MAX_FRAME_DT_SEC, STARFIELD_SEED, STAR_COUNT, STAR_RADIUS,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use winit::dpi::PhysicalPosition;
use winit::keyboard::{Key, NamedKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use crate::cli::Cli;
use crate::gpu::GpuState;

/// Everything the event loop mutates between frames.
struct Viewer {
    engine: ParticleEngine,
    stars: Starfield,
    cursor: Option<PhysicalPosition<f64>>,
    scroll: f32,
    started: Instant,
    last_frame: Instant,
}

impl Viewer {
    fn new(engine: ParticleEngine, stars: Starfield) -> Self {
        let now = Instant::now();
        Self {
            engine,
            stars,
            cursor: None,
            scroll: 0.0,
            started: now,
            last_frame: now,
        }
    }

    fn camera(&self, aspect: f32) -> Camera {
        Camera::looking_at_origin(self.engine.params().camera_distance, aspect)
    }

    /// Step the pointer influence radius up or down by one notch.
    fn nudge_radius(&mut self, steps: i32) {
        let current = self.engine.params().interaction_radius;
        let radius = controls::step_radius(current, steps);
        self.engine.set_interaction_radius(radius);
        log::info!("[input] interaction radius -> {:.2}", radius);
    }

    fn reset(&mut self) {
        self.scroll = 0.0;
        self.engine.state_mut().snap_scroll(0.0);
        log::info!("[input] scroll reset");
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt_sec = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;

        let camera = self.camera(gpu.aspect());
        self.engine.set_scroll(self.scroll);
        match self.cursor.and_then(|c| self.pointer_hit(&camera, c, gpu.size())) {
            Some(p) => self.engine.pointer_world(p),
            None => self.engine.release_pointer(),
        }
        self.engine.frame(dt_sec);

        self.stars
            .flush_to(gpu, (now - self.started).as_secs_f32());
        self.engine.flush_to(gpu);
        gpu.render(&camera)
    }

    fn pointer_hit(
        &self,
        camera: &Camera,
        cursor: PhysicalPosition<f64>,
        (width, height): (u32, u32),
    ) -> Option<Vec3> {
        let ndc = controls::cursor_ndc(cursor.x, cursor.y, width, height);
        hit_proxy_point(camera, ndc, &self.engine.binding().transform())
    }
}

fn load_cloud(cli: &Cli) -> SampledCloud {
    let Some(path) = &cli.model else {
        return fibonacci_sphere(cli.count, cli.radius);
    };
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::error!("[asset] failed to read {}: {}", path.display(), e);
            return SampledCloud::default();
        }
    };
    match load_glb(&bytes) {
        Ok(nodes) => sample_nodes(&nodes, cli.stride),
        Err(e) => {
            log::error!("[asset] failed to decode {}: {}", path.display(), e);
            SampledCloud::default()
        }
    }
}

fn build_engine(cloud: &SampledCloud, params: CloudParams) -> ParticleEngine {
    match ParticleEngine::new(cloud, params.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("[engine] {}", e);
            ParticleEngine::empty(params)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::builder().filter_level(cli.log_level()).init();

    let cloud = load_cloud(&cli);
    let engine = build_engine(&cloud, cli.params());
    let mut rng = StdRng::seed_from_u64(STARFIELD_SEED);
    let stars = Starfield::new(STAR_COUNT, STAR_RADIUS, &mut rng);
    let mut viewer = Viewer::new(engine, stars);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle hero (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    viewer.stars.upload_to(&mut state);
    log::info!("[input] wheel scrolls, [ and ] resize the pointer radius, R resets, Esc quits");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseWheel { delta, .. } => {
                viewer.scroll = controls::apply_wheel(viewer.scroll, delta);
            }
            WindowEvent::CursorMoved { position, .. } => viewer.cursor = Some(position),
            WindowEvent::CursorLeft { .. } => viewer.cursor = None,
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(ref c) if c.eq_ignore_ascii_case("r") => viewer.reset(),
                    Key::Character(ref c) if c.as_str() == "[" => viewer.nudge_radius(-1),
                    Key::Character(ref c) if c.as_str() == "]" => viewer.nudge_radius(1),
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => match viewer.frame(&mut state) {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("[gpu] {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
