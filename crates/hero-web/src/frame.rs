use crate::input::{self, PointerInput};
use crate::render::GpuState;
use hero_core::{hit_proxy_point, Camera, ParticleEngine, Starfield, MAX_FRAME_DT_SEC};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub engine: ParticleEngine,
    pub stars: Starfield,
    pub gpu: Option<GpuState<'a>>,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerInput>>,
    pub scroll: Rc<Cell<f32>>,

    pub last_instant: Instant,
    pub elapsed: f32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        engine: ParticleEngine,
        stars: Starfield,
        gpu: Option<GpuState<'a>>,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerInput>>,
        scroll: Rc<Cell<f32>>,
    ) -> Self {
        let mut ctx = Self {
            engine,
            stars,
            gpu,
            canvas,
            pointer,
            scroll,
            last_instant: Instant::now(),
            elapsed: 0.0,
        };
        // A page restored mid-scroll should not animate in from the top.
        let initial = ctx.scroll.get();
        ctx.engine.state_mut().snap_scroll(initial);
        if let Some(g) = &mut ctx.gpu {
            ctx.stars.upload_to(g);
        }
        ctx
    }

    fn camera(&self) -> Camera {
        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        Camera::looking_at_origin(self.engine.params().camera_distance, aspect)
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed += dt_sec;

        self.engine.set_scroll(self.scroll.get());

        // Ray-test against last frame's hit proxy; the tracker target is
        // consumed by this frame's advance.
        let camera = self.camera();
        let px = self.pointer.borrow().px;
        let hit = px.and_then(|px| {
            let ndc = input::px_to_ndc(
                px,
                self.canvas.width() as f32,
                self.canvas.height() as f32,
            );
            hit_proxy_point(&camera, ndc, &self.engine.binding().transform())
        });
        match hit {
            Some(p) => self.engine.pointer_world(p),
            None => self.engine.release_pointer(),
        }

        self.engine.frame(dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            self.stars.flush_to(g, self.elapsed);
            self.engine.flush_to(g);
            if let Err(e) = g.render(&camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
