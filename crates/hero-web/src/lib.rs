#![cfg(target_arch = "wasm32")]
use hero_core::asset::load_glb;
use hero_core::{
    sample_nodes, CloudParams, ParticleEngine, Starfield, STARFIELD_SEED, STAR_COUNT, STAR_RADIUS,
};
use input::PointerInput;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod config;
mod constants;
mod dom;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let params = config::params_from_attrs(|name| canvas.get_attribute(name));
    log::info!("[config] {:?}", params);

    dom::wire_resize(&window, &canvas);
    let scroll = Rc::new(Cell::new(0.0_f32));
    dom::wire_scroll(&window, scroll.clone());
    let pointer = Rc::new(RefCell::new(PointerInput::default()));
    dom::wire_pointer(&canvas, pointer.clone());

    let engine = build_engine(&window, params).await;

    let mut rng = StdRng::seed_from_u64(STARFIELD_SEED);
    let stars = Starfield::new(STAR_COUNT, STAR_RADIUS, &mut rng);

    // Leak a canvas clone to satisfy the 'static lifetime of the surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let ctx = frame::FrameContext::new(engine, stars, gpu, canvas, pointer, scroll);
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

/// Fetch and decode the model; any failure leaves an empty cloud.
async fn build_engine(window: &web::Window, params: CloudParams) -> ParticleEngine {
    let bytes = match fetch_bytes(window, &params.model_path).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("[asset] failed to fetch {}: {:?}", params.model_path, e);
            return ParticleEngine::empty(params);
        }
    };
    let nodes = match load_glb(&bytes) {
        Ok(n) => n,
        Err(e) => {
            log::error!("[asset] failed to decode {}: {}", params.model_path, e);
            return ParticleEngine::empty(params);
        }
    };
    let cloud = sample_nodes(&nodes, params.vertex_stride);
    match ParticleEngine::new(&cloud, params.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("[engine] {}", e);
            ParticleEngine::empty(params)
        }
    }
}

async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
