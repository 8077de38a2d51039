use glam::Vec2;
use web_sys as web;

/// Latest pointer position over the canvas, in backing-store pixels.
/// `None` once the pointer leaves.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerInput {
    pub px: Option<Vec2>,
}

impl PointerInput {
    pub fn moved(&mut self, px: Vec2) {
        if px.is_finite() {
            self.px = Some(px);
        }
    }

    pub fn left(&mut self) {
        self.px = None;
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

/// Canvas pixels to normalised device coordinates (y up).
#[inline]
pub fn px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// Document scroll progress in \[0, 1\]; 0 when the page cannot scroll.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f32 {
    let range = scroll_height - inner_height;
    if !(range.is_finite() && range > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0) as f32
}
