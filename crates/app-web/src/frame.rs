//! Animation-frame coalescing and the per-frame visual pass.
//!
//! All recompute triggers (nav drag, section drag, corner resize, scroll,
//! window resize) funnel through [`FrameScheduler::request`]; a trigger that
//! arrives while a frame is already pending is dropped, so bursts of
//! pointer-move events cost at most one layout pass per rendered frame.
//! Nothing is scheduled while the interface is at rest.

use crate::constants::NAV_SLIDER_ID;
use crate::{dom, sections, AppContext, DragTarget};
use app_core::constants::PROXIMITY_RADIUS_PX;
use app_core::geometry::{center_distance, proximity_effect, visual_for_effect, ProximityVisual};
use app_core::layout::Layout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Default)]
pub struct FrameScheduler {
    pending: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the frame callback once; `request` reuses it for every frame.
    pub fn install(&self, ctx: &AppContext) {
        let ctx = ctx.clone();
        let pending = self.pending.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(false);
            run_frame(&ctx);
        }) as Box<dyn FnMut()>));
    }

    /// Schedules one recompute on the next animation frame. A second request
    /// while one is pending is dropped, not queued.
    pub fn request(&self) {
        if self.pending.get() {
            return;
        }
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        if let Some(w) = web::window() {
            if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
                self.pending.set(true);
            }
        }
    }
}

fn run_frame(ctx: &AppContext) {
    // Resize first so the proximity pass reads post-layout geometry.
    let resize_pointer = {
        let app = ctx.state.borrow();
        app.resize.active.then_some(app.resize.pointer)
    };
    if let Some(pointer) = resize_pointer {
        let layout = Layout::from_corner_drag(pointer, dom::viewport_size());
        ctx.state.borrow_mut().layout = layout;
        apply_layout(ctx);
    }
    proximity_pass(ctx);
}

/// Applies the current layout in one pass; a consumer never observes one of
/// the three values updated without the others.
pub fn apply_layout(ctx: &AppContext) {
    let layout = ctx.state.borrow().layout;
    let Some(root) = ctx
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    let _ = style.set_property("--sidebar-width", &format!("{}px", layout.sidebar_width));
    let _ = style.set_property("--header-height", &format!("{}px", layout.header_height));
    let _ = style.set_property("--content-scale", &layout.scale.to_string());
}

fn proximity_pass(ctx: &AppContext) {
    let Some(nav_el) = dom::html_element_by_id(&ctx.document, NAV_SLIDER_ID) else {
        return;
    };
    let nav_rect = dom::element_rect(&nav_el);

    // Snapshot registry facts first so no borrow is held across DOM calls.
    let entries: Vec<(String, f32, bool)> = {
        let app = ctx.state.borrow();
        let dragged = match &app.drag {
            Some(d) => match &d.target {
                DragTarget::Section(name) => Some(name.clone()),
                _ => None,
            },
            None => None,
        };
        app.registry
            .iter()
            .filter(|s| Some(&s.name) != dragged.as_ref())
            .map(|s| (s.name.clone(), s.scale, s.fullscreen))
            .collect()
    };

    for (name, base_scale, fullscreen) in entries {
        let Some(el) = dom::html_element_by_id(&ctx.document, &sections::dom_id(&name)) else {
            continue;
        };
        if fullscreen {
            // fullscreen sections are excluded from proximity scans
            apply_proximity(&el, base_scale, None);
            continue;
        }
        let rect = dom::element_rect(&el);
        let effect = proximity_effect(center_distance(&nav_rect, &rect), PROXIMITY_RADIUS_PX);
        apply_proximity(&el, base_scale, visual_for_effect(effect));
    }
}

fn apply_proximity(el: &web::HtmlElement, base_scale: f32, visual: Option<ProximityVisual>) {
    let style = el.style();
    match visual {
        Some(v) => {
            let _ = style.set_property("transform", &format!("scale({})", base_scale * v.scale));
            let _ = style.set_property("filter", &format!("blur({}px)", v.blur_px));
            let _ = style.set_property("z-index", &v.z_index.to_string());
        }
        None => {
            // cleared back to default, not set to neutral values
            if (base_scale - 1.0).abs() > f32::EPSILON {
                let _ = style.set_property("transform", &format!("scale({})", base_scale));
            } else {
                let _ = style.remove_property("transform");
            }
            let _ = style.remove_property("filter");
            let _ = style.remove_property("z-index");
        }
    }
}
