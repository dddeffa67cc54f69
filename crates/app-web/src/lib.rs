#![cfg(target_arch = "wasm32")]

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod nav;
pub mod sections;
pub mod storage;

use anyhow::anyhow;
use app_core::drag::DragController;
use app_core::layout::Layout;
use app_core::registry::SectionRegistry;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Which element owns the active drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Section(String),
    NavBox,
    NavDot(String),
}

#[derive(Clone, Debug)]
pub struct ActiveDrag {
    pub target: DragTarget,
    pub ctrl: DragController,
}

/// Corner-resize drag state. The pointer is cached here and consumed at most
/// once per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeDrag {
    pub active: bool,
    pub pointer: Vec2,
}

/// All mutable interface state, owned in one place and handed to subsystems
/// by reference.
pub struct App {
    pub registry: SectionRegistry,
    pub layout: Layout,
    pub nav_pos: Vec2,
    pub drag: Option<ActiveDrag>,
    pub resize: ResizeDrag,
}

impl Default for App {
    fn default() -> Self {
        Self {
            registry: SectionRegistry::new(),
            layout: Layout::default(),
            nav_pos: Vec2::new(24.0, 24.0),
            drag: None,
            resize: ResizeDrag::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub document: web::Document,
    pub state: Rc<RefCell<App>>,
    pub frame: frame::FrameScheduler,
}

thread_local! {
    static APP: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&AppContext)) {
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(ctx) => f(ctx),
        None => log::warn!("[app] command received before init"),
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spatial canvas starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    dom::html_element_by_id(&document, constants::MAIN_CONTENT_ID)
        .ok_or_else(|| anyhow!("missing #{}", constants::MAIN_CONTENT_ID))?;
    let nav_el = dom::html_element_by_id(&document, constants::NAV_SLIDER_ID)
        .ok_or_else(|| anyhow!("missing #{}", constants::NAV_SLIDER_ID))?;
    let corner_el = dom::html_element_by_id(&document, constants::CORNER_RESIZE_ID)
        .ok_or_else(|| anyhow!("missing #{}", constants::CORNER_RESIZE_ID))?;

    let ctx = AppContext {
        document: document.clone(),
        state: Rc::new(RefCell::new(App::default())),
        frame: frame::FrameScheduler::new(),
    };
    ctx.frame.install(&ctx);
    APP.with(|slot| *slot.borrow_mut() = Some(ctx.clone()));

    storage::restore(&ctx);
    frame::apply_layout(&ctx);
    nav::apply_position(&ctx);

    events::wire_nav_box(&ctx, &nav_el);
    events::wire_corner_resize(&ctx, &corner_el);
    events::wire_scroll(&ctx);
    events::wire_window_resize(&ctx);

    log::info!(
        "[app] ready, {} section(s) restored",
        ctx.state.borrow().registry.len()
    );
    Ok(())
}

// ---------------- Command surface exposed to the page ----------------

#[wasm_bindgen(js_name = addSection)]
pub fn add_section(name: String) {
    with_app(|ctx| sections::add_section(ctx, &name));
}

#[wasm_bindgen(js_name = toggleFullscreen)]
pub fn toggle_fullscreen(name: String) {
    with_app(|ctx| sections::toggle_fullscreen(ctx, &name));
}

#[wasm_bindgen(js_name = minimizeSection)]
pub fn minimize_section(name: String) {
    with_app(|ctx| sections::minimize_section(ctx, &name));
}

#[wasm_bindgen(js_name = closeSection)]
pub fn close_section(name: String) {
    with_app(|ctx| sections::close_section(ctx, &name));
}
