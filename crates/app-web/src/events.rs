//! Pointer and touch wiring for the three drag owners (sections, nav box,
//! nav dots) and the corner-resize control. Touch input maps onto the same
//! handlers by extracting the first touch point.

use crate::constants::{
    DOT_SELECTOR, DRAGGING_CLASS, LAYOUT_SMOOTH_CLASS, LAYOUT_SMOOTH_MS,
    SECTION_CONTROLS_SELECTOR,
};
use crate::{dom, frame, nav, sections, storage, ActiveDrag, AppContext, DragTarget};
use app_core::drag::DragController;
use app_core::layout::Layout;
use app_core::snap;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn first_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// True when the event target sits inside the sub-region matched by
/// `selector` (e.g. a section's control buttons), where a press must not
/// start a drag.
fn within(ev: &web::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.closest(selector), Ok(Some(_))))
        .unwrap_or(false)
}

/// The three callbacks a drag owner supplies. `begin` returns whether a drag
/// actually started; only then is the pointer captured.
pub struct DragSurface {
    pub begin: Box<dyn Fn(Vec2, &web::Event) -> bool>,
    pub update: Box<dyn Fn(Vec2)>,
    pub finish: Box<dyn Fn()>,
}

/// Wires pointerdown/move/up/leave plus the equivalent touch events on one
/// element. Pointer-leave without an up still finalizes through `finish`.
fn wire_drag_surface(el: &web::HtmlElement, surface: DragSurface) {
    let surface = Rc::new(surface);

    // pointerdown
    {
        let s = surface.clone();
        let el_capture = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if (s.begin)(pointer_pos(&ev), &ev) {
                let _ = el_capture.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointermove
    {
        let s = surface.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            (s.update)(pointer_pos(&ev));
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointerup / pointerleave
    for event in ["pointerup", "pointerleave"] {
        let s = surface.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            (s.finish)();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // touchstart
    {
        let s = surface.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(p) = first_touch_pos(&ev) {
                if (s.begin)(p, &ev) {
                    ev.prevent_default();
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // touchmove
    {
        let s = surface.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(p) = first_touch_pos(&ev) {
                (s.update)(p);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // touchend
    {
        let s = surface;
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            (s.finish)();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// ---------------- Section drags ----------------

pub fn wire_section(ctx: &AppContext, el: &web::HtmlElement, name: &str) {
    let surface = DragSurface {
        begin: {
            let ctx = ctx.clone();
            let el = el.clone();
            let name = name.to_string();
            Box::new(move |pointer, ev| begin_section_drag(&ctx, &el, &name, pointer, ev))
        },
        update: {
            let ctx = ctx.clone();
            let el = el.clone();
            let name = name.to_string();
            Box::new(move |pointer| move_section_drag(&ctx, &el, &name, pointer))
        },
        finish: {
            let ctx = ctx.clone();
            let el = el.clone();
            let name = name.to_string();
            Box::new(move || end_section_drag(&ctx, &el, &name))
        },
    };
    wire_drag_surface(el, surface);
}

fn begin_section_drag(
    ctx: &AppContext,
    el: &web::HtmlElement,
    name: &str,
    pointer: Vec2,
    ev: &web::Event,
) -> bool {
    if within(ev, SECTION_CONTROLS_SELECTOR) {
        return false;
    }
    let mut guard = ctx.state.borrow_mut();
    let app = &mut *guard;
    if app.drag.is_some() {
        return false;
    }
    let Some(section) = app.registry.get(name) else {
        return false;
    };
    if section.fullscreen {
        return false;
    }
    let mut ctrl = DragController::new();
    if !ctrl.begin(pointer, section.position, false) {
        return false;
    }
    app.drag = Some(ActiveDrag {
        target: DragTarget::Section(name.to_string()),
        ctrl,
    });
    drop(guard);
    sections::set_drag_visuals(el, true);
    log::info!("[drag] begin section {}", name);
    true
}

fn move_section_drag(ctx: &AppContext, el: &web::HtmlElement, name: &str, pointer: Vec2) {
    let mut guard = ctx.state.borrow_mut();
    let app = &mut *guard;
    let Some(drag) = app.drag.as_mut() else {
        return;
    };
    if !matches!(&drag.target, DragTarget::Section(n) if n == name) {
        return;
    }
    let applied = match app.registry.get(name) {
        Some(s) => s.position,
        None => return,
    };
    let Some(raw) = drag.ctrl.update(pointer) else {
        return;
    };

    // Snapping works in viewport coordinates; convert the translation offset
    // through the element's flow position.
    let rect = dom::element_rect(el);
    let flow_left = rect.left - applied.x;
    let peer_lefts: Vec<f32> = app
        .registry
        .iter()
        .filter(|s| s.name != name)
        .filter_map(|s| dom::html_element_by_id(&ctx.document, &sections::dom_id(&s.name)))
        .map(|peer| dom::element_rect(&peer).left)
        .collect();
    let prospective_left = flow_left + raw.x;
    let snapped_left = snap::snap_horizontal(
        prospective_left,
        rect.width(),
        dom::viewport_size().x,
        &peer_lefts,
    );
    let final_pos = Vec2::new(raw.x + (snapped_left - prospective_left), raw.y);

    drag.ctrl.override_position(final_pos);
    if let Some(s) = app.registry.get_mut(name) {
        s.position = final_pos;
    }
    drop(guard);
    dom::set_translation(el, final_pos);
    ctx.frame.request();
}

fn end_section_drag(ctx: &AppContext, el: &web::HtmlElement, name: &str) {
    let mut guard = ctx.state.borrow_mut();
    let app = &mut *guard;
    let Some(drag) = app.drag.as_mut() else {
        return;
    };
    if !matches!(&drag.target, DragTarget::Section(n) if n == name) {
        return;
    }
    let Some(final_pos) = drag.ctrl.end() else {
        return;
    };
    app.drag = None;
    if let Some(s) = app.registry.get_mut(name) {
        s.position = final_pos;
    }
    drop(guard);
    sections::set_drag_visuals(el, false);
    // state is committed before the save runs
    storage::save_all(ctx);
    log::info!(
        "[drag] end section {} at ({:.0}, {:.0})",
        name,
        final_pos.x,
        final_pos.y
    );
}

// ---------------- Section control buttons ----------------

#[derive(Clone, Copy)]
enum ControlAction {
    Fullscreen,
    Minimize,
    Close,
}

pub fn wire_section_controls(ctx: &AppContext, el: &web::HtmlElement, name: &str) {
    wire_control(ctx, el, ".fullscreen-btn", name, ControlAction::Fullscreen);
    wire_control(ctx, el, ".minimize-btn", name, ControlAction::Minimize);
    wire_control(ctx, el, ".close-btn", name, ControlAction::Close);
}

fn wire_control(
    ctx: &AppContext,
    root: &web::HtmlElement,
    selector: &str,
    name: &str,
    action: ControlAction,
) {
    let Ok(Some(btn)) = root.query_selector(selector) else {
        return;
    };
    let ctx = ctx.clone();
    let name = name.to_string();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| match action {
        ControlAction::Fullscreen => sections::toggle_fullscreen(&ctx, &name),
        ControlAction::Minimize => sections::minimize_section(&ctx, &name),
        ControlAction::Close => sections::close_section(&ctx, &name),
    }) as Box<dyn FnMut(_)>);
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// ---------------- Nav box drag ----------------

pub fn wire_nav_box(ctx: &AppContext, el: &web::HtmlElement) {
    let surface = DragSurface {
        begin: {
            let ctx = ctx.clone();
            Box::new(move |pointer, ev| {
                // a press on a dot belongs to that dot's reorder drag
                if within(ev, DOT_SELECTOR) {
                    return false;
                }
                let mut guard = ctx.state.borrow_mut();
                let app = &mut *guard;
                if app.drag.is_some() {
                    return false;
                }
                let mut ctrl = DragController::new();
                if !ctrl.begin(pointer, app.nav_pos, false) {
                    return false;
                }
                app.drag = Some(ActiveDrag {
                    target: DragTarget::NavBox,
                    ctrl,
                });
                log::info!("[drag] begin nav box");
                true
            })
        },
        update: {
            let ctx = ctx.clone();
            let el = el.clone();
            Box::new(move |pointer| {
                let mut guard = ctx.state.borrow_mut();
                let app = &mut *guard;
                let Some(drag) = app.drag.as_mut() else {
                    return;
                };
                if drag.target != DragTarget::NavBox {
                    return;
                }
                let Some(pos) = drag.ctrl.update(pointer) else {
                    return;
                };
                app.nav_pos = pos;
                drop(guard);
                dom::set_translation(&el, pos);
                ctx.frame.request();
            })
        },
        finish: {
            let ctx = ctx.clone();
            Box::new(move || {
                let mut guard = ctx.state.borrow_mut();
                let app = &mut *guard;
                let Some(drag) = app.drag.as_mut() else {
                    return;
                };
                if drag.target != DragTarget::NavBox {
                    return;
                }
                let Some(pos) = drag.ctrl.end() else {
                    return;
                };
                app.drag = None;
                app.nav_pos = pos;
                drop(guard);
                storage::save_nav_position(ctx);
                log::info!("[drag] end nav box at ({:.0}, {:.0})", pos.x, pos.y);
            })
        },
    };
    wire_drag_surface(el, surface);
}

// ---------------- Nav dot reorder drag ----------------

pub fn wire_dot(ctx: &AppContext, el: &web::HtmlElement, name: &str) {
    let surface = DragSurface {
        begin: {
            let ctx = ctx.clone();
            let el = el.clone();
            let name = name.to_string();
            Box::new(move |pointer, _ev| {
                let mut guard = ctx.state.borrow_mut();
                let app = &mut *guard;
                if app.drag.is_some() || app.registry.index_of(&name).is_none() {
                    return false;
                }
                let mut ctrl = DragController::new();
                if !ctrl.begin(pointer, Vec2::ZERO, false) {
                    return false;
                }
                app.drag = Some(ActiveDrag {
                    target: DragTarget::NavDot(name.clone()),
                    ctrl,
                });
                drop(guard);
                let _ = el.class_list().add_1(DRAGGING_CLASS);
                log::info!("[drag] begin dot {}", name);
                true
            })
        },
        update: {
            let ctx = ctx.clone();
            let name = name.to_string();
            Box::new(move |pointer| move_dot_drag(&ctx, &name, pointer))
        },
        finish: {
            let ctx = ctx.clone();
            let el = el.clone();
            let name = name.to_string();
            Box::new(move || {
                let mut guard = ctx.state.borrow_mut();
                let app = &mut *guard;
                let Some(drag) = app.drag.as_mut() else {
                    return;
                };
                if !matches!(&drag.target, DragTarget::NavDot(n) if *n == name) {
                    return;
                }
                if drag.ctrl.end().is_none() {
                    return;
                }
                app.drag = None;
                drop(guard);
                let _ = el.class_list().remove_1(DRAGGING_CLASS);
                nav::verify_order(&ctx);
                storage::save_all(&ctx);
                log::info!("[drag] end dot {}", name);
            })
        },
    };
    wire_drag_surface(el, surface);
}

fn move_dot_drag(ctx: &AppContext, name: &str, pointer: Vec2) {
    {
        let mut guard = ctx.state.borrow_mut();
        let app = &mut *guard;
        let Some(drag) = app.drag.as_mut() else {
            return;
        };
        if !matches!(&drag.target, DragTarget::NavDot(n) if n == name) {
            return;
        }
        if drag.ctrl.update(pointer).is_none() {
            return;
        }
    }
    // Target slot: how many other dots sit left of the pointer.
    let other_centers: Vec<f32> = {
        let app = ctx.state.borrow();
        app.registry
            .names()
            .filter(|n| *n != name)
            .filter_map(|n| dom::html_element_by_id(&ctx.document, &nav::dot_id(n)))
            .map(|dot| dom::element_rect(&dot).center().x)
            .collect()
    };
    let target_index = other_centers.iter().filter(|cx| pointer.x > **cx).count();
    let current = ctx.state.borrow().registry.index_of(name);
    if current != Some(target_index) {
        ctx.state.borrow_mut().registry.reorder(name, target_index);
        // dots and main content both re-render to match registry order
        nav::sync_order(ctx);
        sections::sync_order(ctx);
        nav::verify_order(ctx);
    }
}

// ---------------- Corner resize ----------------

pub fn wire_corner_resize(ctx: &AppContext, el: &web::HtmlElement) {
    let surface = DragSurface {
        begin: {
            let ctx = ctx.clone();
            Box::new(move |pointer, _ev| {
                let mut app = ctx.state.borrow_mut();
                if app.resize.active {
                    return false;
                }
                app.resize.active = true;
                app.resize.pointer = pointer;
                drop(app);
                ctx.frame.request();
                log::info!("[resize] begin");
                true
            })
        },
        update: {
            let ctx = ctx.clone();
            Box::new(move |pointer| {
                let mut app = ctx.state.borrow_mut();
                if !app.resize.active {
                    return;
                }
                // cached here, consumed at most once per animation frame
                app.resize.pointer = pointer;
                drop(app);
                ctx.frame.request();
            })
        },
        finish: {
            let ctx = ctx.clone();
            Box::new(move || {
                let mut app = ctx.state.borrow_mut();
                if !app.resize.active {
                    return;
                }
                app.resize.active = false;
                let layout = Layout::from_corner_drag(app.resize.pointer, dom::viewport_size());
                app.layout = layout;
                drop(app);
                smooth_layout_pass(&ctx);
                storage::save_interface_state(&ctx);
                log::info!(
                    "[resize] end: sidebar {:.0}px header {:.0}px scale {:.2}",
                    layout.sidebar_width,
                    layout.header_height,
                    layout.scale
                );
            })
        },
    };
    wire_drag_surface(el, surface);
}

/// One final transitioned application of the layout after a resize drag.
fn smooth_layout_pass(ctx: &AppContext) {
    let Some(root) = ctx
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let _ = root.class_list().add_1(LAYOUT_SMOOTH_CLASS);
    frame::apply_layout(ctx);
    let root_after = root.clone();
    dom::set_timeout(LAYOUT_SMOOTH_MS, move || {
        let _ = root_after.class_list().remove_1(LAYOUT_SMOOTH_CLASS);
    });
}

// ---------------- Global listeners ----------------

pub fn wire_scroll(ctx: &AppContext) {
    if let Some(window) = web::window() {
        let frame = ctx.frame.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            frame.request();
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_window_resize(ctx: &AppContext) {
    if let Some(window) = web::window() {
        let frame = ctx.frame.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            frame.request();
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
