//! Floating nav box and its per-section dots. Dot order mirrors the section
//! registry 1:1; `verify_order` checks that invariant after every reorder.

use crate::constants::{DOT_CLASS, NAV_SLIDER_ID};
use crate::{dom, events, AppContext};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn dot_id(name: &str) -> String {
    format!("dot-{name}")
}

pub fn nav_element(ctx: &AppContext) -> Option<web::HtmlElement> {
    dom::html_element_by_id(&ctx.document, NAV_SLIDER_ID)
}

pub fn apply_position(ctx: &AppContext) {
    let pos = ctx.state.borrow().nav_pos;
    if let Some(el) = nav_element(ctx) {
        dom::set_translation(&el, pos);
    }
}

pub fn add_dot(ctx: &AppContext, name: &str) {
    let Some(slider) = nav_element(ctx) else {
        return;
    };
    let Ok(el) = ctx.document.create_element("div") else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    el.set_class_name(DOT_CLASS);
    el.set_id(&dot_id(name));
    let _ = el.set_attribute("data-section", name);
    el.set_inner_html(&format!(
        r#"<div class="dot-content"><span class="dot-label">{name}</span><span class="dot-circle"></span></div>"#
    ));
    events::wire_dot(ctx, &el, name);
    let _ = el.style().set_property("opacity", "0");
    let _ = slider.append_child(&el);
    dom::fade_in(&el);
}

pub fn remove_dot(ctx: &AppContext, name: &str) {
    if let Some(el) = dom::html_element_by_id(&ctx.document, &dot_id(name)) {
        el.remove();
    }
}

/// Re-appends dots in registry order after a reorder drag.
pub fn sync_order(ctx: &AppContext) {
    let Some(slider) = nav_element(ctx) else {
        return;
    };
    let names: Vec<String> = ctx.state.borrow().registry.names().map(String::from).collect();
    for name in &names {
        if let Some(el) = dom::html_element_by_id(&ctx.document, &dot_id(name)) {
            let _ = slider.append_child(&el);
        }
    }
}

/// Dot names as currently rendered, in DOM order.
pub fn dot_order(ctx: &AppContext) -> Vec<String> {
    let Some(slider) = nav_element(ctx) else {
        return Vec::new();
    };
    let Ok(list) = slider.query_selector_all(crate::constants::DOT_SELECTOR) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        if let Some(name) = el.get_attribute("data-section") {
            out.push(name);
        }
    }
    out
}

/// Dot order must equal registry order at all times; a divergence is a bug.
pub fn verify_order(ctx: &AppContext) {
    let dots = dot_order(ctx);
    let names: Vec<String> = ctx.state.borrow().registry.names().map(String::from).collect();
    if dots != names {
        log::error!(
            "[nav] dot order diverged from registry: {:?} vs {:?}",
            dots,
            names
        );
    }
}
