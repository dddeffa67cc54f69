//! Section lifecycle: DOM construction, the content collaborator, minimize,
//! close, and the fullscreen transitions.

use crate::constants::{
    DRAGGING_CLASS, DARK_ICONS_CLASS, FADE_MS, FULLSCREEN_CLASS, HIDDEN_CLASS, LIGHT_ICONS_CLASS,
    MAIN_CONTENT_ID, MINIMIZED_CLASS, SECTION_CLASS,
};
use crate::{dom, events, nav, storage, AppContext};
use anyhow::anyhow;
use app_core::fullscreen::{self, Transition};
use app_core::registry::Added;
use app_core::theme;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn dom_id(name: &str) -> String {
    format!("section-{name}")
}

fn main_content(ctx: &AppContext) -> Option<web::HtmlElement> {
    dom::html_element_by_id(&ctx.document, MAIN_CONTENT_ID)
}

/// Adds a section by name, or brings an existing one into view. Both paths
/// scroll the section into view.
pub fn add_section(ctx: &AppContext, name: &str) {
    let added = ctx.state.borrow_mut().registry.add(name);
    match added {
        Added::Refocused => {
            if let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) {
                dom::scroll_into_view_smooth(&el);
            }
            log::info!("[section] refocus {}", name);
        }
        Added::Created => {
            let el = match spawn_section(ctx, name) {
                Ok(el) => el,
                Err(e) => {
                    log::error!("[section] create {} failed: {:?}", name, e);
                    ctx.state.borrow_mut().registry.remove(name);
                    return;
                }
            };
            nav::add_dot(ctx, name);
            dom::scroll_into_view_smooth(&el);
            ctx.frame.request();
            storage::save_all(ctx);
            log::info!("[section] add {}", name);
        }
    }
}

/// Startup path: recreates a persisted section without re-persisting or
/// scrolling the page around.
pub fn restore_section(ctx: &AppContext, name: &str, position: Vec2, scale: f32) {
    if ctx.state.borrow_mut().registry.add(name) != Added::Created {
        return;
    }
    let el = match spawn_section(ctx, name) {
        Ok(el) => el,
        Err(e) => {
            log::error!("[section] restore {} failed: {:?}", name, e);
            ctx.state.borrow_mut().registry.remove(name);
            return;
        }
    };
    {
        let mut app = ctx.state.borrow_mut();
        if let Some(s) = app.registry.get_mut(name) {
            s.position = position;
            s.scale = scale;
        }
    }
    nav::add_dot(ctx, name);
    apply_transform(&el, position, scale);
}

/// Applies flags from the persisted section blob.
pub fn apply_restored_flags(
    ctx: &AppContext,
    name: &str,
    flags: &app_core::persist::SectionFlags,
) {
    let position = Vec2::new(flags.x, flags.y);
    {
        let mut app = ctx.state.borrow_mut();
        let Some(s) = app.registry.get_mut(name) else {
            return;
        };
        s.minimized = flags.minimized;
        s.position = position;
    }
    if let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) {
        if flags.minimized {
            let _ = el.class_list().add_1(MINIMIZED_CLASS);
        }
        dom::set_translation(&el, position);
    }
    if flags.fullscreen {
        toggle_fullscreen(ctx, name);
    }
}

fn spawn_section(ctx: &AppContext, name: &str) -> anyhow::Result<web::HtmlElement> {
    let main = main_content(ctx).ok_or_else(|| anyhow!("missing #{}", MAIN_CONTENT_ID))?;
    let el: web::HtmlElement = ctx
        .document
        .create_element("div")
        .map_err(|e| anyhow!("create section element: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("section element is not an HtmlElement"))?;

    let color = ctx
        .state
        .borrow()
        .registry
        .get(name)
        .map(|s| s.color)
        .unwrap_or(theme::DEFAULT_SECTION_COLOR);
    let icon_class = if theme::is_dark(color) {
        LIGHT_ICONS_CLASS
    } else {
        DARK_ICONS_CLASS
    };

    el.set_class_name(SECTION_CLASS);
    el.set_id(&dom_id(name));
    el.set_inner_html(&format!(
        r#"<div class="section-header" style="color: {color}">
    <div class="drag-handle">⋮⋮</div>
    <h2>{name}</h2>
    <div class="section-controls {icon_class}">
        <button class="fullscreen-btn" data-action="fullscreen">⛶</button>
        <button class="minimize-btn" data-action="minimize">−</button>
        <button class="close-btn" data-action="close">×</button>
    </div>
</div>
<div class="section-content">{body}</div>"#,
        body = body_markup(name)
    ));

    events::wire_section(ctx, &el, name);
    events::wire_section_controls(ctx, &el, name);

    let _ = el.style().set_property("opacity", "0");
    main.append_child(&el)
        .map_err(|e| anyhow!("append section: {:?}", e))?;
    dom::fade_in(&el);

    storage::save_theme_color(color);
    Ok(el)
}

/// Content collaborator: body fragment for a known section name, generic
/// placeholder otherwise.
fn body_markup(name: &str) -> String {
    match name {
        "Latest" => r#"<ul class="feed">
    <li>Fresh arrivals, updated all day</li>
    <li>New this week</li>
    <li>Back in stock</li>
</ul>"#
            .to_string(),
        "Trending" => r#"<ol class="trend-list">
    <li>Most viewed today</li>
    <li>Rising this hour</li>
    <li>Staff picks</li>
</ol>"#
            .to_string(),
        "Collections" => r#"<div class="collection-grid">
    <div class="collection-tile">Seasonal</div>
    <div class="collection-tile">Essentials</div>
    <div class="collection-tile">Archive</div>
</div>"#
            .to_string(),
        "Stories" => r#"<article class="story-preview">
    <h3>Behind the scenes</h3>
    <p>Long-form features and interviews.</p>
</article>"#
            .to_string(),
        _ => format!(r#"<p class="placeholder">The {name} section has no content yet.</p>"#),
    }
}

/// Toggles the minimized presentation. Unknown names are a no-op.
pub fn minimize_section(ctx: &AppContext, name: &str) {
    let next = {
        let app = ctx.state.borrow();
        match app.registry.get(name) {
            Some(s) => !s.minimized,
            None => return,
        }
    };
    ctx.state.borrow_mut().registry.set_minimized(name, next);
    if let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) {
        let list = el.class_list();
        let _ = if next {
            list.add_1(MINIMIZED_CLASS)
        } else {
            list.remove_1(MINIMIZED_CLASS)
        };
    }
    storage::save_section_state(ctx);
    log::info!("[section] minimize {} -> {}", name, next);
}

/// Removes a section and its nav dot. Unknown names are a no-op.
pub fn close_section(ctx: &AppContext, name: &str) {
    if !ctx.state.borrow_mut().registry.remove(name) {
        return;
    }
    if let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) {
        el.remove();
    }
    nav::remove_dot(ctx, name);
    storage::save_all(ctx);
    log::info!("[section] close {}", name);
}

/// Enters or leaves fullscreen for the named section.
pub fn toggle_fullscreen(ctx: &AppContext, name: &str) {
    let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) else {
        return;
    };
    let bounds = dom::element_rect(&el);
    let transition = {
        let mut app = ctx.state.borrow_mut();
        fullscreen::toggle(&mut app.registry, name, bounds)
    };
    match transition {
        Some(Transition::Entered { displaced }) => {
            if let Some(prev) = displaced {
                restore_normal_visuals(ctx, &prev);
            }
            // Inline geometry would fight the fullscreen class; the snapshot
            // holds what exit needs to put back.
            let style = el.style();
            let _ = style.remove_property("left");
            let _ = style.remove_property("top");
            let _ = style.remove_property("transform");
            let _ = style.remove_property("filter");
            let _ = style.remove_property("z-index");
            let _ = el.class_list().add_1(FULLSCREEN_CLASS);
            dom::scroll_into_view_smooth(&el);
            fade_siblings(ctx, name, false);
            storage::save_section_state(ctx);
        }
        Some(Transition::Exited { snapshot }) => {
            let _ = el.class_list().remove_1(FULLSCREEN_CLASS);
            fade_siblings(ctx, name, true);
            // The pre-fullscreen transform comes back only after the fade.
            let el_after = el.clone();
            dom::set_timeout(FADE_MS, move || {
                apply_transform(&el_after, snapshot.position, snapshot.scale);
            });
            storage::save_section_state(ctx);
        }
        None => {}
    }
}

/// Puts a displaced section straight back to its normal presentation (no
/// fade: it is being replaced by the newly fullscreen section).
fn restore_normal_visuals(ctx: &AppContext, name: &str) {
    let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) else {
        return;
    };
    let _ = el.class_list().remove_1(FULLSCREEN_CLASS);
    let (position, scale) = {
        let app = ctx.state.borrow();
        match app.registry.get(name) {
            Some(s) => (s.position, s.scale),
            None => return,
        }
    };
    apply_transform(&el, position, scale);
}

fn fade_siblings(ctx: &AppContext, name: &str, back_in: bool) {
    let siblings: Vec<String> = ctx
        .state
        .borrow()
        .registry
        .names()
        .filter(|n| *n != name)
        .map(String::from)
        .collect();
    for sibling in siblings {
        let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(&sibling)) else {
            continue;
        };
        let style = el.style();
        let _ = style.set_property("transition", &format!("opacity {}ms ease", FADE_MS));
        if back_in {
            // back into layout flow first, then fade up
            let _ = el.class_list().remove_1(HIDDEN_CLASS);
            let _ = style.set_property("opacity", "1");
        } else {
            let _ = style.set_property("opacity", "0");
            // leave layout flow only after the fade completes
            let el_after = el.clone();
            dom::set_timeout(FADE_MS, move || {
                let _ = el_after.class_list().add_1(HIDDEN_CLASS);
            });
        }
    }
}

/// Re-appends section elements in registry order after a nav-dot reorder.
pub fn sync_order(ctx: &AppContext) {
    let Some(main) = main_content(ctx) else {
        return;
    };
    let names: Vec<String> = ctx.state.borrow().registry.names().map(String::from).collect();
    for name in &names {
        if let Some(el) = dom::html_element_by_id(&ctx.document, &dom_id(name)) {
            let _ = main.append_child(&el);
        }
    }
}

/// Writes a section's translation and scale to its element.
pub fn apply_transform(el: &web::HtmlElement, position: Vec2, scale: f32) {
    dom::set_translation(el, position);
    let style = el.style();
    if (scale - 1.0).abs() > f32::EPSILON {
        let _ = style.set_property("transform", &format!("scale({})", scale));
    } else {
        let _ = style.remove_property("transform");
    }
}

/// The raised stacking order applied while a section is being dragged.
pub fn set_drag_visuals(el: &web::HtmlElement, dragging: bool) {
    let list = el.class_list();
    if dragging {
        let _ = list.add_1(DRAGGING_CLASS);
        let _ = el
            .style()
            .set_property("z-index", &crate::constants::DRAG_Z_INDEX.to_string());
    } else {
        let _ = list.remove_1(DRAGGING_CLASS);
        let _ = el.style().remove_property("z-index");
    }
}
