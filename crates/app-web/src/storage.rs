//! Persistence adapter over `window.localStorage`.
//!
//! Blob layout and expiry live in `app_core::persist`; this module only does
//! the storage I/O. Every failure path recovers locally: a missing or
//! malformed blob means a fresh start, an expired blob is removed, and write
//! errors are logged and swallowed.

use crate::constants::{
    INTERFACE_STATE_KEY, LAST_THEME_COLOR_KEY, NAV_POSITION_KEY, SECTION_STATE_KEY,
};
use crate::{sections, AppContext};
use app_core::layout::Layout;
use app_core::persist::{
    self, InterfaceState, NavState, SectionEntry, SectionFlags, SectionState, Stamped, StateError,
};
use glam::Vec2;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

#[inline]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn load<T: DeserializeOwned + Stamped>(key: &str) -> Option<T> {
    let store = local_storage()?;
    let json = store.get_item(key).ok().flatten()?;
    match persist::decode(&json, now_ms()) {
        Ok(value) => Some(value),
        Err(StateError::Expired { age_ms }) => {
            log::debug!("[storage] {} expired ({:.0} ms old), removing", key, age_ms);
            let _ = store.remove_item(key);
            None
        }
        Err(e) => {
            log::warn!("[storage] {} unreadable, starting fresh: {}", key, e);
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(store) = local_storage() else {
        return;
    };
    match persist::encode(value) {
        Ok(json) => {
            if let Err(e) = store.set_item(key, &json) {
                log::warn!("[storage] write {} failed: {:?}", key, e);
            }
        }
        Err(e) => log::warn!("[storage] encode {} failed: {}", key, e),
    }
}

pub fn save_theme_color(color: &str) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(LAST_THEME_COLOR_KEY, color);
    }
}

pub fn save_interface_state(ctx: &AppContext) {
    let app = ctx.state.borrow();
    let state = InterfaceState {
        scale: app.layout.scale,
        header_height: app.layout.header_height,
        sidebar_width: app.layout.sidebar_width,
        nav_x: app.nav_pos.x,
        nav_y: app.nav_pos.y,
        sections: app
            .registry
            .iter()
            .map(|s| SectionEntry {
                name: s.name.clone(),
                x: s.position.x,
                y: s.position.y,
                scale: s.scale,
            })
            .collect(),
        timestamp: now_ms(),
    };
    drop(app);
    save(INTERFACE_STATE_KEY, &state);
}

pub fn save_section_state(ctx: &AppContext) {
    let app = ctx.state.borrow();
    let mut state = SectionState {
        timestamp: now_ms(),
        ..Default::default()
    };
    for s in app.registry.iter() {
        state.entries.insert(
            s.name.clone(),
            SectionFlags {
                minimized: s.minimized,
                fullscreen: s.fullscreen,
                x: s.position.x,
                y: s.position.y,
            },
        );
    }
    drop(app);
    save(SECTION_STATE_KEY, &state);
}

pub fn save_nav_position(ctx: &AppContext) {
    let nav_pos = ctx.state.borrow().nav_pos;
    save(
        NAV_POSITION_KEY,
        &NavState {
            x: nav_pos.x,
            y: nav_pos.y,
            timestamp: now_ms(),
        },
    );
}

/// Snapshot of everything a drag end needs to persist.
pub fn save_all(ctx: &AppContext) {
    save_interface_state(ctx);
    save_section_state(ctx);
    save_nav_position(ctx);
}

/// Restores persisted state on startup, rebuilding section DOM in saved
/// order. Absent, expired, or malformed blobs leave the fresh defaults.
pub fn restore(ctx: &AppContext) {
    if let Some(iface) = load::<InterfaceState>(INTERFACE_STATE_KEY) {
        {
            let mut app = ctx.state.borrow_mut();
            app.layout = Layout {
                sidebar_width: iface.sidebar_width,
                header_height: iface.header_height,
                scale: iface.scale,
            }
            .clamped();
            app.nav_pos = Vec2::new(iface.nav_x, iface.nav_y);
        }
        for entry in &iface.sections {
            sections::restore_section(ctx, &entry.name, Vec2::new(entry.x, entry.y), entry.scale);
        }
        log::info!(
            "[storage] restored interface state ({} sections)",
            iface.sections.len()
        );
    }

    if let Some(state) = load::<SectionState>(SECTION_STATE_KEY) {
        // Names the interface blob did not carry stay absent; flags only
        // apply to sections that exist.
        let names: Vec<String> = {
            let app = ctx.state.borrow();
            app.registry
                .names()
                .filter(|n| state.entries.contains_key(*n))
                .map(String::from)
                .collect()
        };
        for name in names {
            let flags = state.entries[&name];
            sections::apply_restored_flags(ctx, &name, &flags);
        }
    }

    if let Some(nav) = load::<NavState>(NAV_POSITION_KEY) {
        ctx.state.borrow_mut().nav_pos = Vec2::new(nav.x, nav.y);
    }
}
