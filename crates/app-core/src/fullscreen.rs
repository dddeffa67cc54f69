//! Fullscreen state machine: Normal <-> Fullscreen per section, at most one
//! fullscreen section globally.

use crate::geometry::Rect;
use crate::registry::SectionRegistry;
use glam::Vec2;

/// A section's retained pre-fullscreen state, restored on exit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub position: Vec2,
    pub scale: f32,
    pub bounds: Rect,
}

/// What the caller must animate after a toggle.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// The section entered fullscreen. `displaced` names a previously
    /// fullscreen section that was forced back to normal first; its snapshot
    /// has already been restored into the registry.
    Entered { displaced: Option<String> },
    /// The section left fullscreen and its snapshot was restored.
    Exited { snapshot: Snapshot },
}

/// Toggles fullscreen for `name`. `current_bounds` is the section's live
/// bounding box, captured into the snapshot on entry. Unknown names return
/// `None`.
pub fn toggle(
    registry: &mut SectionRegistry,
    name: &str,
    current_bounds: Rect,
) -> Option<Transition> {
    let section = registry.get(name)?;
    if section.fullscreen {
        registry.set_fullscreen(name, false);
        let snapshot = restore_snapshot(registry, name).unwrap_or_default();
        log::debug!("[fullscreen] exit {}", name);
        return Some(Transition::Exited { snapshot });
    }

    let snapshot = Snapshot {
        position: section.position,
        scale: section.scale,
        bounds: current_bounds,
    };
    let displaced = registry.set_fullscreen(name, true);
    if let Some(prev) = &displaced {
        log::debug!("[fullscreen] displacing {}", prev);
        restore_snapshot(registry, prev);
    }
    if let Some(s) = registry.get_mut(name) {
        s.snapshot = Some(snapshot);
    }
    Some(Transition::Entered { displaced })
}

/// Takes the named section's snapshot and writes its position and scale back
/// into the registry entry. Returns the snapshot for the caller to apply to
/// the rendered element.
pub fn restore_snapshot(registry: &mut SectionRegistry, name: &str) -> Option<Snapshot> {
    let section = registry.get_mut(name)?;
    let snapshot = section.snapshot.take()?;
    section.position = snapshot.position;
    section.scale = snapshot.scale;
    Some(snapshot)
}
