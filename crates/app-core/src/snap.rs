use crate::constants::SNAP_THRESHOLD_PX;
use glam::Vec2;

/// Horizontal snap for a dragged section. Priority: viewport left edge,
/// viewport right edge, then the first peer (registry order) whose left edge
/// is within the threshold. Returns the input unchanged when nothing
/// qualifies.
pub fn snap_horizontal(x: f32, width: f32, viewport_width: f32, peer_lefts: &[f32]) -> f32 {
    if x < SNAP_THRESHOLD_PX {
        return 0.0;
    }
    if x + width > viewport_width - SNAP_THRESHOLD_PX {
        return viewport_width - width;
    }
    for &peer in peer_lefts {
        if (x - peer).abs() < SNAP_THRESHOLD_PX {
            return peer;
        }
    }
    x
}

/// Applies snapping to a raw dragged position. Only the horizontal component
/// is ever overridden.
#[inline]
pub fn snap_position(pos: Vec2, size: Vec2, viewport_width: f32, peer_lefts: &[f32]) -> Vec2 {
    Vec2::new(
        snap_horizontal(pos.x, size.x, viewport_width, peer_lefts),
        pos.y,
    )
}
