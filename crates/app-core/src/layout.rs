use crate::constants::{
    CONTENT_SCALE_MAX, CONTENT_SCALE_MIN, HEADER_HEIGHT_MAX, HEADER_HEIGHT_MIN,
    RESIZE_SCALE_DIVISOR, SIDEBAR_WIDTH_MAX, SIDEBAR_WIDTH_MIN,
};
use glam::Vec2;

/// Global layout driven by the corner-resize control. The three values are
/// always produced and applied together so a consumer never observes one
/// updated without the others.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub sidebar_width: f32,
    pub header_height: f32,
    pub scale: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sidebar_width: 250.0,
            header_height: 60.0,
            scale: 1.0,
        }
    }
}

impl Layout {
    /// Maps a corner-drag pointer position to the clamped layout values.
    pub fn from_corner_drag(pointer: Vec2, viewport: Vec2) -> Self {
        let scale = if viewport.x > 0.0 && viewport.y > 0.0 {
            (pointer.x / viewport.x + pointer.y / viewport.y) / RESIZE_SCALE_DIVISOR
        } else {
            1.0
        };
        Self {
            sidebar_width: pointer.x.clamp(SIDEBAR_WIDTH_MIN, SIDEBAR_WIDTH_MAX),
            header_height: pointer.y.clamp(HEADER_HEIGHT_MIN, HEADER_HEIGHT_MAX),
            scale: scale.clamp(CONTENT_SCALE_MIN, CONTENT_SCALE_MAX),
        }
    }

    /// Re-applies the bounds, used when restoring persisted values that may
    /// predate a bounds change.
    pub fn clamped(self) -> Self {
        Self {
            sidebar_width: self.sidebar_width.clamp(SIDEBAR_WIDTH_MIN, SIDEBAR_WIDTH_MAX),
            header_height: self.header_height.clamp(HEADER_HEIGHT_MIN, HEADER_HEIGHT_MAX),
            scale: self.scale.clamp(CONTENT_SCALE_MIN, CONTENT_SCALE_MAX),
        }
    }
}
