use crate::constants::{
    PROXIMITY_BLUR_MAX_PX, PROXIMITY_SCALE_SPAN, PROXIMITY_Z_SPAN,
};
use glam::Vec2;

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

/// Euclidean distance between the centers of two boxes.
#[inline]
pub fn center_distance(a: &Rect, b: &Rect) -> f32 {
    a.center().distance(b.center())
}

/// Linear falloff in [0, 1]: 1 at zero distance, 0 at or beyond `radius`.
#[inline]
pub fn proximity_effect(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).max(0.0)
}

/// Visual overrides derived from a nonzero proximity effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityVisual {
    pub scale: f32,
    pub blur_px: f32,
    pub z_index: i32,
}

/// Maps an effect value to its visual overrides. `None` means the section is
/// outside the radius and all overrides must be cleared, not set to neutral
/// values.
#[inline]
pub fn visual_for_effect(effect: f32) -> Option<ProximityVisual> {
    if effect <= 0.0 {
        return None;
    }
    Some(ProximityVisual {
        scale: 1.0 + effect * PROXIMITY_SCALE_SPAN,
        blur_px: effect * PROXIMITY_BLUR_MAX_PX,
        z_index: (effect * PROXIMITY_Z_SPAN).floor() as i32,
    })
}
