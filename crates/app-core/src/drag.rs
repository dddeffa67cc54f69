//! Generic pointer-drag state machine.
//!
//! One machine serves all three draggable owners: a section (position drag),
//! the nav box (position drag), and a nav dot (reorder drag). Positions are
//! read and written by the caller, so the machine runs without a rendering
//! surface.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    phase: DragPhase,
    grab_offset: Vec2,
    position: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Dragging` from a pointer-down, capturing the grab offset so
    /// the element does not jump under the cursor. A press that landed inside
    /// the owner's controls sub-region (`in_controls`) never starts a drag.
    pub fn begin(&mut self, pointer: Vec2, element_pos: Vec2, in_controls: bool) -> bool {
        if in_controls || self.phase == DragPhase::Dragging {
            return false;
        }
        self.grab_offset = pointer - element_pos;
        self.position = element_pos;
        self.phase = DragPhase::Dragging;
        true
    }

    /// Advances the drag to a new pointer position, returning the element's
    /// new translation. `None` while idle.
    pub fn update(&mut self, pointer: Vec2) -> Option<Vec2> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.position = pointer - self.grab_offset;
        Some(self.position)
    }

    /// Replaces the tracked position after the caller applied snapping, so
    /// `end` finalizes the post-snap value.
    pub fn override_position(&mut self, position: Vec2) {
        if self.phase == DragPhase::Dragging {
            self.position = position;
        }
    }

    /// Leaves `Dragging` on pointer-up or pointer-leave and returns the final
    /// position to commit. `None` if no drag was active.
    pub fn end(&mut self) -> Option<Vec2> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.phase = DragPhase::Idle;
        Some(self.position)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}
