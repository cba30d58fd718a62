//! Per-frame input snapshot consumed by the core.
//!
//! The window layer (whatever it is) translates its native events into a
//! [`Movement`] flag set and a mouse delta once per frame. The core only
//! ever uses these to mutate the camera pivot/yaw/pitch.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Discrete movement keys held down this frame.
    ///
    /// Forward/backward/left/right translate the camera pivot along the
    /// camera's local axes; up/down translate along world Y.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Movement: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const FORWARD = 1 << 4;
        const BACKWARD = 1 << 5;
    }
}

/// Everything the window layer hands the core for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Movement keys currently held.
    pub movement: Movement,
    /// Accumulated mouse motion since the previous frame, in pixels.
    pub mouse_delta: Vec2,
    /// Whether the orbit (left) mouse button is held.
    pub mouse_down: bool,
}

impl InputFrame {
    /// Clear per-frame deltas after the frame has been consumed.
    ///
    /// Held state (movement flags, mouse button) persists across frames;
    /// only the motion delta is per-frame.
    pub fn clear_deltas(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
