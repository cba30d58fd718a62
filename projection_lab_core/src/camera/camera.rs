/// OrbitCamera — pivot/yaw/pitch/offset orbit camera.
///
/// The camera orbits a pivot point: translate to the pivot, rotate by yaw
/// about world Y, then by pitch about the local X axis, then apply a local
/// offset (dolly distance). The composition order is fixed (yaw outer,
/// pitch inner) so yaw always rotates around world-up regardless of pitch,
/// which keeps the camera from accumulating roll.
///
/// All functions are pure over the camera value; there are no hidden
/// globals and no error paths.

use glam::{Affine3A, Mat3, Vec2, Vec3};

use crate::input::Movement;

/// Pivot translation speed, world units per second.
const MOVE_SPEED: f32 = 4.0;

/// Orbit rotation per pixel of mouse drag, radians.
const DRAG_SENSITIVITY: f32 = 0.005;

/// Orbit camera state. Plain data; mutated by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitCamera {
    /// Point the camera orbits around.
    pub pivot: Vec3,
    /// Local offset applied after rotation (dolly).
    pub offset: Vec3,
    /// Rotation about the local X axis, radians.
    pub pitch: f32,
    /// Rotation about world Y, radians.
    pub yaw: f32,
}

impl OrbitCamera {
    /// World transform of the camera.
    ///
    /// `translate(pivot) * rotate_y(yaw) * rotate_x(pitch) * translate(offset)`
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_translation(self.pivot)
            * Affine3A::from_rotation_y(self.yaw)
            * Affine3A::from_rotation_x(self.pitch)
            * Affine3A::from_translation(self.offset)
    }

    /// View matrix — the algebraic inverse of [`transform`](Self::transform).
    ///
    /// Moves world-space geometry into camera space.
    pub fn view(&self) -> Affine3A {
        self.transform().inverse()
    }

    /// World-space position: the translation part of the transform.
    pub fn position(&self) -> Vec3 {
        self.transform().translation.into()
    }

    /// World-space rotation: the rotational sub-block of the transform.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from(self.transform().matrix3)
    }

    /// Translate the pivot for the movement keys held this frame.
    ///
    /// Forward/backward/left/right move along the camera's local axes;
    /// up/down move along world Y.
    pub fn apply_movement(&mut self, movement: Movement, delta_time: f32) {
        let speed = delta_time * MOVE_SPEED;
        let rotation = self.rotation();
        if movement.contains(Movement::FORWARD) {
            self.pivot += rotation * (Vec3::Z * speed);
        }
        if movement.contains(Movement::BACKWARD) {
            self.pivot += rotation * (Vec3::NEG_Z * speed);
        }
        if movement.contains(Movement::LEFT) {
            self.pivot += rotation * (Vec3::NEG_X * speed);
        }
        if movement.contains(Movement::RIGHT) {
            self.pivot += rotation * (Vec3::X * speed);
        }
        if movement.contains(Movement::DOWN) {
            self.pivot += Vec3::NEG_Y * speed;
        }
        if movement.contains(Movement::UP) {
            self.pivot += Vec3::Y * speed;
        }
    }

    /// Accumulate a mouse drag into pitch (vertical) and yaw (horizontal).
    pub fn apply_mouse_drag(&mut self, delta: Vec2) {
        self.pitch += delta.y * DRAG_SENSITIVITY;
        self.yaw += delta.x * DRAG_SENSITIVITY;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
