use glam::{Affine3A, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::input::Movement;
use super::*;

fn assert_affine_approx_eq(a: Affine3A, b: Affine3A, tolerance: f32) {
    let a = a.to_cols_array();
    let b = b.to_cols_array();
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x - y).abs() < tolerance,
            "element {} differs: {} vs {}",
            i,
            x,
            y
        );
    }
}

fn sample_camera() -> OrbitCamera {
    OrbitCamera {
        pivot: Vec3::new(1.5, -2.0, 7.25),
        offset: Vec3::new(0.0, 0.5, -4.0),
        pitch: 0.3,
        yaw: -1.1,
    }
}

// ============================================================================
// transform / view
// ============================================================================

#[test]
fn test_view_composed_with_transform_is_identity() {
    let cameras = [
        OrbitCamera::default(),
        sample_camera(),
        OrbitCamera {
            pivot: Vec3::new(-10.0, 3.0, 0.25),
            offset: Vec3::new(2.0, 0.0, 8.0),
            pitch: -FRAC_PI_4,
            yaw: 2.8,
        },
    ];

    for camera in cameras {
        let composed = camera.view() * camera.transform();
        assert_affine_approx_eq(composed, Affine3A::IDENTITY, 1e-5);
    }
}

#[test]
fn test_default_camera_transform_is_identity() {
    // Zero rotations and translations compose exactly, no tolerance needed.
    assert_eq!(
        OrbitCamera::default().transform().to_cols_array(),
        Affine3A::IDENTITY.to_cols_array()
    );
}

#[test]
fn test_position_is_transform_translation() {
    let camera = sample_camera();
    let expected: Vec3 = camera.transform().translation.into();
    assert_eq!(camera.position(), expected);
}

#[test]
fn test_position_without_rotation_is_pivot_plus_offset() {
    let camera = OrbitCamera {
        pivot: Vec3::new(1.0, 2.0, 3.0),
        offset: Vec3::new(0.0, 0.0, -5.0),
        pitch: 0.0,
        yaw: 0.0,
    };
    assert_eq!(camera.position(), Vec3::new(1.0, 2.0, -2.0));
}

#[test]
fn test_rotation_is_orthonormal() {
    let rotation = sample_camera().rotation();
    let product = rotation * rotation.transpose();
    let identity = glam::Mat3::IDENTITY;
    for (a, b) in product
        .to_cols_array()
        .iter()
        .zip(identity.to_cols_array().iter())
    {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn test_yaw_rotates_about_world_up_regardless_of_pitch() {
    // With yaw applied outside pitch, the camera's local X axis always
    // stays level (no roll) no matter how far the camera pitches.
    let camera = OrbitCamera {
        pivot: Vec3::ZERO,
        offset: Vec3::ZERO,
        pitch: 1.2,
        yaw: 0.7,
    };
    let local_x = camera.rotation() * Vec3::X;
    assert!(local_x.y.abs() < 1e-6, "local X has roll: {:?}", local_x);
}

// ============================================================================
// apply_movement
// ============================================================================

#[test]
fn test_forward_moves_along_local_z() {
    // Yaw of 90 degrees turns local +Z into world +X.
    let mut camera = OrbitCamera {
        yaw: FRAC_PI_2,
        ..OrbitCamera::default()
    };
    camera.apply_movement(Movement::FORWARD, 0.25);

    // speed = 4.0 * 0.25 = 1.0
    assert!((camera.pivot.x - 1.0).abs() < 1e-6);
    assert!(camera.pivot.y.abs() < 1e-6);
    assert!(camera.pivot.z.abs() < 1e-6);
}

#[test]
fn test_backward_cancels_forward() {
    let mut camera = sample_camera();
    let start = camera.pivot;
    camera.apply_movement(Movement::FORWARD | Movement::BACKWARD, 0.1);
    assert!((camera.pivot - start).length() < 1e-6);
}

#[test]
fn test_up_and_down_move_along_world_y() {
    // Vertical movement ignores camera orientation.
    let mut camera = OrbitCamera {
        pitch: 0.9,
        yaw: -2.1,
        ..OrbitCamera::default()
    };
    camera.apply_movement(Movement::UP, 0.5);
    assert_eq!(camera.pivot, Vec3::new(0.0, 2.0, 0.0));

    camera.apply_movement(Movement::DOWN, 0.5);
    assert!((camera.pivot - Vec3::ZERO).length() < 1e-6);
}

#[test]
fn test_empty_movement_is_a_no_op() {
    let mut camera = sample_camera();
    let before = camera;
    camera.apply_movement(Movement::empty(), 1.0);
    assert_eq!(camera, before);
}

// ============================================================================
// apply_mouse_drag
// ============================================================================

#[test]
fn test_mouse_drag_accumulates_pitch_and_yaw() {
    let mut camera = OrbitCamera::default();
    camera.apply_mouse_drag(Vec2::new(100.0, 40.0));
    camera.apply_mouse_drag(Vec2::new(-20.0, 0.0));

    assert!((camera.yaw - 80.0 * 0.005).abs() < 1e-6);
    assert!((camera.pitch - 40.0 * 0.005).abs() < 1e-6);
}

#[test]
fn test_mouse_drag_does_not_touch_translation() {
    let mut camera = sample_camera();
    let pivot = camera.pivot;
    let offset = camera.offset;
    camera.apply_mouse_drag(Vec2::new(13.0, -7.0));
    assert_eq!(camera.pivot, pivot);
    assert_eq!(camera.offset, offset);
}
