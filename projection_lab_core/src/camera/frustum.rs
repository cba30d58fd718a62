/// Frustum geometry — the 8 corner points and 6 half-space planes of a
/// perspective viewing frustum, in camera-local space (camera at the
/// origin looking down +Z).
///
/// Both builders are pure functions of `(aspect_ratio, vertical_fov,
/// near, far)`: identical inputs produce bit-identical output. Corner and
/// plane ordering is fixed and part of the contract — consumers index
/// positionally (the wireframe line list in particular).
///
/// Preconditions (contract, not runtime-checked): `vertical_fov` in
/// (0, π), `aspect_ratio > 0`, `0 < near < far`. Violations produce
/// degenerate geometry, not errors.

use glam::{Mat3, Vec3};

/// Frustum corner indices
pub const CORNER_NEAR_BOTTOM_LEFT: usize = 0;
pub const CORNER_NEAR_BOTTOM_RIGHT: usize = 1;
pub const CORNER_NEAR_TOP_RIGHT: usize = 2;
pub const CORNER_NEAR_TOP_LEFT: usize = 3;
pub const CORNER_FAR_BOTTOM_LEFT: usize = 4;
pub const CORNER_FAR_BOTTOM_RIGHT: usize = 5;
pub const CORNER_FAR_TOP_RIGHT: usize = 6;
pub const CORNER_FAR_TOP_LEFT: usize = 7;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// The 8 corner points of a perspective frustum.
///
/// Order: near bottom-left, bottom-right, top-right, top-left, then the
/// far equivalents (see the `CORNER_*` constants).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub corners: [Vec3; 8],
}

impl FrustumCorners {
    /// Build the corner points.
    ///
    /// The half-horizontal FOV is derived as
    /// `atan(aspect_ratio * tan(half_vertical_fov))`; corners lie exactly
    /// on the near/far planes at `x = ±z·tan(half_h)`,
    /// `y = ±z·tan(half_v)`.
    pub fn build(aspect_ratio: f32, vertical_fov: f32, near: f32, far: f32) -> Self {
        debug_assert!(vertical_fov > 0.0 && vertical_fov < std::f32::consts::PI);
        debug_assert!(aspect_ratio > 0.0);
        debug_assert!(0.0 < near && near < far);

        let half_vertical_fov = vertical_fov * 0.5;
        let half_horizontal_fov = (aspect_ratio * half_vertical_fov.tan()).atan();
        let tan_h = half_horizontal_fov.tan();
        let tan_v = half_vertical_fov.tan();

        let plane_corners = |z: f32| {
            [
                Vec3::new(-z * tan_h, -z * tan_v, z), // bottom-left
                Vec3::new(z * tan_h, -z * tan_v, z),  // bottom-right
                Vec3::new(z * tan_h, z * tan_v, z),   // top-right
                Vec3::new(-z * tan_h, z * tan_v, z),  // top-left
            ]
        };
        let n = plane_corners(near);
        let f = plane_corners(far);

        Self {
            corners: [n[0], n[1], n[2], n[3], f[0], f[1], f[2], f[3]],
        }
    }

    /// The 12 frustum edges as a 24-point line list (pairs of endpoints):
    /// 4 near-plane edges, 4 far-plane edges, 4 connecting edges, in that
    /// order. Consumers index this positionally.
    pub fn edge_lines(&self) -> [Vec3; 24] {
        let c = &self.corners;
        [
            // near loop
            c[0], c[1], c[1], c[2], c[2], c[3], c[3], c[0],
            // far loop
            c[4], c[5], c[5], c[6], c[6], c[7], c[7], c[4],
            // near-to-far
            c[0], c[4], c[1], c[5], c[2], c[6], c[3], c[7],
        ]
    }
}

/// A half-space plane: inward normal plus a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlane {
    pub normal: Vec3,
    pub point: Vec3,
}

/// The 6 half-space planes of a perspective frustum.
///
/// Order: left, right, top, bottom, near, far (see the `PLANE_*`
/// constants). Side planes pass through the origin (the camera position)
/// with normals tilted by the half-FOV angles; near/far planes have ±Z
/// normals at `z = near` / `z = far`. All normals point inward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlanes {
    pub planes: [FrustumPlane; 6],
}

impl FrustumPlanes {
    /// Build the clip planes. Same half-FOV derivation as
    /// [`FrustumCorners::build`].
    pub fn build(aspect_ratio: f32, vertical_fov: f32, near: f32, far: f32) -> Self {
        debug_assert!(vertical_fov > 0.0 && vertical_fov < std::f32::consts::PI);
        debug_assert!(aspect_ratio > 0.0);
        debug_assert!(0.0 < near && near < far);

        let half_vertical_fov = vertical_fov * 0.5;
        let half_horizontal_fov = (aspect_ratio * half_vertical_fov.tan()).atan();

        Self {
            planes: [
                // left
                FrustumPlane {
                    normal: Mat3::from_rotation_y(-half_horizontal_fov) * Vec3::X,
                    point: Vec3::ZERO,
                },
                // right
                FrustumPlane {
                    normal: Mat3::from_rotation_y(half_horizontal_fov) * Vec3::NEG_X,
                    point: Vec3::ZERO,
                },
                // top
                FrustumPlane {
                    normal: Mat3::from_rotation_x(-half_vertical_fov) * Vec3::NEG_Y,
                    point: Vec3::ZERO,
                },
                // bottom
                FrustumPlane {
                    normal: Mat3::from_rotation_x(half_vertical_fov) * Vec3::Y,
                    point: Vec3::ZERO,
                },
                // near
                FrustumPlane {
                    normal: Vec3::Z,
                    point: Vec3::new(0.0, 0.0, near),
                },
                // far
                FrustumPlane {
                    normal: Vec3::NEG_Z,
                    point: Vec3::new(0.0, 0.0, far),
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
