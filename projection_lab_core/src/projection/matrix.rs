/// Projection matrices and point projection.
///
/// All constructors are left-handed with the camera at the origin looking
/// down +Z. The depth range of the resulting NDC is selected explicitly:
/// [-1, 1] for GL-style backends, [0, 1] for D3D-style backends. Mixing
/// conventions produces inverted or clipped depth, so the choice is a
/// parameter rather than a crate-wide constant.

use glam::{Mat4, Vec3, Vec4};

/// NDC depth convention of the active graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthRange {
    /// GL convention: near maps to -1, far to +1.
    NegativeOneToOne,
    /// D3D convention: near maps to 0, far to +1.
    ZeroToOne,
}

/// Parameters of a perspective projection, plus the target depth range.
///
/// `PartialEq` is what the memoization layer keys on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub aspect_ratio: f32,
    /// Vertical field of view, radians. Must be in (0, π).
    pub vertical_fov: f32,
    pub near: f32,
    pub far: f32,
    pub depth_range: DepthRange,
}

impl ProjectionParams {
    /// The perspective matrix for these parameters.
    pub fn matrix(&self) -> Mat4 {
        perspective_lh(
            self.aspect_ratio,
            self.vertical_fov,
            self.near,
            self.far,
            self.depth_range,
        )
    }
}

/// Parameters of an orthographic projection volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicParams {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthographicParams {
    /// The orthographic matrix for these parameters.
    pub fn matrix(&self, depth_range: DepthRange) -> Mat4 {
        orthographic_lh(
            self.left, self.right, self.bottom, self.top, self.near, self.far, depth_range,
        )
    }
}

/// Left-handed perspective projection.
///
/// Precondition (contract): `vertical_fov` in (0, π), `aspect_ratio > 0`,
/// `0 < near < far`.
pub fn perspective_lh(
    aspect_ratio: f32,
    vertical_fov: f32,
    near: f32,
    far: f32,
    depth_range: DepthRange,
) -> Mat4 {
    debug_assert!(vertical_fov > 0.0 && vertical_fov < std::f32::consts::PI);
    debug_assert!(aspect_ratio > 0.0);
    debug_assert!(0.0 < near && near < far);

    let focal = 1.0 / (vertical_fov * 0.5).tan();
    let (zz, zw) = match depth_range {
        DepthRange::NegativeOneToOne => (
            (far + near) / (far - near),
            -(2.0 * far * near) / (far - near),
        ),
        DepthRange::ZeroToOne => (far / (far - near), -(far * near) / (far - near)),
    };

    Mat4::from_cols(
        Vec4::new(focal / aspect_ratio, 0.0, 0.0, 0.0),
        Vec4::new(0.0, focal, 0.0, 0.0),
        Vec4::new(0.0, 0.0, zz, 1.0),
        Vec4::new(0.0, 0.0, zw, 0.0),
    )
}

/// Left-handed orthographic projection.
///
/// Precondition (contract): `left < right`, `bottom < top`, `near < far`.
pub fn orthographic_lh(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    depth_range: DepthRange,
) -> Mat4 {
    debug_assert!(left < right && bottom < top && near < far);

    let (zz, zw) = match depth_range {
        DepthRange::NegativeOneToOne => (2.0 / (far - near), -(far + near) / (far - near)),
        DepthRange::ZeroToOne => (1.0 / (far - near), -near / (far - near)),
    };

    Mat4::from_cols(
        Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
        Vec4::new(0.0, 0.0, zz, 0.0),
        Vec4::new(
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            zw,
            1.0,
        ),
    )
}

/// Project a view-space point through a projection matrix into NDC
/// (homogeneous transform followed by the perspective divide).
///
/// Points at `w == 0` (on the camera plane for a perspective matrix) are
/// NOT clamped: the division propagates infinities/NaN to the caller.
pub fn project_point(projection: &Mat4, point: Vec3) -> Vec3 {
    let clip = *projection * point.extend(1.0);
    clip.truncate() / clip.w
}

/// Reciprocal of the view-space depth, stored per vertex for
/// perspective-correct texture mapping.
///
/// At render time the texture coordinate is pre-multiplied by this value
/// before screen-space interpolation and divided back out per pixel;
/// `(uv * depth_recip) / depth_recip == uv` holds exactly at the
/// vertices. `view_z == 0` is not clamped and yields an infinity.
pub fn depth_recip(view_z: f32) -> f32 {
    1.0 / view_z
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
