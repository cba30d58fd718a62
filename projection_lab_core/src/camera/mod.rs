//! Camera module — orbit camera and frustum geometry.
//!
//! The core does NOT store a hidden camera anywhere — [`OrbitCamera`] is a
//! plain value owned by the caller (normally inside
//! [`RenderState`](crate::render::RenderState)) and every function here is
//! a pure function of that value.

mod camera;
mod frustum;

pub use camera::OrbitCamera;
pub use frustum::{
    FrustumCorners, FrustumPlane, FrustumPlanes,
    CORNER_NEAR_BOTTOM_LEFT, CORNER_NEAR_BOTTOM_RIGHT,
    CORNER_NEAR_TOP_RIGHT, CORNER_NEAR_TOP_LEFT,
    CORNER_FAR_BOTTOM_LEFT, CORNER_FAR_BOTTOM_RIGHT,
    CORNER_FAR_TOP_RIGHT, CORNER_FAR_TOP_LEFT,
    PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM, PLANE_NEAR, PLANE_FAR,
};
