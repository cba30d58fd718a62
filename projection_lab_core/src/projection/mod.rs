//! Projection module — projection matrices and memoized mesh projection.
//!
//! Matrix constructors are left-handed (camera looks down +Z, matching
//! the camera module) and come in both depth-range flavors so the caller
//! can match whichever graphics backend is active. [`MeshProjector`]
//! wraps the per-vertex projection + depth-reciprocal computation behind
//! a dirty flag so whole-mesh reprojection only happens when its inputs
//! actually change.

mod matrix;
mod projector;

pub use matrix::{
    depth_recip, orthographic_lh, perspective_lh, project_point,
    DepthRange, OrthographicParams, ProjectionParams,
};
pub use projector::MeshProjector;
