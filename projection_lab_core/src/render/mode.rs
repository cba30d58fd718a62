/// Render-mode state machine types.
///
/// `Standard` renders the mesh normally through the live camera.
/// `Projected` freezes ("pins") the camera and projection at the moment
/// of the transition, bakes the mesh through them into NDC space, and
/// lets the live camera fly around the frozen result — the frustum
/// wireframe shows which volume the pinned camera saw. The pinned
/// snapshot lives in the variant itself, so it cannot leak into or
/// outlive the mode it belongs to.

use crate::camera::OrbitCamera;
use crate::projection::ProjectionParams;

/// Projection applied to the live camera while in projected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedView {
    Perspective,
    Orthographic,
}

/// Camera and projection parameters frozen at the standard → projected
/// transition. Restored verbatim on the way back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedState {
    pub camera: OrbitCamera,
    pub params: ProjectionParams,
}

/// Current rendering mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Normal rendering through the live camera.
    Standard,
    /// Frozen-projection inspection mode.
    Projected {
        /// Projection applied to the live (observer) camera.
        view: ProjectedView,
        /// Snapshot taken at the transition.
        pinned: PinnedState,
    },
}

impl RenderMode {
    /// Whether the mode is `Projected`.
    pub fn is_projected(&self) -> bool {
        matches!(self, RenderMode::Projected { .. })
    }

    /// The projected sub-view, if in projected mode.
    pub fn projected_view(&self) -> Option<ProjectedView> {
        match self {
            RenderMode::Standard => None,
            RenderMode::Projected { view, .. } => Some(*view),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
