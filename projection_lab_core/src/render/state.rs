/// RenderState — everything one frame loop owns.
///
/// Holds the live camera, the render mode (with its pinned snapshot when
/// projected), the model transform, the projection parameter sets, and
/// the memoized mesh projector. The frame loop calls
/// [`update`](RenderState::update) with the per-frame input, toggles
/// modes on key presses, and reads [`mvp`](RenderState::mvp) /
/// [`frustum_wireframe`](RenderState::frustum_wireframe) when assembling
/// draw submissions.

use glam::{Affine3A, Mat4, Vec3};

use crate::camera::{FrustumCorners, OrbitCamera};
use crate::input::InputFrame;
use crate::lab_info;
use crate::projection::{DepthRange, MeshProjector, OrthographicParams, ProjectionParams};

use super::mode::{PinnedState, ProjectedView, RenderMode};

/// Construction parameters for [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStateDesc {
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Depth convention of the active backend.
    pub depth_range: DepthRange,
    /// Vertical FOV of the standard (pinnable) projection, radians.
    pub vertical_fov: f32,
    /// Near/far of the standard projection. Deliberately tight so the
    /// frustum is small enough to inspect from outside.
    pub near: f32,
    pub far: f32,
    /// World transform of the mesh in standard mode.
    pub model_transform: Affine3A,
}

impl RenderStateDesc {
    /// The defaults the demos use: 60 degree FOV, near 2, far 10, mesh
    /// pushed 5 units down +Z.
    pub fn new(aspect_ratio: f32, depth_range: DepthRange) -> Self {
        Self {
            aspect_ratio,
            depth_range,
            vertical_fov: 60.0_f32.to_radians(),
            near: 2.0,
            far: 10.0,
            model_transform: Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0)),
        }
    }
}

/// Near/far of the free-fly projection used while inspecting a pinned
/// frustum: wide enough to see the whole scene from any vantage point.
const OBSERVER_NEAR: f32 = 0.01;
const OBSERVER_FAR: f32 = 100.0;

/// Owned render state for one frame loop. See the module docs.
#[derive(Debug, Clone)]
pub struct RenderState {
    camera: OrbitCamera,
    mode: RenderMode,
    /// Independent frustum-wireframe freeze (see [`toggle_pin`](Self::toggle_pin)).
    pinned_frustum: Option<OrbitCamera>,

    model_transform: Affine3A,
    standard_params: ProjectionParams,
    observer_params: ProjectionParams,
    observer_ortho: OrthographicParams,

    projector: MeshProjector,
}

impl RenderState {
    pub fn new(desc: RenderStateDesc) -> Self {
        let standard_params = ProjectionParams {
            aspect_ratio: desc.aspect_ratio,
            vertical_fov: desc.vertical_fov,
            near: desc.near,
            far: desc.far,
            depth_range: desc.depth_range,
        };
        let observer_params = ProjectionParams {
            near: OBSERVER_NEAR,
            far: OBSERVER_FAR,
            ..standard_params
        };
        let observer_ortho = OrthographicParams {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: OBSERVER_NEAR,
            far: OBSERVER_FAR,
        };

        Self {
            camera: OrbitCamera::default(),
            mode: RenderMode::Standard,
            pinned_frustum: None,
            model_transform: desc.model_transform,
            standard_params,
            observer_params,
            observer_ortho,
            projector: MeshProjector::new(standard_params),
        }
    }

    // ===== ACCESSORS =====

    /// The live camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable access to the live camera (tests, scripted demos).
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Current mode.
    pub fn mode(&self) -> &RenderMode {
        &self.mode
    }

    /// Model transform applied in standard mode.
    pub fn model_transform(&self) -> &Affine3A {
        &self.model_transform
    }

    /// Parameters of the standard (pinnable) projection.
    pub fn standard_params(&self) -> ProjectionParams {
        self.standard_params
    }

    /// The memoized projector and its baked buffers.
    pub fn projector(&self) -> &MeshProjector {
        &self.projector
    }

    /// Whether the frustum wireframe is frozen independently of the mode.
    pub fn is_frustum_pinned(&self) -> bool {
        self.pinned_frustum.is_some()
    }

    // ===== PER-FRAME UPDATE =====

    /// Apply one frame of input to the live camera.
    pub fn update(&mut self, input: &InputFrame, delta_time: f32) {
        if input.mouse_down {
            self.camera.apply_mouse_drag(input.mouse_delta);
        }
        self.camera.apply_movement(input.movement, delta_time);
    }

    // ===== MODE TRANSITIONS =====

    /// Toggle between standard and projected mode.
    ///
    /// Standard → projected: bake `positions` through the current camera
    /// and the standard projection, snapshot camera + parameters, then
    /// reset the live camera to the origin so the user can fly around the
    /// frozen result. The sub-view starts orthographic.
    ///
    /// Projected → standard: restore the snapshotted camera exactly as it
    /// was (saved and restored, never recomputed).
    pub fn toggle_mode(&mut self, positions: &[Vec3]) {
        match self.mode {
            RenderMode::Standard => {
                self.projector.set_params(self.standard_params);
                let view = self.camera.view();
                self.projector.project(positions, &self.model_transform, &view);

                let pinned = PinnedState {
                    camera: self.camera,
                    params: self.standard_params,
                };
                self.camera = OrbitCamera::default();
                self.mode = RenderMode::Projected {
                    view: ProjectedView::Orthographic,
                    pinned,
                };
                lab_info!("projlab::RenderState", "entered projected mode");
            }
            RenderMode::Projected { pinned, .. } => {
                self.camera = pinned.camera;
                self.mode = RenderMode::Standard;
                lab_info!("projlab::RenderState", "returned to standard mode");
            }
        }
    }

    /// Swap the projected sub-view between perspective and orthographic.
    ///
    /// Only changes which projection is applied to the live camera; the
    /// pinned snapshot and the live camera are untouched. No-op in
    /// standard mode.
    pub fn toggle_view(&mut self) {
        if let RenderMode::Projected { view, .. } = &mut self.mode {
            *view = match view {
                ProjectedView::Perspective => ProjectedView::Orthographic,
                ProjectedView::Orthographic => ProjectedView::Perspective,
            };
            lab_info!("projlab::RenderState", "projected view: {:?}", *view);
        }
    }

    /// Freeze/unfreeze the frustum wireframe at the current live camera.
    ///
    /// Independent of the mode machine: while pinned, the wireframe stays
    /// where it was and the live camera keeps moving, so one camera's
    /// frustum can be inspected from another vantage point.
    pub fn toggle_pin(&mut self) {
        self.pinned_frustum = match self.pinned_frustum {
            None => Some(self.camera),
            Some(_) => None,
        };
        lab_info!(
            "projlab::RenderState",
            "frustum pin: {}",
            if self.pinned_frustum.is_some() { "on" } else { "off" }
        );
    }

    // ===== PROJECTION PARAMETER CHANGES =====

    /// Replace the standard projection parameters.
    ///
    /// In projected mode the baked buffers depend on them, so they are
    /// rebuilt immediately through the pinned camera (and the pin is
    /// updated); in standard mode nothing is baked and the change is
    /// just stored.
    pub fn set_standard_params(&mut self, params: ProjectionParams, positions: &[Vec3]) {
        self.standard_params = params;
        self.observer_params = ProjectionParams {
            near: OBSERVER_NEAR,
            far: OBSERVER_FAR,
            ..params
        };
        if let RenderMode::Projected { pinned, .. } = &mut self.mode {
            pinned.params = params;
            let view = pinned.camera.view();
            self.projector.set_params(params);
            self.projector.project(positions, &self.model_transform, &view);
        }
    }

    // ===== FRAME OUTPUTS =====

    /// The model transform effective this frame: identity in projected
    /// mode (the baked vertices already carry it).
    pub fn effective_model_transform(&self) -> Affine3A {
        match self.mode {
            RenderMode::Standard => self.model_transform,
            RenderMode::Projected { .. } => Affine3A::IDENTITY,
        }
    }

    /// Model-view-projection matrix for the current mode and sub-view.
    pub fn mvp(&self) -> Mat4 {
        let view_model = Mat4::from(self.camera.view() * self.effective_model_transform());
        match self.mode {
            RenderMode::Standard => self.standard_params.matrix() * view_model,
            RenderMode::Projected { view, .. } => match view {
                ProjectedView::Orthographic => {
                    self.observer_ortho.matrix(self.standard_params.depth_range) * view_model
                }
                ProjectedView::Perspective => self.observer_params.matrix() * view_model,
            },
        }
    }

    /// The MVP laid out column-major for uniform upload.
    pub fn mvp_uniform(&self) -> [f32; 16] {
        self.mvp().to_cols_array()
    }

    /// World-space frustum wireframe line list, if one should be drawn.
    ///
    /// Projected mode always shows the pinned camera's frustum (or the
    /// independently pinned one). Standard mode shows a wireframe only
    /// while the independent pin is set — the live camera's own frustum
    /// is invisible from inside it.
    pub fn frustum_wireframe(&self) -> Option<Vec<Vec3>> {
        let (camera, params) = match &self.mode {
            RenderMode::Projected { pinned, .. } => (
                self.pinned_frustum.as_ref().unwrap_or(&pinned.camera),
                pinned.params,
            ),
            RenderMode::Standard => (self.pinned_frustum.as_ref()?, self.standard_params),
        };

        let corners = FrustumCorners::build(
            params.aspect_ratio,
            params.vertical_fov,
            params.near,
            params.far,
        );
        let transform = camera.transform();
        Some(
            corners
                .edge_lines()
                .iter()
                .map(|&point| transform.transform_point3(point))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
