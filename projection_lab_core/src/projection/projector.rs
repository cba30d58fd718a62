/// MeshProjector — memoized whole-mesh reprojection.
///
/// Projecting every vertex of a mesh on the CPU is the expensive step of
/// the projected render path, and its inputs (projection parameters,
/// model transform, view transform) are static for long stretches of
/// frames. The projector keys a rebuild on those inputs and otherwise
/// returns the buffers it already holds, so reprojection happens on input
/// change, never per draw call.

use glam::{Affine3A, Mat4, Vec3};

use super::matrix::{self, ProjectionParams};

/// Owns the projected-vertex and depth-reciprocal buffers for one mesh.
///
/// Invariant: `depth_recips()[i]` is the reciprocal view-space depth of
/// `projected()[i]`, and both buffers always have the same length as the
/// last projected position slice.
#[derive(Debug, Clone)]
pub struct MeshProjector {
    params: ProjectionParams,
    projection: Mat4,

    // Inputs of the buffers currently held; None forces a rebuild.
    last_model: Option<Affine3A>,
    last_view: Option<Affine3A>,

    projected: Vec<Vec3>,
    depth_recips: Vec<f32>,

    recompute_count: u64,
}

impl MeshProjector {
    /// Create a projector with empty buffers.
    pub fn new(params: ProjectionParams) -> Self {
        Self {
            params,
            projection: params.matrix(),
            last_model: None,
            last_view: None,
            projected: Vec::new(),
            depth_recips: Vec::new(),
            recompute_count: 0,
        }
    }

    /// Current projection parameters.
    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    /// Replace the projection parameters.
    ///
    /// A change invalidates the held buffers; setting identical
    /// parameters is a no-op.
    pub fn set_params(&mut self, params: ProjectionParams) {
        if params != self.params {
            self.params = params;
            self.projection = params.matrix();
            self.invalidate();
        }
    }

    /// Force a rebuild on the next [`project`](Self::project) call.
    pub fn invalidate(&mut self) {
        self.last_model = None;
        self.last_view = None;
    }

    /// Project `positions` through `model`, `view`, and the projection
    /// matrix, filling the projected-vertex and depth-reciprocal buffers.
    ///
    /// Rebuilds only when the parameters, transforms, or vertex count
    /// changed since the previous call; position contents are not part of
    /// the key, so the slice is assumed immutable between calls (use
    /// [`invalidate`](Self::invalidate) after editing vertices in place).
    /// Depth reciprocals are taken from
    /// the view-space z *before* the projective divide; vertices on the
    /// camera plane produce non-finite values (see
    /// [`depth_recip`](super::depth_recip)).
    pub fn project(&mut self, positions: &[Vec3], model: &Affine3A, view: &Affine3A) {
        if self.last_model == Some(*model)
            && self.last_view == Some(*view)
            && self.projected.len() == positions.len()
        {
            return;
        }

        self.projected.clear();
        self.depth_recips.clear();
        self.projected.reserve(positions.len());
        self.depth_recips.reserve(positions.len());

        for &position in positions {
            let view_position = view.transform_point3(model.transform_point3(position));
            self.projected
                .push(matrix::project_point(&self.projection, view_position));
            self.depth_recips.push(matrix::depth_recip(view_position.z));
        }

        self.last_model = Some(*model);
        self.last_view = Some(*view);
        self.recompute_count += 1;
    }

    /// Projected vertices (NDC-space) from the last rebuild.
    pub fn projected(&self) -> &[Vec3] {
        &self.projected
    }

    /// Per-vertex depth reciprocals, 1:1 with [`projected`](Self::projected).
    pub fn depth_recips(&self) -> &[f32] {
        &self.depth_recips
    }

    /// Number of buffer rebuilds performed so far.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
