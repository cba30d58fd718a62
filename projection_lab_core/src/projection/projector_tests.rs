use glam::{Affine3A, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::projection::{project_point, DepthRange, ProjectionParams};

use super::*;

fn test_params() -> ProjectionParams {
    ProjectionParams {
        aspect_ratio: 1.0,
        vertical_fov: FRAC_PI_2,
        near: 1.0,
        far: 10.0,
        depth_range: DepthRange::NegativeOneToOne,
    }
}

fn test_positions() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.5, 0.25),
        Vec3::new(-0.5, 1.0, -0.25),
    ]
}

// ============================================================================
// Projection results
// ============================================================================

#[test]
fn test_buffers_match_input_length() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));

    projector.project(&positions, &model, &Affine3A::IDENTITY);

    assert_eq!(projector.projected().len(), positions.len());
    assert_eq!(projector.depth_recips().len(), positions.len());
}

#[test]
fn test_depth_recips_are_view_space_reciprocals() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let view = Affine3A::IDENTITY;

    projector.project(&positions, &model, &view);

    for (position, recip) in positions.iter().zip(projector.depth_recips()) {
        let view_z = model.transform_point3(*position).z;
        assert_eq!(*recip, 1.0 / view_z);
    }
}

#[test]
fn test_projected_vertices_match_direct_projection() {
    let params = test_params();
    let mut projector = MeshProjector::new(params);
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.5, -0.5, 6.0));
    let view = Affine3A::from_translation(Vec3::new(0.0, 0.25, 0.0)).inverse();

    projector.project(&positions, &model, &view);

    let projection = params.matrix();
    for (position, projected) in positions.iter().zip(projector.projected()) {
        let view_position = view.transform_point3(model.transform_point3(*position));
        assert_eq!(*projected, project_point(&projection, view_position));
    }
}

// ============================================================================
// Memoization
// ============================================================================

#[test]
fn test_static_inputs_do_not_recompute() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let view = Affine3A::IDENTITY;

    for _ in 0..10 {
        projector.project(&positions, &model, &view);
    }
    assert_eq!(projector.recompute_count(), 1);
}

#[test]
fn test_view_change_recomputes_once() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));

    projector.project(&positions, &model, &Affine3A::IDENTITY);
    let moved = Affine3A::from_translation(Vec3::new(0.0, 1.0, 0.0)).inverse();
    projector.project(&positions, &model, &moved);
    projector.project(&positions, &model, &moved);

    assert_eq!(projector.recompute_count(), 2);
}

#[test]
fn test_model_change_recomputes() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();

    projector.project(
        &positions,
        &Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0)),
        &Affine3A::IDENTITY,
    );
    projector.project(
        &positions,
        &Affine3A::from_translation(Vec3::new(0.0, 0.0, 6.0)),
        &Affine3A::IDENTITY,
    );

    assert_eq!(projector.recompute_count(), 2);
}

#[test]
fn test_set_params_invalidates_only_on_change() {
    let params = test_params();
    let mut projector = MeshProjector::new(params);
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let view = Affine3A::IDENTITY;

    projector.project(&positions, &model, &view);

    // Identical params: no invalidation, no rebuild.
    projector.set_params(params);
    projector.project(&positions, &model, &view);
    assert_eq!(projector.recompute_count(), 1);

    // Changed FOV: rebuild on next project.
    projector.set_params(ProjectionParams {
        vertical_fov: 1.0,
        ..params
    });
    projector.project(&positions, &model, &view);
    assert_eq!(projector.recompute_count(), 2);
}

#[test]
fn test_vertex_count_change_recomputes() {
    let mut projector = MeshProjector::new(test_params());
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let view = Affine3A::IDENTITY;

    let positions = test_positions();
    projector.project(&positions, &model, &view);

    let mut more = positions.clone();
    more.push(Vec3::new(0.1, 0.1, 0.1));
    projector.project(&more, &model, &view);

    assert_eq!(projector.recompute_count(), 2);
    assert_eq!(projector.projected().len(), more.len());
    assert_eq!(projector.depth_recips().len(), more.len());
}

#[test]
fn test_invalidate_forces_rebuild() {
    let mut projector = MeshProjector::new(test_params());
    let positions = test_positions();
    let model = Affine3A::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let view = Affine3A::IDENTITY;

    projector.project(&positions, &model, &view);
    projector.invalidate();
    projector.project(&positions, &model, &view);

    assert_eq!(projector.recompute_count(), 2);
}
