/// GPU-free backend that records what it is asked to draw.
///
/// Stands in for a real device in unit and integration tests: it
/// enforces the begin/draw/end protocol, counts draws per pipeline, and
/// keeps the last submission's metadata for assertions.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lab_trace;

use super::backend::{DrawSubmission, GraphicsBackend, PipelineKind};

/// Metadata captured from one [`DrawSubmission`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub pipeline: PipelineKind,
    pub position_bytes: usize,
    pub uv_bytes: Option<usize>,
    pub depth_recip_bytes: Option<usize>,
    pub index_bytes: Option<usize>,
    pub element_count: u32,
    pub mvp: [f32; 16],
}

/// Recording backend. See the module docs.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    in_frame: bool,
    frames_completed: u64,
    draws: Vec<RecordedDraw>,
    draws_by_pipeline: HashMap<PipelineKind, u64>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames completed so far (begin/end pairs).
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    /// Draws recorded in the current frame, in submission order.
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Total draws submitted with the given pipeline across all frames.
    pub fn draw_count(&self, pipeline: PipelineKind) -> u64 {
        self.draws_by_pipeline.get(&pipeline).copied().unwrap_or(0)
    }

    /// The most recent submission, if any.
    pub fn last_draw(&self) -> Option<&RecordedDraw> {
        self.draws.last()
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn begin_frame(&mut self) -> Result<()> {
        if self.in_frame {
            return Err(Error::BackendError(
                "begin_frame called while a frame is already open".to_string(),
            ));
        }
        self.in_frame = true;
        self.draws.clear();
        Ok(())
    }

    fn draw(&mut self, submission: &DrawSubmission<'_>) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError(
                "draw called outside begin_frame/end_frame".to_string(),
            ));
        }
        lab_trace!(
            "projlab::HeadlessBackend",
            "draw {:?}: {} elements",
            submission.pipeline,
            submission.element_count
        );
        *self
            .draws_by_pipeline
            .entry(submission.pipeline)
            .or_insert(0) += 1;
        self.draws.push(RecordedDraw {
            pipeline: submission.pipeline,
            position_bytes: submission.positions.len(),
            uv_bytes: submission.uvs.map(<[u8]>::len),
            depth_recip_bytes: submission.depth_recips.map(<[u8]>::len),
            index_bytes: submission.indices.map(<[u8]>::len),
            element_count: submission.element_count,
            mvp: submission.mvp,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError(
                "end_frame called without begin_frame".to_string(),
            ));
        }
        self.in_frame = false;
        self.frames_completed += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
