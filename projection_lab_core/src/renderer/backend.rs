/// Backend trait and the draw submission it consumes.

use crate::error::Result;

/// Which pipeline a submission is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// Textured mesh, full MVP in the vertex stage.
    Standard,
    /// Pre-projected mesh with per-vertex depth reciprocals; the pixel
    /// stage divides the interpolated UVs back out.
    PerspectiveCorrect,
    /// Untextured line list (frustum wireframes).
    Lines,
}

/// One draw call's worth of data, already laid out for upload.
///
/// Buffers are borrowed byte slices so a backend can copy them straight
/// into staging memory without knowing the vertex types. `uvs` and
/// `depth_recips` are only present for the pipelines that consume them,
/// and `indices` is `None` for non-indexed draws (lines).
#[derive(Debug, Clone, Copy)]
pub struct DrawSubmission<'a> {
    pub pipeline: PipelineKind,
    pub positions: &'a [u8],
    pub uvs: Option<&'a [u8]>,
    pub depth_recips: Option<&'a [u8]>,
    pub indices: Option<&'a [u8]>,
    /// Index count for indexed draws, vertex count otherwise.
    pub element_count: u32,
    /// Column-major MVP for the uniform push.
    pub mvp: [f32; 16],
}

/// The seam between the numeric core and whatever presents pixels.
///
/// Call order per frame: `begin_frame`, any number of `draw`s,
/// `end_frame`. Implementations report misuse and device loss through
/// [`Error::BackendError`](crate::error::Error::BackendError).
pub trait GraphicsBackend {
    fn begin_frame(&mut self) -> Result<()>;
    fn draw(&mut self, submission: &DrawSubmission<'_>) -> Result<()>;
    fn end_frame(&mut self) -> Result<()>;
}
