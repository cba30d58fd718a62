//! Renderer module — the backend seam of the crate.
//!
//! The numeric core never talks to a GPU directly. Each frame it builds
//! [`DrawSubmission`]s (byte buffers plus a pipeline selector and an MVP)
//! and hands them to a [`GraphicsBackend`]. [`HeadlessBackend`] is the
//! GPU-free implementation used by tests and scripted runs; a windowed
//! backend plugs in behind the same trait.

mod backend;
mod headless;

pub use backend::{DrawSubmission, GraphicsBackend, PipelineKind};
pub use headless::{HeadlessBackend, RecordedDraw};
