//! Render module — the mode state machine and the per-process render state.
//!
//! [`RenderState`] is the explicitly-owned replacement for what would
//! otherwise be frame-loop globals: the live camera, the render mode, the
//! projection parameters, and the memoized mesh projector. The frame loop
//! owns exactly one and passes it by reference; nothing in here touches
//! process-wide state.

mod mode;
mod state;

pub use mode::{PinnedState, ProjectedView, RenderMode};
pub use state::{RenderState, RenderStateDesc};
